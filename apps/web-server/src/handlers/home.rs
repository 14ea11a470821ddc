//! Home page: greeting plus one of the fixed content variants.

use actix_web::HttpResponse;
use chrono::{Local, Timelike};
use rand::Rng;

use crate::middleware::auth::CurrentUser;
use crate::views;

/// The fixed set of content variants, one shown per visit.
pub const QUOTES: [&str; 21] = [
    "The unexamined life is not worth living.",
    "Write it down. Memory is a leaky bucket.",
    "Every day is a fresh page.",
    "What you do every day matters more than what you do once in a while.",
    "A journal is a mirror with a memory.",
    "Slow down; the days are long but the years are short.",
    "You can't edit a blank page.",
    "Small steps, taken daily, become the road.",
    "The palest ink is better than the best memory.",
    "Gratitude turns what we have into enough.",
    "Begin anywhere.",
    "Your future self is reading this.",
    "Keep some room in your heart for the unimaginable.",
    "Nothing is a waste of time if you use the experience wisely.",
    "How we spend our days is how we spend our lives.",
    "The habit of writing clarifies the habit of thinking.",
    "Don't break the chain.",
    "Yesterday's entry is today's map.",
    "Attention is the rarest and purest form of generosity.",
    "Name the day before it slips away.",
    "This too shall be worth remembering.",
];

/// Greeting band for a wall-clock hour (0-23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning to Myself"
    } else if hour < 18 {
        "Good Afternoon to Myself"
    } else {
        "Good Evening to Myself"
    }
}

/// Uniform pick in [1, 21], mirroring the variant numbering.
pub fn pick_variant() -> usize {
    rand::thread_rng().gen_range(1..=QUOTES.len())
}

/// GET /home
pub async fn home(_user: CurrentUser) -> HttpResponse {
    let greeting = greeting_for_hour(Local::now().hour());
    let quote = QUOTES[pick_variant() - 1];

    views::home_page(greeting, quote)
}
