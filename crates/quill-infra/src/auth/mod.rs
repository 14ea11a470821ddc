//! Authentication implementations.

mod google;
mod password;

pub use google::{GoogleConfig, GoogleOAuth};
pub use password::Argon2PasswordService;
