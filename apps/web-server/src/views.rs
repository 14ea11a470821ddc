//! Page selection and rendering.
//!
//! Handlers decide *which* page or redirect to produce; this module turns
//! that decision into a response. Pages are small static HTML shells - all
//! user-entered text goes through `escape` on the way in.

use actix_web::HttpResponse;
use actix_web::http::header;

use quill_core::domain::Post;

/// 303 redirect to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Escape text for embedding in HTML element content or attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page(title: &str, body: String) -> HttpResponse {
    html(HttpResponse::Ok(), title, body)
}

fn html(mut builder: actix_web::HttpResponseBuilder, title: &str, body: String) -> HttpResponse {
    builder
        .content_type("text/html; charset=utf-8")
        .body(format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{} | Quill</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            escape(title),
            body
        ))
}

fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let items: String = errors
        .iter()
        .map(|e| format!("<li class=\"error\">{}</li>", escape(e)))
        .collect();
    format!("<ul class=\"errors\">{items}</ul>")
}

pub fn login_page(errors: &[String], success: Option<&str>) -> HttpResponse {
    let banner = success
        .map(|msg| format!("<p class=\"success\">{}</p>", escape(msg)))
        .unwrap_or_default();

    page(
        "Login",
        format!(
            "<h1>Login</h1>\n{}{}\
             <form action=\"/login\" method=\"post\">\n\
             <label>Email <input type=\"text\" name=\"username\"></label>\n\
             <label>Password <input type=\"password\" name=\"password\"></label>\n\
             <button type=\"submit\">Login</button>\n</form>\n\
             <a href=\"/auth/google\">Sign in with Google</a>\n\
             <a href=\"/signup\">Sign up</a>",
            banner,
            error_list(errors)
        ),
    )
}

pub fn signup_page(errors: &[String]) -> HttpResponse {
    page(
        "Sign up",
        format!(
            "<h1>Sign up</h1>\n{}\
             <form action=\"/signup\" method=\"post\">\n\
             <label>Email <input type=\"text\" name=\"username\"></label>\n\
             <label>Password <input type=\"password\" name=\"password\"></label>\n\
             <label>Confirm password <input type=\"password\" name=\"enteredPassword\"></label>\n\
             <button type=\"submit\">Sign up</button>\n</form>\n\
             <a href=\"/login\">Login</a>",
            error_list(errors)
        ),
    )
}

pub fn home_page(greeting: &str, quote: &str) -> HttpResponse {
    page(
        "Home",
        format!(
            "<h1>{}</h1>\n<blockquote>{}</blockquote>\n\
             <nav><a href=\"/posts\">Posts</a> <a href=\"/compose\">Compose</a> \
             <a href=\"/logout\">Logout</a></nav>",
            escape(greeting),
            escape(quote)
        ),
    )
}

pub fn compose_page() -> HttpResponse {
    page(
        "Compose",
        "<h1>Compose</h1>\n\
         <form action=\"/compose\" method=\"post\">\n\
         <label>Title <input type=\"text\" name=\"postTitle\"></label>\n\
         <label>Post <textarea name=\"postBody\"></textarea></label>\n\
         <button type=\"submit\">Publish</button>\n</form>"
            .to_string(),
    )
}

pub fn posts_page(posts: &[Post]) -> HttpResponse {
    let items: String = posts
        .iter()
        .map(|post| {
            format!(
                "<li><a href=\"/postedItems/{id}\">{title}</a> \
                 <span class=\"date\">{date}</span>\n\
                 <form action=\"/delete\" method=\"post\">\
                 <input type=\"hidden\" name=\"deletedPost\" value=\"{id}\">\
                 <button type=\"submit\">Delete</button></form></li>\n",
                id = post.id,
                title = escape(&post.title),
                date = post.created_at.format("%B %e, %Y"),
            )
        })
        .collect();

    page(
        "Posts",
        format!(
            "<h1>Posts</h1>\n<ul class=\"posts\">\n{items}</ul>\n\
             <nav><a href=\"/home\">Home</a> <a href=\"/compose\">Compose</a></nav>"
        ),
    )
}

pub fn post_page(post: &Post) -> HttpResponse {
    page(
        &post.title,
        format!(
            "<h1>{title}</h1>\n<p class=\"date\">{date}</p>\n<p>{content}</p>\n\
             <nav><a href=\"/edit/{id}\">Edit</a> <a href=\"/posts\">Back</a></nav>",
            title = escape(&post.title),
            date = post.created_at.format("%B %e, %Y"),
            content = escape(&post.content),
            id = post.id,
        ),
    )
}

pub fn edit_page(post: &Post) -> HttpResponse {
    page(
        "Edit",
        format!(
            "<h1>Edit</h1>\n\
             <form action=\"/edit/{id}\" method=\"post\">\n\
             <label>Title <input type=\"text\" name=\"postTitle\" value=\"{title}\"></label>\n\
             <label>Post <textarea name=\"postBody\">{content}</textarea></label>\n\
             <button type=\"submit\">Save</button>\n</form>",
            id = post.id,
            title = escape(&post.title),
            content = escape(&post.content),
        ),
    )
}

pub fn not_found_page() -> HttpResponse {
    html(
        HttpResponse::NotFound(),
        "Not found",
        "<h1>Not found</h1>\n<p>That post does not exist.</p>\n<a href=\"/posts\">Back</a>"
            .to_string(),
    )
}

pub fn error_page() -> HttpResponse {
    html(
        HttpResponse::InternalServerError(),
        "Something went wrong",
        "<h1>Something went wrong</h1>\n<p>Please try again.</p>".to_string(),
    )
}
