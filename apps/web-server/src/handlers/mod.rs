//! HTTP handlers and route configuration.

mod auth;
mod home;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/login", web::get().to(auth::login_form))
        .route("/login", web::post().to(auth::login))
        .route("/auth/google", web::get().to(auth::google))
        .route("/auth/google/home", web::get().to(auth::google_callback))
        .route("/signup", web::get().to(auth::signup_form))
        .route("/signup", web::post().to(auth::signup))
        .route("/logout", web::get().to(auth::logout))
        // Session-gated pages
        .route("/home", web::get().to(home::home))
        .route("/compose", web::get().to(posts::compose_form))
        .route("/compose", web::post().to(posts::compose))
        .route("/posts", web::get().to(posts::list))
        .route("/postedItems/{postId}", web::get().to(posts::show))
        .route("/edit/{postId}", web::get().to(posts::edit_form))
        .route("/edit/{postId}", web::post().to(posts::edit))
        .route("/delete", web::post().to(posts::delete));
}
