//! Session extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;

use quill_core::domain::User;

use crate::state::AppState;
use crate::views;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "sid";

/// Authenticated user extractor.
///
/// Resolves the session cookie to a full `User` record on every request.
/// Use this in handlers to require a session:
/// ```ignore
/// async fn protected_page(user: CurrentUser) -> HttpResponse { ... }
/// ```
/// Any failure along the cookie -> session -> user chain means "no
/// authenticated user": the request is answered with a redirect to the
/// login page and the handler never runs.
pub struct CurrentUser(pub User);

/// Rejection produced when no valid session accompanies the request.
#[derive(Debug)]
pub struct NotAuthenticated;

impl std::fmt::Display for NotAuthenticated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no authenticated session")
    }
}

impl actix_web::ResponseError for NotAuthenticated {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        views::redirect("/login")
    }
}

impl FromRequest for CurrentUser {
    type Error = NotAuthenticated;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let cookie = req.cookie(SESSION_COOKIE);

        Box::pin(async move {
            let Some(state) = state else {
                tracing::error!("AppState not found in app data");
                return Err(NotAuthenticated);
            };
            let Some(cookie) = cookie else {
                return Err(NotAuthenticated);
            };

            let user_id = match state.sessions.resolve(cookie.value()).await {
                Ok(Some(id)) => id,
                Ok(None) => return Err(NotAuthenticated),
                Err(e) => {
                    tracing::warn!("Session lookup failed: {}", e);
                    return Err(NotAuthenticated);
                }
            };

            // A session pointing at a vanished account is not authenticated
            match state.users.find_by_id(user_id).await {
                Ok(Some(user)) => Ok(CurrentUser(user)),
                Ok(None) => Err(NotAuthenticated),
                Err(e) => {
                    tracing::warn!("User lookup for session failed: {}", e);
                    Err(NotAuthenticated)
                }
            }
        })
    }
}
