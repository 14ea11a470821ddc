//! Login, signup, logout and federated login handlers.

use actix_web::cookie::Cookie;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use quill_core::domain::User;
use quill_shared::forms::{LoginForm, SignupForm};

use crate::middleware::auth::SESSION_COOKIE;
use crate::middleware::error::PageResult;
use crate::state::AppState;
use crate::views;

/// GET /login
pub async fn login_form() -> HttpResponse {
    views::login_page(&[], None)
}

/// POST /login
pub async fn login(state: web::Data<AppState>, body: web::Form<LoginForm>) -> PageResult<HttpResponse> {
    let form = body.into_inner();

    let Some(user) = state.users.find_by_username(&form.username).await? else {
        let errors = vec!["This email has not been registered".to_string()];
        return Ok(views::login_page(&errors, None));
    };

    // A Google-only account has no local credential to check against
    let valid = match user.password_hash.as_deref() {
        Some(hash) => state.passwords.verify(&form.password, hash)?,
        None => false,
    };

    if !valid {
        return Ok(views::redirect("/login"));
    }

    open_session(&state, &user).await
}

/// GET /signup
pub async fn signup_form() -> HttpResponse {
    views::signup_page(&[])
}

/// POST /signup
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Form<SignupForm>,
) -> PageResult<HttpResponse> {
    let form = body.into_inner();

    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(views::signup_page(&errors));
    }

    if state.users.find_by_username(&form.username).await?.is_some() {
        let errors = vec!["A user with the given username is already registered".to_string()];
        return Ok(views::signup_page(&errors));
    }

    let password_hash = state.passwords.hash(&form.password)?;
    let user = User::with_password(form.username, password_hash);
    state.users.save(user).await?;

    // Local signup does not open a session; only federated signup does
    Ok(views::login_page(
        &[],
        Some("successfully signedup, Login to continue."),
    ))
}

/// GET /logout
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if let Err(e) = state.sessions.destroy(cookie.value()).await {
            tracing::warn!("Failed to destroy session: {}", e);
        }
    }

    let mut response = views::redirect("/login");
    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    removal.make_removal();
    if let Err(e) = response.add_removal_cookie(&removal) {
        tracing::warn!("Failed to clear session cookie: {}", e);
    }

    response
}

/// GET /auth/google
pub async fn google(state: web::Data<AppState>) -> HttpResponse {
    match &state.google {
        Some(provider) => views::redirect(&provider.authorize_url()),
        None => {
            tracing::warn!("Federated login requested but Google is not configured");
            views::redirect("/login")
        }
    }
}

/// Query string Google appends to the callback redirect.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// GET /auth/google/home
pub async fn google_callback(
    state: web::Data<AppState>,
    query: web::Query<CallbackQuery>,
) -> PageResult<HttpResponse> {
    let Some(provider) = &state.google else {
        return Ok(views::redirect("/login"));
    };

    if let Some(error) = &query.error {
        tracing::warn!("Provider declined the login: {}", error);
        return Ok(views::redirect("/login"));
    }
    let Some(code) = &query.code else {
        return Ok(views::redirect("/login"));
    };

    let subject = match provider.fetch_subject(code).await {
        Ok(subject) => subject,
        Err(e) => {
            tracing::warn!("Federated login failed: {}", e);
            return Ok(views::redirect("/login"));
        }
    };

    let user = state.users.find_or_create_by_google_id(&subject).await?;
    open_session(&state, &user).await
}

/// Open a session for `user` and send them home with the cookie set.
async fn open_session(state: &AppState, user: &User) -> PageResult<HttpResponse> {
    let token = state.sessions.create(user.id).await?;

    let cookie = Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .finish();

    let mut response = views::redirect("/home");
    if let Err(e) = response.add_cookie(&cookie) {
        tracing::error!("Failed to attach session cookie: {}", e);
        return Err(crate::middleware::error::PageError::Internal(e.to_string()));
    }

    Ok(response)
}
