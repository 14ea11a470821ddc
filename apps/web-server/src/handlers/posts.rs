//! Post CRUD handlers: compose, list, view, edit, delete.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{Post, User};
use quill_shared::forms::{ComposeForm, DeleteForm, EditForm};

use crate::middleware::auth::CurrentUser;
use crate::middleware::error::{PageError, PageResult};
use crate::state::AppState;
use crate::views;

/// Fetch a post by its route/body id and check it belongs to `owner`.
///
/// The shared authorization gate for view, edit and delete: a malformed
/// id, a missing post and a foreign post all come out as the same
/// not-found, so post ids leak nothing about other users' journals.
async fn owned_post(state: &AppState, post_id: &str, owner: &User) -> PageResult<Post> {
    let id: Uuid = post_id.parse().map_err(|_| PageError::NotFound)?;

    let post = state.posts.find_by_id(id).await?.ok_or(PageError::NotFound)?;
    if post.owner_id != owner.id {
        return Err(PageError::NotFound);
    }

    Ok(post)
}

/// GET /compose
pub async fn compose_form(_user: CurrentUser) -> HttpResponse {
    views::compose_page()
}

/// POST /compose
pub async fn compose(
    user: CurrentUser,
    state: web::Data<AppState>,
    body: web::Form<ComposeForm>,
) -> PageResult<HttpResponse> {
    let form = body.into_inner();

    let post = Post::new(user.0.id, form.post_title, form.post_body);
    state.posts.save(post).await?;

    Ok(views::redirect("/posts"))
}

/// GET /posts
pub async fn list(user: CurrentUser, state: web::Data<AppState>) -> PageResult<HttpResponse> {
    let posts = state.posts.find_by_owner(user.0.id).await?;
    Ok(views::posts_page(&posts))
}

/// GET /postedItems/{postId}
pub async fn show(
    user: CurrentUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let post = owned_post(&state, &path, &user.0).await?;
    Ok(views::post_page(&post))
}

/// GET /edit/{postId}
pub async fn edit_form(
    user: CurrentUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let post = owned_post(&state, &path, &user.0).await?;
    Ok(views::edit_page(&post))
}

/// POST /edit/{postId}
pub async fn edit(
    user: CurrentUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Form<EditForm>,
) -> PageResult<HttpResponse> {
    let form = body.into_inner();

    let post = owned_post(&state, &path, &user.0).await?;
    let post = post.edited(form.post_title, form.post_body);
    state.posts.save(post).await?;

    Ok(views::redirect("/posts"))
}

/// POST /delete
pub async fn delete(
    user: CurrentUser,
    state: web::Data<AppState>,
    body: web::Form<DeleteForm>,
) -> PageResult<HttpResponse> {
    let form = body.into_inner();

    let post = owned_post(&state, &form.deleted_post, &user.0).await?;
    state.posts.delete(post.id).await?;

    Ok(views::redirect("/posts"))
}
