use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use crate::forms::SnippetCreateForm;
use crate::server::{AppState, ServerError};
use crate::templates::{TemplateData, CREATE_PAGE, HOME_PAGE, VIEW_PAGE};
use std::sync::Arc;

/// Run a store call on the blocking pool so it never stalls the runtime.
async fn run_blocking<F, T>(f: F) -> Result<T, ServerError>
where
    F: FnOnce() -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await??)
}

fn render(state: &AppState, page: &str, data: &TemplateData) -> Result<Html<String>, ServerError> {
    Ok(Html(state.templates.render(page, data)?))
}

/// Snippet ids in URLs must be positive integers; anything else is a 404.
fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or(ServerError::NotFound)
}

pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    let store = state.store.clone();
    let snippets = run_blocking(move || store.latest()).await?;

    render(&state, HOME_PAGE, &TemplateData::new().with_snippets(snippets))
}

pub async fn snippet_view(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, ServerError> {
    let id = parse_id(&id)?;

    let store = state.store.clone();
    let snippet = run_blocking(move || store.get(id)).await?;

    render(&state, VIEW_PAGE, &TemplateData::new().with_snippet(snippet))
}

pub async fn snippet_create(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    render(&state, CREATE_PAGE, &TemplateData::new().with_form(SnippetCreateForm::blank()))
}

pub async fn snippet_create_post(
    State(state): State<Arc<AppState>>,
    form: Result<Form<SnippetCreateForm>, FormRejection>,
) -> Result<Response, ServerError> {
    let Form(mut form) = form?;
    let Some(days) = form.validate() else {
        let page = render(&state, CREATE_PAGE, &TemplateData::new().with_form(form))?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    };

    let store = state.store.clone();
    let id = run_blocking(move || store.insert(&form.title, &form.content, days)).await?;
    tracing::debug!(id, days, "snippet created");

    Ok(Redirect::to(&format!("/snippet/view/{}", id)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        for raw in ["0", "-3", "abc", "", "1.5", "99999999999999999999"] {
            assert!(matches!(parse_id(raw), Err(ServerError::NotFound)), "{raw:?} should be rejected");
        }
    }
}
