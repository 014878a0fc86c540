use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use thiserror::Error;

use crate::directory::{DirectoryEvent, DirectoryState, StatusFilter};
use crate::display::Clock;
use crate::output::report::HtmlRenderer;
use crate::output::Renderer;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

/// Query parameters of the single route; each one replays a user event.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
    pub view: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    template: DirectoryState,
    clock: Arc<dyn Clock + Send + Sync>,
    renderer: Arc<HtmlRenderer>,
}

impl AppState {
    pub fn new(template: DirectoryState, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            template,
            clock,
            renderer: Arc::new(HtmlRenderer::default()),
        }
    }
}

/// Rebuilds the directory state a browser session would have reached.
///
/// Search and status are replayed first and only when they differ from the
/// template, so a page link that repeats the current criteria does not count
/// as a criteria change under [`PageResetPolicy::FirstPage`]. The page is
/// then checked against the narrowed list, and the detail view opened last.
///
/// [`PageResetPolicy::FirstPage`]: crate::directory::PageResetPolicy::FirstPage
pub fn replay(template: &DirectoryState, query: &BrowseQuery) -> Result<DirectoryState, String> {
    let mut state = template.clone();
    if let Some(search) = query.search.as_ref() {
        if search != state.search_term() {
            state
                .apply(DirectoryEvent::Search(search.clone()))
                .map_err(|e| e.to_string())?;
        }
    }
    if let Some(raw) = query.status.as_deref() {
        let filter = StatusFilter::parse(raw).ok_or_else(|| format!("invalid status '{raw}'"))?;
        if filter != state.status_filter() {
            state
                .apply(DirectoryEvent::FilterStatus(filter))
                .map_err(|e| e.to_string())?;
        }
    }
    if let Some(page) = query.page {
        state
            .apply(DirectoryEvent::GoToPage(page))
            .map_err(|e| e.to_string())?;
    }
    if let Some(id) = query.view.as_ref().filter(|id| !id.trim().is_empty()) {
        state
            .apply(DirectoryEvent::View(id.clone()))
            .map_err(|e| e.to_string())?;
    }
    Ok(state)
}

async fn index(State(app): State<AppState>, Query(query): Query<BrowseQuery>) -> Response {
    match replay(&app.template, &query) {
        Ok(state) => {
            let view = state.view(app.clock.today());
            tracing::debug!(
                visible = view.visible_count,
                page = view.current_page,
                "rendered directory page"
            );
            Html(app.renderer.render_view(&view)).into_response()
        }
        Err(message) => {
            tracing::info!(%message, "rejected request");
            (StatusCode::BAD_REQUEST, message).into_response()
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

pub async fn serve(
    addr: &str,
    template: DirectoryState,
    clock: Arc<dyn Clock + Send + Sync>,
) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            source: e,
        })?;
    if let Ok(local) = listener.local_addr() {
        tracing::info!(%local, "serving patient directory");
        println!(":: Listening :: http://{local}/");
    }
    axum::serve(listener, router(AppState::new(template, clock)))
        .await
        .map_err(|e| ServerError::Serve { source: e })
}
