use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::form::DefinitionForm;
use crate::render;

const DEFINITION_ROUTE: &str = "/definition";

type SharedForm = Arc<DefinitionForm>;

#[derive(Deserialize)]
pub(crate) struct Submission {
    #[serde(default)]
    word: String,
}

pub(crate) struct RenderError(askama::Error);

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "failed to render template");
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
    }
}

impl From<askama::Error> for RenderError {
    fn from(error: askama::Error) -> Self {
        Self(error)
    }
}

pub fn build_router(form: DefinitionForm) -> Router {
    Router::new()
        .route("/", get(form_page))
        .route(DEFINITION_ROUTE, post(find_definition))
        .with_state(Arc::new(form))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(form: DefinitionForm, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, build_router(form))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn form_page(State(form): State<SharedForm>) -> Result<Html<String>, RenderError> {
    let descriptor = form.render();
    Ok(Html(render::page(&descriptor, DEFINITION_ROUTE)?))
}

async fn find_definition(
    State(form): State<SharedForm>,
    Form(submission): Form<Submission>,
) -> Result<Html<String>, RenderError> {
    let fragment = form.on_submit(&submission.word).await;
    let region = form.render().output_region;
    Ok(Html(render::fragment_markup(&fragment, region)?))
}

async fn shutdown_signal() {
    if let Err(error) = signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for ctrl+c");
        std::future::pending::<()>().await;
    }
}
