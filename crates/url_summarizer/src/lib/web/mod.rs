//! # Web surface
//!
//! A single page with credential and url inputs, backed by one json
//! endpoint that runs the summary pipeline per click.

mod handlers;
mod response;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{fetcher::Fetcher, Summarizer, SummaryPipeline};

pub use response::{ErrorResponse, SummaryResponse};

pub fn create_router<F, S>(pipeline: SummaryPipeline<F, S>) -> Router
where
    F: Fetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/summarize", post(handlers::summarize::<F, S>))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(pipeline))
}
