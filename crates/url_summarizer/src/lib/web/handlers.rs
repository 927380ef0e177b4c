use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::{
    fetcher::Fetcher, web::SummaryResponse, SummarizeRequest, Summarizer, SummaryPipeline,
};

const INDEX_HTML: &str = include_str!("./index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn summarize<F, S>(
    State(pipeline): State<Arc<SummaryPipeline<F, S>>>,
    Json(request): Json<SummarizeRequest>,
) -> Response
where
    F: Fetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    let started = std::time::Instant::now();
    let result = pipeline.run(&request).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(summary) => {
            tracing::info!(elapsed_ms, "Request succeeded");
            Json(SummaryResponse {
                url: request.url.trim().to_string(),
                summary: summary.text,
                summarized_at: Utc::now(),
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, stage = %e.stage(), elapsed_ms, "Request failed");
            e.into_response()
        }
    }
}
