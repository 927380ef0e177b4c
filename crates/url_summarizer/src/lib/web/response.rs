use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::PipelineError;

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub url: String,
    pub summary: String,
    pub summarized_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// `input`, `fetch` or `llm`
    pub kind: String,
    pub error: String,
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let status = match self {
            PipelineError::Input(_) => StatusCode::BAD_REQUEST,
            PipelineError::Fetch(_) | PipelineError::Llm(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(ErrorResponse {
            kind: self.kind().to_string(),
            error: self.user_message(),
        });

        (status, body).into_response()
    }
}
