//! # Process Handler
//!
//! `POST /api/process`: accepts an artifact reference and answers with an
//! interview analysis report.
//!
//! ## Request Body:
//! ```json
//! {
//!   "sessionId": "4f1c...",
//!   "artifactId": "9a2b...",
//!   "artifactUrl": "https://storage/artifacts/9a2b.webm",
//!   "artifactType": "AUDIO_MIXED"
//! }
//! ```
//!
//! ## Failure:
//! Any failure while building or serializing the report, including a panic,
//! is logged and answered with `500 {"detail": "Processing failed: ..."}`.
//! Nothing is retried and no partial report is returned.

use crate::analysis::{AnalysisPipeline, ProcessRequest};
use crate::error::{AppError, AppResult};
use actix_web::{http::header::ContentType, web, HttpResponse};
use anyhow::anyhow;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info};

pub async fn process_audio(request: web::Json<ProcessRequest>) -> AppResult<HttpResponse> {
    let request = request.into_inner();
    info!(
        "Processing request for session: {}, artifact: {}",
        request.session_id, request.artifact_id
    );

    let pipeline = AnalysisPipeline::new();
    let body = run_guarded(&request.session_id, || {
        let report = pipeline.run(&request)?;
        Ok(serde_json::to_string(&report)?)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

/// Run `job`, turning both an `Err` and a panic into [`AppError::Processing`].
///
/// The failure is logged with its full cause chain before being returned.
pub fn run_guarded<T, F>(session_id: &str, job: F) -> AppResult<T>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    let result = match panic::catch_unwind(AssertUnwindSafe(job)) {
        Ok(result) => result,
        Err(payload) => Err(anyhow!(panic_message(payload.as_ref()))),
    };

    result.map_err(|err| {
        error!(
            session_id = %session_id,
            error = ?err,
            "Error processing audio for session {}: {}",
            session_id,
            err
        );
        AppError::from(err)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
