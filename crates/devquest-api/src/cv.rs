//! Handlers for `/cv` endpoints — upload, latest analysis, full history.
//!
//! Uploaded files are analyzed and discarded; only the report is persisted.

use axum::{
  Json,
  extract::{Multipart, State},
};
use devquest_core::{
  activity::XpGrant, cv::CvAnalysis, engine::XpEvent, store::GameStore,
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::{AppState, error::ApiError};

fn store_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> ApiError {
  ApiError::Store(Box::new(e))
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
  #[serde(flatten)]
  pub analysis: CvAnalysis,
  pub event:    XpEvent,
}

/// `POST /cv/upload` — multipart form with a `file` field.
pub async fn upload<S>(
  State(state): State<AppState<S>>,
  mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let mut upload: Option<(String, i64)> = None;
  while let Some(field) = multipart
    .next_field()
    .await
    .map_err(|e| ApiError::BadRequest(e.to_string()))?
  {
    if field.name() != Some("file") {
      continue;
    }
    let filename = field
      .file_name()
      .map(str::to_string)
      .unwrap_or_else(|| "unknown.pdf".to_string());
    let bytes = field
      .bytes()
      .await
      .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    upload = Some((filename, bytes.len() as i64));
    break;
  }

  let Some((filename, file_size)) = upload else {
    return Err(ApiError::BadRequest("missing 'file' field".to_string()));
  };

  let report = devquest_oracle::analyze_cv(&filename, file_size);
  let grant = XpGrant::cv_upload(&filename);
  let (analysis, event) = state
    .store
    .record_cv_analysis(filename, file_size, report, grant)
    .await
    .map_err(store_err)?;

  Ok(Json(UploadResponse { analysis, event }))
}

/// `GET /cv/analysis` — the most recent analysis; 404 before any upload.
pub async fn latest<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<CvAnalysis>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let analysis = state
    .store
    .latest_cv_analysis()
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound("no CV analysis yet".to_string()))?;
  Ok(Json(analysis))
}

/// `GET /cv/analyses` — every analysis, newest first.
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Value>, ApiError>
where
  S: GameStore + Clone + Send + Sync + 'static,
{
  let analyses = state.store.list_cv_analyses().await.map_err(store_err)?;
  Ok(Json(json!({ "analyses": analyses })))
}
