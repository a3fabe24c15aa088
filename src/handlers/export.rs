// src/handlers/export.rs

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use serde::Serialize;

use crate::{
    error::AppError,
    export::{XLSX_CONTENT_TYPE, export_all},
    state::AppState,
    store,
};

#[derive(Debug, Serialize)]
pub struct AutoSaveResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
}

impl AutoSaveResponse {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            filepath: None,
        }
    }
}

/// Generates a workbook of every answer record and streams it back.
/// An empty log still yields a file with the header row.
pub async fn download_records(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = export_all(&state.pool, &state.config.export_dir).await?;
    let bytes = tokio::fs::read(&summary.path).await?;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", summary.file_name),
            ),
        ],
        bytes,
    ))
}

/// Saves a workbook into the export directory without returning it.
/// Failures are reported in the body rather than as an error status.
pub async fn auto_save_records(State(state): State<AppState>) -> impl IntoResponse {
    let total = match store::record_totals(&state.pool).await {
        Ok((total, _)) => total,
        Err(e) => {
            tracing::error!("Failed to count answer records: {:?}", e);
            return Json(AutoSaveResponse::failed(format!("Failed to save: {}", e)));
        }
    };

    if total == 0 {
        return Json(AutoSaveResponse::failed("No answer records to export"));
    }

    match export_all(&state.pool, &state.config.export_dir).await {
        Ok(summary) => Json(AutoSaveResponse {
            success: true,
            message: "Answer records saved".to_string(),
            filepath: Some(summary.path.display().to_string()),
        }),
        Err(e) => {
            tracing::error!("Auto-save export failed: {}", e);
            Json(AutoSaveResponse::failed(format!("Failed to save: {}", e)))
        }
    }
}
