use crate::errors::ApiError;
use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use tokio_util::io::ReaderStream;

/// Serves a resolved resource, streamed above `streaming_threshold_bytes`
/// and read into memory below it
pub async fn serve_from_disk(file: PathBuf, streaming_threshold_bytes: u64) -> Result<Response, ApiError> {
    let mime_type = mime_guess::from_path(&file)
        .first_or_octet_stream()
        .to_string();

    let metadata = tokio::fs::metadata(&file).await.map_err(|e| {
        tracing::warn!(
            "serve_resource: Failed to get metadata for '{}': {}",
            file.display(),
            e
        );
        ApiError::NotFound
    })?;

    let file_size = metadata.len();

    if file_size > streaming_threshold_bytes {
        stream_large_file(file, mime_type, file_size).await
    } else {
        load_small_file(file, mime_type).await
    }
}

async fn stream_large_file(
    file: PathBuf,
    mime_type: String,
    file_size: u64,
) -> Result<Response, ApiError> {
    tracing::debug!(
        "serve_resource: streaming '{}' ({:.2} MB)",
        file.display(),
        file_size as f64 / 1024.0 / 1024.0
    );

    let handle = tokio::fs::File::open(&file).await.map_err(|e| {
        tracing::error!(
            "serve_resource: Failed to open '{}': {}",
            file.display(),
            e
        );
        ApiError::NotFound
    })?;

    let body = Body::from_stream(ReaderStream::new(handle));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime_type),
            (header::CONTENT_LENGTH, file_size.to_string()),
        ],
        body,
    )
        .into_response())
}

async fn load_small_file(file: PathBuf, mime_type: String) -> Result<Response, ApiError> {
    let content = tokio::fs::read(&file).await.map_err(|e| {
        tracing::error!(
            "serve_resource: Failed to read '{}': {}",
            file.display(),
            e
        );
        ApiError::NotFound
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime_type)],
        content,
    )
        .into_response())
}
