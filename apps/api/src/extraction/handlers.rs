//! Axum route handlers for the Profile API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub user_id: Uuid,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// Parses on the blocking pool, then stores and returns the profile.
async fn parse_and_store(state: &AppState, user_id: Uuid, text: String) -> Result<Profile, AppError> {
    let parser = state.parser.clone();
    let profile = tokio::task::spawn_blocking(move || parser.parse(user_id, &text))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("résumé parsing task failed: {e}")))?;
    state.profiles.save(profile.clone()).await?;
    info!(
        "Stored profile {} for user {} ({} experiences, {} educations, {} skills)",
        profile.id,
        user_id,
        profile.fields.experiences.len(),
        profile.fields.educations.len(),
        profile.fields.skills.len()
    );
    Ok(profile)
}

/// POST /api/v1/profile/parse
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(req): Json<ParseResumeRequest>,
) -> Result<Json<Profile>, AppError> {
    if req.content.trim().is_empty() {
        return Err(AppError::Validation("content must not be empty".to_string()));
    }
    let profile = parse_and_store(&state, req.user_id, req.content).await?;
    Ok(Json(profile))
}

/// POST /api/v1/profile/upload
/// Multipart fields: `user_id` (UUID) and `file` (PDF or plain text).
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Profile>, AppError> {
    let mut user_id = None;
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        match field.name().map(str::to_owned).as_deref() {
            Some("user_id") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid user_id field: {e}")))?;
                let parsed = raw
                    .trim()
                    .parse::<Uuid>()
                    .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))?;
                user_id = Some(parsed);
            }
            Some("file") => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid file field: {e}")))?;
                upload = Some((content_type, bytes));
            }
            _ => {}
        }
    }

    let user_id = user_id.ok_or_else(|| AppError::Validation("Missing user_id field".to_string()))?;
    let (content_type, bytes) =
        upload.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    let limit = state.config.max_upload_bytes;
    if bytes.len() > limit {
        return Err(AppError::Validation(format!(
            "File is {} bytes, above the {limit} byte upload limit",
            bytes.len()
        )));
    }

    info!(
        "Extracting résumé text for user {user_id}: {} bytes of {content_type}",
        bytes.len()
    );
    let extractor = state.extractor.clone();
    let text = tokio::task::spawn_blocking(move || extractor.extract(&bytes, &content_type))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("text extraction task failed: {e}")))??;

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the uploaded file".to_string(),
        ));
    }

    let profile = parse_and_store(&state, user_id, text).await?;
    Ok(Json(profile))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Profile>, AppError> {
    state
        .profiles
        .get(params.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", params.user_id)))
}
