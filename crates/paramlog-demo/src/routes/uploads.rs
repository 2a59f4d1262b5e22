use axum::Json;
use axum::extract::{Multipart, Path};
use serde::Serialize;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct UploadResponse {
    pub account_id: String,
    pub filename: Option<String>,
    pub bytes: usize,
}

pub async fn upload_avatar(
    Path(account_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut filename = None;
    let mut bytes = 0;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("avatar") {
            filename = field.file_name().map(str::to_string);
            bytes = field.bytes().await?.len();
        }
    }

    Ok(Json(UploadResponse {
        account_id,
        filename,
        bytes,
    }))
}
