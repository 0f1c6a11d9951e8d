//! HTTP request handlers - thin layer that delegates to domain services

pub mod auth;
pub mod directory;
pub mod inventory;
pub mod orders;

use super::error::Problem;
use axum::{extract::multipart::Multipart, http::StatusCode};
use rand::RngCore;
use std::path::Path;

/// File extensions accepted for image uploads
const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Persist the first file field of a multipart body under
/// `<uploads_dir>/<subdir>/` and return its public `/uploads/...` path.
///
/// The stored name is random, so uploads never collide and the original
/// client file name never reaches the filesystem.
async fn save_upload(
    uploads_dir: &Path,
    subdir: &str,
    mut multipart: Multipart,
) -> Result<String, Problem> {
    while let Some(field) = multipart.next_field().await.map_err(|err| {
        Problem::new(StatusCode::BAD_REQUEST, "Invalid Upload")
            .with_detail(format!("corps multipart illisible: {}", err))
    })? {
        let Some(file_name) = field.file_name().map(ToString::to_string) else {
            continue;
        };

        let extension = Path::new(&file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return Err(Problem::new(StatusCode::BAD_REQUEST, "Invalid Upload")
                .with_detail(format!(
                    "extension '{}' refusée; extensions acceptées: {}",
                    extension,
                    ALLOWED_IMAGE_EXTENSIONS.join(", ")
                )));
        }

        let data = field.bytes().await.map_err(|err| {
            Problem::new(StatusCode::BAD_REQUEST, "Invalid Upload")
                .with_detail(format!("lecture du fichier impossible: {}", err))
        })?;
        if data.is_empty() {
            return Err(Problem::new(StatusCode::BAD_REQUEST, "Invalid Upload")
                .with_detail("le fichier envoyé est vide"));
        }

        let mut bytes = [0u8; 8];
        rand::rng().fill_bytes(&mut bytes);
        let stored_name = format!("{}.{}", hex::encode(bytes), extension);

        let dir = uploads_dir.join(subdir);
        tokio::fs::create_dir_all(&dir).await.map_err(|err| {
            tracing::error!(error = %err, dir = %dir.display(), "upload dir creation failed");
            Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                .with_detail("Une erreur inattendue est survenue")
        })?;
        tokio::fs::write(dir.join(&stored_name), &data)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, file = %stored_name, "upload write failed");
                Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
                    .with_detail("Une erreur inattendue est survenue")
            })?;

        tracing::info!(file = %stored_name, subdir, size = data.len(), "file uploaded");
        return Ok(format!("/uploads/{}/{}", subdir, stored_name));
    }

    Err(Problem::new(StatusCode::BAD_REQUEST, "Invalid Upload")
        .with_detail("aucun fichier dans le corps multipart"))
}
