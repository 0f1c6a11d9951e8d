//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::DomainError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 Problem Details for HTTP API errors
#[derive(Debug, Serialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    #[serde(rename = "type")]
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    /// Create a new Problem Details response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add instance URI
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: DomainError) -> Problem {
    match error {
        DomainError::Validation { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Error").with_detail(message)
        }

        DomainError::MissingFields { fields } => Problem::new(
            StatusCode::BAD_REQUEST,
            "Missing Required Fields",
        )
        .with_detail(format!("Champs obligatoires manquants: {}", fields.join(", "))),

        DomainError::NotFound { resource, id } => Problem::new(
            StatusCode::NOT_FOUND,
            format!("{} Not Found", capitalize(&resource)),
        )
        .with_detail(format!(
            "{} avec l'identifiant '{}' est introuvable",
            capitalize(&resource),
            id
        )),

        DomainError::Duplicate { field, value } => Problem::new(
            StatusCode::CONFLICT,
            "Duplicate Value",
        )
        .with_detail(format!(
            "La valeur '{}' existe déjà pour le champ '{}'",
            value, field
        )),

        DomainError::ForeignKey { constraint } => Problem::new(
            StatusCode::CONFLICT,
            "Reference Conflict",
        )
        .with_detail(format!(
            "Référence invalide ou encore utilisée ({})",
            constraint
        )),

        DomainError::InsufficientStock {
            piece_id,
            requested,
            available,
        } => Problem::new(StatusCode::CONFLICT, "Insufficient Stock").with_detail(format!(
            "Stock insuffisant pour la pièce {}: demandé {}, disponible {}",
            piece_id, requested, available
        )),

        DomainError::Auth { reason } => {
            Problem::new(StatusCode::UNAUTHORIZED, "Authentication Failed").with_detail(reason)
        }

        DomainError::Internal => Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
        )
        .with_detail("Une erreur inattendue est survenue"),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
