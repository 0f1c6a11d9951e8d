//! Configuration for the back-office module

use serde::Deserialize;
use std::path::PathBuf;

/// Back-office module configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackofficeConfig {
    /// Root directory for uploaded images, served under `/uploads`
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,

    /// Directory for transient rendered invoice PDFs
    #[serde(default = "default_invoices_dir")]
    pub invoices_dir: PathBuf,

    /// Base URL of the front end, used to build password-reset links
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,
}

impl Default for BackofficeConfig {
    fn default() -> Self {
        Self {
            uploads_dir: default_uploads_dir(),
            invoices_dir: default_invoices_dir(),
            frontend_url: default_frontend_url(),
        }
    }
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_invoices_dir() -> PathBuf {
    PathBuf::from("factures")
}

fn default_frontend_url() -> String {
    "http://localhost:3000".to_string()
}
