//! Document assembly subsystem.
//!
//! Certificates and ledgers are described as Typst source assembled in Rust,
//! then compiled to PDF by the render engine. The split mirrors the data flow:
//! `registry` picks a certificate template, `resolver` derives the fields,
//! `header`/`layout`/`pagination` build the visual tree, `engine` produces
//! the bytes.

pub mod certificates;
pub mod common;
pub mod engine;
pub mod header;
pub mod layout;
pub mod ledgers;
pub mod pagination;
pub mod registry;
pub mod resolver;
pub mod routes;
pub mod summons;
pub mod validation;

pub use engine::TypstRenderEngine;
pub use registry::{CertificateKind, RenderedCertificate};

use thiserror::Error;

use crate::official::models::Official;
use crate::resident::models::Resident;
use crate::settings::models::Settings;

/// Errors that can occur while assembling or rendering a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unknown certificate type '{0}'")]
    UnknownKind(String),
    #[error("no resident with id {0}")]
    UnknownResident(i64),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Validation(String),
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteSource(#[source] std::io::Error),
    #[error("failed to write document asset '{0}': {1}")]
    WriteAsset(String, #[source] std::io::Error),
    #[error("Typst CLI execution failed: {0}")]
    TypstIo(#[source] std::io::Error),
    #[error("Typst CLI exited with status {0}")]
    TypstExit(i32),
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
}

impl DocumentError {
    /// Whether the error is the caller's fault (bad input) rather than ours.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownKind(_)
                | Self::UnknownResident(_)
                | Self::InvalidRequest(_)
                | Self::Validation(_)
        )
    }
}

/// A binary file (seal image, photo) that must sit next to the Typst source
/// at compile time.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentAsset {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Result of a successful PDF render.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
    pub issued_on: String,
}

/// Everything a template needs besides its own form fields.
///
/// Loaded once per render from the shared cache layer; templates only read.
/// Any of these may be missing or empty, in which case the renderers fall
/// back to placeholder text instead of failing.
#[derive(Debug, Clone, Default)]
pub struct DocumentContext {
    pub settings: Settings,
    pub officials: Vec<Official>,
    pub residents: Vec<Resident>,
}

impl DocumentContext {
    pub fn resident(&self, id: i64) -> Result<&Resident, DocumentError> {
        self.residents
            .iter()
            .find(|r| r.id == id)
            .ok_or(DocumentError::UnknownResident(id))
    }
}
