//! Shared error types for the services crate.

use thiserror::Error;

use folio_core::model::{ContactError, ProfileError, ProjectError, SkillError};

/// Errors emitted by contact gateways.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContactGatewayError {
    #[error("contact endpoint is not a valid http(s) URL: {raw}")]
    InvalidEndpoint { raw: String },
    #[error("contact endpoint returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `ContactService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContactServiceError {
    #[error(transparent)]
    Invalid(#[from] ContactError),
    #[error(transparent)]
    Gateway(#[from] ContactGatewayError),
}

/// Errors emitted while assembling the profile content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProfileServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Skill(#[from] SkillError),
    #[error(transparent)]
    Project(#[from] ProjectError),
}
