use axum::http::StatusCode;
use rollbook_core::AppError;
use rollbook_db::StoreError;
use rollbook_models::Role;
use rollbook_models::validation::format_errors;
use validator::ValidationErrors;

/// Failures of the identity and credential operations.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    #[error("{role} with this {key} already exists")]
    DuplicateIdentity { role: Role, key: &'static str },

    #[error("{role} not found")]
    NotFound { role: Role },

    #[error("Invalid role '{0}', expected Student or Teacher")]
    InvalidRole(String),

    #[error("Incorrect password")]
    InvalidCredentials,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IdentityError {
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        Self::Validation(format_errors(errors))
    }

    pub fn from_store(role: Role, err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { key } => Self::DuplicateIdentity { role, key },
            other => Self::Internal(anyhow::Error::new(other)),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateIdentity { .. } | Self::InvalidRole(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used as a metrics dimension.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::DuplicateIdentity { .. } => "duplicate_identity",
            Self::NotFound { .. } => "not_found",
            Self::InvalidRole(_) => "invalid_role",
            Self::InvalidCredentials => "invalid_credentials",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Internal(cause) => AppError::internal(cause),
            other => AppError::new(other.status(), other),
        }
    }
}
