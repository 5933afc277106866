// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum NewerError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<NewerError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, NewerError>;

impl NewerError {
    /// Strips every context layer and returns the underlying error.
    pub fn root(&self) -> &NewerError {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = &**source;
        }
        current
    }

    /// Outermost context label, if any.
    pub fn stage(&self) -> Option<&str> {
        match self {
            Self::Context { context, .. } => Some(context),
            _ => None,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self.root(), Self::Domain(DomainError::InvalidConfiguration { .. }))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self.root(), Self::Domain(DomainError::InvalidInput { .. }))
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(InfrastructureError::Lookup { .. }))
    }

    pub fn is_session_terminated(&self) -> bool {
        matches!(self.root(), Self::Application(ApplicationError::SessionTerminated { .. }))
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Invalid input '{path}': {reason}")]
    InvalidInput { path: String, reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Session '{stage}' already terminated by an earlier error")]
    SessionTerminated { stage: String },

    #[error("Downstream sink rejected record: {reason}")]
    SinkFailed { reason: String },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to stat destination '{path}': {source}")]
    Lookup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File system operation failed: {operation} on '{path}': {source}")]
    FileSystemOperation {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} options: {details}")]
    SerializationError { format: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for NewerError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for NewerError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<NewerError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| NewerError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| NewerError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
