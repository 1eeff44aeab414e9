// Unified Error Handling Module
//
// Error types for the GDI wrappers and the application layer built on them

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Kind of GDI resource a wrapper owns, used to label errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    DeviceContext,
    Bitmap,
    Brush,
    Icon,
    Cursor,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::DeviceContext => "device context",
            Resource::Bitmap => "bitmap",
            Resource::Brush => "brush",
            Resource::Icon => "icon",
            Resource::Cursor => "cursor",
        };
        f.write_str(name)
    }
}

/// Errors raised by the GDI resource wrappers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GdiError {
    #[error("Failed to create/acquire/access {0}")]
    ResourceAcquisition(Resource),

    #[error("Failed to save device context state")]
    StateSave,

    #[error("Failed to select object")]
    ObjectSelection,

    #[error("Failed to transfer bits")]
    Blit,

    #[error("Failed to load bitmap from {}", path.display())]
    ImageLoad { path: PathBuf },

    #[error("Failed to get bitmap information")]
    MetadataQuery,

    #[error("{0} handle was null")]
    InvalidHandle(Resource),
}

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("GDI error: {0}")]
    Gdi(#[from] GdiError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Windows API error: {0}")]
    Windows(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type of the GDI wrappers
pub type GdiResult<T> = Result<T, GdiError>;

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convert Windows HRESULT to AppError
#[cfg(windows)]
impl From<windows::core::Error> for AppError {
    fn from(err: windows::core::Error) -> Self {
        AppError::Windows(format!("{:?}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_resource() {
        assert_eq!(
            GdiError::InvalidHandle(Resource::Bitmap).to_string(),
            "bitmap handle was null"
        );
        assert_eq!(
            GdiError::ResourceAcquisition(Resource::DeviceContext).to_string(),
            "Failed to create/acquire/access device context"
        );
    }

    #[test]
    fn gdi_errors_lift_into_app_errors() {
        let err: AppError = GdiError::Blit.into();
        assert!(matches!(err, AppError::Gdi(GdiError::Blit)));
        assert_eq!(err.to_string(), "GDI error: Failed to transfer bits");
    }
}
