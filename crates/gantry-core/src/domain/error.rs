use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Layout '{layout}' has no content")]
    EmptyLayout { layout: String },

    #[error("Invalid layout name '{name}': {reason}")]
    InvalidLayoutName { name: String, reason: String },

    #[error("Duplicate path in layout: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {}", path.display())]
    AbsolutePathNotAllowed { path: PathBuf },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown middleware kind '{kind}'")]
    UnknownMiddleware { kind: String },

    #[error("No layout named '{name}'")]
    NoSuchLayout { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidLayout(msg) => vec![
                "The layout definition is malformed".into(),
                format!("Details: {}", msg),
            ],
            Self::EmptyLayout { layout } => vec![
                format!("Layout '{}' produces no files or directories", layout),
                "Please report this issue or use a different layout".into(),
            ],
            Self::InvalidLayoutName { name, reason } => vec![
                format!("Layout name '{}' is invalid: {}", name, reason),
                "Use lowercase letters, digits, and hyphens".into(),
            ],
            Self::UnknownMiddleware { kind } => vec![
                format!("'{}' is not a known middleware kind", kind),
                "Known kinds:".into(),
                "  • recovery, cors          (early)".into(),
                "  • logging, compression    (middle)".into(),
                "  • auth, ratelimit, timeout (late)".into(),
            ],
            Self::NoSuchLayout { name } => vec![
                format!("No built-in layout named '{}'", name),
                "Try: gantry list".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidLayout(_)
            | Self::EmptyLayout { .. }
            | Self::InvalidLayoutName { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::UnknownMiddleware { .. } | Self::NoSuchLayout { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
