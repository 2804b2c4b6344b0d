//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`. The wiring
//! use case additionally exposes its own [`WireError`] taxonomy because its
//! variants are part of the CLI contract.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ErrorCategory, GantryError};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Layout resolution failed (no match).
    #[error("Layout resolution failed: {reason}")]
    LayoutResolution { reason: String },

    /// Layout or snippet rendering failed.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Refused to overwrite an existing file.
    #[error("File already exists: {}", path.display())]
    FileExists { path: PathBuf },

    /// Store access failed (lock poisoned, etc.).
    #[error("Layout store error")]
    StoreLockError,

    /// Project already exists at target location.
    #[error("Project already exists at {}", path.display())]
    ProjectExists { path: PathBuf },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {}: {reason}", path.display())]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LayoutResolution { reason } => vec![
                format!("Resolution failed: {}", reason),
                "Try: gantry list to see available layouts".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::FileExists { path } => vec![
                format!("Refusing to overwrite: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
            ],
            Self::StoreLockError => vec![
                "The layout store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LayoutResolution { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::FileExists { .. } | Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}

// ── WireError ────────────────────────────────────────────────────────────────

/// The public failure taxonomy of the middleware-wiring use case.
///
/// Every variant maps to one user-facing message; on any of them (except
/// `UnsupportedKind` and `AlreadyWired`, which are precondition results) the
/// CLI layer falls back to printing manual wiring instructions.
#[derive(Debug, Error)]
pub enum WireError {
    /// The requested kind is not in the middleware registry. Detected before
    /// any file is touched.
    #[error("unsupported middleware kind '{kind}'")]
    UnsupportedKind { kind: String },

    /// No entry-point file among the conventional candidates.
    #[error("no entry file found under {}", root.display())]
    EntryFileNotFound { root: PathBuf },

    /// The middleware already appears wired. Precondition result, not
    /// retryable; the file was not touched.
    #[error("'{symbol}' is already wired in {}", path.display())]
    AlreadyWired { symbol: String, path: PathBuf },

    /// The resolver never found a registration anchor.
    #[error("no insertion point found in {}", path.display())]
    NoInsertionPoint { path: PathBuf },

    /// The operator answered "no" at the confirmation prompt. A normal
    /// negative result; nothing was written.
    #[error("wiring rejected by user")]
    RejectedByUser,

    /// An underlying read/write/prompt failure.
    #[error("wiring failed: {0}")]
    Io(#[from] GantryError),
}

impl WireError {
    /// Whether the CLI should follow this error with the manual wiring
    /// instructions block.
    pub fn wants_manual_instructions(&self) -> bool {
        match self {
            Self::EntryFileNotFound { .. }
            | Self::NoInsertionPoint { .. }
            | Self::RejectedByUser
            | Self::Io(_) => true,
            Self::UnsupportedKind { .. } | Self::AlreadyWired { .. } => false,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedKind { kind } => vec![
                format!("'{}' is not a known middleware kind", kind),
                "Known kinds: recovery, cors, logging, compression, auth, ratelimit, timeout"
                    .into(),
            ],
            Self::EntryFileNotFound { root } => vec![
                format!("No main.go under {}", root.display()),
                "Checked: main.go, cmd/<project>/main.go, cmd/main.go".into(),
                "Run this command from the project root".into(),
            ],
            Self::AlreadyWired { symbol, .. } => vec![
                format!("{} is already registered — nothing to do", symbol),
            ],
            Self::NoInsertionPoint { path } => vec![
                format!("Could not find a safe place to register in {}", path.display()),
                "The entry file may not follow a recognized router idiom".into(),
                "Follow the manual wiring steps below".into(),
            ],
            Self::RejectedByUser => vec![
                "No changes were made".into(),
                "Follow the manual wiring steps below if you change your mind".into(),
            ],
            Self::Io(inner) => inner.suggestions(),
        }
    }

    /// Get error category for exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedKind { .. } | Self::AlreadyWired { .. } | Self::RejectedByUser => {
                ErrorCategory::Validation
            }
            Self::EntryFileNotFound { .. } | Self::NoInsertionPoint { .. } => {
                ErrorCategory::NotFound
            }
            Self::Io(inner) => inner.category(),
        }
    }
}
