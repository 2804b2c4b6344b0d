//! Wire Service - the middleware auto-wiring orchestrator.
//!
//! Drives the wiring state machine over an existing project:
//!
//! ```text
//! Start → Guarded → Scanned → Detected → Resolved → Previewed
//!                                                      │
//!                                      ┌───────────────┴─────────────┐
//!                                      ▼                             ▼
//!                                  Committed                      Aborted
//! ```
//!
//! - `Guarded`: the idempotency guard passed (middleware not yet wired)
//! - `Scanned`: the entry file was located and read
//! - `Detected`: the router idiom was classified (never fails — chi default)
//! - `Resolved`: import and registration insertion points were computed
//! - `Previewed`: the added-lines preview was shown; confirmation requested
//!   unless dry-running
//! - `Committed`: the file was overwritten (the only mutation, performed
//!   strictly after confirmation)
//! - `Aborted`: no mutation; the caller shows the manual-wiring fallback
//!
//! The guard consumes file content, so the entry file is located and read on
//! the way into it; a missing file and an already-wired file are mutually
//! exclusive, so the observable error set matches the state machine either
//! way.
//!
//! The target file is read once and written at most once per invocation.
//! Cancellation before the confirmation answer leaves the file untouched.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        error::WireError,
        ports::{ChangeApprover, Filesystem, entry_file_candidates},
    },
    domain::{
        FileRevision, MiddlewareKind, RouterIdiom, detect_idiom, is_wired, wire_into_source,
    },
};

/// One wiring invocation, fully consumed within a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    /// Raw kind string from the CLI; validated against the registry here so
    /// the `UnsupportedKind` taxonomy stays in one place.
    pub kind: String,
    pub dry_run: bool,
    pub project_root: PathBuf,
    pub module_name: String,
}

impl WireRequest {
    pub fn new(
        kind: impl Into<String>,
        project_root: impl Into<PathBuf>,
        module_name: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            dry_run: false,
            project_root: project_root.into(),
            module_name: module_name.into(),
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// What a successful run did.
#[derive(Debug, Clone)]
pub enum WireOutcome {
    /// Confirmed and written.
    Committed(WireReport),
    /// Previewed only; nothing applied.
    DryRun(WireReport),
}

impl WireOutcome {
    pub fn report(&self) -> &WireReport {
        match self {
            Self::Committed(r) | Self::DryRun(r) => r,
        }
    }
}

/// Details of a resolved wiring, for CLI display and follow-up steps.
#[derive(Debug, Clone)]
pub struct WireReport {
    pub kind: MiddlewareKind,
    pub idiom: RouterIdiom,
    pub entry_file: PathBuf,
    pub added_lines: usize,
}

/// State markers for tracing; control flow is the `wire` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WireState {
    Scanned,
    Guarded,
    Detected,
    Resolved,
    Previewed,
    Committed,
}

/// Middleware wiring orchestrator.
pub struct WireService {
    filesystem: Box<dyn Filesystem>,
    approver: Box<dyn ChangeApprover>,
}

impl WireService {
    /// Create a new wire service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, approver: Box<dyn ChangeApprover>) -> Self {
        Self {
            filesystem,
            approver,
        }
    }

    /// Wire a middleware registration into the project's entry file.
    ///
    /// This is the whole use case: guard, scan, detect, resolve, preview,
    /// and (when confirmed and not dry-running) commit the rewrite.
    #[instrument(
        skip_all,
        fields(
            kind = %request.kind,
            dry_run = request.dry_run,
            root = %request.project_root.display(),
        )
    )]
    pub fn wire(&self, request: &WireRequest) -> Result<WireOutcome, WireError> {
        let kind: MiddlewareKind =
            request.kind.parse().map_err(|_| WireError::UnsupportedKind {
                kind: request.kind.clone(),
            })?;
        let symbol = kind.registered_symbol();

        // Scan: locate and read the entry file (the guard needs content).
        let (entry_file, original) = self.locate_entry(&request.project_root)?;
        debug!(state = ?WireState::Scanned, entry = %entry_file.display(), "entry file read");

        // Guard: refuse to wire twice.
        if is_wired(&original, kind) {
            info!(%symbol, "middleware already wired, nothing to do");
            return Err(WireError::AlreadyWired {
                symbol,
                path: entry_file,
            });
        }
        debug!(state = ?WireState::Guarded, "idempotency guard passed");

        // Detect: classify the router idiom (always succeeds).
        let idiom = detect_idiom(&original);
        debug!(state = ?WireState::Detected, %idiom, "router idiom classified");

        // Resolve: compute insertion points and the rewritten content.
        let proposed = wire_into_source(&original, idiom, kind, &request.module_name)
            .map_err(|_| WireError::NoInsertionPoint {
                path: entry_file.clone(),
            })?;
        let revision = FileRevision::new(entry_file.clone(), original, proposed);
        let report = WireReport {
            kind,
            idiom,
            entry_file: entry_file.clone(),
            added_lines: revision.changes().len(),
        };
        debug!(state = ?WireState::Resolved, added = report.added_lines, "insertion resolved");

        // Preview: always shown, even when dry-running.
        let description = format!(
            "register {} ({} tier, {} idiom)",
            symbol,
            kind.position(),
            idiom
        );
        self.approver.present(&revision, &description)?;
        debug!(state = ?WireState::Previewed, "preview shown");

        if request.dry_run {
            info!("dry run, not applied");
            return Ok(WireOutcome::DryRun(report));
        }

        // Confirm, then commit. The write happens strictly after a positive
        // answer — interrupting the prompt leaves the file untouched.
        if !self.approver.confirm("Apply these changes?")? {
            warn!("wiring rejected by user");
            return Err(WireError::RejectedByUser);
        }

        self.filesystem
            .write_file(&revision.path, &revision.proposed, true)?;
        info!(state = ?WireState::Committed, entry = %revision.path.display(), "wiring committed");
        Ok(WireOutcome::Committed(report))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Try the conventional entry-file locations and read the first that
    /// exists.
    fn locate_entry(&self, root: &Path) -> Result<(PathBuf, String), WireError> {
        let project_name = root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("app")
            .to_string();

        for candidate in entry_file_candidates(root, &project_name) {
            if self.filesystem.exists(&candidate) {
                let content = self.filesystem.read_to_string(&candidate)?;
                return Ok((candidate, content));
            }
            debug!(path = %candidate.display(), "entry candidate missing");
        }

        Err(WireError::EntryFileNotFound {
            root: root.to_path_buf(),
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockChangeApprover, MockFilesystem};

    const CHI_MAIN: &str = r#"package main

import (
	"net/http"

	"github.com/go-chi/chi/v5"
)

func main() {
	r := chi.NewRouter()

	r.Get("/healthz", nil)

	http.ListenAndServe(":8080", r)
}
"#;

    fn request() -> WireRequest {
        WireRequest::new("recovery", "/proj", "example.com/proj")
    }

    /// Filesystem whose `/proj/main.go` holds `content`; all other
    /// candidates are absent.
    fn fs_with_main(content: &str) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        let owned = content.to_string();
        fs.expect_exists()
            .returning(|path| path == Path::new("/proj/main.go"));
        fs.expect_read_to_string()
            .returning(move |_| Ok(owned.clone()));
        fs
    }

    fn presenting_approver(confirm: Option<bool>) -> MockChangeApprover {
        let mut approver = MockChangeApprover::new();
        approver.expect_present().times(1).returning(|_, _| Ok(()));
        match confirm {
            Some(answer) => {
                approver
                    .expect_confirm()
                    .times(1)
                    .returning(move |_| Ok(answer));
            }
            None => {
                approver.expect_confirm().times(0);
            }
        }
        approver
    }

    #[test]
    fn unsupported_kind_fails_before_any_io() {
        let fs = MockFilesystem::new(); // any call would panic
        let approver = MockChangeApprover::new();
        let service = WireService::new(Box::new(fs), Box::new(approver));

        let err = service
            .wire(&WireRequest::new("csrf", "/proj", "m"))
            .unwrap_err();
        assert!(matches!(err, WireError::UnsupportedKind { .. }));
    }

    #[test]
    fn missing_entry_file_is_reported() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        let service = WireService::new(Box::new(fs), Box::new(MockChangeApprover::new()));

        let err = service.wire(&request()).unwrap_err();
        assert!(matches!(err, WireError::EntryFileNotFound { .. }));
    }

    #[test]
    fn already_wired_is_a_precondition_failure() {
        let wired = CHI_MAIN.replace(
            "r := chi.NewRouter()",
            "r := chi.NewRouter()\n\tr.Use(middleware.RecoveryMiddleware)",
        );
        let fs = fs_with_main(&wired);
        let service = WireService::new(Box::new(fs), Box::new(MockChangeApprover::new()));

        let err = service.wire(&request()).unwrap_err();
        match err {
            WireError::AlreadyWired { symbol, .. } => {
                assert_eq!(symbol, "RecoveryMiddleware");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn dry_run_previews_without_prompting_or_writing() {
        let mut fs = fs_with_main(CHI_MAIN);
        fs.expect_write_file().times(0);
        let approver = presenting_approver(None);
        let service = WireService::new(Box::new(fs), Box::new(approver));

        let outcome = service.wire(&request().dry_run(true)).unwrap();
        match outcome {
            WireOutcome::DryRun(report) => {
                assert_eq!(report.kind, MiddlewareKind::Recovery);
                assert_eq!(report.idiom, RouterIdiom::Chi);
                assert!(report.added_lines >= 1);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn rejection_aborts_without_writing() {
        let mut fs = fs_with_main(CHI_MAIN);
        fs.expect_write_file().times(0);
        let approver = presenting_approver(Some(false));
        let service = WireService::new(Box::new(fs), Box::new(approver));

        let err = service.wire(&request()).unwrap_err();
        assert!(matches!(err, WireError::RejectedByUser));
    }

    #[test]
    fn confirmation_commits_exactly_one_write() {
        let mut fs = fs_with_main(CHI_MAIN);
        fs.expect_write_file()
            .times(1)
            .withf(|path, content, overwrite| {
                path == Path::new("/proj/main.go")
                    && content.matches("RecoveryMiddleware").count() == 1
                    && *overwrite
            })
            .returning(|_, _, _| Ok(()));
        let approver = presenting_approver(Some(true));
        let service = WireService::new(Box::new(fs), Box::new(approver));

        let outcome = service.wire(&request()).unwrap();
        assert!(matches!(outcome, WireOutcome::Committed(_)));
    }

    #[test]
    fn no_insertion_point_propagates() {
        // An entry file with no anchors at all.
        let fs = fs_with_main("package main\n");
        let service = WireService::new(Box::new(fs), Box::new(MockChangeApprover::new()));

        let err = service.wire(&request()).unwrap_err();
        assert!(matches!(err, WireError::NoInsertionPoint { .. }));
    }

    #[test]
    fn cmd_fallback_candidate_is_scanned() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|path| path == Path::new("/proj/cmd/proj/main.go"));
        fs.expect_read_to_string()
            .returning(|_| Ok(CHI_MAIN.to_string()));
        let approver = presenting_approver(None);
        let service = WireService::new(Box::new(fs), Box::new(approver));

        let outcome = service.wire(&request().dry_run(true)).unwrap();
        assert_eq!(
            outcome.report().entry_file,
            PathBuf::from("/proj/cmd/proj/main.go")
        );
    }
}
