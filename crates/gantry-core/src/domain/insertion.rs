//! Insertion point resolution and content rewriting.
//!
//! This is the engineering core of the wiring subsystem: given the raw text
//! of an entry-point file, the detected [`RouterIdiom`] and the middleware's
//! ordering tier, compute where the new import and registration lines go and
//! produce the rewritten content. Everything here is pure — no I/O, no
//! side effects; the write boundary is strictly in the caller.
//!
//! Two independent concerns are resolved over the same line sequence, one
//! insertion per concern:
//!
//! - **Import placement** — the import block (parenthesized or single-line)
//!   is located and the middleware package import spliced in. A file with no
//!   recognizable import section is tolerated: the import half is skipped,
//!   never invented.
//! - **Registration placement** — idiom- and tier-aware line scan (router
//!   construction, existing `Use` lines, route/server fallback anchors).
//!   If no anchor is ever found the whole operation fails with
//!   [`InsertionError::NoInsertionPoint`].
//!
//! The scan is line-oriented substring matching, not parsing. Files that
//! deviate from the generated layouts' conventions fail towards
//! `NoInsertionPoint` (and the manual-instructions fallback), never towards
//! a corrupt write.

use thiserror::Error;

use crate::domain::idiom::RouterIdiom;
use crate::domain::middleware::{
    EARLY_KEYWORDS, LATE_KEYWORDS, MiddlewareKind, MiddlewarePosition,
};

/// Resolution failure: the registration anchor was never found.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InsertionError {
    #[error("no insertion point found for the registration call")]
    NoInsertionPoint,
}

/// Rewrite `original` so that `kind` is imported and registered.
///
/// Returns the full proposed content. The import path is
/// `<module_name>/internal/middleware`; if that package is already imported
/// the import half is skipped (no duplicate import lines).
pub fn wire_into_source(
    original: &str,
    idiom: RouterIdiom,
    kind: MiddlewareKind,
    module_name: &str,
) -> Result<String, InsertionError> {
    // split('\n') rather than lines(): the final empty element preserves a
    // trailing newline across the join below.
    let lines: Vec<&str> = original.split('\n').collect();

    let registration_at = find_registration_index(&lines, idiom, kind.position())
        .ok_or(InsertionError::NoInsertionPoint)?;
    let registration_line = idiom.registration_line(&kind.registered_symbol());

    let import_path = format!("{module_name}/internal/middleware");
    let already_imported = original.contains(&format!("\"{import_path}\""));
    let import = if already_imported {
        None
    } else {
        find_import_index(&lines).map(|(at, style)| {
            let line = match style {
                ImportStyle::Block => format!("\t\"{import_path}\""),
                ImportStyle::Single => format!("import \"{import_path}\""),
            };
            (at, line)
        })
    };

    // Splice. At most two insertions; when both land on the same index the
    // import goes first (it can only be above the registration anchor in any
    // well-formed file, equal indices are a degenerate case).
    let mut inserts: Vec<(usize, String)> = Vec::with_capacity(2);
    if let Some(import) = import {
        inserts.push(import);
    }
    inserts.push((registration_at, registration_line));

    let mut out: Vec<String> = Vec::with_capacity(lines.len() + inserts.len());
    for (i, line) in lines.iter().enumerate() {
        for (at, text) in &inserts {
            if *at == i {
                out.push(text.clone());
            }
        }
        out.push((*line).to_string());
    }
    for (at, text) in &inserts {
        if *at == lines.len() {
            out.push(text.clone());
        }
    }

    Ok(out.join("\n"))
}

// ── Import placement ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportStyle {
    /// `import ( ... )` — insert as the last entry before the closing paren.
    Block,
    /// `import "..."` — insert a second import statement right after it.
    Single,
}

/// Locate the import insertion point, if any.
///
/// Returns the index the new line is inserted *before*, plus the style.
fn find_import_index(lines: &[&str]) -> Option<(usize, ImportStyle)> {
    let mut in_block = false;
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if !in_block {
            if trimmed.starts_with("import (") {
                in_block = true;
            } else if trimmed.starts_with("import \"") {
                return Some((i + 1, ImportStyle::Single));
            }
        } else if trimmed == ")" {
            return Some((i, ImportStyle::Block));
        }
    }
    None
}

// ── Registration placement ────────────────────────────────────────────────────

/// Locate the registration insertion point (index the new line is inserted
/// *before*), or `None` when no anchor exists.
///
/// Rules, applied in a single forward pass with first-match-wins semantics
/// (except the `Late` tier, where the last `Use` line wins):
///
/// 1. A router-construction line anchors insertion immediately after it —
///    only for the `Early` tier.
/// 2. An existing middleware-use line: `Early` inserts after the first one;
///    `Middle` inserts after the first one that is not late-only (mentions a
///    late keyword and no early keyword); `Late` keeps scanning and inserts
///    after the last one.
/// 3. Only when the file contains no middleware-use line at all: the first
///    route-definition or server-construction line anchors insertion
///    immediately *before* it (registrations must precede route attachment;
///    chi panics on `Use` after routes, and the plain-http wrapper must be
///    applied before `ListenAndServe`).
fn find_registration_index(
    lines: &[&str],
    idiom: RouterIdiom,
    tier: MiddlewarePosition,
) -> Option<usize> {
    let mut late_candidate: Option<usize> = None;
    let mut fallback: Option<usize> = None;
    let mut saw_use_line = false;

    for (i, line) in lines.iter().enumerate() {
        if idiom.router_ctor_patterns().iter().any(|p| line.contains(p)) {
            if tier == MiddlewarePosition::Early {
                return Some(i + 1);
            }
            continue;
        }

        if line.contains(idiom.use_marker()) {
            saw_use_line = true;
            match tier {
                MiddlewarePosition::Early => return Some(i + 1),
                MiddlewarePosition::Middle => {
                    let lower = line.to_ascii_lowercase();
                    let late = LATE_KEYWORDS.iter().any(|k| lower.contains(k));
                    let early = EARLY_KEYWORDS.iter().any(|k| lower.contains(k));
                    if !(late && !early) {
                        return Some(i + 1);
                    }
                }
                MiddlewarePosition::Late => late_candidate = Some(i + 1),
            }
            continue;
        }

        if fallback.is_none()
            && idiom
                .fallback_anchor_patterns()
                .iter()
                .any(|p| line.contains(p))
        {
            fallback = Some(i);
        }
    }

    if let Some(at) = late_candidate {
        return Some(at);
    }
    if saw_use_line {
        // Use lines existed but every one was declined (Middle vs. a
        // late-only file). The fallback anchor is reserved for files with
        // zero registrations; give up and let the caller fall back to
        // manual instructions.
        return None;
    }
    fallback
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal synthetic entry files with zero pre-existing middleware, one
    // per idiom. Each contains the idiom's indicators, an import block, a
    // route definition, and a server start.

    const CHI_MAIN: &str = r#"package main

import (
	"net/http"

	"github.com/go-chi/chi/v5"

	"example.com/app/internal/handler"
)

func main() {
	r := chi.NewRouter()

	r.Get("/healthz", handler.Health)

	http.ListenAndServe(":8080", r)
}
"#;

    const GIN_MAIN: &str = r#"package main

import (
	"github.com/gin-gonic/gin"

	"example.com/app/internal/handler"
)

func main() {
	r := gin.Default()

	r.GET("/healthz", handler.Health)

	r.Run(":8080")
}
"#;

    const GORILLA_MAIN: &str = r#"package main

import (
	"net/http"

	"github.com/gorilla/mux"

	"example.com/app/internal/handler"
)

func main() {
	r := mux.NewRouter()

	r.HandleFunc("/healthz", handler.Health)

	http.ListenAndServe(":8080", r)
}
"#;

    const PLAIN_MAIN: &str = r#"package main

import (
	"net/http"

	"example.com/app/internal/handler"
)

func main() {
	mux := http.NewServeMux()
	mux.HandleFunc("/healthz", handler.Health)

	var handler http.Handler = mux
	http.ListenAndServe(":8080", handler)
}
"#;

    fn fixture(idiom: RouterIdiom) -> &'static str {
        match idiom {
            RouterIdiom::Chi => CHI_MAIN,
            RouterIdiom::Gin => GIN_MAIN,
            RouterIdiom::Gorilla => GORILLA_MAIN,
            RouterIdiom::PlainHttp => PLAIN_MAIN,
        }
    }

    fn occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    // ── idiom × tier matrix ───────────────────────────────────────────────

    #[test]
    fn every_idiom_tier_combination_resolves_without_existing_middleware() {
        // Regression for the fallback-anchor edge case: with zero existing
        // registrations the router-construction rule only covers Early, so
        // Middle and Late must fall through to the route/server anchor.
        let tiers = [
            (MiddlewareKind::Recovery, MiddlewarePosition::Early),
            (MiddlewareKind::Logging, MiddlewarePosition::Middle),
            (MiddlewareKind::Auth, MiddlewarePosition::Late),
        ];
        for idiom in [
            RouterIdiom::Chi,
            RouterIdiom::Gin,
            RouterIdiom::Gorilla,
            RouterIdiom::PlainHttp,
        ] {
            for (kind, tier) in tiers {
                assert_eq!(kind.position(), tier);
                let proposed = wire_into_source(fixture(idiom), idiom, kind, "example.com/app")
                    .unwrap_or_else(|e| panic!("{idiom} × {tier}: {e}"));
                assert_eq!(
                    occurrences(&proposed, &kind.registered_symbol()),
                    1,
                    "{idiom} × {tier}: symbol registered exactly once"
                );
            }
        }
    }

    // ── concrete scenarios ────────────────────────────────────────────────

    #[test]
    fn early_registers_immediately_after_router_construction() {
        let proposed = wire_into_source(
            CHI_MAIN,
            RouterIdiom::Chi,
            MiddlewareKind::Recovery,
            "example.com/app",
        )
        .unwrap();

        let lines: Vec<&str> = proposed.split('\n').collect();
        let ctor = lines
            .iter()
            .position(|l| l.contains("chi.NewRouter("))
            .unwrap();
        assert_eq!(lines[ctor + 1], "\tr.Use(middleware.RecoveryMiddleware)");
    }

    #[test]
    fn late_registers_after_existing_auth_line() {
        let original = r#"package main

import (
	"github.com/go-chi/chi/v5"

	"example.com/app/internal/middleware"
)

func main() {
	r := chi.NewRouter()
	r.Use(middleware.AuthMiddleware)

	r.Get("/", nil)
}
"#;
        let proposed = wire_into_source(
            original,
            RouterIdiom::Chi,
            MiddlewareKind::RateLimit,
            "example.com/app",
        )
        .unwrap();

        let lines: Vec<&str> = proposed.split('\n').collect();
        let auth = lines
            .iter()
            .position(|l| l.contains("AuthMiddleware"))
            .unwrap();
        assert_eq!(lines[auth + 1], "\tr.Use(middleware.RatelimitMiddleware)");
    }

    #[test]
    fn late_wins_over_multiple_use_lines() {
        let original = "r := chi.NewRouter()\nr.Use(middleware.RecoveryMiddleware)\nr.Use(middleware.LoggingMiddleware)\nr.Get(\"/\", nil)\n";
        let proposed = wire_into_source(
            original,
            RouterIdiom::Chi,
            MiddlewareKind::Timeout,
            "example.com/app",
        )
        .unwrap();

        let lines: Vec<&str> = proposed.split('\n').collect();
        let logging = lines
            .iter()
            .position(|l| l.contains("LoggingMiddleware"))
            .unwrap();
        assert_eq!(lines[logging + 1], "\tr.Use(middleware.TimeoutMiddleware)");
    }

    #[test]
    fn middle_skips_late_only_line_then_gives_up() {
        // Documented heuristic gap: use lines exist but Middle declines them
        // all, and the fallback anchor is reserved for files with zero
        // registrations. The caller degrades to manual instructions.
        let original = "r := chi.NewRouter()\nr.Use(middleware.AuthMiddleware)\n";
        let err = wire_into_source(
            original,
            RouterIdiom::Chi,
            MiddlewareKind::Logging,
            "example.com/app",
        )
        .unwrap_err();
        assert_eq!(err, InsertionError::NoInsertionPoint);
    }

    #[test]
    fn middle_accepts_line_with_early_keyword() {
        let original = "r := chi.NewRouter()\nr.Use(middleware.RecoveryMiddleware)\nr.Get(\"/\", nil)\n";
        let proposed = wire_into_source(
            original,
            RouterIdiom::Chi,
            MiddlewareKind::Logging,
            "example.com/app",
        )
        .unwrap();

        let lines: Vec<&str> = proposed.split('\n').collect();
        let recovery = lines
            .iter()
            .position(|l| l.contains("RecoveryMiddleware"))
            .unwrap();
        assert_eq!(lines[recovery + 1], "\tr.Use(middleware.LoggingMiddleware)");
    }

    #[test]
    fn fallback_inserts_before_first_route_line() {
        // Middle tier, zero existing middleware: router-construction rule
        // must not fire; the first route definition anchors the insertion.
        let proposed = wire_into_source(
            GIN_MAIN,
            RouterIdiom::Gin,
            MiddlewareKind::Compression,
            "example.com/app",
        )
        .unwrap();

        let lines: Vec<&str> = proposed.split('\n').collect();
        let route = lines.iter().position(|l| l.contains("r.GET(")).unwrap();
        assert_eq!(lines[route - 1], "\tr.Use(middleware.CompressionMiddleware())");
    }

    #[test]
    fn plain_http_wraps_before_listen_and_serve() {
        let proposed = wire_into_source(
            PLAIN_MAIN,
            RouterIdiom::PlainHttp,
            MiddlewareKind::Recovery,
            "example.com/app",
        )
        .unwrap();

        let lines: Vec<&str> = proposed.split('\n').collect();
        let serve = lines
            .iter()
            .position(|l| l.contains("http.ListenAndServe("))
            .unwrap();
        assert_eq!(
            lines[serve - 1],
            "\thandler = middleware.RecoveryMiddleware(handler)"
        );
    }

    // ── import placement ──────────────────────────────────────────────────

    #[test]
    fn import_lands_as_last_block_entry() {
        let proposed = wire_into_source(
            CHI_MAIN,
            RouterIdiom::Chi,
            MiddlewareKind::Recovery,
            "example.com/app",
        )
        .unwrap();

        let lines: Vec<&str> = proposed.split('\n').collect();
        let closing = lines.iter().position(|l| l.trim() == ")").unwrap();
        assert_eq!(lines[closing - 1], "\t\"example.com/app/internal/middleware\"");
    }

    #[test]
    fn single_line_import_gets_sibling_statement() {
        let original =
            "package main\n\nimport \"net/http\"\n\nfunc main() {\n\thttp.ListenAndServe(\":8080\", nil)\n}\n";
        let proposed = wire_into_source(
            original,
            RouterIdiom::PlainHttp,
            MiddlewareKind::Cors,
            "example.com/app",
        )
        .unwrap();

        let lines: Vec<&str> = proposed.split('\n').collect();
        let import = lines
            .iter()
            .position(|l| *l == "import \"net/http\"")
            .unwrap();
        assert_eq!(
            lines[import + 1],
            "import \"example.com/app/internal/middleware\""
        );
    }

    #[test]
    fn missing_import_section_is_tolerated() {
        // Registration half still succeeds; no import syntax is invented.
        let original = "package main\n\nfunc main() {\n\thttp.ListenAndServe(\":8080\", nil)\n}\n";
        let proposed = wire_into_source(
            original,
            RouterIdiom::PlainHttp,
            MiddlewareKind::Recovery,
            "example.com/app",
        )
        .unwrap();

        assert!(proposed.contains("middleware.RecoveryMiddleware"));
        assert!(!proposed.contains("import"));
    }

    #[test]
    fn existing_middleware_import_is_not_duplicated() {
        let original = r#"package main

import (
	"example.com/app/internal/middleware"

	"github.com/go-chi/chi/v5"
)

func main() {
	r := chi.NewRouter()
	r.Use(middleware.RecoveryMiddleware)
	r.Get("/", nil)
}
"#;
        let proposed = wire_into_source(
            original,
            RouterIdiom::Chi,
            MiddlewareKind::Logging,
            "example.com/app",
        )
        .unwrap();

        assert_eq!(
            occurrences(&proposed, "\"example.com/app/internal/middleware\""),
            1
        );
    }

    // ── failure + shape preservation ──────────────────────────────────────

    #[test]
    fn no_anchor_at_all_is_an_error() {
        assert_eq!(
            wire_into_source("package main\n", RouterIdiom::Chi, MiddlewareKind::Auth, "m")
                .unwrap_err(),
            InsertionError::NoInsertionPoint
        );
        assert_eq!(
            wire_into_source("", RouterIdiom::Chi, MiddlewareKind::Auth, "m").unwrap_err(),
            InsertionError::NoInsertionPoint
        );
    }

    #[test]
    fn trailing_newline_is_preserved() {
        let proposed = wire_into_source(
            CHI_MAIN,
            RouterIdiom::Chi,
            MiddlewareKind::Recovery,
            "example.com/app",
        )
        .unwrap();
        assert!(proposed.ends_with("}\n"));
    }

    #[test]
    fn untouched_lines_survive_verbatim() {
        let proposed = wire_into_source(
            CHI_MAIN,
            RouterIdiom::Chi,
            MiddlewareKind::Recovery,
            "example.com/app",
        )
        .unwrap();
        for line in CHI_MAIN.split('\n') {
            assert!(
                proposed.split('\n').any(|l| l == line),
                "line lost in rewrite: {line:?}"
            );
        }
    }
}
