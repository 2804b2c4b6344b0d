//! Router idiom classification.
//!
//! Gantry never parses Go — it scans raw file content for characteristic
//! substrings. Each supported routing idiom is described once by an
//! [`IdiomDef`] in [`IDIOM_REGISTRY`]: its detection indicators and the
//! line-level anchor patterns the insertion resolver needs. Registry order
//! is the detection priority order.
//!
//! False positives and negatives are expected at this heuristic level; the
//! wiring pipeline degrades to manual instructions rather than guessing
//! harder.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── RouterIdiom ───────────────────────────────────────────────────────────────

/// A recognizable routing-framework usage pattern.
///
/// Derived from entry-file content once per invocation; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterIdiom {
    Chi,
    Gin,
    Gorilla,
    PlainHttp,
}

impl RouterIdiom {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chi => "chi",
            Self::Gin => "gin",
            Self::Gorilla => "gorilla",
            Self::PlainHttp => "net/http",
        }
    }

    /// Which snippet family this idiom's middleware implementations use.
    ///
    /// Gin middleware are `func() gin.HandlerFunc`; everything else wraps
    /// `http.Handler`.
    pub const fn family(&self) -> IdiomFamily {
        match self {
            Self::Gin => IdiomFamily::Gin,
            _ => IdiomFamily::NetHttp,
        }
    }

    fn def(&self) -> &'static IdiomDef {
        IDIOM_REGISTRY
            .iter()
            .find(|def| def.idiom == *self)
            // Registry covers every variant; see `registry_is_total` test.
            .unwrap_or(&IDIOM_REGISTRY[0])
    }

    /// The line patterns that identify this idiom's router-construction call.
    pub fn router_ctor_patterns(&self) -> &'static [&'static str] {
        self.def().router_ctor
    }

    /// The substring that identifies an existing middleware-use line.
    pub fn use_marker(&self) -> &'static str {
        self.def().use_marker
    }

    /// Route-definition / server-construction patterns used as the fallback
    /// insertion anchor when no middleware is registered yet.
    pub fn fallback_anchor_patterns(&self) -> &'static [&'static str] {
        self.def().fallback_anchors
    }

    /// The registration statement for this idiom, tab-indented, with the
    /// middleware symbol substituted in.
    pub fn registration_line(&self, symbol: &str) -> String {
        self.def().registration.replace("{{SYMBOL}}", symbol)
    }
}

impl fmt::Display for RouterIdiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Middleware snippet family (see [`RouterIdiom::family`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdiomFamily {
    NetHttp,
    Gin,
}

// ── Registry ─────────────────────────────────────────────────────────────────

/// Describes one routing idiom: how to detect it and where registrations go.
#[derive(Debug, Clone, Copy)]
pub struct IdiomDef {
    pub idiom: RouterIdiom,

    /// Characteristic substrings: import paths, constructor calls,
    /// method-call fragments.
    pub indicators: &'static [&'static str],

    /// How many indicators must be present for this idiom to qualify.
    /// Plain net/http has fewer distinguishing tokens, so its threshold is 1.
    pub threshold: usize,

    /// Router-construction call patterns (empty for plain net/http — there
    /// is no router object to construct).
    pub router_ctor: &'static [&'static str],

    /// Marker identifying an existing middleware registration line.
    pub use_marker: &'static str,

    /// Route-definition / server-construction anchors, tried in file order
    /// when the file has no registrations yet.
    pub fallback_anchors: &'static [&'static str],

    /// Registration statement template; `{{SYMBOL}}` is replaced with the
    /// registered middleware symbol. Assumes the layouts' `r` router /
    /// `handler` wrapper naming.
    pub registration: &'static str,
}

/// Single source of truth for idiom detection and anchoring.
///
/// Order is the detection priority order: when several idioms reach their
/// indicator threshold, the first entry here wins (deterministic tie-break).
pub static IDIOM_REGISTRY: &[IdiomDef] = &[
    IdiomDef {
        idiom: RouterIdiom::Chi,
        indicators: &["github.com/go-chi/chi", "chi.NewRouter(", "chi.Router"],
        threshold: 2,
        router_ctor: &["chi.NewRouter("],
        use_marker: ".Use(",
        fallback_anchors: &[
            "r.Get(",
            "r.Post(",
            "r.Put(",
            "r.Delete(",
            "r.Route(",
            "r.Mount(",
            "http.ListenAndServe(",
        ],
        registration: "\tr.Use(middleware.{{SYMBOL}})",
    },
    IdiomDef {
        idiom: RouterIdiom::Gin,
        indicators: &[
            "github.com/gin-gonic/gin",
            "gin.Default(",
            "gin.New(",
            "gin.Engine",
        ],
        threshold: 2,
        router_ctor: &["gin.Default(", "gin.New("],
        use_marker: ".Use(",
        fallback_anchors: &["r.GET(", "r.POST(", "r.PUT(", "r.DELETE(", "r.Run("],
        registration: "\tr.Use(middleware.{{SYMBOL}}())",
    },
    IdiomDef {
        idiom: RouterIdiom::Gorilla,
        indicators: &["github.com/gorilla/mux", "mux.NewRouter(", "mux.Router"],
        threshold: 2,
        router_ctor: &["mux.NewRouter("],
        use_marker: ".Use(",
        fallback_anchors: &["r.HandleFunc(", "r.PathPrefix(", "http.ListenAndServe("],
        registration: "\tr.Use(middleware.{{SYMBOL}})",
    },
    IdiomDef {
        idiom: RouterIdiom::PlainHttp,
        indicators: &[
            "http.NewServeMux(",
            "http.HandleFunc(",
            "http.ListenAndServe(",
        ],
        threshold: 1,
        router_ctor: &[],
        use_marker: "middleware.",
        fallback_anchors: &["http.ListenAndServe("],
        registration: "\thandler = middleware.{{SYMBOL}}(handler)",
    },
];

// ── Detection ─────────────────────────────────────────────────────────────────

/// Classify the routing idiom used in `content`.
///
/// An idiom qualifies when at least [`IdiomDef::threshold`] of its
/// indicators are present. The first qualifying entry in [`IDIOM_REGISTRY`]
/// wins. When nothing qualifies the result defaults to [`RouterIdiom::Chi`]
/// — a documented heuristic default, not an error: generated projects are
/// chi-first and the downstream resolver fails safe on a mismatch.
pub fn detect_idiom(content: &str) -> RouterIdiom {
    for def in IDIOM_REGISTRY {
        let hits = def
            .indicators
            .iter()
            .filter(|needle| content.contains(*needle))
            .count();
        if hits >= def.threshold {
            tracing::debug!(idiom = %def.idiom, hits, "router idiom detected");
            return def.idiom;
        }
    }
    tracing::debug!("no idiom indicators matched, defaulting to chi");
    RouterIdiom::Chi
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_total() {
        for idiom in [
            RouterIdiom::Chi,
            RouterIdiom::Gin,
            RouterIdiom::Gorilla,
            RouterIdiom::PlainHttp,
        ] {
            let entries = IDIOM_REGISTRY.iter().filter(|d| d.idiom == idiom).count();
            assert_eq!(entries, 1, "registry entries for {idiom}");
        }
    }

    #[test]
    fn detects_chi() {
        let content = r#"
import (
	"github.com/go-chi/chi/v5"
)

func main() {
	r := chi.NewRouter()
}
"#;
        assert_eq!(detect_idiom(content), RouterIdiom::Chi);
    }

    #[test]
    fn detects_gin() {
        let content = r#"
import "github.com/gin-gonic/gin"

func main() {
	r := gin.Default()
	r.Run(":8080")
}
"#;
        assert_eq!(detect_idiom(content), RouterIdiom::Gin);
    }

    #[test]
    fn detects_gorilla() {
        let content = r#"
import "github.com/gorilla/mux"

func main() {
	r := mux.NewRouter()
}
"#;
        assert_eq!(detect_idiom(content), RouterIdiom::Gorilla);
    }

    #[test]
    fn detects_plain_http_with_single_indicator() {
        // Plain net/http qualifies with one hit; router idioms need two.
        let content = "func main() {\n\thttp.ListenAndServe(\":8080\", nil)\n}\n";
        assert_eq!(detect_idiom(content), RouterIdiom::PlainHttp);
    }

    #[test]
    fn router_idiom_beats_plain_http_on_shared_tokens() {
        // A chi entry file also calls http.ListenAndServe; priority order
        // must classify it as chi, not plain net/http.
        let content = r#"
import "github.com/go-chi/chi/v5"

func main() {
	r := chi.NewRouter()
	http.ListenAndServe(":8080", r)
}
"#;
        assert_eq!(detect_idiom(content), RouterIdiom::Chi);
    }

    #[test]
    fn tie_break_prefers_registry_order() {
        // Both chi and gorilla reach their thresholds; chi is first in the
        // priority order and must win.
        let content = r#"
import (
	"github.com/go-chi/chi/v5"
	"github.com/gorilla/mux"
)

func main() {
	a := chi.NewRouter()
	b := mux.NewRouter()
	_, _ = a, b
}
"#;
        assert_eq!(detect_idiom(content), RouterIdiom::Chi);
    }

    #[test]
    fn unknown_content_defaults_to_chi() {
        assert_eq!(detect_idiom("package main\n"), RouterIdiom::Chi);
        assert_eq!(detect_idiom(""), RouterIdiom::Chi);
    }

    #[test]
    fn gin_family_is_distinct() {
        assert_eq!(RouterIdiom::Gin.family(), IdiomFamily::Gin);
        assert_eq!(RouterIdiom::Chi.family(), IdiomFamily::NetHttp);
        assert_eq!(RouterIdiom::PlainHttp.family(), IdiomFamily::NetHttp);
    }
}
