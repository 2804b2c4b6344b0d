//! Middleware kinds and their ordering tiers.
//!
//! # Design
//!
//! [`MiddlewareKind`] is a pure value type — `Copy`, equality-by-value, no
//! identity. The kind→tier mapping lives in a single static registry; all
//! lookups are O(n) table scans over seven entries.
//!
//! # Adding a New Kind
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`/`title` arms and the `FromStr` arm here
//! 3. Add one [`MiddlewareDef`] entry to [`MIDDLEWARE_REGISTRY`]
//! 4. Add a snippet to the component catalog in `gantry-adapters`
//! 5. Done — nothing else changes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── MiddlewareKind ────────────────────────────────────────────────────────────

/// A supported middleware kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MiddlewareKind {
    Recovery,
    Cors,
    Logging,
    Compression,
    Auth,
    RateLimit,
    Timeout,
}

impl MiddlewareKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recovery => "recovery",
            Self::Cors => "cors",
            Self::Logging => "logging",
            Self::Compression => "compression",
            Self::Auth => "auth",
            Self::RateLimit => "ratelimit",
            Self::Timeout => "timeout",
        }
    }

    /// Title-cased form of the kind, used to build the registered symbol.
    const fn title(&self) -> &'static str {
        match self {
            Self::Recovery => "Recovery",
            Self::Cors => "Cors",
            Self::Logging => "Logging",
            Self::Compression => "Compression",
            Self::Auth => "Auth",
            Self::RateLimit => "Ratelimit",
            Self::Timeout => "Timeout",
        }
    }

    /// The Go symbol this kind registers under: title-cased kind plus the
    /// `Middleware` suffix (`auth` → `AuthMiddleware`).
    ///
    /// The idempotency guard searches file content for exactly this string.
    pub fn registered_symbol(&self) -> String {
        format!("{}Middleware", self.title())
    }

    /// The ordering tier this kind belongs to.
    ///
    /// Delegates to the registry. Do not add match arms here — register
    /// kinds in [`MIDDLEWARE_REGISTRY`] instead.
    pub fn position(&self) -> MiddlewarePosition {
        MIDDLEWARE_REGISTRY
            .iter()
            .find(|def| def.kind == *self)
            .map(|def| def.position)
            // Every variant has a registry entry; see `registry_is_total` test.
            .unwrap_or(MiddlewarePosition::Late)
    }

    /// All known kinds, in registry order.
    pub fn all() -> impl Iterator<Item = MiddlewareKind> {
        MIDDLEWARE_REGISTRY.iter().map(|def| def.kind)
    }
}

impl fmt::Display for MiddlewareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MiddlewareKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recovery" | "recover" => Ok(Self::Recovery),
            "cors" => Ok(Self::Cors),
            "logging" | "logger" => Ok(Self::Logging),
            "compression" | "gzip" => Ok(Self::Compression),
            "auth" => Ok(Self::Auth),
            "ratelimit" | "rate-limit" => Ok(Self::RateLimit),
            "timeout" => Ok(Self::Timeout),
            other => Err(DomainError::UnknownMiddleware { kind: other.into() }),
        }
    }
}

// ── MiddlewarePosition ────────────────────────────────────────────────────────

/// An ordering tier, not a numeric priority.
///
/// Controls where a new registration is inserted relative to existing ones:
/// `Early` middleware must run before anything else (panic recovery, CORS
/// preflight), `Late` middleware runs closest to the handlers (auth, rate
/// limiting), `Middle` sits in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MiddlewarePosition {
    Early,
    Middle,
    Late,
}

impl MiddlewarePosition {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Middle => "middle",
            Self::Late => "late",
        }
    }
}

impl fmt::Display for MiddlewarePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Registry ─────────────────────────────────────────────────────────────────

/// Describes one middleware kind.
#[derive(Debug, Clone, Copy)]
pub struct MiddlewareDef {
    pub kind: MiddlewareKind,
    pub position: MiddlewarePosition,
    /// One-line description for `gantry list` style output and help text.
    pub description: &'static str,
}

/// Single source of truth for the kind→tier mapping.
///
/// Every known kind maps to exactly one tier (`registry_is_total` below
/// guards the invariant).
pub static MIDDLEWARE_REGISTRY: &[MiddlewareDef] = &[
    MiddlewareDef {
        kind: MiddlewareKind::Recovery,
        position: MiddlewarePosition::Early,
        description: "recover from handler panics and return 500",
    },
    MiddlewareDef {
        kind: MiddlewareKind::Cors,
        position: MiddlewarePosition::Early,
        description: "CORS headers and preflight handling",
    },
    MiddlewareDef {
        kind: MiddlewareKind::Logging,
        position: MiddlewarePosition::Middle,
        description: "request/response logging",
    },
    MiddlewareDef {
        kind: MiddlewareKind::Compression,
        position: MiddlewarePosition::Middle,
        description: "gzip response compression",
    },
    MiddlewareDef {
        kind: MiddlewareKind::Auth,
        position: MiddlewarePosition::Late,
        description: "bearer-token authentication",
    },
    MiddlewareDef {
        kind: MiddlewareKind::RateLimit,
        position: MiddlewarePosition::Late,
        description: "per-client request rate limiting",
    },
    MiddlewareDef {
        kind: MiddlewareKind::Timeout,
        position: MiddlewarePosition::Late,
        description: "per-request timeout",
    },
];

/// Keywords the insertion resolver uses to classify an *existing*
/// registration line by tier.  The late list deliberately covers only the
/// kinds whose names appear verbatim in generated registration calls.
pub static LATE_KEYWORDS: &[&str] = &["auth", "ratelimit"];
pub static EARLY_KEYWORDS: &[&str] = &["recovery", "cors"];

// ── Idempotency guard ─────────────────────────────────────────────────────────

/// Whether `kind` already appears wired in `content`.
///
/// A plain substring check against the registered symbol — the same
/// heuristic level as the rest of the wiring subsystem. This is a
/// precondition check: callers must not proceed to insertion when it
/// returns `true`.
pub fn is_wired(content: &str, kind: MiddlewareKind) -> bool {
    content.contains(&kind.registered_symbol())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_total() {
        // Every enum variant must have exactly one registry entry.
        let kinds = [
            MiddlewareKind::Recovery,
            MiddlewareKind::Cors,
            MiddlewareKind::Logging,
            MiddlewareKind::Compression,
            MiddlewareKind::Auth,
            MiddlewareKind::RateLimit,
            MiddlewareKind::Timeout,
        ];
        for kind in kinds {
            let entries = MIDDLEWARE_REGISTRY
                .iter()
                .filter(|def| def.kind == kind)
                .count();
            assert_eq!(entries, 1, "registry entries for {kind}");
        }
        assert_eq!(MIDDLEWARE_REGISTRY.len(), kinds.len());
    }

    #[test]
    fn tier_mapping_matches_table() {
        assert_eq!(MiddlewareKind::Recovery.position(), MiddlewarePosition::Early);
        assert_eq!(MiddlewareKind::Cors.position(), MiddlewarePosition::Early);
        assert_eq!(MiddlewareKind::Logging.position(), MiddlewarePosition::Middle);
        assert_eq!(
            MiddlewareKind::Compression.position(),
            MiddlewarePosition::Middle
        );
        assert_eq!(MiddlewareKind::Auth.position(), MiddlewarePosition::Late);
        assert_eq!(MiddlewareKind::RateLimit.position(), MiddlewarePosition::Late);
        assert_eq!(MiddlewareKind::Timeout.position(), MiddlewarePosition::Late);
    }

    #[test]
    fn registered_symbol_is_title_cased() {
        assert_eq!(MiddlewareKind::Auth.registered_symbol(), "AuthMiddleware");
        assert_eq!(
            MiddlewareKind::Recovery.registered_symbol(),
            "RecoveryMiddleware"
        );
        assert_eq!(
            MiddlewareKind::RateLimit.registered_symbol(),
            "RatelimitMiddleware"
        );
    }

    #[test]
    fn parse_known_kinds() {
        assert_eq!(
            "recovery".parse::<MiddlewareKind>().unwrap(),
            MiddlewareKind::Recovery
        );
        assert_eq!(
            "rate-limit".parse::<MiddlewareKind>().unwrap(),
            MiddlewareKind::RateLimit
        );
        assert_eq!(
            "GZIP".parse::<MiddlewareKind>().unwrap(),
            MiddlewareKind::Compression
        );
    }

    #[test]
    fn parse_unknown_kind_is_error() {
        assert!(matches!(
            "csrf".parse::<MiddlewareKind>(),
            Err(DomainError::UnknownMiddleware { .. })
        ));
    }

    #[test]
    fn guard_detects_wired_symbol() {
        let content = "r.Use(middleware.AuthMiddleware)\n";
        assert!(is_wired(content, MiddlewareKind::Auth));
        assert!(!is_wired(content, MiddlewareKind::Cors));
    }

    #[test]
    fn guard_is_substring_based() {
        // The guard intentionally matches anywhere in the file, including
        // imports or comments — a precondition heuristic, not a parser.
        let content = "// TODO: drop CorsMiddleware once the proxy handles it\n";
        assert!(is_wired(content, MiddlewareKind::Cors));
    }
}
