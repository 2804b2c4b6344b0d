//! Manual wiring instructions.
//!
//! When auto-wiring cannot or may not proceed (no entry file, no insertion
//! point, operator said no, I/O failure), the CLI prints a fixed
//! step-by-step block per middleware kind so the operator can finish the
//! job by hand. Required user-visible behavior, not a nicety.

use gantry_core::domain::{MiddlewareKind, MiddlewarePosition, RouterIdiom};

/// Render the manual wiring steps for `kind`.
///
/// `idiom` selects the registration syntax; callers pass the best hint they
/// have (the project marker's layout, a detected idiom) or `None`, which
/// falls back to chi — the same documented default the detector uses.
pub fn wiring_instructions(
    kind: MiddlewareKind,
    idiom: Option<RouterIdiom>,
    module_name: &str,
) -> String {
    let idiom = idiom.unwrap_or(RouterIdiom::Chi);
    let symbol = kind.registered_symbol();
    let registration = idiom.registration_line(&symbol);
    let tier_hint = match kind.position() {
        MiddlewarePosition::Early => "before any other registrations",
        MiddlewarePosition::Middle => "after recovery/cors, before auth-like middleware",
        MiddlewarePosition::Late => "after all other registrations",
    };

    format!(
        "Manual wiring steps for '{kind}':\n\
         \n\
         \x20 1. Create internal/middleware/{kind_file}.go defining {symbol}\n\
         \x20    (a successful `gantry add middleware {kind}` writes it for you).\n\
         \x20 2. Import the middleware package in your entry file:\n\
         \n\
         \x20        \"{module_name}/internal/middleware\"\n\
         \n\
         \x20 3. Register it, {tier_hint}:\n\
         \n\
         \x20    {registration}\n\
         \n\
         \x20 Ordering guide: recovery/cors first, logging/compression next,\n\
         \x20 auth/ratelimit/timeout last.\n",
        kind = kind,
        kind_file = kind.as_str(),
        symbol = symbol,
        module_name = module_name,
        tier_hint = tier_hint,
        registration = registration.trim_start(),
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_name_the_symbol_and_import() {
        let text = wiring_instructions(
            MiddlewareKind::Auth,
            Some(RouterIdiom::Chi),
            "example.com/app",
        );
        assert!(text.contains("AuthMiddleware"));
        assert!(text.contains("example.com/app/internal/middleware"));
        assert!(text.contains("r.Use(middleware.AuthMiddleware)"));
        assert!(text.contains("after all other registrations"));
    }

    #[test]
    fn gin_instructions_use_gin_syntax() {
        let text = wiring_instructions(
            MiddlewareKind::Recovery,
            Some(RouterIdiom::Gin),
            "example.com/app",
        );
        assert!(text.contains("r.Use(middleware.RecoveryMiddleware())"));
    }

    #[test]
    fn unknown_idiom_defaults_to_chi_syntax() {
        let text = wiring_instructions(MiddlewareKind::Cors, None, "m");
        assert!(text.contains("r.Use(middleware.CorsMiddleware)"));
    }
}
