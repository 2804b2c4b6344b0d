//! Component injection data model.
//!
//! A component is a single boilerplate file added to an existing project:
//! a handler, a model, a middleware implementation, or database wiring.
//! Templates are inert text with `{{VAR}}` placeholders; the catalog of
//! built-in templates lives in `gantry-adapters`.

use std::fmt;

/// The kinds of component `gantry add` can inject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Handler,
    Model,
    Middleware,
    Database,
}

impl ComponentKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Handler => "handler",
            Self::Model => "model",
            Self::Middleware => "middleware",
            Self::Database => "database",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One renderable component: where it goes and what it contains.
///
/// Both fields may carry `{{VAR}}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentTemplate {
    pub kind: ComponentKind,
    pub path_template: &'static str,
    pub content: &'static str,
}
