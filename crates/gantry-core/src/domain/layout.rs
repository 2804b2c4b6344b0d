//! Layout domain aggregate and render context.
//!
//! A [`Layout`] is a named, declarative description of a project skeleton:
//! a tree of files and directories whose contents may carry `{{VAR}}`
//! placeholders. Layouts are the unit the `new` command works in; they are
//! selected by name, validated once at construction, and rendered into a
//! [`super::ProjectStructure`] by a renderer adapter.
//!
//! Content is held as `&'static str` for the built-in layouts (compile-time
//! strings, zero copy) with an owned variant for anything loaded at runtime.

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::common::{Permissions, RelativePath};
use crate::domain::error::DomainError;
use crate::domain::idiom::RouterIdiom;

// ── LayoutId ─────────────────────────────────────────────────────────────────

/// A validated layout name: lowercase letters, digits, hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutId(String);

impl LayoutId {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidLayoutName {
                name,
                reason: "name cannot be empty".into(),
            });
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::InvalidLayoutName {
                name,
                reason: "only lowercase letters, digits, and hyphens are allowed".into(),
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LayoutId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ── Metadata ─────────────────────────────────────────────────────────────────

/// Human-readable layout information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMetadata {
    pub display_name: String,
    pub description: String,
    /// The routing idiom this layout's entry file uses, when it has one.
    pub router: Option<RouterIdiom>,
    pub tags: Vec<String>,
}

impl LayoutMetadata {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            description: String::new(),
            router: None,
            tags: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn router(mut self, router: RouterIdiom) -> Self {
        self.router = Some(router);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

// ── Tree ─────────────────────────────────────────────────────────────────────

/// Template text, either borrowed from the binary or owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSource {
    Static(&'static str),
    Owned(String),
}

impl LayoutSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

/// File content and how to treat it at render time.
///
/// `Literal` content skips the substitution pass entirely; `Parameterized`
/// content is run through the [`RenderContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutContent {
    Literal(LayoutSource),
    Parameterized(LayoutSource),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: RelativePath,
    pub content: LayoutContent,
    pub permissions: Permissions,
}

impl FileSpec {
    pub fn parameterized(path: impl Into<std::path::PathBuf>, content: &'static str) -> Self {
        Self {
            path: RelativePath::new(path),
            content: LayoutContent::Parameterized(LayoutSource::Static(content)),
            permissions: Permissions::read_write(),
        }
    }

    pub fn literal(path: impl Into<std::path::PathBuf>, content: &'static str) -> Self {
        Self {
            path: RelativePath::new(path),
            content: LayoutContent::Literal(LayoutSource::Static(content)),
            permissions: Permissions::read_write(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    pub path: RelativePath,
    pub permissions: Permissions,
}

impl DirectorySpec {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            path: RelativePath::new(path),
            permissions: Permissions::read_write(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutNode {
    File(FileSpec),
    Directory(DirectorySpec),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutTree {
    pub nodes: Vec<LayoutNode>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, node: LayoutNode) -> Self {
        self.nodes.push(node);
        self
    }
}

// ── Layout aggregate ─────────────────────────────────────────────────────────

/// A named project skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub id: LayoutId,
    pub metadata: LayoutMetadata,
    pub tree: LayoutTree,
}

impl Layout {
    /// Validate the aggregate: a layout must produce something, and its
    /// paths must be unique (relative-ness is already enforced by
    /// [`RelativePath`]).
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tree.nodes.is_empty() {
            return Err(DomainError::EmptyLayout {
                layout: self.id.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for node in &self.tree.nodes {
            let path = match node {
                LayoutNode::File(f) => &f.path,
                LayoutNode::Directory(d) => &d.path,
            };
            if !seen.insert(path.as_str().to_string()) {
                return Err(DomainError::DuplicatePath {
                    path: path.as_str().to_string(),
                });
            }
        }
        Ok(())
    }
}

// ── RenderContext ────────────────────────────────────────────────────────────

/// Variable substitution context for `{{VAR}}` placeholders.
///
/// Standard variables are derived from the project name at construction;
/// callers add the rest (`MODULE_NAME`, component names, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl AsRef<str>) -> Self {
        let name = project_name.as_ref();
        let mut variables = BTreeMap::new();
        variables.insert("PROJECT_NAME".into(), name.to_string());
        variables.insert("PROJECT_NAME_SNAKE".into(), to_snake_case(name));
        variables.insert("PROJECT_NAME_KEBAB".into(), to_kebab_case(name));
        variables.insert("PROJECT_NAME_PASCAL".into(), to_pascal_case(name));
        Self { variables }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn with_module(self, module_name: impl Into<String>) -> Self {
        self.with_variable("MODULE_NAME", module_name)
    }

    /// Add the `COMPONENT_*` variables for a named component (handler,
    /// model) being injected into the project.
    pub fn with_component(self, component_name: impl AsRef<str>) -> Self {
        let name = component_name.as_ref();
        let snake = to_snake_case(name);
        let pascal = to_pascal_case(name);
        self.with_variable("COMPONENT_NAME", name)
            .with_variable("COMPONENT_SNAKE", snake)
            .with_variable("COMPONENT_PASCAL", pascal)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute every `{{KEY}}` occurrence. Unknown placeholders are left
    /// untouched so they surface visibly in the generated output.
    pub fn render(&self, template: &str) -> String {
        let mut rendered = template.to_string();
        for (key, value) in &self.variables {
            rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
        }
        rendered
    }
}

// ── Case helpers ─────────────────────────────────────────────────────────────

fn words(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_ascii_lowercase())
        .collect()
}

fn to_snake_case(input: &str) -> String {
    words(input).join("_")
}

fn to_kebab_case(input: &str) -> String {
    words(input).join("-")
}

fn to_pascal_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_id_accepts_kebab_names() {
        assert!(LayoutId::new("standard").is_ok());
        assert!(LayoutId::new("web-chi").is_ok());
    }

    #[test]
    fn layout_id_rejects_bad_names() {
        assert!(LayoutId::new("").is_err());
        assert!(LayoutId::new("With Spaces").is_err());
        assert!(LayoutId::new("UPPER").is_err());
    }

    #[test]
    fn empty_layout_fails_validation() {
        let layout = Layout {
            id: LayoutId::new("empty").unwrap(),
            metadata: LayoutMetadata::new("Empty"),
            tree: LayoutTree::new(),
        };
        assert!(matches!(
            layout.validate(),
            Err(DomainError::EmptyLayout { .. })
        ));
    }

    #[test]
    fn duplicate_paths_fail_validation() {
        let layout = Layout {
            id: LayoutId::new("dup").unwrap(),
            metadata: LayoutMetadata::new("Dup"),
            tree: LayoutTree::new()
                .with_node(LayoutNode::Directory(DirectorySpec::new("internal")))
                .with_node(LayoutNode::Directory(DirectorySpec::new("internal"))),
        };
        assert!(matches!(
            layout.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn render_context_standard_variables() {
        let ctx = RenderContext::new("my awesome project");

        assert_eq!(ctx.get("PROJECT_NAME"), Some("my awesome project"));
        assert_eq!(ctx.get("PROJECT_NAME_SNAKE"), Some("my_awesome_project"));
        assert_eq!(ctx.get("PROJECT_NAME_KEBAB"), Some("my-awesome-project"));
        assert_eq!(ctx.get("PROJECT_NAME_PASCAL"), Some("MyAwesomeProject"));
    }

    #[test]
    fn render_context_custom_variables() {
        let ctx = RenderContext::new("test").with_variable("AUTHOR", "Alice");
        assert_eq!(ctx.get("AUTHOR"), Some("Alice"));
    }

    #[test]
    fn render_substitutes_placeholders() {
        let ctx = RenderContext::new("my-app").with_module("example.com/my-app");
        let rendered = ctx.render("module {{MODULE_NAME}} // {{PROJECT_NAME}}");
        assert_eq!(rendered, "module example.com/my-app // my-app");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let ctx = RenderContext::new("x");
        assert_eq!(ctx.render("{{NOT_A_VAR}}"), "{{NOT_A_VAR}}");
    }

    #[test]
    fn component_variables() {
        let ctx = RenderContext::new("api").with_component("user-profile");
        assert_eq!(ctx.get("COMPONENT_NAME"), Some("user-profile"));
        assert_eq!(ctx.get("COMPONENT_SNAKE"), Some("user_profile"));
        assert_eq!(ctx.get("COMPONENT_PASCAL"), Some("UserProfile"));
    }
}
