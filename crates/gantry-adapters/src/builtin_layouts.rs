//! Built-in project layouts.
//!
//! The layouts that ship with Gantry, hand-built as [`Layout`] aggregates
//! over compile-time template strings. Four layouts, one per supported
//! router idiom:
//!
//! | name       | router    | entry file                  |
//! |------------|-----------|-----------------------------|
//! | `standard` | net/http  | `main.go`                   |
//! | `chi`      | chi       | `cmd/{{PROJECT_NAME}}/main.go` |
//! | `gin`      | gin       | `cmd/{{PROJECT_NAME}}/main.go` |
//! | `gorilla`  | gorilla   | `cmd/{{PROJECT_NAME}}/main.go` |
//!
//! Every entry file carries enough idiom indicators to be re-classified by
//! the pattern detector when components are added later, and uses the `r`
//! router / `handler` wrapper naming the insertion resolver's registration
//! templates assume.

use gantry_core::domain::{
    FileSpec, Layout, LayoutId, LayoutMetadata, LayoutNode, LayoutTree, RouterIdiom,
};

/// All built-in layouts.
pub fn all_layouts() -> Vec<Layout> {
    vec![standard(), chi(), gin(), gorilla()]
}

// ── standard (net/http) ───────────────────────────────────────────────────────

const STANDARD_MAIN: &str = r#"package main

import (
	"log"
	"net/http"
)

func main() {
	mux := http.NewServeMux()
	mux.HandleFunc("/healthz", func(w http.ResponseWriter, r *http.Request) {
		w.WriteHeader(http.StatusOK)
		w.Write([]byte("ok"))
	})

	var handler http.Handler = mux

	log.Printf("{{PROJECT_NAME}} listening on :8080")
	log.Fatal(http.ListenAndServe(":8080", handler))
}
"#;

const STANDARD_GO_MOD: &str = r#"module {{MODULE_NAME}}

go 1.22
"#;

const STANDARD_README: &str = r#"# {{PROJECT_NAME}}

Generated by gantry from the `standard` layout.

## Run

    go run .

## Add components

    gantry add middleware recovery
    gantry add handler users
"#;

fn standard() -> Layout {
    Layout {
        id: LayoutId::new("standard").expect("valid builtin layout name"),
        metadata: LayoutMetadata::new("Standard (net/http)")
            .description("Minimal net/http service with a ServeMux and a health endpoint.")
            .router(RouterIdiom::PlainHttp)
            .tags(vec!["minimal".into(), "stdlib".into()]),
        tree: LayoutTree::new()
            .with_node(LayoutNode::File(FileSpec::parameterized(
                "go.mod",
                STANDARD_GO_MOD,
            )))
            .with_node(LayoutNode::File(FileSpec::parameterized(
                "main.go",
                STANDARD_MAIN,
            )))
            .with_node(LayoutNode::File(FileSpec::parameterized(
                "gantry.toml",
                project_marker("standard"),
            )))
            .with_node(LayoutNode::File(FileSpec::parameterized(
                "README.md",
                STANDARD_README,
            )))
            .with_node(LayoutNode::File(FileSpec::literal(
                ".gitignore",
                GITIGNORE,
            ))),
    }
}

// ── chi ──────────────────────────────────────────────────────────────────────

const CHI_MAIN: &str = r#"package main

import (
	"log"
	"net/http"

	"github.com/go-chi/chi/v5"

	"{{MODULE_NAME}}/internal/handler"
)

func main() {
	r := chi.NewRouter()

	r.Get("/healthz", handler.Health)

	log.Printf("{{PROJECT_NAME}} listening on :8080")
	log.Fatal(http.ListenAndServe(":8080", r))
}
"#;

const CHI_GO_MOD: &str = r#"module {{MODULE_NAME}}

go 1.22

require github.com/go-chi/chi/v5 v5.1.0
"#;

fn chi() -> Layout {
    Layout {
        id: LayoutId::new("chi").expect("valid builtin layout name"),
        metadata: LayoutMetadata::new("Chi")
            .description("HTTP service on the chi router with a health endpoint.")
            .router(RouterIdiom::Chi)
            .tags(vec!["router".into(), "chi".into()]),
        tree: router_tree("chi", CHI_GO_MOD, CHI_MAIN, HANDLER_HEALTH_STD, ROUTER_README),
    }
}

// ── gin ──────────────────────────────────────────────────────────────────────

const GIN_MAIN: &str = r#"package main

import (
	"log"

	"github.com/gin-gonic/gin"

	"{{MODULE_NAME}}/internal/handler"
)

func main() {
	r := gin.Default()

	r.GET("/healthz", handler.Health)

	log.Printf("{{PROJECT_NAME}} listening on :8080")
	log.Fatal(r.Run(":8080"))
}
"#;

const GIN_GO_MOD: &str = r#"module {{MODULE_NAME}}

go 1.22

require github.com/gin-gonic/gin v1.10.0
"#;

const HANDLER_HEALTH_GIN: &str = r#"package handler

import (
	"net/http"

	"github.com/gin-gonic/gin"
)

// Health reports service liveness.
func Health(c *gin.Context) {
	c.JSON(http.StatusOK, gin.H{"status": "ok"})
}
"#;

fn gin() -> Layout {
    Layout {
        id: LayoutId::new("gin").expect("valid builtin layout name"),
        metadata: LayoutMetadata::new("Gin")
            .description("HTTP service on the gin engine with a health endpoint.")
            .router(RouterIdiom::Gin)
            .tags(vec!["router".into(), "gin".into()]),
        tree: router_tree("gin", GIN_GO_MOD, GIN_MAIN, HANDLER_HEALTH_GIN, ROUTER_README),
    }
}

// ── gorilla ──────────────────────────────────────────────────────────────────

const GORILLA_MAIN: &str = r#"package main

import (
	"log"
	"net/http"

	"github.com/gorilla/mux"

	"{{MODULE_NAME}}/internal/handler"
)

func main() {
	r := mux.NewRouter()

	r.HandleFunc("/healthz", handler.Health).Methods(http.MethodGet)

	log.Printf("{{PROJECT_NAME}} listening on :8080")
	log.Fatal(http.ListenAndServe(":8080", r))
}
"#;

const GORILLA_GO_MOD: &str = r#"module {{MODULE_NAME}}

go 1.22

require github.com/gorilla/mux v1.8.1
"#;

fn gorilla() -> Layout {
    Layout {
        id: LayoutId::new("gorilla").expect("valid builtin layout name"),
        metadata: LayoutMetadata::new("Gorilla Mux")
            .description("HTTP service on gorilla/mux with a health endpoint.")
            .router(RouterIdiom::Gorilla)
            .tags(vec!["router".into(), "gorilla".into()]),
        tree: router_tree(
            "gorilla",
            GORILLA_GO_MOD,
            GORILLA_MAIN,
            HANDLER_HEALTH_STD,
            ROUTER_README,
        ),
    }
}

// ── shared pieces ────────────────────────────────────────────────────────────

const HANDLER_HEALTH_STD: &str = r#"package handler

import (
	"encoding/json"
	"net/http"
)

// Health reports service liveness.
func Health(w http.ResponseWriter, r *http.Request) {
	w.Header().Set("Content-Type", "application/json")
	json.NewEncoder(w).Encode(map[string]string{"status": "ok"})
}
"#;

const ROUTER_README: &str = r#"# {{PROJECT_NAME}}

Generated by gantry.

## Run

    go run ./cmd/{{PROJECT_NAME}}

## Add components

    gantry add middleware recovery
    gantry add handler users
"#;

const GITIGNORE: &str = "/bin/\n*.log\n.env\n";

/// The project marker `gantry add` reads back via the inspector.
///
/// One compile-time string per layout so the layout name is baked in while
/// the rest stays parameterized.
fn project_marker(layout: &str) -> &'static str {
    match layout {
        "standard" => {
            "# Generated by gantry. Used by `gantry add` to identify the project.\n[project]\nname = \"{{PROJECT_NAME}}\"\nmodule = \"{{MODULE_NAME}}\"\nlayout = \"standard\"\n"
        }
        "chi" => {
            "# Generated by gantry. Used by `gantry add` to identify the project.\n[project]\nname = \"{{PROJECT_NAME}}\"\nmodule = \"{{MODULE_NAME}}\"\nlayout = \"chi\"\n"
        }
        "gin" => {
            "# Generated by gantry. Used by `gantry add` to identify the project.\n[project]\nname = \"{{PROJECT_NAME}}\"\nmodule = \"{{MODULE_NAME}}\"\nlayout = \"gin\"\n"
        }
        _ => {
            "# Generated by gantry. Used by `gantry add` to identify the project.\n[project]\nname = \"{{PROJECT_NAME}}\"\nmodule = \"{{MODULE_NAME}}\"\nlayout = \"gorilla\"\n"
        }
    }
}

/// Common tree shape for the router layouts: entry file under
/// `cmd/{{PROJECT_NAME}}/`, a health handler package, marker, readme.
fn router_tree(
    layout: &'static str,
    go_mod: &'static str,
    main_go: &'static str,
    health: &'static str,
    readme: &'static str,
) -> LayoutTree {
    LayoutTree::new()
        .with_node(LayoutNode::File(FileSpec::parameterized("go.mod", go_mod)))
        .with_node(LayoutNode::File(FileSpec::parameterized(
            "cmd/{{PROJECT_NAME}}/main.go",
            main_go,
        )))
        .with_node(LayoutNode::File(FileSpec::parameterized(
            "internal/handler/health.go",
            health,
        )))
        .with_node(LayoutNode::File(FileSpec::parameterized(
            "gantry.toml",
            project_marker(layout),
        )))
        .with_node(LayoutNode::File(FileSpec::parameterized(
            "README.md",
            readme,
        )))
        .with_node(LayoutNode::File(FileSpec::literal(".gitignore", GITIGNORE)))
}

// ── tests ─────────────────────────────────────────────────────────────────────
