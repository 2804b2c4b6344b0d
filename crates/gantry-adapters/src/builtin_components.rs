//! Built-in component catalog.
//!
//! Inert Go snippet templates for `gantry add`: middleware implementations
//! (one per kind, in two idiom families), handler and model skeletons, and
//! database wiring. Templates carry `{{VAR}}` placeholders rendered by the
//! `SimpleRenderer`; the variables are supplied by the CLI layer
//! (`COMPONENT_*` for named components, `MIDDLEWARE_KIND` for middleware).
//!
//! The middleware snippets define exactly the symbol the wiring subsystem
//! registers (`<Title>Middleware`), so a committed wire plus an ensured
//! component leaves the project compiling.

use gantry_core::domain::{ComponentKind, ComponentTemplate, IdiomFamily, MiddlewareKind};

// ── middleware (net/http family) ─────────────────────────────────────────────

const MW_RECOVERY_STD: &str = r#"package middleware

import "net/http"

// RecoveryMiddleware recovers from handler panics and returns 500.
func RecoveryMiddleware(next http.Handler) http.Handler {
	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {
		defer func() {
			if err := recover(); err != nil {
				http.Error(w, http.StatusText(http.StatusInternalServerError), http.StatusInternalServerError)
			}
		}()
		next.ServeHTTP(w, r)
	})
}
"#;

const MW_CORS_STD: &str = r#"package middleware

import "net/http"

// CorsMiddleware sets permissive CORS headers and answers preflight
// requests. Tighten the origin list before shipping.
func CorsMiddleware(next http.Handler) http.Handler {
	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {
		w.Header().Set("Access-Control-Allow-Origin", "*")
		w.Header().Set("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS")
		w.Header().Set("Access-Control-Allow-Headers", "Content-Type, Authorization")
		if r.Method == http.MethodOptions {
			w.WriteHeader(http.StatusNoContent)
			return
		}
		next.ServeHTTP(w, r)
	})
}
"#;

const MW_LOGGING_STD: &str = r#"package middleware

import (
	"log"
	"net/http"
	"time"
)

// LoggingMiddleware logs method, path, and latency for every request.
func LoggingMiddleware(next http.Handler) http.Handler {
	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {
		start := time.Now()
		next.ServeHTTP(w, r)
		log.Printf("%s %s %s", r.Method, r.URL.Path, time.Since(start))
	})
}
"#;

const MW_COMPRESSION_STD: &str = r#"package middleware

import (
	"compress/gzip"
	"io"
	"net/http"
	"strings"
)

type gzipResponseWriter struct {
	http.ResponseWriter
	writer io.Writer
}

func (g gzipResponseWriter) Write(b []byte) (int, error) {
	return g.writer.Write(b)
}

// CompressionMiddleware gzips responses for clients that accept it.
func CompressionMiddleware(next http.Handler) http.Handler {
	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {
		if !strings.Contains(r.Header.Get("Accept-Encoding"), "gzip") {
			next.ServeHTTP(w, r)
			return
		}
		w.Header().Set("Content-Encoding", "gzip")
		gz := gzip.NewWriter(w)
		defer gz.Close()
		next.ServeHTTP(gzipResponseWriter{ResponseWriter: w, writer: gz}, r)
	})
}
"#;

const MW_AUTH_STD: &str = r#"package middleware

import (
	"net/http"
	"strings"
)

// AuthMiddleware rejects requests without a bearer token.
func AuthMiddleware(next http.Handler) http.Handler {
	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {
		token := strings.TrimPrefix(r.Header.Get("Authorization"), "Bearer ")
		if token == "" || token == r.Header.Get("Authorization") {
			http.Error(w, "unauthorized", http.StatusUnauthorized)
			return
		}
		// TODO: validate the token against your identity provider.
		next.ServeHTTP(w, r)
	})
}
"#;

const MW_RATELIMIT_STD: &str = r#"package middleware

import (
	"net/http"
	"sync"
	"time"
)

var (
	ratelimitMu   sync.Mutex
	ratelimitSeen = map[string]time.Time{}
)

// RatelimitMiddleware rejects clients that issue requests back-to-back.
// Swap in a real token bucket for production traffic.
func RatelimitMiddleware(next http.Handler) http.Handler {
	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {
		ratelimitMu.Lock()
		last, seen := ratelimitSeen[r.RemoteAddr]
		now := time.Now()
		ratelimitSeen[r.RemoteAddr] = now
		ratelimitMu.Unlock()
		if seen && now.Sub(last) < 100*time.Millisecond {
			http.Error(w, "too many requests", http.StatusTooManyRequests)
			return
		}
		next.ServeHTTP(w, r)
	})
}
"#;

const MW_TIMEOUT_STD: &str = r#"package middleware

import (
	"net/http"
	"time"
)

// TimeoutMiddleware cancels requests that run longer than 30 seconds.
func TimeoutMiddleware(next http.Handler) http.Handler {
	return http.TimeoutHandler(next, 30*time.Second, "request timed out")
}
"#;

// ── middleware (gin family) ──────────────────────────────────────────────────

const MW_RECOVERY_GIN: &str = r#"package middleware

import (
	"net/http"

	"github.com/gin-gonic/gin"
)

// RecoveryMiddleware recovers from handler panics and returns 500.
func RecoveryMiddleware() gin.HandlerFunc {
	return func(c *gin.Context) {
		defer func() {
			if err := recover(); err != nil {
				c.AbortWithStatus(http.StatusInternalServerError)
			}
		}()
		c.Next()
	}
}
"#;

const MW_CORS_GIN: &str = r#"package middleware

import (
	"net/http"

	"github.com/gin-gonic/gin"
)

// CorsMiddleware sets permissive CORS headers and answers preflight
// requests. Tighten the origin list before shipping.
func CorsMiddleware() gin.HandlerFunc {
	return func(c *gin.Context) {
		c.Header("Access-Control-Allow-Origin", "*")
		c.Header("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS")
		c.Header("Access-Control-Allow-Headers", "Content-Type, Authorization")
		if c.Request.Method == http.MethodOptions {
			c.AbortWithStatus(http.StatusNoContent)
			return
		}
		c.Next()
	}
}
"#;

const MW_LOGGING_GIN: &str = r#"package middleware

import (
	"log"
	"time"

	"github.com/gin-gonic/gin"
)

// LoggingMiddleware logs method, path, and latency for every request.
func LoggingMiddleware() gin.HandlerFunc {
	return func(c *gin.Context) {
		start := time.Now()
		c.Next()
		log.Printf("%s %s %s", c.Request.Method, c.Request.URL.Path, time.Since(start))
	}
}
"#;

const MW_COMPRESSION_GIN: &str = r#"package middleware

import (
	"strings"

	"github.com/gin-gonic/gin"
)

// CompressionMiddleware marks gzip-capable responses. Pair with a writer
// wrapper (or gin-contrib/gzip) for actual compression.
func CompressionMiddleware() gin.HandlerFunc {
	return func(c *gin.Context) {
		if strings.Contains(c.GetHeader("Accept-Encoding"), "gzip") {
			c.Header("Vary", "Accept-Encoding")
		}
		c.Next()
	}
}
"#;

const MW_AUTH_GIN: &str = r#"package middleware

import (
	"net/http"
	"strings"

	"github.com/gin-gonic/gin"
)

// AuthMiddleware rejects requests without a bearer token.
func AuthMiddleware() gin.HandlerFunc {
	return func(c *gin.Context) {
		header := c.GetHeader("Authorization")
		token := strings.TrimPrefix(header, "Bearer ")
		if token == "" || token == header {
			c.AbortWithStatus(http.StatusUnauthorized)
			return
		}
		// TODO: validate the token against your identity provider.
		c.Next()
	}
}
"#;

const MW_RATELIMIT_GIN: &str = r#"package middleware

import (
	"net/http"
	"sync"
	"time"

	"github.com/gin-gonic/gin"
)

var (
	ratelimitMu   sync.Mutex
	ratelimitSeen = map[string]time.Time{}
)

// RatelimitMiddleware rejects clients that issue requests back-to-back.
// Swap in a real token bucket for production traffic.
func RatelimitMiddleware() gin.HandlerFunc {
	return func(c *gin.Context) {
		ratelimitMu.Lock()
		last, seen := ratelimitSeen[c.ClientIP()]
		now := time.Now()
		ratelimitSeen[c.ClientIP()] = now
		ratelimitMu.Unlock()
		if seen && now.Sub(last) < 100*time.Millisecond {
			c.AbortWithStatus(http.StatusTooManyRequests)
			return
		}
		c.Next()
	}
}
"#;

const MW_TIMEOUT_GIN: &str = r#"package middleware

import (
	"context"
	"time"

	"github.com/gin-gonic/gin"
)

// TimeoutMiddleware bounds request handling at 30 seconds.
func TimeoutMiddleware() gin.HandlerFunc {
	return func(c *gin.Context) {
		ctx, cancel := context.WithTimeout(c.Request.Context(), 30*time.Second)
		defer cancel()
		c.Request = c.Request.WithContext(ctx)
		c.Next()
	}
}
"#;

// ── handler / model ──────────────────────────────────────────────────────────

const HANDLER_STD: &str = r#"package handler

import (
	"encoding/json"
	"net/http"
)

// {{COMPONENT_PASCAL}} handles requests for {{COMPONENT_NAME}}.
func {{COMPONENT_PASCAL}}(w http.ResponseWriter, r *http.Request) {
	w.Header().Set("Content-Type", "application/json")
	json.NewEncoder(w).Encode(map[string]string{"resource": "{{COMPONENT_NAME}}"})
}
"#;

const HANDLER_GIN: &str = r#"package handler

import (
	"net/http"

	"github.com/gin-gonic/gin"
)

// {{COMPONENT_PASCAL}} handles requests for {{COMPONENT_NAME}}.
func {{COMPONENT_PASCAL}}(c *gin.Context) {
	c.JSON(http.StatusOK, gin.H{"resource": "{{COMPONENT_NAME}}"})
}
"#;

const MODEL: &str = r#"package model

import "time"

// {{COMPONENT_PASCAL}} is the {{COMPONENT_NAME}} domain record.
type {{COMPONENT_PASCAL}} struct {
	ID        int64     `json:"id"`
	CreatedAt time.Time `json:"created_at"`
	UpdatedAt time.Time `json:"updated_at"`
}
"#;

// ── database wiring ──────────────────────────────────────────────────────────

const DATABASE_POSTGRES: &str = r#"package database

import (
	"database/sql"
	"fmt"
	"os"

	_ "github.com/lib/pq"
)

// Open connects to PostgreSQL using DATABASE_URL.
func Open() (*sql.DB, error) {
	dsn := os.Getenv("DATABASE_URL")
	if dsn == "" {
		return nil, fmt.Errorf("DATABASE_URL is not set")
	}
	db, err := sql.Open("postgres", dsn)
	if err != nil {
		return nil, err
	}
	return db, db.Ping()
}
"#;

const DATABASE_SQLITE: &str = r#"package database

import (
	"database/sql"

	_ "modernc.org/sqlite"
)

// Open opens (creating if needed) the local SQLite database file.
func Open() (*sql.DB, error) {
	db, err := sql.Open("sqlite", "{{PROJECT_NAME_SNAKE}}.db")
	if err != nil {
		return nil, err
	}
	return db, db.Ping()
}
"#;

// ── Catalog API ──────────────────────────────────────────────────────────────

/// Supported database drivers for `gantry add database`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseDriver {
    Postgres,
    Sqlite,
}

/// The implementation snippet for a middleware kind in the given family.
pub fn middleware(kind: MiddlewareKind, family: IdiomFamily) -> ComponentTemplate {
    let content = match (family, kind) {
        (IdiomFamily::NetHttp, MiddlewareKind::Recovery) => MW_RECOVERY_STD,
        (IdiomFamily::NetHttp, MiddlewareKind::Cors) => MW_CORS_STD,
        (IdiomFamily::NetHttp, MiddlewareKind::Logging) => MW_LOGGING_STD,
        (IdiomFamily::NetHttp, MiddlewareKind::Compression) => MW_COMPRESSION_STD,
        (IdiomFamily::NetHttp, MiddlewareKind::Auth) => MW_AUTH_STD,
        (IdiomFamily::NetHttp, MiddlewareKind::RateLimit) => MW_RATELIMIT_STD,
        (IdiomFamily::NetHttp, MiddlewareKind::Timeout) => MW_TIMEOUT_STD,
        (IdiomFamily::Gin, MiddlewareKind::Recovery) => MW_RECOVERY_GIN,
        (IdiomFamily::Gin, MiddlewareKind::Cors) => MW_CORS_GIN,
        (IdiomFamily::Gin, MiddlewareKind::Logging) => MW_LOGGING_GIN,
        (IdiomFamily::Gin, MiddlewareKind::Compression) => MW_COMPRESSION_GIN,
        (IdiomFamily::Gin, MiddlewareKind::Auth) => MW_AUTH_GIN,
        (IdiomFamily::Gin, MiddlewareKind::RateLimit) => MW_RATELIMIT_GIN,
        (IdiomFamily::Gin, MiddlewareKind::Timeout) => MW_TIMEOUT_GIN,
    };
    ComponentTemplate {
        kind: ComponentKind::Middleware,
        path_template: "internal/middleware/{{MIDDLEWARE_KIND}}.go",
        content,
    }
}

/// Handler skeleton for the given family.
pub fn handler(family: IdiomFamily) -> ComponentTemplate {
    ComponentTemplate {
        kind: ComponentKind::Handler,
        path_template: "internal/handler/{{COMPONENT_SNAKE}}.go",
        content: match family {
            IdiomFamily::NetHttp => HANDLER_STD,
            IdiomFamily::Gin => HANDLER_GIN,
        },
    }
}

/// Model skeleton (family-independent).
pub fn model() -> ComponentTemplate {
    ComponentTemplate {
        kind: ComponentKind::Model,
        path_template: "internal/model/{{COMPONENT_SNAKE}}.go",
        content: MODEL,
    }
}

/// Database wiring for the given driver.
pub fn database(driver: DatabaseDriver) -> ComponentTemplate {
    ComponentTemplate {
        kind: ComponentKind::Database,
        path_template: "internal/database/database.go",
        content: match driver {
            DatabaseDriver::Postgres => DATABASE_POSTGRES,
            DatabaseDriver::Sqlite => DATABASE_SQLITE,
        },
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
