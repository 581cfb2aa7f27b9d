//! Configuration resolution and constants.
//!
//! Resolves the application configuration from process environment variables,
//! substituting a literal default for every variable that is unset or empty.
//! `AppConfig` is the root configuration struct; it is built once at startup and
//! shared read-only with every request handler.

use std::fmt;

use const_format::formatcp;

// =============================================================================
// HTTP Routes and Response Headers
// =============================================================================

/// Health check route
pub const HEALTH_PATH: &str = "/api/health";

/// Greeting route
pub const MENSAJE_PATH: &str = "/api/mensaje";

/// Configuration projection route
pub const CONFIG_PATH: &str = "/api/config";

/// API responses are recomputed on every request and must not be stored by
/// upstream caches.
pub const CACHE_CONTROL_API: &str = "no-store";

/// Response header carrying the per-request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Seconds to wait for in-flight connections during graceful shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_PORT: &str = "PORT";
pub const ENV_NODE_ENV: &str = "NODE_ENV";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
pub const ENV_DATABASE_HOST: &str = "DATABASE_HOST";
pub const ENV_DATABASE_PORT: &str = "DATABASE_PORT";
pub const ENV_DATABASE_NAME: &str = "DATABASE_NAME";
pub const ENV_DATABASE_USER: &str = "DATABASE_USER";
pub const ENV_DATABASE_PASSWORD: &str = "DATABASE_PASSWORD";
pub const ENV_ENABLE_CORS: &str = "ENABLE_CORS";
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";
pub const ENV_API_KEY: &str = "API_KEY";

// =============================================================================
// Defaults
// =============================================================================

/// Interface the HTTP server binds to
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: &str = "5000";

pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

pub const DEFAULT_DATABASE_HOST: &str = "localhost";
pub const DEFAULT_DATABASE_PORT: &str = "5432";
pub const DEFAULT_DATABASE_NAME: &str = "myapp";
pub const DEFAULT_DATABASE_USER: &str = "user";
pub const DEFAULT_DATABASE_PASSWORD: &str = "password";

pub const DEFAULT_JWT_SECRET: &str = "default_secret";
pub const DEFAULT_API_KEY: &str = "default_key";

/// The only `ENABLE_CORS` value that turns CORS on. Comparison is exact.
pub const CORS_ENABLED_VALUE: &str = "true";

/// Default log filter when neither RUST_LOG nor LOG_LEVEL yields a usable one
pub const DEFAULT_LOG_FILTER: &str = formatcp!(
    "hola_k8s={},tower_http={}",
    DEFAULT_LOG_LEVEL,
    DEFAULT_LOG_LEVEL
);

/// Port the display client reaches the service on (the cluster NodePort)
pub const DISPLAY_CLIENT_PORT: u16 = 30001;

/// Greeting endpoint as seen by the display client
pub const DEFAULT_MENSAJE_URL: &str =
    formatcp!("http://localhost:{}{}", DISPLAY_CLIENT_PORT, MENSAJE_PATH);

/// Placeholder shown by the display client while the request is in flight
pub const LOADING_PLACEHOLDER: &str = "Cargando...";

/// Immutable configuration snapshot for the process lifetime.
#[derive(Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Deployment environment name (`NODE_ENV`)
    pub environment: String,
    /// Log level name (`LOG_LEVEL`), also used to derive the tracing filter
    pub log_level: String,
    /// Whether cross-origin requests are allowed
    pub enable_cors: bool,
    /// Database connection parameters. Never used to open a connection.
    pub database: DatabaseConfig,
    /// Credentials. Stored only.
    pub auth: AuthConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    /// Raw `PORT` value. Parsed only when the listener is bound.
    pub port: String,
}

/// Database connection parameters, all kept as raw strings.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: String,
    pub name: String,
    pub user: String,
    pub password: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub api_key: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    pub format: String,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables both resolve to the default. Values are stored
    /// verbatim; nothing is parsed or validated here, so this cannot fail.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            http: HttpServerConfig {
                host: DEFAULT_HTTP_HOST.to_string(),
                port: var(ENV_PORT, DEFAULT_HTTP_PORT),
            },
            environment: var(ENV_NODE_ENV, DEFAULT_ENVIRONMENT),
            log_level: var(ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL),
            enable_cors: lookup(ENV_ENABLE_CORS).as_deref() == Some(CORS_ENABLED_VALUE),
            database: DatabaseConfig {
                host: var(ENV_DATABASE_HOST, DEFAULT_DATABASE_HOST),
                port: var(ENV_DATABASE_PORT, DEFAULT_DATABASE_PORT),
                name: var(ENV_DATABASE_NAME, DEFAULT_DATABASE_NAME),
                user: var(ENV_DATABASE_USER, DEFAULT_DATABASE_USER),
                password: var(ENV_DATABASE_PASSWORD, DEFAULT_DATABASE_PASSWORD),
            },
            auth: AuthConfig {
                jwt_secret: var(ENV_JWT_SECRET, DEFAULT_JWT_SECRET),
                api_key: var(ENV_API_KEY, DEFAULT_API_KEY),
            },
            logging: LoggingConfig {
                format: var(ENV_LOG_FORMAT, DEFAULT_LOG_FORMAT),
            },
        }
    }

    /// Tracing filter derived from the configured log level.
    pub fn log_filter(&self) -> String {
        format!(
            "hola_k8s={},tower_http={}",
            self.log_level, self.log_level
        )
    }
}

const REDACTED: &str = "<redacted>";

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("http", &self.http)
            .field("environment", &self.environment)
            .field("log_level", &self.log_level)
            .field("enable_cors", &self.enable_cors)
            .field("database", &self.database)
            .field("auth", &self.auth)
            .field("logging", &self.logging)
            .finish()
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &REDACTED)
            .field("api_key", &REDACTED)
            .finish()
    }
}
