//! Server configuration

/// Server configuration
///
/// # Environment variables
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/ampeli | Work directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | AMPELI_API_URL | https://ampeli-backend.onrender.com/api | Remote API base URL |
/// | AMPELI_API_TIMEOUT_SECS | 30 | Remote API request timeout |
/// | SESSION_TTL_MINUTES | 1440 | Session lifetime (24h default) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/ampeli HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Remote inChurch/Ampeli API base URL
    pub api_base_url: String,
    /// Remote API request timeout (seconds)
    pub api_timeout_secs: u64,
    /// Session lifetime in minutes
    pub session_ttl_minutes: i64,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/ampeli".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            api_base_url: std::env::var("AMPELI_API_URL")
                .unwrap_or_else(|_| "https://ampeli-backend.onrender.com/api".into()),
            api_timeout_secs: std::env::var("AMPELI_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            session_ttl_minutes: std::env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1440),
        }
    }

    /// Override work dir and port, keeping the rest from the environment
    ///
    /// Mostly used in tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Path of the SQLite database file
    pub fn database_path(&self) -> std::path::PathBuf {
        std::path::PathBuf::from(&self.work_dir)
            .join("database")
            .join("ampeli.db")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
