/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development
/// except the NASA key, which defaults to the rate-limited `DEMO_KEY`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite database URL (default: `sqlite://neoscope.db`).
    pub database_url: String,
    /// NeoWs base URL; override to point at a mock in tests.
    pub nasa_api_base_url: String,
    /// NeoWs API key, sent as the `api_key` query parameter.
    pub nasa_api_key: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                             |
    /// |------------------------|-------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                           |
    /// | `PORT`                 | `4000`                              |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`             |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                |
    /// | `DATABASE_URL`         | `sqlite://neoscope.db`              |
    /// | `NASA_API_BASE_URL`    | `https://api.nasa.gov/neo/rest/v1`  |
    /// | `NASA_API_KEY`         | `DEMO_KEY`                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://neoscope.db".into());

        let nasa_api_base_url = std::env::var("NASA_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.nasa.gov/neo/rest/v1".into());

        let nasa_api_key = std::env::var("NASA_API_KEY").unwrap_or_else(|_| "DEMO_KEY".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            nasa_api_base_url,
            nasa_api_key,
        }
    }
}
