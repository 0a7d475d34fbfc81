/// Which gateway adapter to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!(
                "Unknown store backend '{other}'. Must be one of: postgres, memory"
            )),
        }
    }
}

/// Document store configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Connection string; required for [`StoreBackend::Postgres`].
    pub database_url: Option<String>,
    pub max_connections: u32,
    /// Upper bound on waiting for a pooled connection.
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default    |
    /// |----------------------------|------------|
    /// | `STORE_BACKEND`            | `postgres` |
    /// | `DATABASE_URL`             | (none)     |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`       |
    /// | `STORE_TIMEOUT_SECS`       | `10`       |
    pub fn from_env() -> Self {
        let backend: StoreBackend = std::env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "postgres".into())
            .parse()
            .unwrap_or_else(|e: String| panic!("{e}"));

        let database_url = std::env::var("DATABASE_URL").ok();

        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let timeout_secs: u64 = std::env::var("STORE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("STORE_TIMEOUT_SECS must be a valid u64");

        Self {
            backend,
            database_url,
            max_connections,
            timeout_secs,
        }
    }

    /// In-memory configuration, for local runs and tests.
    pub fn memory() -> Self {
        Self {
            backend: StoreBackend::Memory,
            database_url: None,
            max_connections: 1,
            timeout_secs: 10,
        }
    }
}
