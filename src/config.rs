use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_url_and_defaults_pool_size() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/userstore_dev");
        std::env::remove_var("DATABASE_MAX_CONNECTIONS");

        let config = AppConfig::from_env().expect("config should load");
        assert_eq!(config.database_url, "postgres://localhost/userstore_dev");
        assert_eq!(config.max_connections, 10);
    }
}
