use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{ensure, Context};
use sqlx::postgres::PgConnectOptions;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Postgres connection settings.
    pub database: PgConnectOptions,
    /// Upper bound on pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Root directory for stored uploads (default: `uploads`).
    pub upload_dir: PathBuf,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `4000`                     |
    /// | `DATABASE_URL`         | built from `DB_*` parts    |
    /// | `DB_MAX_CONNECTIONS`   | `10`                       |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `UPLOAD_DIR`           | `uploads`                  |
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "4000")
            .parse()
            .context("PORT must be a valid u16")?;

        let database = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.is_empty() => PgConnectOptions::from_str(&url)
                .context("DATABASE_URL is not a valid Postgres URL")?,
            _ => database_from_parts()?,
        };

        let db_max_connections: u32 = env_or("DB_MAX_CONNECTIONS", "10")
            .parse()
            .context("DB_MAX_CONNECTIONS must be a valid u32")?;

        let cors_origins = parse_origins(&env_or("CORS_ORIGINS", "http://localhost:3000"));

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .context("REQUEST_TIMEOUT_SECS must be a valid u64")?;

        let upload_dir = PathBuf::from(env_or("UPLOAD_DIR", "uploads"));

        let jwt = JwtConfig::from_env()?;

        Ok(Self {
            host,
            port,
            database,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            upload_dir,
            jwt,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Connection settings from `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`.
fn database_from_parts() -> anyhow::Result<PgConnectOptions> {
    let host = env_or("DB_HOST", "localhost");
    let port: u16 = env_or("DB_PORT", "5432")
        .parse()
        .context("DB_PORT must be a valid u16")?;
    let user = env_or("DB_USER", "postgres");
    let password = env_or("DB_PASSWORD", "");
    let name = env_or("DB_NAME", "university_cms");
    ensure!(!name.is_empty(), "DB_NAME must not be empty");

    Ok(connect_options(&host, port, &user, &password, &name))
}

/// Credentials are set field by field, so reserved URL characters need no escaping.
fn connect_options(
    host: &str,
    port: u16,
    user: &str,
    password: &str,
    name: &str,
) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(host)
        .port(port)
        .username(user)
        .database(name);
    if password.is_empty() {
        options
    } else {
        options.password(password)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_carry_each_connection_part() {
        let options = connect_options("db", 6543, "cms", "s3cret", "university_cms");
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "cms");
        assert_eq!(options.get_database(), Some("university_cms"));
    }

    #[test]
    fn reserved_characters_in_credentials_stay_in_their_fields() {
        let options = connect_options("db", 5432, "ops@campus", "p/ss#1?x:y", "cms");
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "ops@campus");
        assert_eq!(options.get_database(), Some("cms"));
    }

    #[test]
    fn percent_encoded_url_parses() {
        let options = PgConnectOptions::from_str("postgres://cms:p%2Fss%231@db:5432/cms").unwrap();
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_database(), Some("cms"));
    }

    #[test]
    fn origins_are_trimmed_and_empty_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
