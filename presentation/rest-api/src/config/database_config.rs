use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Product store settings
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string. When unset the service keeps
///   products in memory.
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - DATABASE_MIGRATIONS_PATH: Migrations directory
///   (default: "infrastructure/persistence/migrations")
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("DATABASE_MIGRATIONS_PATH").ok(),
        )
    }

    fn from_values(
        url: Option<String>,
        max_connections: Option<String>,
        migrations_path: Option<String>,
    ) -> Self {
        Self {
            url: url.filter(|u| !u.trim().is_empty()),
            max_connections: max_connections
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            migrations_path: migrations_path
                .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        }
    }
}

/// Connects to PostgreSQL and applies pending migrations.
///
/// Returns `None` when no database is configured.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<Option<PgPool>> {
    let Some(url) = settings.url.clone() else {
        return Ok(None);
    };

    let config = DatabaseConfig::new(url).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!("Database ready, migrations applied");

    Ok(Some(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset() {
        let settings = DatabaseSettings::from_values(None, None, None);

        assert!(settings.url.is_none());
        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.migrations_path, DEFAULT_MIGRATIONS_PATH);
    }

    #[test]
    fn should_treat_blank_url_as_unset() {
        let settings = DatabaseSettings::from_values(Some("  ".to_string()), None, None);

        assert!(settings.url.is_none());
    }

    #[test]
    fn should_ignore_unparsable_pool_size() {
        let settings = DatabaseSettings::from_values(
            Some("postgres://localhost/products".to_string()),
            Some("many".to_string()),
            Some("migrations".to_string()),
        );

        assert_eq!(
            settings.url.as_deref(),
            Some("postgres://localhost/products")
        );
        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.migrations_path, "migrations");
    }
}
