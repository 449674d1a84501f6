use crate::errors::ConfigError;
use std::env;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_BCRYPT_COST: u32 = 10;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

/// Settings for the MongoDB connection.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub user_name: Option<String>,
    pub password: Option<String>,
    pub cluster_id: Option<String>,
    pub db_name: String,
}

impl DatabaseConfig {
    /// Connection string handed to the driver. An explicit `DATABASE_URL` wins
    /// over the Atlas cluster pieces.
    pub fn connection_uri(&self) -> Result<String, ConfigError> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }

        let user = self.user_name.as_deref().ok_or(ConfigError::Missing("DB_USER_NAME"))?;
        let password = self.password.as_deref().ok_or(ConfigError::Missing("DB_PASSWORD"))?;
        let cluster_id = self.cluster_id.as_deref().ok_or(ConfigError::Missing("CLUSTER_ID"))?;

        Ok(format!(
            "mongodb+srv://{}:{}@cluster63457.{}.mongodb.net/{}?retryWrites=true&w=majority&appName=Cluster0",
            user, password, cluster_id, self.db_name
        ))
    }
}

/// Credential settings shared by the login and signup resolvers.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub backend: StoreBackend,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests never touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let jwt_secret = var("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid("PORT", e.to_string()))?,
            None => DEFAULT_PORT,
        };

        let bcrypt_cost = match var("BCRYPT_COST") {
            Some(raw) => {
                let cost = raw
                    .parse::<u32>()
                    .map_err(|e| ConfigError::Invalid("BCRYPT_COST", e.to_string()))?;
                if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
                    return Err(ConfigError::Invalid(
                        "BCRYPT_COST",
                        format!("must be between {} and {}", MIN_BCRYPT_COST, MAX_BCRYPT_COST),
                    ));
                }
                cost
            }
            None => DEFAULT_BCRYPT_COST,
        };

        let backend = match var("STORE_BACKEND").as_deref() {
            None | Some("mongo") => StoreBackend::Mongo,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid("STORE_BACKEND", format!("unknown backend '{}'", other)))
            }
        };

        let database = DatabaseConfig {
            url: var("DATABASE_URL"),
            user_name: var("DB_USER_NAME"),
            password: var("DB_PASSWORD"),
            cluster_id: var("CLUSTER_ID"),
            db_name: match backend {
                StoreBackend::Mongo => var("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?,
                StoreBackend::Memory => var("DB_NAME").unwrap_or_default(),
            },
        };

        Ok(Config {
            port,
            backend,
            database,
            auth: AuthConfig {
                jwt_secret,
                bcrypt_cost,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_unset() {
        let config = Config::from_lookup(lookup(&[("JWT_SECRET", "s3cret"), ("DB_NAME", "comp3133")])).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.auth.bcrypt_cost, 10);
        assert_eq!(config.backend, StoreBackend::Mongo);
    }

    #[test]
    fn missing_secret_is_rejected() {
        let err = Config::from_lookup(lookup(&[("DB_NAME", "comp3133")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("JWT_SECRET")));

        let err = Config::from_lookup(lookup(&[("JWT_SECRET", ""), ("DB_NAME", "comp3133")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("JWT_SECRET")));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("DB_NAME", "comp3133"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT", _)));
    }

    #[test]
    fn atlas_uri_is_assembled_from_parts() {
        let config = Config::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("DB_NAME", "comp3133"),
            ("DB_USER_NAME", "admin"),
            ("DB_PASSWORD", "pw"),
            ("CLUSTER_ID", "abc12"),
        ]))
        .unwrap();
        assert_eq!(
            config.database.connection_uri().unwrap(),
            "mongodb+srv://admin:pw@cluster63457.abc12.mongodb.net/comp3133?retryWrites=true&w=majority&appName=Cluster0"
        );
    }

    #[test]
    fn database_url_overrides_atlas_parts() {
        let config = Config::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("DB_NAME", "comp3133"),
            ("DATABASE_URL", "mongodb://localhost:27017"),
        ]))
        .unwrap();
        assert_eq!(config.database.connection_uri().unwrap(), "mongodb://localhost:27017");
    }

    #[test]
    fn memory_backend_does_not_need_a_database() {
        let config = Config::from_lookup(lookup(&[("JWT_SECRET", "s3cret"), ("STORE_BACKEND", "memory")])).unwrap();
        assert_eq!(config.backend, StoreBackend::Memory);
    }
}
