use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub users_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_USERS_FILE: &str = "users.json";

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        Self::defaults(environment).with_env_overrides()
    }

    fn defaults(environment: Environment) -> Self {
        let filter = match environment {
            Environment::Development => "login_api=debug,tower_http=debug",
            Environment::Staging | Environment::Production => "login_api=info,tower_http=info",
        };

        Self {
            environment,
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            store: StoreConfig {
                users_file: PathBuf::from(DEFAULT_USERS_FILE),
            },
            logging: LoggingConfig {
                filter: filter.to_string(),
            },
        }
    }

    fn with_env_overrides(self) -> anyhow::Result<Self> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from any key lookup (env vars in production, a map in tests)
    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        if let Some(v) = lookup("LOGIN_API_HOST") {
            self.server.host = v;
        }
        if let Some((key, v)) = lookup("LOGIN_API_PORT")
            .map(|v| ("LOGIN_API_PORT", v))
            .or_else(|| lookup("PORT").map(|v| ("PORT", v)))
        {
            self.server.port = v
                .trim()
                .parse()
                .with_context(|| format!("invalid {} value {:?}", key, v))?;
        }
        if let Some(v) = lookup("LOGIN_API_USERS_FILE") {
            self.store.users_file = PathBuf::from(v);
        }
        if let Some(v) = lookup("LOGIN_API_LOG") {
            self.logging.filter = v;
        }

        Ok(self)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
