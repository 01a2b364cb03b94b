use std::{env, num::ParseIntError};

const DEFAULT_SERVER_PORT: u16 = 3030;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_DB_PORT: u16 = 5432;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid port number, got {value:?}")]
    InvalidPort {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

// -- 应用配置结构体
#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub cors_origin: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub database_url: Option<String>,
}

impl Config {
    // -- 从环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过任意键值查询构造配置，测试时无需修改进程环境
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = parse_port(&lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?;

        let cors_origin = lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let log_dir = lookup("LOG_DIR").filter(|dir| !dir.is_empty());

        // -- DATABASE_URL 优先，否则由 DB_* 拼接
        let database_url = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => Some(url),
            None => match lookup("DB_HOST").filter(|host| !host.is_empty()) {
                Some(host) => {
                    let port = parse_port(&lookup, "DB_PORT", DEFAULT_DB_PORT)?;
                    let user = lookup("DB_USER").unwrap_or_else(|| "postgres".to_string());
                    let password = lookup("DB_PASSWORD").unwrap_or_default();
                    let name = lookup("DB_NAME").unwrap_or_else(|| "postgres".to_string());
                    Some(format!(
                        "postgres://{user}:{password}@{host}:{port}/{name}?sslmode=disable"
                    ))
                }
                None => None,
            },
        };

        Ok(Self {
            server_port,
            cors_origin,
            log_level,
            log_dir,
            database_url,
        })
    }
}

fn parse_port<F>(lookup: &F, key: &'static str, default: u16) -> Result<u16, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidPort { key, value, source }),
        None => Ok(default),
    }
}
