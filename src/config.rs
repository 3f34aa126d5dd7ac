use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

use crate::processor::upload::UploadLimits;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub log_level: String,
    pub max_upload_bytes: u64,
    pub upload_extension: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let db_port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
        let db_name = env::var("DB_DATABASE").unwrap_or_else(|_| "railcar_trips".to_string());
        let db_user = env::var("DB_USER").unwrap_or_else(|_| "railcar".to_string());
        let db_pwd = env::var("DB_PWD").unwrap_or_else(|_| "railcar".to_string());

        let database_url = format!(
            "postgres://{}:{}@{}:{}/{}",
            db_user, db_pwd, db_host, db_port, db_name
        );

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| UploadLimits::DEFAULT_MAX_BYTES.to_string())
            .parse()
            .unwrap_or(UploadLimits::DEFAULT_MAX_BYTES);
        let upload_extension =
            env::var("UPLOAD_EXTENSION").unwrap_or_else(|_| UploadLimits::DEFAULT_EXTENSION.to_string());

        Ok(Self {
            database_url,
            db_max_connections,
            log_level,
            max_upload_bytes,
            upload_extension,
        })
    }

    pub fn upload_limits(&self) -> UploadLimits {
        UploadLimits {
            max_bytes: self.max_upload_bytes,
            extension: self.upload_extension.clone(),
        }
    }
}
