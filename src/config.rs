use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub db_name: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mongo_uri = env::var("MONGO_URI")
            .unwrap_or_else(|_| "mongodb://mongo:27017".to_string());

        let db_name = env::var("DB_NAME")
            .unwrap_or_else(|_| "simple_db".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            mongo_uri,
            db_name,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Mongo URI: {}", self.mongo_uri);
        tracing::info!("  Database: {}", self.db_name);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
