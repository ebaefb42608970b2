use crate::domain::narration::{ChunkStrategy, DEFAULT_MAX_CHUNK_SIZE};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub aws_region: String,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Article + audio storage; None keeps everything in memory
    pub content_bucket_name: Option<String>,
    // Narration pipeline
    pub max_chunk_size: usize,
    pub chunk_strategy: ChunkStrategy,
    pub fallback_language: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            content_bucket_name: env::var("CONTENT_REPO_BUCKET_NAME")
                .ok()
                .filter(|bucket| !bucket.trim().is_empty()),
            max_chunk_size: env::var("MAX_CHUNK_SIZE")
                .unwrap_or_else(|_| DEFAULT_MAX_CHUNK_SIZE.to_string())
                .parse()?,
            chunk_strategy: env::var("CHUNK_STRATEGY")
                .unwrap_or_else(|_| "positional".to_string())
                .parse()?,
            fallback_language: env::var("FALLBACK_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
        };

        if config.environment == Environment::Production && config.content_bucket_name.is_none() {
            return Err("CONTENT_REPO_BUCKET_NAME is required in production".into());
        }

        Ok(config)
    }
}
