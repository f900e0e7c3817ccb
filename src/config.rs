use std::env;
use thiserror::Error;

use crate::models::Entity;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3002;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Unknown handler '{0}' in ENABLED_HANDLERS")]
    UnknownHandler(String),

    #[error("PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),

    #[error("ENABLED_HANDLERS names no handler")]
    NoHandlers,
}

/// One hosted entity handler and the collection it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub entity: Entity,
    pub collection: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub mongo_db: String,
    pub handlers: Vec<HandlerConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (the process environment
    /// in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = non_blank("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match non_blank("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let mongo_uri = non_blank("MONGO_URI").ok_or(ConfigError::Missing("MONGO_URI"))?;
        let mongo_db = non_blank("MONGO_DB").ok_or(ConfigError::Missing("MONGO_DB"))?;

        let enabled = match non_blank("ENABLED_HANDLERS") {
            Some(raw) => parse_handlers(&raw)?,
            None => Entity::ALL.to_vec(),
        };

        let mut handlers = Vec::with_capacity(enabled.len());
        for entity in enabled {
            let collection = non_blank(entity.collection_env())
                .or_else(|| entity.fallback_collection_env().and_then(|key| non_blank(key)))
                .ok_or(ConfigError::Missing(entity.collection_env()))?;
            handlers.push(HandlerConfig { entity, collection });
        }

        for (i, handler) in handlers.iter().enumerate() {
            if let Some(other) = handlers[..i].iter().find(|h| h.collection == handler.collection) {
                log::warn!(
                    "⚠️ {} and {} share collection '{}'",
                    other.entity,
                    handler.entity,
                    handler.collection
                );
            }
        }

        Ok(Config {
            host,
            port,
            mongo_uri,
            mongo_db,
            handlers,
        })
    }
}

/// Comma separated entity names; duplicates collapse, order is kept.
fn parse_handlers(raw: &str) -> Result<Vec<Entity>, ConfigError> {
    let mut entities = Vec::new();
    for name in raw.split(',').filter(|name| !name.trim().is_empty()) {
        let entity: Entity = name
            .parse()
            .map_err(|_| ConfigError::UnknownHandler(name.trim().to_string()))?;
        if !entities.contains(&entity) {
            entities.push(entity);
        }
    }
    if entities.is_empty() {
        return Err(ConfigError::NoHandlers);
    }
    Ok(entities)
}
