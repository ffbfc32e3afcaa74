//! Runtime configuration
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file, with safe defaults for anything unset.

use crate::shared::constants::{
    DEFAULT_LOG_LEVEL, ENV_LOG_LEVEL, ENV_MAX_CODE_CHARS, MAX_TOKEN_CODE_CHARACTERS,
};
use crate::shared::error::TokenCoreError;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoreConfig {
    /// Longest currency code accepted on add / edit
    pub max_token_code_characters: usize,
    pub log_level: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            max_token_code_characters: MAX_TOKEN_CODE_CHARACTERS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CoreConfig {
    /// Load configuration from .env (if present) and the environment
    pub fn from_env() -> Result<Self, TokenCoreError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TokenCoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_token_code_characters = match lookup(ENV_MAX_CODE_CHARS) {
            Some(raw) => {
                let value = raw.trim().parse::<usize>().map_err(|_| {
                    TokenCoreError::config(format!("{} must be a positive integer, got {:?}", ENV_MAX_CODE_CHARS, raw))
                })?;
                if value == 0 {
                    return Err(TokenCoreError::config(format!("{} must be greater than zero", ENV_MAX_CODE_CHARS)));
                }
                value
            }
            None => defaults.max_token_code_characters,
        };

        let log_level = match lookup(ENV_LOG_LEVEL) {
            Some(raw) => {
                let level = raw.trim().to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(TokenCoreError::config(format!("Unknown log level: {}", raw)));
                }
                level
            }
            None => defaults.log_level,
        };

        Ok(Self {
            max_token_code_characters,
            log_level,
        })
    }
}
