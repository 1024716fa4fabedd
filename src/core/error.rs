//! Error types for rejected player actions and config loading.
//!
//! Every `GameError` is recoverable: the operation that produced it left the
//! game untouched, and the presentation only needs to show the message.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("'{input}' is not a valid number")]
    InvalidAnswer { input: String },

    #[error("{reason}")]
    InvalidName { reason: String },

    #[error("not enough coins: costs {price}c, you have {available}c")]
    InsufficientFunds { price: u32, available: u64 },

    #[error("there is no problem to answer right now")]
    NoActiveProblem,

    #[error("the hero has fallen; restart to keep playing")]
    GameOver,

    #[error("the previous answer is still being resolved")]
    EffectPending,

    #[error("nothing is waiting to be resolved")]
    NothingPending,

    #[error("no item with id '{id}' in the inventory")]
    ItemNotFound { id: String },

    #[error("the shop is closed")]
    ShopClosed,

    #[error("the merchant does not sell '{id}'")]
    UnknownShopItem { id: String },

    #[error("a monster is already in the arena")]
    MonsterPresent,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_message() {
        let err = GameError::InsufficientFunds {
            price: 30,
            available: 12,
        };
        assert_eq!(err.to_string(), "not enough coins: costs 30c, you have 12c");
    }

    #[test]
    fn test_parse_error_converts() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ConfigError = parse.into();
        assert!(err.to_string().starts_with("invalid config"));
    }
}
