//! Errors raised outside the simulation core
//!
//! The simulation itself is total; only configuration and host setup fail.

use std::fmt;

#[derive(Debug)]
pub enum GameError {
    /// Config parsed but describes an unplayable game
    InvalidConfig(String),
    /// Config JSON could not be parsed
    ConfigParse(serde_json::Error),
    /// The drawing surface has no 2D context
    Unsupported2dContext,
    /// Browser host setup failed (missing window, canvas, ...)
    Host(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
            GameError::ConfigParse(e) => write!(f, "config parse error: {}", e),
            GameError::Unsupported2dContext => write!(f, "2D drawing context not supported"),
            GameError::Host(reason) => write!(f, "host error: {}", reason),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::ConfigParse(e)
    }
}
