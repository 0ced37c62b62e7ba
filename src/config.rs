//! Console game configuration (JSON).
//!
//! ```json
//! {
//!   "white": { "kind": "human" },
//!   "black": { "kind": "computer", "depth": 3 },
//!   "max_plies": 200,
//!   "trace_search": false
//! }
//! ```
//!
//! Every field is optional; missing fields take the [`PlayConfig::default`] values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::cell::Side;
use crate::error::NeutronError;

/// Search depth used for computer players when none is given.
pub const DEFAULT_DEPTH: u32 = 3;

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Player {
    Human,
    Computer {
        #[serde(default = "default_depth")]
        depth: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub white: Player,
    pub black: Player,
    /// Stop the game after this many plies (`None`: play until decided).
    pub max_plies: Option<u32>,
    /// Route search events to the log at trace/debug level.
    pub trace_search: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            white: Player::Human,
            black: Player::Computer {
                depth: DEFAULT_DEPTH,
            },
            max_plies: None,
            trace_search: false,
        }
    }
}

impl PlayConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NeutronError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| NeutronError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: PlayConfig =
            serde_json::from_slice(&bytes).map_err(|source| NeutronError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), NeutronError> {
        for side in [Side::White, Side::Black] {
            if let Player::Computer { depth: 0 } = self.player(side) {
                return Err(NeutronError::InvalidConfig {
                    reason: format!("{side:?} computer depth must be >= 1"),
                });
            }
        }
        if self.max_plies == Some(0) {
            return Err(NeutronError::InvalidConfig {
                reason: "max_plies must be >= 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn player(&self, side: Side) -> Player {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }
}
