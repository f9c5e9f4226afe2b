use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::models::DEFAULT_BOARD_SIZE;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Board file to load; when unset a random board is generated
    pub board_path: Option<String>,
    pub word_list_path: String,
    pub board_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Emit one JSON report per word instead of text lines
    pub json: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let game = GameConfig {
            board_path: env::var("BOARD_PATH").ok(),
            word_list_path: env::var("WORD_LIST_PATH")
                .unwrap_or_else(|_| "./words.txt".to_string()),
            board_size: env::var("BOARD_SIZE")
                .unwrap_or_else(|_| DEFAULT_BOARD_SIZE.to_string())
                .parse()
                .context("BOARD_SIZE must be a number")?,
        };

        if game.board_size == 0 {
            anyhow::bail!("BOARD_SIZE must be at least 1");
        }

        let output = OutputConfig {
            json: env::var("OUTPUT_JSON")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        };

        Ok(Config { game, output })
    }
}
