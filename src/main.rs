use anyhow::{Context, Result};
use boggle_check::config::Config;
use boggle_check::game::{BoardParser, GridGenerator, Solver};
use boggle_check::models::{Board, Position, WordReport};
use boggle_check::wordlist::WordList;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle_check=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let words = WordList::load(&config.game.word_list_path)
        .await
        .with_context(|| {
            format!(
                "failed to load word list from {}",
                config.game.word_list_path
            )
        })?;
    if words.is_empty() {
        tracing::warn!(
            "Word list {} is empty, nothing to check",
            config.game.word_list_path
        );
    }

    let board = load_board(&config).await?;
    println!("{}", board);
    println!();

    let mut found_count = 0;
    for word in words.iter() {
        let report = WordReport::new(word, Solver::find(&board, word));
        if report.found {
            found_count += 1;
        }

        if config.output.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", render_report(&report));
        }
    }

    tracing::info!("Found {}/{} words on the board", found_count, words.len());

    Ok(())
}

/// Load the board from the configured file, or generate a random one when no
/// file is configured
async fn load_board(config: &Config) -> Result<Board> {
    match &config.game.board_path {
        Some(path) => {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read board from {}", path))?;
            let board = BoardParser::parse(&text, config.game.board_size)?;
            tracing::info!("Loaded {}x{} board from {}", board.size(), board.size(), path);
            Ok(board)
        }
        None => {
            let board = GridGenerator::generate(config.game.board_size);
            tracing::info!(
                "No board file configured, generated a random {0}x{0} board",
                board.size()
            );
            Ok(board)
        }
    }
}

fn render_report(report: &WordReport) -> String {
    match &report.path {
        Some(path) => format!("FOUND {}  {}", report.word, render_path(path)),
        None => format!("{} not found", report.word),
    }
}

fn render_path(path: &[Position]) -> String {
    path.iter()
        .map(|pos| format!("({}, {})", pos.row, pos.col))
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    #[test]
    fn test_render_path() {
        let path = vec![pos(0, 3), pos(1, 3), pos(2, 3), pos(2, 4)];
        assert_eq!(render_path(&path), "(0, 3) -> (1, 3) -> (2, 3) -> (2, 4)");
    }

    #[test]
    fn test_render_found_report() {
        let report = WordReport::new("NOON", Some(vec![pos(0, 3), pos(1, 3)]));
        assert_eq!(render_report(&report), "FOUND NOON  (0, 3) -> (1, 3)");
    }

    #[test]
    fn test_render_missing_report() {
        let report = WordReport::new("CANON", None);
        assert_eq!(render_report(&report), "CANON not found");
    }
}
