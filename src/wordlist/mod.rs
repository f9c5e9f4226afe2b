use anyhow::Result;
use std::path::Path;
use tokio::fs;

/// The words to check against a board, in file order.
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load a word list from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let words: Vec<String> = content
            .lines()
            .map(|line| line.trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        tracing::info!("Loaded {} words to check", words.len());

        Ok(Self { words })
    }

    /// Build a word list directly (for testing)
    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Iterate over the words in file order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Get the number of words in the list
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the word list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_word_list() {
        let words = WordList::from_words(Vec::new());
        assert!(words.is_empty());
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn test_iteration_preserves_order() {
        let words = WordList::from_words(vec!["NOON".to_string(), "NOPE".to_string()]);
        let collected: Vec<&str> = words.iter().collect();
        assert_eq!(collected, vec!["NOON", "NOPE"]);
    }

    #[test]
    fn test_load_trims_uppercases_and_skips_blanks() {
        let path = std::env::temp_dir().join("boggle-check-wordlist-test.txt");
        std::fs::write(&path, "  noon \nNOPE\n\n  \ncanon\n").unwrap();

        let words = tokio_test::block_on(WordList::load(&path)).unwrap();
        let collected: Vec<&str> = words.iter().collect();
        assert_eq!(collected, vec!["NOON", "NOPE", "CANON"]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("boggle-check-no-such-file.txt");
        assert!(tokio_test::block_on(WordList::load(&path)).is_err());
    }
}
