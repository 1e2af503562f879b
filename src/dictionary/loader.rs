//! Dictionary loading utilities
//!
//! Provides functions to load a dictionary from a file or convert embedded
//! constants.

use super::{Dictionary, DictionaryError};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load a dictionary from a whitespace-delimited word list file
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be read, or
/// [`DictionaryError::Empty`] if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use wordle_game::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = Dictionary::parse(&content)?;
    tracing::debug!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}

/// Convert embedded string slice to Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_game::dictionary::loader::words_from_slice;
/// use wordle_game::dictionary::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
