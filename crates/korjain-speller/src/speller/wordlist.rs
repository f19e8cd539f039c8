// Plain-text word list: one word per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use korjain_core::character::simple_lower;
use log::debug;

use super::{Dictionary, Speller};

/// Error type for word list loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to open word list {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read word list: {0}")]
    Read(#[from] io::Error),
}

/// An in-memory word list acting as both membership oracle and dictionary
/// enumerator.
///
/// Words are trimmed and lowercased on insertion. Duplicates are dropped;
/// enumeration follows first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
    index: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a word list from a reader.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut list = Self::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            list.insert(word);
        }
        debug!("loaded {} words", list.len());
        Ok(list)
    }

    /// Load a word list from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("reading word list from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    /// Trim and lowercase `word` the way stored entries are.
    pub fn normalize(word: &str) -> String {
        word.trim().chars().map(simple_lower).collect()
    }

    /// Add a word. Returns `false` if it was already present (or empty
    /// after trimming).
    pub fn insert(&mut self, word: &str) -> bool {
        let word = Self::normalize(word);
        if word.is_empty() || self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            list.insert(word.as_ref());
        }
        list
    }
}

impl Speller for WordList {
    fn spell(&self, word: &[char]) -> bool {
        let s: String = word.iter().collect();
        self.index.contains(&s)
    }
}

impl Dictionary for WordList {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter())
    }
}
