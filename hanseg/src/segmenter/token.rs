//! A segmented word with its position in the paragraph.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// A word of the output, located in code points of the regularised paragraph
pub struct Token {
    /// the word itself
    pub word: SmolStr,
    /// offset of the first code point
    pub start: usize,
    /// offset one past the last code point
    pub end: usize,
}

impl Token {
    pub fn new(word: SmolStr, start: usize, end: usize) -> Token {
        Token { word, start, end }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// length in code points
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}
