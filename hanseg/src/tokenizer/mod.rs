//! Character classification, regularisation and run scanning.
//!
//! Every function here maps one code point to one code point, so offsets
//! measured on regularised text are valid on the original input.
use unic_char_range::CharRange;

use crate::constants::{
    CJK_END, CJK_START, CONNECTORS, FULL_WIDTH_END, FULL_WIDTH_OFFSET, FULL_WIDTH_START,
    IDEOGRAPHIC_SPACE,
};

pub mod alnum;
pub mod runs;

pub use self::runs::{Run, Runs};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CharClass {
    Cjk,
    Letter,
    Digit,
    Connector,
    Other,
}

impl CharClass {
    #[inline(always)]
    pub fn of(ch: char) -> CharClass {
        if is_cjk(ch) {
            CharClass::Cjk
        } else if ch.is_ascii_alphabetic() {
            CharClass::Letter
        } else if ch.is_ascii_digit() {
            CharClass::Digit
        } else if is_connector(ch) {
            CharClass::Connector
        } else {
            CharClass::Other
        }
    }

    /// Whether a character of this class may take part in a dictionary run.
    #[inline(always)]
    pub fn is_segmentable(self) -> bool {
        self != CharClass::Other
    }
}

#[inline(always)]
pub fn is_cjk(ch: char) -> bool {
    CharRange::closed(CJK_START, CJK_END).contains(ch)
}

#[inline(always)]
pub fn is_connector(ch: char) -> bool {
    CONNECTORS.binary_search(&ch).is_ok()
}

/// Maps a code point to its canonical form: ideographic space to space,
/// full-width ASCII variants to half-width, upper-case ASCII to lower-case.
pub fn regularize(ch: char) -> char {
    if ch == IDEOGRAPHIC_SPACE {
        return ' ';
    }

    let cp = ch as u32;
    if (FULL_WIDTH_START..=FULL_WIDTH_END).contains(&cp) {
        if let Some(half) = char::from_u32(cp - FULL_WIDTH_OFFSET) {
            return half.to_ascii_lowercase();
        }
    }

    ch.to_ascii_lowercase()
}

pub trait Tokenize {
    fn regularized(&self) -> Vec<char>;
}

impl Tokenize for str {
    fn regularized(&self) -> Vec<char> {
        self.chars().map(regularize).collect()
    }
}
