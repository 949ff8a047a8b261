use crate::tokenizer::CharClass;
use crate::types::Segment;

/// A maximal stretch of a regularised paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run {
    /// CJK ideographs, ASCII letters, digits and connectors; goes to the dictionary.
    Sentence(Segment),
    /// Any other code point, emitted on its own.
    Single(usize),
}

/// Splits a regularised paragraph into [`Run`]s.
pub struct Runs<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Runs<'a> {
    pub fn new(chars: &'a [char]) -> Runs<'a> {
        Runs { chars, pos: 0 }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let start = self.pos;
        let first = *self.chars.get(start)?;

        if !CharClass::of(first).is_segmentable() {
            self.pos += 1;
            return Some(Run::Single(start));
        }

        let len = self.chars[start..]
            .iter()
            .take_while(|&&ch| CharClass::of(ch).is_segmentable())
            .count();
        self.pos = start + len;

        Some(Run::Sentence(Segment::new(start, self.pos)))
    }
}
