use serde::{Deserialize, Serialize};

/// Position of a character within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    Begin,
    Middle,
    End,
    Single,
}

impl State {
    pub const ALL: [State; 4] = [State::Begin, State::Middle, State::End, State::Single];

    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            State::Begin => 0,
            State::Middle => 1,
            State::End => 2,
            State::Single => 3,
        }
    }

    /// States allowed to precede `self`, in enumeration order.
    #[inline(always)]
    pub fn prev(self) -> [State; 2] {
        match self {
            State::Begin => [State::End, State::Single],
            State::Middle => [State::Middle, State::Begin],
            State::Single => [State::Single, State::End],
            State::End => [State::Begin, State::Middle],
        }
    }

    pub fn from_symbol(ch: char) -> Option<State> {
        match ch {
            'B' => Some(State::Begin),
            'M' => Some(State::Middle),
            'E' => Some(State::End),
            'S' => Some(State::Single),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            State::Begin => 'B',
            State::Middle => 'M',
            State::End => 'E',
            State::Single => 'S',
        }
    }
}
