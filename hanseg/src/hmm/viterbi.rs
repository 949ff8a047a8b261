use super::state::State;
use super::{Emissions, HmmConfig};
use crate::types::Weight;

/// Decodes the most likely state sequence for a run of ideographs.
///
/// Among predecessors with equal score the later one in [`State::prev`]
/// order is kept. At the last character End is chosen unless Single is
/// strictly more likely.
pub fn viterbi(config: &HmmConfig, emissions: &Emissions, sentence: &[char]) -> Vec<State> {
    let len = sentence.len();
    if len == 0 {
        return vec![];
    }

    let mut v: Vec<[Weight; 4]> = vec![[0.0; 4]; len];
    let mut back: Vec<[State; 4]> = vec![State::ALL; len];

    for y in State::ALL {
        v[0][y.index()] = config.start(y) + emissions.get(y, sentence[0]);
    }

    for i in 1..len {
        let ch = sentence[i];

        for y in State::ALL {
            let emission = emissions.get(y, ch);
            let score = |y0: State| config.transition(y0, y) + emission + v[i - 1][y0.index()];

            let prev = y.prev();
            let mut best_prev = prev[0];
            let mut best_score = score(prev[0]);
            for &y0 in &prev[1..] {
                let s = score(y0);
                if best_score <= s {
                    best_prev = y0;
                    best_score = s;
                }
            }

            v[i][y.index()] = best_score;
            back[i][y.index()] = best_prev;
        }
    }

    let last = &v[len - 1];
    let mut state = if last[State::End.index()] < last[State::Single.index()] {
        State::Single
    } else {
        State::End
    };

    let mut states = vec![state; len];
    for i in (1..len).rev() {
        state = back[i][state.index()];
        states[i - 1] = state;
    }

    states
}
