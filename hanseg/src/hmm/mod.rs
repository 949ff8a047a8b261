//! Hidden Markov Model fallback for text the dictionary cannot explain.
//!
//! Four states (Begin, Middle, End, Single) are decoded with Viterbi over
//! runs of CJK ideographs; everything else is split on decimal numbers and
//! alphanumeric words.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use self::error::ModelError;
use self::state::State;
use crate::constants::MIN_FLOAT;
use crate::tokenizer::alnum::split_alnum;
use crate::tokenizer::is_cjk;
use crate::types::Weight;

pub mod error;
pub mod state;
mod viterbi;

pub use self::viterbi::viterbi;

pub trait HmmSeg {
    /// Splits `sentence` into words covering it exactly, in order.
    fn cut(&self, sentence: &[char]) -> Vec<SmolStr>;
}

/// Start and transition log-probabilities, indexed by [`State::index`].
/// Missing transitions count as [`MIN_FLOAT`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HmmConfig {
    pub start: [Weight; 4],
    /// `transition[from][to]`
    pub transition: [[Option<Weight>; 4]; 4],
}

impl HmmConfig {
    #[inline(always)]
    pub fn start(&self, state: State) -> Weight {
        self.start[state.index()]
    }

    #[inline(always)]
    pub fn transition(&self, from: State, to: State) -> Weight {
        self.transition[from.index()][to.index()].unwrap_or(MIN_FLOAT)
    }
}

impl Default for HmmConfig {
    fn default() -> HmmConfig {
        HmmConfig {
            start: [-0.26268660809250016, MIN_FLOAT, MIN_FLOAT, -1.4652633398537678],
            transition: [
                [None, Some(-0.916290731874155), Some(-0.510825623765990), None],
                [None, Some(-1.2603623820268226), Some(-0.33344856811948514), None],
                [Some(-0.5897149736854513), None, None, Some(-0.8085250474669937)],
                [Some(-0.7211965654669841), None, None, Some(-0.6658631448798212)],
            ],
        }
    }
}

/// Per-state emission log-probabilities.
#[derive(Debug, Default, Clone)]
pub struct Emissions {
    tables: [HashMap<char, Weight>; 4],
}

impl Emissions {
    pub fn open(path: &Path) -> Result<Emissions, ModelError> {
        let origin = SmolStr::new(path.to_string_lossy());
        let file = File::open(path).map_err(|source| ModelError::Io {
            origin: origin.clone(),
            source,
        })?;

        Emissions::read(BufReader::new(file), origin)
    }

    /// Reads a model where a single-field line names a state and starts a
    /// fresh table for it, and each `symbol logProb` line adds an emission.
    pub fn read<R: BufRead>(reader: R, origin: impl Into<SmolStr>) -> Result<Emissions, ModelError> {
        let origin = origin.into();
        let mut emissions = Emissions::default();
        let mut current: Option<State> = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ModelError::Io {
                origin: origin.clone(),
                source,
            })?;
            let line_no = index + 1;
            let mut fields = line.split_whitespace();

            match (fields.next(), fields.next()) {
                (None, _) => continue,
                (Some(name), None) => {
                    let state = name.chars().next().and_then(State::from_symbol).ok_or_else(|| {
                        ModelError::UnknownState {
                            origin: origin.clone(),
                            line_no,
                            symbol: name.to_string(),
                        }
                    })?;
                    log::debug!("reading emissions for state {} from {}", state.symbol(), origin);
                    emissions.tables[state.index()] = HashMap::new();
                    current = Some(state);
                }
                (Some(symbol), Some(value)) => {
                    let state = current.ok_or_else(|| ModelError::EmissionWithoutState {
                        origin: origin.clone(),
                        line_no,
                    })?;
                    let prob = value
                        .parse::<Weight>()
                        .map_err(|source| ModelError::InvalidProbability {
                            origin: origin.clone(),
                            line_no,
                            value: value.to_string(),
                            source,
                        })?;
                    if let Some(ch) = symbol.chars().next() {
                        emissions.tables[state.index()].insert(ch, prob);
                    }
                }
            }
        }

        Ok(emissions)
    }

    #[inline(always)]
    pub fn get(&self, state: State, ch: char) -> Weight {
        self.tables[state.index()]
            .get(&ch)
            .copied()
            .unwrap_or(MIN_FLOAT)
    }

    pub fn len(&self, state: State) -> usize {
        self.tables[state.index()].len()
    }
}

#[derive(Debug, Clone)]
pub struct HmmSegmenter {
    config: HmmConfig,
    emissions: Emissions,
}

impl HmmSegmenter {
    pub fn new(config: HmmConfig, emissions: Emissions) -> HmmSegmenter {
        HmmSegmenter { config, emissions }
    }

    pub fn open(path: &Path, config: HmmConfig) -> Result<HmmSegmenter, ModelError> {
        let emissions = Emissions::open(path)?;
        log::info!(
            "loaded HMM emissions from {} (B {}, M {}, E {}, S {})",
            path.display(),
            emissions.len(State::Begin),
            emissions.len(State::Middle),
            emissions.len(State::End),
            emissions.len(State::Single)
        );
        Ok(HmmSegmenter::new(config, emissions))
    }

    pub fn config(&self) -> &HmmConfig {
        &self.config
    }

    pub fn emissions(&self) -> &Emissions {
        &self.emissions
    }

    fn cut_ideographs(&self, chinese: &[char], words: &mut Vec<SmolStr>) {
        let states = viterbi(&self.config, &self.emissions, chinese);
        let word = |range: std::ops::Range<usize>| chinese[range].iter().copied().collect::<SmolStr>();

        let mut begin = 0;
        let mut next = 0;

        for (i, state) in states.into_iter().enumerate() {
            match state {
                State::Begin => begin = i,
                State::End => {
                    next = i + 1;
                    words.push(word(begin..next));
                }
                State::Single => {
                    next = i + 1;
                    words.push(word(i..next));
                }
                State::Middle => {}
            }
        }

        if next < chinese.len() {
            words.push(word(next..chinese.len()));
        }
    }
}

impl HmmSeg for HmmSegmenter {
    fn cut(&self, sentence: &[char]) -> Vec<SmolStr> {
        let mut words = vec![];

        let groups = sentence.iter().group_by(|&&ch| is_cjk(ch));

        for (ideographs, group) in &groups {
            if ideographs {
                let chinese = group.copied().collect::<Vec<char>>();
                log::trace!("hmm decoding {} ideographs", chinese.len());
                self.cut_ideographs(&chinese, &mut words);
            } else {
                let other = group.collect::<String>();
                words.extend(split_alnum(&other).into_iter().map(SmolStr::from));
            }
        }

        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = "\
B
三 -1.0
太 -1.0
M
黄 -9.0
E
鸡 -1.0
子 -1.0
S
元 -0.5
和 -0.5
奶 -0.5
黄 -3.0
";

    fn segmenter() -> HmmSegmenter {
        HmmSegmenter::new(HmmConfig::default(), Emissions::read(MODEL.as_bytes(), "test").unwrap())
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn single_ideograph() {
        let hmm = segmenter();
        for s in &["三", "元", "龘"] {
            assert_eq!(hmm.cut(&chars(s)), vec![SmolStr::from(*s)]);
        }
    }

    #[test]
    fn empty() {
        assert!(segmenter().cut(&[]).is_empty());
    }

    #[test]
    fn covers_mixed_input() {
        let text = "三黄鸡99元和太子奶18.90元";
        let words = segmenter().cut(&chars(text));
        assert_eq!(words.concat(), text);
        assert!(words.contains(&SmolStr::from("99")));
        assert!(words.contains(&SmolStr::from("18.90")));
    }

    #[test]
    fn decodes_words() {
        let words = segmenter().cut(&chars("太子奶"));
        assert_eq!(words, vec![SmolStr::from("太子"), SmolStr::from("奶")]);
    }

    #[test]
    fn begin_end_pair() {
        let config = HmmConfig {
            start: [0.0, MIN_FLOAT, MIN_FLOAT, MIN_FLOAT],
            transition: [[None; 4]; 4],
        };
        let hmm = HmmSegmenter::new(config, Emissions::default());
        let states = viterbi(hmm.config(), hmm.emissions(), &chars("甲乙"));
        assert_eq!(states, vec![State::Begin, State::End]);

        assert_eq!(hmm.cut(&chars("甲乙")), vec![SmolStr::from("甲乙")]);
    }

    #[test]
    fn other_runs_split_on_alnum() {
        let words = segmenter().cut(&chars("abc+12.5#x"));
        let words = words.iter().map(SmolStr::as_str).collect::<Vec<_>>();
        assert_eq!(words, vec!["abc", "+", "12.5", "#", "x"]);
    }

    #[test]
    fn model_state_lines_reset_tables() {
        let emissions = Emissions::read("S\n甲 -1\nS\n乙 -2\n\n".as_bytes(), "test").unwrap();
        assert_eq!(emissions.get(State::Single, '甲'), MIN_FLOAT);
        assert_eq!(emissions.get(State::Single, '乙'), -2.0);
        assert_eq!(emissions.len(State::Single), 1);
    }

    #[test]
    fn model_errors() {
        assert!(matches!(
            Emissions::read("甲 -1\n".as_bytes(), "test"),
            Err(ModelError::EmissionWithoutState { line_no: 1, .. })
        ));
        assert!(matches!(
            Emissions::read("B\n甲 -1\nX\n".as_bytes(), "test"),
            Err(ModelError::UnknownState { line_no: 3, .. })
        ));
        assert!(matches!(
            Emissions::read("B\n甲 often\n".as_bytes(), "test"),
            Err(ModelError::InvalidProbability { line_no: 2, .. })
        ));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Emissions::open(&dir.path().join("prob_emit.txt")),
            Err(ModelError::Io { .. })
        ));
    }

    #[test]
    fn config_from_json() {
        let json = r#"{
            "start": [-0.5, -1.0, -1.5, -2.0],
            "transition": [
                [null, -1.0, -0.5, null],
                [null, -1.0, -0.5, null],
                [-0.25, null, null, -0.75],
                [-0.25, null, null, -0.75]
            ]
        }"#;
        let config: HmmConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.start(State::End), -1.5);
        assert_eq!(config.transition(State::End, State::Begin), -0.25);
        assert_eq!(config.transition(State::Begin, State::Begin), MIN_FLOAT);
        assert_eq!(
            HmmConfig::default().transition(State::Single, State::Middle),
            MIN_FLOAT
        );
    }
}
