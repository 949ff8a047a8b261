//! TF-IDF keyword extraction over segmented text.
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use self::error::KeywordError;
use crate::dict::{DictTrie, Dictionary};
use crate::hmm::{HmmSeg, HmmSegmenter};
use crate::paths::ResourcePaths;
use crate::segmenter::Segmenter;
use crate::types::Mode;

pub mod error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: SmolStr,
    /// term frequency times inverse document frequency
    pub weight: f64,
}

pub struct Tfidf<D = DictTrie, H = HmmSegmenter> {
    idf: HashMap<SmolStr, f64>,
    median_idf: f64,
    stop_words: HashSet<SmolStr>,
    segmenter: Arc<Segmenter<D, H>>,
}

impl Tfidf {
    pub fn open(paths: &ResourcePaths, segmenter: Arc<Segmenter>) -> Result<Tfidf, KeywordError> {
        let idf = read_idf(open(&paths.idf_dict)?, SmolStr::new(paths.idf_dict.to_string_lossy()))?;
        let stop_words = read_stop_words(
            open(&paths.stop_words)?,
            SmolStr::new(paths.stop_words.to_string_lossy()),
        )?;

        log::info!("loaded {} IDF entries and {} stop words", idf.len(), stop_words.len());

        Ok(Tfidf::new(idf, stop_words, segmenter))
    }
}

impl<D, H> Tfidf<D, H>
where
    D: Dictionary,
    H: HmmSeg,
{
    pub fn new(
        idf: HashMap<SmolStr, f64>,
        stop_words: HashSet<SmolStr>,
        segmenter: Arc<Segmenter<D, H>>,
    ) -> Tfidf<D, H> {
        let median_idf = median(idf.values().copied());

        Tfidf {
            idf,
            median_idf,
            stop_words,
            segmenter,
        }
    }

    /// IDF used for words missing from the IDF dictionary.
    pub fn median_idf(&self) -> f64 {
        self.median_idf
    }

    /// The `n` highest-weighted words of `text`, heaviest first; equal
    /// weights are ordered by word.
    pub fn top_n(&self, text: &str, n: usize) -> Vec<Keyword> {
        self.term_frequencies(text)
            .into_iter()
            .map(|(word, tf)| {
                let idf = self.idf.get(&word).copied().unwrap_or(self.median_idf);
                Keyword {
                    word,
                    weight: tf * idf,
                }
            })
            .sorted_by(|a, b| {
                b.weight
                    .partial_cmp(&a.weight)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.word.cmp(&b.word))
            })
            .take(n)
            .collect()
    }

    fn term_frequencies(&self, text: &str) -> HashMap<SmolStr, f64> {
        let mut counts: HashMap<SmolStr, usize> = HashMap::new();
        let mut total = 0usize;

        for word in self.segmenter.cut(text, Mode::Search) {
            if word.chars().count() <= 1 || self.stop_words.contains(&word) {
                continue;
            }
            total += 1;
            *counts.entry(word).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / total as f64))
            .collect()
    }
}

fn open(path: &Path) -> Result<BufReader<File>, KeywordError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| KeywordError::Io {
            origin: SmolStr::new(path.to_string_lossy()),
            source,
        })
}

/// Reads `word idf` lines.
pub fn read_idf<R: BufRead>(reader: R, origin: SmolStr) -> Result<HashMap<SmolStr, f64>, KeywordError> {
    let mut idf = HashMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| KeywordError::Io {
            origin: origin.clone(),
            source,
        })?;
        let line_no = index + 1;
        let mut fields = line.split_whitespace();

        let (word, value) = match (fields.next(), fields.next()) {
            (Some(word), Some(value)) => (word, value),
            _ => {
                return Err(KeywordError::MalformedLine {
                    origin,
                    line_no,
                    line,
                })
            }
        };

        let value = value.parse::<f64>().map_err(|source| KeywordError::InvalidIdf {
            origin: origin.clone(),
            line_no,
            value: value.to_string(),
            source,
        })?;

        idf.insert(SmolStr::from(word), value);
    }

    Ok(idf)
}

/// Reads one stop word per line; surrounding whitespace and blank lines are ignored.
pub fn read_stop_words<R: BufRead>(reader: R, origin: SmolStr) -> Result<HashSet<SmolStr>, KeywordError> {
    let mut words = HashSet::new();

    for line in reader.lines() {
        let line = line.map_err(|source| KeywordError::Io {
            origin: origin.clone(),
            source,
        })?;
        let word = line.trim();
        if !word.is_empty() {
            words.insert(SmolStr::from(word));
        }
    }

    Ok(words)
}

fn median<I: Iterator<Item = f64>>(values: I) -> f64 {
    let sorted = values
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .collect::<Vec<_>>();

    sorted.get(sorted.len() / 2).copied().unwrap_or(0.0)
}
