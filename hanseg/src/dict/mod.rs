//! Weighted dictionary trie.
//!
//! Every word is stored with `ln(freq / total)`, where `total` is the summed
//! raw frequency of the base dictionary. User dictionaries are normalised
//! against the same base total.
use std::path::Path;

use hashbrown::{HashMap, HashSet};
use smol_str::SmolStr;

use self::error::DictionaryError;
use self::graph::SegmentGraph;
use self::loader::{user_dict_files, DictFile};
use crate::types::{Segment, Weight, WeightedSegment};

pub mod error;
pub mod graph;
pub mod loader;

pub trait Dictionary {
    /// Returns the maximum-weight segmentation of `sentence`, in order.
    fn match_sentence(&self, sentence: &[char]) -> Vec<Segment>;

    /// Whether `word` was inserted verbatim by the base or a user dictionary.
    fn exist_short_word(&self, word: &str) -> bool;
}

#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    word_end: bool,
    weight: Weight,
}

impl TrieNode {
    #[inline(always)]
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// The stored weight, if a word ends at this node.
    #[inline(always)]
    pub fn weight(&self) -> Option<Weight> {
        if self.word_end {
            Some(self.weight)
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct DictTrie {
    root: TrieNode,
    total: f64,
    min_weight: Weight,
    short_words: HashSet<SmolStr>,
}

impl DictTrie {
    /// Loads the base dictionary and, if given, every file below `user_dir`.
    pub fn open(base: &Path, user_dir: Option<&Path>) -> Result<DictTrie, DictionaryError> {
        let base = DictFile::open(base)?;

        let users = match user_dir {
            Some(dir) => user_dict_files(dir)?
                .iter()
                .map(|path| {
                    log::debug!("loading user dictionary {}", path.display());
                    DictFile::open(path)
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => vec![],
        };

        DictTrie::from_files(base, users)
    }

    /// Builds the trie from already-read files. Later user files overwrite
    /// earlier entries for the same word.
    pub fn from_files<I>(base: DictFile, users: I) -> Result<DictTrie, DictionaryError>
    where
        I: IntoIterator<Item = DictFile>,
    {
        let total: f64 = base.entries.iter().map(|e| e.freq).sum();
        if total <= 0.0 {
            return Err(DictionaryError::EmptyBase(base.origin));
        }

        let mut trie = DictTrie {
            root: TrieNode::default(),
            total,
            min_weight: Weight::INFINITY,
            short_words: HashSet::with_capacity(base.len()),
        };

        for entry in &base.entries {
            let weight = trie.normalize(entry.freq);
            trie.min_weight = trie.min_weight.min(weight);
            trie.insert(&entry.word, weight);
        }

        log::info!(
            "loaded {} words from {} (total {}, min weight {})",
            base.len(),
            base.origin,
            trie.total,
            trie.min_weight
        );

        for file in users {
            for entry in &file.entries {
                let weight = trie.normalize(entry.freq);
                trie.insert(&entry.word, weight);
            }
            log::info!("loaded {} user words from {}", file.len(), file.origin);
        }

        Ok(trie)
    }

    #[inline(always)]
    fn normalize(&self, freq: f64) -> Weight {
        (freq / self.total).ln()
    }

    fn insert(&mut self, word: &str, weight: Weight) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_insert_with(TrieNode::default);
        }
        node.word_end = true;
        node.weight = weight;

        self.short_words.insert(SmolStr::from(word));
    }

    /// Every dictionary word starting at `from`, shortest first. When nothing
    /// matches, a single-character segment carrying the minimum base weight.
    pub fn match_forward(&self, from: usize, rest: &[char]) -> Vec<WeightedSegment> {
        let mut matches = vec![];
        let mut node = &self.root;

        for (size, &ch) in rest.iter().enumerate() {
            node = match node.child(ch) {
                Some(next) => next,
                None => break,
            };

            if let Some(weight) = node.weight() {
                matches.push(WeightedSegment::new(from, from + size + 1, weight));
            }
        }

        if matches.is_empty() && !rest.is_empty() {
            matches.push(WeightedSegment::new(from, from + 1, self.min_weight));
        }

        matches
    }

    /// Looks up the weight of a complete word.
    pub fn weight(&self, word: &str) -> Option<Weight> {
        let mut node = &self.root;
        for ch in word.chars() {
            node = node.child(ch)?;
        }
        node.weight()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn min_weight(&self) -> Weight {
        self.min_weight
    }

    pub fn word_count(&self) -> usize {
        self.short_words.len()
    }
}

impl Dictionary for DictTrie {
    fn match_sentence(&self, sentence: &[char]) -> Vec<Segment> {
        SegmentGraph::new(self, sentence).solve()
    }

    #[inline]
    fn exist_short_word(&self, word: &str) -> bool {
        self.short_words.contains(word)
    }
}
