//! Reading `word frequency [ignored..]` dictionary files.
//!
//! Loading is two-pass: files are first read into [`RawEntry`] lists, which
//! [`DictTrie`](super::DictTrie) then normalises against the base total.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use smol_str::SmolStr;

use super::error::DictionaryError;

#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub word: SmolStr,
    pub freq: f64,
}

/// An in-memory dictionary file: its entries plus where they came from.
#[derive(Debug, Clone)]
pub struct DictFile {
    pub origin: SmolStr,
    pub entries: Vec<RawEntry>,
}

impl DictFile {
    pub fn open(path: &Path) -> Result<DictFile, DictionaryError> {
        let origin = SmolStr::new(path.to_string_lossy());
        let file = File::open(path).map_err(|source| DictionaryError::Io {
            origin: origin.clone(),
            source,
        })?;

        DictFile::read(BufReader::new(file), origin)
    }

    /// Reads entries from `reader`. A word repeated within the same file is
    /// skipped with a warning; the first occurrence is kept.
    pub fn read<R: BufRead>(reader: R, origin: impl Into<SmolStr>) -> Result<DictFile, DictionaryError> {
        let origin = origin.into();
        let mut seen = HashSet::new();
        let mut entries = vec![];

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| DictionaryError::Io {
                origin: origin.clone(),
                source,
            })?;
            let line_no = index + 1;
            let entry = parse_line(&line, &origin, line_no)?;

            if !seen.insert(entry.word.clone()) {
                log::warn!("{} is repeated in {} at line {}", entry.word, origin, line_no);
                continue;
            }

            entries.push(entry);
        }

        Ok(DictFile { origin, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_line(line: &str, origin: &SmolStr, line_no: usize) -> Result<RawEntry, DictionaryError> {
    let mut fields = line.split_whitespace();

    let (word, freq) = match (fields.next(), fields.next()) {
        (Some(word), Some(freq)) => (word, freq),
        _ => {
            return Err(DictionaryError::MalformedLine {
                origin: origin.clone(),
                line_no,
                line: line.to_string(),
            })
        }
    };

    let freq = freq
        .parse::<f64>()
        .map_err(|source| DictionaryError::InvalidFrequency {
            origin: origin.clone(),
            line_no,
            value: freq.to_string(),
            source,
        })?;

    if !freq.is_finite() || freq < 0.0 {
        return Err(DictionaryError::FrequencyOutOfRange {
            origin: origin.clone(),
            line_no,
            value: freq,
        });
    }

    Ok(RawEntry {
        word: SmolStr::from(word.to_lowercase()),
        freq,
    })
}

/// Lists every file below `dir`, recursively, in lexicographic order per directory.
pub fn user_dict_files(dir: &Path) -> Result<Vec<PathBuf>, DictionaryError> {
    if !dir.is_dir() {
        return Err(DictionaryError::MissingDirectory(dir.to_path_buf()));
    }

    let walker = globwalk::GlobWalkerBuilder::new(dir, "**/*")
        .file_type(globwalk::FileType::FILE)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()))
        .build()
        .map_err(|source| DictionaryError::Glob {
            path: dir.to_path_buf(),
            source,
        })?;

    walker
        .map(|entry| {
            entry
                .map(|e| e.into_path())
                .map_err(|source| DictionaryError::Walk {
                    path: dir.to_path_buf(),
                    source,
                })
        })
        .collect()
}
