//! Paragraph segmentation.
//!
//! A paragraph is regularised, cut into runs of segmentable characters, and
//! each run is segmented along the best dictionary path. Stretches of
//! single-character matches are handed to the HMM unless they form a known
//! word. In [`Mode::Index`] every long word is followed by its dictionary
//! 2- and 3-grams.
use std::path::Path;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use self::error::SegmenterError;
use crate::dict::{DictTrie, Dictionary};
use crate::hmm::{HmmConfig, HmmSeg, HmmSegmenter};
use crate::paths::ResourcePaths;
use crate::tokenizer::{Run, Runs, Tokenize};
use crate::types::Mode;

pub mod error;
pub mod token;

pub use self::token::Token;

const GRAM_SIZES: [usize; 2] = [2, 3];

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SegmenterConfig {
    #[serde(default)]
    pub hmm: HmmConfig,
    /// Mode used by [`Segmenter::segment`].
    #[serde(default)]
    pub mode: Mode,
}

impl SegmenterConfig {
    pub fn from_json_file(path: &Path) -> Result<SegmenterConfig, SegmenterError> {
        let text = std::fs::read_to_string(path).map_err(|source| SegmenterError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| SegmenterError::ConfigFormat {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Immutable once built; share it behind an `Arc` between threads.
#[derive(Debug)]
pub struct Segmenter<D = DictTrie, H = HmmSegmenter> {
    dict: D,
    hmm: H,
    mode: Mode,
}

impl Segmenter {
    pub fn open(paths: &ResourcePaths, config: &SegmenterConfig) -> Result<Segmenter, SegmenterError> {
        let dict = DictTrie::open(&paths.base_dict, paths.user_dict_dir.as_deref())?;
        let hmm = HmmSegmenter::open(&paths.hmm_model, config.hmm.clone())?;

        Ok(Segmenter::new(dict, hmm).with_mode(config.mode))
    }

    /// Loads the conventional resource layout below `root` with the default configuration.
    pub fn from_dir<P: AsRef<Path>>(root: P) -> Result<Segmenter, SegmenterError> {
        Segmenter::open(&ResourcePaths::from_root(root), &SegmenterConfig::default())
    }
}

impl<D, H> Segmenter<D, H>
where
    D: Dictionary,
    H: HmmSeg,
{
    pub fn new(dict: D, hmm: H) -> Segmenter<D, H> {
        Segmenter {
            dict,
            hmm,
            mode: Mode::default(),
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Segmenter<D, H> {
        self.mode = mode;
        self
    }

    pub fn dictionary(&self) -> &D {
        &self.dict
    }

    pub fn hmm(&self) -> &H {
        &self.hmm
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn segment(&self, text: &str) -> Vec<Token> {
        self.seg_paragraph(text, self.mode)
    }

    /// Segments `text`. Offsets are code points of the regularised text,
    /// which has the same length as `text`.
    pub fn seg_paragraph(&self, text: &str, mode: Mode) -> Vec<Token> {
        let paragraph = text.regularized();
        let mut tokens = vec![];

        for run in Runs::new(&paragraph) {
            match run {
                Run::Single(pos) => {
                    let word = std::iter::once(paragraph[pos]).collect::<SmolStr>();
                    tokens.push(Token::new(word, pos, pos + 1));
                }
                Run::Sentence(seg) => {
                    let words = self.seg_sentence(&paragraph[seg.range()]);
                    self.accept(&mut tokens, words, seg.start, mode);
                }
            }
        }

        tokens
    }

    /// Words only, in order.
    pub fn cut(&self, text: &str, mode: Mode) -> Vec<SmolStr> {
        self.seg_paragraph(text, mode)
            .into_iter()
            .map(|token| token.word)
            .collect()
    }

    /// Segments one run of segmentable characters.
    pub fn seg_sentence(&self, sentence: &[char]) -> Vec<SmolStr> {
        let mut words = vec![];
        let mut from = 0;
        let mut to = 0;

        for seg in self.dict.match_sentence(sentence) {
            if seg.len() == 1 {
                to = seg.end;
                continue;
            }

            if to > from {
                self.flush(&sentence[from..to], &mut words);
            }

            words.push(sentence[seg.range()].iter().copied().collect());
            from = seg.end;
            to = seg.end;
        }

        if from < sentence.len() {
            self.flush(&sentence[from..], &mut words);
        }

        words
    }

    // A stretch of single-character matches is kept whole when it is a known
    // word, otherwise the HMM decides.
    fn flush(&self, stretch: &[char], words: &mut Vec<SmolStr>) {
        let word = stretch.iter().copied().collect::<SmolStr>();

        if self.dict.exist_short_word(&word) {
            words.push(word);
        } else {
            words.extend(self.hmm.cut(stretch));
        }
    }

    fn accept(&self, tokens: &mut Vec<Token>, words: Vec<SmolStr>, mut offset: usize, mode: Mode) {
        for word in words {
            let chars = word.chars().collect::<Vec<char>>();
            let end = offset + chars.len();

            if mode == Mode::Index {
                self.accept_grams(tokens, &chars, offset);
            }

            tokens.push(Token::new(word, offset, end));
            offset = end;
        }
    }

    fn accept_grams(&self, tokens: &mut Vec<Token>, chars: &[char], offset: usize) {
        if chars.len() <= 2 {
            return;
        }

        for size in GRAM_SIZES {
            if chars.len() <= size {
                continue;
            }

            for (i, gram) in chars.windows(size).enumerate() {
                let gram = gram.iter().copied().collect::<SmolStr>();
                if self.dict.exist_short_word(&gram) {
                    tokens.push(Token::new(gram, offset + i, offset + i + size));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testing;

    fn token(word: &str, start: usize, end: usize) -> Token {
        Token::new(SmolStr::from(word), start, end)
    }

    struct PanicHmm;

    impl HmmSeg for PanicHmm {
        fn cut(&self, sentence: &[char]) -> Vec<SmolStr> {
            panic!("unexpected hmm call for {:?}", sentence);
        }
    }

    #[test]
    fn dictionary_word() {
        let seg = testing::segmenter();
        assert_eq!(seg.seg_paragraph("中国", Mode::Search), vec![token("中国", 0, 2)]);
    }

    #[test]
    fn index_mode_adds_grams() {
        let seg = testing::segmenter();
        assert_eq!(
            seg.seg_paragraph("中华人民", Mode::Index),
            vec![
                token("中华", 0, 2),
                token("人民", 2, 4),
                token("中华人民", 0, 4),
            ]
        );
    }

    #[test]
    fn index_mode_three_grams() {
        let seg = testing::segmenter();
        let tokens = seg.seg_paragraph("爱中华人民共和国", Mode::Index);

        assert_eq!(
            tokens,
            vec![
                token("爱", 0, 1),
                token("中华", 1, 3),
                token("人民", 3, 5),
                token("共和国", 5, 8),
                token("中华人民共和国", 1, 8),
            ]
        );
    }

    #[test]
    fn index_mode_is_additive() {
        let seg = testing::segmenter();
        let text = "我爱北京天安门，中华人民共和国万岁";
        let search = seg.seg_paragraph(text, Mode::Search);
        let index = seg.seg_paragraph(text, Mode::Index);

        let mut rest = index.iter();
        for t in &search {
            assert!(rest.any(|x| x == t), "{:?} missing from index output", t);
        }
        assert!(index.len() > search.len());
    }

    #[test]
    fn hmm_for_unknown_stretch() {
        let seg = testing::segmenter();
        assert_eq!(
            seg.seg_paragraph("我爱北京天安门", Mode::Search),
            vec![
                token("我", 0, 1),
                token("爱", 1, 2),
                token("北京", 2, 4),
                token("天安门", 4, 7),
            ]
        );
    }

    #[test]
    fn known_stretch_skips_hmm() {
        let seg = Segmenter::new(testing::dictionary(), PanicHmm);
        assert_eq!(seg.seg_sentence(&['一', '二']), vec![SmolStr::from("一二")]);
        assert_eq!(seg.seg_sentence(&['的']), vec![SmolStr::from("的")]);
        assert_eq!(
            seg.seg_sentence(&['中', '国', '的']),
            vec![SmolStr::from("中国"), SmolStr::from("的")]
        );
    }

    #[test]
    fn offsets_across_runs() {
        let seg = testing::segmenter();
        let tokens = seg.seg_paragraph("中国。Ｈｅｌｌｏ World", Mode::Search);

        assert_eq!(
            tokens,
            vec![
                token("中国", 0, 2),
                token("。", 2, 3),
                token("hello", 3, 8),
                token(" ", 8, 9),
                token("world", 9, 14),
            ]
        );
    }

    #[test]
    fn tokens_cover_regularized_input() {
        let seg = testing::segmenter();
        let samples = [
            "",
            "   ",
            "三黄鸡99元和太子奶18.90元。",
            "Hello，ＷＯＲＬＤ！中国人民\u{3000}万岁",
            "c++与c#都是语言, a_b-c.d&e",
            "ａｂｃ１２３ 太阳照在桑干河上",
            "😄 emoji 中华人民共和国",
        ];

        for text in samples.iter() {
            let tokens = seg.seg_paragraph(text, Mode::Search);
            let joined = tokens.iter().map(Token::word).collect::<String>();
            assert_eq!(joined, text.regularized().into_iter().collect::<String>());

            let mut pos = 0;
            for t in &tokens {
                assert_eq!(t.start, pos, "{:?} in {:?}", t, text);
                assert_eq!(t.len(), t.word.chars().count());
                pos = t.end;
            }
            assert_eq!(pos, text.chars().count());
        }
    }

    #[test]
    fn cut_and_configured_mode() {
        let seg = testing::segmenter().with_mode(Mode::Index);
        assert_eq!(seg.mode(), Mode::Index);
        assert_eq!(seg.segment("中华人民").len(), 3);
        assert_eq!(
            seg.cut("中国人民", Mode::Search),
            vec![SmolStr::from("中国"), SmolStr::from("人民")]
        );
    }

    #[test]
    fn shared_between_threads() {
        let seg = Arc::new(testing::segmenter());
        let text = "我爱北京天安门，三黄鸡99元和太子奶18.90元。";
        let expected = seg.seg_paragraph(text, Mode::Index);

        let handles = (0..4)
            .map(|_| {
                let seg = Arc::clone(&seg);
                std::thread::spawn(move || seg.seg_paragraph(text, Mode::Index))
            })
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn open_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        testing::write_resources(dir.path());
        std::fs::create_dir(dir.path().join("user")).unwrap();
        std::fs::write(dir.path().join("user").join("extra.txt"), "万岁 300\n").unwrap();

        let seg = Segmenter::from_dir(dir.path()).unwrap();
        assert!(seg.dictionary().exist_short_word("万岁"));
        assert_eq!(
            seg.cut("中国万岁", Mode::Search),
            vec![SmolStr::from("中国"), SmolStr::from("万岁")]
        );
    }

    #[test]
    fn open_reports_missing_model() {
        let dir = tempfile::tempdir().unwrap();
        testing::write_resources(dir.path());
        std::fs::remove_file(dir.path().join("prob_emit.txt")).unwrap();

        assert!(matches!(
            Segmenter::from_dir(dir.path()),
            Err(SegmenterError::Model(_))
        ));
    }

    #[test]
    fn config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        std::fs::write(&path, r#"{"mode": "index"}"#).unwrap();
        let config = SegmenterConfig::from_json_file(&path).unwrap();
        assert_eq!(config.mode, Mode::Index);
        assert_eq!(config.hmm, HmmConfig::default());

        std::fs::write(&path, "{mode").unwrap();
        assert!(matches!(
            SegmenterConfig::from_json_file(&path),
            Err(SegmenterError::ConfigFormat { .. })
        ));
    }
}
