//! Small in-memory resources shared by unit tests.
use std::path::Path;

use crate::dict::loader::DictFile;
use crate::dict::DictTrie;
use crate::hmm::{Emissions, HmmConfig, HmmSegmenter};
use crate::segmenter::Segmenter;

pub(crate) const DICT: &str = "\
中国 1000
中华 300
人民 500
中华人民 800
共和国 400
中华人民共和国 200
我 900
爱 600
北京 700
天安门 400
太阳 300
桑干河 50
月亮 200
一 1000
二 1000
一二 1
的 2000
在 800
上 600
";

pub(crate) const MODEL: &str = "\
B
三 -1.0
太 -1.0
月 -2.0
E
鸡 -1.0
子 -1.0
光 -2.0
M
黄 -9.0
S
我 -1.0
爱 -1.0
元 -0.5
和 -0.5
奶 -0.5
黄 -3.0
";

pub(crate) const IDF: &str = "\
太阳 5.0
桑干河 10.0
月亮 3.0
中国 2.0
北京 4.0
";

pub(crate) const STOP_WORDS: &str = "的\n  在 \n\n上\n";

pub(crate) fn dictionary() -> DictTrie {
    DictTrie::from_files(DictFile::read(DICT.as_bytes(), "dict.txt").unwrap(), vec![]).unwrap()
}

pub(crate) fn hmm() -> HmmSegmenter {
    HmmSegmenter::new(
        HmmConfig::default(),
        Emissions::read(MODEL.as_bytes(), "prob_emit.txt").unwrap(),
    )
}

pub(crate) fn segmenter() -> Segmenter {
    Segmenter::new(dictionary(), hmm())
}

pub(crate) fn write_resources(root: &Path) {
    std::fs::write(root.join("dict.txt"), DICT).unwrap();
    std::fs::write(root.join("prob_emit.txt"), MODEL).unwrap();
    std::fs::write(root.join("idf_dict.txt"), IDF).unwrap();
    std::fs::write(root.join("stop_words.txt"), STOP_WORDS).unwrap();
}
