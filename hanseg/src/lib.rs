/*! Chinese word segmentation.

Segments unsegmented Chinese, and mixed CJK/Latin/digit text, into words.
Each run of ideographs, letters, digits and connectors is cut along the
maximum-weight path through the matches of a weighted dictionary trie;
stretches the dictionary only explains character by character are decoded
with a four-state hidden Markov model. An index mode additionally emits the
dictionary 2- and 3-grams of long words for search indexing.

# Usage examples

```no_run
use hanseg::segmenter::Segmenter;
use hanseg::types::Mode;

let segmenter = Segmenter::from_dir("dict")?;

for token in segmenter.seg_paragraph("我爱北京天安门", Mode::Search) {
    println!("{}..{} {}", token.start, token.end, token.word);
}
# Ok::<(), hanseg::segmenter::error::SegmenterError>(())
```

Keywords can be extracted with [`keywords::Tfidf`] from the same resource
directory. The `hanseg` binary in this repository wraps both.
*/

pub mod dict;
pub mod hmm;
pub mod keywords;
pub mod paths;
pub mod segmenter;
pub mod tokenizer;
pub mod types;

pub(crate) mod constants;

#[cfg(test)]
mod testing;

pub use crate::segmenter::{Segmenter, Token};
pub use crate::types::Mode;
