use crate::types::Weight;

pub const BASE_DICT_NAME: &str = "dict.txt";
pub const USER_DICT_DIR_NAME: &str = "user";
pub const HMM_MODEL_NAME: &str = "prob_emit.txt";
pub const IDF_DICT_NAME: &str = "idf_dict.txt";
pub const STOP_WORDS_NAME: &str = "stop_words.txt";

/// Stands in for ln(0): impossible transitions and unseen emissions.
pub const MIN_FLOAT: Weight = -3.14e100;

pub const CJK_START: char = '\u{4E00}';
pub const CJK_END: char = '\u{9FFF}';

pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';
pub const FULL_WIDTH_START: u32 = 0xFF01;
pub const FULL_WIDTH_END: u32 = 0xFF5E;
pub const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

pub const CONNECTORS: [char; 6] = ['#', '&', '+', '-', '.', '_'];

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;

    #[test]
    fn test_FULL_WIDTH_OFFSET() {
        let start = char::from_u32(FULL_WIDTH_START - FULL_WIDTH_OFFSET);
        let end = char::from_u32(FULL_WIDTH_END - FULL_WIDTH_OFFSET);

        assert_eq!(start, Some('!'));
        assert_eq!(end, Some('~'));
    }

    #[test]
    fn test_CONNECTORS_sorted() {
        let mut sorted = CONNECTORS;
        sorted.sort_unstable();
        assert_eq!(sorted, CONNECTORS);
    }

    #[test]
    fn test_MIN_FLOAT_sums_stay_finite() {
        let total = MIN_FLOAT * 4.0;
        assert!(total.is_finite());
    }
}
