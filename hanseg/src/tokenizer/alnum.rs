//! Splitting of non-ideograph text inside the HMM fallback.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_SKIP: Regex = Regex::new(r"([0-9]+\.[0-9]+|[a-zA-Z0-9]+)").unwrap();
}

/// Splits `text` into decimal numbers and alphanumeric words. Text between two
/// matches is returned as one piece, so the pieces concatenate back to `text`.
pub fn split_alnum(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut offset = 0;

    for m in RE_SKIP.find_iter(text) {
        if m.start() > offset {
            pieces.push(&text[offset..m.start()]);
        }
        pieces.push(m.as_str());
        offset = m.end();
    }

    if offset < text.len() {
        pieces.push(&text[offset..]);
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_and_words() {
        assert_eq!(split_alnum("0.997和abc"), vec!["0.997", "和", "abc"]);
        assert_eq!(split_alnum("18.90"), vec!["18.90"]);
        assert_eq!(split_alnum("c++"), vec!["c", "++"]);
        assert_eq!(split_alnum("v1.2.3"), vec!["v1", ".", "2.3"]);
    }

    #[test]
    fn gaps_are_kept() {
        let text = "--a_b..9";
        assert_eq!(split_alnum(text), vec!["--", "a", "_", "b", "..", "9"]);
        assert_eq!(split_alnum(text).concat(), text);
    }

    #[test]
    fn no_matches() {
        assert_eq!(split_alnum("#&"), vec!["#&"]);
        assert!(split_alnum("").is_empty());
    }
}
