use crate::stage::Stage;
use std::borrow::Cow;

/// One flat lexicon pass: every non-overlapping occurrence of each Korean
/// token is replaced globally, in table order.
///
/// Table order is the only sequencing guarantee inside a pass, which is why
/// the data module keeps containing tokens (11월, 상반기, 십일) ahead of their
/// substrings. Replacements are Latin-alphabet by the lexicon self-check, so
/// no later pass can re-match them.
pub struct LexiconSubst {
    name: &'static str,
    table: Vec<(String, String)>,
}

impl LexiconSubst {
    pub fn new(name: &'static str, table: Vec<(String, String)>) -> Self {
        Self { name, table }
    }

    #[cfg(test)]
    pub fn from_static(name: &'static str, table: &[(&str, &str)]) -> Self {
        Self::new(
            name,
            table
                .iter()
                .map(|(k, e)| ((*k).to_string(), (*e).to_string()))
                .collect(),
        )
    }
}

impl Stage for LexiconSubst {
    fn name(&self) -> &'static str {
        self.name
    }

    fn needs_apply(&self, text: &str) -> bool {
        self.table.iter().any(|(korean, _)| text.contains(korean))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut current = text;
        for (korean, english) in &self.table {
            if current.contains(korean.as_str()) {
                current = Cow::Owned(current.replace(korean.as_str(), english));
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::data::{BASIC_DAYS, MONTH_DIGITS};
    use crate::lexicon::numeral_tokens;

    #[test]
    fn substitutes_globally() {
        let stage = LexiconSubst::from_static("basic days", BASIC_DAYS);
        assert_eq!(stage.apply("오늘 그리고 내일".into()), "today 그리고 tomorrow");
    }

    #[test]
    fn two_digit_months_win() {
        let stage = LexiconSubst::from_static("digit months", MONTH_DIGITS);
        assert_eq!(stage.apply("11월".into()), "november");
        assert_eq!(stage.apply("1월".into()), "january");
        assert_eq!(stage.apply("12월 1월".into()), "december january");
    }

    #[test]
    fn longest_numeral_token_wins() {
        let table = numeral_tokens()
            .into_iter()
            .map(|(t, v)| (t, v.to_string()))
            .collect();
        let stage = LexiconSubst::new("numerals", table);
        assert_eq!(stage.apply("십일".into()), "11");
        assert_eq!(stage.apply("오십오".into()), "55");
        assert_eq!(stage.apply("일곱".into()), "7");
    }

    #[test]
    fn zero_copy_when_no_token_present() {
        let stage = LexiconSubst::from_static("basic days", BASIC_DAYS);
        assert!(!stage.needs_apply("next tuesday"));
        let out = stage.apply("next tuesday".into());
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
