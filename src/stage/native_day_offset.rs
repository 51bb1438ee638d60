use crate::lexicon::data::NATIVE_DAYS;
use crate::stage::{Stage, rewrite_with};
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Closed native day-name set plus a direction marker:
/// 하루 후 → "in 1 day", 이틀 전 → "2 days ago".
///
/// Runs before generic magnitude extraction because these names are irregular
/// words, not numeral + unit compounds, and must not be parsed as unit-less
/// amounts.
pub struct NativeDayOffset {
    re: Regex,
}

impl NativeDayOffset {
    pub fn new() -> Self {
        let names: Vec<&str> = NATIVE_DAYS.iter().map(|(k, _)| *k).collect();
        let pattern = format!(r"({})\s*(후|뒤|전|앞)", names.join("|"));
        Self {
            re: Regex::new(&pattern).expect("native day offset pattern is valid"),
        }
    }

    fn english_count(name: &str) -> Option<&'static str> {
        NATIVE_DAYS
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, e)| *e)
    }
}

impl Default for NativeDayOffset {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for NativeDayOffset {
    fn name(&self) -> &'static str {
        "native_day_offset"
    }

    fn needs_apply(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        rewrite_with(&self.re, text, |caps: &Captures| {
            let count = match Self::english_count(&caps[1]) {
                Some(c) => c,
                None => return caps[0].to_string(),
            };
            match &caps[2] {
                "후" | "뒤" => format!("in {count}"),
                _ => format!("{count} ago"),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn future_and_past_markers() {
        let stage = NativeDayOffset::new();
        assert_eq!(stage.apply("하루 후".into()), "in 1 day");
        assert_eq!(stage.apply("이틀 뒤".into()), "in 2 days");
        assert_eq!(stage.apply("사흘 전".into()), "3 days ago");
        assert_eq!(stage.apply("열흘 앞".into()), "10 days ago");
    }

    #[test]
    fn spacing_insensitive() {
        let stage = NativeDayOffset::new();
        assert_eq!(stage.apply("닷새후".into()), "in 5 days");
    }

    #[test]
    fn bare_name_left_for_lexicon_pass() {
        let stage = NativeDayOffset::new();
        assert!(!stage.needs_apply("하루"));
    }
}
