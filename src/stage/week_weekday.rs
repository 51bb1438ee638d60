use crate::lexicon::data::{QUALIFIERS, WEEKDAY_ABBREV};
use crate::stage::{Stage, rewrite_with};
use regex::{Captures, Regex};
use std::borrow::Cow;

const WEEKDAYS_FULL_ALT: &str = "월요일|화요일|수요일|목요일|금요일|토요일|일요일";

/// Qualifier [+ 주] + weekday → "<this|next|last> <weekday>".
///
/// The week word is dropped, not preserved: the downstream parser expects
/// "next tuesday", never "next week tuesday". A week-scoped weekday always
/// wins over a bare month reading, so "다음 주 월" is Monday even though
/// "다음 월" is a month; this stage runs before the period composition.
///
/// Single-syllable abbreviations are boundary-guarded: a trailing Hangul
/// character vetoes the match, so "다음 주 수업" is not "next wednesday" + 업.
/// Bare qualifier + abbreviation is accepted for 화수목금토 only; 월 belongs
/// to the month rule and a bare 일 is too ambiguous outside week scope.
pub struct WeekWeekday {
    week_full: Regex,
    week_abbrev: Regex,
    bare_full: Regex,
    bare_abbrev: Regex,
}

fn weekday_english(token: &str) -> Option<&'static str> {
    let first = token.chars().next()?;
    WEEKDAY_ABBREV.get(first.to_string().as_str()).copied()
}

fn qualifier_english(token: &str) -> &'static str {
    QUALIFIERS.get(token).copied().unwrap_or("this")
}

impl WeekWeekday {
    pub fn new() -> Self {
        let compile = |p: &str| Regex::new(p).expect("week weekday pattern is valid");
        Self {
            week_full: compile(&format!(r"(이번|다음|지난)\s*주\s*({WEEKDAYS_FULL_ALT})")),
            week_abbrev: compile(r"(이번|다음|지난)\s*주\s+([월화수목금토일])([가-힣]?)"),
            bare_full: compile(&format!(r"(이번|다음|지난)\s*({WEEKDAYS_FULL_ALT})")),
            bare_abbrev: compile(r"(이번|다음|지난)\s+([화수목금토])([가-힣]?)"),
        }
    }

    fn compose(caps: &Captures) -> String {
        match weekday_english(&caps[2]) {
            Some(day) => format!("{} {day}", qualifier_english(&caps[1])),
            None => caps[0].to_string(),
        }
    }

    fn compose_guarded(caps: &Captures) -> String {
        // A following Hangul syllable means the "abbreviation" is really the
        // start of a longer word; leave the text alone.
        if !caps[3].is_empty() {
            return caps[0].to_string();
        }
        Self::compose(caps)
    }
}

impl Default for WeekWeekday {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for WeekWeekday {
    fn name(&self) -> &'static str {
        "week_weekday"
    }

    fn needs_apply(&self, text: &str) -> bool {
        self.week_full.is_match(text)
            || self.week_abbrev.is_match(text)
            || self.bare_full.is_match(text)
            || self.bare_abbrev.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut current = text;
        for (re, guarded) in [
            (&self.week_full, false),
            (&self.week_abbrev, true),
            (&self.bare_full, false),
            (&self.bare_abbrev, true),
        ] {
            current = rewrite_with(re, current, |caps: &Captures| {
                if guarded {
                    Self::compose_guarded(caps)
                } else {
                    Self::compose(caps)
                }
            });
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_scoped_full_names() {
        let stage = WeekWeekday::new();
        assert_eq!(stage.apply("다음 주 화요일".into()), "next tuesday");
        assert_eq!(stage.apply("지난 주 금요일".into()), "last friday");
        assert_eq!(stage.apply("이번주월요일".into()), "this monday");
    }

    #[test]
    fn week_scoped_abbreviations() {
        let stage = WeekWeekday::new();
        assert_eq!(stage.apply("다음 주 월".into()), "next monday");
        assert_eq!(stage.apply("다음 주 일".into()), "next sunday");
    }

    #[test]
    fn abbreviation_guard_blocks_longer_words() {
        let stage = WeekWeekday::new();
        assert_eq!(stage.apply("다음 주 수업".into()), "다음 주 수업");
    }

    #[test]
    fn bare_qualifier_weekday() {
        let stage = WeekWeekday::new();
        assert_eq!(stage.apply("다음 월요일".into()), "next monday");
        assert_eq!(stage.apply("다음 화".into()), "next tuesday");
        // 월 without 주 scope is a month reference, not Monday.
        assert!(!stage.needs_apply("다음 월"));
    }
}
