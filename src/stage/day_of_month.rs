use crate::lexicon::{NumeralSystem, numeral_alternation, numeral_value, ordinal_suffix};
use crate::stage::{Stage, rewrite_with};
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Calendar day-of-month: `<magnitude> 일` → "Nth".
///
/// Runs after the directional-amount stage, so a surviving `N일` is a
/// day-of-month reference ("3월 15일" → "march 15th"), not an offset. A
/// trailing Hangul syllable vetoes the match; 일 followed by 요일 or 간 is
/// not a calendar day.
pub struct DayOfMonth {
    re: Regex,
}

impl DayOfMonth {
    pub fn new() -> Self {
        let alt = numeral_alternation();
        Self {
            re: Regex::new(&format!(r"({alt})\s*일([가-힣]?)"))
                .expect("day of month pattern is valid"),
        }
    }
}

impl Default for DayOfMonth {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for DayOfMonth {
    fn name(&self) -> &'static str {
        "day_of_month"
    }

    fn needs_apply(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        rewrite_with(&self.re, text, |caps: &Captures| {
            if !caps[2].is_empty() {
                return caps[0].to_string();
            }
            match numeral_value(&caps[1], NumeralSystem::Sino) {
                Some(n) if (1..=31).contains(&n) => format!("{n}{}", ordinal_suffix(n)),
                _ => caps[0].to_string(),
            }
        })
    }
}
