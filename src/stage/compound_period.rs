use crate::lexicon::data::QUALIFIERS;
use crate::stage::{Stage, rewrite_with};
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Qualifier + weekend/quarter/half-year as fixed compound phrases.
///
/// 주말 is not decomposable into 주 + an independent unit, so this stage must
/// run before the generic period composition; otherwise "다음 주말" would be
/// half-consumed as "next week" + 말.
pub struct CompoundPeriod {
    re: Regex,
}

impl CompoundPeriod {
    pub fn new() -> Self {
        Self {
            re: Regex::new(r"(이번|다음|지난)\s*(주말|분기|반기)")
                .expect("compound period pattern is valid"),
        }
    }
}

impl Default for CompoundPeriod {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for CompoundPeriod {
    fn name(&self) -> &'static str {
        "compound_period"
    }

    fn needs_apply(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        rewrite_with(&self.re, text, |caps: &Captures| {
            let qualifier = QUALIFIERS.get(&caps[1]).copied().unwrap_or("this");
            let unit = match &caps[2] {
                "주말" => "weekend",
                "분기" => "quarter",
                _ => "half-year",
            };
            format!("{qualifier} {unit}")
        })
    }
}
