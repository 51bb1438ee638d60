use crate::lexicon::data::QUALIFIERS;
use crate::stage::{Stage, rewrite_with};
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Qualifier + period unit → "<this|next|last> <week|month>".
///
/// Carries the month/Monday disambiguation for the bare-qualifier case:
/// 월 right after a qualifier is "month" unless 요일 follows, in which case
/// the phrase was really a weekday ("다음 월요일"). Week-scoped weekday
/// references were already taken by the week_weekday stage, so by the time
/// this runs, "다음 주" really is a week.
pub struct PeriodReference {
    re: Regex,
}

/// Reading of 월 directly after a reference qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WolReading {
    Month,
    Monday,
}

/// 월 after a qualifier is a month unless 요일 follows. Week-scoped weekdays
/// (다음 주 월) never reach this rule; the week_weekday stage took them.
pub fn resolve_wol(followed_by_yoil: bool) -> WolReading {
    if followed_by_yoil {
        WolReading::Monday
    } else {
        WolReading::Month
    }
}

impl PeriodReference {
    pub fn new() -> Self {
        Self {
            re: Regex::new(r"(이번|다음|지난)\s*(주|달|월)(요일)?")
                .expect("period reference pattern is valid"),
        }
    }
}

impl Default for PeriodReference {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for PeriodReference {
    fn name(&self) -> &'static str {
        "period_reference"
    }

    fn needs_apply(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        rewrite_with(&self.re, text, |caps: &Captures| {
            let qualifier = QUALIFIERS.get(&caps[1]).copied().unwrap_or("this");
            let unit = &caps[2];
            if unit == "월" {
                return match resolve_wol(caps.get(3).is_some()) {
                    WolReading::Monday => format!("{qualifier} monday"),
                    WolReading::Month => format!("{qualifier} month"),
                };
            }
            if caps.get(3).is_some() {
                // 요일 after 주 or 달 is not a phrase this stage knows.
                return caps[0].to_string();
            }
            match unit {
                "주" => format!("{qualifier} week"),
                _ => format!("{qualifier} month"),
            }
        })
    }
}
