use crate::stage::{Stage, rewrite_with};
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Whole-phrase year references, tolerant of internal whitespace
/// (올해, 내년, "다음 해", 재작년, …).
///
/// Runs before the qualifier passes so the 다음 inside 다음해 is consumed
/// here and never captured as a lone qualifier. 재작년 sits first in the
/// alternation because it contains 작년.
pub struct YearReference {
    re: Regex,
}

impl YearReference {
    pub fn new() -> Self {
        let pattern = [
            r"재작\s*년",
            r"이번\s*해",
            r"이번\s*년",
            r"다음\s*해",
            r"다음\s*년",
            r"이듬\s*해",
            r"지난\s*해",
            r"지난\s*년",
            r"올\s*해",
            r"금\s*년",
            r"내\s*년",
            r"작\s*년",
        ]
        .join("|");
        Self {
            re: Regex::new(&format!("({pattern})")).expect("year reference pattern is valid"),
        }
    }

    fn canonical(compact: &str) -> Option<&'static str> {
        Some(match compact {
            "재작년" => "two years ago",
            "올해" | "금년" | "이번해" | "이번년" => "this year",
            "내년" | "다음해" | "다음년" | "이듬해" => "next year",
            "작년" | "지난해" | "지난년" => "last year",
            _ => return None,
        })
    }
}

impl Default for YearReference {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for YearReference {
    fn name(&self) -> &'static str {
        "year_reference"
    }

    fn needs_apply(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        rewrite_with(&self.re, text, |caps: &Captures| {
            let compact: String = caps[1].chars().filter(|c| !c.is_whitespace()).collect();
            match Self::canonical(&compact) {
                Some(english) => english.to_string(),
                None => caps[0].to_string(),
            }
        })
    }
}
