use crate::lexicon::{NumeralSystem, numeral_alternation, numeral_value};
use crate::stage::{Stage, rewrite_with};
use regex::{Captures, Regex};
use std::borrow::Cow;

/// `<magnitude> <unit> <direction-marker>` → "in N units" / "N units ago".
///
/// Magnitude may be Arabic digits or a token from either numeral system; the
/// unit's conventional system is tried first and the other is the fallback,
/// so mixed-convention input (삼일 후, 세 시간 후) resolves either way.
/// 후/뒤 point forward, 전/앞 backward; without a marker this stage leaves
/// the phrase for the clock-time composer or as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Hour,
    Minute,
    Second,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    fn korean_pattern(self) -> &'static str {
        match self {
            TimeUnit::Hour => "시간",
            TimeUnit::Minute => "분",
            TimeUnit::Second => "초",
            TimeUnit::Day => "일",
            TimeUnit::Week => "주",
            TimeUnit::Month => "(?:개월|달|월)",
            TimeUnit::Year => "년",
        }
    }

    fn english(self, n: u32) -> String {
        let singular = match self {
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        };
        if n == 1 {
            singular.to_string()
        } else {
            format!("{singular}s")
        }
    }

    /// Hours and weeks count with native numerals by convention; everything
    /// else is Sino-Korean. Only a preference; resolution tries both.
    pub fn preferred_system(self) -> NumeralSystem {
        match self {
            TimeUnit::Hour | TimeUnit::Week => NumeralSystem::Native,
            _ => NumeralSystem::Sino,
        }
    }
}

struct AmountRule {
    re: Regex,
    unit: TimeUnit,
}

pub struct DirectionalAmount {
    rules: Vec<AmountRule>,
}

impl DirectionalAmount {
    pub fn new() -> Self {
        let alt = numeral_alternation();
        let units = [
            TimeUnit::Hour,
            TimeUnit::Minute,
            TimeUnit::Second,
            TimeUnit::Day,
            TimeUnit::Week,
            TimeUnit::Month,
            TimeUnit::Year,
        ];
        let rules = units
            .into_iter()
            .map(|unit| AmountRule {
                re: Regex::new(&format!(
                    r"({alt})\s*{}\s*(후|뒤|전|앞)",
                    unit.korean_pattern()
                ))
                .expect("directional amount pattern is valid"),
                unit,
            })
            .collect();
        Self { rules }
    }
}

impl Default for DirectionalAmount {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for DirectionalAmount {
    fn name(&self) -> &'static str {
        "directional_amount"
    }

    fn needs_apply(&self, text: &str) -> bool {
        self.rules.iter().any(|r| r.re.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut current = text;
        for rule in &self.rules {
            current = rewrite_with(&rule.re, current, |caps: &Captures| {
                let n = match numeral_value(&caps[1], rule.unit.preferred_system()) {
                    Some(n) => n,
                    None => return caps[0].to_string(),
                };
                let units = rule.unit.english(n);
                match &caps[2] {
                    "후" | "뒤" => format!("in {n} {units}"),
                    _ => format!("{n} {units} ago"),
                }
            });
        }
        current
    }
}
