use crate::lexicon::{NumeralSystem, numeral_alternation, numeral_value};
use crate::stage::{Stage, rewrite_with};
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Time-of-day composer: 시/분 phrases to "H:MM am|pm", "H am|pm", "H:MM" or
/// "H o'clock", most specific first.
///
/// The lone-hour rule needs a negative lookahead: 시 directly followed by 간,
/// 분 or a digit belongs to the magnitude grammar ("3시간" is 3 hours). The
/// regex crate has no lookaround, so the trailing context is captured as an
/// optional group and such matches are vetoed inside the rewrite closure.
pub struct ClockTime {
    period_hour_minute: Regex,
    hour_minute: Regex,
    period_hour: Regex,
    lone_hour: Regex,
}

fn meridiem(korean: &str) -> &'static str {
    if korean == "오전" { "am" } else { "pm" }
}

fn hour_value(token: &str) -> Option<u32> {
    numeral_value(token, NumeralSystem::Native).filter(|h| (0..=24).contains(h))
}

fn minute_value(token: &str) -> Option<u32> {
    numeral_value(token, NumeralSystem::Sino).filter(|m| *m <= 59)
}

impl ClockTime {
    pub fn new() -> Self {
        let alt = numeral_alternation();
        let compile = |p: String| Regex::new(&p).expect("clock time pattern is valid");
        Self {
            period_hour_minute: compile(format!(
                r"(오전|오후)\s*({alt})\s*시\s*({alt})\s*분"
            )),
            hour_minute: compile(format!(r"({alt})\s*시\s*({alt})\s*분")),
            period_hour: compile(format!(r"(오전|오후)\s*({alt})\s*시(\s*[간분0-9])?")),
            lone_hour: compile(format!(r"({alt})\s*시(\s*[간분0-9])?")),
        }
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for ClockTime {
    fn name(&self) -> &'static str {
        "clock_time"
    }

    fn needs_apply(&self, text: &str) -> bool {
        // lone_hour is the weakest pattern and subsumes the other three.
        self.lone_hour.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut current = text;

        current = rewrite_with(&self.period_hour_minute, current, |caps: &Captures| {
            match (hour_value(&caps[2]), minute_value(&caps[3])) {
                (Some(h), Some(m)) => format!("{h}:{m:02} {}", meridiem(&caps[1])),
                _ => caps[0].to_string(),
            }
        });

        current = rewrite_with(&self.hour_minute, current, |caps: &Captures| {
            match (hour_value(&caps[1]), minute_value(&caps[2])) {
                (Some(h), Some(m)) => format!("{h}:{m:02}"),
                _ => caps[0].to_string(),
            }
        });

        current = rewrite_with(&self.period_hour, current, |caps: &Captures| {
            if caps.get(3).is_some() {
                return caps[0].to_string();
            }
            match hour_value(&caps[2]) {
                Some(h) => format!("{h} {}", meridiem(&caps[1])),
                None => caps[0].to_string(),
            }
        });

        rewrite_with(&self.lone_hour, current, |caps: &Captures| {
            if caps.get(2).is_some() {
                return caps[0].to_string();
            }
            match hour_value(&caps[1]) {
                Some(h) => format!("{h} o'clock"),
                None => caps[0].to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_hour_minute() {
        let stage = ClockTime::new();
        assert_eq!(stage.apply("오후 3시 30분".into()), "3:30 pm");
        assert_eq!(stage.apply("오전 9시 5분".into()), "9:05 am");
        assert_eq!(stage.apply("오후 세시 삼십분".into()), "3:30 pm");
    }

    #[test]
    fn hour_minute_without_period() {
        let stage = ClockTime::new();
        assert_eq!(stage.apply("3시 30분".into()), "3:30");
        assert_eq!(stage.apply("열시 오분".into()), "10:05");
    }

    #[test]
    fn period_hour() {
        let stage = ClockTime::new();
        assert_eq!(stage.apply("오후 3시".into()), "3 pm");
        assert_eq!(stage.apply("오전 여덟시".into()), "8 am");
    }

    #[test]
    fn lone_hour_is_oclock() {
        let stage = ClockTime::new();
        assert_eq!(stage.apply("3시".into()), "3 o'clock");
        assert_eq!(stage.apply("세시".into()), "3 o'clock");
    }

    #[test]
    fn magnitude_grammar_is_vetoed() {
        let stage = ClockTime::new();
        // 3시간 is "3 hours", never "3 o'clock" + 간.
        assert_eq!(stage.apply("3시간".into()), "3시간");
        assert_eq!(stage.apply("3시 30".into()), "3시 30");
        assert_eq!(stage.apply("오후 3시간".into()), "오후 3시간");
    }

    #[test]
    fn out_of_range_left_alone() {
        let stage = ClockTime::new();
        assert_eq!(stage.apply("99시".into()), "99시");
        assert_eq!(stage.apply("3시 99분".into()), "3시 99분");
    }
}
