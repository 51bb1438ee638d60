use crate::lexicon::data::TIME_OF_DAY;
use crate::stage::{Stage, rewrite_with};
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Day + time-of-day composite: "내일 오후" → "tomorrow pm".
///
/// Composed here so the pair stays adjacent; the flat passes would translate
/// the words anyway, but only this stage guarantees the single-space form.
pub struct DayTime {
    re: Regex,
}

fn time_word_english(korean: &str) -> Option<&'static str> {
    TIME_OF_DAY
        .iter()
        .find(|(k, _)| *k == korean)
        .map(|(_, e)| *e)
}

impl DayTime {
    pub fn new() -> Self {
        Self {
            re: Regex::new(r"(오늘|내일|어제)\s*(오전|오후|아침|점심|저녁|밤|새벽)")
                .expect("day time pattern is valid"),
        }
    }
}

impl Default for DayTime {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for DayTime {
    fn name(&self) -> &'static str {
        "day_time"
    }

    fn needs_apply(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        rewrite_with(&self.re, text, |caps: &Captures| {
            let day = match &caps[1] {
                "오늘" => "today",
                "내일" => "tomorrow",
                _ => "yesterday",
            };
            match time_word_english(&caps[2]) {
                Some(time) => format!("{day} {time}"),
                None => caps[0].to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_day_and_time() {
        let stage = DayTime::new();
        assert_eq!(stage.apply("오늘 저녁".into()), "today evening");
        assert_eq!(stage.apply("내일 오후".into()), "tomorrow pm");
        assert_eq!(stage.apply("어제 밤".into()), "yesterday night");
        assert_eq!(stage.apply("내일새벽".into()), "tomorrow dawn");
    }
}
