use crate::lexicon::data::WEEKDAY_ABBREV;
use crate::script::is_hangul;
use crate::stage::Stage;
use std::borrow::Cow;

/// Boundary-safe single-syllable weekday pass, last in the pipeline.
///
/// A hand-rolled scanner instead of a regex: each candidate syllable is
/// replaced only when neither neighbor is Hangul, which keeps 수 inside 수업
/// intact. 일 never reaches this stage in flat context: the numeral pass has
/// already turned it into "1", matching the fixed category order in which the
/// Sino reading outranks the Sunday abbreviation.
pub struct WeekdayAbbrev;

fn abbrev_english(c: char) -> Option<&'static str> {
    WEEKDAY_ABBREV.get(c.to_string().as_str()).copied()
}

impl Stage for WeekdayAbbrev {
    fn name(&self) -> &'static str {
        "weekday_abbrev"
    }

    fn needs_apply(&self, text: &str) -> bool {
        text.chars().any(|c| abbrev_english(c).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut changed = false;

        for (i, &c) in chars.iter().enumerate() {
            let left_ok = i == 0 || !is_hangul(chars[i - 1]);
            let right_ok = chars.get(i + 1).is_none_or(|&n| !is_hangul(n));
            match abbrev_english(c) {
                Some(english) if left_ok && right_ok => {
                    out.push_str(english);
                    changed = true;
                }
                _ => out.push(c),
            }
        }

        if changed { Cow::Owned(out) } else { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_abbreviations_translate() {
        assert_eq!(WeekdayAbbrev.apply("월".into()), "monday");
        assert_eq!(WeekdayAbbrev.apply("다음 화".into()), "다음 tuesday");
        assert_eq!(WeekdayAbbrev.apply("금, 토".into()), "friday, saturday");
    }

    #[test]
    fn embedded_syllables_survive() {
        assert_eq!(WeekdayAbbrev.apply("수업".into()), "수업");
        assert_eq!(WeekdayAbbrev.apply("목걸이".into()), "목걸이");
        assert_eq!(WeekdayAbbrev.apply("주말".into()), "주말");
    }

    #[test]
    fn zero_copy_without_candidates() {
        let out = WeekdayAbbrev.apply("next tuesday".into());
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
