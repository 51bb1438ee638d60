//! Lexicon access: numeral-system resolution, the design-time table
//! self-check, and the supported-pattern catalogue.
//!
//! The tables themselves live in [`data`]; this module holds everything that
//! interprets them.

pub mod data;

use crate::script::contains_hangul;
use data::{NATIVE_NUMERALS, SINO_DIGITS, SINO_MAX};
use thiserror::Error;

/// Design-time lexicon defects, surfaced by [`verify_tables`] during
/// `TranslatorBuilder::build`. Never produced at normalization time.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("korean token `{token}` of `{category}` reappears inside replacement `{replacement}`")]
    TokenLeak {
        category: &'static str,
        token: String,
        replacement: String,
    },

    #[error("replacement `{replacement}` of `{category}` contains hangul and would be re-matched")]
    HangulReplacement {
        category: &'static str,
        replacement: String,
    },
}

/// The two Korean counting systems. Unit words decide which one is
/// conventional; magnitude resolution always falls back to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralSystem {
    Native,
    Sino,
}

/// Value of a native numeral token, if it is one.
pub fn native_value(token: &str) -> Option<u32> {
    NATIVE_NUMERALS.get(token).copied()
}

/// Compositional Sino-Korean numeral parse: `[multiplier] 십 [unit]`.
/// Accepts 일..구, 십, 십일.., 이십.., up to 구십구. Rejects anything with a
/// dangling digit (일이) or a doubled 십.
pub fn sino_value(token: &str) -> Option<u32> {
    let mut total = 0u32;
    let mut pending = 0u32;
    let mut seen_ten = false;

    for c in token.chars() {
        if c == '십' {
            if seen_ten {
                return None;
            }
            total += if pending == 0 { 10 } else { pending * 10 };
            pending = 0;
            seen_ten = true;
        } else if let Some(&d) = SINO_DIGITS.get(&c) {
            if pending != 0 {
                return None;
            }
            pending = d;
        } else {
            return None;
        }
    }

    match total + pending {
        0 => None,
        v => Some(v),
    }
}

/// Resolve a magnitude token: Arabic digits, then the unit's conventional
/// system, then the other one. The two token sets are disjoint, so the
/// fallback can never change a value, only admit one the preferred system
/// does not know.
pub fn numeral_value(token: &str, preferred: NumeralSystem) -> Option<u32> {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse().ok();
    }
    match preferred {
        NumeralSystem::Native => native_value(token).or_else(|| sino_value(token)),
        NumeralSystem::Sino => sino_value(token).or_else(|| native_value(token)),
    }
}

/// Surface token for a Sino-Korean number in 1..=[`SINO_MAX`].
pub fn sino_token(n: u32) -> Option<String> {
    if n == 0 || n > SINO_MAX {
        return None;
    }
    const DIGITS: [char; 9] = ['일', '이', '삼', '사', '오', '육', '칠', '팔', '구'];
    let mut out = String::new();
    let tens = n / 10;
    let units = n % 10;
    if tens >= 2 {
        out.push(DIGITS[(tens - 1) as usize]);
    }
    if tens >= 1 {
        out.push('십');
    }
    if units > 0 {
        out.push(DIGITS[(units - 1) as usize]);
    }
    Some(out)
}

/// Every numeral surface token from both systems, longest first, as
/// (token, value) pairs. Longest-first order keeps 십일 from being consumed
/// as 십 + 일 by alternations and by the flat substitution pass.
pub fn numeral_tokens() -> Vec<(String, u32)> {
    let mut tokens: Vec<(String, u32)> = (1..=SINO_MAX)
        .filter_map(|n| sino_token(n).map(|t| (t, n)))
        .collect();
    for (token, value) in NATIVE_NUMERALS.entries() {
        tokens.push(((*token).to_string(), *value));
    }
    tokens.sort_by(|a, b| {
        b.0.chars()
            .count()
            .cmp(&a.0.chars().count())
            .then_with(|| a.0.cmp(&b.0))
    });
    tokens
}

/// Regex alternation matching an Arabic number or any numeral token.
pub fn numeral_alternation() -> String {
    let mut alt = String::from(r"\d+");
    for (token, _) in numeral_tokens() {
        alt.push('|');
        alt.push_str(&token);
    }
    alt
}

/// English ordinal suffix for a day-of-month.
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Ordered substitution tables for the flat lexicon passes, owned so the
/// generated numeral table can join the static ones.
pub fn substitution_passes() -> Vec<(&'static str, Vec<(String, String)>)> {
    let pairs = |table: &[(&str, &str)]| {
        table
            .iter()
            .map(|(k, e)| ((*k).to_string(), (*e).to_string()))
            .collect::<Vec<_>>()
    };
    // Digit-form months come after the numerals: the numeral pass can place
    // a fresh digit in front of a surviving 월 (세월 → 3월), and that form
    // must still translate within the same run.
    vec![
        ("native counted days", pairs(data::NATIVE_DAYS)),
        ("basic relative days", pairs(data::BASIC_DAYS)),
        ("weekday names", pairs(data::WEEKDAYS_FULL)),
        ("month names", pairs(data::MONTH_NAMES)),
        ("time of day", pairs(data::TIME_OF_DAY)),
        ("period words", pairs(data::PERIOD_WORDS)),
        (
            "numerals",
            numeral_tokens()
                .into_iter()
                .map(|(t, v)| (t, v.to_string()))
                .collect(),
        ),
        ("digit months", pairs(data::MONTH_DIGITS)),
    ]
}

/// Startup self-check: no Korean token of any category may be a substring of
/// any English replacement, and no replacement may contain Hangul. Either
/// defect would let a later pass re-match already-translated output.
pub fn verify_tables() -> Result<(), LexiconError> {
    let passes = substitution_passes();

    let mut replacements: Vec<(&'static str, String)> = Vec::new();
    for (category, table) in &passes {
        for (_, english) in table {
            replacements.push((*category, english.clone()));
        }
    }
    for english in data::WEEKDAY_ABBREV.values() {
        replacements.push(("weekday abbreviations", (*english).to_string()));
    }
    for english in data::QUALIFIERS.values() {
        replacements.push(("reference qualifiers", (*english).to_string()));
    }

    for &(category, ref replacement) in &replacements {
        if contains_hangul(replacement) {
            return Err(LexiconError::HangulReplacement {
                category,
                replacement: replacement.clone(),
            });
        }
    }

    for &(category, ref table) in &passes {
        for (token, _) in table {
            for (_, replacement) in &replacements {
                if replacement.contains(token.as_str()) {
                    return Err(LexiconError::TokenLeak {
                        category,
                        token: token.clone(),
                        replacement: replacement.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// One documented phrase category: a name plus Korean → English examples.
/// Consumed by autocomplete and documentation, never by normalization.
#[derive(Debug, Clone, Copy)]
pub struct PatternCategory {
    pub name: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

/// Catalogue of everything the pipeline recognizes.
pub fn supported_patterns() -> &'static [PatternCategory] {
    static CATALOG: &[PatternCategory] = &[
        PatternCategory {
            name: "basic relative days",
            entries: data::BASIC_DAYS,
        },
        PatternCategory {
            name: "native counted days",
            entries: data::NATIVE_DAYS,
        },
        PatternCategory {
            name: "weekdays",
            entries: data::WEEKDAYS_FULL,
        },
        PatternCategory {
            name: "month names",
            entries: data::MONTH_NAMES,
        },
        PatternCategory {
            name: "digit months",
            entries: data::MONTH_DIGITS,
        },
        PatternCategory {
            name: "time of day",
            entries: data::TIME_OF_DAY,
        },
        PatternCategory {
            name: "period and frequency",
            entries: data::PERIOD_WORDS,
        },
        PatternCategory {
            name: "year references",
            entries: &[
                ("올해", "this year"),
                ("내년", "next year"),
                ("작년", "last year"),
                ("재작년", "two years ago"),
            ],
        },
        PatternCategory {
            name: "reference qualifiers",
            entries: &[("이번", "this"), ("다음", "next"), ("지난", "last")],
        },
        PatternCategory {
            name: "week-scoped weekdays",
            entries: &[
                ("다음 주 화요일", "next tuesday"),
                ("지난 주 금요일", "last friday"),
                ("다음 주 월", "next monday"),
            ],
        },
        PatternCategory {
            name: "period references",
            entries: &[
                ("이번 주", "this week"),
                ("다음 달", "next month"),
                ("다음 월", "next month"),
                ("이번 주말", "this weekend"),
                ("다음 분기", "next quarter"),
            ],
        },
        PatternCategory {
            name: "directional amounts",
            entries: &[
                ("3일 후", "in 3 days"),
                ("삼일 후", "in 3 days"),
                ("세 시간 후", "in 3 hours"),
                ("두 주 전", "2 weeks ago"),
                ("일 개월 후", "in 1 month"),
                ("십년 전", "10 years ago"),
            ],
        },
        PatternCategory {
            name: "clock times",
            entries: &[
                ("오후 3시", "3 pm"),
                ("오후 3시 30분", "3:30 pm"),
                ("3시 30분", "3:30"),
                ("세시", "3 o'clock"),
            ],
        },
        PatternCategory {
            name: "native numerals",
            entries: &[
                ("한", "1"),
                ("하나", "1"),
                ("두", "2"),
                ("둘", "2"),
                ("세", "3"),
                ("셋", "3"),
                ("네", "4"),
                ("넷", "4"),
                ("다섯", "5"),
                ("여섯", "6"),
                ("일곱", "7"),
                ("여덟", "8"),
                ("아홉", "9"),
                ("열", "10"),
            ],
        },
        PatternCategory {
            name: "sino-korean numerals",
            entries: &[
                ("일", "1"),
                ("이", "2"),
                ("삼", "3"),
                ("사", "4"),
                ("오", "5"),
                ("육", "6"),
                ("칠", "7"),
                ("팔", "8"),
                ("구", "9"),
                ("십", "10"),
                ("십일", "11"),
                ("이십", "20"),
                ("오십오", "55"),
            ],
        },
    ];
    CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sino_digits_and_tens() {
        assert_eq!(sino_value("일"), Some(1));
        assert_eq!(sino_value("구"), Some(9));
        assert_eq!(sino_value("십"), Some(10));
        assert_eq!(sino_value("십일"), Some(11));
        assert_eq!(sino_value("이십"), Some(20));
        assert_eq!(sino_value("이십삼"), Some(23));
        assert_eq!(sino_value("오십오"), Some(55));
    }

    #[test]
    fn sino_rejects_malformed() {
        assert_eq!(sino_value(""), None);
        assert_eq!(sino_value("일이"), None);
        assert_eq!(sino_value("십십"), None);
        assert_eq!(sino_value("하나"), None);
        assert_eq!(sino_value("abc"), None);
    }

    #[test]
    fn sino_token_round_trips() {
        for n in 1..=SINO_MAX {
            let token = sino_token(n).unwrap();
            assert_eq!(sino_value(&token), Some(n), "token {token}");
        }
        assert_eq!(sino_token(0), None);
        assert_eq!(sino_token(SINO_MAX + 1), None);
    }

    #[test]
    fn numeral_value_falls_back_across_systems() {
        // 세 is native-only; still resolves when Sino is preferred.
        assert_eq!(numeral_value("세", NumeralSystem::Sino), Some(3));
        // 삼 is Sino-only; still resolves when native is preferred.
        assert_eq!(numeral_value("삼", NumeralSystem::Native), Some(3));
        assert_eq!(numeral_value("42", NumeralSystem::Native), Some(42));
        assert_eq!(numeral_value("모레", NumeralSystem::Sino), None);
    }

    #[test]
    fn numeral_tokens_sorted_longest_first() {
        let tokens = numeral_tokens();
        let lengths: Vec<usize> = tokens.iter().map(|(t, _)| t.chars().count()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    fn built_in_tables_pass_self_check() {
        verify_tables().unwrap();
    }

    #[test]
    fn catalogue_is_populated() {
        let catalog = supported_patterns();
        assert!(catalog.len() >= 10);
        assert!(catalog.iter().all(|c| !c.entries.is_empty()));
    }
}
