// src/lexicon/data.rs
// Static lexicon tables. These are the single source of truth for every
// substitution pass; nothing here is mutated at runtime.
//
// Ordered slices are used where substitution order is semantic (a token that
// contains another token of the same table must be replaced first). Keyed
// lookups that do not care about order use `phf` maps.

use phf::{Map, phf_map};

/// Basic relative-day words. 그저께 sits before 그제 purely for readability;
/// neither contains the other.
pub static BASIC_DAYS: &[(&str, &str)] = &[
    ("그저께", "2 days ago"),
    ("그제", "2 days ago"),
    ("모레", "in 2 days"),
    ("오늘", "today"),
    ("내일", "tomorrow"),
    ("어제", "yesterday"),
];

/// Closed native day-name set, index + 1 == day count.
/// These are irregular words, not numeral + unit compounds.
pub static NATIVE_DAYS: &[(&str, &str)] = &[
    ("하루", "1 day"),
    ("이틀", "2 days"),
    ("사흘", "3 days"),
    ("나흘", "4 days"),
    ("닷새", "5 days"),
    ("엿새", "6 days"),
    ("이레", "7 days"),
    ("여드레", "8 days"),
    ("아흐레", "9 days"),
    ("열흘", "10 days"),
];

pub static WEEKDAYS_FULL: &[(&str, &str)] = &[
    ("월요일", "monday"),
    ("화요일", "tuesday"),
    ("수요일", "wednesday"),
    ("목요일", "thursday"),
    ("금요일", "friday"),
    ("토요일", "saturday"),
    ("일요일", "sunday"),
];

/// Single-syllable weekday abbreviations. Only substituted by the
/// boundary-safe pass; a bare 일 in flat context resolves as the Sino
/// numeral 1 first, matching the fixed category order.
pub static WEEKDAY_ABBREV: Map<&'static str, &'static str> = phf_map! {
    "월" => "monday",
    "화" => "tuesday",
    "수" => "wednesday",
    "목" => "thursday",
    "금" => "friday",
    "토" => "saturday",
    "일" => "sunday",
};

/// Sino month names. Containing tokens come first (십일월 contains 일월), and
/// the whole table runs before the numeral pass can split the names into
/// digits.
pub static MONTH_NAMES: &[(&str, &str)] = &[
    ("십일월", "november"),
    ("십이월", "december"),
    ("시월", "october"),
    ("유월", "june"),
    ("육월", "june"),
    ("일월", "january"),
    ("이월", "february"),
    ("삼월", "march"),
    ("사월", "april"),
    ("오월", "may"),
    ("칠월", "july"),
    ("팔월", "august"),
    ("구월", "september"),
];

/// Digit-form months. Two-digit months first: "11월" contains "1월". This
/// table runs after the numeral pass, so a digit the numeral pass itself put
/// in front of 월 (세월 → 3월) is translated within the same run.
pub static MONTH_DIGITS: &[(&str, &str)] = &[
    ("10월", "october"),
    ("11월", "november"),
    ("12월", "december"),
    ("1월", "january"),
    ("2월", "february"),
    ("3월", "march"),
    ("4월", "april"),
    ("5월", "may"),
    ("6월", "june"),
    ("7월", "july"),
    ("8월", "august"),
    ("9월", "september"),
];

/// Time-of-day words. Runs before the numeral pass so 정오 is not split into
/// 정 + 오(5).
pub static TIME_OF_DAY: &[(&str, &str)] = &[
    ("오전", "am"),
    ("오후", "pm"),
    ("아침", "morning"),
    ("점심", "noon"),
    ("저녁", "evening"),
    ("새벽", "dawn"),
    ("자정", "midnight"),
    ("정오", "noon"),
    ("지금", "now"),
    ("현재", "now"),
    ("밤", "night"),
];

/// Period / frequency words. 상반기 and 하반기 must precede 반기, and the
/// whole table runs before the numeral pass (휴일/평일 contain 일).
pub static PERIOD_WORDS: &[(&str, &str)] = &[
    ("상반기", "first half-year"),
    ("하반기", "second half-year"),
    ("반기", "half-year"),
    ("분기", "quarter"),
    ("주말", "weekend"),
    ("주중", "midweek"),
    ("평일", "weekday"),
    ("휴일", "holiday"),
];

/// Reference qualifiers: this / next / last.
pub static QUALIFIERS: Map<&'static str, &'static str> = phf_map! {
    "이번" => "this",
    "다음" => "next",
    "지난" => "last",
};

/// Native (indigenous) numerals, determiner and cardinal forms.
pub static NATIVE_NUMERALS: Map<&'static str, u32> = phf_map! {
    "한" => 1,
    "하나" => 1,
    "두" => 2,
    "둘" => 2,
    "세" => 3,
    "셋" => 3,
    "네" => 4,
    "넷" => 4,
    "다섯" => 5,
    "여섯" => 6,
    "일곱" => 7,
    "여덟" => 8,
    "아홉" => 9,
    "열" => 10,
};

/// Sino-Korean digit syllables. Compounds (십일, 이십삼, …) are parsed
/// compositionally by `lexicon::sino_value`.
pub static SINO_DIGITS: Map<char, u32> = phf_map! {
    '일' => 1,
    '이' => 2,
    '삼' => 3,
    '사' => 4,
    '오' => 5,
    '육' => 6,
    '칠' => 7,
    '팔' => 8,
    '구' => 9,
};

/// Largest Sino-Korean compound the surface-token generator emits (오십오).
pub const SINO_MAX: u32 = 55;
