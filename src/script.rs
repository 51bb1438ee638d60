// src/script.rs
// Cheap script classifiers used to route input between the Korean pipeline
// and a native-English path. Pure byte/char scans, no allocation.

/// True for any Hangul scalar: precomposed syllables, conjoining jamo, or
/// compatibility jamo.
#[inline(always)]
pub fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7A3}'   // Hangul syllables
        | '\u{1100}'..='\u{11FF}' // Hangul jamo
        | '\u{3130}'..='\u{318F}' // Hangul compatibility jamo
    )
}

/// True iff any character of `text` is Hangul. Routes input into the
/// normalizer; English-only text skips the whole pipeline.
#[inline]
pub fn contains_korean_script(text: &str) -> bool {
    contains_hangul(text)
}

/// Internal alias kept separate so lexicon self-checks read naturally.
#[inline]
pub(crate) fn contains_hangul(text: &str) -> bool {
    text.chars().any(is_hangul)
}

/// True iff any ASCII letter is present.
///
/// Not the complement of [`contains_korean_script`]: mixed-script input
/// triggers both. The suggestion collaborator gives Latin presence priority,
/// so any Latin letter means English-mode.
#[inline]
pub fn contains_latin_letters(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_hangul_syllables_and_jamo() {
        assert!(contains_korean_script("다음 주"));
        assert!(contains_korean_script("ㄱ")); // compatibility jamo
        assert!(contains_korean_script("abc 월"));
        assert!(!contains_korean_script("next tuesday"));
        assert!(!contains_korean_script("3:30 pm"));
        assert!(!contains_korean_script(""));
        assert!(!contains_korean_script("日本語")); // CJK ideographs are not Hangul
    }

    #[test]
    fn detects_latin_letters() {
        assert!(contains_latin_letters("next"));
        assert!(contains_latin_letters("다음 week"));
        assert!(!contains_latin_letters("다음 주"));
        assert!(!contains_latin_letters("123 !?"));
        assert!(!contains_latin_letters(""));
    }

    #[test]
    fn predicates_are_not_complements() {
        let mixed = "다음 week";
        assert!(contains_korean_script(mixed));
        assert!(contains_latin_letters(mixed));
    }
}
