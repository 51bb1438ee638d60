//! Core rewrite-stage abstraction.
//!
//! Every stage is a pure `text -> text` rewrite. The pipeline applies them in
//! a fixed order, and the order is semantic: each stage emits Latin-alphabet
//! output that is structurally invisible to every later stage's Korean-token
//! patterns, so no stage can re-match what an earlier one produced. The
//! lexicon self-check in `TranslatorBuilder::build` enforces the data side of
//! that contract.

pub mod clock_time;
pub mod compound_period;
pub mod day_of_month;
pub mod day_time;
pub mod directional_amount;
pub mod lexicon_subst;
pub mod native_day_offset;
pub mod period_reference;
pub mod prepare;
pub mod week_weekday;
pub mod weekday_abbrev;
pub mod year_reference;

use regex::{Captures, Regex};
use std::borrow::Cow;

/// A single rewrite step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used for the pipeline's stage listing and tests.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage, keeping the
    /// common keystroke path allocation-free.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must return the input untouched
    /// (zero-copy) when nothing matches.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

/// Rewrite helper for regex stages. `Regex::replace_all` hands back a `Cow`
/// borrowing its haystack, which must not outlive the input `Cow`; the
/// borrow is resolved here, inside one expression, so a no-match pass keeps
/// the original allocation.
pub(crate) fn rewrite_with<'a>(
    re: &Regex,
    text: Cow<'a, str>,
    rep: impl FnMut(&Captures) -> String,
) -> Cow<'a, str> {
    let owned = match re.replace_all(&text, rep) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    match owned {
        Some(s) => Cow::Owned(s),
        None => text,
    }
}
