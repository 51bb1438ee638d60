use crate::stage::Stage;
use std::borrow::Cow;

/// Trim edges and lowercase. The rest of the pipeline works on lowercased,
/// trimmed text; Hangul has no case, so this only touches Latin content.
pub struct Prepare;

impl Stage for Prepare {
    fn name(&self) -> &'static str {
        "prepare"
    }

    fn needs_apply(&self, text: &str) -> bool {
        text.len() != text.trim().len() || text.chars().any(|c| c.is_uppercase())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        Cow::Owned(text.trim().to_lowercase())
    }
}
