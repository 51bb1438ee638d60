//! nalda: Korean natural-language date/time phrase normalization.
//!
//! Rewrites free-form Korean date expressions ("다음 주 화요일", "삼일 후",
//! "오후 3시 30분") into the canonical English pseudo-natural-language forms
//! ("next tuesday", "in 3 days", "3:30 pm") that generic natural-language
//! date parsers consume. The core is an ordered pipeline of pure
//! `text -> text` rewrite stages over immutable lexicon tables, fronted by a
//! FIFO-bounded result cache for keystroke-frequency callers.
//!
//! Routing between this pipeline and a native-English path is the caller's
//! job, via [`contains_korean_script`] and [`contains_latin_letters`]; when
//! both fire on mixed-script input, Latin presence takes precedence.

pub mod cache;
pub mod lexicon;
pub mod pipeline;
pub mod script;
pub mod stage;
pub mod translator;

pub use cache::{DEFAULT_CACHE_CAPACITY, TranslationCache};
pub use lexicon::{LexiconError, NumeralSystem, PatternCategory, supported_patterns};
pub use script::{contains_korean_script, contains_latin_letters};
pub use translator::{Translator, TranslatorBuilder, cache_size, clear_cache, normalize};
