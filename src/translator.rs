use crate::{
    cache::{DEFAULT_CACHE_CAPACITY, TranslationCache},
    lexicon::{self, LexiconError, PatternCategory},
    pipeline::Pipeline,
    stage::{
        Stage, clock_time::ClockTime, compound_period::CompoundPeriod, day_of_month::DayOfMonth,
        day_time::DayTime, directional_amount::DirectionalAmount, lexicon_subst::LexiconSubst,
        native_day_offset::NativeDayOffset, period_reference::PeriodReference, prepare::Prepare,
        week_weekday::WeekWeekday, weekday_abbrev::WeekdayAbbrev, year_reference::YearReference,
    },
};
use std::borrow::Cow;
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Korean date/time phrase normalizer.
///
/// Rewrites Korean relative/absolute date expressions into the canonical
/// English pseudo-natural-language vocabulary a generic date parser consumes.
/// Unmatched text passes through unchanged; [`Translator::normalize`] never
/// fails. Whole-input results are memoized in a FIFO-bounded cache keyed on
/// the raw input string.
pub struct Translator {
    pipeline: Pipeline,
    cache: Mutex<TranslationCache>,
}

impl Translator {
    /// Default pipeline and cache. The built-in lexicon is verified at
    /// construction; a failure here is a table defect, not a runtime
    /// condition.
    pub fn new() -> Self {
        Self::builder()
            .build()
            .expect("built-in lexicon failed self-check – this is a bug")
    }

    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::default()
    }

    /// Main entry point: cache lookup, then the rewrite pipeline, then cache
    /// store. Empty and whitespace-only inputs come back unchanged and are
    /// not cached. Already-English input is a structural no-op.
    pub fn normalize(&self, input: &str) -> String {
        if input.trim().is_empty() {
            return input.to_string();
        }

        if let Some(hit) = self.cache().lookup(input) {
            return hit;
        }

        let output = self.pipeline.run(Cow::Borrowed(input)).into_owned();
        self.cache().store(input, &output);
        output
    }

    pub fn cache_size(&self) -> usize {
        self.cache().len()
    }

    pub fn clear_cache(&self) {
        self.cache().clear();
    }

    /// Catalogue of the recognized phrase categories, for documentation and
    /// autocomplete. Not involved in normalization.
    pub fn supported_patterns(&self) -> &'static [PatternCategory] {
        lexicon::supported_patterns()
    }

    /// Stage names in application order, mostly for tests and debugging.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.pipeline.stage_names()
    }

    fn cache(&self) -> MutexGuard<'_, TranslationCache> {
        // The cache has no invariant that can be broken mid-operation, so a
        // poisoned lock is still a usable cache.
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TranslatorBuilder {
    cache_capacity: usize,
}

impl Default for TranslatorBuilder {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl TranslatorBuilder {
    /// Maximum number of memoized inputs; 0 disables caching.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Verify the lexicon tables and assemble the fixed stage order.
    pub fn build(self) -> Result<Translator, LexiconError> {
        lexicon::verify_tables()?;

        let mut stages: Vec<std::sync::Arc<dyn Stage>> = vec![
            std::sync::Arc::new(Prepare),
            std::sync::Arc::new(NativeDayOffset::new()),
            std::sync::Arc::new(YearReference::new()),
            std::sync::Arc::new(CompoundPeriod::new()),
            std::sync::Arc::new(WeekWeekday::new()),
            std::sync::Arc::new(PeriodReference::new()),
            std::sync::Arc::new(DirectionalAmount::new()),
            std::sync::Arc::new(DayOfMonth::new()),
            std::sync::Arc::new(ClockTime::new()),
            std::sync::Arc::new(DayTime::new()),
        ];
        for (name, table) in lexicon::substitution_passes() {
            stages.push(std::sync::Arc::new(LexiconSubst::new(name, table)));
        }
        stages.push(std::sync::Arc::new(WeekdayAbbrev));

        Ok(Translator {
            pipeline: Pipeline::new(stages),
            cache: Mutex::new(TranslationCache::new(self.cache_capacity)),
        })
    }
}

static SHARED: LazyLock<Translator> = LazyLock::new(Translator::new);

/// Normalize through the process-wide shared [`Translator`].
pub fn normalize(input: &str) -> String {
    SHARED.normalize(input)
}

/// Entry count of the shared translator's cache.
pub fn cache_size() -> usize {
    SHARED.cache_size()
}

/// Empty the shared translator's cache.
pub fn clear_cache() {
    SHARED.clear_cache()
}
