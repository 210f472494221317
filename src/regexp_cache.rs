// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use dashmap::DashMap;
use log::trace;
use thiserror::Error;

use crate::regex_util::{full_match_pattern, prefix_match_pattern};

/// Number of compiled patterns kept by a cache built with `new()`.
pub const DEFAULT_MAX_ENTRIES: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("An error occurred while trying to create regex `{pattern}`: {message}")]
pub struct InvalidRegexError {
    pub pattern: String,
    pub message: String,
}

impl InvalidRegexError {
    pub fn new(pattern: &str, err: impl ToString) -> Self {
        Self {
            pattern: pattern.to_owned(),
            message: err.to_string(),
        }
    }
}

/// Anything that can be built from regex source text and shared between threads.
pub trait CompilePattern: Sized + Send + Sync {
    fn compile(pattern: &str) -> Result<Self, InvalidRegexError>;
}

impl CompilePattern for regex::Regex {
    fn compile(pattern: &str) -> Result<Self, InvalidRegexError> {
        regex::Regex::new(pattern).map_err(|err| InvalidRegexError::new(pattern, err))
    }
}

/// Concurrent cache of compiled patterns keyed by their source text.
///
/// The cache is bounded: once `max_entries` patterns are stored, new patterns
/// are still compiled and returned, but are not remembered.
pub struct PatternCache<T> {
    cache: DashMap<String, Arc<T>>,
    max_entries: usize,
}

impl<T: CompilePattern> PatternCache<T> {
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(max_entries.min(DEFAULT_MAX_ENTRIES)),
            max_entries,
        }
    }

    pub fn get(&self, pattern: &str) -> Result<Arc<T>, InvalidRegexError> {
        if let Some(compiled) = self.cache.get(pattern) {
            return Ok(compiled.value().clone());
        }
        if self.cache.len() >= self.max_entries {
            trace!("Pattern cache is full ({} entries), compiling {} uncached", self.max_entries, pattern);
            return T::compile(pattern).map(Arc::new);
        }
        let entry = self
            .cache
            .entry(pattern.to_owned())
            .or_try_insert_with(|| T::compile(pattern).map(Arc::new))?;
        Ok(entry.value().clone())
    }
}

#[cfg(test)]
impl<T> PatternCache<T> {
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl<T: CompilePattern> Default for PatternCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub type RegexCache = PatternCache<regex::Regex>;

impl RegexCache {
    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        self.get(pattern)
    }

    /// Regex that only matches when the whole haystack is consumed.
    pub fn get_full_match_regex(
        &self,
        pattern: &str,
    ) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        self.get(&full_match_pattern(pattern))
    }

    /// Regex that only matches at the start of the haystack.
    pub fn get_prefix_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        self.get(&prefix_match_pattern(pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_same_instance_for_same_pattern() {
        let cache = RegexCache::new();
        let first = cache.get_regex(r"\d{3}").unwrap();
        let second = cache.get_regex(r"\d{3}").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn stops_caching_when_full() {
        let cache = RegexCache::with_max_entries(2);
        cache.get_regex("1").unwrap();
        cache.get_regex("2").unwrap();
        let third = cache.get_regex("3").unwrap();
        assert!(third.is_match("3"));
        assert_eq!(cache.len(), 2);
        let again = cache.get_regex("3").unwrap();
        assert!(!Arc::ptr_eq(&third, &again));
    }

    #[test]
    fn reports_invalid_pattern() {
        let cache = RegexCache::new();
        let err = cache.get_regex("(12").unwrap_err();
        assert_eq!(err.pattern, "(12");
        assert!(cache.is_empty());
    }

    #[test]
    fn full_match_regex_respects_alternation() {
        let cache = RegexCache::new();
        let regex = cache.get_full_match_regex("1|12").unwrap();
        assert!(regex.is_match("12"));
        assert!(!regex.is_match("123"));
    }
}
