//! Parsed constraint cache

use crate::constraint::ast::ParsedConstraint;
use crate::constraint::{evaluator, parser};
use crate::error::Result;
use ahash::AHashMap;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

/// Default number of expressions kept before the cache is flushed
pub const DEFAULT_CAPACITY: usize = 4096;

static GLOBAL_CACHE: Lazy<ParseCache> = Lazy::new(|| ParseCache::with_capacity(DEFAULT_CAPACITY));

/// Map from expression text to its parsed form
///
/// Only successful parses are stored. When full, the cache is cleared before
/// the next insert.
#[derive(Debug)]
pub struct ParseCache {
    entries: RwLock<AHashMap<String, Arc<ParsedConstraint>>>,
    capacity: usize,
}

impl ParseCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(AHashMap::with_capacity(capacity.min(DEFAULT_CAPACITY))),
            capacity: capacity.max(1),
        }
    }

    /// Get or parse a constraint, caching the result
    pub fn get_or_parse(&self, constraint: &str) -> Result<Arc<ParsedConstraint>> {
        // Fast path: check read lock first
        if let Some(parsed) = self.entries.read().get(constraint) {
            return Ok(Arc::clone(parsed));
        }

        tracing::debug!(constraint, "constraint cache miss");
        let parsed = Arc::new(parser::parse(constraint)?);

        let mut entries = self.entries.write();
        if entries.len() >= self.capacity {
            tracing::debug!(size = entries.len(), "constraint cache full, clearing");
            entries.clear();
        }
        let parsed = entries
            .entry(constraint.to_string())
            .or_insert(parsed)
            .clone();

        Ok(parsed)
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Get or parse a constraint through the process-wide cache
#[inline]
pub fn get_or_parse(constraint: &str) -> Result<Arc<ParsedConstraint>> {
    GLOBAL_CACHE.get_or_parse(constraint)
}

/// Check a rendered value against a constraint, using the cached parse
///
/// An absent value never matches and is not validated against the constraint.
#[inline]
pub fn check_constraint(value: Option<&str>, constraint: &str, now: DateTime<Utc>) -> Result<bool> {
    let Some(value) = value else {
        tracing::trace!(constraint, "no value, constraint not met");
        return Ok(false);
    };

    let parsed = get_or_parse(constraint)?;
    evaluator::check(&parsed, value, now)
}

/// Clear the process-wide cache
pub fn clear_cache() {
    GLOBAL_CACHE.clear();
}

/// Number of expressions in the process-wide cache
pub fn cache_size() -> usize {
    GLOBAL_CACHE.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConstraintError;

    #[test]
    fn test_cache_hit() {
        let cache = ParseCache::with_capacity(16);

        // First call - cache miss
        let first = cache.get_or_parse("> 5").unwrap();
        assert_eq!(cache.len(), 1);

        // Second call - cache hit
        let second = cache.get_or_parse("> 5").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_errors_not_cached() {
        let cache = ParseCache::with_capacity(16);

        assert!(cache.get_or_parse("> x").is_err());
        assert!(cache.get_or_parse("").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_flushes_when_full() {
        let cache = ParseCache::with_capacity(2);

        cache.get_or_parse("> 1").unwrap();
        cache.get_or_parse("> 2").unwrap();
        assert_eq!(cache.len(), 2);

        cache.get_or_parse("> 3").unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_absent_value() {
        let now = Utc::now();
        assert!(!check_constraint(None, "> 5", now).unwrap());
        assert!(!check_constraint(None, "", now).unwrap());
        assert!(!check_constraint(None, "not > 5", now).unwrap());
    }

    #[test]
    fn test_check_constraint() {
        let now = Utc::now();
        assert!(check_constraint(Some("5"), "> 3", now).unwrap());
        assert!(matches!(
            check_constraint(Some("abc"), "", now),
            Err(ConstraintError::InvalidConstraint(_))
        ));
    }

    #[test]
    fn test_global_cache() {
        get_or_parse("contains global cache entry").unwrap();
        assert!(cache_size() >= 1);
    }
}
