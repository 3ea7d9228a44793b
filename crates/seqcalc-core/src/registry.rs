//! Progression factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::arithmetic::ArithmeticProgression;
use crate::geometric::GeometricProgression;
use crate::progression::{Progression, SeqError, SequenceKind};

/// Entries kept before the cache is flushed.
const CACHE_CAPACITY: usize = 64;

/// Factory trait for creating progressions.
pub trait ProgressionFactory: Send + Sync {
    /// Get or create the progression of `kind` with the given parameters.
    fn create(&self, kind: SequenceKind, first_term: f64, step: f64) -> Arc<dyn Progression>;

    /// Resolve a kind by name, then create it.
    fn get(
        &self,
        name: &str,
        first_term: f64,
        step: f64,
    ) -> Result<Arc<dyn Progression>, SeqError> {
        let kind: SequenceKind = name.parse()?;
        Ok(self.create(kind, first_term, step))
    }

    /// List all available kind names.
    fn available(&self) -> Vec<&str>;
}

/// Parameters are keyed by bit pattern so `-0.0`/`0.0` and distinct NaNs stay apart.
type CacheKey = (SequenceKind, u64, u64);

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<CacheKey, Arc<dyn Progression>>>,
}

impl DefaultFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_progression(kind: SequenceKind, first_term: f64, step: f64) -> Arc<dyn Progression> {
        match kind {
            SequenceKind::Arithmetic => Arc::new(ArithmeticProgression::new(first_term, step)),
            SequenceKind::Geometric => Arc::new(GeometricProgression::new(first_term, step)),
        }
    }

    /// Number of cached progressions.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.read().len()
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionFactory for DefaultFactory {
    fn create(&self, kind: SequenceKind, first_term: f64, step: f64) -> Arc<dyn Progression> {
        let key = (kind, first_term.to_bits(), step.to_bits());

        // Check cache first
        if let Some(p) = self.cache.read().get(&key) {
            return Arc::clone(p);
        }

        // Create and cache
        let progression = Self::create_progression(kind, first_term, step);
        let mut cache = self.cache.write();
        if cache.len() >= CACHE_CAPACITY {
            cache.clear();
        }
        cache.insert(key, Arc::clone(&progression));
        progression
    }

    fn available(&self) -> Vec<&str> {
        SequenceKind::ALL.iter().map(|k| k.name()).collect()
    }
}
