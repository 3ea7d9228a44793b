//! Lazy iterator over the terms of a progression.

use crate::progression::Progression;

/// Lazy iterator over a progression.
///
/// Yields `(index, term)` pairs starting from index 0. Each term is computed
/// by closed form, so late terms carry no accumulated rounding.
///
/// # Example
/// ```
/// use seqcalc_core::arithmetic::ArithmeticProgression;
/// use seqcalc_core::iterator::ProgressionIter;
/// let p = ArithmeticProgression::new(2.0, 3.0);
/// let terms: Vec<f64> = ProgressionIter::new(&p).take(4).map(|(_, v)| v).collect();
/// assert_eq!(terms, [2.0, 5.0, 8.0, 11.0]);
/// ```
pub struct ProgressionIter<'a> {
    progression: &'a dyn Progression,
    index: u32,
}

impl<'a> ProgressionIter<'a> {
    #[must_use]
    pub fn new(progression: &'a dyn Progression) -> Self {
        Self {
            progression,
            index: 0,
        }
    }

    /// Start iteration at a specific index.
    #[must_use]
    pub fn from_index(progression: &'a dyn Progression, index: u32) -> Self {
        Self { progression, index }
    }
}

impl Iterator for ProgressionIter<'_> {
    type Item = (u32, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.index;
        self.index = self.index.checked_add(1)?;
        Some((idx, self.progression.term(idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::ArithmeticProgression;
    use crate::geometric::GeometricProgression;

    #[test]
    fn first_five_geometric() {
        let p = GeometricProgression::new(100.0, 0.5);
        let vals: Vec<f64> = ProgressionIter::new(&p).take(5).map(|(_, v)| v).collect();
        assert_eq!(vals, [100.0, 50.0, 25.0, 12.5, 6.25]);
    }

    #[test]
    fn yields_correct_indices() {
        let p = ArithmeticProgression::new(0.0, 1.0);
        let indices: Vec<u32> = ProgressionIter::new(&p).take(5).map(|(i, _)| i).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn from_index_skips() {
        let p = ArithmeticProgression::new(10.0, -2.0);
        let (idx, val) = ProgressionIter::from_index(&p, 5).next().unwrap();
        assert_eq!(idx, 5);
        assert!(val.abs() < f64::EPSILON);
    }

    #[test]
    fn matches_generate() {
        let p = GeometricProgression::new(3.0, -1.5);
        let generated = p.generate(12).unwrap();
        let iterated: Vec<f64> = ProgressionIter::new(&p).take(12).map(|(_, v)| v).collect();
        assert_eq!(generated, iterated);
    }

    #[test]
    fn stops_at_index_overflow() {
        let p = ArithmeticProgression::new(0.0, 1.0);
        let mut iter = ProgressionIter::from_index(&p, u32::MAX);
        assert!(iter.next().is_none());
    }
}
