//! Sequence kind selection logic.

use seqcalc_core::progression::{SeqError, SequenceKind};
use seqcalc_core::registry::ProgressionFactory;

/// Resolve a user-supplied kind name against the factory's available kinds.
pub fn select_kind(name: &str, factory: &dyn ProgressionFactory) -> Result<SequenceKind, SeqError> {
    let kind: SequenceKind = name.parse()?;
    if factory.available().contains(&kind.name()) {
        Ok(kind)
    } else {
        Err(SeqError::Config(format!("sequence kind not available: {name}")))
    }
}
