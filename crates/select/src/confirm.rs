//! Does a bucket hit need verifying against the real literal?

use crate::{
  catalog::{EngineDescription, EngineVariant},
  error::SelectError,
  literal::Literal,
};

/// True if hits from `engine` on `lits` must go through a confirmation step.
///
/// A bucket hit is only a guaranteed true positive when the engine is
/// unpacked, every literal has its own bucket, every literal fits inside the
/// mask depth, and no literal carries an and/compare mask.
///
/// # Errors
///
/// [`SelectError::EmptyLiteralSet`] if `lits` is empty.
pub fn need_confirm(engine: &EngineDescription, lits: &[Literal]) -> Result<bool, SelectError> {
  if lits.is_empty() {
    return Err(SelectError::EmptyLiteralSet);
  }

  let EngineVariant::Teddy(teddy) = engine.variant();
  if teddy.packed || lits.len() > engine.num_buckets() as usize {
    return Ok(true);
  }
  Ok(lits.iter().any(|lit| lit.len() > teddy.num_masks as usize || lit.has_mask()))
}
