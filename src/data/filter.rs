use crate::error::{OutlierError, Result};

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Boolean row masks
// ---------------------------------------------------------------------------

/// Positions of the `true` entries of a mask.
pub fn masked_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter(|(_, keep)| **keep)
        .map(|(i, _)| i)
        .collect()
}

/// Return the rows of `dataset` whose mask entry is `true`.
///
/// The result keeps:
/// * every column name, even when no row survives
/// * the relative order of the surviving rows
/// * each row's original index
pub fn select(dataset: &Dataset, mask: &[bool]) -> Result<Dataset> {
    if mask.len() != dataset.len() {
        return Err(OutlierError::LengthMismatch {
            expected: dataset.len(),
            found: mask.len(),
        });
    }
    let mut out = dataset.empty_like();
    out.rows = masked_indices(mask)
        .into_iter()
        .map(|i| dataset.rows[i].clone())
        .collect();
    Ok(out)
}
