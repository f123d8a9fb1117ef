//! Binary labels from the bug matrix
//!
//! A row is inducing when it is blamed for at least one bug fix known at
//! the cutoff. Fixes dated strictly after the cutoff are dropped before
//! the OR is taken, so labels never encode knowledge unavailable at that
//! time.

use chrono::{DateTime, Utc};

use crate::data::{BugMatrix, Frame};
use crate::{Error, Result};

/// Positions of the bug-matrix columns fixed strictly after `cutoff`
///
/// # Errors
///
/// Returns [`Error::MissingCutoff`] when no cutoff is given
pub fn bugs_later_than(matrix: &BugMatrix, cutoff: Option<DateTime<Utc>>) -> Result<Vec<usize>> {
    let cutoff = cutoff.ok_or(Error::MissingCutoff)?;
    Ok(matrix
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, fix)| fix.fixed_after(cutoff))
        .map(|(i, _)| i)
        .collect())
}

/// Drop future fixes and label every row
///
/// Returns the frame with the surviving bug-matrix columns and one label
/// per row, aligned with the frame's records.
///
/// # Errors
///
/// Returns [`Error::MissingCutoff`] when no cutoff is given
pub fn derive_labels(mut frame: Frame, cutoff: Option<DateTime<Utc>>) -> Result<(Frame, Vec<bool>)> {
    let cutoff = cutoff.ok_or(Error::MissingCutoff)?;

    let dropped = frame.bug_matrix.drop_columns(|fix| fix.fixed_after(cutoff));
    tracing::debug!(
        dropped,
        kept = frame.bug_matrix.n_columns(),
        %cutoff,
        "dropped bug-matrix columns fixed after cutoff"
    );

    let labels = frame.bug_matrix.any_per_row();
    Ok((frame, labels))
}

/// Label every row from the full matrix, without any cutoff
///
/// Used for test partitions, whose matrix is the ground truth at
/// evaluation time.
#[must_use]
pub fn ground_truth(frame: &Frame) -> Vec<bool> {
    frame.bug_matrix.any_per_row()
}
