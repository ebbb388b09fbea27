//! Session range selector.
//!
//! Parses the compact `A,B,C-D,E` grammar into a set of zero-based row
//! positions. The set is only ever used as a membership test against a
//! row's position in creation-time order, so indices past the end of the
//! table are harmless: they simply select nothing.

use std::collections::BTreeSet;

use crate::ExportError;

/// Parse a selector string into a set of session indices.
///
/// Each comma-separated token is a single non-negative integer or an
/// inclusive range `low-high` with `low <= high`. Anything else, including
/// a reversed range, fails with [`ExportError::InvalidSelector`] naming the
/// offending token; a bad token is never silently dropped.
pub fn parse_selector(input: &str) -> Result<BTreeSet<usize>, ExportError> {
    let mut indices = BTreeSet::new();

    for token in input.split(',') {
        let invalid = || ExportError::InvalidSelector {
            token: token.to_string(),
        };

        let parts: Vec<&str> = token.split('-').collect();
        match parts.as_slice() {
            [single] => {
                indices.insert(single.parse::<usize>().map_err(|_| invalid())?);
            }
            [low, high] => {
                let low = low.parse::<usize>().map_err(|_| invalid())?;
                let high = high.parse::<usize>().map_err(|_| invalid())?;
                if low > high {
                    return Err(invalid());
                }
                indices.extend(low..=high);
            }
            _ => return Err(invalid()),
        }
    }

    Ok(indices)
}
