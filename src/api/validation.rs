use crate::error::{SelectorError, SelectorResult};

pub(super) fn require_indices(indices: &[usize]) -> SelectorResult<()> {
    if indices.is_empty() {
        return Err(SelectorError::InvalidArgument(
            "at least one series index is required".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn check_index_bounds(indices: &[usize], len: usize) -> SelectorResult<()> {
    for &index in indices {
        if index >= len {
            return Err(SelectorError::IndexOutOfBounds { index, len });
        }
    }
    Ok(())
}

/// A permutation is accepted only when it is a bijection over `0..len`:
/// right length, every target position in range, no position repeated.
pub(super) fn check_permutation(permutation: &[usize], len: usize) -> SelectorResult<()> {
    if permutation.len() != len {
        return Err(SelectorError::InvalidArgument(format!(
            "permutation length {} does not match series count {len}",
            permutation.len()
        )));
    }
    let mut seen = vec![false; len];
    for &position in permutation {
        if position >= len {
            return Err(SelectorError::InvalidArgument(format!(
                "permutation position {position} is outside 0..{len}"
            )));
        }
        if seen[position] {
            return Err(SelectorError::InvalidArgument(format!(
                "permutation repeats position {position}"
            )));
        }
        seen[position] = true;
    }
    Ok(())
}

pub(super) fn check_value_count(expected: usize, got: usize) -> SelectorResult<()> {
    if expected != got {
        return Err(SelectorError::InvalidArgument(format!(
            "expected {expected} attribute values for {expected} clipboard series, got {got}"
        )));
    }
    Ok(())
}
