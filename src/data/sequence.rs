//! Single-pass scans over in-memory sequences.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::{DrillError, Result};

/// Returns true if any value appears at least twice.
///
/// Stops at the first repeat.
pub fn contains_duplicate<T: Eq + Hash>(seq: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(seq.len());
    !seq.iter().all(|item| seen.insert(item))
}

/// Largest value in `seq`.
pub fn find_max<T: PartialOrd + Copy>(seq: &[T]) -> Result<T> {
    extremum(seq, |candidate, best| candidate > best)
}

/// Smallest value in `seq`.
pub fn find_min<T: PartialOrd + Copy>(seq: &[T]) -> Result<T> {
    extremum(seq, |candidate, best| candidate < best)
}

fn extremum<T: PartialOrd + Copy>(seq: &[T], better: impl Fn(&T, &T) -> bool) -> Result<T> {
    let (first, rest) = seq.split_first().ok_or(DrillError::EmptyInput)?;
    let mut best = *first;
    for item in rest {
        if better(item, &best) {
            best = *item;
        }
    }
    Ok(best)
}

/// Indices `(i, j)` with `i < j` and `seq[i] + seq[j] == target`.
///
/// Returns the first pair completed in scan order, or `None`.
pub fn two_sum(seq: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(seq.len());

    for (j, &value) in seq.iter().enumerate() {
        // An overflowing complement cannot be in the map.
        if let Some(&i) = target.checked_sub(value).and_then(|diff| seen.get(&diff)) {
            return Some((i, j));
        }
        seen.insert(value, j);
    }

    None
}

/// The `k` most frequent values, highest count first.
///
/// Ties keep the order in which values first appeared.
pub fn top_k_frequent<T: Eq + Hash + Clone>(seq: &[T], k: usize) -> Vec<T> {
    let mut index: HashMap<&T, usize> = HashMap::new();
    let mut counts: Vec<(&T, usize)> = Vec::new();

    for item in seq {
        match index.get(item) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(item, counts.len());
                counts.push((item, 1));
            }
        }
    }

    // Stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(k).map(|(item, _)| item.clone()).collect()
}
