//! # Utilities
//!
//! Helper functions for algorithms.

/// Find the item with the largest key.
///
/// Only a strictly larger key replaces the current best, so on ties the first item wins.
///
/// # Arguments
///
/// * `items`: (item, key) tuples.
///
/// # Return value
///
/// `None` if there are no items.
pub(crate) fn first_maximum<T, K: PartialOrd>(items: impl IntoIterator<Item = (T, K)>) -> Option<(T, K)> {
    first_by(items, |candidate, best| candidate > best)
}

/// Find the item with the smallest key.
///
/// On ties the first item wins.
pub(crate) fn first_minimum<T, K: PartialOrd>(items: impl IntoIterator<Item = (T, K)>) -> Option<(T, K)> {
    first_by(items, |candidate, best| candidate < best)
}

fn first_by<T, K>(
    items: impl IntoIterator<Item = (T, K)>,
    replaces: impl Fn(&K, &K) -> bool,
) -> Option<(T, K)> {
    let mut best: Option<(T, K)> = None;
    for (item, key) in items {
        let is_better = match &best {
            None => true,
            Some((_, best_key)) => replaces(&key, best_key),
        };
        if is_better {
            best = Some((item, key));
        }
    }

    best
}
