// ============================================================
// Layer 4 — Seeded Shuffle and Train/Validation Splitter
// ============================================================
// Shuffles rows with a seeded RNG and cuts them into two sets:
//   - Training set:   rows [0, split_at)
//   - Validation set: rows [split_at, total)
//
//   split_at = floor(total * train_fraction)
//
// The RNG is a StdRng seeded from the configured seed, so the
// same seed and the same input always give the same partitions.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Shuffle `items` in place, deterministically for a given seed.
pub fn seeded_shuffle<T>(items: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);
}

/// Index at which a shuffled set of `total` rows is cut.
/// Truncates toward zero and never exceeds `total`.
pub fn split_index(total: usize, train_fraction: f64) -> usize {
    let split_at = ((total as f64) * train_fraction).floor();
    if split_at <= 0.0 {
        0
    } else {
        (split_at as usize).min(total)
    }
}

/// Shuffle `samples` with `seed` and split into (train, validation).
///
/// # Example
/// ```ignore
/// let (train, val) = split_train_val(rows, 0.8, 42);
/// // 10 rows → 8 train, 2 validation
/// ```
pub fn split_train_val<T>(mut samples: Vec<T>, train_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    seeded_shuffle(&mut samples, seed);

    let total    = samples.len();
    let split_at = split_index(total, train_fraction);

    // split_off(n) leaves [0..n) in `samples` and returns [n..total)
    let val = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} validation (seed={})",
        samples.len(),
        val.len(),
        seed,
    );

    (samples, val)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..10).collect();
        let (train, val)      = split_train_val(items, 0.8, 42);
        assert_eq!(train.len(), 8);
        assert_eq!(val.len(),   2);
    }

    #[test]
    fn test_split_truncates() {
        // 7 * 0.5 = 3.5 → 3
        let items: Vec<usize> = (0..7).collect();
        let (train, val)      = split_train_val(items, 0.5, 1);
        assert_eq!(train.len(), 3);
        assert_eq!(val.len(),   4);
    }

    #[test]
    fn test_all_items_preserved() {
        let items: Vec<usize> = (0..50).collect();
        let (train, val)      = split_train_val(items, 0.7, 42);
        assert_eq!(train.len() + val.len(), 50);

        let mut all: Vec<usize> = train.into_iter().chain(val).collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let items: Vec<usize> = (0..100).collect();
        let a = split_train_val(items.clone(), 0.8, 7);
        let b = split_train_val(items,         0.8, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_order() {
        let mut a: Vec<usize> = (0..100).collect();
        let mut b = a.clone();
        seeded_shuffle(&mut a, 1);
        seeded_shuffle(&mut b, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        let (train, val)      = split_train_val(items, 0.8, 42);
        assert!(train.is_empty());
        assert!(val.is_empty());
    }

    #[test]
    fn test_edge_fractions() {
        assert_eq!(split_index(10, 1.0), 10);
        assert_eq!(split_index(10, 0.0), 0);
        assert_eq!(split_index(3,  0.99), 2);
    }
}
