//! Pure partitioning helpers shared by the layout operations

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Builds the shuffle source for an operation.
///
/// A fixed seed reproduces the same assignment for the same sorted listing;
/// `None` draws from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Deals `items` into `n_splits` shards: `items[i]` goes to shard `i % n_splits`.
///
/// Shards are disjoint, cover `items`, and their sizes differ by at most one,
/// with the larger shards first.
pub fn round_robin<T: Clone>(items: &[T], n_splits: usize) -> Vec<Vec<T>> {
    let mut shards: Vec<Vec<T>> = (0..n_splits)
        .map(|_| Vec::with_capacity(items.len() / n_splits.max(1) + 1))
        .collect();
    if n_splits == 0 {
        return shards;
    }
    for (i, item) in items.iter().enumerate() {
        shards[i % n_splits].push(item.clone());
    }
    shards
}

/// Number of files routed to the train side: `floor(count * train_ratio)`.
///
/// The validation side absorbs the remainder.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn split_point(count: usize, train_ratio: f64) -> usize {
    let point = (count as f64 * train_ratio).floor() as usize;
    point.min(count)
}
