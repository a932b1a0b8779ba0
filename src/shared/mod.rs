pub mod units;

pub use units::*;

use rayon::prelude::*;

pub trait Named {
    fn name(&self) -> &str;
    fn normalized_name(&self) -> &str;
}

/// Generic substring search built for multithreaded searching.
/// Matching is case-insensitive against the precomputed normalized names,
/// results come back sorted by display name.
pub fn search<'a, T>(needle: &str, haystack: &'a [T]) -> Vec<&'a T>
where
    T: Send + Sync + Named,
{
    let normalized_needle = needle.to_lowercase();
    let mut results: Vec<&T> = haystack
        .par_iter()
        .filter(|hay| hay.normalized_name().contains(&normalized_needle))
        .collect();
    results.par_sort_unstable_by(|a, b| a.name().cmp(b.name()));
    results
}
