//! Brute-force pair enumeration.

/// Every unordered pair `(i, j)` with `i < j < n`, in lexicographic order.
pub fn candidate_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Number of pairs [`candidate_pairs`] yields for `n` bodies.
#[must_use]
pub const fn pair_count(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}
