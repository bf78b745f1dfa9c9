//! Round-robin fixture generation.

use crate::models::Fixture;

/// Every unordered pair of roster indices exactly once, both scores unset.
///
/// Order is outer index ascending, then inner index ascending:
/// (0,1), (0,2), .., (0,n-1), (1,2), ..
/// Fewer than 2 competitors yields no fixtures.
pub fn generate_fixtures(count: usize) -> Vec<Fixture> {
    (0..count)
        .flat_map(|i| (i + 1..count).map(move |j| Fixture::new(i, j)))
        .collect()
}
