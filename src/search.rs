use chrono::Local;

use crate::adjacency::AdjacencyMap;
use crate::error::{Result, SquareSumsError};
use crate::observer::{NoProgress, ProgressObserver, StartEvent};

/// Largest supported domain size. Bit i of the u64 path mask marks the
/// integer i as placed, and bit 0 is never used, leaving 63 usable bits.
pub const MAX_DOMAIN: u32 = 63;

/// Count the square-sum permutations of 1..=n: orderings in which every
/// pair of consecutive elements sums to a perfect square.
pub fn count_permutations(n: u32) -> Result<u64> {
    count_permutations_with(n, &mut NoProgress)
}

/// Like [`count_permutations`], notifying `observer` once per top-level
/// starting integer.
pub fn count_permutations_with<O: ProgressObserver>(n: u32, observer: &mut O) -> Result<u64> {
    if n > MAX_DOMAIN {
        return Err(SquareSumsError::DomainTooLarge { n });
    }
    let adjacency = AdjacencyMap::build(n);
    count_paths(&adjacency, observer)
}

/// Count every path through `adjacency` that visits each vertex exactly
/// once, trying each vertex as the starting point in ascending order.
///
/// The observer is notified before each starting vertex's subtree is
/// explored, with the number of paths found up to that point.
pub fn count_paths<O: ProgressObserver>(
    adjacency: &AdjacencyMap,
    observer: &mut O,
) -> Result<u64> {
    let n = adjacency.domain();
    if n > MAX_DOMAIN {
        return Err(SquareSumsError::DomainTooLarge { n });
    }
    // With no elements the empty placement already equals the full mask;
    // the empty permutation is defined not to count.
    if n == 0 {
        return Ok(0);
    }
    // A single element forms no consecutive pair, so the one-element
    // sequence is defined not to count either.
    if n == 1 {
        return Ok(0);
    }

    let full = full_mask(n);
    let mut mask = 0u64;
    let mut count = 0u64;

    for start in 1..=n {
        observer.on_start(&StartEvent {
            start,
            domain: n,
            found_so_far: count,
            at: Local::now(),
        });

        mask |= 1u64 << start;
        extend(adjacency, full, &mut mask, start, &mut count);
        mask &= !(1u64 << start);

        debug_assert_eq!(mask, 0, "mask not restored after start {start}");
    }

    Ok(count)
}

/// Bits 1..=n set, bit 0 clear. Well-defined for n up to [`MAX_DOMAIN`].
fn full_mask(n: u32) -> u64 {
    ((1u64 << n) - 1) << 1
}

fn extend(adjacency: &AdjacencyMap, full: u64, mask: &mut u64, last: u32, count: &mut u64) {
    if *mask == full {
        // A complete path: every neighbor of `last` is already placed, so
        // the loop below finds nothing and the recursion unwinds.
        *count += 1;
    }

    for &next in adjacency.neighbors_of(last) {
        if (*mask >> next) & 1 == 0 {
            *mask |= 1u64 << next;
            extend(adjacency, full, mask, next, count);
            *mask &= !(1u64 << next);
        }
    }
}
