/// Membership table for the perfect squares reachable as a pair sum.
///
/// Holds every k² with k ≥ 2 and k² < 2n. k = 1 is excluded: no two
/// distinct positive integers sum to 1, so the square 1 can never occur
/// as a consecutive-pair sum.
#[derive(Debug, Clone)]
pub struct SquareSet {
    flags: Vec<bool>,
}

impl SquareSet {
    /// Build the table for the domain 1..=n. Pair sums are at most
    /// n + (n - 1), so squares of 2n and above are unreachable.
    pub fn for_domain(n: u32) -> Self {
        let limit = 2 * n as u64;
        let mut flags = vec![false; limit as usize];

        let mut k = 2u64;
        while k * k < limit {
            flags[(k * k) as usize] = true;
            k += 1;
        }

        SquareSet { flags }
    }

    pub fn contains(&self, sum: u32) -> bool {
        self.flags.get(sum as usize).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squares_for_domain_8() {
        let squares = SquareSet::for_domain(8);

        assert!(squares.contains(4));
        assert!(squares.contains(9));

        // 16 is not below 2n = 16, and no pair in 1..=8 reaches it anyway
        assert!(!squares.contains(16));
        assert!(!squares.contains(1));
        assert!(!squares.contains(3));
        assert!(!squares.contains(15));
    }

    #[test]
    fn test_squares_for_domain_13() {
        let squares = SquareSet::for_domain(13);

        for sq in [4, 9, 16, 25] {
            assert!(squares.contains(sq), "{sq} should be in the table");
        }
        assert!(!squares.contains(36));
    }

    #[test]
    fn test_degenerate_domains_have_no_squares() {
        for n in [0, 1] {
            let squares = SquareSet::for_domain(n);
            for sum in 0..10 {
                assert!(!squares.contains(sum));
            }
        }
    }

    #[test]
    fn test_one_is_never_a_member() {
        // k = 1 is skipped regardless of domain size
        assert!(!SquareSet::for_domain(100).contains(1));
    }

    #[test]
    fn test_out_of_range_sums_are_rejected() {
        let squares = SquareSet::for_domain(8);
        assert!(!squares.contains(100));
        assert!(!squares.contains(u32::MAX));
    }
}
