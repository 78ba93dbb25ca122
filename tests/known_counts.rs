use square_sums::{MAX_DOMAIN, SquareSumsError, count_permutations};

#[test]
fn no_domain_below_15_has_a_permutation() {
    for n in 0..=14 {
        assert_eq!(count_permutations(n).unwrap(), 0, "n = {n}");
    }
}

#[test]
fn domains_15_through_17_have_2_permutations_each() {
    assert_eq!(count_permutations(15).unwrap(), 2);
    assert_eq!(count_permutations(16).unwrap(), 2);
    assert_eq!(count_permutations(17).unwrap(), 2);
}

#[test]
fn the_gap_at_18_through_22_and_24_is_empty() {
    for n in 18..=22 {
        assert_eq!(count_permutations(n).unwrap(), 0, "n = {n}");
    }
    assert_eq!(count_permutations(24).unwrap(), 0);
}

#[test]
fn domain_23_has_6_permutations() {
    assert_eq!(count_permutations(23).unwrap(), 6);
}

#[test]
fn domain_25_has_20_permutations() {
    assert_eq!(count_permutations(25).unwrap(), 20);
}

#[test]
#[ignore = "exhaustive search beyond n = 25 takes a while"]
fn domains_26_and_27_have_24_and_70_permutations() {
    assert_eq!(count_permutations(26).unwrap(), 24);
    assert_eq!(count_permutations(27).unwrap(), 70);
}

#[test]
fn domains_beyond_the_mask_width_are_refused() {
    for n in [MAX_DOMAIN + 1, 100, u32::MAX] {
        let err = count_permutations(n).unwrap_err();
        assert!(
            matches!(err, SquareSumsError::DomainTooLarge { n: got } if got == n),
            "n = {n}: {err}"
        );
    }
}
