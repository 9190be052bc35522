#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::tier::classify;
use crate::types::{Contribution, ContributorProfile, Tier};

/// INV-1: Contribution IDs are sequential starting from 1.
pub fn assert_sequential_ids(ids: &[u64]) {
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(
            *id,
            i as u64 + 1,
            "INV-1 violated: expected id {}, got {}",
            i + 1,
            id
        );
    }
}

/// INV-2: An unverified contribution carries no score and no verifier;
/// a verified one always names its verifier.
pub fn assert_contribution_consistent(contribution: &Contribution) {
    if contribution.verified {
        assert!(
            contribution.verifier.is_some(),
            "INV-2 violated: contribution {} verified without verifier",
            contribution.id
        );
    } else {
        assert_eq!(
            contribution.score, 0,
            "INV-2 violated: unverified contribution {} has score {}",
            contribution.id, contribution.score
        );
        assert!(
            contribution.verifier.is_none(),
            "INV-2 violated: unverified contribution {} has a verifier",
            contribution.id
        );
    }
}

/// INV-3: A profile's total equals the sum of its verified contributions'
/// scores, and its count equals the number of its contributions.
pub fn assert_profile_matches_ledger(
    contributor: &Address,
    profile: &ContributorProfile,
    ledger: &[Contribution],
) {
    let mine = ledger.iter().filter(|c| &c.contributor == contributor);
    let (count, total) = mine.fold((0u64, 0u128), |(count, total), c| {
        let add = if c.verified { c.score } else { 0 };
        (count + 1, total + add)
    });
    assert_eq!(
        profile.total_score, total,
        "INV-3 violated: total_score {} != verified sum {}",
        profile.total_score, total
    );
    assert_eq!(
        profile.contribution_count, count,
        "INV-3 violated: contribution_count {} != submitted {}",
        profile.contribution_count, count
    );
}

/// INV-4: Verification never rewrites a verified contribution.
pub fn assert_verification_immutable(before: &Contribution, after: &Contribution) {
    if before.verified {
        assert_eq!(before, after, "INV-4 violated: verified contribution changed");
    }
}

/// INV-5: Classification is non-decreasing in score.
pub fn assert_classify_monotonic(lower: u128, higher: u128) {
    assert!(lower <= higher);
    let (a, b): (Tier, Tier) = (classify(lower), classify(higher));
    assert!(
        a <= b,
        "INV-5 violated: classify({}) = {:?} > classify({}) = {:?}",
        lower,
        a,
        higher,
        b
    );
}
