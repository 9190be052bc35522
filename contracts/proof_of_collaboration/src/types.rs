//! # Types
//!
//! Shared data structures used across all modules of the Proof-of-Collaboration
//! contract.
//!
//! ## Design decisions
//!
//! ### Contribution as a one-shot state machine
//!
//! A [`Contribution`] has exactly two states:
//!
//! ```text
//! Unverified ──► Verified
//! ```
//!
//! The transition happens once, in `verify_contribution`, and records the
//! score and the verifying admin. A verified record is never rewritten.
//!
//! ### Tier as a cached field
//!
//! [`ContributorProfile::tier`] is derived from `total_score` but is only
//! refreshed by `update_contributor_tier`. Between a verification and the next
//! refresh the stored tier may lag the score.

use soroban_sdk::{contracttype, Address, String};

/// Reputation band derived from a contributor's total verified score.
///
/// Variants carry their wire value so clients can compare tiers numerically.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Tier {
    /// Total score below 100.
    Bronze = 1,
    /// Total score in `100..250`.
    Silver = 2,
    /// Total score in `250..500`.
    Gold = 3,
    /// Total score of 500 or more.
    Platinum = 4,
}

/// A single submitted piece of work.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    /// Sequential ID, starting at 1.
    pub id: u64,
    /// Address that submitted the work.
    pub contributor: Address,
    /// Free-form description supplied by the contributor.
    pub details: String,
    /// Set once by a successful verification.
    pub verified: bool,
    /// Score assigned at verification; 0 while unverified.
    pub score: u128,
    /// Admin that verified the contribution, if any.
    pub verifier: Option<Address>,
}

impl Contribution {
    /// Build a fresh, unverified record.
    pub fn new(id: u64, contributor: Address, details: String) -> Self {
        Self {
            id,
            contributor,
            details,
            verified: false,
            score: 0,
            verifier: None,
        }
    }
}

/// Per-contributor aggregate, created on first submission.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributorProfile {
    /// Sum of scores over this contributor's verified contributions.
    pub total_score: u128,
    /// Number of contributions submitted, verified or not.
    pub contribution_count: u64,
    /// Last tier computed by `update_contributor_tier`.
    pub tier: Tier,
    pub is_active: bool,
}

impl ContributorProfile {
    /// Profile for a contributor making their first submission.
    pub fn first_submission() -> Self {
        Self {
            total_score: 0,
            contribution_count: 1,
            tier: Tier::Bronze,
            is_active: true,
        }
    }
}
