//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the
//! contribution ledger and the contributor profile store.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key                 | Type  | Description                           |
//! |---------------------|-------|---------------------------------------|
//! | `ContributionCount` | `u64` | Last issued contribution ID           |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                   | Type                 | Description                  |
//! |-----------------------|----------------------|------------------------------|
//! | `Contribution(id)`    | `Contribution`       | One submitted contribution   |
//! | `Profile(address)`    | `ContributorProfile` | Per-contributor aggregate    |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Admin membership lives under `RbacKey` in [`crate::rbac`].

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Contribution, ContributorProfile};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Last issued contribution ID (Instance).
    ContributionCount,
    /// Contribution record keyed by ID (Persistent).
    Contribution(u64),
    /// Contributor profile keyed by address (Persistent).
    Profile(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ─────────────────────────────────────────────────────────
// Contribution counter
// ─────────────────────────────────────────────────────────

/// Number of contributions submitted so far (0 before the first one).
pub fn contribution_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ContributionCount)
        .unwrap_or(0)
}

/// Write the counter as 0 unless a submission has already been recorded.
///
/// Called from `initialize`; never rewinds a counter that is in use.
pub fn init_contribution_count(env: &Env) {
    if !env.storage().instance().has(&DataKey::ContributionCount) {
        env.storage()
            .instance()
            .set(&DataKey::ContributionCount, &0u64);
    }
    bump_instance(env);
}

/// Increment the contribution counter and return the new value.
/// The first ID handed out is 1.
pub fn next_contribution_id(env: &Env) -> u64 {
    bump_instance(env);
    let next = contribution_count(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::ContributionCount, &next);
    next
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ─────────────────────────────────────────────────────────
// Contributions
// ─────────────────────────────────────────────────────────

pub fn save_contribution(env: &Env, contribution: &Contribution) {
    let key = DataKey::Contribution(contribution.id);
    env.storage().persistent().set(&key, contribution);
    bump_persistent(env, &key);
}

/// Load a contribution, or `None` if the ID was never issued.
pub fn load_contribution(env: &Env, id: u64) -> Option<Contribution> {
    let key = DataKey::Contribution(id);
    let contribution: Option<Contribution> = env.storage().persistent().get(&key);
    if contribution.is_some() {
        bump_persistent(env, &key);
    }
    contribution
}

// ─────────────────────────────────────────────────────────
// Contributor profiles
// ─────────────────────────────────────────────────────────

/// Load a contributor profile, or `None` if the address never submitted.
pub fn load_profile(env: &Env, contributor: &Address) -> Option<ContributorProfile> {
    let key = DataKey::Profile(contributor.clone());
    let profile: Option<ContributorProfile> = env.storage().persistent().get(&key);
    if profile.is_some() {
        bump_persistent(env, &key);
    }
    profile
}

pub fn save_profile(env: &Env, contributor: &Address, profile: &ContributorProfile) {
    let key = DataKey::Profile(contributor.clone());
    env.storage().persistent().set(&key, profile);
    bump_persistent(env, &key);
}

/// Return the profile for `contributor`, creating a first-submission profile
/// if none exists. The flag is `true` when the profile was just created.
///
/// A freshly created profile already counts the submission that caused it;
/// callers only increment `contribution_count` when the flag is `false`.
/// Nothing is written; the caller persists the result with [`save_profile`].
pub fn get_or_create_profile(env: &Env, contributor: &Address) -> (ContributorProfile, bool) {
    match load_profile(env, contributor) {
        Some(profile) => (profile, false),
        None => (ContributorProfile::first_submission(), true),
    }
}

/// Add `score` to the contributor's running total and return the new total.
///
/// Fails with `Error::Overflow` if the sum does not fit in `u128`; nothing
/// is written in that case.
pub fn add_score(env: &Env, contributor: &Address, score: u128) -> Result<u128, Error> {
    let mut profile = load_profile(env, contributor)
        .expect("profile must exist for a submitted contribution");
    profile.total_score = profile
        .total_score
        .checked_add(score)
        .ok_or(Error::Overflow)?;
    save_profile(env, contributor, &profile);
    Ok(profile.total_score)
}
