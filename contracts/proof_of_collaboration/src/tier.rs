//! # Tier Engine
//!
//! Maps a contributor's total verified score to a [`Tier`]:
//!
//! | Total score   | Tier     |
//! |---------------|----------|
//! | `0..100`      | Bronze   |
//! | `100..250`    | Silver   |
//! | `250..500`    | Gold     |
//! | `500..`       | Platinum |
//!
//! Lower bounds are inclusive. The stored tier on a profile is only refreshed
//! by [`update_tier`]; submissions and verifications never touch it.

use soroban_sdk::{Address, Env};

use crate::events;
use crate::storage;
use crate::types::Tier;
use crate::Error;

/// Lowest total score that classifies as Silver.
pub const SILVER_THRESHOLD: u128 = 100;
/// Lowest total score that classifies as Gold.
pub const GOLD_THRESHOLD: u128 = 250;
/// Lowest total score that classifies as Platinum.
pub const PLATINUM_THRESHOLD: u128 = 500;

/// Returns the tier for a given total score.
#[must_use]
pub fn classify(total_score: u128) -> Tier {
    if total_score < SILVER_THRESHOLD {
        Tier::Bronze
    } else if total_score < GOLD_THRESHOLD {
        Tier::Silver
    } else if total_score < PLATINUM_THRESHOLD {
        Tier::Gold
    } else {
        Tier::Platinum
    }
}

/// Recompute and persist the tier of `contributor` from its current total.
///
/// Idempotent: with no score change in between, repeated calls store and
/// return the same tier.
pub fn update_tier(env: &Env, contributor: &Address) -> Result<Tier, Error> {
    let mut profile = storage::load_profile(env, contributor).ok_or(Error::NotFound)?;

    let previous = profile.tier;
    profile.tier = classify(profile.total_score);
    storage::save_profile(env, contributor, &profile);

    events::emit_tier_updated(
        env,
        contributor.clone(),
        previous,
        profile.tier,
        profile.total_score,
    );
    Ok(profile.tier)
}

/// Currently stored tier, which may lag the total score.
pub fn stored_tier(env: &Env, contributor: &Address) -> Result<Tier, Error> {
    storage::load_profile(env, contributor)
        .map(|profile| profile.tier)
        .ok_or(Error::NotFound)
}
