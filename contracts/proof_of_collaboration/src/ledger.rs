//! # Contribution Ledger
//!
//! Owns the contribution table and drives the profile store:
//!
//! - [`submit`] allocates the next ID, stores an unverified record and
//!   upserts the contributor's profile.
//! - [`verify`] performs the single Unverified → Verified transition and
//!   credits the score to the contributor's total.
//!
//! Neither touches the stored tier; see [`crate::tier`].

use soroban_sdk::{log, Address, Env, String};

use crate::events;
use crate::rbac;
use crate::storage;
use crate::types::Contribution;
use crate::Error;

/// Record a new contribution by `contributor` and return its ID.
pub fn submit(env: &Env, contributor: &Address, details: String) -> u64 {
    let id = storage::next_contribution_id(env);
    let contribution = Contribution::new(id, contributor.clone(), details);
    storage::save_contribution(env, &contribution);

    let (mut profile, created) = storage::get_or_create_profile(env, contributor);
    if created {
        log!(env, "new contributor profile", contributor.clone());
    } else {
        profile.contribution_count += 1;
    }
    storage::save_profile(env, contributor, &profile);

    events::emit_contribution_submitted(
        env,
        id,
        contributor.clone(),
        profile.contribution_count,
    );
    id
}

/// Assign `score` to contribution `id` on behalf of admin `verifier`.
///
/// Checks run in order: admin membership, existence, not yet verified,
/// then score accumulation. The first failing check decides the error and
/// nothing is written.
pub fn verify(env: &Env, verifier: &Address, id: u64, score: u128) -> Result<(), Error> {
    rbac::require_admin(env, verifier)?;

    let mut contribution = storage::load_contribution(env, id).ok_or(Error::NotFound)?;
    if contribution.verified {
        return Err(Error::AlreadyVerified);
    }

    let total_score = storage::add_score(env, &contribution.contributor, score)?;

    contribution.verified = true;
    contribution.score = score;
    contribution.verifier = Some(verifier.clone());
    storage::save_contribution(env, &contribution);

    events::emit_contribution_verified(
        env,
        id,
        contribution.contributor,
        verifier.clone(),
        score,
        total_score,
    );
    Ok(())
}
