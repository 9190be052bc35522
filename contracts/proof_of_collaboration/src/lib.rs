//! # Proof of Collaboration Contract
//!
//! Tracks contributions to a project, lets trusted admins score them, and
//! derives each contributor's reputation tier from the accumulated score.
//! The single Soroban contract `ProofOfCollaboration` exposes:
//!
//! | Phase        | Entry Point(s)                                          |
//! |--------------|---------------------------------------------------------|
//! | Bootstrap    | [`ProofOfCollaboration::initialize`]                    |
//! | Role admin   | `add_admin`, `is_admin`, `get_owner`                    |
//! | Submission   | [`ProofOfCollaboration::submit_contribution`]           |
//! | Verification | [`ProofOfCollaboration::verify_contribution`]           |
//! | Tiers        | `update_contributor_tier`, `get_contributor_tier`, `classify_score` |
//! | Queries      | `get_contribution`, `get_contribution_count`, `get_contributor_profile` |
//!
//! ## Architecture
//!
//! Authorization lives in [`rbac`], the contribution state machine in
//! [`ledger`], tier classification in [`tier`], and storage access in
//! `storage`. This file only authenticates callers and dispatches.
//!
//! ## Error codes
//!
//! Fallible entry points return [`Error`]; the numeric codes are stable and
//! intended for client-side mapping to messages.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

pub mod events;
mod ledger;
pub mod rbac;
mod storage;
pub mod tier;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use types::{Contribution, ContributorProfile, Tier};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the registry owner.
    NotOwner = 100,
    /// Contribution or contributor profile does not exist.
    NotFound = 101,
    /// Caller is not an admin.
    NotAdmin = 102,
    /// Contribution has already been verified.
    AlreadyVerified = 103,
    /// `initialize` was already called.
    AlreadyInitialized = 104,
    /// Score accumulation exceeded `u128::MAX`.
    Overflow = 105,
}

#[contract]
pub struct ProofOfCollaboration;

#[contractimpl]
impl ProofOfCollaboration {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract with `owner` as owner and first admin.
    ///
    /// Must be called once after deployment. A second call fails with
    /// `Error::AlreadyInitialized` and changes nothing.
    pub fn initialize(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();
        rbac::init_owner(&env, &owner)?;
        storage::init_contribution_count(&env);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Admin management
    // ─────────────────────────────────────────────────────────

    /// Promote `admin` to the admin set.
    ///
    /// - `caller` must be the owner.
    pub fn add_admin(env: Env, caller: Address, admin: Address) -> Result<(), Error> {
        caller.require_auth();
        rbac::add_admin(&env, &caller, &admin)
    }

    /// Return `true` if `address` is an admin.
    pub fn is_admin(env: Env, address: Address) -> bool {
        rbac::is_admin(&env, &address)
    }

    /// Return the owner, or `None` before initialisation.
    pub fn get_owner(env: Env) -> Option<Address> {
        rbac::get_owner(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Contributions
    // ─────────────────────────────────────────────────────────

    /// Submit a contribution described by `details`.
    ///
    /// Open to any address. Returns the new contribution ID (1, 2, 3, ...).
    pub fn submit_contribution(env: Env, contributor: Address, details: String) -> u64 {
        contributor.require_auth();
        ledger::submit(&env, &contributor, details)
    }

    /// Verify contribution `contribution_id` with `score`.
    ///
    /// - `verifier` must be an admin.
    /// - A contribution can be verified only once.
    pub fn verify_contribution(
        env: Env,
        verifier: Address,
        contribution_id: u64,
        score: u128,
    ) -> Result<(), Error> {
        verifier.require_auth();
        ledger::verify(&env, &verifier, contribution_id, score)
    }

    pub fn get_contribution(env: Env, contribution_id: u64) -> Option<Contribution> {
        storage::load_contribution(&env, contribution_id)
    }

    /// Number of contributions submitted so far; equals the last issued ID.
    pub fn get_contribution_count(env: Env) -> u64 {
        storage::contribution_count(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Profiles and tiers
    // ─────────────────────────────────────────────────────────

    pub fn get_contributor_profile(env: Env, contributor: Address) -> Option<ContributorProfile> {
        storage::load_profile(&env, &contributor)
    }

    /// Recompute and store the tier of `contributor` from its total score.
    ///
    /// Requires no authorization. Returns the stored tier.
    pub fn update_contributor_tier(env: Env, contributor: Address) -> Result<Tier, Error> {
        tier::update_tier(&env, &contributor)
    }

    /// Return the stored tier of `contributor`, which may lag its score
    /// until `update_contributor_tier` is called.
    pub fn get_contributor_tier(env: Env, contributor: Address) -> Result<Tier, Error> {
        tier::stored_tier(&env, &contributor)
    }

    /// Tier that `total_score` maps to.
    pub fn classify_score(_env: Env, total_score: u128) -> Tier {
        tier::classify(total_score)
    }
}
