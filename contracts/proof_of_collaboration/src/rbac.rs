//! # RBAC: owner-gated admin registry
//!
//! Two-level hierarchy:
//!
//! ```text
//! Owner
//!   └── Admin (any number)
//! ```
//!
//! The owner is fixed at initialisation and is always an admin. Only the
//! owner can promote further admins. There is no demotion path, so the admin
//! set only grows.
//!
//! ## Storage layout
//!
//! - `RbacKey::Owner`       → `Address`: the one and only owner.
//! - `RbacKey::Admin(addr)` → `bool`: present iff `addr` is an admin.
//!
//! ## Event emissions
//!
//! | Event topic | Trigger |
//! |-------------|---------|
//! | `init`      | Owner established |
//! | `admin`     | Address promoted to admin (first time only) |
//!
//! Every function here takes `&Env` as the authorization context and either
//! returns the new state or an [`Error`]; nothing is cached between calls.

use soroban_sdk::{contracttype, log, symbol_short, Address, Env};

use crate::storage::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use crate::Error;

// ─────────────────────────────────────────────────────────
// Storage keys
// ─────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RbacKey {
    /// The registry owner.
    Owner,
    /// Admin membership flag for an address.
    Admin(Address),
}

// ─────────────────────────────────────────────────────────
// Storage helpers (private)
// ─────────────────────────────────────────────────────────

fn store_admin(env: &Env, address: &Address) {
    let key = RbacKey::Admin(address.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Read the owner, returning `None` before initialisation.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&RbacKey::Owner)
}

// ─────────────────────────────────────────────────────────
// Initialisation
// ─────────────────────────────────────────────────────────

/// Record `owner` and make it the first admin.
///
/// Fails with `Error::AlreadyInitialized` if an owner is already set; the
/// existing owner and admin set are left untouched.
pub fn init_owner(env: &Env, owner: &Address) -> Result<(), Error> {
    if env.storage().persistent().has(&RbacKey::Owner) {
        return Err(Error::AlreadyInitialized);
    }
    env.storage().persistent().set(&RbacKey::Owner, owner);
    env.storage().persistent().extend_ttl(
        &RbacKey::Owner,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
    store_admin(env, owner);

    env.events()
        .publish((symbol_short!("init"), owner.clone()), ());
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Admin promotion
// ─────────────────────────────────────────────────────────

/// Promote `target` to admin.
///
/// - `caller` must be the owner, otherwise `Error::NotOwner` (this includes
///   every caller before initialisation).
/// - Promoting an existing admin is a no-op and emits nothing.
pub fn add_admin(env: &Env, caller: &Address, target: &Address) -> Result<(), Error> {
    require_owner(env, caller)?;

    if is_admin(env, target) {
        return Ok(());
    }
    store_admin(env, target);
    log!(env, "admin added", target.clone());
    env.events()
        .publish((symbol_short!("admin"), target.clone()), caller.clone());
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Access guards (called from lib.rs handlers)
// ─────────────────────────────────────────────────────────

/// Assert that `address` is the owner.
pub fn require_owner(env: &Env, address: &Address) -> Result<(), Error> {
    match get_owner(env) {
        Some(ref owner) if owner == address => Ok(()),
        _ => Err(Error::NotOwner),
    }
}

/// Assert that `address` is an admin.
/// Used to gate `verify_contribution`.
#[inline]
pub fn require_admin(env: &Env, address: &Address) -> Result<(), Error> {
    if is_admin(env, address) {
        Ok(())
    } else {
        Err(Error::NotAdmin)
    }
}

// ─────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────

/// Returns `true` if `address` is in the admin set.
pub fn is_admin(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&RbacKey::Admin(address.clone()))
        .unwrap_or(false)
}
