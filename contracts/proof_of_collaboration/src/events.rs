use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::Tier;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionSubmitted {
    pub contribution_id: u64,
    pub contributor: Address,
    pub contribution_count: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionVerified {
    pub contribution_id: u64,
    pub contributor: Address,
    pub verifier: Address,
    pub score: u128,
    pub total_score: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierUpdated {
    pub contributor: Address,
    pub previous: Tier,
    pub tier: Tier,
    pub total_score: u128,
}

pub fn emit_contribution_submitted(
    env: &Env,
    contribution_id: u64,
    contributor: Address,
    contribution_count: u64,
) {
    let topics = (symbol_short!("submitted"), contribution_id);
    let data = ContributionSubmitted {
        contribution_id,
        contributor,
        contribution_count,
    };
    env.events().publish(topics, data);
}

pub fn emit_contribution_verified(
    env: &Env,
    contribution_id: u64,
    contributor: Address,
    verifier: Address,
    score: u128,
    total_score: u128,
) {
    let topics = (symbol_short!("verified"), contribution_id);
    let data = ContributionVerified {
        contribution_id,
        contributor,
        verifier,
        score,
        total_score,
    };
    env.events().publish(topics, data);
}

/// Published on every successful `update_contributor_tier`, including
/// recomputations that leave the tier unchanged.
pub fn emit_tier_updated(
    env: &Env,
    contributor: Address,
    previous: Tier,
    tier: Tier,
    total_score: u128,
) {
    let topics = (symbol_short!("tier_upd"), contributor.clone());
    let data = TierUpdated {
        contributor,
        previous,
        tier,
        total_score,
    };
    env.events().publish(topics, data);
}
