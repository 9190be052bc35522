extern crate std;

use soroban_sdk::{
    symbol_short, testutils::{Address as _, Events}, vec, Address, Env, IntoVal, String,
    TryIntoVal,
};

use crate::events::{ContributionSubmitted, ContributionVerified, TierUpdated};
use crate::{ProofOfCollaboration, ProofOfCollaborationClient, Tier};

fn setup() -> (Env, ProofOfCollaborationClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(ProofOfCollaboration, ());
    let client = ProofOfCollaborationClient::new(&env, &contract_id);
    (env, client)
}

fn setup_with_init() -> (Env, ProofOfCollaborationClient<'static>, Address) {
    let (env, client) = setup();
    let owner = Address::generate(&env);
    client.initialize(&owner);
    (env, client, owner)
}

#[test]
fn test_initialized_event() {
    let (env, client, owner) = setup_with_init();

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("init"), owner)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("init").into_val(&env), owner.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
}

#[test]
fn test_admin_added_event() {
    let (env, client, owner) = setup_with_init();
    let reviewer = Address::generate(&env);

    client.add_admin(&owner, &reviewer);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("admin"), reviewer); Data: owner
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("admin").into_val(&env), reviewer.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
    let by: Address = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(by, owner);
}

#[test]
fn test_contribution_submitted_event() {
    let (env, client, _) = setup_with_init();
    let contributor = Address::generate(&env);

    client.submit_contribution(&contributor, &String::from_str(&env, "first"));
    let id = client.submit_contribution(&contributor, &String::from_str(&env, "second"));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("submitted"), contribution_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("submitted").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ContributionSubmitted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, ContributionSubmitted {
        contribution_id: 2,
        contributor: contributor.clone(),
        contribution_count: 2,
    });
}

#[test]
fn test_contribution_verified_event() {
    let (env, client, owner) = setup_with_init();
    let contributor = Address::generate(&env);

    let id = client.submit_contribution(&contributor, &String::from_str(&env, "A"));
    client.verify_contribution(&owner, &id, &150);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("verified"), contribution_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("verified").into_val(&env), id.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ContributionVerified = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, ContributionVerified {
        contribution_id: id,
        contributor: contributor.clone(),
        verifier: owner.clone(),
        score: 150,
        total_score: 150,
    });
}

#[test]
fn test_tier_updated_event() {
    let (env, client, owner) = setup_with_init();
    let contributor = Address::generate(&env);

    let id = client.submit_contribution(&contributor, &String::from_str(&env, "A"));
    client.verify_contribution(&owner, &id, &260);
    client.update_contributor_tier(&contributor);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("tier_upd"), contributor)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("tier_upd").into_val(&env),
        contributor.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: TierUpdated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, TierUpdated {
        contributor: contributor.clone(),
        previous: Tier::Bronze,
        tier: Tier::Gold,
        total_score: 260,
    });
}
