extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use reward_token::{RewardToken, RewardTokenClient};

use crate::events::{
    CampaignCreated, CampaignFinalized, ContributionMade, FundsClaimed, RefundIssued,
};
use crate::{Crowdfund, CrowdfundClient};

fn setup() -> (
    Env,
    CrowdfundClient<'static>,
    token::StellarAssetClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin);
    let funding_sac = token::StellarAssetClient::new(&env, &sac.address());

    let reward_admin = Address::generate(&env);
    let reward_id = env.register(RewardToken, ());
    let reward = RewardTokenClient::new(&env, &reward_id);
    reward.initialize(&reward_admin);

    let contract_id = env.register(Crowdfund, ());
    let client = CrowdfundClient::new(&env, &contract_id);
    client.initialize(&sac.address(), &reward_id);
    reward.set_minter(&contract_id);

    (env, client, funding_sac)
}

fn advance_time(env: &Env, by: u64) {
    env.ledger().with_mut(|li| li.timestamp += by);
}

#[test]
fn test_campaign_created_event() {
    let (env, client, _sac) = setup();
    let creator = Address::generate(&env);
    let title = String::from_str(&env, "Community well");

    let id = client.create_campaign(&creator, &title, &5_000, &86_400);
    let deadline = env.ledger().timestamp() + 86_400;

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            campaign_id: id,
            creator,
            title,
            goal: 5_000,
            deadline,
        }
    );
}

#[test]
fn test_contribution_event() {
    let (env, client, sac) = setup();
    let creator = Address::generate(&env);
    let contributor = Address::generate(&env);
    let title = String::from_str(&env, "Community well");

    let id = client.create_campaign(&creator, &title, &5_000, &86_400);
    sac.mint(&contributor, &1_000);
    client.contribute(&id, &contributor, &1_000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("contrib").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ContributionMade = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ContributionMade {
            contributor,
            amount: 1_000,
            reward_minted: 1_000,
        }
    );
}

#[test]
fn test_finalized_event_carries_outcome() {
    let (env, client, sac) = setup();
    let creator = Address::generate(&env);
    let contributor = Address::generate(&env);
    let title = String::from_str(&env, "Community well");

    let id = client.create_campaign(&creator, &title, &1_000, &100);
    sac.mint(&contributor, &300);
    client.contribute(&id, &contributor, &300);

    advance_time(&env, 100);
    client.finalize(&id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("finalized").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignFinalized = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignFinalized {
            total_raised: 300,
            goal_reached: false,
        }
    );
}

#[test]
fn test_funds_claimed_event() {
    let (env, client, sac) = setup();
    let creator = Address::generate(&env);
    let contributor = Address::generate(&env);
    let title = String::from_str(&env, "Community well");

    let id = client.create_campaign(&creator, &title, &1_000, &100);
    sac.mint(&contributor, &1_500);
    client.contribute(&id, &contributor, &1_500);

    advance_time(&env, 100);
    client.finalize(&id);
    client.claim_funds(&id, &creator);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("claimed").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsClaimed = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsClaimed {
            creator,
            amount: 1_500,
        }
    );
}

#[test]
fn test_refunded_event() {
    let (env, client, sac) = setup();
    let creator = Address::generate(&env);
    let contributor = Address::generate(&env);
    let title = String::from_str(&env, "Community well");

    let id = client.create_campaign(&creator, &title, &1_000, &100);
    sac.mint(&contributor, &300);
    client.contribute(&id, &contributor, &300);

    advance_time(&env, 100);
    client.finalize(&id);
    client.refund(&id, &contributor);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("refunded").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: RefundIssued = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        RefundIssued {
            contributor,
            amount: 300,
        }
    );
}
