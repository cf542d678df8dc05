//! # Storage
//!
//! Typed helpers over Soroban's storage tiers as used by the crowdfund
//! contract:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type      | Description                          |
//! |-----------------|-----------|--------------------------------------|
//! | `CampaignCount` | `u64`     | Auto-increment campaign ID counter   |
//! | `FundingToken`  | `Address` | Token contract contributions move in |
//! | `RewardToken`   | `Address` | Reward issuer contract               |
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                        | Type             | Description                    |
//! |----------------------------|------------------|--------------------------------|
//! | `CampaignConfig(id)`       | `CampaignConfig` | Immutable campaign fields      |
//! | `CampaignState(id)`        | `CampaignState`  | Mutable campaign state         |
//! | `Contribution(id, addr)`   | `i128`           | Outstanding (unrefunded) stake |
//!
//! ## Temporary storage
//!
//! | Key          | Type   | Description                                   |
//! |--------------|--------|-----------------------------------------------|
//! | `PayoutLock` | `bool` | Non-reentrant guard for `claim_funds`/`refund`|
//!
//! The lock lives only for the duration of a payout invocation. It is keyed
//! globally rather than per campaign: a payout in flight blocks nested
//! payouts on *any* campaign in the same execution context.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::types::{Campaign, CampaignConfig, CampaignState};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global auto-increment counter for campaign IDs (Instance).
    CampaignCount,
    /// Funding token contract address (Instance).
    FundingToken,
    /// Reward issuer contract address (Instance).
    RewardToken,
    /// Immutable campaign configuration keyed by ID (Persistent).
    CampaignConfig(u64),
    /// Mutable campaign state keyed by ID (Persistent).
    CampaignState(u64),
    /// Outstanding contribution per (campaign, contributor) (Persistent).
    Contribution(u64, Address),
    /// Payout-in-progress reentrancy guard (Temporary).
    PayoutLock,
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::FundingToken)
}

pub fn set_funding_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::FundingToken, token);
    bump_instance(env);
}

pub fn get_funding_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::FundingToken)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_reward_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::RewardToken, token);
    bump_instance(env);
}

pub fn get_reward_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::RewardToken)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// Atomically reads, increments, and stores the campaign counter.
/// Returns the ID to use for the *current* campaign (pre-increment value).
pub fn get_and_increment_campaign_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &(current + 1));
    current
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save both the immutable config and initial mutable state for a new campaign.
pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let config_key = DataKey::CampaignConfig(campaign.id);
    let state_key = DataKey::CampaignState(campaign.id);

    let config = CampaignConfig {
        id: campaign.id,
        creator: campaign.creator.clone(),
        title: campaign.title.clone(),
        goal: campaign.goal,
        deadline: campaign.deadline,
    };

    let state = CampaignState {
        total_raised: campaign.total_raised,
        status: campaign.status.clone(),
    };

    env.storage().persistent().set(&config_key, &config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Campaign` by combining config and state.
/// Panics with `Error::CampaignNotFound` if the campaign does not exist.
pub fn load_campaign(env: &Env, id: u64) -> Campaign {
    let config = load_campaign_config(env, id);
    let state = load_campaign_state(env, id);
    Campaign {
        id: config.id,
        creator: config.creator,
        title: config.title,
        goal: config.goal,
        total_raised: state.total_raised,
        deadline: config.deadline,
        status: state.status,
    }
}

/// Load only the immutable campaign configuration.
pub fn load_campaign_config(env: &Env, id: u64) -> CampaignConfig {
    let key = DataKey::CampaignConfig(id);
    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    bump_persistent(env, &key);
    config
}

/// Load only the mutable campaign state.
pub fn load_campaign_state(env: &Env, id: u64) -> CampaignState {
    let key = DataKey::CampaignState(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::CampaignNotFound));
    bump_persistent(env, &key);
    state
}

/// Save only the mutable campaign state (the hot write path).
pub fn save_campaign_state(env: &Env, id: u64, state: &CampaignState) {
    let key = DataKey::CampaignState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Outstanding (not yet refunded) contribution of `contributor` to `id`.
/// Absent entries read as zero; existence of the campaign is the caller's
/// concern.
pub fn get_contribution(env: &Env, id: u64, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(id, contributor.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, id: u64, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(id, contributor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

// ── Reentrancy Guard ─────────────────────────────────────────────────

/// Take the payout lock; panics with `Error::ReentrantCall` if a payout is
/// already in progress in this execution context.
pub fn acquire_payout_lock(env: &Env) {
    if env.storage().temporary().has(&DataKey::PayoutLock) {
        panic_with_error!(env, Error::ReentrantCall);
    }
    env.storage().temporary().set(&DataKey::PayoutLock, &true);
}

/// Release the payout lock. Only reached on the success path; failure paths
/// panic, which discards the lock entry along with every other write.
pub fn release_payout_lock(env: &Env) {
    env.storage().temporary().remove(&DataKey::PayoutLock);
}
