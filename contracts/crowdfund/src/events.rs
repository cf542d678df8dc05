//! # Events
//!
//! One event per successful state-changing entry point; these are the sole
//! audit trail of the contract. Topics are `(symbol, campaign_id)` so
//! consumers can filter a single campaign's history; payloads are typed
//! structs rather than bare tuples so they can evolve without re-ordering
//! fields.

use soroban_sdk::{contracttype, Address, String};

/// Published under `("created", campaign_id)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub creator: Address,
    pub title: String,
    pub goal: i128,
    pub deadline: u64,
}

/// Published under `("contrib", campaign_id)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionMade {
    pub contributor: Address,
    pub amount: i128,
    /// Reward tokens minted for this contribution (1:1 with `amount`).
    pub reward_minted: i128,
}

/// Published under `("finalized", campaign_id)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFinalized {
    pub total_raised: i128,
    pub goal_reached: bool,
}

/// Published under `("claimed", campaign_id)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsClaimed {
    pub creator: Address,
    pub amount: i128,
}

/// Published under `("refunded", campaign_id)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundIssued {
    pub contributor: Address,
    pub amount: i128,
}
