//! # Types
//!
//! Shared data structures of the crowdfund contract.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Campaign` is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written once at creation; never mutated.
//! - [`CampaignState`] — written on every contribution and on finalization.
//!
//! The public API exposes the reconstructed [`Campaign`] struct for
//! convenience. Contributions are high-frequency writes; rewriting the small
//! state entry instead of the full record (title included) keeps them cheap.
//!
//! ### Status as a Finite-State Machine
//!
//! [`CampaignStatus`] enforces a strict forward-only lifecycle:
//!
//! ```text
//! Open ──► Succeeded ──► Paid
//!   └────► Failed
//! ```
//!
//! The variant encodes all three lifecycle flags at once — `finalized` is
//! "not Open", `goal_reached` is "Succeeded or Paid", `funds_claimed` is
//! "Paid" — so combinations like a payout on an open campaign are
//! unrepresentable. `Failed` is the phase in which per-contributor refunds
//! are served; it is terminal for the campaign itself.

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle status of a campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// Accepting contributions until the deadline.
    Open,
    /// Finalized with the goal met; awaiting the creator's payout.
    Succeeded,
    /// Finalized with the goal met and the payout taken.
    Paid,
    /// Finalized short of the goal; contributors may claim refunds.
    Failed,
}

impl CampaignStatus {
    /// Snapshot of `total_raised >= goal`, frozen at finalization.
    pub fn goal_reached(&self) -> bool {
        matches!(self, CampaignStatus::Succeeded | CampaignStatus::Paid)
    }
}

/// Immutable campaign configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub creator: Address,
    pub title: String,
    pub goal: i128,
    pub deadline: u64,
}

/// Mutable campaign state, updated on contributions and finalization.
///
/// `total_raised` is the historical sum of everything ever contributed; it is
/// frozen at finalization and is not decremented by refunds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    pub total_raised: i128,
    pub status: CampaignStatus,
}

/// Full representation of a campaign.
///
/// Used as the public API return type; reconstructed internally from the
/// split `CampaignConfig` + `CampaignState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Unique identifier (dense, auto-incremented from 0).
    pub id: u64,
    /// Address that created the campaign and receives funds on success.
    pub creator: Address,
    /// Human-readable campaign title.
    pub title: String,
    /// Target funding amount in the funding token's smallest unit.
    pub goal: i128,
    /// Sum of all contributions ever recorded.
    pub total_raised: i128,
    /// Ledger timestamp after which the campaign can be finalized.
    pub deadline: u64,
    /// Current lifecycle status.
    pub status: CampaignStatus,
}
