//! # Crowdfund Contract
//!
//! Goal-or-refund crowdfunding escrow. A creator opens a campaign with a
//! funding goal and deadline; contributors stake the funding token against it
//! and receive reward tokens 1:1 at contribution time; once the deadline has
//! passed anyone may finalize the campaign, freezing exactly one of two
//! outcomes:
//!
//! | Phase        | Entry Point(s)                                  |
//! |--------------|-------------------------------------------------|
//! | Bootstrap    | [`Crowdfund::initialize`]                       |
//! | Funding      | [`Crowdfund::create_campaign`], [`Crowdfund::contribute`] |
//! | Resolution   | [`Crowdfund::finalize`]                         |
//! | Disbursement | [`Crowdfund::claim_funds`], [`Crowdfund::refund`] |
//! | Queries      | `get_campaign`, `get_contribution`              |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`]; event payloads live in
//! [`events`]; the reward issuer is reached through the one-method client in
//! [`reward`]. This file contains only the public entry points, their guard
//! checks, and event emissions.
//!
//! ## Disbursement safety
//!
//! `claim_funds` and `refund` follow an effects-after-state discipline: the
//! durable guard (the `Paid` status, resp. the zeroed contribution entry) is
//! written *before* the outward token transfer, so a re-entrant call during
//! the transfer finds the guard already tripped. On top of that, both entry
//! points take a process-wide payout lock that rejects any nested payout
//! outright. Failure anywhere panics, and the host discards every write of
//! the invocation, so a failed transfer also rolls back the guard flip.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, token, Address, Env,
    String,
};

mod events;
mod reward;
mod storage;
mod types;

#[cfg(test)]
mod test_events;

use reward::RewardMinterClient;
use storage::{
    acquire_payout_lock, get_and_increment_campaign_id, get_contribution, get_funding_token,
    get_reward_token, is_initialized, load_campaign, load_campaign_config, load_campaign_state,
    release_payout_lock, save_campaign, save_campaign_state, set_contribution, set_funding_token,
    set_reward_token,
};
pub use events::{
    CampaignCreated, CampaignFinalized, ContributionMade, FundsClaimed, RefundIssued,
};
pub use types::{Campaign, CampaignStatus};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized  = 1,
    NotInitialized      = 2,
    CampaignNotFound    = 3,
    EmptyTitle          = 4,
    InvalidGoal         = 5,
    InvalidDuration     = 6,
    InvalidAmount       = 7,
    AlreadyFinalized    = 8,
    CampaignEnded       = 9,
    FinalizeTooEarly    = 10,
    NotFinalized        = 11,
    GoalNotReached      = 12,
    GoalReached         = 13,
    FundsAlreadyClaimed = 14,
    NothingToRefund     = 15,
    NotCreator          = 16,
    ArithmeticOverflow  = 17,
    TransferFailed      = 18,
    ReentrantCall       = 19,
}

#[contract]
pub struct Crowdfund;

#[contractimpl]
impl Crowdfund {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Bind the funding token (the asset contributions move in) and the
    /// reward issuer contract.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    pub fn initialize(env: Env, funding_token: Address, reward_token: Address) {
        if is_initialized(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        set_funding_token(&env, &funding_token);
        set_reward_token(&env, &reward_token);
    }

    // ─────────────────────────────────────────────────────────
    // Funding phase
    // ─────────────────────────────────────────────────────────

    /// Open a new campaign and return its identifier.
    ///
    /// Identifiers form a dense sequence starting at 0; a rejected call
    /// allocates nothing. `deadline` is fixed here as `now + duration` and
    /// never changes afterwards.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        goal: i128,
        duration: u64,
    ) -> u64 {
        creator.require_auth();

        if title.len() == 0 {
            panic_with_error!(&env, Error::EmptyTitle);
        }
        if goal <= 0 {
            panic_with_error!(&env, Error::InvalidGoal);
        }
        if duration == 0 {
            panic_with_error!(&env, Error::InvalidDuration);
        }

        let id = get_and_increment_campaign_id(&env);
        let deadline = env
            .ledger()
            .timestamp()
            .checked_add(duration)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ArithmeticOverflow));

        let campaign = Campaign {
            id,
            creator: creator.clone(),
            title: title.clone(),
            goal,
            total_raised: 0,
            deadline,
            status: CampaignStatus::Open,
        };

        save_campaign(&env, &campaign);

        env.events().publish(
            (symbol_short!("created"), id),
            CampaignCreated {
                campaign_id: id,
                creator,
                title,
                goal,
                deadline,
            },
        );

        id
    }

    /// Stake `amount` of the funding token against an open campaign.
    ///
    /// Pulls the funding token from the contributor, credits the outstanding
    /// ledger entry and `total_raised` (both overflow-checked), then mints
    /// reward tokens 1:1 via the reward issuer. A failure at any point —
    /// including the mint — unwinds the whole invocation, token pull
    /// included.
    pub fn contribute(env: Env, campaign_id: u64, contributor: Address, amount: i128) {
        contributor.require_auth();

        let config = load_campaign_config(&env, campaign_id);
        let mut state = load_campaign_state(&env, campaign_id);

        if state.status != CampaignStatus::Open {
            panic_with_error!(&env, Error::AlreadyFinalized);
        }
        if env.ledger().timestamp() >= config.deadline {
            panic_with_error!(&env, Error::CampaignEnded);
        }
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        // Pull the stake into the contract.
        let token_client = token::Client::new(&env, &get_funding_token(&env));
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        let outstanding = get_contribution(&env, campaign_id, &contributor);
        let new_outstanding = outstanding
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ArithmeticOverflow));
        state.total_raised = state
            .total_raised
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ArithmeticOverflow));

        set_contribution(&env, campaign_id, &contributor, new_outstanding);
        save_campaign_state(&env, campaign_id, &state);

        // 1:1 reward issuance, smallest unit to smallest unit.
        let minter = RewardMinterClient::new(&env, &get_reward_token(&env));
        minter.mint(&contributor, &amount);

        env.events().publish(
            (symbol_short!("contrib"), campaign_id),
            ContributionMade {
                contributor,
                amount,
                reward_minted: amount,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────

    /// Freeze the campaign's outcome once its deadline has passed.
    ///
    /// Deliberately permissionless: any party may trigger resolution, so
    /// nobody can stall it. The `total_raised >= goal` comparison is taken
    /// exactly once, here, and never recomputed.
    pub fn finalize(env: Env, campaign_id: u64) {
        let config = load_campaign_config(&env, campaign_id);
        let mut state = load_campaign_state(&env, campaign_id);

        if state.status != CampaignStatus::Open {
            panic_with_error!(&env, Error::AlreadyFinalized);
        }
        if env.ledger().timestamp() < config.deadline {
            panic_with_error!(&env, Error::FinalizeTooEarly);
        }

        let goal_reached = state.total_raised >= config.goal;
        state.status = if goal_reached {
            CampaignStatus::Succeeded
        } else {
            CampaignStatus::Failed
        };
        save_campaign_state(&env, campaign_id, &state);

        env.events().publish(
            (symbol_short!("finalized"), campaign_id),
            CampaignFinalized {
                total_raised: state.total_raised,
                goal_reached,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Disbursement
    // ─────────────────────────────────────────────────────────

    /// Pay out the frozen `total_raised` to the creator of a succeeded
    /// campaign. At most one payout per campaign.
    ///
    /// The `Paid` status is written before the outward transfer; see the
    /// module docs for the reentrancy reasoning.
    pub fn claim_funds(env: Env, campaign_id: u64, caller: Address) {
        acquire_payout_lock(&env);
        caller.require_auth();

        let config = load_campaign_config(&env, campaign_id);
        let mut state = load_campaign_state(&env, campaign_id);

        match state.status {
            CampaignStatus::Open => panic_with_error!(&env, Error::NotFinalized),
            CampaignStatus::Failed => panic_with_error!(&env, Error::GoalNotReached),
            CampaignStatus::Paid => panic_with_error!(&env, Error::FundsAlreadyClaimed),
            CampaignStatus::Succeeded => {}
        }
        if caller != config.creator {
            panic_with_error!(&env, Error::NotCreator);
        }

        let amount = state.total_raised;

        // Guard before transfer.
        state.status = CampaignStatus::Paid;
        save_campaign_state(&env, campaign_id, &state);

        let token_client = token::Client::new(&env, &get_funding_token(&env));
        if token_client
            .try_transfer(&env.current_contract_address(), &config.creator, &amount)
            .is_err()
        {
            // Unwinding here discards the Paid flip along with the lock.
            panic_with_error!(&env, Error::TransferFailed);
        }

        env.events().publish(
            (symbol_short!("claimed"), campaign_id),
            FundsClaimed {
                creator: config.creator,
                amount,
            },
        );

        release_payout_lock(&env);
    }

    /// Return a contributor's outstanding stake in a failed campaign.
    /// At most one refund per (campaign, contributor).
    ///
    /// Mirrors `claim_funds`: the ledger entry is zeroed before the outward
    /// transfer.
    pub fn refund(env: Env, campaign_id: u64, contributor: Address) {
        acquire_payout_lock(&env);
        contributor.require_auth();

        let state = load_campaign_state(&env, campaign_id);

        if state.status == CampaignStatus::Open {
            panic_with_error!(&env, Error::NotFinalized);
        }
        if state.status.goal_reached() {
            panic_with_error!(&env, Error::GoalReached);
        }

        let amount = get_contribution(&env, campaign_id, &contributor);
        if amount <= 0 {
            panic_with_error!(&env, Error::NothingToRefund);
        }

        // Guard before transfer. `total_raised` stays frozen: it is the
        // historical sum, not the remaining escrow balance.
        set_contribution(&env, campaign_id, &contributor, 0);

        let token_client = token::Client::new(&env, &get_funding_token(&env));
        if token_client
            .try_transfer(&env.current_contract_address(), &contributor, &amount)
            .is_err()
        {
            panic_with_error!(&env, Error::TransferFailed);
        }

        env.events().publish(
            (symbol_short!("refunded"), campaign_id),
            RefundIssued {
                contributor,
                amount,
            },
        );

        release_payout_lock(&env);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Retrieve a campaign by its ID.
    pub fn get_campaign(env: Env, campaign_id: u64) -> Campaign {
        load_campaign(&env, campaign_id)
    }

    /// Outstanding (not yet refunded) contribution of `contributor` to
    /// `campaign_id`; 0 if they never contributed or were already refunded.
    pub fn get_contribution(env: Env, campaign_id: u64, contributor: Address) -> i128 {
        // Existence check: unknown campaign IDs are an error, a known
        // campaign with no entry for this contributor reads as zero.
        load_campaign_config(&env, campaign_id);
        get_contribution(&env, campaign_id, &contributor)
    }
}
