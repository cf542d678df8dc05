//! # Reward issuer client
//!
//! The contract's only dependency on the reward issuer is the single `mint`
//! entry point, so the client is generated from a one-method trait instead of
//! importing the issuer's full interface. The issuer address is injected at
//! `initialize`; this contract never learns anything else about it.

use soroban_sdk::{contractclient, Address, Env};

/// The mint capability presented to the reward issuer.
#[contractclient(name = "RewardMinterClient")]
pub trait RewardMinter {
    /// Increase `to`'s reward balance by `amount`.
    ///
    /// The issuer authorizes the call because this contract is its configured
    /// minter and the direct cross-contract caller.
    fn mint(env: Env, to: Address, amount: i128);
}
