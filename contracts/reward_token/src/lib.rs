//! # Reward Token Contract
//!
//! A minimal claim-token issuer for the crowdfund escrow contract. It keeps a
//! balance per account and exposes exactly one privileged operation,
//! [`RewardToken::mint`], callable only by the configured minter (the
//! crowdfund contract, set once by the admin after deployment).
//!
//! There is deliberately no transfer, burn, or decimals surface here: the
//! escrow contract only depends on `mint`, and everything else would widen
//! the trusted surface for no benefit to it.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, symbol_short, Address,
    Env,
};


/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    MinterAlreadySet = 3,
    MinterNotSet = 4,
    InvalidAmount = 5,
    ArithmeticOverflow = 6,
}

/// Contract storage keys.
///
/// `Admin` and `Minter` are instance-tier and live as long as the contract;
/// `Balance` entries are persistent with per-entry TTL.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Administrative owner that may configure the minter (Instance).
    Admin,
    /// The single address authorized to call `mint` (Instance).
    Minter,
    /// Reward balance per account (Persistent).
    Balance(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_balance(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

#[contract]
pub struct RewardToken;

#[contractimpl]
impl RewardToken {
    /// Set the administrative owner. Must be called exactly once after
    /// deployment; subsequent calls panic with `Error::AlreadyInitialized`.
    pub fn initialize(env: Env, admin: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        bump_instance(&env);
    }

    /// Configure the single authorized minter. Admin-only, settable once —
    /// the minter binding is part of the escrow's trust assumptions and is
    /// not rotatable afterwards.
    pub fn set_minter(env: Env, minter: Address) {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized));
        admin.require_auth();

        if env.storage().instance().has(&DataKey::Minter) {
            panic_with_error!(&env, Error::MinterAlreadySet);
        }
        env.storage().instance().set(&DataKey::Minter, &minter);
        bump_instance(&env);
    }

    /// Increase `to`'s balance by `amount`.
    ///
    /// Only the configured minter may call this; when the minter is a
    /// contract, its auth is satisfied by being the direct cross-contract
    /// caller. `amount` must be strictly positive and the resulting balance
    /// must not overflow `i128`.
    pub fn mint(env: Env, to: Address, amount: i128) {
        let minter: Address = env
            .storage()
            .instance()
            .get(&DataKey::Minter)
            .unwrap_or_else(|| panic_with_error!(&env, Error::MinterNotSet));
        minter.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let key = DataKey::Balance(to.clone());
        let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        let new_balance = balance
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, Error::ArithmeticOverflow));

        env.storage().persistent().set(&key, &new_balance);
        bump_balance(&env, &key);
        bump_instance(&env);

        env.events()
            .publish((symbol_short!("minted"), to), amount);
    }

    /// Reward balance of `id`; 0 if the account was never minted to.
    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id))
            .unwrap_or(0)
    }

    /// The configured minter address. Panics if no minter has been set.
    pub fn minter(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Minter)
            .unwrap_or_else(|| panic_with_error!(&env, Error::MinterNotSet))
    }
}
