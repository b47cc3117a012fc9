use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::errors::WalletError;
use crate::types::{DataKey, ExecutionPolicy};

pub fn require_initialized(env: &Env) {
    if !env.storage().instance().has(&DataKey::Initialized) {
        panic_with_error!(env, WalletError::NotInitialized);
    }
}

pub fn set_initialized(env: &Env) {
    if env.storage().instance().has(&DataKey::Initialized) {
        panic_with_error!(env, WalletError::AlreadyInitialized);
    }
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Token).unwrap()
}

pub fn set_policy(env: &Env, policy: &ExecutionPolicy) {
    env.storage().instance().set(&DataKey::Policy, policy);
}

pub fn policy(env: &Env) -> ExecutionPolicy {
    env.storage().instance().get(&DataKey::Policy).unwrap()
}

/// Live balance of the wallet token held by this contract. Never cached:
/// the interval between submission and execution is unbounded and the
/// balance is not escrowed.
pub fn balance(env: &Env) -> i128 {
    let client = token::Client::new(env, &token(env));
    client.balance(&env.current_contract_address())
}
