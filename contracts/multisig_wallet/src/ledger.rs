use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::DataKey;

pub const MAX_OWNERS: u32 = 50;

/// Validates and records the initial owner set and quorum. Any violation
/// aborts construction entirely; no partial state is left behind.
pub fn init(env: &Env, owners: &Vec<Address>, required: u32) {
    if owners.is_empty() {
        panic_with_error!(env, WalletError::OwnersRequired);
    }

    if owners.len() > MAX_OWNERS {
        panic_with_error!(env, WalletError::TooManyOwners);
    }

    if required == 0 || required > owners.len() {
        panic_with_error!(env, WalletError::InvalidRequired);
    }

    for owner in owners.iter() {
        // The membership flag doubles as the duplicate check.
        if env.storage().instance().has(&DataKey::IsOwner(owner.clone())) {
            panic_with_error!(env, WalletError::DuplicateOwner);
        }
        env.storage().instance().set(&DataKey::IsOwner(owner.clone()), &true);
    }

    env.storage().instance().set(&DataKey::Owners, owners);
    env.storage().instance().set(&DataKey::Required, &required);
}

pub fn is_owner(env: &Env, id: &Address) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::IsOwner(id.clone()))
        .unwrap_or(false)
}

pub fn require_owner(env: &Env, caller: &Address) {
    if !is_owner(env, caller) {
        panic_with_error!(env, WalletError::NotOwner);
    }
}

pub fn owners(env: &Env) -> Vec<Address> {
    env.storage().instance().get(&DataKey::Owners).unwrap()
}

pub fn owner_count(env: &Env) -> u32 {
    owners(env).len()
}

pub fn required(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::Required).unwrap()
}

pub fn set_required(env: &Env, n: u32) {
    if n == 0 || n > owner_count(env) {
        panic_with_error!(env, WalletError::InvalidRequired);
    }
    env.storage().instance().set(&DataKey::Required, &n);
}

/// Only the execution engine calls this, after an addition proposal has met
/// quorum.
pub fn add_owner(env: &Env, id: &Address) {
    let mut owners = owners(env);
    owners.push_back(id.clone());
    env.storage().instance().set(&DataKey::Owners, &owners);
    env.storage().instance().set(&DataKey::IsOwner(id.clone()), &true);
}

/// Swap-with-last removal; array position carries no meaning. Clears the
/// membership flag but leaves the address's historical approvals in place.
pub fn remove_owner(env: &Env, id: &Address) {
    let mut owners = owners(env);
    let idx = match owners.first_index_of(id) {
        Some(idx) => idx,
        None => panic_with_error!(env, WalletError::OwnerNotFound),
    };
    let last = owners.last_unchecked();
    owners.set(idx, last);
    let _ = owners.pop_back();
    env.storage().instance().set(&DataKey::Owners, &owners);
    env.storage().instance().remove(&DataKey::IsOwner(id.clone()));
}
