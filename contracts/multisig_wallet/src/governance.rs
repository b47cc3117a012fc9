use soroban_sdk::{panic_with_error, Address, Env, Map, Vec};

use crate::errors::WalletError;
use crate::ledger;
use crate::types::{DataKey, OwnerChange};

// Owner-change proposals live in their own id space, separate from
// transactions. They share the transaction lifecycle except that approvals
// cannot be revoked; reversing a change is done by a counter-proposal.

pub fn propose_add(env: &Env, caller: &Address, candidate: &Address) -> u64 {
    ledger::require_owner(env, caller);

    if ledger::is_owner(env, candidate) {
        panic_with_error!(env, WalletError::OwnerExists);
    }

    if ledger::owner_count(env) >= ledger::MAX_OWNERS {
        panic_with_error!(env, WalletError::MaxOwnersReached);
    }

    append(env, candidate, true)
}

pub fn propose_remove(env: &Env, caller: &Address, target: &Address) -> u64 {
    ledger::require_owner(env, caller);

    if !ledger::is_owner(env, target) {
        panic_with_error!(env, WalletError::OwnerNotFound);
    }

    if ledger::owner_count(env) - 1 < ledger::required(env) {
        panic_with_error!(env, WalletError::OwnersBelowRequired);
    }

    append(env, target, false)
}

fn append(env: &Env, target: &Address, is_addition: bool) -> u64 {
    let id: u64 = env.storage().instance().get(&DataKey::ChangeCount).unwrap_or(0u64);

    let change = OwnerChange {
        id,
        target: target.clone(),
        is_addition,
        executed: false,
    };

    env.storage().instance().set(&DataKey::Change(id), &change);

    let approvals: Map<Address, bool> = Map::new(env);
    env.storage().instance().set(&DataKey::ChangeApprovals(id), &approvals);

    env.storage().instance().set(&DataKey::ChangeCount, &(id + 1));

    id
}

pub fn get(env: &Env, id: u64) -> OwnerChange {
    match env.storage().instance().get(&DataKey::Change(id)) {
        Some(change) => change,
        None => panic_with_error!(env, WalletError::ChangeNotFound),
    }
}

pub fn store(env: &Env, change: &OwnerChange) {
    env.storage().instance().set(&DataKey::Change(change.id), change);
}

pub fn count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::ChangeCount).unwrap_or(0u64)
}

pub fn approvals(env: &Env, id: u64) -> Map<Address, bool> {
    env.storage()
        .instance()
        .get(&DataKey::ChangeApprovals(id))
        .unwrap_or(Map::new(env))
}

pub fn approve(env: &Env, caller: &Address, id: u64) {
    ledger::require_owner(env, caller);

    let change = get(env, id);
    if change.executed {
        panic_with_error!(env, WalletError::ChangeAlreadyExecuted);
    }

    let mut approvals = approvals(env, id);
    if approvals.get(caller.clone()).unwrap_or(false) {
        panic_with_error!(env, WalletError::ChangeAlreadyApproved);
    }

    approvals.set(caller.clone(), true);
    env.storage().instance().set(&DataKey::ChangeApprovals(id), &approvals);
}

/// Same live-membership counting rule as the transaction registry.
pub fn approval_count(env: &Env, id: u64) -> u32 {
    let approvals = approvals(env, id);
    let mut count = 0u32;
    for owner in ledger::owners(env).iter() {
        if approvals.get(owner).unwrap_or(false) {
            count += 1;
        }
    }
    count
}

pub fn pending_ids(env: &Env) -> Vec<u64> {
    let mut pending = Vec::new(env);
    for id in 0..count(env) {
        if !get(env, id).executed {
            pending.push_back(id);
        }
    }
    pending
}
