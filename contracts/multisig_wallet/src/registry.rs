use soroban_sdk::{panic_with_error, Address, Env, Map, Symbol, Val, Vec};

use crate::config;
use crate::errors::WalletError;
use crate::ledger;
use crate::types::{DataKey, Transaction};

/// Appends a new transaction and returns its id. Ids are zero-based,
/// assigned in strict submission order and never reused.
pub fn submit(
    env: &Env,
    caller: &Address,
    target: &Address,
    value: i128,
    call_fn: Option<Symbol>,
    call_args: Vec<Val>,
) -> u64 {
    ledger::require_owner(env, caller);

    if value < 0 {
        panic_with_error!(env, WalletError::InvalidAmount);
    }

    // Checked again at execution time; the balance may drift in between.
    if value > config::balance(env) {
        panic_with_error!(env, WalletError::InsufficientBalance);
    }

    let id: u64 = env.storage().instance().get(&DataKey::TxCount).unwrap_or(0u64);

    let tx = Transaction {
        id,
        target: target.clone(),
        value,
        call_fn,
        call_args,
        executed: false,
    };

    env.storage().instance().set(&DataKey::Tx(id), &tx);

    let approvals: Map<Address, bool> = Map::new(env);
    env.storage().instance().set(&DataKey::TxApprovals(id), &approvals);

    env.storage().instance().set(&DataKey::TxCount, &(id + 1));

    id
}

pub fn get(env: &Env, id: u64) -> Transaction {
    match env.storage().instance().get(&DataKey::Tx(id)) {
        Some(tx) => tx,
        None => panic_with_error!(env, WalletError::TxNotFound),
    }
}

pub fn store(env: &Env, tx: &Transaction) {
    env.storage().instance().set(&DataKey::Tx(tx.id), tx);
}

pub fn count(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::TxCount).unwrap_or(0u64)
}

pub fn approvals(env: &Env, id: u64) -> Map<Address, bool> {
    env.storage()
        .instance()
        .get(&DataKey::TxApprovals(id))
        .unwrap_or(Map::new(env))
}

pub fn approve(env: &Env, caller: &Address, id: u64) {
    ledger::require_owner(env, caller);

    let tx = get(env, id);
    if tx.executed {
        panic_with_error!(env, WalletError::TxAlreadyExecuted);
    }

    let mut approvals = approvals(env, id);
    if approvals.get(caller.clone()).unwrap_or(false) {
        panic_with_error!(env, WalletError::TxAlreadyApproved);
    }

    approvals.set(caller.clone(), true);
    env.storage().instance().set(&DataKey::TxApprovals(id), &approvals);
}

pub fn revoke(env: &Env, caller: &Address, id: u64) {
    ledger::require_owner(env, caller);

    let tx = get(env, id);
    if tx.executed {
        panic_with_error!(env, WalletError::TxAlreadyExecuted);
    }

    let mut approvals = approvals(env, id);
    if !approvals.get(caller.clone()).unwrap_or(false) {
        panic_with_error!(env, WalletError::TxNotApproved);
    }

    approvals.remove(caller.clone());
    env.storage().instance().set(&DataKey::TxApprovals(id), &approvals);
}

/// Counts approvals over the *current* owner set only. Recomputed on every
/// call, never cached: approvals recorded by since-removed owners are inert
/// until the address is an owner again.
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

/// Fresh snapshot of all unexecuted transaction ids, in ascending order.
pub fn pending_ids(env: &Env) -> Vec<u64> {
    let mut pending = Vec::new(env);
    for id in 0..count(env) {
        if !get(env, id).executed {
            pending.push_back(id);
        }
    }
    pending
}
