use soroban_sdk::{log, panic_with_error, token, Address, Env, InvokeError, Val};

use crate::config;
use crate::errors::WalletError;
use crate::events;
use crate::governance;
use crate::ledger;
use crate::registry;
use crate::types::{DataKey, Transaction};

/// Scoped hold on the dispatch lock. Acquiring while the lock is held
/// rejects the call outright; the lock is released on drop, and a trapped
/// dispatch reverts it together with every other write of the frame.
struct DispatchGuard<'a> {
    env: &'a Env,
}

impl<'a> DispatchGuard<'a> {
    fn acquire(env: &'a Env) -> Self {
        let held: bool = env
            .storage()
            .instance()
            .get(&DataKey::DispatchLock)
            .unwrap_or(false);
        if held {
            panic_with_error!(env, WalletError::ReentrantCall);
        }
        env.storage().instance().set(&DataKey::DispatchLock, &true);
        DispatchGuard { env }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&DataKey::DispatchLock);
    }
}

/// Performs a quorum-complete transaction exactly once. Quorum and balance
/// are evaluated live at this point, not at submission.
pub fn execute(env: &Env, caller: &Address, id: u64) {
    let _guard = DispatchGuard::acquire(env);

    let mut tx = registry::get(env, id);
    if tx.executed {
        panic_with_error!(env, WalletError::TxAlreadyExecuted);
    }

    if registry::approval_count(env, id) < ledger::required(env) {
        panic_with_error!(env, WalletError::QuorumNotMet);
    }

    if tx.value > config::balance(env) {
        panic_with_error!(env, WalletError::InsufficientBalance);
    }

    // Effects before interaction: a reentrant execute for this id fails on
    // the executed flag even before it reaches the dispatch lock.
    tx.executed = true;
    registry::store(env, &tx);

    dispatch(env, &tx);

    events::executed(env, id, caller);
}

fn dispatch(env: &Env, tx: &Transaction) {
    if tx.value > 0 {
        let client = token::Client::new(env, &config::token(env));
        client.transfer(&env.current_contract_address(), &tx.target, &tx.value);
    }

    if let Some(func) = &tx.call_fn {
        match env.try_invoke_contract::<Val, InvokeError>(&tx.target, func, tx.call_args.clone()) {
            Ok(_) => {}
            Err(Ok(InvokeError::Contract(code))) => {
                log!(env, "target contract failed with error code {}", code);
                panic_with_error!(env, WalletError::ExecutionFailed);
            }
            Err(_) => {
                log!(env, "invocation trapped without a decodable error");
                panic_with_error!(env, WalletError::ExecutionFailed);
            }
        }
    }
}

/// Applies a quorum-complete ownership change. Membership may have drifted
/// between proposal and execution, so the precondition is re-checked here.
pub fn execute_owner_change(env: &Env, id: u64) {
    let _guard = DispatchGuard::acquire(env);

    let mut change = governance::get(env, id);
    if change.executed {
        panic_with_error!(env, WalletError::ChangeAlreadyExecuted);
    }

    if governance::approval_count(env, id) < ledger::required(env) {
        panic_with_error!(env, WalletError::ChangeQuorumNotMet);
    }

    if change.is_addition {
        if ledger::is_owner(env, &change.target) {
            panic_with_error!(env, WalletError::OwnerExists);
        }
        if ledger::owner_count(env) >= ledger::MAX_OWNERS {
            panic_with_error!(env, WalletError::MaxOwnersReached);
        }
    } else {
        if !ledger::is_owner(env, &change.target) {
            panic_with_error!(env, WalletError::OwnerNotFound);
        }
        if ledger::owner_count(env) - 1 < ledger::required(env) {
            panic_with_error!(env, WalletError::OwnersBelowRequired);
        }
    }

    change.executed = true;
    governance::store(env, &change);

    // Removal does not purge the target's recorded approvals on pending
    // entries; they stop counting once the membership flag is gone.
    if change.is_addition {
        ledger::add_owner(env, &change.target);
        events::owner_added(env, id, &change.target);
    } else {
        ledger::remove_owner(env, &change.target);
        events::owner_removed(env, id, &change.target);
    }
}

/// Retires a transaction without dispatching it. Demands the same quorum as
/// execution and consumes the entry the same way.
pub fn cancel(env: &Env, caller: &Address, id: u64) {
    ledger::require_owner(env, caller);

    let _guard = DispatchGuard::acquire(env);

    let mut tx = registry::get(env, id);
    if tx.executed {
        panic_with_error!(env, WalletError::TxAlreadyExecuted);
    }

    if registry::approval_count(env, id) < ledger::required(env) {
        panic_with_error!(env, WalletError::CancelQuorumNotMet);
    }

    tx.executed = true;
    registry::store(env, &tx);

    events::cancelled(env, id, caller);
}
