use soroban_sdk::{panic_with_error, Env};

use crate::config;
use crate::errors::WalletError;
use crate::types::{DataKey, ExecutionPolicy};

// Decorator over the execution engine: one extra side effect on approve, one
// extra precondition on execute. Inert when the wallet runs the Immediate
// policy. Quorum counting and registry state are untouched either way.

/// Stamps the transaction's eligibility time on its first approval. Later
/// approvals of the same id never move the stamp, even if the first approval
/// was revoked in between.
pub fn after_approve(env: &Env, id: u64) {
    if let ExecutionPolicy::Timelocked(delay) = config::policy(env) {
        if eligible_at(env, id) == 0 {
            let eligible = env.ledger().timestamp() + delay;
            env.storage().instance().set(&DataKey::EligibleAt(id), &eligible);
        }
    }
}

pub fn before_execute(env: &Env, id: u64) {
    if let ExecutionPolicy::Timelocked(_) = config::policy(env) {
        let eligible = eligible_at(env, id);
        if eligible == 0 || env.ledger().timestamp() < eligible {
            panic_with_error!(env, WalletError::TimelockNotExpired);
        }
    }
}

/// Zero means the transaction has not received its first approval yet.
pub fn eligible_at(env: &Env, id: u64) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::EligibleAt(id))
        .unwrap_or(0u64)
}
