use soroban_sdk::{
    contract, contractimpl, panic_with_error, token, Address, Env, Map, Symbol, Val, Vec,
};

use crate::config;
use crate::engine;
use crate::errors::WalletError;
use crate::events;
use crate::governance;
use crate::ledger;
use crate::registry;
use crate::timelock;
use crate::types::{ExecutionPolicy, OwnerChange, Transaction};

#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    /// Sets up the owner set, quorum, value token and execution policy.
    /// Fails entirely on the first invalid argument; cannot run twice.
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        required: u32,
        token: Address,
        policy: ExecutionPolicy,
    ) {
        config::set_initialized(&env);
        ledger::init(&env, &owners, required);
        config::set_token(&env, &token);
        config::set_policy(&env, &policy);
    }

    pub fn deposit(env: Env, from: Address, amount: i128) {
        config::require_initialized(&env);
        from.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, WalletError::InvalidAmount);
        }

        let client = token::Client::new(&env, &config::token(&env));
        client.transfer(&from, &env.current_contract_address(), &amount);

        events::deposit(&env, &from, amount);
    }

    pub fn submit_transaction(
        env: Env,
        caller: Address,
        target: Address,
        value: i128,
        call_fn: Option<Symbol>,
        call_args: Vec<Val>,
    ) -> u64 {
        config::require_initialized(&env);
        caller.require_auth();

        let id = registry::submit(&env, &caller, &target, value, call_fn, call_args);
        events::submitted(&env, id, &caller, &target, value);
        id
    }

    pub fn approve_transaction(env: Env, caller: Address, id: u64) {
        config::require_initialized(&env);
        caller.require_auth();

        registry::approve(&env, &caller, id);
        timelock::after_approve(&env, id);
        events::approved(&env, id, &caller);
    }

    pub fn revoke_approval(env: Env, caller: Address, id: u64) {
        config::require_initialized(&env);
        caller.require_auth();

        registry::revoke(&env, &caller, id);
        events::revoked(&env, id, &caller);
    }

    /// Not owner-gated: once quorum is met anyone may trigger execution.
    pub fn execute_transaction(env: Env, caller: Address, id: u64) {
        config::require_initialized(&env);
        caller.require_auth();

        timelock::before_execute(&env, id);
        engine::execute(&env, &caller, id);
    }

    pub fn cancel_transaction(env: Env, caller: Address, id: u64) {
        config::require_initialized(&env);
        caller.require_auth();

        engine::cancel(&env, &caller, id);
    }

    pub fn propose_add_owner(env: Env, caller: Address, candidate: Address) -> u64 {
        config::require_initialized(&env);
        caller.require_auth();

        let id = governance::propose_add(&env, &caller, &candidate);
        events::change_submitted(&env, id, &caller, &candidate, true);
        id
    }

    pub fn propose_remove_owner(env: Env, caller: Address, target: Address) -> u64 {
        config::require_initialized(&env);
        caller.require_auth();

        let id = governance::propose_remove(&env, &caller, &target);
        events::change_submitted(&env, id, &caller, &target, false);
        id
    }

    pub fn approve_owner_change(env: Env, caller: Address, id: u64) {
        config::require_initialized(&env);
        caller.require_auth();

        governance::approve(&env, &caller, id);
        events::change_approved(&env, id, &caller);
    }

    pub fn execute_owner_change(env: Env, caller: Address, id: u64) {
        config::require_initialized(&env);
        caller.require_auth();

        engine::execute_owner_change(&env, id);
    }

    /// Owner-gated but deliberately not quorum-gated.
    pub fn change_requirement(env: Env, caller: Address, n: u32) {
        config::require_initialized(&env);
        caller.require_auth();

        ledger::require_owner(&env, &caller);
        ledger::set_required(&env, n);
        events::requirement_changed(&env, &caller, n);
    }

    pub fn get_transaction(env: Env, id: u64) -> Transaction {
        config::require_initialized(&env);
        registry::get(&env, id)
    }

    pub fn get_transaction_count(env: Env) -> u64 {
        config::require_initialized(&env);
        registry::count(&env)
    }

    pub fn get_approvals(env: Env, id: u64) -> Map<Address, bool> {
        config::require_initialized(&env);
        registry::approvals(&env, id)
    }

    pub fn approval_count(env: Env, id: u64) -> u32 {
        config::require_initialized(&env);
        registry::approval_count(&env, id)
    }

    pub fn get_pending_transactions(env: Env) -> Vec<u64> {
        config::require_initialized(&env);
        registry::pending_ids(&env)
    }

    pub fn get_owner_change(env: Env, id: u64) -> OwnerChange {
        config::require_initialized(&env);
        governance::get(&env, id)
    }

    pub fn get_owner_change_count(env: Env) -> u64 {
        config::require_initialized(&env);
        governance::count(&env)
    }

    pub fn owner_change_approval_count(env: Env, id: u64) -> u32 {
        config::require_initialized(&env);
        governance::approval_count(&env, id)
    }

    pub fn get_pending_owner_changes(env: Env) -> Vec<u64> {
        config::require_initialized(&env);
        governance::pending_ids(&env)
    }

    pub fn get_owners(env: Env) -> Vec<Address> {
        config::require_initialized(&env);
        ledger::owners(&env)
    }

    pub fn owner_count(env: Env) -> u32 {
        config::require_initialized(&env);
        ledger::owner_count(&env)
    }

    pub fn is_owner(env: Env, id: Address) -> bool {
        config::require_initialized(&env);
        ledger::is_owner(&env, &id)
    }

    pub fn required(env: Env) -> u32 {
        config::require_initialized(&env);
        ledger::required(&env)
    }

    /// Zero until the transaction's first approval under a timelocked policy.
    pub fn get_eligible_at(env: Env, id: u64) -> u64 {
        config::require_initialized(&env);
        timelock::eligible_at(&env, id)
    }

    pub fn balance(env: Env) -> i128 {
        config::require_initialized(&env);
        config::balance(&env)
    }
}
