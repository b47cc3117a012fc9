use soroban_sdk::{contracttype, Address, Symbol, Val, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owners,
    IsOwner(Address),
    Required,
    Token,
    Policy,
    DispatchLock,
    TxCount,
    Tx(u64),
    TxApprovals(u64),
    EligibleAt(u64),
    ChangeCount,
    Change(u64),
    ChangeApprovals(u64),
}

/// Execution variant selected at construction. Timelocked wallets gate
/// execution on a fixed delay counted from a transaction's first approval.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExecutionPolicy {
    Immediate,
    Timelocked(u64),
}

/// A proposed external action: transfer `value` of the wallet token to
/// `target` and, if `call_fn` is set, invoke `target.call_fn(call_args)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub target: Address,
    pub value: i128,
    pub call_fn: Option<Symbol>,
    pub call_args: Vec<Val>,
    pub executed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerChange {
    pub id: u64,
    pub target: Address,
    pub is_addition: bool,
    pub executed: bool,
}
