use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    OwnersRequired = 3,
    TooManyOwners = 4,
    InvalidRequired = 5,
    DuplicateOwner = 6,
    NotOwner = 7,
    InvalidAmount = 8,
    InsufficientBalance = 9,
    TxNotFound = 10,
    TxAlreadyApproved = 11,
    TxAlreadyExecuted = 12,
    TxNotApproved = 13,
    QuorumNotMet = 14,
    CancelQuorumNotMet = 15,
    OwnerExists = 16,
    MaxOwnersReached = 17,
    OwnerNotFound = 18,
    OwnersBelowRequired = 19,
    ChangeNotFound = 20,
    ChangeAlreadyApproved = 21,
    ChangeAlreadyExecuted = 22,
    ChangeQuorumNotMet = 23,
    ReentrantCall = 24,
    ExecutionFailed = 25,
    TimelockNotExpired = 26,
}
