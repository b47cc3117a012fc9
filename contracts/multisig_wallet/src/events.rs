use soroban_sdk::{symbol_short, Address, Env};

// Informational notifications; none of these participate in control flow.

pub fn deposit(env: &Env, from: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("deposit"), from.clone()), amount);
}

pub fn submitted(env: &Env, id: u64, caller: &Address, target: &Address, value: i128) {
    env.events()
        .publish((symbol_short!("submit"), id), (caller.clone(), target.clone(), value));
}

pub fn approved(env: &Env, id: u64, caller: &Address) {
    env.events()
        .publish((symbol_short!("approve"), id), caller.clone());
}

pub fn revoked(env: &Env, id: u64, caller: &Address) {
    env.events()
        .publish((symbol_short!("revoke"), id), caller.clone());
}

pub fn executed(env: &Env, id: u64, caller: &Address) {
    env.events()
        .publish((symbol_short!("executed"), id), caller.clone());
}

pub fn cancelled(env: &Env, id: u64, caller: &Address) {
    env.events()
        .publish((symbol_short!("cancelled"), id), caller.clone());
}

pub fn requirement_changed(env: &Env, caller: &Address, required: u32) {
    env.events()
        .publish((symbol_short!("req_set"), caller.clone()), required);
}

pub fn change_submitted(env: &Env, id: u64, caller: &Address, target: &Address, is_addition: bool) {
    env.events()
        .publish((symbol_short!("chg_sub"), id), (caller.clone(), target.clone(), is_addition));
}

pub fn change_approved(env: &Env, id: u64, caller: &Address) {
    env.events()
        .publish((symbol_short!("chg_appr"), id), caller.clone());
}

pub fn owner_added(env: &Env, id: u64, owner: &Address) {
    env.events()
        .publish((symbol_short!("owner_add"), id), owner.clone());
}

pub fn owner_removed(env: &Env, id: u64, owner: &Address) {
    env.events()
        .publish((symbol_short!("owner_rem"), id), owner.clone());
}
