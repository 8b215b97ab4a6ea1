//! Contract events. Topics use short symbols; payloads carry the affected
//! address or token id.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const INITIALIZED: Symbol = symbol_short!("init");
pub const MINTED: Symbol = symbol_short!("mint");
pub const PAUSED: Symbol = symbol_short!("pause");
pub const UNPAUSED: Symbol = symbol_short!("unpause");

pub fn emit_initialized(env: &Env, owner: &Address) {
    env.events().publish((INITIALIZED,), owner.clone());
}

pub fn emit_minted(env: &Env, to: &Address, token_id: u64) {
    env.events().publish((MINTED, to.clone()), token_id);
}

pub fn emit_paused(env: &Env, caller: &Address) {
    env.events().publish((PAUSED,), caller.clone());
}

pub fn emit_unpaused(env: &Env, caller: &Address) {
    env.events().publish((UNPAUSED,), caller.clone());
}
