use soroban_sdk::{token, Address, Env};

pub fn transfer(env: &Env, token: &Address, from: &Address, to: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(from, to, amount);
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    token::Client::new(env, token).balance(id)
}

pub fn decimals(env: &Env, token: &Address) -> u32 {
    token::Client::new(env, token).decimals()
}
