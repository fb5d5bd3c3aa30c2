pub mod exchanger;
pub mod token_wallet;
