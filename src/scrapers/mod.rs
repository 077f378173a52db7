pub mod base;
pub mod coinmarketcap;
