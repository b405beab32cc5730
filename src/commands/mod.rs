pub mod config;
pub mod key;
pub mod pets;
pub mod seed;
