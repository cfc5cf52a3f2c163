mod assets;
pub mod contract;
pub mod error;
pub mod migration;
pub mod msg;
mod registry;
mod roles;
pub mod state;
mod utils;

#[cfg(test)]
mod testing;
