pub mod contract;
pub mod error;
pub mod migration;
pub mod msg;
pub mod state;
