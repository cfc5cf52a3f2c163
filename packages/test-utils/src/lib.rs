pub mod testing_mocks;

pub use testing_mocks::*;
