pub mod lrt_config;
pub mod lrt_oracle;
pub mod price_fetcher;
pub mod symbolic_key;

pub use symbolic_key::SymbolicKey;
