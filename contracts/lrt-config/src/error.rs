use cosmwasm_std::{Addr, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: {sender} does not have role {role}")]
    Unauthorized { role: String, sender: String },

    #[error("Zero address is not allowed")]
    ZeroAddress,

    #[error("Asset {asset} is already supported")]
    AssetAlreadySupported { asset: Addr },

    #[error("Asset {asset} is not supported")]
    AssetNotSupported { asset: Addr },

    #[error("Value already in use")]
    ValueAlreadyInUse,

    #[error("Contract is already initialized")]
    AlreadyInitialized,
}

pub fn new_generic_error(msg: impl Into<String>) -> ContractError {
    ContractError::Std(StdError::generic_err(msg))
}
