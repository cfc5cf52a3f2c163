use cosmwasm_std::{Addr, Api};

use crate::error::ContractError;

/// Validates a user provided address. An empty address is the zero address and is always rejected.
pub fn validate_address(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    if address.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }

    Ok(api.addr_validate(address)?)
}

/// Converts a slice of items into a comma-separated string of their string representations.
pub fn get_slice_as_attribute<T: ToString>(input: &[T]) -> String {
    input
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join(",")
}
