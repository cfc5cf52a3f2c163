use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Order, Response, StdResult, Storage};
use cw_storage_plus::Map;
use interface::{
    lrt_config::{
        AddressBinding, AddressBindingResponse, AddressBindingsResponse, DEFAULT_ADMIN_ROLE,
    },
    SymbolicKey,
};

use crate::{
    error::ContractError,
    roles::ensure_role,
    state::{CONTRACT_MAP, TOKEN_MAP},
    utils::validate_address,
};

/// The two key namespaces of the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directory {
    Token,
    Contract,
}

impl Directory {
    fn map<'a>(&self) -> Map<&'a [u8], Addr> {
        match self {
            Directory::Token => TOKEN_MAP,
            Directory::Contract => CONTRACT_MAP,
        }
    }

    fn action(&self) -> &'static str {
        match self {
            Directory::Token => "set_token",
            Directory::Contract => "set_contract",
        }
    }
}

/// Binds the key to the address, rejecting writes that would not change the stored value.
pub fn set_address(
    storage: &mut dyn Storage,
    directory: Directory,
    key: &SymbolicKey,
    address: &Addr,
) -> Result<(), ContractError> {
    let map = directory.map();

    if map.may_load(storage, key.as_slice())?.as_ref() == Some(address) {
        return Err(ContractError::ValueAlreadyInUse);
    }

    map.save(storage, key.as_slice(), address)?;

    Ok(())
}

pub fn execute_set_address(
    deps: DepsMut,
    info: MessageInfo,
    directory: Directory,
    key: SymbolicKey,
    address: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &DEFAULT_ADMIN_ROLE, &info.sender)?;

    let address = validate_address(deps.api, &address)?;
    set_address(deps.storage, directory, &key, &address)?;

    Ok(Response::new()
        .add_attribute("action", directory.action())
        .add_attribute("sender", info.sender)
        .add_attribute("key", key.to_string())
        .add_attribute("address", address))
}

// Unset keys are not an error; callers check for `None` before using the address.
pub fn query_address(
    deps: &Deps,
    directory: Directory,
    key: SymbolicKey,
) -> StdResult<AddressBindingResponse> {
    Ok(AddressBindingResponse {
        address: directory.map().may_load(deps.storage, key.as_slice())?,
        key,
    })
}

pub fn query_addresses(deps: &Deps, directory: Directory) -> StdResult<AddressBindingsResponse> {
    let bindings = directory
        .map()
        .range(deps.storage, None, None, Order::Ascending)
        .map(|entry| {
            let (key, address) = entry?;

            Ok(AddressBinding {
                key: SymbolicKey::from_slice(&key)?,
                address,
            })
        })
        .collect::<StdResult<Vec<AddressBinding>>>()?;

    Ok(AddressBindingsResponse { bindings })
}
