use cosmwasm_std::{
    Addr, Deps, DepsMut, MessageInfo, Order, Response, StdResult, Storage, Uint128,
};
use interface::lrt_config::{
    manager_role, AssetStrategyResponse, SupportedAssetListResponse, SupportedAssetResponse,
    DEFAULT_ADMIN_ROLE,
};

use crate::{
    error::ContractError,
    roles::ensure_role,
    state::{
        ASSET_STRATEGY, DEPOSIT_LIMIT_BY_ASSET, IS_SUPPORTED_ASSET, SUPPORTED_ASSET_COUNT,
        SUPPORTED_ASSET_INDEX, SUPPORTED_ASSET_LIST,
    },
    utils::validate_address,
};

pub fn is_supported_asset(storage: &dyn Storage, asset: &Addr) -> StdResult<bool> {
    Ok(IS_SUPPORTED_ASSET
        .may_load(storage, asset)?
        .unwrap_or_default())
}

fn ensure_supported_asset(storage: &dyn Storage, asset: &Addr) -> Result<(), ContractError> {
    if !is_supported_asset(storage, asset)? {
        return Err(ContractError::AssetNotSupported {
            asset: asset.clone(),
        });
    }

    Ok(())
}

/// Whitelists the asset and appends it to the end of the supported asset list.
/// Used both during instantiation and by the manager-gated handler.
pub fn add_supported_asset(
    storage: &mut dyn Storage,
    asset: &Addr,
    deposit_limit: Uint128,
) -> Result<(), ContractError> {
    if is_supported_asset(storage, asset)? {
        return Err(ContractError::AssetAlreadySupported {
            asset: asset.clone(),
        });
    }

    let count = SUPPORTED_ASSET_COUNT.may_load(storage)?.unwrap_or_default();

    SUPPORTED_ASSET_LIST.save(storage, count, asset)?;
    SUPPORTED_ASSET_INDEX.save(storage, asset, &count)?;
    SUPPORTED_ASSET_COUNT.save(storage, &(count + 1))?;

    IS_SUPPORTED_ASSET.save(storage, asset, &true)?;
    DEPOSIT_LIMIT_BY_ASSET.save(storage, asset, &deposit_limit)?;

    Ok(())
}

// Removes the asset from the list by moving the last entry into its position and popping
// the tail. This is O(1), but the order of the remaining assets is not preserved.
fn remove_from_supported_asset_list(
    storage: &mut dyn Storage,
    asset: &Addr,
) -> Result<(), ContractError> {
    let index = SUPPORTED_ASSET_INDEX.load(storage, asset)?;
    let last_index = SUPPORTED_ASSET_COUNT.load(storage)? - 1;

    if index != last_index {
        let last_asset = SUPPORTED_ASSET_LIST.load(storage, last_index)?;

        SUPPORTED_ASSET_LIST.save(storage, index, &last_asset)?;
        SUPPORTED_ASSET_INDEX.save(storage, &last_asset, &index)?;
    }

    SUPPORTED_ASSET_LIST.remove(storage, last_index);
    SUPPORTED_ASSET_INDEX.remove(storage, asset);
    SUPPORTED_ASSET_COUNT.save(storage, &last_index)?;

    Ok(())
}

pub fn execute_add_new_supported_asset(
    deps: DepsMut,
    info: MessageInfo,
    asset: String,
    deposit_limit: Uint128,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &manager_role(), &info.sender)?;

    let asset = validate_address(deps.api, &asset)?;
    add_supported_asset(deps.storage, &asset, deposit_limit)?;

    Ok(Response::new()
        .add_attribute("action", "add_new_supported_asset")
        .add_attribute("sender", info.sender)
        .add_attribute("asset", asset)
        .add_attribute("deposit_limit", deposit_limit))
}

pub fn execute_remove_supported_asset(
    deps: DepsMut,
    info: MessageInfo,
    asset: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &manager_role(), &info.sender)?;

    let asset = validate_address(deps.api, &asset)?;
    ensure_supported_asset(deps.storage, &asset)?;

    remove_from_supported_asset_list(deps.storage, &asset)?;

    // Soft delete: the asset can be added again later. Strategy binding is left untouched.
    IS_SUPPORTED_ASSET.remove(deps.storage, &asset);
    DEPOSIT_LIMIT_BY_ASSET.remove(deps.storage, &asset);

    Ok(Response::new()
        .add_attribute("action", "remove_supported_asset")
        .add_attribute("sender", info.sender)
        .add_attribute("asset", asset))
}

pub fn execute_update_asset_deposit_limit(
    deps: DepsMut,
    info: MessageInfo,
    asset: String,
    deposit_limit: Uint128,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &manager_role(), &info.sender)?;

    let asset = validate_address(deps.api, &asset)?;
    ensure_supported_asset(deps.storage, &asset)?;

    // Unlike the address setters, writing the current value again is allowed.
    DEPOSIT_LIMIT_BY_ASSET.save(deps.storage, &asset, &deposit_limit)?;

    Ok(Response::new()
        .add_attribute("action", "update_asset_deposit_limit")
        .add_attribute("sender", info.sender)
        .add_attribute("asset", asset)
        .add_attribute("deposit_limit", deposit_limit))
}

pub fn execute_update_asset_strategy(
    deps: DepsMut,
    info: MessageInfo,
    asset: String,
    strategy: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &DEFAULT_ADMIN_ROLE, &info.sender)?;

    let asset = validate_address(deps.api, &asset)?;
    ensure_supported_asset(deps.storage, &asset)?;

    let strategy = validate_address(deps.api, &strategy)?;
    if ASSET_STRATEGY.may_load(deps.storage, &asset)?.as_ref() == Some(&strategy) {
        return Err(ContractError::ValueAlreadyInUse);
    }

    ASSET_STRATEGY.save(deps.storage, &asset, &strategy)?;

    Ok(Response::new()
        .add_attribute("action", "update_asset_strategy")
        .add_attribute("sender", info.sender)
        .add_attribute("asset", asset)
        .add_attribute("strategy", strategy))
}

pub fn query_supported_asset_list(deps: &Deps) -> StdResult<SupportedAssetListResponse> {
    let assets = SUPPORTED_ASSET_LIST
        .range(deps.storage, None, None, Order::Ascending)
        .map(|entry| entry.map(|(_, asset)| asset))
        .collect::<StdResult<Vec<Addr>>>()?;

    Ok(SupportedAssetListResponse { assets })
}

pub fn query_is_supported_asset(deps: &Deps, asset: String) -> StdResult<bool> {
    let asset = deps.api.addr_validate(&asset)?;

    is_supported_asset(deps.storage, &asset)
}

pub fn query_deposit_limit_by_asset(deps: &Deps, asset: String) -> StdResult<Uint128> {
    let asset = deps.api.addr_validate(&asset)?;

    Ok(DEPOSIT_LIMIT_BY_ASSET
        .may_load(deps.storage, &asset)?
        .unwrap_or_default())
}

pub fn query_asset_strategy(deps: &Deps, asset: String) -> StdResult<AssetStrategyResponse> {
    let asset = deps.api.addr_validate(&asset)?;
    let strategy = ASSET_STRATEGY.may_load(deps.storage, &asset)?;

    Ok(AssetStrategyResponse { asset, strategy })
}

pub fn query_supported_asset(deps: &Deps, asset: String) -> StdResult<SupportedAssetResponse> {
    let asset = deps.api.addr_validate(&asset)?;

    Ok(SupportedAssetResponse {
        is_supported: is_supported_asset(deps.storage, &asset)?,
        deposit_limit: DEPOSIT_LIMIT_BY_ASSET
            .may_load(deps.storage, &asset)?
            .unwrap_or_default(),
        strategy: ASSET_STRATEGY.may_load(deps.storage, &asset)?,
        asset,
    })
}
