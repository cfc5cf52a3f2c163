use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;
use interface::{
    lrt_config::{keys, ExecuteMsg, QueryMsg, RsEthResponse, DEFAULT_ADMIN_ROLE},
    SymbolicKey,
};

use crate::{
    assets::{
        add_supported_asset, execute_add_new_supported_asset, execute_remove_supported_asset,
        execute_update_asset_deposit_limit, execute_update_asset_strategy,
        query_asset_strategy, query_deposit_limit_by_asset, query_is_supported_asset,
        query_supported_asset, query_supported_asset_list,
    },
    error::ContractError,
    msg::InstantiateMsg,
    registry::{execute_set_address, query_address, query_addresses, set_address, Directory},
    roles::{
        ensure_role, execute_grant_role, execute_renounce_role, execute_revoke_role,
        execute_set_role_admin, grant_role, query_has_role, query_role_admin, query_role_members,
    },
    state::RS_ETH,
    utils::{get_slice_as_attribute, validate_address},
};

/// Contract name that is used for migration.
pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
/// Contract version that is used for migration.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Deposit limit of the assets whitelisted at instantiation: 100,000 tokens with 18 decimals.
pub const DEFAULT_DEPOSIT_LIMIT: Uint128 = Uint128::new(100_000_000_000_000_000_000_000);

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if RS_ETH.exists(deps.storage) {
        return Err(ContractError::AlreadyInitialized);
    }

    // All inputs are validated before the first write.
    let admin = validate_address(deps.api, &msg.admin)?;
    let st_eth = validate_address(deps.api, &msg.st_eth)?;
    let r_eth = validate_address(deps.api, &msg.r_eth)?;
    let cb_eth = validate_address(deps.api, &msg.cb_eth)?;
    let rs_eth = validate_address(deps.api, &msg.rs_eth)?;

    let initial_assets = [
        (keys::ST_ETH_TOKEN, st_eth),
        (keys::R_ETH_TOKEN, r_eth),
        (keys::CB_ETH_TOKEN, cb_eth),
    ];

    for (i, (_, asset)) in initial_assets.iter().enumerate() {
        if initial_assets[..i].iter().any(|(_, other)| other == asset) {
            return Err(ContractError::AssetAlreadySupported {
                asset: asset.clone(),
            });
        }
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    for (key_name, asset) in &initial_assets {
        set_address(
            deps.storage,
            Directory::Token,
            &SymbolicKey::from_name(key_name),
            asset,
        )?;
        add_supported_asset(deps.storage, asset, DEFAULT_DEPOSIT_LIMIT)?;
    }

    grant_role(deps.storage, &DEFAULT_ADMIN_ROLE, &admin)?;
    RS_ETH.save(deps.storage, &rs_eth)?;

    let supported_assets = initial_assets
        .iter()
        .map(|(_, asset)| asset.clone())
        .collect::<Vec<_>>();

    Ok(Response::new()
        .add_attribute("action", "initialisation")
        .add_attribute("sender", info.sender)
        .add_attribute("admin", admin)
        .add_attribute("supported_assets", get_slice_as_attribute(&supported_assets))
        .add_attribute("deposit_limit", DEFAULT_DEPOSIT_LIMIT)
        .add_attribute("rs_eth", rs_eth))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
        ExecuteMsg::RenounceRole { role } => execute_renounce_role(deps, info, role),
        ExecuteMsg::SetRoleAdmin { role, admin_role } => {
            execute_set_role_admin(deps, info, role, admin_role)
        }
        ExecuteMsg::AddNewSupportedAsset {
            asset,
            deposit_limit,
        } => execute_add_new_supported_asset(deps, info, asset, deposit_limit),
        ExecuteMsg::RemoveSupportedAsset { asset } => {
            execute_remove_supported_asset(deps, info, asset)
        }
        ExecuteMsg::UpdateAssetDepositLimit {
            asset,
            deposit_limit,
        } => execute_update_asset_deposit_limit(deps, info, asset, deposit_limit),
        ExecuteMsg::UpdateAssetStrategy { asset, strategy } => {
            execute_update_asset_strategy(deps, info, asset, strategy)
        }
        ExecuteMsg::SetToken { key, address } => {
            execute_set_address(deps, info, Directory::Token, key, address)
        }
        ExecuteMsg::SetContract { key, address } => {
            execute_set_address(deps, info, Directory::Contract, key, address)
        }
        ExecuteMsg::SetRsEth { address } => execute_set_rs_eth(deps, info, address),
    }
}

// Re-setting the current address is allowed here, unlike for the token and contract keys.
fn execute_set_rs_eth(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &DEFAULT_ADMIN_ROLE, &info.sender)?;

    let rs_eth = validate_address(deps.api, &address)?;
    RS_ETH.save(deps.storage, &rs_eth)?;

    Ok(Response::new()
        .add_attribute("action", "set_rs_eth")
        .add_attribute("sender", info.sender)
        .add_attribute("rs_eth", rs_eth))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::HasRole { role, account } => {
            to_json_binary(&query_has_role(&deps, role, account)?)
        }
        QueryMsg::RoleAdmin { role } => to_json_binary(&query_role_admin(&deps, role)?),
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => to_json_binary(&query_role_members(&deps, role, start_after, limit)?),
        QueryMsg::SupportedAssetList {} => to_json_binary(&query_supported_asset_list(&deps)?),
        QueryMsg::IsSupportedAsset { asset } => {
            to_json_binary(&query_is_supported_asset(&deps, asset)?)
        }
        QueryMsg::DepositLimitByAsset { asset } => {
            to_json_binary(&query_deposit_limit_by_asset(&deps, asset)?)
        }
        QueryMsg::AssetStrategy { asset } => to_json_binary(&query_asset_strategy(&deps, asset)?),
        QueryMsg::SupportedAsset { asset } => {
            to_json_binary(&query_supported_asset(&deps, asset)?)
        }
        QueryMsg::Token { key } => to_json_binary(&query_address(&deps, Directory::Token, key)?),
        QueryMsg::Contract { key } => {
            to_json_binary(&query_address(&deps, Directory::Contract, key)?)
        }
        QueryMsg::Tokens {} => to_json_binary(&query_addresses(&deps, Directory::Token)?),
        QueryMsg::Contracts {} => to_json_binary(&query_addresses(&deps, Directory::Contract)?),
        QueryMsg::RsEth {} => to_json_binary(&query_rs_eth(&deps)?),
    }
}

fn query_rs_eth(deps: &Deps) -> StdResult<RsEthResponse> {
    Ok(RsEthResponse {
        address: RS_ETH.load(deps.storage)?,
    })
}
