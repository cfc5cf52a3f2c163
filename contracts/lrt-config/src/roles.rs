use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Order, Response, StdResult, Storage};
use cw_storage_plus::Bound;
use interface::{
    lrt_config::{RoleAdminResponse, RoleMembersResponse, DEFAULT_ADMIN_ROLE},
    SymbolicKey,
};

use crate::{
    error::ContractError,
    state::{ROLE_ADMINS, ROLE_MEMBERS},
    utils::validate_address,
};

const DEFAULT_MEMBERS_LIMIT: u32 = 50;
const MAX_MEMBERS_LIMIT: u32 = 200;

pub fn has_role(storage: &dyn Storage, role: &SymbolicKey, account: &Addr) -> bool {
    ROLE_MEMBERS.has(storage, (role.as_slice(), account))
}

pub fn get_role_admin(storage: &dyn Storage, role: &SymbolicKey) -> StdResult<SymbolicKey> {
    Ok(ROLE_ADMINS
        .may_load(storage, role.as_slice())?
        .unwrap_or(DEFAULT_ADMIN_ROLE))
}

/// Fails with `Unauthorized` unless the sender holds the role.
/// Every privileged handler calls this before touching the state.
pub fn ensure_role(
    storage: &dyn Storage,
    role: &SymbolicKey,
    sender: &Addr,
) -> Result<(), ContractError> {
    if !has_role(storage, role, sender) {
        return Err(ContractError::Unauthorized {
            role: role.to_string(),
            sender: sender.to_string(),
        });
    }

    Ok(())
}

// Membership is a set, so the returned flag tells whether anything changed.
pub fn grant_role(
    storage: &mut dyn Storage,
    role: &SymbolicKey,
    account: &Addr,
) -> StdResult<bool> {
    if has_role(storage, role, account) {
        return Ok(false);
    }

    ROLE_MEMBERS.save(storage, (role.as_slice(), account), &())?;

    Ok(true)
}

pub fn revoke_role(storage: &mut dyn Storage, role: &SymbolicKey, account: &Addr) -> bool {
    if !has_role(storage, role, account) {
        return false;
    }

    ROLE_MEMBERS.remove(storage, (role.as_slice(), account));

    true
}

pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: SymbolicKey,
    account: String,
) -> Result<Response, ContractError> {
    let admin_role = get_role_admin(deps.storage, &role)?;
    ensure_role(deps.storage, &admin_role, &info.sender)?;

    let account = validate_address(deps.api, &account)?;
    let granted = grant_role(deps.storage, &role, &account)?;

    Ok(Response::new()
        .add_attribute("action", "grant_role")
        .add_attribute("sender", info.sender)
        .add_attribute("role", role.to_string())
        .add_attribute("account", account)
        .add_attribute("membership_changed", granted.to_string()))
}

pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: SymbolicKey,
    account: String,
) -> Result<Response, ContractError> {
    let admin_role = get_role_admin(deps.storage, &role)?;
    ensure_role(deps.storage, &admin_role, &info.sender)?;

    let account = validate_address(deps.api, &account)?;
    let revoked = revoke_role(deps.storage, &role, &account);

    Ok(Response::new()
        .add_attribute("action", "revoke_role")
        .add_attribute("sender", info.sender)
        .add_attribute("role", role.to_string())
        .add_attribute("account", account)
        .add_attribute("membership_changed", revoked.to_string()))
}

pub fn execute_renounce_role(
    deps: DepsMut,
    info: MessageInfo,
    role: SymbolicKey,
) -> Result<Response, ContractError> {
    let renounced = revoke_role(deps.storage, &role, &info.sender);

    Ok(Response::new()
        .add_attribute("action", "renounce_role")
        .add_attribute("sender", info.sender)
        .add_attribute("role", role.to_string())
        .add_attribute("membership_changed", renounced.to_string()))
}

pub fn execute_set_role_admin(
    deps: DepsMut,
    info: MessageInfo,
    role: SymbolicKey,
    admin_role: SymbolicKey,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &DEFAULT_ADMIN_ROLE, &info.sender)?;

    let previous_admin_role = get_role_admin(deps.storage, &role)?;
    if previous_admin_role == admin_role {
        return Err(ContractError::ValueAlreadyInUse);
    }

    ROLE_ADMINS.save(deps.storage, role.as_slice(), &admin_role)?;

    Ok(Response::new()
        .add_attribute("action", "set_role_admin")
        .add_attribute("sender", info.sender)
        .add_attribute("role", role.to_string())
        .add_attribute("previous_admin_role", previous_admin_role.to_string())
        .add_attribute("new_admin_role", admin_role.to_string()))
}

pub fn query_has_role(deps: &Deps, role: SymbolicKey, account: String) -> StdResult<bool> {
    let account = deps.api.addr_validate(&account)?;

    Ok(has_role(deps.storage, &role, &account))
}

pub fn query_role_admin(deps: &Deps, role: SymbolicKey) -> StdResult<RoleAdminResponse> {
    Ok(RoleAdminResponse {
        role,
        admin_role: get_role_admin(deps.storage, &role)?,
    })
}

pub fn query_role_members(
    deps: &Deps,
    role: SymbolicKey,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RoleMembersResponse> {
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_after.as_ref().map(Bound::exclusive);
    let limit = limit.unwrap_or(DEFAULT_MEMBERS_LIMIT).min(MAX_MEMBERS_LIMIT) as usize;

    let members = ROLE_MEMBERS
        .prefix(role.as_slice())
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<Addr>>>()?;

    Ok(RoleMembersResponse { role, members })
}
