use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, CustomQuery, QuerierWrapper, StdResult, Uint128};

use crate::symbolic_key::SymbolicKey;

/// Names of the symbolic keys shared by all modules of the protocol.
/// The registry accepts any key; these are the ones the protocol itself resolves.
pub mod keys {
    // token keys
    pub const ST_ETH_TOKEN: &str = "ST_ETH_TOKEN";
    pub const R_ETH_TOKEN: &str = "R_ETH_TOKEN";
    pub const CB_ETH_TOKEN: &str = "CB_ETH_TOKEN";
    pub const RS_ETH_TOKEN: &str = "RS_ETH_TOKEN";

    // contract keys
    pub const LRT_ORACLE: &str = "LRT_ORACLE";
    pub const LRT_DEPOSIT_POOL: &str = "LRT_DEPOSIT_POOL";
    pub const EIGEN_STRATEGY_MANAGER: &str = "EIGEN_STRATEGY_MANAGER";
}

/// Holders of this role administer every role that has no other admin role assigned.
pub const DEFAULT_ADMIN_ROLE: SymbolicKey = SymbolicKey::ZERO;

pub const MANAGER: &str = "MANAGER";

pub fn manager_role() -> SymbolicKey {
    SymbolicKey::from_name(MANAGER)
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Grants the role to the account. Sender must hold the admin role of the given role.
    /// Granting a role the account already holds succeeds without changes.
    GrantRole { role: SymbolicKey, account: String },

    /// Revokes the role from the account. Sender must hold the admin role of the given role.
    RevokeRole { role: SymbolicKey, account: String },

    /// Sender gives up the role it holds.
    RenounceRole { role: SymbolicKey },

    /// Designates `admin_role` as the role whose holders can grant and revoke `role`.
    /// Only callable by the holders of the default admin role.
    SetRoleAdmin {
        role: SymbolicKey,
        admin_role: SymbolicKey,
    },

    /// Adds a new collateral asset to the whitelist. Manager only.
    AddNewSupportedAsset {
        asset: String,
        deposit_limit: Uint128,
    },

    /// Removes the asset from the whitelist. Manager only.
    /// The order of the remaining assets in the list is not preserved.
    RemoveSupportedAsset { asset: String },

    /// Overwrites the deposit limit of a supported asset. Manager only.
    UpdateAssetDepositLimit {
        asset: String,
        deposit_limit: Uint128,
    },

    /// Binds a yield strategy to a supported asset. Admin only.
    UpdateAssetStrategy { asset: String, strategy: String },

    /// Binds a token key to an address. Admin only.
    SetToken { key: SymbolicKey, address: String },

    /// Binds a contract key to an address. Admin only.
    SetContract { key: SymbolicKey, address: String },

    /// Sets the address of the receipt token. Admin only.
    SetRsEth { address: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(bool)]
    HasRole { role: SymbolicKey, account: String },

    #[returns(RoleAdminResponse)]
    RoleAdmin { role: SymbolicKey },

    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: SymbolicKey,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(SupportedAssetListResponse)]
    SupportedAssetList {},

    #[returns(bool)]
    IsSupportedAsset { asset: String },

    #[returns(Uint128)]
    DepositLimitByAsset { asset: String },

    #[returns(AssetStrategyResponse)]
    AssetStrategy { asset: String },

    #[returns(SupportedAssetResponse)]
    SupportedAsset { asset: String },

    /// Resolves a token key. Unset keys resolve to `None`.
    #[returns(AddressBindingResponse)]
    Token { key: SymbolicKey },

    /// Resolves a contract key. Unset keys resolve to `None`.
    #[returns(AddressBindingResponse)]
    Contract { key: SymbolicKey },

    #[returns(AddressBindingsResponse)]
    Tokens {},

    #[returns(AddressBindingsResponse)]
    Contracts {},

    #[returns(RsEthResponse)]
    RsEth {},
}

#[cw_serde]
pub struct RoleAdminResponse {
    pub role: SymbolicKey,
    pub admin_role: SymbolicKey,
}

#[cw_serde]
pub struct RoleMembersResponse {
    pub role: SymbolicKey,
    pub members: Vec<Addr>,
}

#[cw_serde]
pub struct SupportedAssetListResponse {
    pub assets: Vec<Addr>,
}

#[cw_serde]
pub struct AssetStrategyResponse {
    pub asset: Addr,
    pub strategy: Option<Addr>,
}

#[cw_serde]
pub struct SupportedAssetResponse {
    pub asset: Addr,
    pub is_supported: bool,
    pub deposit_limit: Uint128,
    pub strategy: Option<Addr>,
}

#[cw_serde]
pub struct AddressBindingResponse {
    pub key: SymbolicKey,
    pub address: Option<Addr>,
}

#[cw_serde]
pub struct AddressBinding {
    pub key: SymbolicKey,
    pub address: Addr,
}

#[cw_serde]
pub struct AddressBindingsResponse {
    pub bindings: Vec<AddressBinding>,
}

#[cw_serde]
pub struct RsEthResponse {
    pub address: Addr,
}

// Helpers used by the contracts that gate their own operations on the state of the config contract.

pub fn query_has_role<C: CustomQuery>(
    querier: &QuerierWrapper<C>,
    lrt_config: &Addr,
    role: SymbolicKey,
    account: &Addr,
) -> StdResult<bool> {
    querier.query_wasm_smart(
        lrt_config.to_string(),
        &QueryMsg::HasRole {
            role,
            account: account.to_string(),
        },
    )
}

pub fn query_is_supported_asset<C: CustomQuery>(
    querier: &QuerierWrapper<C>,
    lrt_config: &Addr,
    asset: &Addr,
) -> StdResult<bool> {
    querier.query_wasm_smart(
        lrt_config.to_string(),
        &QueryMsg::IsSupportedAsset {
            asset: asset.to_string(),
        },
    )
}

pub fn query_supported_asset_list<C: CustomQuery>(
    querier: &QuerierWrapper<C>,
    lrt_config: &Addr,
) -> StdResult<Vec<Addr>> {
    let response: SupportedAssetListResponse =
        querier.query_wasm_smart(lrt_config.to_string(), &QueryMsg::SupportedAssetList {})?;

    Ok(response.assets)
}
