use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use interface::SymbolicKey;

// TOKEN_MAP: key(token key) -> token address
pub const TOKEN_MAP: Map<&[u8], Addr> = Map::new("token_map");

// CONTRACT_MAP: key(contract key) -> contract address
pub const CONTRACT_MAP: Map<&[u8], Addr> = Map::new("contract_map");

// IS_SUPPORTED_ASSET: key(asset) -> is supported flag
pub const IS_SUPPORTED_ASSET: Map<&Addr, bool> = Map::new("is_supported_asset");

// DEPOSIT_LIMIT_BY_ASSET: key(asset) -> maximum amount of the asset the protocol accepts
pub const DEPOSIT_LIMIT_BY_ASSET: Map<&Addr, Uint128> = Map::new("deposit_limit_by_asset");

// ASSET_STRATEGY: key(asset) -> strategy address
// Managed independently of the supported flag, so it survives asset removal.
pub const ASSET_STRATEGY: Map<&Addr, Addr> = Map::new("asset_strategy");

// The ordered list of supported assets is kept in three parts so that both appending and
// removal are constant time:
// SUPPORTED_ASSET_LIST: key(position) -> asset
pub const SUPPORTED_ASSET_LIST: Map<u32, Addr> = Map::new("supported_asset_list");
// SUPPORTED_ASSET_INDEX: key(asset) -> position in SUPPORTED_ASSET_LIST
pub const SUPPORTED_ASSET_INDEX: Map<&Addr, u32> = Map::new("supported_asset_index");
// Number of entries in SUPPORTED_ASSET_LIST
pub const SUPPORTED_ASSET_COUNT: Item<u32> = Item::new("supported_asset_count");

/// Address of the protocol's receipt token.
pub const RS_ETH: Item<Addr> = Item::new("rs_eth");

// ROLE_MEMBERS: key(role, account) -> ()
pub const ROLE_MEMBERS: Map<(&[u8], &Addr), ()> = Map::new("role_members");

// ROLE_ADMINS: key(role) -> admin role
// Roles without an entry are administered by the default admin role.
pub const ROLE_ADMINS: Map<&[u8], SymbolicKey> = Map::new("role_admins");
