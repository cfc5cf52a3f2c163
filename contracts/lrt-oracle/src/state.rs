use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use interface::lrt_oracle::Config;

pub const CONFIG: Item<Config> = Item::new("config");

// ASSET_PRICE_ORACLE: key(asset address) -> price fetcher contract address
pub const ASSET_PRICE_ORACLE: Map<&Addr, Addr> = Map::new("asset_price_oracle");
