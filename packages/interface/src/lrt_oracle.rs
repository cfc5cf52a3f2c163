use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Decimal};

#[cw_serde]
pub struct Config {
    /// Address of the LRT config contract used for role checks and asset validation.
    pub lrt_config: Addr,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Registers the price fetcher contract used to price the given asset.
    /// Sender must hold the manager role and the asset must be supported by the LRT config.
    UpdatePriceOracleFor { asset: String, price_oracle: String },

    /// Points the oracle at a different LRT config contract.
    /// Sender must hold the default admin role in the current LRT config.
    UpdateLrtConfig { lrt_config: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(AssetPriceOracleResponse)]
    AssetPriceOracle { asset: String },

    #[returns(AssetPriceResponse)]
    AssetPrice { asset: String },

    /// Prices of all assets supported by the LRT config that have a price fetcher registered.
    #[returns(AllAssetPricesResponse)]
    AllAssetPrices {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub config: Config,
}

#[cw_serde]
pub struct AssetPriceOracleResponse {
    pub asset: Addr,
    pub price_oracle: Option<Addr>,
}

#[cw_serde]
pub struct AssetPriceResponse {
    pub asset: Addr,
    pub price: Decimal,
}

#[cw_serde]
pub struct AllAssetPricesResponse {
    pub prices: Vec<AssetPriceResponse>,
}
