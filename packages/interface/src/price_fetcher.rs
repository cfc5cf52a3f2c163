use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Decimal;

// Query interface every price fetcher contract (e.g. a wrapper around an external price feed)
// must implement in order to be registered with the LRT oracle.
#[cw_serde]
#[derive(QueryResponses)]
pub enum PriceFetcherQueryMsg {
    // Price of one whole unit of the asset, denominated in the protocol's unit of account.
    #[returns(Decimal)]
    AssetPrice { asset: String },
}
