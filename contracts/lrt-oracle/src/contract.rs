use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Api, Binary, Decimal, Deps, DepsMut, Env, MessageInfo,
    Response, StdError, StdResult,
};
use cw2::set_contract_version;
use interface::{
    lrt_config::{
        manager_role, query_has_role, query_is_supported_asset, query_supported_asset_list,
        DEFAULT_ADMIN_ROLE,
    },
    lrt_oracle::{
        AllAssetPricesResponse, AssetPriceOracleResponse, AssetPriceResponse, Config,
        ConfigResponse, ExecuteMsg, QueryMsg,
    },
    price_fetcher::PriceFetcherQueryMsg,
    SymbolicKey,
};

use crate::{
    error::ContractError,
    msg::InstantiateMsg,
    state::{ASSET_PRICE_ORACLE, CONFIG},
};

/// Contract name that is used for migration.
pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
/// Contract version that is used for migration.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let lrt_config = validate_address(deps.api, &msg.lrt_config)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(
        deps.storage,
        &Config {
            lrt_config: lrt_config.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "initialisation")
        .add_attribute("sender", info.sender)
        .add_attribute("lrt_config", lrt_config))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdatePriceOracleFor {
            asset,
            price_oracle,
        } => update_price_oracle_for(deps, info, asset, price_oracle),
        ExecuteMsg::UpdateLrtConfig { lrt_config } => update_lrt_config(deps, info, lrt_config),
    }
}

fn update_price_oracle_for(
    deps: DepsMut,
    info: MessageInfo,
    asset: String,
    price_oracle: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_lrt_config_role(&deps.as_ref(), &config, manager_role(), &info.sender)?;

    let asset = validate_address(deps.api, &asset)?;
    if !query_is_supported_asset(&deps.querier, &config.lrt_config, &asset)? {
        return Err(ContractError::AssetNotSupported { asset });
    }

    let price_oracle = validate_address(deps.api, &price_oracle)?;
    ASSET_PRICE_ORACLE.save(deps.storage, &asset, &price_oracle)?;

    Ok(Response::new()
        .add_attribute("action", "update_price_oracle_for")
        .add_attribute("sender", info.sender)
        .add_attribute("asset", asset)
        .add_attribute("price_oracle", price_oracle))
}

fn update_lrt_config(
    deps: DepsMut,
    info: MessageInfo,
    lrt_config: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_lrt_config_role(&deps.as_ref(), &config, DEFAULT_ADMIN_ROLE, &info.sender)?;

    let lrt_config = validate_address(deps.api, &lrt_config)?;
    if lrt_config == config.lrt_config {
        return Err(ContractError::ValueAlreadyInUse);
    }

    config.lrt_config = lrt_config.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_lrt_config")
        .add_attribute("sender", info.sender)
        .add_attribute("lrt_config", lrt_config))
}

// Roles are held in the LRT config contract, so every check is a smart query against it.
fn ensure_lrt_config_role(
    deps: &Deps,
    config: &Config,
    role: SymbolicKey,
    sender: &Addr,
) -> Result<(), ContractError> {
    if !query_has_role(&deps.querier, &config.lrt_config, role, sender)? {
        return Err(ContractError::Unauthorized {
            role: role.to_string(),
            sender: sender.to_string(),
        });
    }

    Ok(())
}

fn validate_address(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    if address.trim().is_empty() {
        return Err(ContractError::ZeroAddress);
    }

    Ok(api.addr_validate(address)?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(&deps)?),
        QueryMsg::AssetPriceOracle { asset } => {
            to_json_binary(&query_asset_price_oracle(&deps, asset)?)
        }
        QueryMsg::AssetPrice { asset } => to_json_binary(&query_asset_price(&deps, asset)?),
        QueryMsg::AllAssetPrices {} => to_json_binary(&query_all_asset_prices(&deps)?),
    }
}

fn query_config(deps: &Deps) -> StdResult<ConfigResponse> {
    Ok(ConfigResponse {
        config: CONFIG.load(deps.storage)?,
    })
}

fn query_asset_price_oracle(deps: &Deps, asset: String) -> StdResult<AssetPriceOracleResponse> {
    let asset = deps.api.addr_validate(&asset)?;
    let price_oracle = ASSET_PRICE_ORACLE.may_load(deps.storage, &asset)?;

    Ok(AssetPriceOracleResponse {
        asset,
        price_oracle,
    })
}

fn query_asset_price(deps: &Deps, asset: String) -> StdResult<AssetPriceResponse> {
    let asset = deps.api.addr_validate(&asset)?;

    let price_oracle = ASSET_PRICE_ORACLE
        .may_load(deps.storage, &asset)?
        .ok_or_else(|| {
            StdError::generic_err(format!("Price oracle not set for asset {asset}"))
        })?;

    let price = fetch_asset_price(deps, &price_oracle, &asset)?;

    Ok(AssetPriceResponse { asset, price })
}

// Assets supported by the LRT config but without a registered price fetcher are left out.
fn query_all_asset_prices(deps: &Deps) -> StdResult<AllAssetPricesResponse> {
    let config = CONFIG.load(deps.storage)?;
    let supported_assets = query_supported_asset_list(&deps.querier, &config.lrt_config)?;

    let mut prices = vec![];
    for asset in supported_assets {
        let Some(price_oracle) = ASSET_PRICE_ORACLE.may_load(deps.storage, &asset)? else {
            deps.api.debug(&format!(
                "No price oracle set for asset {asset}, skipping it"
            ));
            continue;
        };

        let price = fetch_asset_price(deps, &price_oracle, &asset)?;
        prices.push(AssetPriceResponse { asset, price });
    }

    Ok(AllAssetPricesResponse { prices })
}

fn fetch_asset_price(deps: &Deps, price_oracle: &Addr, asset: &Addr) -> StdResult<Decimal> {
    let price: Decimal = deps.querier.query_wasm_smart(
        price_oracle.to_string(),
        &PriceFetcherQueryMsg::AssetPrice {
            asset: asset.to_string(),
        },
    )?;

    deps.api.debug(&format!(
        "Price oracle {price_oracle} returned price {price} for asset {asset}"
    ));

    Ok(price)
}
