use std::{cell::RefCell, collections::HashMap, rc::Rc};

use cosmwasm_std::{
    from_json,
    testing::{MockApi, MockQuerier, MockStorage},
    to_json_binary, Addr, Binary, ContractResult, CustomQuery, Decimal, OwnedDeps, QuerierResult,
    StdError, StdResult, SystemError, SystemResult, WasmQuery,
};
use interface::{
    lrt_config::{
        manager_role, QueryMsg as LrtConfigQueryMsg, SupportedAssetListResponse,
        DEFAULT_ADMIN_ROLE,
    },
    price_fetcher::PriceFetcherQueryMsg,
};

pub type WasmQueryFunc = Box<dyn Fn(&WasmQuery) -> QuerierResult>;

/// Routes wasm queries to per-contract mock handlers. Clones share the same set of handlers.
#[derive(Clone, Default)]
pub struct MockWasmQuerier {
    contract_mocks: Rc<RefCell<HashMap<String, WasmQueryFunc>>>,
}

impl MockWasmQuerier {
    pub fn new(contract_mocks: HashMap<String, WasmQueryFunc>) -> Self {
        Self {
            contract_mocks: Rc::new(RefCell::new(contract_mocks)),
        }
    }

    pub fn insert_mock(&self, mock: (String, WasmQueryFunc)) {
        self.contract_mocks.borrow_mut().insert(mock.0, mock.1);
    }

    pub fn handler(&self, query: &WasmQuery) -> QuerierResult {
        let contract_addr = match query {
            WasmQuery::Smart { contract_addr, .. } => contract_addr,
            WasmQuery::Raw { contract_addr, .. } => contract_addr,
            WasmQuery::ContractInfo { contract_addr } => contract_addr,
            _ => {
                return SystemResult::Err(SystemError::UnsupportedRequest {
                    kind: "unsupported wasm query type".to_string(),
                })
            }
        };

        let contract_mocks = self.contract_mocks.borrow();
        match contract_mocks.get(contract_addr) {
            Some(handler) => handler(query),
            None => SystemResult::Err(SystemError::NoSuchContract {
                addr: contract_addr.clone(),
            }),
        }
    }
}

/// Installs the given mock and points the wasm querier of `deps` at the shared set of handlers.
pub fn update_contract_mock<C: CustomQuery>(
    deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier, C>,
    wasm_querier: &MockWasmQuerier,
    mock: (String, WasmQueryFunc),
) {
    let querier_for_deps = wasm_querier.clone();
    querier_for_deps.insert_mock(mock);
    deps.querier
        .update_wasm(move |q| querier_for_deps.handler(q));
}

/// Builds a mock that answers smart queries sent to `contract` using `smart_query_handler`.
/// Errors returned by the handler surface as query errors in the calling contract.
pub fn setup_contract_smart_query_mock<T>(
    contract: Addr,
    smart_query_handler: T,
) -> (String, WasmQueryFunc)
where
    T: Fn(&Binary) -> StdResult<Binary> + 'static,
{
    let contract_addr = contract.to_string();

    let response = Box::new(move |query: &WasmQuery| match query {
        WasmQuery::Smart { contract_addr, msg } => {
            if contract_addr != contract.as_str() {
                return SystemResult::Err(SystemError::UnsupportedRequest {
                    kind: "unexpected contract address in smart query contract mock".to_string(),
                });
            }

            match smart_query_handler(msg) {
                Ok(response) => SystemResult::Ok(ContractResult::Ok(response)),
                Err(e) => SystemResult::Ok(ContractResult::Err(e.to_string())),
            }
        }
        _ => SystemResult::Err(SystemError::UnsupportedRequest {
            kind: "only smart queries are supported in this mock".to_string(),
        }),
    });

    (contract_addr, response)
}

/// Role and whitelist state served by the LRT config mock.
#[derive(Clone, Debug, Default)]
pub struct MockLrtConfig {
    pub admins: Vec<Addr>,
    pub managers: Vec<Addr>,
    pub supported_assets: Vec<Addr>,
}

pub fn setup_lrt_config_mock(contract: Addr, config: MockLrtConfig) -> (String, WasmQueryFunc) {
    setup_contract_smart_query_mock(contract, move |msg| {
        match from_json::<LrtConfigQueryMsg>(msg)? {
            LrtConfigQueryMsg::HasRole { role, account } => {
                let account = Addr::unchecked(account);
                let members = if role == DEFAULT_ADMIN_ROLE {
                    &config.admins
                } else if role == manager_role() {
                    &config.managers
                } else {
                    return to_json_binary(&false);
                };

                to_json_binary(&members.contains(&account))
            }
            LrtConfigQueryMsg::IsSupportedAsset { asset } => {
                to_json_binary(&config.supported_assets.contains(&Addr::unchecked(asset)))
            }
            LrtConfigQueryMsg::SupportedAssetList {} => {
                to_json_binary(&SupportedAssetListResponse {
                    assets: config.supported_assets.clone(),
                })
            }
            _ => Err(StdError::generic_err(
                "unsupported query type in lrt config mock",
            )),
        }
    })
}

/// Price fetcher mock that knows the prices of the given assets and fails for any other asset.
pub fn setup_price_fetcher_mock(
    contract: Addr,
    prices: HashMap<Addr, Decimal>,
) -> (String, WasmQueryFunc) {
    setup_contract_smart_query_mock(contract, move |msg| {
        match from_json::<PriceFetcherQueryMsg>(msg)? {
            PriceFetcherQueryMsg::AssetPrice { asset } => {
                match prices.get(&Addr::unchecked(asset.clone())) {
                    Some(price) => to_json_binary(price),
                    None => Err(StdError::generic_err(format!(
                        "no price available for asset {asset}"
                    ))),
                }
            }
        }
    })
}
