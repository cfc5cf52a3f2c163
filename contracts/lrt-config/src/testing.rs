use cosmwasm_std::{
    from_json,
    testing::{mock_dependencies, mock_env, MockApi, MockQuerier, MockStorage},
    Addr, Coin, MessageInfo, OwnedDeps, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use interface::{
    lrt_config::{
        keys, manager_role, AddressBindingResponse, ExecuteMsg, QueryMsg, RsEthResponse,
        SupportedAssetListResponse, DEFAULT_ADMIN_ROLE,
    },
    SymbolicKey,
};
use serde::de::DeserializeOwned;

use crate::{
    contract::{execute, instantiate, query, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_DEPOSIT_LIMIT},
    error::ContractError,
    migration::migrate::{migrate, MigrateMsg},
    msg::InstantiateMsg,
};

pub const CREATOR: &str = "creator";
pub const ADMIN: &str = "admin";
pub const MANAGER: &str = "manager";
pub const USER1: &str = "user1";
pub const USER2: &str = "user2";
pub const ST_ETH: &str = "steth";
pub const R_ETH: &str = "reth";
pub const CB_ETH: &str = "cbeth";
pub const RS_ETH: &str = "rseth";

pub type TestDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

pub fn get_message_info(api: &MockApi, sender: &str, funds: &[Coin]) -> MessageInfo {
    MessageInfo {
        sender: api.addr_make(sender),
        funds: funds.to_vec(),
    }
}

pub fn get_default_instantiate_msg(api: &MockApi) -> InstantiateMsg {
    InstantiateMsg {
        admin: api.addr_make(ADMIN).to_string(),
        st_eth: api.addr_make(ST_ETH).to_string(),
        r_eth: api.addr_make(R_ETH).to_string(),
        cb_eth: api.addr_make(CB_ETH).to_string(),
        rs_eth: api.addr_make(RS_ETH).to_string(),
    }
}

/// Instantiates the contract with the default message and grants the manager role to `MANAGER`.
pub fn setup_contract() -> TestDeps {
    let mut deps = mock_dependencies();
    let env = mock_env();

    let msg = get_default_instantiate_msg(&deps.api);
    let info = get_message_info(&deps.api, CREATOR, &[]);
    instantiate(deps.as_mut(), env.clone(), info, msg).unwrap();

    let manager = deps.api.addr_make(MANAGER);
    let admin_info = get_message_info(&deps.api, ADMIN, &[]);
    execute(
        deps.as_mut(),
        env,
        admin_info,
        ExecuteMsg::GrantRole {
            role: manager_role(),
            account: manager.to_string(),
        },
    )
    .unwrap();

    deps
}

pub fn query_as<T: DeserializeOwned>(deps: &TestDeps, msg: QueryMsg) -> T {
    from_json(query(deps.as_ref(), mock_env(), msg).unwrap()).unwrap()
}

pub fn supported_asset_list(deps: &TestDeps) -> Vec<Addr> {
    query_as::<SupportedAssetListResponse>(deps, QueryMsg::SupportedAssetList {}).assets
}

#[test]
fn instantiate_seeds_initial_state_test() {
    let (mut deps, env) = (mock_dependencies(), mock_env());

    let msg = get_default_instantiate_msg(&deps.api);
    let info = get_message_info(&deps.api, CREATOR, &[]);
    let res = instantiate(deps.as_mut(), env, info, msg).unwrap();

    assert!(res
        .attributes
        .iter()
        .any(|attr| attr.key == "action" && attr.value == "initialisation"));

    let st_eth = deps.api.addr_make(ST_ETH);
    let r_eth = deps.api.addr_make(R_ETH);
    let cb_eth = deps.api.addr_make(CB_ETH);

    // assets are listed in insertion order
    assert_eq!(
        supported_asset_list(&deps),
        vec![st_eth.clone(), r_eth.clone(), cb_eth.clone()]
    );

    for asset in [&st_eth, &r_eth, &cb_eth] {
        let supported: bool = query_as(
            &deps,
            QueryMsg::IsSupportedAsset {
                asset: asset.to_string(),
            },
        );
        assert!(supported);

        let limit: Uint128 = query_as(
            &deps,
            QueryMsg::DepositLimitByAsset {
                asset: asset.to_string(),
            },
        );
        assert_eq!(limit, DEFAULT_DEPOSIT_LIMIT);
    }
    assert_eq!(
        DEFAULT_DEPOSIT_LIMIT,
        Uint128::new(100_000u128 * 10u128.pow(18))
    );

    for (key_name, expected) in [
        (keys::ST_ETH_TOKEN, &st_eth),
        (keys::R_ETH_TOKEN, &r_eth),
        (keys::CB_ETH_TOKEN, &cb_eth),
    ] {
        let binding: AddressBindingResponse = query_as(
            &deps,
            QueryMsg::Token {
                key: SymbolicKey::from_name(key_name),
            },
        );
        assert_eq!(binding.address.as_ref(), Some(expected));
    }

    let is_admin: bool = query_as(
        &deps,
        QueryMsg::HasRole {
            role: DEFAULT_ADMIN_ROLE,
            account: deps.api.addr_make(ADMIN).to_string(),
        },
    );
    assert!(is_admin);

    // the instantiating address gets no privileges
    let creator_is_admin: bool = query_as(
        &deps,
        QueryMsg::HasRole {
            role: DEFAULT_ADMIN_ROLE,
            account: deps.api.addr_make(CREATOR).to_string(),
        },
    );
    assert!(!creator_is_admin);

    let rs_eth: RsEthResponse = query_as(&deps, QueryMsg::RsEth {});
    assert_eq!(rs_eth.address, deps.api.addr_make(RS_ETH));

    let version = get_contract_version(deps.as_ref().storage).unwrap();
    assert_eq!(version.contract, CONTRACT_NAME);
    assert_eq!(version.version, CONTRACT_VERSION);
}

#[test]
fn instantiate_rejects_zero_addresses_test() {
    let api = MockApi::default();
    let default_msg = get_default_instantiate_msg(&api);

    let invalid_msgs = vec![
        InstantiateMsg {
            admin: String::new(),
            ..default_msg.clone()
        },
        InstantiateMsg {
            st_eth: String::new(),
            ..default_msg.clone()
        },
        InstantiateMsg {
            r_eth: " ".to_string(),
            ..default_msg.clone()
        },
        InstantiateMsg {
            cb_eth: String::new(),
            ..default_msg.clone()
        },
        InstantiateMsg {
            rs_eth: String::new(),
            ..default_msg.clone()
        },
    ];

    for msg in invalid_msgs {
        let (mut deps, env) = (mock_dependencies(), mock_env());
        let info = get_message_info(&deps.api, CREATOR, &[]);

        let err = instantiate(deps.as_mut(), env.clone(), info, msg).unwrap_err();
        assert!(matches!(err, ContractError::ZeroAddress));

        // nothing was written
        assert!(supported_asset_list(&deps).is_empty());
        assert!(query(deps.as_ref(), env, QueryMsg::RsEth {}).is_err());
        assert!(get_contract_version(deps.as_ref().storage).is_err());
    }
}

#[test]
fn instantiate_rejects_invalid_and_duplicate_addresses_test() {
    let (mut deps, env) = (mock_dependencies(), mock_env());
    let info = get_message_info(&deps.api, CREATOR, &[]);

    let msg = InstantiateMsg {
        cb_eth: "not-an-address".to_string(),
        ..get_default_instantiate_msg(&deps.api)
    };
    let err = instantiate(deps.as_mut(), env.clone(), info.clone(), msg).unwrap_err();
    assert!(matches!(err, ContractError::Std(_)));

    let default_msg = get_default_instantiate_msg(&deps.api);
    let msg = InstantiateMsg {
        cb_eth: default_msg.st_eth.clone(),
        ..default_msg
    };
    let err = instantiate(deps.as_mut(), env, info, msg).unwrap_err();
    assert!(matches!(err, ContractError::AssetAlreadySupported { .. }));

    assert!(supported_asset_list(&deps).is_empty());
    let st_eth_binding: AddressBindingResponse = query_as(
        &deps,
        QueryMsg::Token {
            key: SymbolicKey::from_name(keys::ST_ETH_TOKEN),
        },
    );
    assert_eq!(st_eth_binding.address, None);
}

#[test]
fn instantiate_twice_fails_test() {
    let mut deps = setup_contract();
    let env = mock_env();

    let msg = InstantiateMsg {
        admin: deps.api.addr_make(USER1).to_string(),
        ..get_default_instantiate_msg(&deps.api)
    };
    let info = get_message_info(&deps.api, USER1, &[]);

    let err = instantiate(deps.as_mut(), env, info, msg).unwrap_err();
    assert!(matches!(err, ContractError::AlreadyInitialized));

    let user1_is_admin: bool = query_as(
        &deps,
        QueryMsg::HasRole {
            role: DEFAULT_ADMIN_ROLE,
            account: deps.api.addr_make(USER1).to_string(),
        },
    );
    assert!(!user1_is_admin);
}

#[test]
fn set_rs_eth_test() {
    let mut deps = setup_contract();
    let env = mock_env();

    let new_rs_eth = deps.api.addr_make("new_rseth");
    let msg = ExecuteMsg::SetRsEth {
        address: new_rs_eth.to_string(),
    };

    // manager is not enough
    let manager_info = get_message_info(&deps.api, MANAGER, &[]);
    let err = execute(deps.as_mut(), env.clone(), manager_info, msg.clone()).unwrap_err();
    assert!(err.to_string().contains("Unauthorized"));

    let rs_eth: RsEthResponse = query_as(&deps, QueryMsg::RsEth {});
    assert_eq!(rs_eth.address, deps.api.addr_make(RS_ETH));

    let admin_info = get_message_info(&deps.api, ADMIN, &[]);

    let err = execute(
        deps.as_mut(),
        env.clone(),
        admin_info.clone(),
        ExecuteMsg::SetRsEth {
            address: String::new(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::ZeroAddress));

    execute(deps.as_mut(), env.clone(), admin_info.clone(), msg.clone()).unwrap();
    let rs_eth: RsEthResponse = query_as(&deps, QueryMsg::RsEth {});
    assert_eq!(rs_eth.address, new_rs_eth);

    // setting the same address again is allowed
    let res = execute(deps.as_mut(), env, admin_info, msg);
    assert!(res.is_ok());
}

#[test]
fn migrate_test() {
    let mut deps = setup_contract();
    let env = mock_env();

    let res = migrate(deps.as_mut(), env.clone(), MigrateMsg {});
    assert!(res
        .unwrap_err()
        .to_string()
        .contains("Contract is already migrated to the newest version."));

    set_contract_version(deps.as_mut().storage, "some-other-contract", "0.1.0").unwrap();
    let res = migrate(deps.as_mut(), env.clone(), MigrateMsg {});
    assert!(res.unwrap_err().to_string().contains("Cannot migrate"));

    set_contract_version(deps.as_mut().storage, CONTRACT_NAME, "0.1.0").unwrap();
    migrate(deps.as_mut(), env, MigrateMsg {}).unwrap();

    let version = get_contract_version(deps.as_ref().storage).unwrap();
    assert_eq!(version.version, CONTRACT_VERSION);
}
