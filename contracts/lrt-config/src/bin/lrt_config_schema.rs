use cosmwasm_schema::write_api;
use interface::lrt_config::{ExecuteMsg, QueryMsg};
use lrt_config::{migration::migrate::MigrateMsg, msg::InstantiateMsg};

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: QueryMsg,
        migrate: MigrateMsg,
    };
}
