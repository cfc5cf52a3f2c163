use cosmwasm_schema::write_api;
use interface::lrt_oracle::{ExecuteMsg, QueryMsg};
use lrt_oracle::{migration::migrate::MigrateMsg, msg::InstantiateMsg};

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: QueryMsg,
        migrate: MigrateMsg,
    };
}
