use cosmwasm_schema::cw_serde;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address that receives the default admin role.
    pub admin: String,
    /// Initial supported assets, also bound to their token keys.
    pub st_eth: String,
    pub r_eth: String,
    pub cb_eth: String,
    /// Address of the protocol's receipt token.
    pub rs_eth: String,
}
