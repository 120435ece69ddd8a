use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::token::{TokenMeta, TokenMetaWithPrice};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaultStatus {
    Live,
    Upcoming,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Dex {
    Ref,
    Jumbo,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultMeta {
    pub uuid: String,
    pub name: String,
    pub contract_id: String,
    pub status: VaultStatus,
    pub deposit_tokens: Vec<TokenMetaWithPrice>,
    pub reward_tokens: Vec<String>,
    pub dex: Dex,
    pub dex_url: String,
    pub dex_fee: f64,
    pub apr: BigDecimal,
    pub tvl: BigDecimal,
    pub osc: BigDecimal,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoMetadata {
    pub apys_contract_id: String,
}

/// Payload of the info server's `/info` endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetInfoResponse {
    pub vaults: Vec<VaultMeta>,
    pub tokens: Vec<TokenMeta>,
    pub metadata: InfoMetadata,
}
