use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Static token reference data published by the info server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMeta {
    pub symbol: String,
    pub contract_id: String,
    pub decimals: u8,
    pub available: bool,
    pub fraction_digits: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetaWithPrice {
    #[serde(flatten)]
    pub meta: TokenMeta,
    pub price: BigDecimal,
    pub min_deposit_amount: f64,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_token_meta_uses_camel_case_fields() {
        let meta: TokenMeta = serde_json::from_str(
            r#"{"symbol":"USDT","contractId":"usdt.tether-token.near","decimals":6,"available":true,"fractionDigits":2}"#,
        )
        .unwrap();
        assert_eq!(meta.contract_id, "usdt.tether-token.near");
        assert_eq!(meta.fraction_digits, 2);
    }

    #[test]
    fn test_priced_token_flattens_meta() {
        let token: TokenMetaWithPrice = serde_json::from_str(
            r#"{"symbol":"wNEAR","contractId":"wrap.near","decimals":24,"available":true,"fractionDigits":4,"price":"3.1415","minDepositAmount":0.1}"#,
        )
        .unwrap();
        assert_eq!(token.meta.symbol, "wNEAR");
        assert_eq!(token.price, BigDecimal::from_str("3.1415").unwrap());
    }
}
