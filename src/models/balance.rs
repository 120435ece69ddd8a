use std::sync::Arc;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::token::TokenMeta;

/// Balances of one token for the signed-in account.
///
/// The app balance (funds deposited in the vault contracts) and the wallet
/// balance (funds held on the account itself) are loaded independently; each
/// carries its own loaded flag and fetch time.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRecord {
    pub meta: Arc<TokenMeta>,
    pub app_balance: BigDecimal,
    pub app_balance_loaded: bool,
    pub app_balance_fetched_at: Option<DateTime<Utc>>,
    pub wallet_balance: BigDecimal,
    pub wallet_balance_loaded: bool,
    pub wallet_balance_fetched_at: Option<DateTime<Utc>>,
}

impl BalanceRecord {
    /// Zero balances, nothing loaded yet.
    pub fn new(meta: Arc<TokenMeta>) -> Self {
        Self {
            meta,
            app_balance: BigDecimal::from(0),
            app_balance_loaded: false,
            app_balance_fetched_at: None,
            wallet_balance: BigDecimal::from(0),
            wallet_balance_loaded: false,
            wallet_balance_fetched_at: None,
        }
    }

    pub fn contract_id(&self) -> &str {
        &self.meta.contract_id
    }

    /// Copy of this record with a freshly loaded app balance.
    pub fn with_app_balance(&self, amount: BigDecimal) -> Self {
        Self {
            app_balance: amount,
            app_balance_loaded: true,
            app_balance_fetched_at: Some(Utc::now()),
            ..self.clone()
        }
    }

    /// Copy of this record with a freshly loaded wallet balance.
    pub fn with_wallet_balance(&self, amount: BigDecimal) -> Self {
        Self {
            wallet_balance: amount,
            wallet_balance_loaded: true,
            wallet_balance_fetched_at: Some(Utc::now()),
            ..self.clone()
        }
    }
}
