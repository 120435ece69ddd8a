use std::sync::Arc;

use bigdecimal::BigDecimal;
use indexmap::IndexMap;

use crate::models::{balance::BalanceRecord, token::TokenMeta};

/// Per-token balances of the signed-in account, keyed by contract id.
///
/// Records keep the order of the token list the table was initialized with.
/// Fetch results are merged in place; a token id that is not tracked is never
/// inserted.
#[derive(Clone, Debug, Default)]
pub struct BalanceTable {
    balances: IndexMap<String, BalanceRecord>,
}

impl BalanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table straight from a token list.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = TokenMeta>,
    {
        let mut table = Self::new();
        table.initialize(tokens);
        table
    }

    /// Replace every record with a zeroed, unloaded one per token.
    ///
    /// Previously loaded balances are discarded, including those of tokens that
    /// appear in both lists. When a contract id is listed twice the first entry
    /// is kept.
    pub fn initialize<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = TokenMeta>,
    {
        let mut balances = IndexMap::new();
        for token in tokens {
            balances
                .entry(token.contract_id.clone())
                .or_insert_with(|| BalanceRecord::new(Arc::new(token)));
        }
        self.balances = balances;
    }

    pub fn lookup(&self, token_id: &str) -> Option<&BalanceRecord> {
        self.balances.get(token_id)
    }

    /// App balance of the token, zero when the token is not tracked.
    ///
    /// Zero is also returned before the first fetch, see `is_app_balance_loaded`.
    pub fn app_balance(&self, token_id: &str) -> BigDecimal {
        self.lookup(token_id)
            .map(|record| record.app_balance.clone())
            .unwrap_or_else(|| BigDecimal::from(0))
    }

    pub fn is_app_balance_loaded(&self, token_id: &str) -> bool {
        self.lookup(token_id)
            .map(|record| record.app_balance_loaded)
            .unwrap_or(false)
    }

    pub fn wallet_balance(&self, token_id: &str) -> BigDecimal {
        self.lookup(token_id)
            .map(|record| record.wallet_balance.clone())
            .unwrap_or_else(|| BigDecimal::from(0))
    }

    pub fn is_wallet_balance_loaded(&self, token_id: &str) -> bool {
        self.lookup(token_id)
            .map(|record| record.wallet_balance_loaded)
            .unwrap_or(false)
    }

    /// Store a fetched app balance. Returns false if the token is not tracked.
    pub fn apply_app_balance(&mut self, token_id: &str, amount: BigDecimal) -> bool {
        match self.balances.get_mut(token_id) {
            Some(record) => {
                *record = record.with_app_balance(amount);
                true
            }
            None => false,
        }
    }

    /// Store a fetched wallet balance. Returns false if the token is not tracked.
    pub fn apply_wallet_balance(&mut self, token_id: &str, amount: BigDecimal) -> bool {
        match self.balances.get_mut(token_id) {
            Some(record) => {
                *record = record.with_wallet_balance(amount);
                true
            }
            None => false,
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &BalanceRecord> {
        self.balances.values()
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}
