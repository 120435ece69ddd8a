use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bigdecimal::BigDecimal;
use log::debug;

use crate::{
    errors::CustomError,
    models::{operation::OperationReceipt, vault::GetInfoResponse},
    services::{
        balance_table::BalanceTable, fungible_token::FungibleTokenApi,
        info_server::InfoServerApi, session::SessionProvider,
    },
};

/// Fills a `BalanceTable` from the info server and the token ledger.
///
/// Each fetch awaits one collaborator call and only locks the table after that
/// call has resolved, so overlapping fetches of the same balance end with the
/// value of whichever response arrived last. Failures are returned as they
/// are and leave the table untouched.
#[derive(Clone)]
pub struct BalanceSynchronizer {
    session: Arc<dyn SessionProvider>,
    info_server: Arc<dyn InfoServerApi>,
    fungible_token: Arc<dyn FungibleTokenApi>,
}

impl BalanceSynchronizer {
    pub fn new(
        session: Arc<dyn SessionProvider>,
        info_server: Arc<dyn InfoServerApi>,
        fungible_token: Arc<dyn FungibleTokenApi>,
    ) -> Self {
        Self {
            session,
            info_server,
            fungible_token,
        }
    }

    fn account_id(&self) -> Result<String, CustomError> {
        self.session.account_id().ok_or(CustomError::NotSignedIn)
    }

    /// Load the token list from the info server and reset the table with it.
    pub async fn load_info(
        &self,
        table: &RwLock<BalanceTable>,
    ) -> Result<GetInfoResponse, CustomError> {
        let info = self.info_server.get_info().await?;

        write(table).initialize(info.tokens.iter().cloned());
        debug!("Balance table reset with {} tokens", info.tokens.len());

        Ok(info)
    }

    /// Refresh the app balance of one token. Returns false if it is not tracked.
    pub async fn fetch_app_balance(
        &self,
        table: &RwLock<BalanceTable>,
        token_id: &str,
    ) -> Result<bool, CustomError> {
        let account_id = self.account_id()?;
        let balance = self
            .info_server
            .get_account_balance(&account_id, token_id)
            .await?;

        Ok(write(table).apply_app_balance(token_id, balance))
    }

    /// Refresh the wallet balance of one token. Returns false if it is not tracked.
    pub async fn fetch_wallet_balance(
        &self,
        table: &RwLock<BalanceTable>,
        token_id: &str,
    ) -> Result<bool, CustomError> {
        let account_id = self.account_id()?;
        let balance = self
            .fungible_token
            .get_balance_of(&account_id, token_id)
            .await?;

        Ok(write(table).apply_wallet_balance(token_id, balance))
    }

    // Deposits and withdrawals do not refresh the table; callers fetch again.
    pub async fn deposit(
        &self,
        token_id: &str,
        amount: &BigDecimal,
    ) -> Result<OperationReceipt, CustomError> {
        self.info_server.deposit(token_id, amount).await
    }

    pub async fn withdraw(
        &self,
        token_id: &str,
        amount: &BigDecimal,
    ) -> Result<OperationReceipt, CustomError> {
        self.info_server.withdraw(token_id, amount).await
    }
}

// Poisoning is ignored: every table mutation is a single assignment.
pub(crate) fn write(table: &RwLock<BalanceTable>) -> RwLockWriteGuard<'_, BalanceTable> {
    table.write().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn read(table: &RwLock<BalanceTable>) -> RwLockReadGuard<'_, BalanceTable> {
    table.read().unwrap_or_else(PoisonError::into_inner)
}
