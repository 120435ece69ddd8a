//! Balance tracking for the apys vault dashboard.
//!
//! [`BalanceTable`] holds wallet and app balances per token; the
//! [`BalanceSynchronizer`] fills it from the info server and the NEAR token
//! ledger. The `api` module wraps both in an actix-web service.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use errors::CustomError;
pub use models::{balance::BalanceRecord, token::TokenMeta};
pub use services::{
    balance_synchronizer::BalanceSynchronizer,
    balance_table::BalanceTable,
    fungible_token::{FungibleTokenApi, NearFungibleTokenClient},
    info_server::{InfoServerApi, InfoServerClient},
    session::{FixedSession, SessionProvider},
};
