use std::sync::RwLock;

use actix_web::{get, post, web, HttpResponse};
use bigdecimal::BigDecimal;
use log::warn;

use crate::{
    errors::CustomError,
    models::{
        api_response::{success_response, BalanceView, FetchOutcome},
        balance::BalanceRecord,
        operation::OperationRequest,
        token::TokenMeta,
    },
    services::{
        balance_synchronizer::{read, write, BalanceSynchronizer},
        balance_table::BalanceTable,
    },
};

type Table = web::Data<RwLock<BalanceTable>>;
type Synchronizer = web::Data<BalanceSynchronizer>;

#[get("/balances")]
pub async fn list_balances(table: Table) -> Result<HttpResponse, CustomError> {
    let records: Vec<BalanceRecord> = read(&table).records().cloned().collect();
    Ok(success_response(records))
}

#[get("/balances/{token_id}")]
pub async fn get_balance(
    table: Table,
    token_id: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let record = read(&table).lookup(&token_id).cloned();
    match record {
        Some(record) => Ok(success_response(record)),
        None => Err(CustomError::TokenNotFoundError(token_id.into_inner())),
    }
}

#[get("/balances/{token_id}/app")]
pub async fn get_app_balance(table: Table, token_id: web::Path<String>) -> HttpResponse {
    let guard = read(&table);
    success_response(BalanceView {
        balance: guard.app_balance(&token_id),
        loaded: guard.is_app_balance_loaded(&token_id),
    })
}

#[get("/balances/{token_id}/wallet")]
pub async fn get_wallet_balance(table: Table, token_id: web::Path<String>) -> HttpResponse {
    let guard = read(&table);
    success_response(BalanceView {
        balance: guard.wallet_balance(&token_id),
        loaded: guard.is_wallet_balance_loaded(&token_id),
    })
}

#[post("/balances/init")]
pub async fn init_balances(table: Table, tokens: web::Json<Vec<TokenMeta>>) -> HttpResponse {
    let mut guard = write(&table);
    guard.initialize(tokens.into_inner());
    success_response(guard.len())
}

#[post("/balances/load-info")]
pub async fn load_info(table: Table, sync: Synchronizer) -> Result<HttpResponse, CustomError> {
    let info = sync.load_info(&table).await.map_err(|e| {
        warn!("Loading info failed: {}", e);
        e
    })?;
    Ok(success_response(info))
}

#[post("/balances/{token_id}/app/fetch")]
pub async fn fetch_app_balance(
    table: Table,
    sync: Synchronizer,
    token_id: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let token_id = token_id.into_inner();
    let updated = sync.fetch_app_balance(&table, &token_id).await.map_err(|e| {
        warn!("App balance fetch for {} failed: {}", token_id, e);
        e
    })?;
    Ok(success_response(FetchOutcome { token_id, updated }))
}

#[post("/balances/{token_id}/wallet/fetch")]
pub async fn fetch_wallet_balance(
    table: Table,
    sync: Synchronizer,
    token_id: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let token_id = token_id.into_inner();
    let updated = sync
        .fetch_wallet_balance(&table, &token_id)
        .await
        .map_err(|e| {
            warn!("Wallet balance fetch for {} failed: {}", token_id, e);
            e
        })?;
    Ok(success_response(FetchOutcome { token_id, updated }))
}

fn validate_amount(amount: &BigDecimal) -> Result<(), CustomError> {
    if *amount <= BigDecimal::from(0) {
        return Err(CustomError::InvalidAmountError(amount.to_string()));
    }
    Ok(())
}

#[post("/deposit")]
pub async fn deposit(
    sync: Synchronizer,
    request: web::Json<OperationRequest>,
) -> Result<HttpResponse, CustomError> {
    validate_amount(&request.amount)?;
    let receipt = sync.deposit(&request.token_id, &request.amount).await?;
    Ok(success_response(receipt))
}

#[post("/withdraw")]
pub async fn withdraw(
    sync: Synchronizer,
    request: web::Json<OperationRequest>,
) -> Result<HttpResponse, CustomError> {
    validate_amount(&request.amount)?;
    let receipt = sync.withdraw(&request.token_id, &request.amount).await?;
    Ok(success_response(receipt))
}
