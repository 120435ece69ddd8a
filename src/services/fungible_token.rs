use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use bigdecimal::{num_bigint::BigInt, BigDecimal};
use log::debug;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::errors::CustomError;

/// On-chain fungible token ledger (NEP-141).
#[async_trait]
pub trait FungibleTokenApi: Send + Sync {
    /// Balance held directly by the account, in token units.
    async fn get_balance_of(&self, account_id: &str, token_id: &str)
        -> Result<BigDecimal, CustomError>;
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<CallFunctionResult>,
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct CallFunctionResult {
    result: Option<Vec<u8>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FtMetadata {
    decimals: u8,
}

/// Reads balances with view calls against a NEAR JSON-RPC endpoint.
///
/// Token decimals come from `ft_metadata` once per contract and are cached, so
/// a balance read is a single `ft_balance_of` call after the first one.
#[derive(Clone, Debug)]
pub struct NearFungibleTokenClient {
    rpc_url: String,
    http_client: Client,
    decimals_cache: Arc<RwLock<HashMap<String, u8>>>,
}

impl NearFungibleTokenClient {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self::with_client(rpc_url, Client::new())
    }

    pub fn with_client(rpc_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            http_client,
            decimals_cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn decimals(&self, token_id: &str) -> Result<u8, CustomError> {
        {
            let cache = self.decimals_cache.read().await;
            if let Some(&decimals) = cache.get(token_id) {
                return Ok(decimals);
            }
        }

        let metadata: FtMetadata = self.view(token_id, "ft_metadata", json!({})).await?;

        {
            let mut cache = self.decimals_cache.write().await;
            cache.insert(token_id.to_string(), metadata.decimals);
        }

        Ok(metadata.decimals)
    }

    /// Run a view method on `contract_id` and decode its JSON return value.
    async fn view<T: DeserializeOwned>(
        &self,
        contract_id: &str,
        method_name: &str,
        args: Value,
    ) -> Result<T, CustomError> {
        debug!("view {}.{}({})", contract_id, method_name, args);

        let body = json!({
            "jsonrpc": "2.0",
            "id": "dontcare",
            "method": "query",
            "params": {
                "request_type": "call_function",
                "finality": "final",
                "account_id": contract_id,
                "method_name": method_name,
                "args_base64": BASE64.encode(args.to_string()),
            }
        });

        let response = self
            .http_client
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CustomError::NetworkError(format!("RPC request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CustomError::NetworkError(format!(
                "HTTP error {}: {}",
                status,
                response.text().await.unwrap_or_default()
            )));
        }

        let rpc: RpcResponse = response
            .json()
            .await
            .map_err(|e| CustomError::InvalidResponseError(e.to_string()))?;

        if let Some(error) = rpc.error {
            return Err(CustomError::NetworkError(format!(
                "RPC error calling {contract_id}.{method_name}: {error}"
            )));
        }

        let call = rpc.result.ok_or_else(|| {
            CustomError::InvalidResponseError("RPC response has no result".to_string())
        })?;

        if let Some(error) = call.error {
            return Err(CustomError::NetworkError(format!(
                "{contract_id}.{method_name} failed: {error}"
            )));
        }

        let bytes = call.result.ok_or_else(|| {
            CustomError::InvalidResponseError(format!(
                "{contract_id}.{method_name} returned no value"
            ))
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            CustomError::InvalidResponseError(format!(
                "Failed to decode {contract_id}.{method_name} result: {e}"
            ))
        })
    }
}

/// Scale a raw integer amount to token units without losing digits.
pub fn from_base_units(raw: &str, decimals: u8) -> Result<BigDecimal, CustomError> {
    let units: BigInt = raw.parse().map_err(|_| {
        CustomError::InvalidResponseError(format!("Not an integer amount: {raw}"))
    })?;

    Ok(BigDecimal::new(units, i64::from(decimals)))
}

#[async_trait]
impl FungibleTokenApi for NearFungibleTokenClient {
    async fn get_balance_of(
        &self,
        account_id: &str,
        token_id: &str,
    ) -> Result<BigDecimal, CustomError> {
        let decimals = self.decimals(token_id).await?;
        let raw: String = self
            .view(token_id, "ft_balance_of", json!({ "account_id": account_id }))
            .await?;

        from_base_units(&raw, decimals)
    }
}
