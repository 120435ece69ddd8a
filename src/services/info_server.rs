use async_trait::async_trait;
use bigdecimal::BigDecimal;
use log::debug;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    errors::CustomError,
    models::{
        operation::{OperationReceipt, OperationRequest},
        vault::GetInfoResponse,
    },
};

/// Vault, token and app-balance queries plus deposit/withdraw actions.
#[async_trait]
pub trait InfoServerApi: Send + Sync {
    async fn get_info(&self) -> Result<GetInfoResponse, CustomError>;

    /// Balance the account holds inside the app's vault contracts.
    async fn get_account_balance(
        &self,
        account_id: &str,
        token_id: &str,
    ) -> Result<BigDecimal, CustomError>;

    async fn deposit(
        &self,
        token_id: &str,
        amount: &BigDecimal,
    ) -> Result<OperationReceipt, CustomError>;

    async fn withdraw(
        &self,
        token_id: &str,
        amount: &BigDecimal,
    ) -> Result<OperationReceipt, CustomError>;
}

#[derive(Debug, Deserialize)]
struct AccountBalanceResponse {
    balance: BigDecimal,
}

#[derive(Clone, Debug)]
pub struct InfoServerClient {
    base_url: String,
    http_client: Client,
}

impl InfoServerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CustomError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| CustomError::NetworkError(format!("GET {url} failed: {e}")))?;

        Self::decode(response).await
    }

    async fn post_operation(
        &self,
        path: &str,
        token_id: &str,
        amount: &BigDecimal,
    ) -> Result<OperationReceipt, CustomError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {} token={} amount={}", url, token_id, amount);

        let request = OperationRequest {
            token_id: token_id.to_string(),
            amount: amount.clone(),
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| CustomError::NetworkError(format!("POST {url} failed: {e}")))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, CustomError> {
        let status = response.status();
        if !status.is_success() {
            return Err(CustomError::NetworkError(format!(
                "HTTP error {}: {}",
                status,
                response.text().await.unwrap_or_default()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CustomError::InvalidResponseError(e.to_string()))
    }
}

#[async_trait]
impl InfoServerApi for InfoServerClient {
    async fn get_info(&self) -> Result<GetInfoResponse, CustomError> {
        let info: GetInfoResponse = self.get_json("/info").await?;
        debug!(
            "Info server lists {} vaults and {} tokens",
            info.vaults.len(),
            info.tokens.len()
        );
        Ok(info)
    }

    async fn get_account_balance(
        &self,
        account_id: &str,
        token_id: &str,
    ) -> Result<BigDecimal, CustomError> {
        let path = format!("/accounts/{account_id}/balances/{token_id}");
        let response: AccountBalanceResponse = self.get_json(&path).await?;
        Ok(response.balance)
    }

    async fn deposit(
        &self,
        token_id: &str,
        amount: &BigDecimal,
    ) -> Result<OperationReceipt, CustomError> {
        self.post_operation("/deposit", token_id, amount).await
    }

    async fn withdraw(
        &self,
        token_id: &str,
        amount: &BigDecimal,
    ) -> Result<OperationReceipt, CustomError> {
        self.post_operation("/withdraw", token_id, amount).await
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::models::operation::{OperationKind, OperationStatus};

    #[actix_web::test]
    async fn test_get_account_balance_reads_decimal_string() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/accounts/alice.near/balances/usdt.near");
                then.status(200).json_body(json!({ "balance": "5.000000000000000000000001" }));
            })
            .await;

        let client = InfoServerClient::new(server.base_url());
        let balance = client
            .get_account_balance("alice.near", "usdt.near")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            balance,
            BigDecimal::from_str("5.000000000000000000000001").unwrap()
        );
    }

    #[actix_web::test]
    async fn test_server_error_becomes_network_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/accounts/alice.near/balances/usdt.near");
                then.status(503).body("maintenance");
            })
            .await;

        let client = InfoServerClient::new(server.base_url());
        let err = client
            .get_account_balance("alice.near", "usdt.near")
            .await
            .unwrap_err();

        match err {
            CustomError::NetworkError(message) => assert!(message.contains("maintenance")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[actix_web::test]
    async fn test_malformed_body_becomes_invalid_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/info");
                then.status(200).body("not json");
            })
            .await;

        let client = InfoServerClient::new(format!("{}/", server.base_url()));
        let err = client.get_info().await.unwrap_err();

        assert!(matches!(err, CustomError::InvalidResponseError(_)));
    }

    #[actix_web::test]
    async fn test_deposit_posts_token_and_amount() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/deposit")
                    .json_body(json!({ "tokenId": "usdt.near", "amount": "12.5" }));
                then.status(200).json_body(json!({
                    "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                    "kind": "deposit",
                    "tokenId": "usdt.near",
                    "amount": "12.5",
                    "status": "pending",
                    "submittedAt": "2026-10-16T12:00:00Z"
                }));
            })
            .await;

        let client = InfoServerClient::new(server.base_url());
        let receipt = client
            .deposit("usdt.near", &BigDecimal::from_str("12.5").unwrap())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(receipt.kind, OperationKind::Deposit);
        assert_eq!(receipt.status, OperationStatus::Pending);
        assert!(receipt.transaction_hash.is_none());
    }

    #[actix_web::test]
    async fn test_withdraw_uses_withdraw_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/withdraw");
                then.status(200).json_body(json!({
                    "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
                    "kind": "withdraw",
                    "tokenId": "usdt.near",
                    "amount": "1",
                    "status": "completed",
                    "transactionHash": "9xQ1",
                    "submittedAt": "2026-10-16T12:00:00Z"
                }));
            })
            .await;

        let client = InfoServerClient::new(server.base_url());
        let receipt = client
            .withdraw("usdt.near", &BigDecimal::from(1))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(receipt.kind, OperationKind::Withdraw);
        assert_eq!(receipt.transaction_hash.as_deref(), Some("9xQ1"));
    }
}
