//! Tradier broker adapter implementing `TradingPort`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::application::ports::{OrderAck, OrderPreview, TradingError, TradingPort};
use crate::domain::trading::Order;
use crate::encoding::{FormFields, encode};

use super::api_types::{TradierOrderResponse, TradierPreviewResponse};
use super::config::{TradierConfig, TradierEnvironment};
use super::error::TradierError;
use super::http_client::TradierHttpClient;

/// Tradier brokerage adapter.
///
/// Implements `TradingPort` for the Tradier REST API.
#[derive(Debug, Clone)]
pub struct TradierTradingAdapter {
    client: TradierHttpClient,
    environment: TradierEnvironment,
}

impl TradierTradingAdapter {
    /// Create a new Tradier adapter.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &TradierConfig) -> Result<Self, TradierError> {
        let client = TradierHttpClient::new(config)?;
        Ok(Self {
            client,
            environment: config.environment,
        })
    }

    /// Check if we're in live trading mode.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.environment.is_live()
    }

    /// Place an order, reporting failures as `TradierError`.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank account, an unencodable order, or any
    /// transport failure.
    pub async fn submit(&self, account_id: &str, order: &Order) -> Result<OrderAck, TradierError> {
        let response: TradierOrderResponse = self.send(account_id, order, false).await?;
        let ack = response.to_order_ack();

        tracing::info!(
            account_id = %account_id,
            order_id = ack.order_id,
            status = %ack.status,
            "Order submitted successfully"
        );

        Ok(ack)
    }

    /// Preview an order, reporting failures as `TradierError`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::submit`].
    pub async fn preview(
        &self,
        account_id: &str,
        order: &Order,
    ) -> Result<OrderPreview, TradierError> {
        let response: TradierPreviewResponse = self.send(account_id, order, true).await?;
        let preview = response.to_order_preview();

        tracing::info!(
            account_id = %account_id,
            status = %preview.status,
            result = preview.result,
            order_cost = ?preview.order_cost,
            "Order preview received"
        );

        Ok(preview)
    }

    /// Build the order form for an account.
    fn order_form(order: &Order, preview: bool) -> Result<FormFields, TradierError> {
        let mut form = encode(order)?;
        if preview {
            form.push("preview", "true");
        }
        Ok(form)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        account_id: &str,
        order: &Order,
        preview: bool,
    ) -> Result<T, TradierError> {
        let account_id = checked_account_id(account_id)?;
        let form = Self::order_form(order, preview)?;

        if self.is_live() && !preview {
            tracing::warn!(
                account_id = %account_id,
                class = %order.class(),
                symbol = %order.symbol(),
                "Submitting LIVE order - this will execute real trades"
            );
        }

        tracing::info!(
            account_id = %account_id,
            class = %order.class(),
            symbol = %order.symbol(),
            duration = %order.duration(),
            preview,
            fields = form.len(),
            "Submitting order to Tradier"
        );

        self.client
            .post_form(&format!("/accounts/{account_id}/orders"), &form)
            .await
    }
}

/// Account ids are interpolated into the request path, so only ASCII letters
/// and digits are accepted.
fn checked_account_id(account_id: &str) -> Result<&str, TradierError> {
    let account_id = account_id.trim();
    if account_id.is_empty() {
        return Err(TradierError::InvalidRequest(
            "account id must not be empty".to_string(),
        ));
    }
    if !account_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(TradierError::InvalidRequest(format!(
            "account id must be alphanumeric: {account_id:?}"
        )));
    }
    Ok(account_id)
}

#[async_trait]
impl TradingPort for TradierTradingAdapter {
    async fn place_order(&self, account_id: &str, order: &Order) -> Result<OrderAck, TradingError> {
        self.submit(account_id, order).await.map_err(TradingError::from)
    }

    async fn preview_order(
        &self,
        account_id: &str,
        order: &Order,
    ) -> Result<OrderPreview, TradingError> {
        self.preview(account_id, order).await.map_err(TradingError::from)
    }
}
