//! High-level gateway client

use enot_core::{ApiConfig, ClientConfig, Credentials, Document, EnotResult, Params};
use enot_crypto::{sign_payment_hex, verify_payment};
use serde_json::Value;
use tracing::debug;

use crate::error::ApiResult;
use crate::link::{build_payment_link, PaymentLinkRequest};
use crate::transport::{ApiTransport, Transport};

pub const PAYMENT_METHODS_PATH: &str = "request/payment-methods";
pub const BALANCE_PATH: &str = "request/balance";
pub const PAYOFF_PATH: &str = "request/payoff";
pub const PAYOFF_INFO_PATH: &str = "request/payoff-info";

/// Client for the enot.io merchant API
///
/// Holds the merchant credentials and a transport. Every call is a single
/// request; failures from the transport are returned as they are, and
/// gateway error payloads come back as ordinary documents.
pub struct PaymentClient<T = ApiTransport> {
    credentials: Credentials,
    transport: T,
}

impl PaymentClient<ApiTransport> {
    /// Client for the default gateway host with default timeouts
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        Self::with_api_config(config, &ApiConfig::default())
    }

    pub fn with_api_config(config: ClientConfig, api: &ApiConfig) -> ApiResult<Self> {
        let transport = ApiTransport::new(api)?;
        Ok(Self::with_transport(config.into(), transport))
    }
}

impl<T: Transport> PaymentClient<T> {
    pub fn with_transport(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn merchant_id(&self) -> &str {
        &self.credentials.merchant_id
    }

    pub fn set_merchant_id(&mut self, merchant_id: impl Into<String>) {
        self.credentials.merchant_id = merchant_id.into();
    }

    pub fn secret_word(&self) -> &str {
        &self.credentials.secret_word
    }

    pub fn set_secret_word(&mut self, secret_word: impl Into<String>) {
        self.credentials.secret_word = secret_word.into();
    }

    pub fn api_key(&self) -> &str {
        &self.credentials.api_key
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.credentials.api_key = api_key.into();
    }

    pub fn email(&self) -> &str {
        &self.credentials.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.credentials.email = email.into();
    }

    /// Payment methods enabled for the merchant
    pub async fn get_available_payment_services(&self) -> ApiResult<Document> {
        let params = Params::new()
            .with("merchant_id", self.merchant_id())
            .with("secret_key", self.secret_word());
        self.transport.get(PAYMENT_METHODS_PATH, &params).await
    }

    /// Account balance
    pub async fn get_balance(&self) -> ApiResult<Document> {
        self.transport.get(BALANCE_PATH, &self.api_params()).await
    }

    /// Request a payout of `amount` to `wallet` through `service`
    pub async fn withdraw(
        &self,
        service: &str,
        wallet: &str,
        amount: impl Into<Value>,
        transaction_id: &str,
    ) -> ApiResult<Document> {
        let params = self
            .api_params()
            .with("service", service)
            .with("wallet", wallet)
            .with("amount", amount)
            .with("orderid", transaction_id);

        debug!("Requesting payout {} via {}", transaction_id, service);
        self.transport.get(PAYOFF_PATH, &params).await
    }

    /// Payout status; `info` fields override the credential fields
    pub async fn withdraw_info(&self, info: Params) -> ApiResult<Document> {
        let mut params = self.api_params();
        params.merge(info);
        self.transport.get(PAYOFF_INFO_PATH, &params).await
    }

    /// Signed link to the hosted payment page; makes no request
    pub fn generate_payment_link(&self, request: &PaymentLinkRequest) -> String {
        build_payment_link(self.transport.host(), &self.credentials, request)
    }

    /// Lowercase hex signature for `sum` and `order_id`
    pub fn generate_sign(&self, sum: &str, order_id: &str) -> String {
        sign_payment_hex(self.merchant_id(), self.secret_word(), sum, order_id)
    }

    /// Check a signature produced for `sum` and `order_id`
    pub fn verify_sign(&self, sum: &str, order_id: &str, signature: &str) -> EnotResult<()> {
        verify_payment(self.merchant_id(), self.secret_word(), sum, order_id, signature)
    }

    fn api_params(&self) -> Params {
        Params::new()
            .with("api_key", self.api_key())
            .with("email", self.email())
    }
}

impl<T> std::fmt::Debug for PaymentClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentClient")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
