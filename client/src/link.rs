//! Payment page links

use enot_core::{Credentials, Currency, Params};
use enot_crypto::sign_payment_hex;

use crate::query::build_query;

/// Path of the hosted payment page
pub const PAY_PATH: &str = "pay";

/// Parameters of a payment link
///
/// `sum` is signed and sent exactly as given, so it must be formatted the
/// way the gateway will see it (e.g. `"100.00"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentLinkRequest {
    pub sum: String,
    pub order_id: String,
    pub currency: Currency,
    pub callback: String,
    pub default_payment: String,
    pub redirect_to: String,
    pub success_url: String,
    pub fail_url: String,
}

impl PaymentLinkRequest {
    pub fn new(
        sum: impl Into<String>,
        order_id: impl Into<String>,
        callback: impl Into<String>,
        default_payment: impl Into<String>,
    ) -> Self {
        Self {
            sum: sum.into(),
            order_id: order_id.into(),
            currency: Currency::default(),
            callback: callback.into(),
            default_payment: default_payment.into(),
            redirect_to: String::new(),
            success_url: String::new(),
            fail_url: String::new(),
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_redirect_to(mut self, url: impl Into<String>) -> Self {
        self.redirect_to = url.into();
        self
    }

    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.success_url = url.into();
        self
    }

    pub fn with_fail_url(mut self, url: impl Into<String>) -> Self {
        self.fail_url = url.into();
        self
    }

    /// Link parameters in the order the payment page expects them
    pub fn to_params(&self, credentials: &Credentials) -> Params {
        let signature = sign_payment_hex(
            &credentials.merchant_id,
            &credentials.secret_word,
            &self.sum,
            &self.order_id,
        );

        Params::new()
            .with("m", credentials.merchant_id.as_str())
            .with("oa", self.sum.as_str())
            .with("o", self.order_id.as_str())
            .with("s", signature)
            .with("cr", self.currency.code())
            .with("cf", self.callback.as_str())
            .with("p", self.default_payment.as_str())
            .with("ap", self.redirect_to.as_str())
            .with("success_url", self.success_url.as_str())
            .with("fail_url", self.fail_url.as_str())
    }
}

/// Build `<host>/pay?<query>` for `request`
pub fn build_payment_link(host: &str, credentials: &Credentials, request: &PaymentLinkRequest) -> String {
    format!(
        "{}/{}?{}",
        host.trim_end_matches('/'),
        PAY_PATH,
        build_query(&request.to_params(credentials))
    )
}
