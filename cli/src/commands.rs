//! CLI Commands

use anyhow::Context;
use enot_client::{PaymentClient, PaymentLinkRequest, Transport};
use enot_core::{ApiConfig, ClientConfig, Currency, Document, Params};
use std::path::Path;
use tracing::info;

/// Load credentials from a JSON file, or from `ENOT_*` variables when no file is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ClientConfig> {
    match path {
        Some(path) => ClientConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => ClientConfig::from_env().context("No --config given and environment is incomplete"),
    }
}

pub fn build_client(config: ClientConfig, host: Option<String>) -> anyhow::Result<PaymentClient> {
    let mut api = ApiConfig::default();
    if let Some(host) = host {
        api = api.with_host(host);
    }
    info!("Using gateway {}", api.host);
    Ok(PaymentClient::with_api_config(config, &api)?)
}

/// Turn repeated `key=value` arguments into request parameters
pub fn parse_fields(fields: &[String]) -> anyhow::Result<Params> {
    fields
        .iter()
        .map(|field| Params::parse_pair(field).map_err(anyhow::Error::from))
        .collect()
}

/// Arguments of the `link` command
pub struct LinkArgs {
    pub sum: String,
    pub order_id: Option<String>,
    pub currency: Currency,
    pub callback: String,
    pub payment: String,
    pub redirect_to: Option<String>,
    pub success_url: Option<String>,
    pub fail_url: Option<String>,
}

impl LinkArgs {
    pub fn into_request(self) -> PaymentLinkRequest {
        let order_id = self
            .order_id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        PaymentLinkRequest::new(self.sum, order_id, self.callback, self.payment)
            .with_currency(self.currency)
            .with_redirect_to(self.redirect_to.unwrap_or_default())
            .with_success_url(self.success_url.unwrap_or_default())
            .with_fail_url(self.fail_url.unwrap_or_default())
    }
}

pub fn print_document(doc: &Document) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(doc)?);
    Ok(())
}

pub async fn payment_methods<T: Transport>(client: &PaymentClient<T>) -> anyhow::Result<()> {
    let doc = client.get_available_payment_services().await?;
    print_document(&doc)
}

pub async fn balance<T: Transport>(client: &PaymentClient<T>) -> anyhow::Result<()> {
    let doc = client.get_balance().await?;
    print_document(&doc)
}

pub async fn withdraw<T: Transport>(
    client: &PaymentClient<T>,
    service: &str,
    wallet: &str,
    amount: &str,
    order_id: &str,
) -> anyhow::Result<()> {
    info!("Requesting payout of {} to {} via {}", amount, wallet, service);
    let doc = client.withdraw(service, wallet, amount, order_id).await?;
    print_document(&doc)
}

pub async fn withdraw_info<T: Transport>(
    client: &PaymentClient<T>,
    fields: &[String],
) -> anyhow::Result<()> {
    let info = parse_fields(fields)?;
    let doc = client.withdraw_info(info).await?;
    print_document(&doc)
}

pub fn link<T: Transport>(client: &PaymentClient<T>, args: LinkArgs) -> String {
    client.generate_payment_link(&args.into_request())
}

pub fn sign<T: Transport>(client: &PaymentClient<T>, sum: &str, order_id: &str) -> String {
    client.generate_sign(sum, order_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_fields() {
        let params = parse_fields(&["id=91".to_string(), "status=paid".to_string()]).unwrap();
        assert_eq!(params.get("id"), Some(&json!("91")));
        assert_eq!(params.get("status"), Some(&json!("paid")));
        assert!(parse_fields(&["broken".to_string()]).is_err());
    }

    #[test]
    fn test_link_args_generate_order_id() {
        let args = LinkArgs {
            sum: "10".into(),
            order_id: None,
            currency: Currency::Usd,
            callback: "cb".into(),
            payment: "cd".into(),
            redirect_to: None,
            success_url: Some("https://shop/ok".into()),
            fail_url: None,
        };
        let request = args.into_request();
        assert!(uuid::Uuid::parse_str(&request.order_id).is_ok());
        assert_eq!(request.currency, Currency::Usd);
        assert_eq!(request.success_url, "https://shop/ok");
        assert_eq!(request.fail_url, "");
    }

    #[test]
    fn test_sign_uses_client_credentials() {
        let config = ClientConfig::from_json_str(r#"{"merchantId": "shop1", "secretWord": "secret"}"#)
            .unwrap();
        let client = build_client(config, None).unwrap();
        assert_eq!(sign(&client, "1", "o"), client.generate_sign("1", "o"));
    }
}
