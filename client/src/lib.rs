//! ENOT SDK HTTP Client
//!
//! Talks to the enot.io merchant API:
//! - `ApiTransport` sends query-string requests with bounded timeouts
//! - `PaymentClient` signs payment links and wraps the merchant endpoints
//!
//! ```rust,no_run
//! # use enot_client::{PaymentClient, PaymentLinkRequest};
//! # use enot_core::ClientConfig;
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let client = PaymentClient::new(config)?;
//!
//! let balance = client.get_balance().await?;
//! println!("{:?}", balance.get("balance"));
//!
//! let link = client.generate_payment_link(
//!     &PaymentLinkRequest::new("100.00", "order42", "https://shop.example/callback", "cd"),
//! );
//! println!("{}", link);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod query;
pub mod transport;
pub mod link;
pub mod payment;

pub use error::*;
pub use query::*;
pub use transport::*;
pub use link::*;
pub use payment::*;
