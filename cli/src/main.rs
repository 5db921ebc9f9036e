//! ENOT CLI - Command Line Interface

mod commands;

use clap::{Parser, Subcommand};
use commands::LinkArgs;
use enot_core::Currency;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "enot")]
#[command(about = "ENOT - enot.io merchant CLI")]
#[command(version)]
struct Cli {
    /// Credentials file (JSON with merchantId, secretWord, apiKey, email)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the gateway host
    #[arg(long)]
    host: Option<String>,

    /// Log requests
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List payment methods enabled for the merchant
    Methods,

    /// Show account balance
    Balance,

    /// Request a payout
    Withdraw {
        /// Payout service (e.g. card, qiwi)
        #[arg(short, long)]
        service: String,

        /// Destination wallet or card number
        #[arg(short, long)]
        wallet: String,

        /// Amount to pay out
        #[arg(short, long)]
        amount: String,

        /// Merchant-side payout ID
        #[arg(long)]
        order_id: String,
    },

    /// Query payout status
    WithdrawInfo {
        /// Request field as key=value (repeatable)
        #[arg(short, long = "field")]
        fields: Vec<String>,
    },

    /// Build a signed payment page link
    Link {
        /// Payment amount, signed exactly as written
        #[arg(long)]
        sum: String,

        /// Order ID (a random UUID when omitted)
        #[arg(long)]
        order_id: Option<String>,

        /// Currency: RUB, USD, EUR or UAH
        #[arg(long, default_value = "RUB")]
        currency: Currency,

        /// Callback URL for payment notifications
        #[arg(long)]
        callback: String,

        /// Preselected payment method
        #[arg(long)]
        payment: String,

        /// Redirect after payment
        #[arg(long)]
        redirect_to: Option<String>,

        /// Redirect on success
        #[arg(long)]
        success_url: Option<String>,

        /// Redirect on failure
        #[arg(long)]
        fail_url: Option<String>,
    },

    /// Print the signature for a sum and order ID
    Sign {
        #[arg(long)]
        sum: String,

        #[arg(long)]
        order_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;
    let client = commands::build_client(config, cli.host)?;

    match cli.command {
        Commands::Methods => commands::payment_methods(&client).await?,

        Commands::Balance => commands::balance(&client).await?,

        Commands::Withdraw {
            service,
            wallet,
            amount,
            order_id,
        } => commands::withdraw(&client, &service, &wallet, &amount, &order_id).await?,

        Commands::WithdrawInfo { fields } => commands::withdraw_info(&client, &fields).await?,

        Commands::Link {
            sum,
            order_id,
            currency,
            callback,
            payment,
            redirect_to,
            success_url,
            fail_url,
        } => {
            let args = LinkArgs {
                sum,
                order_id,
                currency,
                callback,
                payment,
                redirect_to,
                success_url,
                fail_url,
            };
            println!("{}", commands::link(&client, args));
        }

        Commands::Sign { sum, order_id } => {
            println!("{}", commands::sign(&client, &sum, &order_id));
        }
    }

    Ok(())
}
