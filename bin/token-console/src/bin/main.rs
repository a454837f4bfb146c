use action::{Executor, WalletSubmitter};
use alloy_primitives::Address;
use alloy_provider::Provider;
use clap::Parser;
use std::path::PathBuf;
use token::TokenContract;
use token_console::{
    config::{Config, ConfigError},
    App, Console,
};
use tracing::{info, warn};

/// Interactive console for an ERC-20 token on Sepolia.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RPC endpoint, overrides the config file
    #[arg(long)]
    rpc_url: Option<String>,

    /// Token contract address, overrides the config file
    #[arg(long)]
    token: Option<Address>,

    /// Hex private key of the account to act as
    #[arg(short = 'k', long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Invalid answers accepted per prompt before the action is cancelled
    #[arg(long)]
    max_input_attempts: Option<u32>,
}

impl Cli {
    fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(rpc_url) = &self.rpc_url {
            config.rpc_url = Some(rpc_url.clone());
        }
        if let Some(token) = self.token {
            config.token_address = Some(token);
        }
        if let Some(attempts) = self.max_input_attempts {
            config.max_input_attempts = Some(attempts);
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let network = config.network_config();
    if !network.has_token() {
        return Err(ConfigError::TokenNotConfigured.into());
    }

    info!(rpc_url = %network.rpc_url, token = %network.token, "Loaded config");

    let mut console = Console::stdio();
    console.say("=== Token Console ===\n").await?;

    let provider = client::create_provider(&network.rpc_url).await?;
    match provider.get_chain_id().await {
        Ok(chain_id) if chain_id != network.chain_id => {
            warn!(expected = network.chain_id, actual = chain_id, "RPC serves an unexpected chain");
        }
        Ok(_) => {}
        Err(e) => warn!("Failed to query chain id: {}", e),
    }

    console.say("--- Step 1: Getting Account Information ---").await?;
    let account = client::resolve_account(&provider, cli.private_key.as_deref()).await?;
    console
        .say(format!("Account Address: {}", account.address))
        .await?;
    console.say(format!("Account Type: {}", account.kind)).await?;
    console
        .say(format!("ETH Balance: {} ETH\n", account.balance))
        .await?;

    console.say("--- Step 2: Getting Token Information ---").await?;
    let reader = TokenContract::new(provider, network.token);
    let token_info = token::token_info(&reader).await?;

    let wallet = client::create_wallet_provider(&network.rpc_url, account.signer().clone())?;
    let submitter = WalletSubmitter::new(wallet, network.token);
    let executor = Executor::new(reader, submitter).with_receipt_timeout(config.receipt_timeout());

    let mut app = App::new(executor, console, account.address, token_info)
        .with_max_attempts(config.max_input_attempts());
    app.print_token_info().await?;
    app.print_opening_balance().await?;
    app.run().await?;

    Ok(())
}
