use anyhow::Result;
use authnz_client::{ClientConfig, ConnectedIdentity, IdentityClient};
use clap::{Parser, Subcommand};
use tracing::info;

/// Manage the external identities connected to your account
#[derive(Parser, Debug)]
#[command(name = "authnz", version)]
struct Cli {
    /// Application root URL (overrides AUTHNZ_ROOT_URL)
    #[arg(long)]
    root: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the identity providers
    List,
    /// Disconnect the identity linked through a provider
    Disconnect { provider: String },
    /// Print the URL that starts a login with a provider
    Login { provider: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(root) = cli.root {
        config.root_url = root;
    }

    authnz_client::telemetry::init(&config.log_format);
    info!("Using application root {}", config.root_url);

    let client = IdentityClient::from_config(&config)?;

    match cli.command {
        Command::List => {
            for provider in client.list_providers().await?.iter() {
                match provider.display_name() {
                    Some(name) => println!("{}\t{}", provider.provider(), name),
                    None => println!("{}", provider.provider()),
                }
            }
        }
        Command::Disconnect { provider } => {
            client
                .disconnect_identity(Some(&ConnectedIdentity::new(provider)))
                .await?;
        }
        Command::Login { provider } => {
            let redirect = client.begin_login(&provider).await?;
            println!("{}", redirect.redirect_uri);
        }
    }

    Ok(())
}
