use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dictionary::{Dictionary, ReqwestClient};
use tracing_subscriber::EnvFilter;

use config::Config;
use form::DefinitionForm;

mod config;
mod form;
mod render;
mod repl;
mod server;

#[derive(Parser)]
#[command(name = "dictionary-form", version, about = "Look up English word definitions.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the definition form over HTTP
    Serve {
        /// Address to listen on (overrides LISTEN_ADDR)
        #[arg(short, long)]
        addr: Option<SocketAddr>,
    },
    /// Interactive prompt (default)
    Repl,
    /// Print the definition of a single word and exit
    Define {
        word: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            eprintln!("Failed to load dotenv file: {error}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let dictionary = Dictionary::with_client(Arc::new(ReqwestClient::default()), config.api_url)?;
    tracing::debug!(api = %dictionary.base_url(), "dictionary ready");
    let form = DefinitionForm::new(dictionary);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Serve { addr } => {
            server::serve(form, addr.unwrap_or(config.listen_addr)).await?;
        }
        Command::Repl => {
            repl::run(&form).await?;
        }
        Command::Define { word } => {
            repl::define_word(&form, &word.join(" "), &mut std::io::stdout()).await?;
        }
    }
    Ok(())
}
