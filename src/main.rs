mod align;
mod config;
mod errors;
mod phonology;
mod scoring;
mod server;

use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tokio::runtime::Builder;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use crate::{phonology::g2p::Lexicon, server::serve};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Extra pronunciation dictionary (word<TAB>ipa per line) merged over
    /// the built-in entries
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    fmt().with_env_filter(env_filter).init();

    let mut lexicon = Lexicon::builtin();
    if let Some(path) = &args.lexicon {
        let added = lexicon
            .load_extra(path)
            .with_context(|| format!("failed to load extra lexicon from {}", path.display()))?;
        info!("merged {added} extra entries from {}", path.display());
    }
    info!("lexicon ready with {} entries", lexicon.len());

    let listen: SocketAddr = args.listen.parse().context("invalid listen address")?;

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime
        .block_on(async { serve(listen, lexicon).await })
        .context("server terminated unexpectedly")
}
