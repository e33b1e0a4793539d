//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;
use ytt_dl::TranscriptClient;

#[derive(Debug, Parser)]
#[command(name = "ytt")]
#[command(about = "Download YouTube transcripts as txt, json, srt, vtt, csv, docx, or pdf")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download the transcript of a single video
    Get(crate::get::Args),

    /// Process a CSV job list of videos
    Batch(crate::batch::Args),

    /// Download transcripts for every video of a playlist
    Playlist(crate::playlist::Args),
}

/// Retrieval options shared by all subcommands.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct FetchOpts {
    /// Preferred caption language code (e.g. en)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// HTTP proxy for all requests (host:port or full URL)
    #[arg(long)]
    pub proxy: Option<String>,
}

impl FetchOpts {
    /// Build a transcript client honoring the proxy option.
    pub fn client(&self) -> Result<TranscriptClient> {
        let client = match self.proxy.as_deref() {
            Some(proxy) => TranscriptClient::with_proxy(proxy)?,
            None => TranscriptClient::new()?,
        };
        Ok(client)
    }
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Get(args) => crate::get::execute(args.try_into()?),
        Commands::Batch(args) => crate::batch::execute(args.try_into()?),
        Commands::Playlist(args) => crate::playlist::execute(args.try_into()?),
    }
}
