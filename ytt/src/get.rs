//! Get subcommand - download a single video transcript.

use crate::cli::FetchOpts;
use crate::name;
use color_eyre::Section;
use eyre::{Context, Result};
use std::path::PathBuf;
use ytt_dl::video::extract_video_id;
use ytt_fmt::{write_transcript, OutputFormat};

/// CLI arguments for single-video download.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// YouTube video URL (or bare video id)
    pub url: String,

    /// Output format
    #[arg(short, long, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output path (default: <VIDEOID>_transcript.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub fetch: FetchOpts,
}

/// Resolved configuration for single-video download.
#[derive(Debug)]
pub struct Config {
    pub url: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub fetch: FetchOpts,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            url: args.url,
            format: args.format,
            output: args.output,
            fetch: args.fetch,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let video_id = extract_video_id(&config.url)?;

    // Resolve output path
    let output = config
        .output
        .unwrap_or_else(|| PathBuf::from(name::default_name(video_id.as_str(), config.format)));
    let output = name::with_format_extension(output, config.format);

    tracing::info!(
        video = %video_id,
        format = %config.format,
        output = ?output.display(),
        "fetching transcript"
    );

    let client = config.fetch.client()?;
    let segments = client
        .fetch(&video_id, config.fetch.lang.as_deref())
        .wrap_err_with(|| format!("failed to fetch transcript for {video_id}"))
        .with_suggestion(|| "pass --lang to pick one of the listed caption languages")?;

    tracing::info!(segments = segments.len(), "transcript fetched");

    write_transcript(&segments, config.format, &output)
        .wrap_err_with(|| format!("failed to write transcript: {:?}", output.display()))?;

    println!("Saved: {}", output.display());
    Ok(())
}
