//! Playlist subcommand - download transcripts for every playlist entry.

use crate::archive;
use crate::batch::{process_job, Job};
use crate::cli::FetchOpts;
use crate::name;
use eyre::{Context, Result};
use std::path::PathBuf;
use ytt_dl::{PlaylistEntry, TranscriptClient};
use ytt_fmt::OutputFormat;

/// CLI arguments for playlist processing.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// YouTube playlist URL
    pub url: String,

    /// Output format for every entry
    #[arg(short, long, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Filename template with {index}, {video_id}, {title}, {ext}
    #[arg(long)]
    pub template: Option<String>,

    /// Output directory
    #[arg(long, default_value = "downloads")]
    pub outdir: PathBuf,

    /// Skip entries whose target file already exists
    #[arg(long)]
    pub skip_existing: bool,

    /// Zip the output directory when done and remove it
    #[arg(long)]
    pub zip: bool,

    #[command(flatten)]
    pub fetch: FetchOpts,
}

/// Resolved configuration for a playlist run.
#[derive(Debug)]
pub struct Config {
    pub url: String,
    pub format: OutputFormat,
    pub template: Option<String>,
    pub outdir: PathBuf,
    pub skip_existing: bool,
    pub zip: bool,
    pub fetch: FetchOpts,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            url: args.url,
            format: args.format,
            template: args.template,
            outdir: args.outdir,
            skip_existing: args.skip_existing,
            zip: args.zip,
            fetch: args.fetch,
        })
    }
}

/// Per-entry outcome counts of a playlist run.
#[derive(Debug, Default, Eq, PartialEq)]
struct Summary {
    ok: usize,
    failed: usize,
    skipped: usize,
}

pub fn execute(config: Config) -> Result<()> {
    let client = config.fetch.client()?;

    tracing::info!(url = %config.url, "expanding playlist");
    let entries = client.playlist_entries(&config.url)?;
    tracing::info!(entries = entries.len(), "playlist expanded");

    std::fs::create_dir_all(&config.outdir).wrap_err_with(|| {
        format!(
            "failed to create output directory: {:?}",
            config.outdir.display()
        )
    })?;

    let summary = process_entries(&client, &config, &entries);
    println!(
        "Playlist finished. OK: {}, ERR: {}, SKIPPED: {}",
        summary.ok, summary.failed, summary.skipped
    );

    if config.zip {
        let zip_path = archive::zip_dir_flat(&config.outdir)?;
        println!("Zip: {}", zip_path.display());
    }
    Ok(())
}

/// Download every entry, skipping existing targets when configured.
fn process_entries(
    client: &TranscriptClient,
    config: &Config,
    entries: &[PlaylistEntry],
) -> Summary {
    let total = entries.len();
    let mut summary = Summary::default();

    for (entry, index) in entries.iter().zip(1..) {
        let file_name = name::apply_template(
            config.template.as_deref(),
            index,
            &entry.video_id,
            &entry.title,
            config.format,
        );
        let target = config.outdir.join(&file_name);

        if config.skip_existing && target.exists() {
            summary.skipped += 1;
            tracing::info!(index, total, file = %file_name, "skipping existing");
            continue;
        }

        tracing::info!(index, total, video = %entry.video_id, file = %file_name, "processing entry");

        let job = Job {
            url: entry.url(),
            format: Some(config.format.extension().to_string()),
            output_file_name: Some(file_name),
        };

        match process_job(client, &job, &config.outdir, config.fetch.lang.as_deref()) {
            Ok(path) => {
                summary.ok += 1;
                tracing::info!(path = ?path.display(), "entry finished");
            }
            Err(e) => {
                summary.failed += 1;
                tracing::error!(video = %entry.video_id, error = %e, "entry failed");
            }
        }
    }
    summary
}
