//! Batch subcommand - process a CSV job list.

use crate::archive;
use crate::cli::FetchOpts;
use crate::name;
use eyre::{eyre, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use ytt_dl::video::extract_video_id;
use ytt_dl::TranscriptClient;
use ytt_fmt::{write_transcript, OutputFormat};

/// CLI arguments for batch processing.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// CSV job list (header: URL,format,outputfileName)
    pub jobs: PathBuf,

    /// Output directory
    #[arg(long, default_value = "downloads")]
    pub outdir: PathBuf,

    /// Zip the output directory when done and remove it
    #[arg(long)]
    pub zip: bool,

    #[command(flatten)]
    pub fetch: FetchOpts,
}

/// Resolved configuration for a batch run.
#[derive(Debug)]
pub struct Config {
    pub jobs: PathBuf,
    pub outdir: PathBuf,
    pub zip: bool,
    pub fetch: FetchOpts,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            jobs: args.jobs,
            outdir: args.outdir,
            zip: args.zip,
            fetch: args.fetch,
        })
    }
}

/// One row of the job list. Header names are matched leniently because the
/// lists come from spreadsheets with varying capitalization.
#[derive(Clone, Debug, Deserialize)]
pub struct Job {
    #[serde(alias = "URL", alias = "Url")]
    pub url: String,

    /// Output format name; empty means json
    #[serde(default)]
    pub format: Option<String>,

    #[serde(
        default,
        rename = "outputfileName",
        alias = "outputFileName",
        alias = "output",
        alias = "outfile"
    )]
    pub output_file_name: Option<String>,
}

pub fn execute(config: Config) -> Result<()> {
    let jobs = read_jobs(&config.jobs)?;
    if jobs.is_empty() {
        return Err(eyre!("no jobs found in {:?}", config.jobs.display()));
    }

    std::fs::create_dir_all(&config.outdir).wrap_err_with(|| {
        format!(
            "failed to create output directory: {:?}",
            config.outdir.display()
        )
    })?;

    let client = config.fetch.client()?;

    let mut ok = 0usize;
    let mut failed = 0usize;

    for (job, row) in jobs.iter().zip(1..) {
        tracing::info!(row, url = %job.url, "processing job");

        match process_job(&client, job, &config.outdir, config.fetch.lang.as_deref()) {
            Ok(path) => {
                ok += 1;
                tracing::info!(row, path = ?path.display(), "job finished");
            }
            Err(e) => {
                failed += 1;
                tracing::error!(row, url = %job.url, error = %e, "job failed");
            }
        }
    }

    println!("Batch finished. OK: {ok}, ERR: {failed}");

    if config.zip {
        let zip_path = archive::zip_dir_flat(&config.outdir)?;
        println!("Zip: {}", zip_path.display());
    }
    Ok(())
}

/// Read the CSV job list.
pub fn read_jobs(path: &Path) -> Result<Vec<Job>> {
    let mut reader = csv::Reader::from_path(path)
        .wrap_err_with(|| format!("failed to open job list: {:?}", path.display()))?;

    let mut jobs = Vec::new();
    for row in reader.deserialize() {
        jobs.push(row?);
    }
    Ok(jobs)
}

/// Download and write one job. Shared by batch and playlist modes.
pub fn process_job(
    client: &TranscriptClient,
    job: &Job,
    outdir: &Path,
    lang: Option<&str>,
) -> Result<PathBuf> {
    let format = match job.format.as_deref() {
        None | Some("") => OutputFormat::Json,
        Some(format) => format.parse::<OutputFormat>()?,
    };

    let video_id = extract_video_id(&job.url)?;
    let segments = client.fetch(&video_id, lang)?;

    let file_name = match job.output_file_name.as_deref() {
        Some(requested) if !requested.trim().is_empty() => name::safe_filename(requested),
        _ => name::default_name(video_id.as_str(), format),
    };
    let target = name::with_format_extension(outdir.join(file_name), format);

    write_transcript(&segments, format, &target)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_canonical_header() {
        let (_dir, path) = write_csv(
            "URL,format,outputfileName\n\
             https://youtu.be/aaaaaaaaaaa,srt,first.srt\n\
             https://youtu.be/bbbbbbbbbbb,,\n",
        );

        let jobs = read_jobs(&path).unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].format.as_deref(), Some("srt"));
        assert_eq!(jobs[0].output_file_name.as_deref(), Some("first.srt"));
        assert_eq!(jobs[1].format, None);
        assert_eq!(jobs[1].output_file_name, None);
    }

    #[test]
    fn reads_aliased_header() {
        let (_dir, path) = write_csv(
            "url,format,output\n\
             https://youtu.be/aaaaaaaaaaa,json,custom\n",
        );

        let jobs = read_jobs(&path).unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].url, "https://youtu.be/aaaaaaaaaaa");
        assert_eq!(jobs[0].output_file_name.as_deref(), Some("custom"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_jobs(Path::new("does-not-exist.csv")).is_err());
    }
}
