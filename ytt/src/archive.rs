//! Zip archiving of batch output directories.

use eyre::{Context, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Zip every file of `dir` flat into `<dir>.zip`, then remove the directory.
///
/// Files are stored without a directory prefix, matching how consumers
/// expect to unpack a batch run.
pub fn zip_dir_flat(dir: &Path) -> Result<PathBuf> {
    let zip_path = dir.with_extension("zip");
    let file = File::create(&zip_path)
        .wrap_err_with(|| format!("failed to create archive: {:?}", zip_path.display()))?;

    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        zip.start_file(name, options)?;
        let mut input = File::open(entry.path())?;
        io::copy(&mut input, &mut zip)?;
    }
    zip.finish()?;

    std::fs::remove_dir_all(dir)
        .wrap_err_with(|| format!("failed to remove archived directory: {:?}", dir.display()))?;

    tracing::info!(path = ?zip_path.display(), "created archive");
    Ok(zip_path)
}
