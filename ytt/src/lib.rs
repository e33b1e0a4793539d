//! YouTube transcript downloader CLI.

pub mod archive;
pub mod batch;
pub mod cli;
pub mod get;
pub mod name;
pub mod playlist;
