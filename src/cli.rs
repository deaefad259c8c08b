//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "playlist")]
#[command(about = "Create an M3U-EXT playlist from flac, mp3, ogg or m4a files")]
#[command(
    long_about = "Create an M3U-EXT playlist from flac, mp3, ogg or m4a files.\n\n\
                  If no path is given the current directory is used. The playlist \
                  goes to standard output unless --file or --auto is given."
)]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Print version information and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Suppress warnings and info messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the playlist to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Use <current-dir>.m3u as the playlist file
    #[arg(short, long, conflicts_with = "file")]
    pub auto: bool,

    /// Recursively descend into directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Randomize the playlist order
    #[arg(short = 'R', long)]
    pub random: bool,

    /// Check the system for the metadata inspectors and exit
    #[arg(
        short,
        long,
        conflicts_with_all = ["file", "auto", "recursive", "random", "paths"]
    )]
    pub check: bool,

    /// Audio files and directories to include
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}
