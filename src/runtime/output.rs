use std::env;
use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::Args;
use crate::error::{Error, Result};

/// Where the playlist goes: `None` is standard output.
pub fn resolve_target(args: &Args, quiet: bool) -> Result<Option<PathBuf>> {
    if args.auto {
        let cwd = env::current_dir()?;
        let name = auto_name(&cwd)?;
        if !quiet {
            info!("{}", name.display());
        }
        return Ok(Some(name));
    }
    Ok(args.file.clone())
}

/// `<dir-name>.m3u` for the given directory.
pub fn auto_name(dir: &Path) -> Result<PathBuf> {
    let base = dir.file_name().ok_or_else(|| {
        Error::InvalidArgument(format!("{} has no name to use for --auto", dir.display()))
    })?;
    let mut name = base.to_os_string();
    name.push(".m3u");
    Ok(PathBuf::from(name))
}

pub fn backup_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".old");
    PathBuf::from(name)
}

/// Open the playlist file for truncating write, first moving an existing
/// file aside to `<file>.old` when `backup_existing` is set.
pub fn create(path: &Path, backup_existing: bool) -> Result<File> {
    let open_err = |source: std::io::Error| Error::OutputOpen {
        path: path.to_path_buf(),
        source,
    };

    if backup_existing && path.is_file() {
        fs::rename(path, backup_path(path)).map_err(open_err)?;
    }
    File::create(path).map_err(open_err)
}
