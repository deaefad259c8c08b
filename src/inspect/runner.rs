use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

/// Directories searched in addition to `PATH`.
const SYSTEM_BIN_DIRS: &[&str] = &[
    "/sbin",
    "/bin",
    "/usr/sbin",
    "/usr/bin",
    "/usr/games",
    "/usr/local/bin",
    "/usr/local/sbin",
    "/usr/local/games",
];

/// Runs inspector programs and locates them on the search path.
pub trait ToolRunner {
    /// Run `program` with `args` and return its standard output.
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<String>;

    fn locate(&self, program: &str) -> Option<PathBuf> {
        find_program(program)
    }
}

/// Runs inspectors as blocking subprocesses.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<String> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;

        // Inspectors exit non-zero for files that merely lack a tag block;
        // whatever they printed is still worth parsing.
        if !output.status.success() {
            debug!("{} exited with {}", program.display(), output.status);
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Find `program` on `PATH` or in the standard system binary directories.
///
/// A name containing a path separator is checked as-is.
pub fn find_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let mut dirs: Vec<PathBuf> = env::var_os("PATH")
        .map(|p| env::split_paths(&p).collect())
        .unwrap_or_default();
    for dir in SYSTEM_BIN_DIRS {
        let dir = PathBuf::from(dir);
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }

    dirs.into_iter()
        .map(|d| d.join(program))
        .find(|p| is_executable(p))
}
