use std::io::Write;

use tracing::warn;

use crate::config::ToolSettings;
use crate::error::Result;
use crate::inspect::ToolRunner;
use crate::library::AudioFormat;

/// Report which inspectors are installed. Returns the programs not found.
pub fn report<R: ToolRunner, W: Write>(
    runner: &R,
    tools: &ToolSettings,
    quiet: bool,
    out: &mut W,
) -> Result<Vec<String>> {
    let mut missing = Vec::new();
    for format in AudioFormat::ALL {
        let program = tools.program_for(format);
        match runner.locate(program) {
            Some(path) => writeln!(out, "{program}: found {}", path.display())?,
            None => {
                if !quiet {
                    warn!("{program} not found in path. Install?");
                }
                missing.push(program.to_string());
            }
        }
    }
    out.flush()?;
    Ok(missing)
}
