use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

mod cli;
mod config;
mod error;
mod inspect;
mod library;
mod playlist;
mod runtime;
mod summary;

use error::exit;

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(exit::EPERM as u8))
}

fn main() -> ExitCode {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_code(exit::OK),
                _ => exit_code(exit::EINVAL),
            };
        }
    };

    match runtime::run(args) {
        Ok(()) => exit_code(exit::OK),
        Err(e) => {
            // Fatal errors are reported even in quiet mode.
            eprintln!("playlist: {e}");
            exit_code(e.exit_code())
        }
    }
}
