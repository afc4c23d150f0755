mod identity;
mod inspector;
mod mode;
mod report;
mod security;
mod types;

use clap::Parser;
use identity::{Capabilities, IdentityResolver};
use inspector::InspectError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Show permissions and ownership of a file or directory", long_about = None)]
struct Args {
    /// File or directory to inspect
    #[arg(default_value = ".")]
    path: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let resolver = IdentityResolver::new(Capabilities::get());

    match inspector::inspect(&args.path, &resolver) {
        Ok(report) => {
            println!("{}", report::render_report(&report));
            ExitCode::SUCCESS
        }
        Err(InspectError::NotFound { path }) => {
            eprintln!("{}", report::render_not_found(&path));
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
