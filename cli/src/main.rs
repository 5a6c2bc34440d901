mod args;
mod dialog;

use args::Args;
use ascii_roundtrip::{FixedPath, PathProvider, resolve_source, run};
use clap::Parser;
use dialog::ImageDialog;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Configure logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Pick the source image
    let mut provider: Box<dyn PathProvider> = match &args.input {
        Some(path) => Box::new(FixedPath(path.clone())),
        None => Box::new(ImageDialog),
    };
    let source = match resolve_source(provider.as_mut()) {
        Ok(path) => path,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // Run the round trip
    let config = args.into_config(source);
    match run(&config) {
        Ok(report) => {
            log::info!(
                "{}x{} image -> {}x{} characters -> {}x{} image",
                report.source_size.0,
                report.source_size.1,
                report.text_size.0,
                report.text_size.1,
                report.output_size.0,
                report.output_size.1
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
