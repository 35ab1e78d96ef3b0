use clap::Parser;
use ipv4_info::cli::{error_line, run, Cli};
use ipv4_info::config::Config;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env();
    let cli = Cli::parse();
    config.init_logging()?;
    log::info!("#Start main()");

    match run(&cli) {
        Ok(report) => {
            print!("{report}");
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", error_line(err.as_ref()));
            std::process::exit(1);
        }
    }
}
