use clap::Parser;
use text_analyzer::app::{handle_fatal_error, init_logging, AppConfig};
use text_analyzer::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::new(cli.verbose, cli.config.as_deref()) {
        Ok(config) => config.with_format(cli.format),
        Err(e) => handle_fatal_error(e, cli.verbose),
    };

    init_logging(&config);

    if let Err(e) = execute_command(cli.command, &config) {
        handle_fatal_error(e, cli.verbose);
    }
}
