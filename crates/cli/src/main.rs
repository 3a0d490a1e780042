pub(crate) mod args;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod log_args;

use args::{Arguments, Subcommands};
use clap::Parser;
use error::Error;
use log_args::ColorMode;
use tracing::debug;

use assist_config::{config, Configuration};
use assist_properties::props;

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging, keeping the file writer alive until exit
    let _guard = args
        .logs
        .init_tracing()
        .map_err(|e| Error::Generic(format!("failed to initialize logging: {}", e)))?;
    if args.logs.color == ColorMode::Never {
        colored::control::set_override(false);
    }

    let configuration = Configuration::load()
        .map_err(|e| Error::Generic(format!("failed to load configuration: {}", e)))?;
    debug!("loaded configuration: {:?}", configuration);

    match args.sub {
        Subcommands::Props(mut cmd) => {
            // if the user has not specified a file, use the default
            if cmd.file.is_empty() {
                cmd.file = configuration.properties_path;
            }

            let result =
                props(cmd).map_err(|e| Error::Generic(format!("failed to run props: {}", e)))?;
            result
                .display()
                .map_err(|e| Error::Generic(format!("failed to display properties: {}", e)))?;
        }

        Subcommands::Path(cmd) => print_lines(commands::path(cmd)?),

        Subcommands::Env(cmd) => print_lines(commands::env(cmd)?),

        Subcommands::Random(cmd) => println!("{}", commands::random(cmd, &configuration)?),

        Subcommands::Config(cmd) => {
            config(cmd).map_err(|e| Error::Generic(format!("failed to configure: {}", e)))?;
        }
    }

    Ok(())
}
