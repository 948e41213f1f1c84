// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Iced Gallery: photo gallery with lightbox and animated grid/list layouts

USAGE:
  iced_gallery [OPTIONS] [DIRECTORY]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --data-dir <PATH>     Directory for the saved state
  --config-dir <PATH>   Directory for settings.toml
  -h, --help            Print this help

ENVIRONMENT:
  RUST_LOG              Log filter (default: info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(error) => {
            tracing::error!(%error, "invalid arguments");
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let directory = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    Ok(Flags {
        lang,
        directory,
        data_dir,
        config_dir,
    })
}
