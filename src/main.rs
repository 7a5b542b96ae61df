// SPDX-License-Identifier: MPL-2.0
use rollcall::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
RollCall - student registration form

USAGE:
  rollcall [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
  --lang <LOCALE>          Interface language (e.g. en-US, fr)
  --config-dir <PATH>      Directory holding settings.toml

ENVIRONMENT:
  ROLLCALL_CONFIG_DIR      Same as --config-dir (the flag wins)
  RUST_LOG                 Log filter (default: info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
