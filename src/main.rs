// SPDX-License-Identifier: MPL-2.0
use poster_gallery::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
poster_gallery - virtual poster exhibition

USAGE:
  poster_gallery [OPTIONS]

OPTIONS:
  --lang <ID>          Interface language (e.g. en-US, fr)
  --section <ID>       Start section: home or gallery
  --config-dir <DIR>   Directory holding settings.toml
  --assets-dir <DIR>   Directory holding the poster images
  -h, --help           Print this help

ENVIRONMENT:
  POSTER_GALLERY_CONFIG_DIR, POSTER_GALLERY_ASSETS_DIR, RUST_LOG
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

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        section: opt_string(&mut args, "--section"),
        config_dir: opt_string(&mut args, "--config-dir"),
        assets_dir: opt_string(&mut args, "--assets-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%key, error = %err, "invalid command line value");
            None
        }
    }
}
