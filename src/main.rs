use anyhow::Result;

use ftc::cli::{build_cli, build_config};

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    ftc::init_logging(matches.get_count("verbose"));

    if matches.get_flag("no-color") {
        colored::control::set_override(false);
    }

    if matches.get_flag("version") {
        return ftc::commands::version();
    }

    let config = build_config(&matches)?;

    match matches.subcommand() {
        Some(("list", _)) => ftc::commands::list(&config),
        Some(("version", _)) => ftc::commands::version(),
        _ => ftc::commands::fetch(&config),
    }
}
