mod board_view;
mod broadcaster;
mod config;
mod menu;
mod pilot;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::games::snake::Side;
use common::{log, logger};

use config::{get_config_manager, ClientConfig};
use menu::{walk_menu, MenuChoice, MenuOption, COMING_SOON};
use pilot::{Pilot, PilotKind};
use runner::run_duel_rounds;

#[derive(Parser)]
#[command(name = "snake_duel_client")]
struct Args {
    /// YAML config file, `snake_duel_config.yaml` next to the binary by default
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    pilot: Option<PilotKind>,
    /// Comma-separated `frame:action` pairs, e.g. `30:up,90:left`
    #[arg(long)]
    script: Option<String>,
    #[arg(long)]
    rounds: Option<u32>,
    /// Print the final board of every round
    #[arg(long)]
    render: bool,
    /// Color the printed boards
    #[arg(long)]
    color: bool,
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
    /// Main menu entries to pick, one per visit; the client returns to the menu after each duel
    #[arg(long, value_enum, value_delimiter = ',', default_value = "human-vs-ai")]
    menu: Vec<MenuOption>,
    /// Write the effective configuration back to the config file
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(pilot) = args.pilot {
        config.pilot = pilot;
    }
    if args.script.is_some() {
        config.script = args.script;
    }
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    config.render |= args.render;
    config.color |= args.color;
    config.verbose |= args.verbose;
    config.validate()?;

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, config.verbose);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Configuration saved");
    }

    for choice in walk_menu(&args.menu) {
        match choice {
            MenuChoice::StartDuel => {
                play_duel(&config).await;
                log!("Returning to the main menu");
            }
            MenuChoice::NetworkUnavailable => log!("{}", COMING_SOON),
            MenuChoice::Quit => log!("Bye"),
        }
    }

    Ok(())
}

async fn play_duel(config: &ClientConfig) {
    log!(
        "Starting {} round(s) on a {}x{} board with the {:?} pilot",
        config.rounds,
        config.board().width,
        config.board().height,
        config.pilot
    );
    let pilot = Pilot::new(config.pilot, config.script.as_deref());
    let summaries = run_duel_rounds(config, pilot).await;

    let player_wins = summaries
        .iter()
        .filter(|s| s.outcome.is_some_and(|o| o.winner == Side::Player))
        .count();
    log!("Player won {} of {} round(s)", player_wins, summaries.len());
}
