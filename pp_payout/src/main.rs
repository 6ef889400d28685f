//! A command-line payout calculator for home poker tournaments.
//!
//! Prints the payout report for the configured tournament, or runs an
//! interactive session for tracking payments, knockouts and payouts.

use anyhow::{Context, Result};
use ctrlc::set_handler;
use log::info;
use pico_args::Arguments;
use poker_payout::{TournamentSession, report::render_payouts};
use pp_payout::{
    config::{ConfigOverrides, PayoutConfig},
    repl,
};
use std::io;

const HELP: &str = "\
Calculate poker tournament payouts

USAGE:
  pp_payout [OPTIONS]

OPTIONS:
  --players N       Number of players (3-30)     [default: env PAYOUT_PLAYERS or 9]
  --buy-in X        Buy-in per player            [default: env PAYOUT_BUY_IN or 20]
  --food X          Food pool per player         [default: env PAYOUT_FOOD or 5]
  --bounty X        Bounty per player            [default: env PAYOUT_BOUNTY or 2]
  --weights LIST    Comma-separated weights      [default: env PAYOUT_WEIGHTS or 35,20,15,10,8,6,3,2,1]

FLAGS:
  --json            Print the payout plan as JSON
  -i, --interactive Track payments in an interactive session
  -h, --help        Print help information

ENVIRONMENT:
  RUST_LOG          Log level (e.g., debug)
  (Variables may also be set in a .env file)
";

struct Args {
    overrides: ConfigOverrides,
    json: bool,
    interactive: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        json: pargs.contains("--json"),
        interactive: pargs.contains(["-i", "--interactive"]),
        overrides: ConfigOverrides {
            players: pargs.opt_value_from_str("--players")?,
            buy_in: pargs.opt_value_from_str("--buy-in")?,
            food_per_player: pargs.opt_value_from_str("--food")?,
            bounty_per_player: pargs.opt_value_from_str("--bounty")?,
            weights: pargs.opt_value_from_str("--weights")?,
        },
    };

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    env_logger::builder().format_target(false).init();

    run(args)
}

fn run(args: Args) -> Result<()> {
    let config = PayoutConfig::from_env(args.overrides).context("Failed to load configuration")?;
    config.validate()?;
    info!(
        "Tournament: {} players, buy-in {}, food {}, bounty {}, weights [{}]",
        config.tournament.players,
        config.tournament.buy_in,
        config.tournament.food_per_player,
        config.tournament.bounty_per_player,
        config.weights
    );

    let mut session = TournamentSession::with_weights(config.tournament, config.weights)
        .context("Invalid tournament configuration")?;

    if args.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        return repl::run(&mut session, stdin.lock(), &mut stdout);
    }

    let plan = session
        .payout_plan()
        .context("Failed to compute payouts")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_payouts(&plan, session.config().players));
    }
    Ok(())
}
