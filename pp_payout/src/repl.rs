//! Line-oriented interactive session.
//!
//! Reads commands, applies them to a [`TournamentSession`] and prints the
//! recomputed payouts or ledger summary after every change.

use crate::commands::{Command, HELP, PayTarget, parse_command};
use anyhow::{Context, Result};
use log::debug;
use poker_payout::{
    TournamentSession,
    report::{format_usd, render_ledger, render_payouts},
    tournament::{MAX_PLAYERS, MIN_PLAYERS, SessionResult},
};
use std::io::{BufRead, Write};

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the session until `quit` or end of input
pub fn run<R: BufRead, W: Write>(
    session: &mut TournamentSession,
    input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Type 'help' for commands.")?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if !line.trim().is_empty() {
            match parse_command(&line) {
                Ok(command) => {
                    debug!("Command: {:?}", command);
                    if execute(session, command, output)? == Flow::Quit {
                        return Ok(());
                    }
                }
                Err(e) => writeln!(output, "{e}")?,
            }
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}

/// Apply one command and print the recomputed view.
///
/// Errors from the payout engine or ledger are shown to the user and do not
/// end the session; only I/O failures are returned.
pub fn execute<W: Write>(
    session: &mut TournamentSession,
    command: Command,
    output: &mut W,
) -> Result<Flow> {
    let applied: SessionResult<View> = match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => {
            write!(output, "{HELP}")?;
            return Ok(Flow::Continue);
        }
        Command::ShowPayouts => Ok(View::Payouts),
        Command::ShowLedger => Ok(View::Ledger),
        Command::ShowJson => Ok(View::Json),
        Command::ShowWeights => Ok(View::Weights),
        Command::SetPlayers(n) if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => {
            writeln!(
                output,
                "Error: Player count must be between {MIN_PLAYERS} and {MAX_PLAYERS} (got {n})"
            )?;
            return Ok(Flow::Continue);
        }
        Command::SetPlayers(n) => session.set_players(n).map(|_| View::Payouts),
        Command::SetBuyIn(x) => session.set_buy_in(x).map(|_| View::Payouts),
        Command::SetFood(x) => session.set_food_per_player(x).map(|_| View::Payouts),
        Command::SetBounty(x) => session.set_bounty_per_player(x).map(|_| View::Payouts),
        Command::AddWeight(None) => {
            session.append_weight();
            Ok(View::Weights)
        }
        Command::AddWeight(Some(v)) => session.append_weight_value(v).map(|_| View::Weights),
        Command::RemoveWeight => session.remove_last_weight().map(|_| View::Weights),
        Command::SetWeight { index, value } => {
            session.set_weight(index, value).map(|_| View::Weights)
        }
        Command::ResetWeights => {
            session.reset_weights();
            Ok(View::Weights)
        }
        Command::ReplaceWeights(weights) => {
            session.set_weights(weights);
            Ok(View::Weights)
        }
        Command::Pay {
            index,
            target: PayTarget::All,
            value,
        } => session.set_all_flag(index, value).map(|_| View::Summary),
        Command::Pay {
            index,
            target: PayTarget::Field(field),
            value,
        } => session
            .set_payment_flag(index, field, value)
            .map(|_| View::Summary),
        Command::Eliminate { index, value } => {
            session.set_eliminated(index, value).map(|_| View::Summary)
        }
        Command::PayOut { index, value } => {
            session.set_payed_out(index, value).map(|_| View::Summary)
        }
        Command::Rename { index, name } => {
            session.rename_player(index, name).map(|_| View::Ledger)
        }
    };

    match applied {
        Ok(view) => show(session, view, output)?,
        Err(e) => writeln!(output, "Error: {e}")?,
    }
    Ok(Flow::Continue)
}

/// What to print after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Payouts,
    Weights,
    Ledger,
    Summary,
    Json,
}

fn show<W: Write>(session: &TournamentSession, view: View, output: &mut W) -> Result<()> {
    match view {
        View::Payouts => match session.payout_plan() {
            Ok(plan) => write!(output, "{}", render_payouts(&plan, session.config().players))?,
            Err(e) => writeln!(output, "Error: {}", e.user_message())?,
        },
        View::Weights => {
            let weights = session.weights();
            writeln!(output, "Current weights: {weights}")?;
            if let Ok(plan) = session.payout_plan() {
                writeln!(
                    output,
                    "(Will use first {} positions based on player count)",
                    plan.paying_positions
                )?;
            }
        }
        View::Ledger => {
            let summary = session.summary();
            write!(output, "{}", render_ledger(session.ledger(), &summary))?;
        }
        View::Summary => {
            let summary = session.summary();
            writeln!(
                output,
                "Collected {} of {} ({:.1}%), {} remaining, {} paid out",
                format_usd(summary.total_paid),
                format_usd(summary.total_pool),
                summary.percent_paid,
                summary.active_players,
                summary.payed_out_count
            )?;
        }
        View::Json => {
            let plan = match session.payout_plan() {
                Ok(plan) => plan,
                Err(e) => {
                    writeln!(output, "Error: {}", e.user_message())?;
                    return Ok(());
                }
            };
            let json = serde_json::json!({
                "config": session.config(),
                "plan": plan,
                "ledger": session.ledger().records(),
                "summary": session.summary(),
            });
            writeln!(output, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}
