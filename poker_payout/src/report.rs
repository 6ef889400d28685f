//! Plain-text rendering of payout plans and ledger summaries.
//!
//! This is the only place amounts are rounded to cents.

use crate::{
    ledger::{LedgerSummary, PaymentLedger, PlayerRecord},
    tournament::models::{Dollars, PayoutPlan},
};
use std::fmt::Write;

/// Format dollars with two decimals, e.g. `$51.43`
pub fn format_usd(amount: Dollars) -> String {
    if amount.abs() < 0.005 {
        // rounding residue and -0.0 would otherwise print as "$-0.00"
        return "$0.00".to_string();
    }
    if amount < 0.0 {
        return format!("-${:.2}", -amount);
    }
    format!("${amount:.2}")
}

/// English ordinal for a finishing position: 1st, 2nd, 3rd, 4th, 11th, 21st...
pub fn ordinal(position: usize) -> String {
    let suffix = if (10..=20).contains(&(position % 100)) {
        "th"
    } else {
        match position % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{position}{suffix}")
}

/// Full payout report for a plan
pub fn render_payouts(plan: &PayoutPlan, players: u32) -> String {
    let mut out = String::new();
    let rule = "=".repeat(50);

    // write! into a String cannot fail
    let _ = writeln!(out, "POKER TOURNAMENT PAYOUT RESULTS");
    let _ = writeln!(out, "{rule}\n");
    let _ = writeln!(out, "Total Players: {players}");
    let _ = writeln!(out, "Main Prize Pool: {}", format_usd(plan.prize_pool));
    let _ = writeln!(out, "Food Pool: {}", format_usd(plan.food_pool));
    let _ = writeln!(out, "Bounty Pool: {}", format_usd(plan.bounty_pool));
    let _ = writeln!(out, "Total Collected: {}\n", format_usd(plan.total_pool));

    let _ = writeln!(out, "MAIN TOURNAMENT PAYOUTS ({} paid):", plan.paying_positions);
    let _ = writeln!(out, "{}", "-".repeat(30));
    for payout in &plan.payouts {
        let _ = writeln!(
            out,
            "{:>5} Place: {:>10}  (weight {}, {:.1}%)",
            ordinal(payout.position),
            format_usd(payout.amount),
            payout.weight,
            payout.share * 100.0
        );
    }

    let _ = writeln!(out, "\nADDITIONAL POOLS:");
    let _ = writeln!(out, "{}", "-".repeat(20));
    let _ = writeln!(
        out,
        "Food Pool: {} (to be used for food/drinks)",
        format_usd(plan.food_pool)
    );
    let _ = writeln!(
        out,
        "Bounty Pool: {} ({} per player)",
        format_usd(plan.bounty_pool),
        format_usd(plan.bounty_per_knockout)
    );
    let _ = writeln!(
        out,
        "   Each knockout earns {}",
        format_usd(plan.bounty_per_knockout)
    );

    let _ = writeln!(out, "\nPAYOUT BREAKDOWN:");
    let _ = writeln!(out, "{}", "-".repeat(20));
    let _ = writeln!(out, "Total Main Payouts: {}", format_usd(plan.total_paid()));
    let _ = writeln!(out, "Remaining in Main Pool: {}", format_usd(plan.remainder()));
    out
}

fn mark(flag: bool) -> char {
    if flag { 'x' } else { ' ' }
}

fn render_record(record: &PlayerRecord) -> String {
    format!(
        "{:>3}. {:<20} [{}] buy-in [{}] food [{}] bounty [{}] all | [{}] out [{}] paid out",
        record.position + 1,
        record.name,
        mark(record.paid_buy_in),
        mark(record.paid_food),
        mark(record.paid_bounty),
        mark(record.all),
        mark(record.eliminated),
        mark(record.payed_out),
    )
}

/// Player-by-player ledger followed by the reconciliation summary
pub fn render_ledger(ledger: &PaymentLedger, summary: &LedgerSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "PLAYER PAYMENTS");
    let _ = writeln!(out, "{}", "-".repeat(30));
    for record in ledger.records() {
        let _ = writeln!(out, "{}", render_record(record));
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Collected: {} of {} ({:.1}%)",
        format_usd(summary.total_paid),
        format_usd(summary.total_pool),
        summary.percent_paid
    );
    let _ = writeln!(out, "Outstanding: {}", format_usd(summary.outstanding()));
    let _ = writeln!(
        out,
        "Players remaining: {} of {}",
        summary.active_players,
        ledger.len()
    );
    let _ = writeln!(out, "Paid out: {}", summary.payed_out_count);
    out
}
