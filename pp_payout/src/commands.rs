use poker_payout::{PaymentField, WeightSet};
use std::fmt;

/// What a `pay` command marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayTarget {
    Field(PaymentField),
    All,
}

/// A command typed into the interactive session.
///
/// Player numbers and weight positions are converted from the 1-based form the
/// user types to 0-based indices.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetPlayers(u32),
    SetBuyIn(f64),
    SetFood(f64),
    SetBounty(f64),
    ShowWeights,
    AddWeight(Option<i64>),
    RemoveWeight,
    SetWeight { index: usize, value: i64 },
    ResetWeights,
    ReplaceWeights(WeightSet),
    Pay { index: usize, target: PayTarget, value: bool },
    Eliminate { index: usize, value: bool },
    PayOut { index: usize, value: bool },
    Rename { index: usize, name: String },
    ShowPayouts,
    ShowLedger,
    ShowJson,
    Help,
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Missing or malformed numeric argument.
    InvalidNumber(String),
    /// Player number missing, zero, or not a number.
    InvalidPlayer(String),
    /// Unknown payment field in a `pay` command.
    InvalidField(String),
    /// Expected `on` or `off`.
    InvalidToggle(String),
    /// Weight list could not be parsed.
    InvalidWeights(String),
    /// Rename without a name.
    MissingName,
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber(value) => write!(
                f,
                "Invalid number '{}'. Expected a value like '20' or '12.50'",
                value
            ),
            Self::InvalidPlayer(value) => write!(
                f,
                "Invalid player '{}'. Use the player number shown in 'ledger' (e.g., 'elim 3')",
                value
            ),
            Self::InvalidField(value) => write!(
                f,
                "Unknown payment '{}'. Use buyin, food, bounty or all",
                value
            ),
            Self::InvalidToggle(value) => {
                write!(f, "Expected 'on' or 'off', got '{}'", value)
            }
            Self::InvalidWeights(reason) => write!(
                f,
                "{}. Enter comma-separated positive integers (e.g., 'weights = 35,20,15')",
                reason
            ),
            Self::MissingName => write!(f, "Rename requires a name (e.g., 'name 2 Alice')"),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Type 'help' to see available commands",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Help text for the interactive session
pub const HELP: &str = "\
Tournament setup:
  players N                 Set the player count (ledger grows/shrinks)
  buyin X | food X | bounty X
                            Set per-player amounts

Payout weights:
  weights                   Show current weights
  weights add [N]           Add a position (weight 1 by default)
  weights remove            Remove the last position
  weights set POS N         Change the weight of a position
  weights reset             Restore 35,20,15,10,8,6,3,2,1
  weights = 35,20,15        Replace all weights

Player ledger (P = player number):
  pay P buyin|food|bounty|all [on|off]
  elim P [on|off]           Mark eliminated
  out P [on|off]            Mark paid out
  name P TEXT               Rename a player

Views:
  payouts | ledger | json | help | quit
";

/// Parse a command string into a Command.
///
/// # Arguments
///
/// * `input` - The raw command string from user input
///
/// # Returns
///
/// * `Ok(Command)` - Successfully parsed command
/// * `Err(ParseError)` - Parse error with descriptive message
///
/// # Examples
///
/// ```
/// use pp_payout::commands::{parse_command, Command, PayTarget};
/// use poker_payout::PaymentField;
///
/// assert!(matches!(parse_command("payouts"), Ok(Command::ShowPayouts)));
/// assert!(matches!(parse_command("players 12"), Ok(Command::SetPlayers(12))));
/// assert_eq!(
///     parse_command("pay 3 food"),
///     Ok(Command::Pay { index: 2, target: PayTarget::Field(PaymentField::Food), value: true })
/// );
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();

    // Try single-word commands first
    match trimmed {
        "payouts" => return Ok(Command::ShowPayouts),
        "ledger" => return Ok(Command::ShowLedger),
        "json" => return Ok(Command::ShowJson),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "weights" => return Ok(Command::ShowWeights),
        _ => {}
    }

    // Parse multi-word commands
    let parts: Vec<&str> = trimmed.split_ascii_whitespace().collect();
    match parts.first() {
        Some(&"players") => {
            let value = arg(&parts, 1)?;
            value
                .parse()
                .map(Command::SetPlayers)
                .map_err(|_| ParseError::InvalidNumber(value.to_string()))
        }
        Some(&"buyin") => parse_amount(&parts).map(Command::SetBuyIn),
        Some(&"food") => parse_amount(&parts).map(Command::SetFood),
        Some(&"bounty") => parse_amount(&parts).map(Command::SetBounty),
        Some(&"weights") => parse_weights_command(trimmed, &parts),
        Some(word) if word.starts_with("weights=") => parse_weights_command(trimmed, &parts),
        Some(&"pay") => parse_pay_command(&parts),
        Some(&"elim") => Ok(Command::Eliminate {
            index: parse_player(parts.get(1))?,
            value: parse_toggle(parts.get(2))?,
        }),
        Some(&"out") => Ok(Command::PayOut {
            index: parse_player(parts.get(1))?,
            value: parse_toggle(parts.get(2))?,
        }),
        Some(&"name") => parse_name_command(trimmed, &parts),
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

fn arg<'a>(parts: &[&'a str], i: usize) -> Result<&'a str, ParseError> {
    parts
        .get(i)
        .copied()
        .ok_or_else(|| ParseError::InvalidNumber(String::new()))
}

/// Parse "buyin X" / "food X" / "bounty X"; a leading '$' is accepted
fn parse_amount(parts: &[&str]) -> Result<f64, ParseError> {
    let value = arg(parts, 1)?;
    let amount: f64 = value
        .trim_start_matches('$')
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(ParseError::InvalidNumber(value.to_string()));
    }
    Ok(amount)
}

fn parse_player(value: Option<&&str>) -> Result<usize, ParseError> {
    let raw = value.copied().unwrap_or_default();
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ParseError::InvalidPlayer(raw.to_string())),
    }
}

fn parse_toggle(value: Option<&&str>) -> Result<bool, ParseError> {
    match value.copied() {
        None | Some("on") | Some("yes") => Ok(true),
        Some("off") | Some("no") => Ok(false),
        Some(other) => Err(ParseError::InvalidToggle(other.to_string())),
    }
}

/// Parse a weights command: "weights add [N]", "weights remove",
/// "weights set POS N", "weights reset" or "weights = LIST"
fn parse_weights_command(trimmed: &str, parts: &[&str]) -> Result<Command, ParseError> {
    match (parts.get(1), parts.get(2), parts.get(3)) {
        (Some(&"add"), None, None) => Ok(Command::AddWeight(None)),
        (Some(&"add"), Some(value), None) => value
            .parse()
            .map(|v| Command::AddWeight(Some(v)))
            .map_err(|_| ParseError::InvalidNumber(value.to_string())),
        (Some(&"remove"), None, None) => Ok(Command::RemoveWeight),
        (Some(&"reset"), None, None) => Ok(Command::ResetWeights),
        (Some(&"set"), Some(position), Some(value)) => {
            let index = match position.parse::<usize>() {
                Ok(n) if n >= 1 => n - 1,
                _ => return Err(ParseError::InvalidNumber(position.to_string())),
            };
            let value = value
                .parse()
                .map_err(|_| ParseError::InvalidNumber(value.to_string()))?;
            Ok(Command::SetWeight { index, value })
        }
        _ => match trimmed.split_once('=') {
            Some((_, list)) => list
                .parse::<WeightSet>()
                .map(Command::ReplaceWeights)
                .map_err(|e| ParseError::InvalidWeights(e.to_string())),
            None => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
        },
    }
}

/// Parse a pay command: "pay P FIELD [on|off]"
fn parse_pay_command(parts: &[&str]) -> Result<Command, ParseError> {
    let index = parse_player(parts.get(1))?;
    let target = match parts.get(2) {
        Some(&"all") => PayTarget::All,
        Some(field) => field
            .parse::<PaymentField>()
            .map(PayTarget::Field)
            .map_err(|_| ParseError::InvalidField(field.to_string()))?,
        None => return Err(ParseError::InvalidField(String::new())),
    };
    let value = parse_toggle(parts.get(3))?;
    Ok(Command::Pay {
        index,
        target,
        value,
    })
}

/// Parse a rename command: "name P TEXT" (TEXT may contain spaces)
fn parse_name_command(trimmed: &str, parts: &[&str]) -> Result<Command, ParseError> {
    let index = parse_player(parts.get(1))?;
    // Skip "name" and the player number, keep the rest verbatim
    let name = trimmed
        .splitn(3, char::is_whitespace)
        .nth(2)
        .map(str::trim)
        .unwrap_or_default();
    if name.is_empty() {
        return Err(ParseError::MissingName);
    }
    Ok(Command::Rename {
        index,
        name: name.to_string(),
    })
}
