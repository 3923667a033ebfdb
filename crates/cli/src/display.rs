//! Console rendering for the demo transcript

use bankdemo_scenario::{BalanceSnapshot, RunReport};
use rust_decimal::Decimal;
use std::io::{self, Write};

/// Format an amount as dollars with two decimals and thousands separators
pub fn format_money(amount: Decimal) -> String {
    let digits = format!("{:.2}", amount.round_dp(2).abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}

pub fn status_line(snapshot: &BalanceSnapshot) -> String {
    format!(
        "{} has {} in {} account.",
        snapshot.display_name,
        format_money(snapshot.balance),
        snapshot.possessive
    )
}

fn write_status<W: Write>(out: &mut W, balances: &[BalanceSnapshot]) -> io::Result<()> {
    for snapshot in balances {
        writeln!(out, "{}", status_line(snapshot))?;
    }
    writeln!(out)
}

/// Write the full transcript: status, then for each step the narration,
/// the expectation, every message, and the status again.
pub fn write_transcript<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    write_status(out, &report.initial)?;

    for step in &report.steps {
        for line in &step.narration {
            writeln!(out, "{}", line)?;
        }
        if let Some(expectation) = &step.expectation {
            writeln!(out, "{}", expectation)?;
        }
        writeln!(out)?;

        for outcome in &step.outcomes {
            for message in &outcome.messages {
                writeln!(out, "{}", message)?;
            }
        }

        write_status(out, &step.balances)?;
    }
    Ok(())
}
