//! Text projections of bets and settlement reports.
//!
//! Currency renders to two decimal places, probabilities as percentages to
//! two decimal places, and the adjustment factor to four.

use rust_decimal::Decimal;

use super::output;
use crate::domain::money::{display_amount, display_percent};
use crate::domain::{Bet, BetResult, SettlementReport};

const FACTOR_DP: u32 = 4;

/// `$12.30`-style rendering of a currency amount.
#[must_use]
pub fn money(amount: Decimal) -> String {
    format!("${:.2}", display_amount(amount))
}

/// One line describing a bet at the moment it was placed.
#[must_use]
pub fn bet_line(bet: &Bet) -> String {
    format!(
        "{} placed a ${} bet on '{}' with potential winnings of {} (Event Probability: {:.2}%)",
        bet.bettor(),
        bet.amount(),
        bet.outcome(),
        money(bet.potential_winnings()),
        display_percent(bet.implied_probability()),
    )
}

/// One line describing how a bet settled.
#[must_use]
pub fn result_line(result: &BetResult, potential_winnings: Decimal) -> String {
    if result.won {
        format!(
            "{} won! Bet: ${}, Original Potential Winnings: {}, Adjusted Payout: {} (Profit: {})",
            result.bettor,
            result.amount,
            money(potential_winnings),
            money(result.adjusted_payout),
            money(result.profit),
        )
    } else {
        format!("{} lost. Bet: ${}", result.bettor, result.amount)
    }
}

/// The adjustment notice, present only when winners were scaled down.
#[must_use]
pub fn adjustment_line(report: &SettlementReport) -> Option<String> {
    report.is_adjusted().then(|| {
        format!(
            "Payouts need to be adjusted by factor {:.4} to ensure platform neutrality.",
            report.adjustment_factor.round_dp(FACTOR_DP)
        )
    })
}

/// Print bets as they were placed.
pub fn print_bets(bets: &[Bet]) {
    for bet in bets {
        output::line(&bet_line(bet));
    }
}

/// Print a full settlement report.
///
/// `bets` supplies the pre-adjustment winnings shown next to each winner;
/// it must be the same bets, in the same order, that produced `report`.
pub fn print_report(report: &SettlementReport, bets: &[Bet]) {
    output::section(&format!("Winning Outcome: {}", report.winning_outcome));
    output::field("Total Pool:", money(report.total_pool));
    output::field(
        "Total Potential Payouts to Winners:",
        money(report.total_potential_payouts),
    );
    if let Some(line) = adjustment_line(report) {
        output::warning(&line);
    }

    output::section("Player Results:");
    for (result, bet) in report.per_bet.iter().zip(bets) {
        let line = result_line(result, bet.potential_winnings());
        if result.won {
            output::won(&line);
        } else {
            output::lost(&line);
        }
    }

    output::section("Platform");
    output::field("Platform's net gain/loss:", money(report.platform_gain));
}
