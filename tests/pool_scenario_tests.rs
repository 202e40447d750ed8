//! End-to-end pricing and settlement scenarios on a two-outcome pool.

mod support;

use parimutuel::domain::{settle, InvalidBetError, InvalidOutcomeError, OutcomeId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use support::assertions::{assert_decimal_near, EPSILON};
use support::ledger::{ledger_with, A, B};

#[test]
fn two_opposing_bets_price_the_later_one_at_even_odds() {
    let ledger = ledger_with(&[("Alice", dec!(100), A), ("Bob", dec!(100), B)]);
    let bets = ledger.bets();

    // Alice was alone in the pool when she bet.
    assert_eq!(bets[0].implied_probability(), Decimal::ONE);
    assert_eq!(bets[0].potential_winnings(), dec!(100));
    // Bob saw 200 in the pool, 100 of it on his side.
    assert_eq!(bets[1].implied_probability(), dec!(0.5));
    assert_eq!(bets[1].potential_winnings(), dec!(200));
    assert_eq!(ledger.total_pool(), dec!(200));
}

#[test]
fn even_pool_settles_exactly_when_the_even_odds_bet_wins() {
    let ledger = ledger_with(&[("Bob", dec!(100), B), ("Alice", dec!(100), A)]);

    let report = settle(&ledger.snapshot(), &A.into()).unwrap();

    assert_eq!(report.total_potential_payouts, dec!(200));
    assert_eq!(report.total_pool, dec!(200));
    assert_eq!(report.adjustment_factor, Decimal::ONE);

    let alice = &report.per_bet[1];
    assert!(alice.won);
    assert_eq!(alice.adjusted_payout, dec!(200));
    assert_eq!(alice.profit, dec!(100));

    let bob = &report.per_bet[0];
    assert!(!bob.won);
    assert_eq!(bob.adjusted_payout, Decimal::ZERO);
    assert_eq!(bob.profit, dec!(-100));

    assert_eq!(report.platform_gain, Decimal::ZERO);
}

#[test]
fn early_bettor_winning_leaves_surplus_with_platform() {
    let ledger = ledger_with(&[("Alice", dec!(100), A), ("Bob", dec!(100), B)]);

    let report = settle(&ledger.snapshot(), &A.into()).unwrap();

    assert_eq!(report.total_potential_payouts, dec!(100));
    assert_eq!(report.adjustment_factor, Decimal::ONE);
    assert_eq!(report.per_bet[0].adjusted_payout, dec!(100));
    assert_eq!(report.per_bet[0].profit, Decimal::ZERO);
    assert_eq!(report.platform_gain, dec!(100));
}

#[test]
fn one_sided_pool_returns_every_stake() {
    let ledger = ledger_with(&[
        ("Alice", dec!(10), A),
        ("Bob", dec!(20), A),
        ("Dave", dec!(30), A),
    ]);

    for bet in ledger.bets() {
        assert_eq!(bet.implied_probability(), Decimal::ONE);
        assert_eq!(bet.potential_winnings(), bet.amount());
    }

    let report = settle(&ledger.snapshot(), &A.into()).unwrap();

    assert_eq!(report.total_pool, dec!(60));
    assert_eq!(report.total_potential_payouts, dec!(60));
    assert_eq!(report.adjustment_factor, Decimal::ONE);
    for result in &report.per_bet {
        assert_eq!(result.adjusted_payout, result.amount);
        assert_eq!(result.profit, Decimal::ZERO);
    }
    assert_eq!(report.platform_gain, Decimal::ZERO);
}

#[test]
fn late_large_bet_does_not_reprice_earlier_bets() {
    let mut ledger = ledger_with(&[("Alice", dec!(50), A), ("Bob", dec!(50), B)]);
    let alice_before = ledger.bets()[0].clone();
    let bob_before = ledger.bets()[1].clone();

    ledger.place_bet("Whale", dec!(5000), A).unwrap();

    assert_eq!(ledger.bets()[0], alice_before);
    assert_eq!(ledger.bets()[1], bob_before);
    assert_eq!(ledger.stake_on(&A.into()), dec!(5050));
    assert_eq!(ledger.total_pool(), dec!(5100));

    // The whale only gets the thin odds left by its own stake.
    let whale = &ledger.bets()[2];
    assert!(whale.implied_probability() > dec!(0.99));
}

#[test]
fn over_promised_winners_are_scaled_to_the_pool() {
    let ledger = ledger_with(&[
        ("Bob", dec!(100), B),
        ("Alice", dec!(10), A),
        ("Dave", dec!(100), A),
    ]);

    let report = settle(&ledger.snapshot(), &A.into()).unwrap();

    assert!(report.total_potential_payouts > report.total_pool);
    assert!(report.adjustment_factor < Decimal::ONE);
    assert_decimal_near(report.total_paid_out(), report.total_pool, EPSILON);
    assert_decimal_near(report.platform_gain, Decimal::ZERO, EPSILON);

    let promised = ledger.bets()[1].potential_winnings();
    assert_eq!(
        report.per_bet[1].adjusted_payout,
        promised * report.adjustment_factor
    );
}

#[test]
fn scaled_winner_can_show_a_loss() {
    // Three early long-shot promises on A, then Dave piles in at odds near 1.1.
    // Promises total ~13104 against a pool of 11300, and the ~0.862 cut
    // leaves Dave with ~9460 on a 10000 stake.
    let ledger = ledger_with(&[
        ("Bob", dec!(1000), B),
        ("Alice", dec!(100), A),
        ("Eve", dec!(100), A),
        ("Frank", dec!(100), A),
        ("Dave", dec!(10000), A),
    ]);

    let report = settle(&ledger.snapshot(), &A.into()).unwrap();
    let dave = &report.per_bet[4];

    assert!(dave.won);
    assert!(dave.profit < Decimal::ZERO, "profit was {}", dave.profit);
}

#[test]
fn negative_stake_is_rejected_and_totals_untouched() {
    let mut ledger = ledger_with(&[("Alice", dec!(100), A)]);

    let result = ledger.place_bet("X", dec!(-5), A);

    assert!(matches!(result, Err(InvalidBetError::NonPositiveAmount { .. })));
    assert_eq!(ledger.total_pool(), dec!(100));
    assert_eq!(ledger.stake_on(&A.into()), dec!(100));
    assert_eq!(ledger.stake_on(&B.into()), Decimal::ZERO);
    assert_eq!(ledger.potential_payout_on(&A.into()), dec!(100));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn settling_against_unknown_outcome_fails() {
    let ledger = ledger_with(&[("Alice", dec!(100), A)]);

    let result = settle(&ledger.snapshot(), &OutcomeId::from("Draw"));

    assert!(matches!(
        result,
        Err(InvalidOutcomeError::UnknownOutcome { .. })
    ));
}
