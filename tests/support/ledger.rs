use parimutuel::domain::{OutcomeSet, PoolLedger};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

pub const A: &str = "Team A Wins";
pub const B: &str = "Team B Wins";

/// A binary ledger with `bets` placed in order.
pub fn ledger_with(bets: &[(&str, Decimal, &str)]) -> PoolLedger {
    let mut ledger = PoolLedger::new(OutcomeSet::binary());
    for (bettor, amount, outcome) in bets {
        ledger
            .place_bet(*bettor, *amount, *outcome)
            .expect("valid bet");
    }
    ledger
}

/// A ledger filled with `count` random cent-precision bets.
pub fn random_ledger(seed: u64, count: usize, outcomes: &OutcomeSet) -> PoolLedger {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ledger = PoolLedger::new(outcomes.clone());
    for i in 0..count {
        let cents: i64 = rng.gen_range(1..=100_000);
        let outcome = outcomes
            .as_slice()
            .choose(&mut rng)
            .expect("non-empty outcome set")
            .clone();
        ledger
            .place_bet(format!("player-{i}"), Decimal::new(cents, 2), outcome)
            .expect("valid bet");
    }
    ledger
}
