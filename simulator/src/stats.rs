use serde::Serialize;
use std::collections::BTreeMap;
use threeshot_types::casino::{Decision, FiveCardHandPayoutRank, RoundResult, ThreeCardHandRank};

/// Running totals for one wager.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Stats {
    pub trials: u64,
    pub total_wagered: i128,
    pub total_net: i128,
    pub total_net_sq: f64,
}

impl Stats {
    pub fn add(&mut self, net: i64, wagered: u64) {
        let n = net as f64;
        self.trials += 1;
        self.total_net += net as i128;
        self.total_net_sq += n * n;
        self.total_wagered += wagered as i128;
    }

    pub fn merge(&mut self, other: &Stats) {
        self.trials += other.trials;
        self.total_net += other.total_net;
        self.total_net_sq += other.total_net_sq;
        self.total_wagered += other.total_wagered;
    }

    pub fn mean_net(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_net as f64 / self.trials as f64
        }
    }

    pub fn mean_wagered(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_wagered as f64 / self.trials as f64
        }
    }

    /// Player loss as a fraction of the average amount wagered.
    pub fn house_edge(&self) -> f64 {
        let mw = self.mean_wagered();
        if mw == 0.0 {
            0.0
        } else {
            -self.mean_net() / mw
        }
    }

    pub fn stderr(&self) -> f64 {
        if self.trials <= 1 {
            return 0.0;
        }
        let mean = self.mean_net();
        let var = (self.total_net_sq / self.trials as f64) - mean * mean;
        let var = if var < 0.0 { 0.0 } else { var };
        (var / self.trials as f64).sqrt()
    }
}

/// Aggregated outcome of many simulated rounds.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub rounds: u64,
    pub raises: u64,
    pub first_shot: Stats,
    pub second_shot: Stats,
    pub third_shot: Stats,
    pub five_shot: Stats,
    pub overall: Stats,
    pub first_shot_hands: BTreeMap<ThreeCardHandRank, u64>,
    pub five_shot_hands: BTreeMap<FiveCardHandPayoutRank, u64>,
}

fn net(winnings: u64, wager: u64) -> i64 {
    winnings as i64 - wager as i64
}

impl Report {
    pub fn record(&mut self, result: &RoundResult) {
        self.rounds += 1;
        if result.decision == Decision::Raise {
            self.raises += 1;
        }

        let shots = [
            (&mut self.first_shot, &result.first_shot),
            (&mut self.second_shot, &result.second_shot),
            (&mut self.third_shot, &result.third_shot),
        ];
        for (stats, shot) in shots {
            stats.add(net(shot.winnings, shot.wager), shot.wager);
        }
        self.five_shot.add(
            net(result.five_shot.winnings, result.five_shot.wager),
            result.five_shot.wager,
        );
        self.overall.add(result.total_net, result.total_bet);

        *self.first_shot_hands.entry(result.first_shot.rank).or_default() += 1;
        *self.five_shot_hands.entry(result.five_shot.rank).or_default() += 1;
    }

    pub fn merge(&mut self, other: &Report) {
        self.rounds += other.rounds;
        self.raises += other.raises;
        self.first_shot.merge(&other.first_shot);
        self.second_shot.merge(&other.second_shot);
        self.third_shot.merge(&other.third_shot);
        self.five_shot.merge(&other.five_shot);
        self.overall.merge(&other.overall);
        for (hand, count) in &other.first_shot_hands {
            *self.first_shot_hands.entry(*hand).or_default() += count;
        }
        for (hand, count) in &other.five_shot_hands {
            *self.five_shot_hands.entry(*hand).or_default() += count;
        }
    }

    /// Rows of (label, stats) in display order.
    pub fn rows(&self) -> [(&'static str, &Stats); 5] {
        [
            ("1st Shot", &self.first_shot),
            ("2nd Shot", &self.second_shot),
            ("3rd Shot", &self.third_shot),
            ("5 Shot", &self.five_shot),
            ("Overall", &self.overall),
        ]
    }
}
