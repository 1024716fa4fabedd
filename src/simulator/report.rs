//! Simulation report generation.

use super::loot_sim::LootStats;
use super::runner::RunStats;
use crate::items::Rarity;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_survived: u32,
    pub runs_died: u32,

    // Aggregated stats
    pub avg_final_level: f64,
    pub avg_monsters_defeated: f64,
    pub avg_turns: f64,
    pub avg_accuracy: f64,
    pub avg_damage_dealt: f64,
    pub avg_damage_taken: f64,
    pub avg_blocks: f64,
    pub avg_highest_monster_level: f64,

    // Economy
    pub avg_coins_earned: f64,
    pub avg_coins_spent: f64,
    pub avg_purchases: f64,
    pub avg_shops_visited: f64,
    pub avg_items_used: f64,

    // Distribution data
    pub level_distribution: BTreeMap<u32, u32>,

    // Loot
    pub combat_loot: LootStats,
    pub random_loot_table: LootStats,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, random_loot_table: LootStats) -> Self {
        let num_runs = runs.len() as u32;
        let runs_died = runs.iter().filter(|r| r.died).count() as u32;

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        let mut combat_loot = LootStats::default();
        for run in &runs {
            combat_loot.merge(&run.loot);
        }

        Self {
            num_runs,
            runs_survived: num_runs - runs_died,
            runs_died,
            avg_final_level: average(&runs, |r| r.final_level as f64),
            avg_monsters_defeated: average(&runs, |r| r.monsters_defeated as f64),
            avg_turns: average(&runs, |r| r.turns as f64),
            avg_accuracy: average(&runs, RunStats::accuracy),
            avg_damage_dealt: average(&runs, |r| r.damage_dealt as f64),
            avg_damage_taken: average(&runs, |r| r.damage_taken as f64),
            avg_blocks: average(&runs, |r| r.blocks as f64),
            avg_highest_monster_level: average(&runs, |r| r.highest_monster_level as f64),
            avg_coins_earned: average(&runs, |r| r.coins_earned as f64),
            avg_coins_spent: average(&runs, |r| r.coins_spent as f64),
            avg_purchases: average(&runs, |r| r.purchases as f64),
            avg_shops_visited: average(&runs, |r| r.shops_visited as f64),
            avg_items_used: average(&runs, |r| r.items_used as f64),
            level_distribution,
            combat_loot,
            random_loot_table,
            run_stats: runs,
        }
    }

    pub fn death_rate(&self) -> f64 {
        if self.num_runs == 0 {
            0.0
        } else {
            self.runs_died as f64 / self.num_runs as f64
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} survived, {} fell\n\n",
            self.num_runs, self.runs_survived, self.runs_died
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Monsters Slain:  {:.1}\n", self.avg_monsters_defeated));
        report.push_str(&format!("  Avg Highest Monster: {:.1}\n", self.avg_highest_monster_level));
        report.push_str(&format!("  Avg Turns:           {:.0}\n", self.avg_turns));
        report.push_str(&format!("  Avg Accuracy:        {:.1}%\n\n", self.avg_accuracy * 100.0));

        report.push_str("── COMBAT ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Damage Dealt:    {:.0}\n", self.avg_damage_dealt));
        report.push_str(&format!("  Avg Damage Taken:    {:.0}\n", self.avg_damage_taken));
        report.push_str(&format!("  Avg Blocks:          {:.1}\n\n", self.avg_blocks));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Copper Earned:   {:.0}\n", self.avg_coins_earned));
        report.push_str(&format!("  Avg Copper Spent:    {:.0}\n", self.avg_coins_spent));
        report.push_str(&format!("  Avg Shop Visits:     {:.1}\n", self.avg_shops_visited));
        report.push_str(&format!("  Avg Purchases:       {:.1}\n", self.avg_purchases));
        report.push_str(&format!("  Avg Items Used:      {:.1}\n\n", self.avg_items_used));

        report.push_str("── LEVEL DISTRIBUTION ───────────────────────────────────────────\n");
        for (level, count) in &self.level_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Level {:3}: {:>5.1}% {}\n", level, pct, bar));
        }
        report.push('\n');

        report.push_str("── LOOT ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Combat Drop Rate:    {:.1}%\n",
            self.combat_loot.drop_rate() * 100.0
        ));
        report.push_str(&format!(
            "  Random Roll Rate:    {:.1}% ({} samples)\n",
            self.random_loot_table.drop_rate() * 100.0,
            self.random_loot_table.total_drop_attempts
        ));
        report.push_str("  Rarity        Random table\n");
        for rarity in Rarity::ALL {
            let count = self.random_loot_table.count_for(rarity);
            let pct = (count as f64 / self.random_loot_table.total_drops.max(1) as f64) * 100.0;
            report.push_str(&format!("  {:<12}  {:>5.1}%\n", rarity.name(), pct));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let death_pct = self.death_rate() * 100.0;
        let death_rating = if death_pct < 10.0 {
            "TOO EASY - Heroes rarely fall"
        } else if death_pct < 50.0 {
            "GOOD - Challenging but fair"
        } else if death_pct < 90.0 {
            "HARD - Most heroes fall"
        } else {
            "TOO HARD - Nearly every hero falls"
        };
        report.push_str(&format!("  Death Rate:      {:.1}%\n", death_pct));
        report.push_str(&format!("  Death Rating:    {}\n", death_rating));

        if self.avg_purchases < 0.5 && self.avg_shops_visited >= 1.0 {
            report.push_str("  ⚠️  Shop visits rarely end in a purchase - prices too high?\n");
        }
        if self.avg_damage_taken > 0.0 && self.avg_items_used == 0.0 {
            report.push_str("  ⚠️  No healing used - potions too scarce?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
