//! Frequency tables folded from the final attempt list
//!
//! Tables keep first-seen order and sort stably, so two runs over the same
//! transcript render identically regardless of hasher seeds.

mod mistakes;
mod player_stats;


use hashbrown::HashMap;

pub use mistakes::{analyze_non_player_mistakes, render_non_player_mistakes};
pub use player_stats::{analyze_player_stats, render_player_stats};

/// Insertion-ordered label -> count table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, u32)>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &str) {
        self.add_n(label, 1);
    }

    pub fn add_n(&mut self, label: &str, n: u32) {
        let slot = self.slot(label);
        self.entries[slot].1 = self.entries[slot].1.saturating_add(n);
    }

    /// Overwrite the count for `label`, keeping its original position.
    pub fn set(&mut self, label: &str, n: u32) {
        let slot = self.slot(label);
        self.entries[slot].1 = n;
    }

    fn slot(&mut self, label: &str) -> usize {
        if let Some(&slot) = self.index.get(label) {
            return slot;
        }
        self.entries.push((label.to_string(), 0));
        let slot = self.entries.len() - 1;
        self.index.insert(label.to_string(), slot);
        slot
    }

    pub fn get(&self, label: &str) -> u32 {
        self.index
            .get(label)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, n)| *n).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(label, n)| (label.as_str(), *n))
    }

    /// Entries by count, highest first; ties keep first-seen order.
    pub fn sorted_desc(&self) -> Vec<(&str, u32)> {
        let mut sorted: Vec<(&str, u32)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

/// Per-player cause tables, players in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStats {
    index: HashMap<String, usize>,
    players: Vec<(String, CountTable)>,
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, player: &str, cause: &str) {
        let slot = match self.index.get(player) {
            Some(&slot) => slot,
            None => {
                self.players.push((player.to_string(), CountTable::new()));
                let slot = self.players.len() - 1;
                self.index.insert(player.to_string(), slot);
                slot
            }
        };
        self.players[slot].1.add(cause);
    }

    pub fn get(&self, player: &str) -> Option<&CountTable> {
        self.index.get(player).map(|&slot| &self.players[slot].1)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CountTable)> {
        self.players.iter().map(|(name, table)| (name.as_str(), table))
    }

    /// Players by total count, highest first; ties keep first-seen order.
    pub fn sorted_desc(&self) -> Vec<(&str, &CountTable)> {
        let mut sorted: Vec<(&str, &CountTable)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.total().cmp(&a.1.total()));
        sorted
    }
}
