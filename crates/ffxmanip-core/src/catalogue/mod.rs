// crates/ffxmanip-core/src/catalogue/mod.rs

mod data;

use std::collections::HashMap;

use crate::error::{ManipError, Result};

/// Observed damage 3-tuple (Auron, Tidus, Auron) from the opening
/// Sinspawn Ammes fight.
pub type DamageValues = [u16; 3];

/// The 256-entry seed <-> damage-values catalogue for the FFX HD PC build.
/// Read-only after construction; build it once at startup and share by
/// reference.
pub struct Catalogue {
    rows: &'static [(u32, DamageValues); 256],
    by_dvs: HashMap<DamageValues, u32>,
    index_by_seed: HashMap<u32, usize>,
}

impl Catalogue {
    /// Build the catalogue from the static rows, checking the invariants
    /// the recovery path relies on (no duplicate seeds, no duplicate
    /// damage tuples). A failure here means the shipped data is broken
    /// and the tool cannot operate.
    pub fn load() -> Result<Catalogue> {
        let rows = &data::ROWS;

        let mut by_dvs = HashMap::with_capacity(rows.len());
        let mut index_by_seed = HashMap::with_capacity(rows.len());

        for (i, &(seed, dvs)) in rows.iter().enumerate() {
            if index_by_seed.insert(seed, i).is_some() {
                return Err(ManipError::Catalogue(format!("duplicate seed {seed}")));
            }
            if by_dvs.insert(dvs, seed).is_some() {
                return Err(ManipError::Catalogue(format!(
                    "duplicate damage values {dvs:?}"
                )));
            }
        }

        Ok(Catalogue {
            rows,
            by_dvs,
            index_by_seed,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Seed identified by an observed damage 3-tuple.
    pub fn seed_of(&self, dvs: DamageValues) -> Option<u32> {
        self.by_dvs.get(&dvs).copied()
    }

    pub fn contains_seed(&self, seed: u32) -> bool {
        self.index_by_seed.contains_key(&seed)
    }

    /// Seed at a zero-based catalogue index.
    pub fn seed_at(&self, index: usize) -> Option<u32> {
        self.rows.get(index).map(|&(seed, _)| seed)
    }

    pub fn index_of(&self, seed: u32) -> Option<usize> {
        self.index_by_seed.get(&seed).copied()
    }

    /// Rows in catalogue order: (index, seed, damage values).
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32, DamageValues)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, &(seed, dvs))| (i, seed, dvs))
    }
}
