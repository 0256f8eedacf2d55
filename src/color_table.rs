use std::path::Path;

use crate::distance::{distance_squared, euclidean};
use crate::error::{LoadError, RowError};
use crate::loader;
use crate::types::{ColorRecord, MatchResult, Rgb};

/// Immutable reference table, built once and handed to whoever needs lookups.
#[derive(Clone, Debug, Default)]
pub struct ColorTable {
    records: Vec<ColorRecord>,
    skipped: Vec<RowError>,
}

impl ColorTable {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let loaded = loader::load_report(path)?;
        Ok(Self {
            records: loaded.records,
            skipped: loaded.skipped,
        })
    }

    pub fn from_records(records: Vec<ColorRecord>) -> Self {
        Self {
            records,
            skipped: Vec::new(),
        }
    }

    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    /// Rows dropped while loading.
    pub fn skipped(&self) -> &[RowError] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn nearest(&self, target: Rgb) -> Option<MatchResult> {
        nearest(target, &self.records)
    }

    /// The `k` closest records, closest first. Equal distances keep load order.
    pub fn nearest_k(&self, target: Rgb, k: usize) -> Vec<MatchResult> {
        let mut ranked: Vec<(u32, &ColorRecord)> = self
            .records
            .iter()
            .map(|rec| (distance_squared(target, rec.rgb()), rec))
            .collect();
        ranked.sort_by_key(|(d, _)| *d);
        ranked
            .into_iter()
            .take(k)
            .map(|(d, rec)| MatchResult {
                record: rec.clone(),
                distance: f64::from(d).sqrt(),
            })
            .collect()
    }
}

/// Closest record to `target`, or `None` for an empty dataset. On ties the
/// earliest record wins.
pub fn nearest(target: Rgb, dataset: &[ColorRecord]) -> Option<MatchResult> {
    let mut best: Option<(u32, &ColorRecord)> = None;
    for rec in dataset {
        let d = distance_squared(target, rec.rgb());
        if best.map_or(true, |(best_d, _)| d < best_d) {
            best = Some((d, rec));
            if d == 0 {
                break;
            }
        }
    }
    best.map(|(_, rec)| MatchResult {
        record: rec.clone(),
        distance: euclidean(target, rec.rgb()),
    })
}
