// src/portfolio/mod.rs
//! Portfolio snapshot store: an append-only mapping of generated
//! identifiers to immutable snapshots, persisted in a single storage slot.
//! Read-modify-write, last writer wins; fine for the single-user flow this
//! backs.

pub mod slot;

pub use slot::{FileSlot, MemorySlot, SnapshotSlot};

use chrono::Utc;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::types::{EducationEntry, EnhancedResume, PersonalInfo, PortfolioSnapshot};

pub struct SnapshotStore {
    slot: Box<dyn SnapshotSlot>,
}

impl SnapshotStore {
    pub fn new(slot: Box<dyn SnapshotSlot>) -> Self {
        Self { slot }
    }

    /// Persist a new snapshot and return its identifier. Identifiers are
    /// `slug(name)-millis`; collision needs the same name in the same
    /// millisecond, which overwrites rather than errors (known weakness).
    pub fn save(
        &self,
        personal_info: PersonalInfo,
        enhanced: EnhancedResume,
        educations: Vec<EducationEntry>,
    ) -> Result<String, StoreError> {
        let id = format!(
            "{}-{}",
            slug(&personal_info.name),
            Utc::now().timestamp_millis()
        );

        let mut snapshots = self.load_all()?;
        snapshots.insert(
            id.clone(),
            PortfolioSnapshot {
                personal_info,
                enhanced,
                educations,
                created_at: Utc::now().to_rfc3339(),
            },
        );

        let serialized = serde_json::to_string(&snapshots)
            .map_err(|e| StoreError::Quota(e.to_string()))?;
        self.slot
            .write(&serialized)
            .map_err(|e| StoreError::Quota(e.to_string()))?;

        info!("Saved portfolio snapshot {}", id);
        Ok(id)
    }

    /// Look up a snapshot. Absent ids are `None`, never an error.
    pub fn get(&self, id: &str) -> Option<PortfolioSnapshot> {
        match self.load_all() {
            Ok(mut snapshots) => snapshots.remove(id),
            Err(e) => {
                warn!("Portfolio slot unreadable: {}", e);
                None
            }
        }
    }

    /// Read the full mapping. Unparseable contents degrade to empty; an
    /// unreadable slot is an error so `save` never clobbers snapshots it
    /// could not see.
    fn load_all(&self) -> Result<BTreeMap<String, PortfolioSnapshot>, StoreError> {
        match self.slot.read() {
            Ok(Some(raw)) => Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Portfolio slot unparseable, treating as empty: {}", e);
                BTreeMap::new()
            })),
            Ok(None) => Ok(BTreeMap::new()),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
