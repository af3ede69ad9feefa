use chrono::{DateTime, Duration, Utc};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tokio::sync::Mutex;

use crate::domain::{AuditAction, AuditLogEntry};

pub const DEFAULT_AUDIT_ENTRIES: RangeInclusive<usize> = 1..=5;

/// How far back synthesized entries may reach.
const AUDIT_WINDOW_MINUTES: i64 = 7 * 24 * 60;

/// Synthesizes the audit metadata attached to every detail response. Nothing
/// is cached: each call draws new entries.
pub struct AuditTrailGenerator {
    rng: Mutex<StdRng>,
    entries: RangeInclusive<usize>,
}

impl AuditTrailGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            entries: DEFAULT_AUDIT_ENTRIES,
        }
    }

    pub fn with_entry_count(mut self, min: usize, max: usize) -> Self {
        self.entries = min.min(max)..=min.max(max);
        self
    }

    /// Entries in chronological order, none later than `now`.
    pub async fn generate(&self, now: DateTime<Utc>) -> Vec<AuditLogEntry> {
        let mut rng = self.rng.lock().await;
        let count = rng.gen_range(self.entries.clone());

        let mut entries: Vec<AuditLogEntry> = (0..count)
            .map(|_| {
                let age = Duration::minutes(rng.gen_range(0..=AUDIT_WINDOW_MINUTES));
                AuditLogEntry {
                    timestamp: (now - age).timestamp_millis(),
                    action: AuditAction::ALL[rng.gen_range(0..AuditAction::ALL.len())],
                    operator: Name().fake_with_rng::<String, _>(&mut *rng),
                }
            })
            .collect();

        entries.sort_by_key(|entry| entry.timestamp);
        entries
    }
}
