use crate::models::bars::Bar;
use serde::Deserialize;

/// Live storage breakdown reported by the daemon. Byte counts arrive as JSON
/// integers that can exceed 2^64; u128 keeps them exact end to end.
/// Staged + Transferred + Pending + Free is the total capacity at sample
/// time. Snapshots are ephemeral: each poll replaces the previous one.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSnapshot {
    #[serde(rename = "Staged")]
    pub staged: u128,
    #[serde(rename = "Transferred")]
    pub transferred: u128,
    #[serde(rename = "Pending")]
    pub pending: u128,
    #[serde(rename = "Free")]
    pub free: u128,
    #[serde(rename = "MountPoint")]
    pub mount_point: String,
}

impl StorageSnapshot {
    /// Space consumed by the transfer pipeline (everything but Free).
    pub fn used(&self) -> u128 {
        self.staged + self.transferred + self.pending
    }

    pub fn total(&self) -> u128 {
        self.used() + self.free
    }

    /// The four category bars in stack order.
    pub fn bars(&self) -> Vec<Bar> {
        vec![
            Bar {
                name: "Staged",
                amount: self.staged,
                description: Some(
                    "Deal data that has completed downloading and is waiting \
                     to be added to a sector",
                ),
            },
            Bar {
                name: "Transferred",
                amount: self.transferred,
                description: Some(
                    "Deal data that has been downloaded so far in an ongoing \
                     transfer",
                ),
            },
            Bar {
                name: "Pending",
                amount: self.pending,
                description: Some(
                    "The total space needed for data that is currently being \
                     downloaded",
                ),
            },
            Bar {
                name: "Free",
                amount: self.free,
                description: Some("Available space for future downloads"),
            },
        ]
    }
}

/// Capacity accounting of the deprecated legacy subsystem. Capacity == 0
/// means the legacy system was never present on this host.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacySnapshot {
    #[serde(rename = "Capacity")]
    pub capacity: u128,
    #[serde(rename = "Used")]
    pub used: u128,
    #[serde(rename = "MountPoint")]
    pub mount_point: String,
}

impl LegacySnapshot {
    pub fn is_absent(&self) -> bool {
        self.capacity == 0
    }

    /// Used/Free split; Used beyond Capacity clamps to a zero-width Free.
    pub fn bars(&self) -> Vec<Bar> {
        vec![
            Bar { name: "Used", amount: self.used, description: None },
            Bar {
                name: "Free",
                amount: self.capacity.saturating_sub(self.used),
                description: None,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bars::cumulative;
    use crate::util::human::fmt_pct;

    #[test]
    fn sidebar_aggregate() {
        let snap = StorageSnapshot {
            staged: 800,
            transferred: 400,
            pending: 230,
            free: 0,
            mount_point: "/var/lib/deals".into(),
        };
        assert_eq!(snap.used(), 1430);
        assert_eq!(snap.total(), 1430);
        let share = snap.used() as f64 / snap.total() as f64;
        assert_eq!(fmt_pct(share), "100%");
    }

    #[test]
    fn category_bars_in_stack_order() {
        let snap = StorageSnapshot {
            staged: 1,
            transferred: 2,
            pending: 3,
            free: 4,
            mount_point: String::new(),
        };
        let names: Vec<&str> = snap.bars().iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Staged", "Transferred", "Pending", "Free"]);
        assert_eq!(cumulative(&snap.bars()).total, snap.total());
    }

    #[test]
    fn legacy_bars_split_capacity() {
        let snap = LegacySnapshot { capacity: 100, used: 40, mount_point: String::new() };
        assert!(!snap.is_absent());
        let bars = snap.bars();
        assert_eq!((bars[0].name, bars[0].amount), ("Used", 40));
        assert_eq!((bars[1].name, bars[1].amount), ("Free", 60));
    }

    #[test]
    fn zero_capacity_marks_legacy_absent() {
        let snap = LegacySnapshot { capacity: 0, used: 0, mount_point: String::new() };
        assert!(snap.is_absent());
    }

    #[test]
    fn decodes_counts_beyond_u64() {
        let snap: StorageSnapshot = serde_json::from_str(
            r#"{
                "Staged": 36893488147419103232,
                "Transferred": 0,
                "Pending": 1,
                "Free": 2,
                "MountPoint": "/mnt/deals"
            }"#,
        )
        .unwrap();
        assert_eq!(snap.staged, 1u128 << 65);
        assert_eq!(snap.total(), (1u128 << 65) + 3);
        assert_eq!(snap.mount_point, "/mnt/deals");
    }
}
