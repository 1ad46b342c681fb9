//! Feedback keys derived from the device occupancy flags

use std::fmt;

use clickshare_api::DeviceStatus;

/// A consumer-visible boolean signal derived from [`DeviceStatus`]
///
/// `InUse` and `Sharing` mirror the device flags directly; `Idle` and
/// `Available` are derived:
///
/// - `Idle` — nobody is connected (`!in_use`)
/// - `Available` — someone is connected but not streaming
///   (`in_use && !sharing`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKey {
    /// The app or a button is connected to the unit
    InUse,
    /// Someone is streaming a desktop to the unit
    Sharing,
    /// Nobody is connected to the unit
    Idle,
    /// Someone is connected but nobody is streaming
    Available,
}

impl FeedbackKey {
    /// All keys, in a stable order
    pub const ALL: [FeedbackKey; 4] = [
        FeedbackKey::InUse,
        FeedbackKey::Sharing,
        FeedbackKey::Idle,
        FeedbackKey::Available,
    ];

    /// The truth value of this key for a given status snapshot
    pub fn evaluate(self, status: DeviceStatus) -> bool {
        match self {
            FeedbackKey::InUse => status.in_use,
            FeedbackKey::Sharing => status.sharing,
            FeedbackKey::Idle => !status.in_use,
            FeedbackKey::Available => status.in_use && !status.sharing,
        }
    }

    /// Stable string id of this key
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackKey::InUse => "in-use",
            FeedbackKey::Sharing => "sharing",
            FeedbackKey::Idle => "idle",
            FeedbackKey::Available => "available",
        }
    }

    /// Keys whose truth value flips going from `previous` to `current`
    ///
    /// A previously-unknown status evaluates every key as false, so on the
    /// first successful measurement exactly the keys that are now true count
    /// as changed. Identical consecutive snapshots produce an empty set.
    pub fn changed_keys(previous: Option<DeviceStatus>, current: DeviceStatus) -> Vec<FeedbackKey> {
        Self::ALL
            .into_iter()
            .filter(|key| {
                let before = previous.is_some_and(|status| key.evaluate(status));
                before != key.evaluate(current)
            })
            .collect()
    }
}

impl fmt::Display for FeedbackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(in_use: bool, sharing: bool) -> DeviceStatus {
        DeviceStatus { in_use, sharing }
    }

    #[test]
    fn truth_table_covers_all_flag_combinations() {
        // (in_use, sharing) -> (InUse, Sharing, Idle, Available)
        let expectations = [
            (status(false, false), [false, false, true, false]),
            (status(false, true), [false, true, true, false]),
            (status(true, false), [true, false, false, true]),
            (status(true, true), [true, true, false, false]),
        ];

        for (s, expected) in expectations {
            for (key, want) in FeedbackKey::ALL.into_iter().zip(expected) {
                assert_eq!(key.evaluate(s), want, "{key} for {s:?}");
            }
        }
    }

    #[test]
    fn first_measurement_reports_keys_that_are_now_true() {
        let changed = FeedbackKey::changed_keys(None, status(true, false));
        assert_eq!(changed, vec![FeedbackKey::InUse, FeedbackKey::Available]);

        let changed = FeedbackKey::changed_keys(None, status(false, false));
        assert_eq!(changed, vec![FeedbackKey::Idle]);
    }

    #[test]
    fn identical_snapshots_report_nothing() {
        let s = status(false, false);
        assert!(FeedbackKey::changed_keys(Some(s), s).is_empty());
    }

    #[test]
    fn sharing_flip_reports_sharing_and_available() {
        let changed = FeedbackKey::changed_keys(Some(status(true, false)), status(true, true));
        assert_eq!(changed, vec![FeedbackKey::Sharing, FeedbackKey::Available]);
    }

    #[test]
    fn in_use_flip_reports_direct_and_derived_keys() {
        let changed = FeedbackKey::changed_keys(Some(status(false, false)), status(true, false));
        assert_eq!(
            changed,
            vec![FeedbackKey::InUse, FeedbackKey::Idle, FeedbackKey::Available]
        );
    }

    #[test]
    fn string_ids_are_stable() {
        let ids: Vec<_> = FeedbackKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(ids, ["in-use", "sharing", "idle", "available"]);
    }
}
