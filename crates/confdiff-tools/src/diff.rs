//! Diff computation between two settings mappings

use tracing::debug;

use confdiff_core::Settings;

/// Differences between two settings mappings of the same category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsDiff {
    /// (key, value) pairs present only in the new mapping
    pub added: Vec<(String, String)>,
    /// (key, value) pairs present only in the old mapping
    pub removed: Vec<(String, String)>,
    /// (key, old value, new value) for keys present in both with differing values
    pub changed: Vec<(String, String, String)>,
}

impl SettingsDiff {
    /// Compare `old` against `new`.
    ///
    /// Keys in `ignore` are excluded from changed-value detection only; an
    /// ignored key missing on one side still shows up as added or removed.
    /// Each result vector is sorted by key.
    pub fn compare(old: &Settings, new: &Settings, ignore: &[&str]) -> Self {
        let mut added: Vec<(String, String)> = new
            .iter()
            .filter(|(key, _)| !old.contains_key(*key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let mut removed: Vec<(String, String)> = old
            .iter()
            .filter(|(key, _)| !new.contains_key(*key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let mut changed: Vec<(String, String, String)> = old
            .iter()
            .filter(|(key, _)| !ignore.contains(&key.as_str()))
            .filter_map(|(key, old_value)| match new.get(key) {
                Some(new_value) if new_value != old_value => {
                    Some((key.clone(), old_value.clone(), new_value.clone()))
                }
                _ => None,
            })
            .collect();

        added.sort();
        removed.sort();
        changed.sort();

        debug!(
            added = added.len(),
            removed = removed.len(),
            changed = changed.len(),
            "compared settings"
        );

        Self {
            added,
            removed,
            changed,
        }
    }

    /// True when the two mappings were identical (modulo the ignore list)
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}
