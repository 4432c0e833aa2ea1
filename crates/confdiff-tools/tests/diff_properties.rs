//! Property tests for settings diffing
//!
//! Exercises the algebraic properties of `SettingsDiff::compare` over
//! arbitrary small mappings: partition correctness, self-diff emptiness,
//! and old/new symmetry.

use proptest::prelude::*;

use confdiff_core::Settings;
use confdiff_tools::SettingsDiff;

fn settings_strategy() -> impl Strategy<Value = Settings> {
    proptest::collection::hash_map("[a-c]{1,3}", "[xyz01]{0,2}", 0..8)
}

proptest! {
    #[test]
    fn prop_self_diff_is_empty(map in settings_strategy()) {
        let diff = SettingsDiff::compare(&map, &map, &["a", "ab"]);
        prop_assert!(diff.is_empty());
    }

    #[test]
    fn prop_keys_partition_correctly(
        old in settings_strategy(),
        new in settings_strategy(),
    ) {
        let diff = SettingsDiff::compare(&old, &new, &[]);

        for (key, value) in &diff.added {
            prop_assert!(!old.contains_key(key));
            prop_assert_eq!(new.get(key), Some(value));
        }
        for (key, value) in &diff.removed {
            prop_assert!(!new.contains_key(key));
            prop_assert_eq!(old.get(key), Some(value));
        }
        for (key, old_value, new_value) in &diff.changed {
            prop_assert_eq!(old.get(key), Some(old_value));
            prop_assert_eq!(new.get(key), Some(new_value));
            prop_assert_ne!(old_value, new_value);
        }
    }

    #[test]
    fn prop_symmetry(
        old in settings_strategy(),
        new in settings_strategy(),
    ) {
        let forward = SettingsDiff::compare(&old, &new, &[]);
        let reverse = SettingsDiff::compare(&new, &old, &[]);

        prop_assert_eq!(&forward.added, &reverse.removed);
        prop_assert_eq!(&forward.removed, &reverse.added);

        let reverse_swapped: Vec<(String, String, String)> = reverse
            .changed
            .iter()
            .map(|(key, old_value, new_value)| {
                (key.clone(), new_value.clone(), old_value.clone())
            })
            .collect();
        prop_assert_eq!(&forward.changed, &reverse_swapped);
    }

    #[test]
    fn prop_ignored_keys_never_changed(
        old in settings_strategy(),
        new in settings_strategy(),
    ) {
        let diff = SettingsDiff::compare(&old, &new, &["a", "b", "c"]);
        for (key, _, _) in &diff.changed {
            prop_assert!(key != "a" && key != "b" && key != "c");
        }
    }
}
