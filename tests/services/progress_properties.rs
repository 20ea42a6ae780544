//! Property-based tests for the progress calculation. Pure, no database.

use proptest::prelude::*;

use cart_core::models::checklist_item::ChecklistItem;
use cart_core::services::checklist_service::ChecklistProgress;

fn build_items(flags: &[(bool, bool)]) -> Vec<ChecklistItem> {
    flags
        .iter()
        .enumerate()
        .map(|(index, (is_optional, completed))| ChecklistItem {
            checklist_item_id: index as i64,
            checklist_id: 1,
            template_item_id: None,
            description: format!("step {index}"),
            order_index: index as i32,
            is_optional: *is_optional,
            completed: *completed,
            completed_at: None,
            completed_by: None,
        })
        .collect()
}

proptest! {
    /// Percentage is always within 0..=100 and counts are consistent
    #[test]
    fn progress_is_bounded(flags in prop::collection::vec((any::<bool>(), any::<bool>()), 0..50)) {
        let items = build_items(&flags);
        let progress = ChecklistProgress::from_items(&items);

        prop_assert!(progress.progress_percentage <= 100);
        prop_assert_eq!(progress.total_items as usize, items.len());
        prop_assert!(progress.completed_required <= progress.required_items);
        prop_assert!(progress.completed_required <= progress.completed_items);
        prop_assert!(progress.required_items <= progress.total_items);
    }

    /// Toggling any optional item never changes the percentage or the
    /// required-completion count
    #[test]
    fn optional_toggles_never_move_percentage(
        flags in prop::collection::vec((any::<bool>(), any::<bool>()), 1..50),
        toggle_index in any::<prop::sample::Index>(),
    ) {
        let mut items = build_items(&flags);
        let optional_positions: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_optional)
            .map(|(position, _)| position)
            .collect();
        prop_assume!(!optional_positions.is_empty());

        let position = optional_positions[toggle_index.index(optional_positions.len())];
        let before = ChecklistProgress::from_items(&items);

        items[position].completed = !items[position].completed;
        let after = ChecklistProgress::from_items(&items);

        prop_assert_eq!(before.progress_percentage, after.progress_percentage);
        prop_assert_eq!(before.completed_required, after.completed_required);
    }

    /// All required items complete means exactly 100 percent
    #[test]
    fn all_required_complete_is_full_progress(
        optional_flags in prop::collection::vec(any::<bool>(), 1..50),
    ) {
        prop_assume!(optional_flags.iter().any(|is_optional| !is_optional));

        let flags: Vec<(bool, bool)> = optional_flags
            .iter()
            .map(|&is_optional| (is_optional, !is_optional))
            .collect();
        let items = build_items(&flags);
        let progress = ChecklistProgress::from_items(&items);

        prop_assert_eq!(progress.progress_percentage, 100);
    }

    /// A checklist with no required items always reports zero percent
    #[test]
    fn all_optional_is_zero_progress(
        completed_flags in prop::collection::vec(any::<bool>(), 0..50),
    ) {
        let flags: Vec<(bool, bool)> = completed_flags
            .iter()
            .map(|&completed| (true, completed))
            .collect();
        let items = build_items(&flags);

        prop_assert_eq!(ChecklistProgress::from_items(&items).progress_percentage, 0);
    }
}
