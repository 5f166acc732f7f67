//! Property tests for the ordered entity store.

use proptest::prelude::*;
use rb_core::{EntityStore, Update};
use rb_model::{DisplayField, DisplayFieldPatch, NewReportField, ReportId};

fn display_field(position: u32, name: &str) -> DisplayField {
    let mut field = DisplayField::from_new(
        NewReportField::new(name, name),
        ReportId::new(1),
        position,
    );
    field.name = name.to_string();
    field
}

fn store_strategy() -> impl Strategy<Value = EntityStore<DisplayField>> {
    prop::collection::btree_set(0u32..64, 0..24).prop_map(|positions| {
        EntityStore::load_all(
            positions
                .into_iter()
                .map(|p| display_field(p, &format!("n{p}"))),
        )
    })
}

/// Unique positions in random order.
fn distinct_positions(max: u32, count: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::btree_set(0..max, 0..count)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #[test]
    fn load_all_iterates_in_position_order(
        positions in distinct_positions(500, 40)
    ) {
        let store = EntityStore::load_all(positions.iter().map(|p| display_field(*p, "x")));
        let seen: Vec<u32> = store.iter().map(|f| f.position).collect();
        let mut expected = positions.clone();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn insertion_order_does_not_matter(
        positions in distinct_positions(100, 20)
    ) {
        let forward = positions
            .iter()
            .fold(EntityStore::new(), |s, p| s.add_one(display_field(*p, "x")));
        let backward = positions
            .iter()
            .rev()
            .fold(EntityStore::new(), |s, p| s.add_one(display_field(*p, "x")));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn add_one_upserts(store in store_strategy(), position in 0u32..64) {
        let before = store.len();
        let existed = store.contains(position);
        let next = store.add_one(display_field(position, "fresh"));
        prop_assert_eq!(next.len(), if existed { before } else { before + 1 });
        prop_assert_eq!(next.get(position).map(|f| f.name.as_str()), Some("fresh"));
        prop_assert_eq!(next.iter().filter(|f| f.position == position).count(), 1);
    }

    #[test]
    fn update_on_absent_key_changes_nothing(store in store_strategy(), position in 64u32..128) {
        let patch = DisplayFieldPatch { width: Some(99), ..Default::default() };
        prop_assert_eq!(store.update_one(&Update::new(position, patch)), store);
    }

    #[test]
    fn removal_is_idempotent_and_never_renumbers(store in store_strategy(), position in 0u32..64) {
        let once = store.remove_one(position);
        let twice = once.remove_one(position);
        prop_assert_eq!(&once, &twice);
        let survivors: Vec<u32> = store
            .iter()
            .map(|f| f.position)
            .filter(|p| *p != position)
            .collect();
        let remaining: Vec<u32> = twice.iter().map(|f| f.position).collect();
        prop_assert_eq!(remaining, survivors);
    }

    #[test]
    fn next_position_never_collides(store in store_strategy()) {
        prop_assert!(!store.contains(store.next_position()));
    }

    #[test]
    fn reorder_keeps_members_and_renumbers(store in store_strategy(), pick in any::<prop::sample::Index>(), to in 0usize..30) {
        prop_assume!(!store.is_empty());
        let key = store.keys()[pick.index(store.len())];
        let moved_name = store.get(key).map(|f| f.name.clone());
        let next = store.reorder(key, to);
        prop_assert_eq!(next.len(), store.len());
        let positions: Vec<u32> = next.iter().map(|f| f.position).collect();
        let expected: Vec<u32> = (0..next.len() as u32).collect();
        prop_assert_eq!(positions, expected);
        let landed = to.min(store.len() - 1);
        prop_assert_eq!(next.iter().nth(landed).map(|f| f.name.clone()), moved_name);
    }
}
