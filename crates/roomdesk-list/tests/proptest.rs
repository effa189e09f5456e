//! Property-based tests for the list pipeline using proptest.

use proptest::prelude::*;
use roomdesk_list::{search, stable_sort, Dir, Number, Paginator, SortSpec, Value};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone)]
struct Room {
    id: usize,
    price: i64,
    name: String,
}

fn accessor<'a>(room: &'a Room, field: &str) -> Value<'a> {
    match field {
        "id" => Value::Number(Number::from(room.id)),
        "price" => Value::Number(Number::I64(room.price)),
        "name" => Value::String(&room.name),
        _ => Value::None,
    }
}

// Small key ranges so duplicate sort keys are common.
fn rooms_strategy() -> impl Strategy<Value = Vec<Room>> {
    prop::collection::vec((0i64..5, "[a-c]{1,3}"), 0..60).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (price, name))| Room { id, price, name })
            .collect()
    })
}

fn dir_strategy() -> impl Strategy<Value = Dir> {
    prop_oneof![Just(Dir::Asc), Just(Dir::Desc)]
}

fn ids(rooms: &[&Room]) -> Vec<usize> {
    rooms.iter().map(|r| r.id).collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Records with equal keys keep their input order, in both directions.
    #[test]
    fn sort_is_stable(rooms in rooms_strategy(), dir in dir_strategy()) {
        let sorted = stable_sort(&rooms, &SortSpec::new("price", dir), accessor);

        for pair in sorted.windows(2) {
            if pair[0].price == pair[1].price {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    /// Sorting is a permutation in key order.
    #[test]
    fn sort_orders_keys(rooms in rooms_strategy(), dir in dir_strategy()) {
        let sorted = stable_sort(&rooms, &SortSpec::new("price", dir), accessor);
        prop_assert_eq!(sorted.len(), rooms.len());

        for pair in sorted.windows(2) {
            match dir {
                Dir::Asc => prop_assert!(pair[0].price <= pair[1].price),
                Dir::Desc => prop_assert!(pair[0].price >= pair[1].price),
            }
        }
    }

    /// Sorting sorted output again changes nothing.
    #[test]
    fn sort_is_idempotent(rooms in rooms_strategy(), dir in dir_strategy()) {
        let spec = SortSpec::new("name", dir);
        let once: Vec<Room> = stable_sort(&rooms, &spec, accessor)
            .into_iter()
            .cloned()
            .collect();
        let twice = stable_sort(&once, &spec, accessor);

        prop_assert_eq!(ids(&twice), once.iter().map(|r| r.id).collect::<Vec<_>>());
    }

    /// Concatenating every page rebuilds the collection exactly.
    #[test]
    fn pages_cover_collection(rooms in rooms_strategy(), page_size in 1usize..10) {
        let mut pager = Paginator::new(page_size).unwrap();
        let mut rebuilt = Vec::new();

        for page in 1..=pager.page_count(rooms.len()) {
            pager.set_page(page).unwrap();
            rebuilt.extend(pager.page(&rooms).iter().map(|r| r.id));
        }

        prop_assert_eq!(rebuilt, rooms.iter().map(|r| r.id).collect::<Vec<_>>());
    }

    /// Any page past the last one is empty.
    #[test]
    fn page_past_end_is_empty(rooms in rooms_strategy(), page_size in 1usize..10, extra in 1usize..5) {
        let mut pager = Paginator::new(page_size).unwrap();
        let past = pager.page_count(rooms.len()) + extra;
        pager.set_page(past).unwrap();
        prop_assert!(pager.page(&rooms).is_empty());
    }

    /// A collection smaller than a page always shows page 1.
    #[test]
    fn shrink_resets_page(len in 0usize..10, page_size in 1usize..10, page in 2usize..6) {
        prop_assume!(len < page_size);
        let items: Vec<usize> = (0..len).collect();
        let mut pager = Paginator::with_page(page_size, page).unwrap();

        pager.page(&items);
        prop_assert_eq!(pager.current_page(), 1);
    }

    /// An empty search term returns the collection unchanged.
    #[test]
    fn empty_term_is_identity(rooms in rooms_strategy()) {
        let found = search(&rooms, "name", "", accessor);
        prop_assert_eq!(ids(&found), rooms.iter().map(|r| r.id).collect::<Vec<_>>());
    }

    /// Search keeps order and only returns matches.
    #[test]
    fn search_is_ordered_subset(rooms in rooms_strategy(), term in "[a-cA-C]{1,2}") {
        let found = search(&rooms, "name", &term, accessor);
        let needle = term.to_lowercase();

        prop_assert!(found.iter().all(|r| r.name.contains(&needle)));
        prop_assert!(ids(&found).windows(2).all(|w| w[0] < w[1]));
        let expected = rooms.iter().filter(|r| r.name.contains(&needle)).count();
        prop_assert_eq!(found.len(), expected);
    }

    /// Integers and floats past f64 precision still sort in numeric order.
    #[test]
    fn mixed_numbers_sort_monotone(
        rows in prop::collection::vec((0u8..3, -4i64..4), 0..200),
        dir in dir_strategy(),
    ) {
        let base = 1i64 << 53;
        let numbers: Vec<Number> = rows
            .into_iter()
            .map(|(kind, offset)| match kind {
                0 => Number::I64(base + offset),
                1 => Number::U64((base + offset) as u64),
                _ => Number::F64((base + offset) as f64),
            })
            .collect();
        // Every float here is integral, so the i128 value is exact.
        let exact = |n: &Number| match *n {
            Number::I64(v) => v as i128,
            Number::U64(v) => v as i128,
            Number::F64(v) => v as i128,
        };

        let sorted = stable_sort(&numbers, &SortSpec::new("n", dir), |n, _| Value::Number(*n));
        for pair in sorted.windows(2) {
            match dir {
                Dir::Asc => prop_assert!(exact(pair[0]) <= exact(pair[1])),
                Dir::Desc => prop_assert!(exact(pair[0]) >= exact(pair[1])),
            }
        }
    }
}
