//! Stable, direction-aware sorting.
//!
//! Provides [`Dir`] for sort direction, [`SortSpec`] for the field/direction
//! pair, and [`stable_sort`] which orders a collection without disturbing
//! the relative order of equal keys.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::traits::Listable;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to a base comparison.
    ///
    /// Reversing the comparison rather than the sorted output is what keeps
    /// equal keys in their original order for `Desc`.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the other direction.
    pub fn flip(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The field and direction a collection is sorted by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub dir: Dir,
}

impl SortSpec {
    /// Ascending sort on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        SortSpec {
            field: field.into(),
            dir: Dir::Asc,
        }
    }

    /// Descending sort on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        SortSpec {
            field: field.into(),
            dir: Dir::Desc,
        }
    }

    /// Sort on `field` in direction `dir`.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        SortSpec {
            field: field.into(),
            dir,
        }
    }

    /// The spec a column-header click produces.
    ///
    /// Clicking the column already sorted ascending flips it to descending;
    /// any other click sorts the clicked column ascending.
    pub fn toggled(&self, field: &str) -> SortSpec {
        if self.field == field && self.dir == Dir::Asc {
            SortSpec::desc(field)
        } else {
            SortSpec::asc(field)
        }
    }

    /// Compares two field values according to this spec.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        self.dir.apply(compare_values(a, b))
    }
}

/// Total order over field values.
///
/// Values of the same kind use their natural order. Values of different kinds
/// order by kind, with [`Value::None`] lowest, so a record missing the sort
/// field comes first ascending and last descending.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a.total_cmp(*b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::Enum(a), Value::Enum(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => a.kind_rank().cmp(&b.kind_rank()),
    }
}

/// Sorts a collection by `spec`, returning references in sorted order.
///
/// The input slice is left untouched. Records whose keys compare equal keep
/// their original relative order in both directions.
pub fn stable_sort<'a, T, F>(items: &'a [T], spec: &SortSpec, accessor: F) -> Vec<&'a T>
where
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    let mut sorted: Vec<&'a T> = items.iter().collect();
    sort_refs(&mut sorted, spec, &accessor);
    sorted
}

/// [`stable_sort`] for [`Listable`] records.
pub fn sort_listable<'a, T: Listable>(items: &'a [T], spec: &SortSpec) -> Vec<&'a T> {
    stable_sort(items, spec, T::accessor)
}

pub(crate) fn sort_refs<T, F>(refs: &mut [&T], spec: &SortSpec, accessor: &F)
where
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    // slice::sort_by is a stable merge sort
    refs.sort_by(|a, b| {
        let val_a = accessor(*a, &spec.field);
        let val_b = accessor(*b, &spec.field);
        spec.compare(&val_a, &val_b)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Number, Timestamp};

    #[derive(Debug, PartialEq)]
    struct Room {
        id: u32,
        number: String,
        rate: Option<f64>,
    }

    fn accessor<'a>(room: &'a Room, field: &str) -> Value<'a> {
        match field {
            "id" => Value::Number(Number::from(room.id)),
            "number" => Value::String(&room.number),
            "rate" => room.rate.map_or(Value::None, |r| Value::Number(Number::F64(r))),
            _ => Value::None,
        }
    }

    fn room(id: u32, number: &str, rate: Option<f64>) -> Room {
        Room {
            id,
            number: number.to_string(),
            rate,
        }
    }

    fn ids(rooms: &[&Room]) -> Vec<u32> {
        rooms.iter().map(|r| r.id).collect()
    }

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display_and_flip() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
        assert_eq!(Dir::Asc.flip(), Dir::Desc);
    }

    #[test]
    fn toggled_flips_only_same_ascending_field() {
        let spec = SortSpec::asc("number");
        assert_eq!(spec.toggled("number"), SortSpec::desc("number"));
        assert_eq!(SortSpec::desc("number").toggled("number"), SortSpec::asc("number"));
        assert_eq!(spec.toggled("rate"), SortSpec::asc("rate"));
    }

    #[test]
    fn compare_same_kind() {
        assert_eq!(
            compare_values(&Value::String("101"), &Value::String("102")),
            Ordering::Less
        );
        assert_eq!(
            compare_values(
                &Value::Timestamp(Timestamp(2000)),
                &Value::Timestamp(Timestamp(1000))
            ),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(&Value::Bool(false), &Value::Bool(true)),
            Ordering::Less
        );
    }

    #[test]
    fn compare_missing_is_minimal() {
        assert_eq!(
            compare_values(&Value::None, &Value::String("a")),
            Ordering::Less
        );
        assert_eq!(compare_values(&Value::None, &Value::None), Ordering::Equal);
    }

    #[test]
    fn sort_ascending_keeps_ties_in_order() {
        let rooms = vec![
            room(1, "B", None),
            room(2, "A", None),
            room(3, "B", None),
            room(4, "A", None),
        ];
        let sorted = stable_sort(&rooms, &SortSpec::asc("number"), accessor);
        assert_eq!(ids(&sorted), vec![2, 4, 1, 3]);
    }

    #[test]
    fn sort_descending_keeps_ties_in_original_order() {
        let rooms = vec![
            room(1, "B", None),
            room(2, "A", None),
            room(3, "B", None),
            room(4, "A", None),
        ];
        let sorted = stable_sort(&rooms, &SortSpec::desc("number"), accessor);
        // ties are not reversed
        assert_eq!(ids(&sorted), vec![1, 3, 2, 4]);
    }

    #[test]
    fn sort_does_not_mutate_input() {
        let rooms = vec![room(3, "C", None), room(1, "A", None)];
        let _ = stable_sort(&rooms, &SortSpec::asc("id"), accessor);
        assert_eq!(rooms[0].id, 3);
    }

    #[test]
    fn missing_values_first_ascending_last_descending() {
        let rooms = vec![
            room(1, "a", Some(90.0)),
            room(2, "b", None),
            room(3, "c", Some(40.0)),
        ];
        let asc = stable_sort(&rooms, &SortSpec::asc("rate"), accessor);
        assert_eq!(ids(&asc), vec![2, 3, 1]);

        let desc = stable_sort(&rooms, &SortSpec::desc("rate"), accessor);
        assert_eq!(ids(&desc), vec![1, 3, 2]);
    }

    #[test]
    fn unknown_field_keeps_original_order() {
        let rooms = vec![room(2, "b", None), room(1, "a", None)];
        let sorted = stable_sort(&rooms, &SortSpec::asc("floor"), accessor);
        assert_eq!(ids(&sorted), vec![2, 1]);
    }
}
