//! Grouping primitive
//!
//! Partitions rows by every slot except position `i` and collapses the values
//! at `i` into one sorted set per partition. Every strategy compresses through
//! this module.

use crate::coupon::{Coupon, Goal, Slot};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeSet;

/// Grouping key for one position: the slots before and after it.
pub(crate) type GroupKey<'a> = (&'a [Slot], &'a [Slot]);

/// Rows sharing one grouping key.
#[derive(Debug)]
pub(crate) struct Group<'a> {
    pub key: GroupKey<'a>,
    /// Union of the values seen at the grouped position
    pub values: BTreeSet<Goal>,
    /// Indices of the rows that fall into this group
    pub members: Vec<usize>,
}

impl Group<'_> {
    /// Collapse the group into one coupon with a set at the grouped position.
    pub fn into_coupon(self) -> Coupon {
        let (before, after) = self.key;
        Coupon::from_key(before, Slot::Set(self.values), after)
    }
}

/// All groups for one position, in first-seen key order.
#[derive(Debug)]
pub(crate) struct PositionGroups<'a> {
    pub groups: Vec<Group<'a>>,
}

impl<'a> PositionGroups<'a> {
    pub fn collect(rows: &'a [Coupon], position: usize) -> Self {
        let mut index: FxHashMap<GroupKey<'a>, usize> = FxHashMap::default();
        let mut groups: Vec<Group<'a>> = Vec::new();

        for (row_idx, row) in rows.iter().enumerate() {
            let (before, slot, after) = row.split_around(position);
            let key = (before, after);
            let next = groups.len();
            let group_idx = *index.entry(key).or_insert(next);
            if group_idx == next {
                groups.push(Group {
                    key,
                    values: BTreeSet::new(),
                    members: Vec::new(),
                });
            }

            let group = &mut groups[group_idx];
            slot.extend_into(&mut group.values);
            group.members.push(row_idx);
        }

        Self { groups }
    }

    /// Group merging the most rows; the earliest one wins ties.
    pub fn into_largest(self) -> Option<Group<'a>> {
        let mut best: Option<Group<'a>> = None;
        for group in self.groups {
            if best
                .as_ref()
                .map_or(true, |current| group.members.len() > current.members.len())
            {
                best = Some(group);
            }
        }
        best
    }
}

/// Number of distinct grouping keys at `position`, i.e. the row count
/// `find_combinations` would produce.
pub(crate) fn count_groups(rows: &[Coupon], position: usize) -> usize {
    rows.iter()
        .map(|row| {
            let (before, _, after) = row.split_around(position);
            (before, after)
        })
        .collect::<FxHashSet<GroupKey<'_>>>()
        .len()
}

/// Collapse position `i` of every row.
///
/// One output row per distinct grouping key. Rows are ordered by the size of
/// the collapsed set, largest first; equal sizes keep first-seen order.
///
/// # Panics
///
/// Panics if `i` is out of range for any row.
pub fn find_combinations(rows: &[Coupon], i: usize) -> Vec<Coupon> {
    let mut groups = PositionGroups::collect(rows, i).groups;
    groups.sort_by(|a, b| b.values.len().cmp(&a.values.len()));
    groups.into_iter().map(Group::into_coupon).collect()
}
