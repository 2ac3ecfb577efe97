//! Lookup primitives over catalog records.
//!
//! Both searches are read-only and report a miss as `None`; a miss is an
//! ordinary outcome, not an error.

use std::cmp::Ordering;

use confereai_core::{Entity, ItemCode};

/// Unordered search: scan in the given order and return the first match.
pub fn linear_find<'a, R>(records: &'a [R], code: &str) -> Option<&'a R>
where
    R: Entity<Id = ItemCode>,
{
    records.iter().find(|r| r.id().as_str() == code)
}

/// Ordered search over records sorted ascending by code.
///
/// # Precondition
///
/// `sorted_records` must already be sorted ascending by code (see
/// [`sort_by_code`]). The input is not checked; on unsorted input the result is
/// unspecified (it may miss a record that is present).
pub fn binary_find<'a, R>(sorted_records: &'a [R], code: &str) -> Option<&'a R>
where
    R: Entity<Id = ItemCode>,
{
    if sorted_records.is_empty() {
        return None;
    }

    // Inclusive bounds [lo, hi].
    let (mut lo, mut hi) = (0usize, sorted_records.len() - 1);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let candidate = &sorted_records[mid];
        match candidate.id().as_str().cmp(code) {
            Ordering::Equal => return Some(candidate),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                hi = mid - 1;
            }
        }
    }

    None
}

/// Copy of `records` sorted ascending by code, ready for [`binary_find`].
pub fn sort_by_code<R>(records: &[R]) -> Vec<R>
where
    R: Entity<Id = ItemCode> + Clone,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.id().cmp(b.id()));
    sorted
}

pub fn is_sorted_by_code<R>(records: &[R]) -> bool
where
    R: Entity<Id = ItemCode>,
{
    records.windows(2).all(|w| w[0].id() <= w[1].id())
}
