//! In-place quicksort over [`DynArray`], Hoare partition scheme.
//!
//! The algorithm touches the array exclusively through its public
//! [`get`](DynArray::get)/[`set`](DynArray::set) contract, so it works
//! against anything offering checked indexed access; this is also why the
//! element type must be `Clone` (values are copied out and written back,
//! never moved through private storage).
//!
//! The pivot is the element at the midpoint index, captured by value before
//! partitioning begins: subsequent swaps may relocate the slot it came from.
//! The sort is not stable, and recursion depth is left to partition balance
//! with no explicit cap.

use std::cmp::Ordering;

use crate::array::DynArray;
use crate::error::Result;

/// Sorts the whole array by the natural order of `T`.
pub fn sort<T>(arr: &mut DynArray<T>) -> Result<()>
where
    T: Ord + Clone,
{
    sort_by(arr, |a, b| a.cmp(b))
}

/// Sorts the whole array with `compare` deciding the order.
pub fn sort_by<T, F>(arr: &mut DynArray<T>, mut compare: F) -> Result<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if arr.len() < 2 {
        return Ok(());
    }
    sort_span(arr, 0, (arr.len() - 1) as isize, &mut compare)
}

/// Sorts the inclusive sub-range `[start, end]` with `compare`.
///
/// A range of length one or less (`start >= end`) is already sorted and
/// returns without touching the array. Indices past the end of the array
/// surface as [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange)
/// through the element accesses themselves.
pub fn sort_range<T, F>(
    arr: &mut DynArray<T>,
    start: usize,
    end: usize,
    mut compare: F,
) -> Result<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_span(arr, start as isize, end as isize, &mut compare)
}

// --- Implementation ---

// Cursors are signed: the high cursor legitimately stops at `start - 1`
// when every element of the range is >= the pivot, which for `start == 0`
// is below zero.
fn sort_span<T, F>(arr: &mut DynArray<T>, start: isize, end: isize, compare: &mut F) -> Result<()>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if start >= end {
        return Ok(());
    }

    let mut low = start;
    let mut high = end;
    // Value copy, not an index: swaps below may move the pivot's slot.
    let pivot = arr.get(((start + end) / 2) as usize)?.clone();

    loop {
        while compare(arr.get(low as usize)?, &pivot) == Ordering::Less {
            low += 1;
        }
        while compare(arr.get(high as usize)?, &pivot) == Ordering::Greater {
            high -= 1;
        }
        if low <= high {
            if low < high {
                swap(arr, low as usize, high as usize)?;
            }
            low += 1;
            high -= 1;
        }
        if low > high {
            break;
        }
    }

    sort_span(arr, start, high, compare)?;
    sort_span(arr, low, end, compare)
}

/// Swaps two elements through the public get/set contract.
fn swap<T>(arr: &mut DynArray<T>, a: usize, b: usize) -> Result<()>
where
    T: Clone,
{
    let elem_a = arr.get(a)?.clone();
    let elem_b = arr.get(b)?.clone();
    arr.set(elem_b, a)?;
    arr.set(elem_a, b)
}
