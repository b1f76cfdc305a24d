//! Stable in-place quicksort, decomposed into range primitives.
//!
//! `rotsort` sorts by composing three small transformations, each built on
//! the one below it: [`sort`] stably partitions around a pivot with
//! [`stable_partition`], which fuses independently partitioned halves with
//! [`rotate`], which is three calls to [`reverse`]. Every step is a short,
//! safe, in-place reordering of a sub-slice; no auxiliary element buffer is
//! ever allocated.
//!
//! The decomposition is the point, and it has a price: the partition step
//! spends an extra log factor of element moves compared to a linear scan,
//! and the fixed pivot choice degenerates to a quadratic comparison count on
//! adversarial inputs such as already-descending runs. Reach for
//! `slice::sort` when you need a production sort.

use core::cmp::Ordering;
use core::mem;

mod partition;
mod quicksort;
mod reverse;
mod rotate;

pub mod patterns;

pub use partition::stable_partition;
pub use reverse::reverse;
pub use rotate::rotate;

/// Sorts the slice, preserving the order of equal elements.
///
/// This sort is stable (i.e., does not reorder equal elements) and in-place
/// (i.e., does not allocate). Comparison count is *O*(*n* \* log(*n*)) on
/// average but *O*(*n*²) in the worst case, and element moves carry an extra
/// log factor from the rotation-based partition.
///
/// # Current implementation
///
/// A recursive quicksort that fixes the first element as the pivot, stably
/// partitions the remainder into elements less than the pivot and elements
/// greater or equal to it, rotates the pivot onto the boundary, and sorts
/// the two sides. Recursion always descends into the shorter side, so the
/// stack stays *O*(log(*n*)) deep even for degenerate pivots.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// rotsort::sort(&mut v);
/// assert_eq!(v, [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stable_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, preserving the order of
/// elements the comparator considers equal.
///
/// The comparator must define a total order, i.e. for all `a`, `b` and `c`
/// exactly one of `a < b`, `a == b`, `a > b` holds, and `<`, `==`, `>` are
/// each transitive. If it does not, the resulting order is unspecified, but
/// the slice still contains exactly the original elements afterwards.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// rotsort::sort_by(&mut v, |a, b| a.cmp(b));
/// assert_eq!(v, [1, 2, 3, 4, 5]);
///
/// // Only the first field is compared; payloads tag along, and equal keys
/// // keep their original order.
/// let mut pairs = [(2, 'a'), (1, 'b'), (2, 'c')];
/// rotsort::sort_by(&mut pairs, |a, b| a.0.cmp(&b.0));
/// assert_eq!(pairs, [(1, 'b'), (2, 'a'), (2, 'c')]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

// --- IMPL ---

#[inline]
fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    if v.len() < 2 {
        return;
    }

    crate::quicksort::quicksort(v, &mut is_less);
}
