//! A growable array list over a manually managed contiguous buffer.
//!
//! `DynArray<T>` owns a heap allocation of `cap` slots of which the first
//! `len` hold live elements, in insertion order. All growth, shifting and
//! bounds checking is done by hand; the backing store is never exposed.

use std::alloc::{self, Layout};
use std::cmp;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

use crate::error::{Error, Result};

/// A dynamically resizable array with indexed access.
///
/// Elements occupy slots `[0, len)` contiguously; slots `[len, cap)` are
/// uninitialized. The capacity is never zero and grows geometrically
/// (`cap + cap/2 + 1`) when an append or insert runs out of room.
///
/// Fallible operations return [`Error`] instead of panicking; a rejected call
/// leaves the array unchanged.
pub struct DynArray<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T> DynArray<T> {
    /// Capacity used when none (or zero) is requested.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Creates an empty array with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty array with the given capacity.
    ///
    /// A capacity of zero silently substitutes [`DEFAULT_CAPACITY`]; the
    /// backing buffer of a live array is never empty.
    ///
    /// [`DEFAULT_CAPACITY`]: Self::DEFAULT_CAPACITY
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = if capacity == 0 {
            Self::DEFAULT_CAPACITY
        } else {
            capacity
        };

        DynArray {
            ptr: Self::allocate(cap),
            cap,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an array holding a copy of `elems`, in order, with capacity
    /// equal to `elems.len()` (default capacity if the slice is empty).
    pub fn from_slice(elems: &[T]) -> Self
    where
        T: Clone,
    {
        let mut arr = Self::with_capacity(elems.len());
        arr.push_all(elems);
        arr
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Appends `elem` at the logical end, growing the buffer first if full.
    pub fn push(&mut self, elem: T) {
        let end = self.len;
        self.insert_raw(elem, end);
    }

    /// Inserts `elem` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` is allowed and equivalent to [`push`](Self::push).
    pub fn insert(&mut self, elem: T, index: usize) -> Result<()> {
        self.check_insert_index(index)?;
        self.insert_raw(elem, index);
        Ok(())
    }

    /// Appends a copy of every element of `elems`, preserving order.
    ///
    /// Returns whether the array changed; an empty slice is a no-op
    /// returning `false`.
    pub fn push_all(&mut self, elems: &[T]) -> bool
    where
        T: Clone,
    {
        let end = self.len;
        self.insert_slice_raw(elems, end)
    }

    /// Inserts a copy of `elems` starting at `index`, shifting the tail
    /// right by `elems.len()`.
    ///
    /// The index is validated before any shifting, so a rejected call leaves
    /// the array untouched. Returns whether the array changed.
    pub fn insert_all(&mut self, elems: &[T], index: usize) -> Result<bool>
    where
        T: Clone,
    {
        self.check_insert_index(index)?;
        Ok(self.insert_slice_raw(elems, index))
    }

    /// Replaces the element at `index`, dropping the old value.
    pub fn set(&mut self, elem: T, index: usize) -> Result<()> {
        self.check_index(index)?;
        unsafe {
            *self.ptr.as_ptr().add(index) = elem;
        }
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        unsafe { Ok(&*self.ptr.as_ptr().add(index)) }
    }

    /// Removes and returns the element at `index`, shifting `(index, len)`
    /// one slot left.
    ///
    /// An empty array reports [`Error::Empty`] before any index check, so
    /// removal from an empty array never reports `IndexOutOfRange`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        self.check_index(index)?;

        unsafe {
            let removed = ptr::read(self.ptr.as_ptr().add(index));
            self.shift_left(index + 1);
            self.len -= 1;
            Ok(removed)
        }
    }

    /// Drops every live element and resets the length to zero.
    ///
    /// The capacity is unchanged.
    pub fn clear(&mut self) {
        let live = self.len;
        // Length goes to zero first: if an element's drop panics the rest
        // leak rather than getting dropped twice.
        self.len = 0;
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), live));
        }
    }

    /// Grows the buffer so it holds at least `min_capacity` slots.
    ///
    /// A no-op when the current capacity already suffices. Otherwise the new
    /// capacity is `max(min_capacity, cap + cap/2 + 1)`: geometric growth
    /// amortizes appends, the `max` takes over when a bulk insert needs more
    /// than the formula yields.
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        if min_capacity <= self.cap {
            return;
        }

        let grown = self.cap + self.cap / 2 + 1;
        let new_cap = cmp::max(grown, min_capacity);
        let new_ptr = Self::allocate(new_cap);
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            Self::release(self.ptr, self.cap);
        }
        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    // --- Private ---

    /// Insertion with a pre-validated index.
    fn insert_raw(&mut self, elem: T, index: usize) {
        if self.len == self.cap {
            self.ensure_capacity(self.len + 1);
        }
        unsafe {
            self.shift_right(index, 1);
            ptr::write(self.ptr.as_ptr().add(index), elem);
        }
        self.len += 1;
    }

    /// Bulk insertion with a pre-validated index.
    fn insert_slice_raw(&mut self, elems: &[T], index: usize) -> bool
    where
        T: Clone,
    {
        if elems.is_empty() {
            return false;
        }
        if elems.len() > self.cap - self.len {
            self.ensure_capacity(self.len + elems.len());
        }

        let tail = self.len - index;
        unsafe {
            self.shift_right(index, elems.len());
            // The hole at [index, index + elems.len()) still holds bit-copies
            // of the shifted tail, and Clone is user code that may unwind.
            // The length excludes the hole and grows one slot per completed
            // clone, so an unwind leaks the shifted tail instead of dropping
            // any element twice.
            self.len = index;
            for (offset, elem) in elems.iter().enumerate() {
                ptr::write(self.ptr.as_ptr().add(index + offset), elem.clone());
                self.len += 1;
            }
            self.len += tail;
        }
        true
    }

    /// Moves `[from, len)` up by `by` slots.
    ///
    /// Source and destination overlap inside the same buffer, so the copy
    /// runs from the highest index downward.
    ///
    /// SAFETY: caller must guarantee `len + by <= cap`.
    unsafe fn shift_right(&mut self, from: usize, by: usize) {
        let base = self.ptr.as_ptr();
        for i in (from..self.len).rev() {
            ptr::copy_nonoverlapping(base.add(i), base.add(i + by), 1);
        }
    }

    /// Moves `[from, len)` down by one slot, closing the gap at `from - 1`.
    ///
    /// The overlapping copy runs from the lowest index upward.
    ///
    /// SAFETY: caller must guarantee `from >= 1` and that the slot at
    /// `from - 1` has already been moved out.
    unsafe fn shift_left(&mut self, from: usize) {
        let base = self.ptr.as_ptr();
        for i in from..self.len {
            ptr::copy_nonoverlapping(base.add(i), base.add(i - 1), 1);
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Insertion additionally accepts `index == len`.
    fn check_insert_index(&self, index: usize) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Allocates an uninitialized buffer of `cap` slots.
    ///
    /// Zero-sized element types never allocate; the dangling pointer is
    /// valid for every read and write of a ZST.
    fn allocate(cap: usize) -> NonNull<T> {
        if mem::size_of::<T>() == 0 {
            return NonNull::dangling();
        }

        let layout = Self::buffer_layout(cap);
        let ptr = unsafe { alloc::alloc(layout) };
        match NonNull::new(ptr.cast::<T>()) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        }
    }

    /// SAFETY: `ptr` must have been returned by `allocate(cap)`.
    unsafe fn release(ptr: NonNull<T>, cap: usize) {
        if mem::size_of::<T>() != 0 {
            alloc::dealloc(ptr.as_ptr().cast::<u8>(), Self::buffer_layout(cap));
        }
    }

    fn buffer_layout(cap: usize) -> Layout {
        match Layout::array::<T>(cap) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        }
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            Self::release(self.ptr, self.cap);
        }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality covers the live elements only; two arrays with equal contents
/// but different capacities compare equal.
impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// The array exclusively owns its elements, exactly like a Box of them.
unsafe impl<T: Send> Send for DynArray<T> {}
unsafe impl<T: Sync> Sync for DynArray<T> {}
