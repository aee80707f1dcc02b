//! Flat, non-owning views over contiguous elements.
//!
//! An [`ArrayView`] is a base pointer and an element count, two words, `Copy`.
//! It borrows the memory it looks at for `'a`, so the owner cannot free or move
//! the buffer while a view is alive:
//!
//! ```
//! use array_view::ArrayView;
//!
//! let samples = vec![3, 1, 4, 1, 5, 9];
//! let view = ArrayView::from(&samples);
//!
//! assert_eq!(view.len(), 6);
//! assert_eq!(view[2], 4);
//! assert_eq!(*view.at(5), 9);
//! assert_eq!(view.slice(1, 3).as_slice(), &[1, 4, 1]);
//! assert_eq!(view.iter().rev().copied().collect::<Vec<_>>(), [9, 5, 1, 4, 1, 3]);
//! ```
//!
//! [`ArrayViewMut`] is the writable counterpart. It is move-only, like
//! `&mut [T]`, and converts one way into an [`ArrayView`].
//!
//! # Null views
//!
//! `ArrayView::null()` (also `Default`) has a null base pointer and no elements.
//! It is the only state in which [`is_null`](ArrayView::is_null) is true.
//! Iterating it yields nothing; [`at`](ArrayView::at) on it is a violation.
//!
//! # Equality and ordering
//!
//! Two views are equal when they cover the same memory, or when they have the
//! same length and equal elements. Views of different lengths are never equal.
//! A shared base address alone is not enough, unlike a pointer-only `==`:
//!
//! ```
//! use array_view::ArrayView;
//!
//! let data = [1, 2, 3, 4, 5];
//! let view = ArrayView::from(&data);
//! assert_eq!(view.slice(0, 2).as_ptr(), view.as_ptr());
//! assert_ne!(view.slice(0, 2), view);
//! ```
//!
//! Ordering is by base address only, through
//! [`addr_cmp`](ArrayView::addr_cmp) and [`AddressKey`].

use core::cell::Cell;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use core::ptr;

use crate::config::CHECKED;
use crate::contiguous::{Contiguous, ContiguousMut};
use crate::cursor::{Cursor, CursorMut, Indexed, IndexedMut, Iter, ReverseCursor};
use crate::error::ViewError;
use crate::hook::report;

/// A read-only view of `len` elements starting at `ptr`.
pub struct ArrayView<'a, T> {
    ptr: *const T,
    len: usize,
    _marker: PhantomData<&'a [T]>,
}

/// A writable view of `len` elements starting at `ptr`.
pub struct ArrayViewMut<'a, T> {
    ptr: *mut T,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

static_assertions::assert_eq_size!(ArrayView<'static, u64>, [usize; 2]);
static_assertions::assert_eq_size!(ArrayViewMut<'static, u64>, [usize; 2]);

// Same auto-trait semantics as `&[T]` and `&mut [T]`.
unsafe impl<T: Sync> Send for ArrayView<'_, T> {}
unsafe impl<T: Sync> Sync for ArrayView<'_, T> {}
unsafe impl<T: Send> Send for ArrayViewMut<'_, T> {}
unsafe impl<T: Sync> Sync for ArrayViewMut<'_, T> {}

/// Sub-view bounds. `Ok(None)` means "empty view".
fn slice_bounds(
    is_null: bool,
    len: usize,
    offset: usize,
    count: usize,
) -> Result<Option<(usize, usize)>, ViewError> {
    if is_null || len == 0 || count == 0 {
        return Ok(None);
    }
    if offset >= len || count > len - offset {
        return Err(ViewError::SliceOutOfRange { offset, count, len });
    }
    Ok(Some((offset, count)))
}

fn element_index(is_null: bool, len: usize, index: usize) -> Result<usize, ViewError> {
    if is_null || len == 0 {
        return Err(ViewError::NullView);
    }
    if index >= len {
        return Err(ViewError::OutOfBounds { index, len });
    }
    Ok(index)
}

/// Shorthand for [`ArrayView::from_container`].
pub fn make_array_view<C>(container: &C) -> ArrayView<'_, C::Element>
where
    C: Contiguous + ?Sized,
{
    ArrayView::from_container(container)
}

impl<'a, T> ArrayView<'a, T> {
    /// The null view: no base address, no elements.
    pub const fn null() -> Self {
        ArrayView {
            ptr: ptr::null(),
            len: 0,
            _marker: PhantomData,
        }
    }

    pub const fn from_slice(slice: &'a [T]) -> Self {
        ArrayView {
            ptr: slice.as_ptr(),
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    /// Snapshots the base address and length of `container`.
    pub fn from_container<C>(container: &'a C) -> Self
    where
        C: Contiguous<Element = T> + ?Sized,
    {
        ArrayView {
            ptr: container.base_ptr(),
            len: container.element_count(),
            _marker: PhantomData,
        }
    }

    /// Builds a view from a raw pointer and an element count.
    ///
    /// A null `ptr` yields the null view regardless of `len`.
    ///
    /// # Safety
    ///
    /// Unless `ptr` is null, it must be valid for reads of `len` initialized,
    /// properly aligned elements, and the memory must not be mutated through
    /// any other path for `'a`.
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self {
        ArrayView {
            ptr,
            len: if ptr.is_null() { 0 } else { len },
            _marker: PhantomData,
        }
    }

    /// Returns to the null state. The referenced memory is untouched.
    pub fn reset(&mut self) {
        *self = Self::null();
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `len() * size_of::<T>()`.
    pub const fn size_bytes(&self) -> usize {
        self.len * size_of::<T>()
    }

    #[doc(alias = "data")]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    pub fn as_slice(&self) -> &'a [T] {
        if self.ptr.is_null() {
            &[]
        } else {
            // SAFETY: a non-null view always describes `len` readable elements for 'a.
            unsafe { core::slice::from_raw_parts(self.ptr, self.len) }
        }
    }

    /// The elements from `offset` to the end.
    ///
    /// Slicing a null or empty view gives the null view. Otherwise `offset`
    /// must be less than `len()`; `slice_from(len())` is a violation, not an
    /// empty view.
    #[track_caller]
    pub fn slice_from(&self, offset: usize) -> Self {
        match self.try_slice_from(offset) {
            Ok(view) => view,
            Err(error) => report("ArrayView::slice_from", error),
        }
    }

    /// `count` elements starting at `offset`, sharing this view's memory.
    ///
    /// A zero `count`, or a null or empty source, gives the null view.
    #[track_caller]
    pub fn slice(&self, offset: usize, count: usize) -> Self {
        match self.try_slice(offset, count) {
            Ok(view) => view,
            Err(error) => report("ArrayView::slice", error),
        }
    }

    pub fn try_slice_from(&self, offset: usize) -> Result<Self, ViewError> {
        if self.ptr.is_null() || self.len == 0 {
            return Ok(Self::null());
        }
        if offset >= self.len {
            return Err(ViewError::SliceOutOfRange {
                offset,
                count: 0,
                len: self.len,
            });
        }
        self.try_slice(offset, self.len - offset)
    }

    pub fn try_slice(&self, offset: usize, count: usize) -> Result<Self, ViewError> {
        Ok(match slice_bounds(self.ptr.is_null(), self.len, offset, count)? {
            // SAFETY: `slice_bounds` keeps [offset, offset + count) inside this view.
            Some((offset, count)) => unsafe { Self::from_raw_parts(self.ptr.add(offset), count) },
            None => Self::null(),
        })
    }

    /// The element at `index`. Validated in every build mode.
    #[track_caller]
    pub fn at(&self, index: usize) -> &'a T {
        match self.try_at(index) {
            Ok(element) => element,
            Err(error) => report("ArrayView::at", error),
        }
    }

    pub fn try_at(&self, index: usize) -> Result<&'a T, ViewError> {
        let index = element_index(self.ptr.is_null(), self.len, index)?;
        // SAFETY: `element_index` checked `index < len` on a non-null view.
        Ok(unsafe { &*self.ptr.add(index) })
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.as_slice().get(index)
    }

    /// # Safety
    ///
    /// `index` must be less than `len()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &'a T {
        // SAFETY: guaranteed by the caller.
        unsafe { &*self.ptr.add(index) }
    }

    /// Indexed access with the build-mode dependent checks of `view[index]`.
    #[inline]
    #[track_caller]
    fn index_ref(&self, index: usize, operation: &'static str) -> &'a T {
        if CHECKED {
            if let Err(error) = element_index(self.ptr.is_null(), self.len, index) {
                report(operation, error);
            }
            // SAFETY: validated just above.
            unsafe { &*self.ptr.add(index) }
        } else {
            &self.as_slice()[index]
        }
    }

    #[track_caller]
    pub fn front(&self) -> &'a T {
        self.index_ref(0, "ArrayView::front")
    }

    #[track_caller]
    pub fn back(&self) -> &'a T {
        self.index_ref(self.len.wrapping_sub(1), "ArrayView::back")
    }

    /// A cursor at `index`, or a null cursor if this view is null.
    pub fn cursor(&self, index: isize) -> Cursor<'_, Self> {
        if self.ptr.is_null() {
            Cursor::null()
        } else {
            Cursor::new(self, index)
        }
    }

    pub fn begin(&self) -> Cursor<'_, Self> {
        self.cursor(0)
    }

    pub fn end(&self) -> Cursor<'_, Self> {
        self.cursor(self.len as isize)
    }

    pub fn cbegin(&self) -> Cursor<'_, Self> {
        self.begin()
    }

    pub fn cend(&self) -> Cursor<'_, Self> {
        self.end()
    }

    pub fn rbegin(&self) -> ReverseCursor<'_, Self> {
        ReverseCursor::new(self.end())
    }

    pub fn rend(&self) -> ReverseCursor<'_, Self> {
        ReverseCursor::new(self.begin())
    }

    pub fn crbegin(&self) -> ReverseCursor<'_, Self> {
        self.rbegin()
    }

    pub fn crend(&self) -> ReverseCursor<'_, Self> {
        self.rend()
    }

    pub fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self.begin(), self.end())
    }

    /// Compares base addresses, ignoring contents.
    pub fn addr_cmp(&self, other: &Self) -> Ordering {
        self.ptr.cmp(&other.ptr)
    }

    /// A key that orders and hashes this view by base address.
    pub fn by_address(&self) -> AddressKey {
        AddressKey {
            addr: self.ptr.addr(),
        }
    }

    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl<T> Clone for ArrayView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayView<'_, T> {}

impl<T> Default for ArrayView<'_, T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        // Identical views are equal without comparing elements, so `v == v` holds even for NaN.
        (ptr::eq(self.ptr, other.ptr) && self.len == other.len)
            || self.as_slice() == other.as_slice()
    }
}

impl<T> Index<usize> for ArrayView<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.index_ref(index, "ArrayView::index")
    }
}

impl<T> Indexed for ArrayView<'_, T> {
    type Item = T;

    fn elements(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, C> From<&'a C> for ArrayView<'a, C::Element>
where
    C: Contiguous + ?Sized,
{
    fn from(container: &'a C) -> Self {
        Self::from_container(container)
    }
}

impl<'a, T> From<ArrayViewMut<'a, T>> for ArrayView<'a, T> {
    fn from(view: ArrayViewMut<'a, T>) -> Self {
        view.into_view()
    }
}

impl<'a, T> IntoIterator for ArrayView<'a, T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'v, 'a, T> IntoIterator for &'v ArrayView<'a, T> {
    type Item = &'v T;
    type IntoIter = Iter<'v, ArrayView<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Orders and hashes views by base address, for use as a map or set key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressKey {
    addr: usize,
}

impl AddressKey {
    pub const fn addr(&self) -> usize {
        self.addr
    }
}

impl<'a, T> ArrayViewMut<'a, T> {
    pub const fn null() -> Self {
        ArrayViewMut {
            ptr: ptr::null_mut(),
            len: 0,
            _marker: PhantomData,
        }
    }

    pub fn from_slice(slice: &'a mut [T]) -> Self {
        ArrayViewMut {
            ptr: slice.as_mut_ptr(),
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    pub fn from_container<C>(container: &'a mut C) -> Self
    where
        C: ContiguousMut<Element = T> + ?Sized,
    {
        let len = container.element_count();
        ArrayViewMut {
            ptr: container.base_mut_ptr(),
            len,
            _marker: PhantomData,
        }
    }

    /// # Safety
    ///
    /// Unless `ptr` is null, it must be valid for reads and writes of `len`
    /// initialized, properly aligned elements, and not accessed through any
    /// other path for `'a`.
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Self {
        ArrayViewMut {
            ptr,
            len: if ptr.is_null() { 0 } else { len },
            _marker: PhantomData,
        }
    }

    /// A read-only view of the same memory, borrowing this one.
    pub fn as_view(&self) -> ArrayView<'_, T> {
        // SAFETY: the shared borrow of `self` keeps writes out while the view lives.
        unsafe { ArrayView::from_raw_parts(self.ptr, self.len) }
    }

    /// Gives up write access for the rest of `'a`.
    pub fn into_view(self) -> ArrayView<'a, T> {
        // SAFETY: `self` is consumed, so nothing can write through it any more.
        unsafe { ArrayView::from_raw_parts(self.ptr, self.len) }
    }

    /// Reinterprets the elements as cells, giving a `Copy` view whose copies
    /// can all read and write the same memory.
    pub fn into_cells(self) -> ArrayView<'a, Cell<T>> {
        let cells = Cell::from_mut(self.into_mut_slice()).as_slice_of_cells();
        ArrayView::from_slice(cells)
    }

    /// A shorter-lived mutable view of the same memory.
    pub fn reborrow(&mut self) -> ArrayViewMut<'_, T> {
        // SAFETY: the exclusive borrow of `self` is handed to the new view.
        unsafe { ArrayViewMut::from_raw_parts(self.ptr, self.len) }
    }

    pub fn reset(&mut self) {
        *self = Self::null();
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn size_bytes(&self) -> usize {
        self.len * size_of::<T>()
    }

    #[doc(alias = "data")]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    pub fn as_slice(&self) -> &[T] {
        self.as_view().as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.reborrow().into_mut_slice()
    }

    pub fn into_mut_slice(self) -> &'a mut [T] {
        if self.ptr.is_null() {
            &mut []
        } else {
            // SAFETY: a non-null view describes `len` writable elements, exclusively, for 'a.
            unsafe { core::slice::from_raw_parts_mut(self.ptr, self.len) }
        }
    }

    #[track_caller]
    pub fn slice_from(&self, offset: usize) -> ArrayView<'_, T> {
        match self.as_view().try_slice_from(offset) {
            Ok(view) => view,
            Err(error) => report("ArrayViewMut::slice_from", error),
        }
    }

    #[track_caller]
    pub fn slice(&self, offset: usize, count: usize) -> ArrayView<'_, T> {
        match self.as_view().try_slice(offset, count) {
            Ok(view) => view,
            Err(error) => report("ArrayViewMut::slice", error),
        }
    }

    /// A writable sub-view, with the same rules as [`ArrayView::slice`].
    #[track_caller]
    pub fn slice_mut(&mut self, offset: usize, count: usize) -> ArrayViewMut<'_, T> {
        match self.try_slice_mut(offset, count) {
            Ok(view) => view,
            Err(error) => report("ArrayViewMut::slice_mut", error),
        }
    }

    pub fn try_slice_mut(
        &mut self,
        offset: usize,
        count: usize,
    ) -> Result<ArrayViewMut<'_, T>, ViewError> {
        Ok(match slice_bounds(self.ptr.is_null(), self.len, offset, count)? {
            // SAFETY: in bounds, and the exclusive borrow of `self` moves to the sub-view.
            Some((offset, count)) => unsafe {
                ArrayViewMut::from_raw_parts(self.ptr.add(offset), count)
            },
            None => ArrayViewMut::null(),
        })
    }

    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        match self.try_at(index) {
            Ok(element) => element,
            Err(error) => report("ArrayViewMut::at", error),
        }
    }

    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        match self.try_at_mut(index) {
            Ok(element) => element,
            Err(error) => report("ArrayViewMut::at_mut", error),
        }
    }

    pub fn try_at(&self, index: usize) -> Result<&T, ViewError> {
        let index = element_index(self.ptr.is_null(), self.len, index)?;
        // SAFETY: in bounds on a non-null view.
        Ok(unsafe { &*self.ptr.add(index) })
    }

    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T, ViewError> {
        let index = element_index(self.ptr.is_null(), self.len, index)?;
        // SAFETY: in bounds on a non-null view, and `self` is borrowed exclusively.
        Ok(unsafe { &mut *self.ptr.add(index) })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// # Safety
    ///
    /// `index` must be less than `len()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: guaranteed by the caller.
        unsafe { &*self.ptr.add(index) }
    }

    /// # Safety
    ///
    /// `index` must be less than `len()`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: guaranteed by the caller.
        unsafe { &mut *self.ptr.add(index) }
    }

    #[inline]
    #[track_caller]
    fn index_mut_ref(&mut self, index: usize, operation: &'static str) -> &mut T {
        if CHECKED {
            if let Err(error) = element_index(self.ptr.is_null(), self.len, index) {
                report(operation, error);
            }
            // SAFETY: validated just above.
            unsafe { &mut *self.ptr.add(index) }
        } else {
            &mut self.as_mut_slice()[index]
        }
    }

    #[track_caller]
    pub fn front(&self) -> &T {
        self.as_view().index_ref(0, "ArrayViewMut::front")
    }

    #[track_caller]
    pub fn back(&self) -> &T {
        self.as_view()
            .index_ref(self.len.wrapping_sub(1), "ArrayViewMut::back")
    }

    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        self.index_mut_ref(0, "ArrayViewMut::front_mut")
    }

    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        self.index_mut_ref(self.len.wrapping_sub(1), "ArrayViewMut::back_mut")
    }

    pub fn cursor(&self, index: isize) -> Cursor<'_, Self> {
        if self.ptr.is_null() {
            Cursor::null()
        } else {
            Cursor::new(self, index)
        }
    }

    pub fn begin(&self) -> Cursor<'_, Self> {
        self.cursor(0)
    }

    pub fn end(&self) -> Cursor<'_, Self> {
        self.cursor(self.len as isize)
    }

    pub fn cbegin(&self) -> Cursor<'_, Self> {
        self.begin()
    }

    pub fn cend(&self) -> Cursor<'_, Self> {
        self.end()
    }

    pub fn rbegin(&self) -> ReverseCursor<'_, Self> {
        ReverseCursor::new(self.end())
    }

    pub fn rend(&self) -> ReverseCursor<'_, Self> {
        ReverseCursor::new(self.begin())
    }

    pub fn crbegin(&self) -> ReverseCursor<'_, Self> {
        self.rbegin()
    }

    pub fn crend(&self) -> ReverseCursor<'_, Self> {
        self.rend()
    }

    /// A writable cursor at `index`, or a null cursor if this view is null.
    pub fn cursor_mut(&mut self, index: isize) -> CursorMut<'_, Self> {
        if self.ptr.is_null() {
            CursorMut::null()
        } else {
            CursorMut::new(self, index)
        }
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, Self> {
        self.cursor_mut(0)
    }

    pub fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self.begin(), self.end())
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    pub fn addr_cmp(&self, other: &Self) -> Ordering {
        self.ptr.cmp(&other.ptr)
    }

    pub fn by_address(&self) -> AddressKey {
        AddressKey {
            addr: self.ptr.addr(),
        }
    }

    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl<T> Default for ArrayViewMut<'_, T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayViewMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_view() == other.as_view()
    }
}

impl<T> Index<usize> for ArrayViewMut<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.as_view().index_ref(index, "ArrayViewMut::index")
    }
}

impl<T> IndexMut<usize> for ArrayViewMut<'_, T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.index_mut_ref(index, "ArrayViewMut::index_mut")
    }
}

impl<T> Indexed for ArrayViewMut<'_, T> {
    type Item = T;

    fn elements(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> IndexedMut for ArrayViewMut<'_, T> {
    fn elements_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, C> From<&'a mut C> for ArrayViewMut<'a, C::Element>
where
    C: ContiguousMut + ?Sized,
{
    fn from(container: &'a mut C) -> Self {
        Self::from_container(container)
    }
}

impl<'a, T> IntoIterator for ArrayViewMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_mut_slice().iter_mut()
    }
}

impl<'v, T> IntoIterator for &'v mut ArrayViewMut<'_, T> {
    type Item = &'v mut T;
    type IntoIter = core::slice::IterMut<'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
#[path = "array_view_test.rs"]
mod array_view_test;
