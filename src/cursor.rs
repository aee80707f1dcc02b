//! Random-access cursors over flat views.
//!
//! A [`Cursor`] is a parent reference plus a signed index, the same shape as a
//! C++ random-access iterator. The index may wander outside `[0, len)` (one
//! past the end, one before the beginning) the way a raw pointer can; only
//! dereferencing validates it.
//!
//! ```text
//!  begin()                 end()
//!     │                      │
//!     ▼                      ▼
//!   [ a │ b │ c │ d │ e ]
//!   ▲                    ▲
//!   │                    │
//!  rend()              rbegin()   (a ReverseCursor reads base - 1)
//! ```
//!
//! In checked builds (see [`CHECKED`](crate::CHECKED)) cursors verify that
//! they are dereferenceable and that two cursors being compared or subtracted
//! share the same parent. Failures go to the
//! [violation hook](crate::set_violation_hook).
//!
//! [`CursorMut`] hands out `&mut` access. It borrows its parent exclusively, so
//! at most one exists per view at a time. It converts into a read-only
//! [`Cursor`], never the other way around.

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Add, AddAssign, Deref, DerefMut, Sub, SubAssign};
use core::ptr;

use crate::config::CHECKED;
use crate::error::ViewError;
use crate::hook::report;

/// A view that cursors can walk.
pub trait Indexed {
    type Item;

    /// The elements of the view, empty for a null view.
    fn elements(&self) -> &[Self::Item];
}

/// A view that mutable cursors can walk.
pub trait IndexedMut: Indexed {
    fn elements_mut(&mut self) -> &mut [Self::Item];
}

fn dereferenceable(index: isize, len: usize) -> bool {
    index >= 0 && (index as usize) < len
}

#[inline(always)]
#[track_caller]
fn element<T>(elements: &[T], index: isize) -> &T {
    if CHECKED {
        // SAFETY: checked builds validate `index` against this same slice
        // before calling, and `report` never returns.
        unsafe { elements.get_unchecked(index as usize) }
    } else {
        &elements[index as usize]
    }
}

/// A read-only random-access cursor.
pub struct Cursor<'v, V: ?Sized> {
    parent: Option<&'v V>,
    index: isize,
}

static_assertions::assert_eq_size!(Cursor<'static, crate::ArrayView<'static, u8>>, [usize; 2]);

impl<V: ?Sized> Clone for Cursor<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: ?Sized> Copy for Cursor<'_, V> {}

impl<V: ?Sized> Default for Cursor<'_, V> {
    fn default() -> Self {
        Cursor {
            parent: None,
            index: 0,
        }
    }
}

impl<V: ?Sized> fmt::Debug for Cursor<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("parent", &self.parent.map(|p| p as *const V as *const ()))
            .field("index", &self.index)
            .finish()
    }
}

impl<'v, V: Indexed + ?Sized> Cursor<'v, V> {
    /// A cursor with no parent. Never dereferenceable.
    pub const fn null() -> Self {
        Cursor {
            parent: None,
            index: 0,
        }
    }

    pub const fn new(parent: &'v V, index: isize) -> Self {
        Cursor {
            parent: Some(parent),
            index,
        }
    }

    pub const fn index(&self) -> isize {
        self.index
    }

    pub const fn parent(&self) -> Option<&'v V> {
        self.parent
    }

    pub const fn is_null(&self) -> bool {
        self.parent.is_none()
    }

    /// The parent's elements, fetched once per access. Empty for a null cursor.
    fn elements(&self) -> &'v [V::Item] {
        match self.parent {
            Some(parent) => parent.elements(),
            None => &[],
        }
    }

    pub fn is_dereferenceable(&self) -> bool {
        self.parent.is_some() && dereferenceable(self.index, self.elements().len())
    }

    /// The element under the cursor.
    #[track_caller]
    pub fn get(&self) -> &'v V::Item {
        let elements = self.elements();
        self.check_position(self.index, elements, "Cursor::get");
        element(elements, self.index)
    }

    /// The element `n` positions away from the cursor, like `it[n]`.
    #[track_caller]
    pub fn at(&self, n: isize) -> &'v V::Item {
        let elements = self.elements();
        self.check_position(self.index, elements, "Cursor::at");
        let target = self.index.saturating_add(n);
        self.check_position(target, elements, "Cursor::at");
        element(elements, target)
    }

    #[inline(always)]
    #[track_caller]
    fn check_position(&self, index: isize, elements: &[V::Item], operation: &'static str) {
        if CHECKED && (self.parent.is_none() || !dereferenceable(index, elements.len())) {
            report(
                operation,
                ViewError::InvalidCursor {
                    index,
                    len: elements.len(),
                },
            );
        }
    }

    /// Signed distance from `origin` to `self`, like `self - origin`.
    #[track_caller]
    pub fn offset_from(&self, origin: &Self) -> isize {
        self.check_same_parent(origin, "Cursor::offset_from");
        self.index.wrapping_sub(origin.index)
    }

    /// Pre-increment.
    #[track_caller]
    pub fn inc(&mut self) -> &mut Self {
        self.advance(1, "Cursor::inc")
    }

    /// Pre-decrement.
    #[track_caller]
    pub fn dec(&mut self) -> &mut Self {
        self.advance(-1, "Cursor::dec")
    }

    /// Post-increment: moves forward and returns the previous position.
    #[track_caller]
    pub fn post_inc(&mut self) -> Self {
        let previous = *self;
        self.advance(1, "Cursor::post_inc");
        previous
    }

    /// Post-decrement: moves back and returns the previous position.
    #[track_caller]
    pub fn post_dec(&mut self) -> Self {
        let previous = *self;
        self.advance(-1, "Cursor::post_dec");
        previous
    }

    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    #[inline]
    #[track_caller]
    fn advance(&mut self, displacement: isize, operation: &'static str) -> &mut Self {
        if CHECKED && self.parent.is_none() {
            report(
                operation,
                ViewError::InvalidCursor {
                    index: self.index,
                    len: 0,
                },
            );
        }
        self.index = self.index.wrapping_add(displacement);
        self
    }

    #[inline]
    #[track_caller]
    fn check_same_parent(&self, other: &Self, operation: &'static str) {
        if CHECKED && !same_parent(self.parent, other.parent) {
            report(operation, ViewError::CrossContainer);
        }
    }
}

fn same_parent<V: ?Sized>(a: Option<&V>, b: Option<&V>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => ptr::addr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl<V: Indexed + ?Sized> Deref for Cursor<'_, V> {
    type Target = V::Item;

    #[track_caller]
    fn deref(&self) -> &V::Item {
        self.get()
    }
}

impl<V: Indexed + ?Sized> Add<isize> for Cursor<'_, V> {
    type Output = Self;

    #[track_caller]
    fn add(mut self, displacement: isize) -> Self {
        self.advance(displacement, "Cursor::add");
        self
    }
}

impl<V: Indexed + ?Sized> Sub<isize> for Cursor<'_, V> {
    type Output = Self;

    #[track_caller]
    fn sub(mut self, displacement: isize) -> Self {
        self.advance(displacement.wrapping_neg(), "Cursor::sub");
        self
    }
}

impl<V: Indexed + ?Sized> AddAssign<isize> for Cursor<'_, V> {
    #[track_caller]
    fn add_assign(&mut self, displacement: isize) {
        self.advance(displacement, "Cursor::add_assign");
    }
}

impl<V: Indexed + ?Sized> SubAssign<isize> for Cursor<'_, V> {
    #[track_caller]
    fn sub_assign(&mut self, displacement: isize) {
        self.advance(displacement.wrapping_neg(), "Cursor::sub_assign");
    }
}

impl<'v, V: Indexed + ?Sized> Sub for Cursor<'v, V> {
    type Output = isize;

    #[track_caller]
    fn sub(self, origin: Self) -> isize {
        self.offset_from(&origin)
    }
}

impl<V: Indexed + ?Sized> PartialEq for Cursor<'_, V> {
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        self.check_same_parent(other, "Cursor::eq");
        self.index == other.index
    }
}

impl<V: Indexed + ?Sized> Eq for Cursor<'_, V> {}

impl<V: Indexed + ?Sized> PartialOrd for Cursor<'_, V> {
    #[track_caller]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Indexed + ?Sized> Ord for Cursor<'_, V> {
    #[track_caller]
    fn cmp(&self, other: &Self) -> Ordering {
        self.check_same_parent(other, "Cursor::cmp");
        self.index.cmp(&other.index)
    }
}

/// Walks a [`Cursor`] backwards. Dereferences the element just before its base,
/// so `ReverseCursor::new(end)` reads the last element.
pub struct ReverseCursor<'v, V: ?Sized> {
    base: Cursor<'v, V>,
}

impl<V: ?Sized> Clone for ReverseCursor<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: ?Sized> Copy for ReverseCursor<'_, V> {}

impl<V: ?Sized> fmt::Debug for ReverseCursor<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReverseCursor").field(&self.base).finish()
    }
}

impl<'v, V: Indexed + ?Sized> ReverseCursor<'v, V> {
    pub const fn new(base: Cursor<'v, V>) -> Self {
        ReverseCursor { base }
    }

    /// The underlying forward cursor, one past the element this one reads.
    pub const fn base(&self) -> Cursor<'v, V> {
        self.base
    }

    #[track_caller]
    pub fn get(&self) -> &'v V::Item {
        let mut current = self.base;
        current.dec();
        current.get()
    }

    #[track_caller]
    pub fn inc(&mut self) -> &mut Self {
        self.base.dec();
        self
    }

    #[track_caller]
    pub fn dec(&mut self) -> &mut Self {
        self.base.inc();
        self
    }

    #[track_caller]
    pub fn offset_from(&self, origin: &Self) -> isize {
        origin.base.offset_from(&self.base)
    }
}

impl<V: Indexed + ?Sized> Add<isize> for ReverseCursor<'_, V> {
    type Output = Self;

    #[track_caller]
    fn add(self, displacement: isize) -> Self {
        ReverseCursor::new(self.base - displacement)
    }
}

impl<V: Indexed + ?Sized> Sub<isize> for ReverseCursor<'_, V> {
    type Output = Self;

    #[track_caller]
    fn sub(self, displacement: isize) -> Self {
        ReverseCursor::new(self.base + displacement)
    }
}

impl<V: Indexed + ?Sized> PartialEq for ReverseCursor<'_, V> {
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<V: Indexed + ?Sized> Eq for ReverseCursor<'_, V> {}

impl<V: Indexed + ?Sized> PartialOrd for ReverseCursor<'_, V> {
    #[track_caller]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Indexed + ?Sized> Ord for ReverseCursor<'_, V> {
    #[track_caller]
    fn cmp(&self, other: &Self) -> Ordering {
        other.base.cmp(&self.base)
    }
}

/// A mutable random-access cursor.
pub struct CursorMut<'v, V: ?Sized> {
    parent: Option<&'v mut V>,
    index: isize,
}

impl<V: ?Sized> Default for CursorMut<'_, V> {
    fn default() -> Self {
        CursorMut {
            parent: None,
            index: 0,
        }
    }
}

impl<V: ?Sized> fmt::Debug for CursorMut<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field(
                "parent",
                &self.parent.as_deref().map(|p| p as *const V as *const ()),
            )
            .field("index", &self.index)
            .finish()
    }
}

impl<'v, V: IndexedMut + ?Sized> CursorMut<'v, V> {
    pub const fn null() -> Self {
        CursorMut {
            parent: None,
            index: 0,
        }
    }

    pub fn new(parent: &'v mut V, index: isize) -> Self {
        CursorMut {
            parent: Some(parent),
            index,
        }
    }

    pub const fn index(&self) -> isize {
        self.index
    }

    pub const fn is_null(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_dereferenceable(&self) -> bool {
        self.as_cursor().is_dereferenceable()
    }

    /// A read-only cursor at the same position, borrowing this one.
    pub fn as_cursor(&self) -> Cursor<'_, V> {
        Cursor {
            parent: self.parent.as_deref(),
            index: self.index,
        }
    }

    #[track_caller]
    pub fn get(&self) -> &V::Item {
        self.as_cursor().get()
    }

    #[track_caller]
    pub fn get_mut(&mut self) -> &mut V::Item {
        let index = self.index;
        let Some(parent) = self.parent.as_deref_mut() else {
            if CHECKED {
                report("CursorMut::get_mut", ViewError::InvalidCursor { index, len: 0 });
            }
            panic!("dereferenced a null cursor");
        };
        let elements = parent.elements_mut();
        if CHECKED {
            if !dereferenceable(index, elements.len()) {
                report(
                    "CursorMut::get_mut",
                    ViewError::InvalidCursor {
                        index,
                        len: elements.len(),
                    },
                );
            }
            // SAFETY: `index` was validated against this parent above.
            unsafe { elements.get_unchecked_mut(index as usize) }
        } else {
            &mut elements[index as usize]
        }
    }

    #[track_caller]
    pub fn inc(&mut self) -> &mut Self {
        self.advance(1, "CursorMut::inc")
    }

    #[track_caller]
    pub fn dec(&mut self) -> &mut Self {
        self.advance(-1, "CursorMut::dec")
    }

    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    #[track_caller]
    fn advance(&mut self, displacement: isize, operation: &'static str) -> &mut Self {
        if CHECKED && self.parent.is_none() {
            report(
                operation,
                ViewError::InvalidCursor {
                    index: self.index,
                    len: 0,
                },
            );
        }
        self.index = self.index.wrapping_add(displacement);
        self
    }
}

impl<'v, V: ?Sized> From<CursorMut<'v, V>> for Cursor<'v, V> {
    fn from(cursor: CursorMut<'v, V>) -> Self {
        Cursor {
            parent: cursor.parent.map(|parent| &*parent),
            index: cursor.index,
        }
    }
}

impl<V: IndexedMut + ?Sized> Deref for CursorMut<'_, V> {
    type Target = V::Item;

    #[track_caller]
    fn deref(&self) -> &V::Item {
        self.get()
    }
}

impl<V: IndexedMut + ?Sized> DerefMut for CursorMut<'_, V> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut V::Item {
        self.get_mut()
    }
}

impl<V: IndexedMut + ?Sized> Add<isize> for CursorMut<'_, V> {
    type Output = Self;

    #[track_caller]
    fn add(mut self, displacement: isize) -> Self {
        self.advance(displacement, "CursorMut::add");
        self
    }
}

impl<V: IndexedMut + ?Sized> Sub<isize> for CursorMut<'_, V> {
    type Output = Self;

    #[track_caller]
    fn sub(mut self, displacement: isize) -> Self {
        self.advance(displacement.wrapping_neg(), "CursorMut::sub");
        self
    }
}

impl<V: IndexedMut + ?Sized> AddAssign<isize> for CursorMut<'_, V> {
    #[track_caller]
    fn add_assign(&mut self, displacement: isize) {
        self.advance(displacement, "CursorMut::add_assign");
    }
}

impl<V: IndexedMut + ?Sized> SubAssign<isize> for CursorMut<'_, V> {
    #[track_caller]
    fn sub_assign(&mut self, displacement: isize) {
        self.advance(displacement.wrapping_neg(), "CursorMut::sub_assign");
    }
}

/// Iterates the elements between two cursors of the same view.
pub struct Iter<'v, V: ?Sized> {
    front: Cursor<'v, V>,
    back: Cursor<'v, V>,
}

impl<V: ?Sized> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
        }
    }
}

impl<V: ?Sized> fmt::Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front.index)
            .field("back", &self.back.index)
            .finish()
    }
}

impl<'v, V: Indexed + ?Sized> Iter<'v, V> {
    /// Iterates `[begin, end)`. Both cursors must share a parent.
    #[track_caller]
    pub fn new(begin: Cursor<'v, V>, end: Cursor<'v, V>) -> Self {
        begin.check_same_parent(&end, "Iter::new");
        Iter {
            front: begin,
            back: end,
        }
    }

    fn remaining(&self) -> usize {
        self.back.index.saturating_sub(self.front.index).max(0) as usize
    }
}

impl<'v, V: Indexed + ?Sized> Iterator for Iter<'v, V> {
    type Item = &'v V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front.index >= self.back.index {
            return None;
        }
        let item = self.front.get();
        self.front.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<V: Indexed + ?Sized> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front.index >= self.back.index {
            return None;
        }
        self.back.index -= 1;
        Some(self.back.get())
    }
}

impl<V: Indexed + ?Sized> ExactSizeIterator for Iter<'_, V> {}

impl<V: Indexed + ?Sized> FusedIterator for Iter<'_, V> {}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;
