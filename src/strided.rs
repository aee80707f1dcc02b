//! Strided views: one field of an array of records, seen as an array.
//!
//! ```
//! use array_view::strided_view;
//!
//! #[derive(Clone, Copy)]
//! struct Vertex {
//!     position: [f32; 3],
//!     normal: [f32; 3],
//!     uv: [f32; 2],
//! }
//!
//! let verts = [
//!     Vertex { position: [0.0; 3], normal: [0.0, 0.0, 1.0], uv: [0.0, 0.0] },
//!     Vertex { position: [1.0; 3], normal: [0.0, 1.0, 0.0], uv: [1.0, 1.0] },
//! ];
//!
//! let normals = strided_view!(&verts, Vertex, normal);
//! assert_eq!(normals.len(), 2);
//! assert_eq!(normals[1], [0.0, 1.0, 0.0]);
//! assert_eq!(normals.stride_bytes(), size_of::<Vertex>());
//! ```
//!
//! The field offset and the record stride are const generic parameters, so they
//! cost nothing at runtime and two views of different fields have different
//! types. A view stores the base address and the byte extent of the records;
//! `len()` is `size_bytes() / STRIDE`.
//!
//! Layout requirements are checked at compile time: the field must fit inside
//! the stride, be aligned for `T`, and (for [`StridedView::from_records`]) the
//! record size must equal the stride.
//!
//! Strided views have no slicing and no iterators. Access is by index only.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use core::ptr;

use crate::config::CHECKED;
use crate::error::ViewError;
use crate::hook::{out_of_bounds, report};

/// A read-only view of the `T` at byte `OFFSET` of each `STRIDE`-byte record.
pub struct StridedView<'a, T, const OFFSET: usize, const STRIDE: usize> {
    base: *const u8,
    size_bytes: usize,
    _marker: PhantomData<&'a [T]>,
}

/// A writable view of the `T` at byte `OFFSET` of each `STRIDE`-byte record.
pub struct StridedViewMut<'a, T, const OFFSET: usize, const STRIDE: usize> {
    base: *mut u8,
    size_bytes: usize,
    _marker: PhantomData<&'a mut [T]>,
}

static_assertions::assert_eq_size!(StridedView<'static, u32, 4, 12>, [usize; 2]);
static_assertions::assert_eq_size!(StridedViewMut<'static, u32, 4, 12>, [usize; 2]);

unsafe impl<T: Sync, const O: usize, const S: usize> Send for StridedView<'_, T, O, S> {}
unsafe impl<T: Sync, const O: usize, const S: usize> Sync for StridedView<'_, T, O, S> {}
unsafe impl<T: Send, const O: usize, const S: usize> Send for StridedViewMut<'_, T, O, S> {}
unsafe impl<T: Sync, const O: usize, const S: usize> Sync for StridedViewMut<'_, T, O, S> {}

struct Layout<T, const OFFSET: usize, const STRIDE: usize>(PhantomData<T>);

impl<T, const OFFSET: usize, const STRIDE: usize> Layout<T, OFFSET, STRIDE> {
    const FIELD: () = {
        assert!(STRIDE > 0, "stride must be non-zero");
        assert!(
            OFFSET + size_of::<T>() <= STRIDE,
            "field does not fit inside the record stride"
        );
        assert!(
            OFFSET % align_of::<T>() == 0 && STRIDE % align_of::<T>() == 0,
            "field is misaligned for its type"
        );
    };

    const fn record<R>() {
        assert!(
            size_of::<R>() == STRIDE,
            "record size must equal the stride"
        );
        assert!(
            align_of::<R>() % align_of::<T>() == 0,
            "record alignment is too small for the field type"
        );
    }
}

#[inline(always)]
#[track_caller]
fn check_index(is_null: bool, len: usize, index: usize, operation: &'static str) {
    if CHECKED {
        if is_null {
            report(operation, ViewError::NullView);
        }
        if index >= len {
            report(operation, ViewError::OutOfBounds { index, len });
        }
    } else if index >= len {
        out_of_bounds(index, len);
    }
}

fn try_index(is_null: bool, len: usize, index: usize) -> Result<(), ViewError> {
    if is_null {
        return Err(ViewError::NullView);
    }
    if index >= len {
        return Err(ViewError::OutOfBounds { index, len });
    }
    Ok(())
}

fn extent(size_bytes: usize, stride: usize, constructor: &'static str) -> usize {
    if size_bytes % stride != 0 {
        tracing::warn!(
            constructor,
            size_bytes,
            stride,
            "byte extent is not a multiple of the stride; trailing bytes are ignored"
        );
    }
    size_bytes
}

/// Pins down the field type for [`strided_view!`] and [`strided_view_mut!`].
/// Returns `project` unchanged.
#[doc(hidden)]
pub fn field_of<R, T, F: Fn(&R) -> &T>(project: F) -> F {
    project
}

impl<'a, T, const OFFSET: usize, const STRIDE: usize> StridedView<'a, T, OFFSET, STRIDE> {
    pub const fn null() -> Self {
        let () = Layout::<T, OFFSET, STRIDE>::FIELD;
        StridedView {
            base: ptr::null(),
            size_bytes: 0,
            _marker: PhantomData,
        }
    }

    /// Views the `T` at `OFFSET` in each of `records`.
    ///
    /// Prefer [`strided_view!`](crate::strided_view), which derives `OFFSET`
    /// and `STRIDE` from a named field and is safe.
    ///
    /// # Safety
    ///
    /// Every record must hold an initialized, valid `T` at byte `OFFSET`, and
    /// those bytes must not be mutated through another path for `'a`.
    pub unsafe fn from_records<R>(records: &'a [R]) -> Self {
        let () = Layout::<T, OFFSET, STRIDE>::FIELD;
        const { Layout::<T, OFFSET, STRIDE>::record::<R>() };
        StridedView {
            base: records.as_ptr().cast(),
            size_bytes: size_of_val(records),
            _marker: PhantomData,
        }
    }

    /// Builds a view over `size_bytes` bytes of records starting at `base`.
    ///
    /// A null `base` yields the null view. A byte extent that is not a
    /// multiple of `STRIDE` is accepted; the partial record is ignored.
    ///
    /// # Safety
    ///
    /// Unless `base` is null, it must be valid for reads of `size_bytes`
    /// bytes, aligned for `T` after adding `OFFSET`, and hold a valid `T` at
    /// `OFFSET` of every whole record.
    pub unsafe fn from_raw_parts(base: *const u8, size_bytes: usize) -> Self {
        let () = Layout::<T, OFFSET, STRIDE>::FIELD;
        if base.is_null() {
            return Self::null();
        }
        StridedView {
            base,
            size_bytes: extent(size_bytes, STRIDE, "StridedView::from_raw_parts"),
            _marker: PhantomData,
        }
    }

    #[doc(hidden)]
    pub unsafe fn from_projected<R, F: Fn(&R) -> &T>(records: &'a [R], _project: F) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_records(records) }
    }

    /// Base address of the first record.
    #[doc(alias = "data")]
    pub const fn as_ptr(&self) -> *const u8 {
        self.base
    }

    pub const fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    pub const fn len(&self) -> usize {
        self.size_bytes / STRIDE
    }

    pub const fn is_empty(&self) -> bool {
        self.size_bytes == 0
    }

    pub const fn offset_bytes(&self) -> usize {
        OFFSET
    }

    pub const fn stride_bytes(&self) -> usize {
        STRIDE
    }

    pub fn is_null(&self) -> bool {
        self.base.is_null()
    }

    /// `base + index * STRIDE + OFFSET`. Never checked; the result is only
    /// meaningful for `index < len()`.
    #[doc(alias = "get_item_raw_ptr")]
    pub fn raw_item_ptr(&self, index: usize) -> *const u8 {
        self.base
            .wrapping_add(index.wrapping_mul(STRIDE))
            .wrapping_add(OFFSET)
    }

    /// The element at `index`. Validated in every build mode.
    #[track_caller]
    pub fn at(&self, index: usize) -> &'a T {
        match self.try_at(index) {
            Ok(element) => element,
            Err(error) => report("StridedView::at", error),
        }
    }

    pub fn try_at(&self, index: usize) -> Result<&'a T, ViewError> {
        try_index(self.base.is_null(), self.len(), index)?;
        // SAFETY: in bounds on a non-null view.
        Ok(unsafe { self.get_unchecked(index) })
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.try_at(index).ok()
    }

    /// # Safety
    ///
    /// `index` must be less than `len()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &'a T {
        // SAFETY: guaranteed by the caller; construction fixed the layout.
        unsafe { &*self.raw_item_ptr(index).cast::<T>() }
    }

    #[inline]
    #[track_caller]
    fn index_ref(&self, index: usize, operation: &'static str) -> &'a T {
        check_index(self.base.is_null(), self.len(), index, operation);
        // SAFETY: `check_index` diverges unless `index < len()` on a non-null view.
        unsafe { self.get_unchecked(index) }
    }

    #[track_caller]
    pub fn front(&self) -> &'a T {
        self.index_ref(0, "StridedView::front")
    }

    #[track_caller]
    pub fn back(&self) -> &'a T {
        self.index_ref(self.len().wrapping_sub(1), "StridedView::back")
    }

    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl<T, const O: usize, const S: usize> Clone for StridedView<'_, T, O, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const O: usize, const S: usize> Copy for StridedView<'_, T, O, S> {}

impl<T, const O: usize, const S: usize> Default for StridedView<'_, T, O, S> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: fmt::Debug, const O: usize, const S: usize> fmt::Debug for StridedView<'_, T, O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: every index below `len()` is valid.
        f.debug_list()
            .entries((0..self.len()).map(|i| unsafe { self.get_unchecked(i) }))
            .finish()
    }
}

impl<T, const O: usize, const S: usize> Index<usize> for StridedView<'_, T, O, S> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.index_ref(index, "StridedView::index")
    }
}

impl<'a, T, const OFFSET: usize, const STRIDE: usize> StridedViewMut<'a, T, OFFSET, STRIDE> {
    pub const fn null() -> Self {
        let () = Layout::<T, OFFSET, STRIDE>::FIELD;
        StridedViewMut {
            base: ptr::null_mut(),
            size_bytes: 0,
            _marker: PhantomData,
        }
    }

    /// # Safety
    ///
    /// Every record must hold an initialized, valid `T` at byte `OFFSET`, and
    /// any valid `T` written there must leave the record valid.
    pub unsafe fn from_records<R>(records: &'a mut [R]) -> Self {
        let () = Layout::<T, OFFSET, STRIDE>::FIELD;
        const { Layout::<T, OFFSET, STRIDE>::record::<R>() };
        StridedViewMut {
            size_bytes: size_of_val(records),
            base: records.as_mut_ptr().cast(),
            _marker: PhantomData,
        }
    }

    /// # Safety
    ///
    /// As for [`StridedView::from_raw_parts`], and `base` must also be valid
    /// for writes and not accessed through another path for `'a`.
    pub unsafe fn from_raw_parts(base: *mut u8, size_bytes: usize) -> Self {
        let () = Layout::<T, OFFSET, STRIDE>::FIELD;
        if base.is_null() {
            return Self::null();
        }
        StridedViewMut {
            base,
            size_bytes: extent(size_bytes, STRIDE, "StridedViewMut::from_raw_parts"),
            _marker: PhantomData,
        }
    }

    #[doc(hidden)]
    pub unsafe fn from_projected<R, F: Fn(&R) -> &T>(records: &'a mut [R], _project: F) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_records(records) }
    }

    /// A read-only view of the same fields, borrowing this one.
    pub fn as_view(&self) -> StridedView<'_, T, OFFSET, STRIDE> {
        StridedView {
            base: self.base,
            size_bytes: self.size_bytes,
            _marker: PhantomData,
        }
    }

    pub fn into_view(self) -> StridedView<'a, T, OFFSET, STRIDE> {
        StridedView {
            base: self.base,
            size_bytes: self.size_bytes,
            _marker: PhantomData,
        }
    }

    #[doc(alias = "data")]
    pub const fn as_ptr(&self) -> *const u8 {
        self.base
    }

    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.base
    }

    pub const fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    pub const fn len(&self) -> usize {
        self.size_bytes / STRIDE
    }

    pub const fn is_empty(&self) -> bool {
        self.size_bytes == 0
    }

    pub const fn offset_bytes(&self) -> usize {
        OFFSET
    }

    pub const fn stride_bytes(&self) -> usize {
        STRIDE
    }

    pub fn is_null(&self) -> bool {
        self.base.is_null()
    }

    #[doc(alias = "get_item_raw_ptr")]
    pub fn raw_item_ptr(&mut self, index: usize) -> *mut u8 {
        self.base
            .wrapping_add(index.wrapping_mul(STRIDE))
            .wrapping_add(OFFSET)
    }

    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        match self.as_view().try_at(index) {
            Ok(element) => element,
            Err(error) => report("StridedViewMut::at", error),
        }
    }

    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        match self.try_at_mut(index) {
            Ok(element) => element,
            Err(error) => report("StridedViewMut::at_mut", error),
        }
    }

    pub fn try_at(&self, index: usize) -> Result<&T, ViewError> {
        self.as_view().try_at(index)
    }

    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T, ViewError> {
        try_index(self.base.is_null(), self.len(), index)?;
        // SAFETY: in bounds on a non-null view.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_view().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.try_at_mut(index).ok()
    }

    /// # Safety
    ///
    /// `index` must be less than `len()`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: guaranteed by the caller; `self` is borrowed exclusively.
        unsafe { &mut *self.raw_item_ptr(index).cast::<T>() }
    }

    #[inline]
    #[track_caller]
    fn index_mut_ref(&mut self, index: usize, operation: &'static str) -> &mut T {
        check_index(self.base.is_null(), self.len(), index, operation);
        // SAFETY: `check_index` diverges unless `index < len()` on a non-null view.
        unsafe { self.get_unchecked_mut(index) }
    }

    #[track_caller]
    pub fn front(&self) -> &T {
        self.as_view().index_ref(0, "StridedViewMut::front")
    }

    #[track_caller]
    pub fn back(&self) -> &T {
        self.as_view()
            .index_ref(self.len().wrapping_sub(1), "StridedViewMut::back")
    }

    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        self.index_mut_ref(0, "StridedViewMut::front_mut")
    }

    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        self.index_mut_ref(self.len().wrapping_sub(1), "StridedViewMut::back_mut")
    }

    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl<T, const O: usize, const S: usize> Default for StridedViewMut<'_, T, O, S> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: fmt::Debug, const O: usize, const S: usize> fmt::Debug for StridedViewMut<'_, T, O, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_view().fmt(f)
    }
}

impl<T, const O: usize, const S: usize> Index<usize> for StridedViewMut<'_, T, O, S> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.as_view().index_ref(index, "StridedViewMut::index")
    }
}

impl<T, const O: usize, const S: usize> IndexMut<usize> for StridedViewMut<'_, T, O, S> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.index_mut_ref(index, "StridedViewMut::index_mut")
    }
}

impl<'a, T, const O: usize, const S: usize> From<StridedViewMut<'a, T, O, S>>
    for StridedView<'a, T, O, S>
{
    fn from(view: StridedViewMut<'a, T, O, S>) -> Self {
        view.into_view()
    }
}

/// Builds a [`StridedView`] over one named field of a slice of structs.
///
/// `strided_view!(records, Record, field)` views `field` of every element of
/// `records: &[Record]`. The offset comes from [`core::mem::offset_of!`] and
/// the stride from `size_of::<Record>()`. Only plain struct fields (named or
/// tuple-indexed) are accepted, so the view is always sound.
///
/// Fields of packed structs are rejected because they may be misaligned:
///
/// ```compile_fail
/// use array_view::strided_view;
///
/// #[repr(C, packed)]
/// struct Packed {
///     tag: u8,
///     value: u32,
/// }
///
/// let records = [Packed { tag: 0, value: 1 }];
/// let values = strided_view!(&records, Packed, value);
/// ```
///
/// So are union fields, whose contents the view cannot vouch for:
///
/// ```compile_fail
/// use array_view::strided_view;
///
/// #[derive(Clone, Copy)]
/// union Bits {
///     int: u32,
///     float: f32,
/// }
///
/// let records = [Bits { int: 1 }];
/// let floats = strided_view!(&records, Bits, float);
/// ```
#[macro_export]
macro_rules! strided_view {
    ($records:expr, $record:ty, $field:tt) => {{
        let records: &[$record] = $records;
        let project = $crate::strided::field_of::<$record, _, _>(|record| &record.$field);
        // SAFETY: `project` only compiles for a safe field access, so every record
        // holds a valid, aligned value of the field's type at its offset.
        unsafe {
            $crate::StridedView::<
                _,
                { ::core::mem::offset_of!($record, $field) },
                { ::core::mem::size_of::<$record>() },
            >::from_projected(records, project)
        }
    }};
}

/// Builds a [`StridedViewMut`] over one named field of a slice of structs.
///
/// See [`strided_view!`].
#[macro_export]
macro_rules! strided_view_mut {
    ($records:expr, $record:ty, $field:tt) => {{
        let records: &mut [$record] = $records;
        let project = $crate::strided::field_of::<$record, _, _>(|record| &record.$field);
        // SAFETY: as in `strided_view!`; writing a valid field value keeps the
        // record valid.
        unsafe {
            $crate::StridedViewMut::<
                _,
                { ::core::mem::offset_of!($record, $field) },
                { ::core::mem::size_of::<$record>() },
            >::from_projected(records, project)
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::catch_violation;
    use pretty_assertions::assert_eq;

    #[repr(C)]
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Particle {
        id: u32,
        mass: f32,
        velocity: [f32; 2],
    }

    fn particles() -> [Particle; 3] {
        [
            Particle { id: 7, mass: 1.5, velocity: [0.0, 1.0] },
            Particle { id: 8, mass: 2.5, velocity: [1.0, 0.0] },
            Particle { id: 9, mass: 3.5, velocity: [-1.0, -1.0] },
        ]
    }

    #[test]
    fn null_view_is_empty() {
        let view = StridedView::<'_, u32, 0, 16>::null();
        assert!(view.is_null());
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert_eq!(view.size_bytes(), 0);
        assert_eq!(view.get(0), None);
    }

    #[test]
    fn raw_item_ptr_follows_stride_and_offset() {
        let records = particles();
        let view = strided_view!(&records, Particle, mass);
        let base = records.as_ptr().cast::<u8>();
        assert_eq!(view.raw_item_ptr(0), base.wrapping_add(4));
        assert_eq!(view.raw_item_ptr(2), base.wrapping_add(2 * 16 + 4));
        // Past the end is still computed, just not dereferenceable.
        assert_eq!(view.raw_item_ptr(5), base.wrapping_add(5 * 16 + 4));
    }

    #[test]
    fn tuple_struct_fields() {
        #[derive(Clone, Copy)]
        struct Pair(u16, u16);

        let pairs = [Pair(1, 10), Pair(2, 20)];
        let seconds = strided_view!(&pairs, Pair, 1);
        assert_eq!(*seconds.at(0), 10);
        assert_eq!(*seconds.back(), 20);
    }

    #[test]
    fn from_raw_parts_truncates_partial_records() {
        let records = particles();
        // SAFETY: 40 bytes cover two whole records of the array.
        let view = unsafe {
            StridedView::<'_, u32, 0, 16>::from_raw_parts(records.as_ptr().cast(), 40)
        };
        assert_eq!(view.size_bytes(), 40);
        assert_eq!(view.len(), 2);
        assert_eq!(view[1], 8);
    }

    #[test]
    fn from_raw_parts_null_is_null_view() {
        // SAFETY: a null base is always accepted.
        let view = unsafe { StridedView::<'_, u32, 0, 16>::from_raw_parts(ptr::null(), 64) };
        assert!(view.is_null());
        assert_eq!(view.len(), 0);
    }

    #[test]
    fn try_at_reports_null_before_bounds() {
        let view = StridedView::<'_, u32, 0, 16>::null();
        assert_eq!(view.try_at(3), Err(ViewError::NullView));

        let records = particles();
        let ids = strided_view!(&records, Particle, id);
        assert_eq!(
            ids.try_at(3),
            Err(ViewError::OutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn at_on_null_view_is_a_violation() {
        let view = StridedView::<'_, u32, 0, 16>::null();
        let violation = catch_violation(|| *view.at(0));
        assert_eq!(violation.error, ViewError::NullView);
        assert_eq!(violation.operation, "StridedView::at");
    }

    #[test]
    fn debug_lists_fields() {
        let records = particles();
        let ids = strided_view!(&records, Particle, id);
        assert_eq!(format!("{ids:?}"), "[7, 8, 9]");
    }

    #[test]
    fn swap_exchanges_extent() {
        let records = particles();
        let mut all = strided_view!(&records, Particle, id);
        let mut none = StridedView::default();
        all.swap(&mut none);
        assert!(all.is_null());
        assert_eq!(none.len(), 3);
    }

    #[test]
    fn mutable_view_downgrades() {
        let mut records = particles();
        let mut masses = strided_view_mut!(&mut records, Particle, mass);
        *masses.front_mut() = 0.5;
        let masses: StridedView<'_, f32, 4, 16> = masses.into();
        assert_eq!(*masses.front(), 0.5);
        assert_eq!(records[0].mass, 0.5);
    }
}
