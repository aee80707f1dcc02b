//! Tests for cursors and the cursor-pair iterator

use core::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use super::*;
use crate::testing::catch_violation;
use crate::{ArrayView, ArrayViewMut, CHECKED};
use pretty_assertions::assert_eq;

#[test]
fn test_begin_end_distance() {
    let view = ArrayView::from(&[10, 20, 30, 40]);
    assert_eq!(view.end() - view.begin(), 4);
    assert_eq!(view.begin().offset_from(&view.end()), -4);
    assert_eq!(view.begin().index(), 0);
    assert_eq!(view.end().index(), 4);
}

#[test]
fn test_empty_view_begin_equals_end() {
    let empty: [u8; 0] = [];
    let view = ArrayView::from(&empty);
    assert_eq!(view.begin(), view.end());
    assert!(!view.begin().is_null());
    assert!(!view.begin().is_dereferenceable());
}

#[test]
fn test_null_view_gives_null_cursors() {
    let view = ArrayView::<u8>::null();
    assert!(view.begin().is_null());
    assert!(view.end().is_null());
    assert_eq!(view.begin(), view.end());
    assert_eq!(Cursor::<ArrayView<'_, u8>>::null(), Cursor::default());
}

#[test]
fn test_deref_and_arithmetic() {
    let view = ArrayView::from(&[10, 20, 30, 40]);

    let mut cursor = view.begin();
    assert_eq!(*cursor, 10);

    cursor += 2;
    assert_eq!(*cursor.get(), 30);

    cursor -= 1;
    assert_eq!(*cursor, 20);

    assert_eq!(*(cursor + 2isize), 40);
    assert_eq!(*(view.end() - 1isize), 40);
    assert_eq!(*view.begin().at(3), 40);
    assert_eq!(*cursor.at(1), 30);
    assert_eq!(*(view.end() - 1isize).at(-2), 20);
}

#[test]
fn test_pre_and_post_increment() {
    let view = ArrayView::from(&[1, 2, 3]);
    let mut cursor = view.begin();

    assert_eq!(*cursor.inc().get(), 2);

    let previous = cursor.post_inc();
    assert_eq!(previous.index(), 1);
    assert_eq!(cursor.index(), 2);

    let previous = cursor.post_dec();
    assert_eq!(previous.index(), 2);
    assert_eq!(cursor.index(), 1);

    cursor.dec().dec();
    assert_eq!(cursor.index(), -1);
    assert!(!cursor.is_dereferenceable());
}

#[test]
fn test_ordering() {
    let view = ArrayView::from(&[1, 2, 3]);
    let first = view.begin();
    let last = view.end() - 1isize;

    assert!(first < last);
    assert!(last <= view.end());
    assert_eq!(first.cmp(&view.begin()), Ordering::Equal);
    assert_eq!(last.max(first), last);
}

#[test]
fn test_swap() {
    let view = ArrayView::from(&[1, 2, 3, 4, 5]);

    let mut a = view.begin();
    let mut b = view.end();
    a.swap(&mut b);
    assert_eq!(a.index(), 5);
    assert_eq!(b.index(), 0);

    let mut live = view.begin();
    let mut null = Cursor::null();
    live.swap(&mut null);
    assert!(live.is_null());
    assert_eq!(*null, 1);
}

#[test]
fn test_reverse_cursor_walk() {
    let view = ArrayView::from(&[1, 2, 3, 4]);

    let mut seen = Vec::new();
    let mut cursor = view.rbegin();
    while cursor != view.rend() {
        seen.push(*cursor.get());
        cursor.inc();
    }
    assert_eq!(seen, [4, 3, 2, 1]);

    assert_eq!(view.rend().offset_from(&view.rbegin()), 4);
    assert_eq!(*(view.rbegin() + 1).get(), 3);
    assert_eq!(*(view.rend() - 1).get(), 1);
    assert!(view.rbegin() < view.rend());
    assert_eq!(view.rbegin().base(), view.end());
}

#[test]
fn test_cursor_mut_writes_through() {
    let mut data = [1, 2, 3];
    let mut view = ArrayViewMut::from(&mut data);

    {
        let mut cursor = view.begin_mut();
        *cursor += 10;
        cursor += 2;
        *cursor.get_mut() = 0;
        assert_eq!(*cursor.as_cursor(), 0);

        let read: Cursor<'_, _> = cursor.into();
        assert_eq!(read.index(), 2);
        assert_eq!(*read, 0);
    }

    let mut cursor = view.cursor_mut(1);
    cursor.dec();
    assert_eq!(*cursor, 11);
    assert_eq!(view.as_slice(), &[11, 2, 0]);
}

#[test]
fn test_null_cursor_mut() {
    let mut view = ArrayViewMut::<u32>::null();
    let cursor = view.begin_mut();
    assert!(cursor.is_null());
    assert!(!cursor.is_dereferenceable());
}

#[test]
fn test_iter_both_ends() {
    let view = ArrayView::from(&[1, 2, 3, 4, 5]);
    let mut iter = view.iter();

    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.copied().collect::<Vec<_>>(), [2, 3, 4]);
}

#[test]
fn test_iter_is_fused() {
    let view = ArrayView::from(&[7]);
    let mut iter = view.iter();
    assert_eq!(iter.next(), Some(&7));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iter_between_cursors() {
    let view = ArrayView::from(&[1, 2, 3, 4, 5]);
    let inner = Iter::new(view.begin() + 1isize, view.end() - 1isize);
    assert_eq!(inner.rev().copied().collect::<Vec<_>>(), [4, 3, 2]);

    let backwards = Iter::new(view.end(), view.begin());
    assert_eq!(backwards.len(), 0);
}

#[test]
fn test_iter_null_view() {
    let view = ArrayView::<String>::null();
    assert_eq!(view.iter().count(), 0);
    assert_eq!(view.iter().next_back(), None);
}

#[test]
fn test_deref_past_end_is_a_violation() {
    if !CHECKED {
        return;
    }
    let view = ArrayView::from(&[10, 20, 30, 40]);
    let violation = catch_violation(|| *view.end());
    assert_eq!(violation.error, ViewError::InvalidCursor { index: 4, len: 4 });
    assert_eq!(violation.operation, "Cursor::get");
}

#[test]
fn test_at_past_end_is_a_violation() {
    if !CHECKED {
        return;
    }
    let view = ArrayView::from(&[10, 20, 30, 40]);
    let violation = catch_violation(|| *view.begin().at(4));
    assert_eq!(violation.error, ViewError::InvalidCursor { index: 4, len: 4 });
    assert_eq!(violation.operation, "Cursor::at");
}

#[test]
fn test_at_before_begin_reports_signed_index() {
    if !CHECKED {
        return;
    }
    let view = ArrayView::from(&[10, 20, 30, 40]);
    let cursor = view.begin() + 1isize;
    let violation = catch_violation(|| *cursor.at(-3));
    assert_eq!(violation.error, ViewError::InvalidCursor { index: -2, len: 4 });
    assert_eq!(violation.operation, "Cursor::at");
    assert!(violation.to_string().contains("-2"), "{violation}");
}

#[test]
fn test_moving_null_cursor_is_a_violation() {
    if !CHECKED {
        return;
    }
    let mut cursor = Cursor::<ArrayView<'_, u8>>::null();
    let violation = catch_violation(|| {
        cursor.inc();
    });
    assert_eq!(violation.error, ViewError::InvalidCursor { index: 0, len: 0 });
    assert_eq!(violation.operation, "Cursor::inc");
}

#[test]
fn test_cross_container_is_a_violation() {
    if !CHECKED {
        return;
    }
    let a = ArrayView::from(&[1, 2, 3]);
    let b = ArrayView::from(&[4, 5, 6]);

    let violation = catch_violation(|| a.begin() == b.begin());
    assert_eq!(violation.error, ViewError::CrossContainer);
    assert_eq!(violation.operation, "Cursor::eq");

    let violation = catch_violation(|| a.end() - b.begin());
    assert_eq!(violation.error, ViewError::CrossContainer);
    assert_eq!(violation.operation, "Cursor::offset_from");

    let violation = catch_violation(|| Iter::new(a.begin(), b.end()));
    assert_eq!(violation.operation, "Iter::new");
}

#[test]
fn test_violation_location_is_the_caller() {
    if !CHECKED {
        return;
    }
    let view = ArrayView::from(&[1]);
    let line = line!() + 1;
    let violation = catch_violation(|| *view.end().get());
    assert_eq!(violation.location.file(), file!());
    assert_eq!(violation.location.line(), line);
}

// ============================================================================
// Parents whose elements change between calls
// ============================================================================

/// Hands out its elements on even calls and an empty slice on odd ones.
struct Flickering {
    data: [u32; 4],
    calls: Cell<usize>,
}

impl Flickering {
    fn new(data: [u32; 4]) -> Self {
        Flickering {
            data,
            calls: Cell::new(0),
        }
    }

    fn take_calls(&self) -> usize {
        self.calls.replace(0)
    }
}

impl Indexed for Flickering {
    type Item = u32;

    fn elements(&self) -> &[u32] {
        let calls = self.calls.get();
        self.calls.set(calls + 1);
        if calls % 2 == 0 {
            &self.data
        } else {
            &self.data[..0]
        }
    }
}

#[test]
fn test_each_read_fetches_elements_once() {
    let parent = Flickering::new([10, 20, 30, 40]);

    assert_eq!(*Cursor::new(&parent, 3).get(), 40);
    assert_eq!(parent.take_calls(), 1);

    assert_eq!(*Cursor::new(&parent, 3).at(-1), 30);
    assert_eq!(parent.take_calls(), 1);

    assert_eq!(*ReverseCursor::new(Cursor::new(&parent, 4)).get(), 40);
    assert_eq!(parent.take_calls(), 1);

    let mut iter = Iter::new(Cursor::new(&parent, 1), Cursor::new(&parent, 3));
    assert_eq!(iter.next(), Some(&20));
    assert_eq!(parent.take_calls(), 1);
    assert_eq!(iter.next_back(), Some(&30));
    assert_eq!(parent.take_calls(), 1);
}

#[test]
fn test_read_through_shrunken_parent_is_rejected() {
    let parent = Flickering::new([10, 20, 30, 40]);
    // The next call hands out an empty slice.
    parent.calls.set(1);

    if CHECKED {
        let violation = catch_violation(|| *Cursor::new(&parent, 3).get());
        assert_eq!(violation.error, ViewError::InvalidCursor { index: 3, len: 0 });
        assert_eq!(violation.operation, "Cursor::get");
    } else {
        let result = panic::catch_unwind(AssertUnwindSafe(|| *Cursor::new(&parent, 3).get()));
        assert!(result.is_err());
    }
}
