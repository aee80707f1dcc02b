//! Containers that can seed a flat view.
//!
//! Anything that stores its elements back to back and knows how many it has can
//! implement [`Contiguous`]. No common base type is needed: a view built from a
//! container copies the base address and element count once, at construction.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// Element-contiguous storage.
///
/// # Safety
///
/// For as long as `self` is borrowed, `base_ptr()` must be valid for reads of
/// `element_count()` consecutive, initialized elements (or may dangle when the
/// count is zero).
pub unsafe trait Contiguous {
    type Element;

    fn base_ptr(&self) -> *const Self::Element;

    fn element_count(&self) -> usize;
}

/// Element-contiguous storage that may be written through a view.
///
/// # Safety
///
/// As for [`Contiguous`], and `base_mut_ptr()` must be valid for writes of
/// `element_count()` elements for as long as `self` is mutably borrowed. Any
/// bit pattern valid for `Element` must be acceptable to the container.
pub unsafe trait ContiguousMut: Contiguous {
    fn base_mut_ptr(&mut self) -> *mut Self::Element;
}

unsafe impl<T> Contiguous for [T] {
    type Element = T;

    fn base_ptr(&self) -> *const T {
        self.as_ptr()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

unsafe impl<T> ContiguousMut for [T] {
    fn base_mut_ptr(&mut self) -> *mut T {
        self.as_mut_ptr()
    }
}

unsafe impl<T, const N: usize> Contiguous for [T; N] {
    type Element = T;

    fn base_ptr(&self) -> *const T {
        self.as_ptr()
    }

    fn element_count(&self) -> usize {
        N
    }
}

unsafe impl<T, const N: usize> ContiguousMut for [T; N] {
    fn base_mut_ptr(&mut self) -> *mut T {
        self.as_mut_ptr()
    }
}

unsafe impl<T> Contiguous for Vec<T> {
    type Element = T;

    fn base_ptr(&self) -> *const T {
        self.as_ptr()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

unsafe impl<T> ContiguousMut for Vec<T> {
    fn base_mut_ptr(&mut self) -> *mut T {
        self.as_mut_ptr()
    }
}

unsafe impl<T> Contiguous for Box<[T]> {
    type Element = T;

    fn base_ptr(&self) -> *const T {
        self.as_ptr()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

unsafe impl<T> ContiguousMut for Box<[T]> {
    fn base_mut_ptr(&mut self) -> *mut T {
        self.as_mut_ptr()
    }
}

// Strings are read-only byte storage: writing arbitrary bytes could break UTF-8.
unsafe impl Contiguous for str {
    type Element = u8;

    fn base_ptr(&self) -> *const u8 {
        self.as_ptr()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

unsafe impl Contiguous for String {
    type Element = u8;

    fn base_ptr(&self) -> *const u8 {
        self.as_ptr()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "smallvec")]
unsafe impl<A: smallvec::Array> Contiguous for smallvec::SmallVec<A> {
    type Element = A::Item;

    fn base_ptr(&self) -> *const A::Item {
        self.as_slice().as_ptr()
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "smallvec")]
unsafe impl<A: smallvec::Array> ContiguousMut for smallvec::SmallVec<A> {
    fn base_mut_ptr(&mut self) -> *mut A::Item {
        self.as_mut_slice().as_mut_ptr()
    }
}

#[cfg(feature = "bumpalo")]
unsafe impl<T> Contiguous for bumpalo::collections::Vec<'_, T> {
    type Element = T;

    fn base_ptr(&self) -> *const T {
        <[T]>::as_ptr(self)
    }

    fn element_count(&self) -> usize {
        <[T]>::len(self)
    }
}

#[cfg(feature = "bumpalo")]
unsafe impl<T> ContiguousMut for bumpalo::collections::Vec<'_, T> {
    fn base_mut_ptr(&mut self) -> *mut T {
        <[T]>::as_mut_ptr(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn snapshot<C: Contiguous + ?Sized>(container: &C) -> (*const C::Element, usize) {
        (container.base_ptr(), container.element_count())
    }

    #[test]
    fn vec_reports_its_buffer() {
        let values = vec![1u32, 2, 3];
        assert_eq!(snapshot(&values), (values.as_ptr(), 3));
    }

    #[test]
    fn array_count_is_static() {
        let values = [0u8; 5];
        assert_eq!(snapshot(&values).1, 5);
    }

    #[test]
    fn strings_expose_bytes() {
        let text = String::from("héllo");
        assert_eq!(snapshot(&text), (text.as_ptr(), 6));
        assert_eq!(snapshot("abc").1, 3);
    }

    #[test]
    fn boxed_slice_mut_pointer_matches() {
        let mut boxed: Box<[i16]> = vec![4, 5].into_boxed_slice();
        let expected = boxed.as_mut_ptr();
        assert_eq!(boxed.base_mut_ptr(), expected);
    }
}
