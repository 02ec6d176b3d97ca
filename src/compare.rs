//! Ordering policies
//!
//! A heap is parameterized by a [`Compare`] implementation that decides which
//! of two elements has higher priority. The predicate must be a strict weak
//! ordering: `less(a, a)` is false, and `less(a, b)` implies `!less(b, a)`.
//! A total order is not required.
//!
//! | Policy          | Top of heap                      |
//! |-----------------|----------------------------------|
//! | [`MinOrder`]    | smallest element (default)       |
//! | [`MaxOrder`]    | largest element                  |
//! | [`FnOrder`]     | per caller-supplied `less` closure |
//! | [`KeyOrder`]    | smallest extracted key           |
//!
//! All policies are resolved statically; nothing is boxed.

/// A strict weak ordering over `T`
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` has strictly higher priority than `b`
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Natural `<` ordering, producing a min-heap
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Natural `>` ordering, producing a max-heap
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Ordering given by a `less-than` closure
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct FnOrder<F>(pub F);

impl<T, F> Compare<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Ordering by an extracted key, smallest key first
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct KeyOrder<F>(pub F);

impl<K: Ord, T, F> Compare<T> for KeyOrder<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (**self).less(a, b)
    }
}
