use crate::outcome::core::Outcome;
use core::iter::FusedIterator;

/// Borrowing iterator over the success value, yielding at most one item.
pub struct Iter<'a, A> {
    inner: Option<&'a A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<A> ExactSizeIterator for Iter<'_, A> {}
impl<A> FusedIterator for Iter<'_, A> {}

pub struct IterMut<'a, A> {
    inner: Option<&'a mut A>,
}

impl<'a, A> Iterator for IterMut<'a, A> {
    type Item = &'a mut A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<A> ExactSizeIterator for IterMut<'_, A> {}
impl<A> FusedIterator for IterMut<'_, A> {}

/// Owning iterator returned by `Outcome::into_iter`.
pub struct IntoIter<A> {
    inner: Option<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<A> ExactSizeIterator for IntoIter<A> {}
impl<A> FusedIterator for IntoIter<A> {}

impl<X, A> IntoIterator for Outcome<X, A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.to_maybe() }
    }
}

impl<'a, X, A> IntoIterator for &'a Outcome<X, A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, X, A> IntoIterator for &'a mut Outcome<X, A> {
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<X, A> Outcome<X, A> {
    /// Iterates over the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let r = Outcome::<&str, i32>::ok(3);
    /// assert_eq!(r.iter().copied().sum::<i32>(), 3);
    ///
    /// let e = Outcome::<&str, i32>::error("x");
    /// assert_eq!(e.iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<'_, A> {
        Iter { inner: self.as_ref().to_maybe() }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, A> {
        IterMut { inner: self.as_mut().to_maybe() }
    }
}
