/// A two-argument callable with both arguments bound.
///
/// Built by [`of_both()`](crate::of_both).
#[derive(Debug, Clone)]
pub struct BoundBoth<F, A, B> {
    function: F,
    first: A,
    second: B,
}

impl<F, A, B> BoundBoth<F, A, B> {
    pub(crate) const fn new(function: F, first: A, second: B) -> Self {
        Self {
            function,
            first,
            second,
        }
    }

    /// Calls the original callable as `function(&first, &second)`.
    pub fn get<R>(&self) -> R
    where
        F: Fn(&A, &B) -> R,
    {
        (self.function)(&self.first, &self.second)
    }

    /// The bound first argument.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The bound second argument.
    pub fn second(&self) -> &B {
        &self.second
    }
}
