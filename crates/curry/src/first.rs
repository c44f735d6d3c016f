/// A two-argument callable with its first argument bound.
///
/// Built by [`of_first()`](crate::of_first). The argument passed to
/// [`apply()`](Self::apply) fills the second position.
#[derive(Debug, Clone)]
pub struct BoundFirst<F, A> {
    function: F,
    first: A,
}

impl<F, A> BoundFirst<F, A> {
    pub(crate) const fn new(function: F, first: A) -> Self {
        Self { function, first }
    }

    /// Calls the original callable as `function(&first, second)`.
    pub fn apply<U, R>(&self, second: U) -> R
    where
        F: Fn(&A, U) -> R,
    {
        (self.function)(&self.first, second)
    }

    /// The bound first argument.
    pub fn first(&self) -> &A {
        &self.first
    }
}
