/// A callable with its only argument bound.
///
/// Built by [`of()`](crate::of). Calling [`get()`](Self::get) invokes the
/// original callable with a reference to the bound argument.
#[derive(Debug, Clone)]
pub struct Bound<F, A> {
    function: F,
    arg: A,
}

impl<F, A> Bound<F, A> {
    pub(crate) const fn new(function: F, arg: A) -> Self {
        Self { function, arg }
    }

    /// Calls the original callable with the bound argument.
    pub fn get<R>(&self) -> R
    where
        F: Fn(&A) -> R,
    {
        (self.function)(&self.arg)
    }

    /// The bound argument.
    pub fn arg(&self) -> &A {
        &self.arg
    }
}
