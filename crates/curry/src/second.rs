/// A two-argument callable with its second argument bound.
///
/// Built by [`of_second()`](crate::of_second). The argument passed to
/// [`apply()`](Self::apply) fills the first position.
#[derive(Debug, Clone)]
pub struct BoundSecond<F, B> {
    function: F,
    second: B,
}

impl<F, B> BoundSecond<F, B> {
    pub(crate) const fn new(function: F, second: B) -> Self {
        Self { function, second }
    }

    /// Calls the original callable as `function(first, &second)`.
    pub fn apply<T, R>(&self, first: T) -> R
    where
        F: Fn(T, &B) -> R,
    {
        (self.function)(first, &self.second)
    }

    /// The bound second argument.
    pub fn second(&self) -> &B {
        &self.second
    }
}
