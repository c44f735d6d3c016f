use super::Step;

/// A step that calls two steps sequentially.
///
/// Built by [`Chain::and()`](crate::Chain::and). The first step's output type
/// must match the second's input, and both must share the same error type so
/// failures pass through unchanged.
///
/// Longer chains nest: `a.and(b).and(c)` holds `Then<Then<A, B>, C>`.
#[derive(Debug, Clone)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Step for Then<A, B>
where
    A: Step,
    B: Step<Input = A::Output, Error = A::Error>,
{
    type Input = A::Input;
    type Output = B::Output;
    type Error = A::Error;

    /// Calls the first step and passes its output to the second.
    ///
    /// The second step is never called if the first one fails.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let output = self.first.call(input)?;
        self.second.call(output)
    }
}
