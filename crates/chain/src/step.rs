mod function;
mod then;

pub use function::{Closure, Thunk};
pub use then::Then;

/// The uniform callable behind every shape.
///
/// A `Step` takes an input and either produces an output or fails. Shapes
/// that take no input use `()` as their `Input`, and shapes that only have
/// side effects use `()` as their `Output`, so producers, transformers,
/// consumers and actions are all just steps with different associated types.
///
/// Steps are usually built from closures by the shape constructors such as
/// [`producer()`](crate::producer) or [`transformer()`](crate::transformer),
/// but any type can implement `Step` and be wrapped with
/// [`Shape::new()`](crate::Shape::new).
///
/// # Example
///
/// ```
/// use catena_chain::{Missing, Step};
///
/// struct Halve;
///
/// impl Step for Halve {
///     type Input = i32;
///     type Output = i32;
///     type Error = Missing;
///
///     fn call(&self, input: i32) -> Result<i32, Missing> {
///         if input % 2 == 0 { Ok(input / 2) } else { Err(Missing) }
///     }
/// }
///
/// assert_eq!(Halve.call(8), Ok(4));
/// assert_eq!(Halve.call(7), Err(Missing));
/// ```
pub trait Step {
    type Input;
    type Output;
    type Error;

    /// Calls the step with the given input.
    ///
    /// # Errors
    ///
    /// Each step defines its own `Error` type. Whether a failure counts as a
    /// missing value is decided by [`MaybeMissing`](crate::MaybeMissing).
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}

impl<S: Step + ?Sized> Step for &S {
    type Input = S::Input;
    type Output = S::Output;
    type Error = S::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }
}

impl<S: Step + ?Sized> Step for Box<S> {
    type Input = S::Input;
    type Output = S::Output;
    type Error = S::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }
}
