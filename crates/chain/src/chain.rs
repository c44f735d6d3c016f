mod null_tolerant;
mod with_default;

use std::{fmt, marker::PhantomData};

pub use null_tolerant::NullTolerant;
pub use with_default::WithDefault;

use crate::{
    IntoShape, MaybeMissing, Shape, Step,
    kind::{Compose, Kind, Terminal, Valued},
    step::Then,
};

/// An immutable wrapper around one step of one shape.
///
/// A `Chain` is created by [`Chain::of()`] and extended with
/// [`Chain::and()`], which returns a new chain whose kind follows the
/// composition rules in [`kind`](crate::kind). Chains hold exactly one step:
/// a multi-step chain is a nest of [`Then`] steps, so calling it always runs
/// the steps in the order they were added.
///
/// ## Composing
///
/// The next step's input type must match this chain's output type, and both
/// must share the same error type. A producer of `()` can be followed by a
/// consumer of `()`:
///
/// ```
/// use catena_chain::{Chain, Missing, consumer, producer};
///
/// let ended = Chain::of(producer(|| Ok::<_, Missing>(())))
///     .and(consumer(|(): ()| Ok(())));
/// assert_eq!(ended.run(), Ok(()));
/// ```
///
/// but consumers and actions end a chain, even when the types line up:
///
/// ```compile_fail
/// use catena_chain::{Chain, Missing, consumer, producer};
///
/// let ended = Chain::of(producer(|| Ok::<_, Missing>(())))
///     .and(consumer(|(): ()| Ok(())));
///
/// // `ended` is an action.
/// let _ = ended.and(consumer(|(): ()| Ok(())));
/// ```
///
/// ## Recovering from missing values
///
/// A failure for which [`MaybeMissing::is_missing()`] returns `true` can be
/// replaced by a fallback with [`Chain::with_default()`], or discarded with
/// [`Chain::null_tolerant()`] for chains that only have side effects. All
/// other failures are returned unchanged.
///
/// # Example
///
/// ```
/// use catena_chain::{Chain, Missing, OrMissing, producer, transformer};
///
/// let shout = Chain::of(producer(|| Ok::<_, Missing>("Hello")))
///     .and(transformer(|s: &str| Ok(s.to_uppercase())));
/// assert_eq!(shout.get(), Ok("HELLO".to_string()));
///
/// let first_word_len = Chain::of(transformer(|s: &str| {
///     s.split_whitespace().next().map(str::len).or_missing::<Missing>()
/// }))
/// .and(transformer(|len: usize| Ok(len * 2)))
/// .with_default(0);
/// assert_eq!(first_word_len.apply("catena chains"), Ok(12));
/// assert_eq!(first_word_len.apply("   "), Ok(0));
/// ```
pub struct Chain<K, S> {
    step: S,
    _kind: PhantomData<K>,
}

impl<K, S> Chain<K, S>
where
    K: Kind,
    S: Step,
{
    /// Lifts a shape into a chain.
    pub fn of(shape: Shape<K, S>) -> Self {
        Self {
            step: shape.into_step(),
            _kind: PhantomData,
        }
    }

    /// Chains this chain with a next step.
    ///
    /// Nothing is called here. The returned chain first calls this chain,
    /// then passes its output to `next`. If this chain fails, `next` is not
    /// called and the failure is returned as is.
    ///
    /// `next` may be a [`Shape`] or another `Chain`.
    pub fn and<N>(self, next: N) -> Chain<<K as Compose<N::Kind>>::Output, Then<S, N::Step>>
    where
        N: IntoShape,
        N::Step: Step<Input = S::Output, Error = S::Error>,
        K: Compose<N::Kind>,
    {
        Chain {
            step: Then::new(self.step, next.into_shape().into_step()),
            _kind: PhantomData,
        }
    }

    /// Returns the wrapped step.
    pub fn into_step(self) -> S {
        self.step
    }
}

impl<K, S> Chain<K, S>
where
    K: Valued,
    S: Step,
{
    /// Calls a chain that needs no input.
    ///
    /// # Errors
    ///
    /// Returns the first failure raised by any step.
    pub fn get(&self) -> Result<S::Output, S::Error>
    where
        S: Step<Input = ()>,
    {
        self.step.call(())
    }

    /// Calls the chain with the given input.
    ///
    /// # Errors
    ///
    /// Returns the first failure raised by any step.
    pub fn apply(&self, input: S::Input) -> Result<S::Output, S::Error> {
        self.step.call(input)
    }

    /// Returns a step that yields `fallback` whenever this chain fails with a
    /// missing value.
    ///
    /// Steps before the one that reported the missing value have run; steps
    /// after it have not. Any other failure is returned unchanged, and a
    /// successful result is always returned as is.
    pub fn with_default(self, fallback: S::Output) -> WithDefault<S, S::Output>
    where
        S::Output: Clone,
        S::Error: MaybeMissing,
    {
        WithDefault::new(self.step, fallback)
    }
}

impl<K, S> Chain<K, S>
where
    K: Terminal,
    S: Step<Output = ()>,
{
    /// Calls a side-effect-only chain that needs no input.
    ///
    /// # Errors
    ///
    /// Returns the first failure raised by any step.
    pub fn run(&self) -> Result<(), S::Error>
    where
        S: Step<Input = ()>,
    {
        self.step.call(())
    }

    /// Calls a side-effect-only chain with the given input.
    ///
    /// # Errors
    ///
    /// Returns the first failure raised by any step.
    pub fn accept(&self, input: S::Input) -> Result<(), S::Error> {
        self.step.call(input)
    }

    /// Returns a step that silently skips the rest of this chain when a step
    /// fails with a missing value.
    ///
    /// Any other failure is returned unchanged.
    pub fn null_tolerant(self) -> NullTolerant<S>
    where
        S::Error: MaybeMissing,
    {
        NullTolerant::new(self.step)
    }
}

impl<K, S> Step for Chain<K, S>
where
    S: Step,
{
    type Input = S::Input;
    type Output = S::Output;
    type Error = S::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.step.call(input)
    }
}

impl<K: Kind, S: Step> IntoShape for Chain<K, S> {
    type Kind = K;
    type Step = S;

    fn into_shape(self) -> Shape<K, S> {
        Shape::wrap(self.step)
    }
}

impl<K: Kind, S: Step> From<Shape<K, S>> for Chain<K, S> {
    fn from(shape: Shape<K, S>) -> Self {
        Self::of(shape)
    }
}

impl<K, S: Clone> Clone for Chain<K, S> {
    fn clone(&self) -> Self {
        Self {
            step: self.step.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: Kind, S> fmt::Debug for Chain<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("kind", &K::NAME)
            .finish_non_exhaustive()
    }
}
