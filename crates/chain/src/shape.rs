use std::{fmt, marker::PhantomData};

use crate::{
    Chain, Step,
    kind::{
        Action, Consumer, Fits, IntConsumer, IntProducer, IntTransformer, IntUnaryOp, Kind,
        Producer, ToInt, Transformer, UnaryOp,
    },
    step::{Closure, Thunk},
};

/// A step tagged with its kind.
///
/// A `Shape` is the bare callable that [`Chain::of()`] lifts into a chain and
/// that [`Chain::and()`] accepts as the next step. It can also be called on
/// its own through [`Step::call()`].
///
/// Shapes are usually built with the constructor functions in this crate,
/// one per kind, such as [`producer()`] or [`consumer()`].
pub struct Shape<K, S> {
    step: S,
    _kind: PhantomData<K>,
}

impl<K, S> Shape<K, S>
where
    K: Kind,
    S: Step,
{
    /// Wraps any step whose input and output types fit the kind `K`.
    ///
    /// # Example
    ///
    /// ```
    /// use catena_chain::{Missing, Shape, Step, kind::IntUnaryOp};
    ///
    /// struct Negate;
    ///
    /// impl Step for Negate {
    ///     type Input = i32;
    ///     type Output = i32;
    ///     type Error = Missing;
    ///
    ///     fn call(&self, input: i32) -> Result<i32, Missing> {
    ///         Ok(-input)
    ///     }
    /// }
    ///
    /// let negate = Shape::<IntUnaryOp, _>::new(Negate);
    /// assert_eq!(negate.call(4), Ok(-4));
    /// ```
    pub fn new(step: S) -> Self
    where
        K: Fits<S>,
    {
        Self::wrap(step)
    }

    /// Wraps a step without checking that it fits the kind.
    ///
    /// Only used where the kind is guaranteed by construction.
    pub(crate) const fn wrap(step: S) -> Self {
        Self {
            step,
            _kind: PhantomData,
        }
    }

    /// Lifts this shape into a [`Chain`].
    pub fn into_chain(self) -> Chain<K, S> {
        Chain::of(self)
    }

    /// Returns the wrapped step.
    pub fn into_step(self) -> S {
        self.step
    }
}

impl<K, S> Step for Shape<K, S>
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

impl<K, S: Clone> Clone for Shape<K, S> {
    fn clone(&self) -> Self {
        Self {
            step: self.step.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: Kind, S> fmt::Debug for Shape<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("kind", &K::NAME)
            .finish_non_exhaustive()
    }
}

/// Anything that can be handed to [`Chain::and()`] as the next step.
///
/// Implemented for [`Shape`] and for [`Chain`], so a finished chain can be
/// spliced into another one as a single step of its own kind.
pub trait IntoShape {
    type Kind: Kind;
    type Step: Step;

    fn into_shape(self) -> Shape<Self::Kind, Self::Step>;
}

impl<K: Kind, S: Step> IntoShape for Shape<K, S> {
    type Kind = K;
    type Step = S;

    fn into_shape(self) -> Shape<K, S> {
        self
    }
}

/// Creates a [`Producer`] shape from a closure taking no arguments.
///
/// ```
/// use catena_chain::{Chain, Missing, producer};
///
/// let hello = Chain::of(producer(|| Ok::<_, Missing>("Hello")));
/// assert_eq!(hello.get(), Ok("Hello"));
/// ```
pub fn producer<F, T, E>(function: F) -> Shape<Producer, Thunk<F, T, E>>
where
    F: Fn() -> Result<T, E>,
{
    Shape::wrap(Thunk::new(function))
}

/// Creates a [`Transformer`] shape from a one-argument closure.
pub fn transformer<F, T, R, E>(function: F) -> Shape<Transformer, Closure<F, T, R, E>>
where
    F: Fn(T) -> Result<R, E>,
{
    Shape::wrap(Closure::new(function))
}

/// Creates a [`UnaryOp`] shape from a closure whose output type is its input type.
pub fn unary_op<F, T, E>(function: F) -> Shape<UnaryOp, Closure<F, T, T, E>>
where
    F: Fn(T) -> Result<T, E>,
{
    Shape::wrap(Closure::new(function))
}

/// Creates a [`Consumer`] shape from a one-argument closure with no output.
pub fn consumer<F, T, E>(function: F) -> Shape<Consumer, Closure<F, T, (), E>>
where
    F: Fn(T) -> Result<(), E>,
{
    Shape::wrap(Closure::new(function))
}

/// Creates an [`Action`] shape from a closure with no arguments and no output.
pub fn action<F, E>(function: F) -> Shape<Action, Thunk<F, (), E>>
where
    F: Fn() -> Result<(), E>,
{
    Shape::wrap(Thunk::new(function))
}

/// Creates an [`IntProducer`] shape.
pub fn int_producer<F, E>(function: F) -> Shape<IntProducer, Thunk<F, i32, E>>
where
    F: Fn() -> Result<i32, E>,
{
    Shape::wrap(Thunk::new(function))
}

/// Creates an [`IntTransformer`] shape, mapping an `i32` to any value.
pub fn int_transformer<F, T, E>(function: F) -> Shape<IntTransformer, Closure<F, i32, T, E>>
where
    F: Fn(i32) -> Result<T, E>,
{
    Shape::wrap(Closure::new(function))
}

/// Creates a [`ToInt`] shape, mapping any value to an `i32`.
pub fn to_int<F, T, E>(function: F) -> Shape<ToInt, Closure<F, T, i32, E>>
where
    F: Fn(T) -> Result<i32, E>,
{
    Shape::wrap(Closure::new(function))
}

/// Creates an [`IntUnaryOp`] shape.
pub fn int_unary_op<F, E>(function: F) -> Shape<IntUnaryOp, Closure<F, i32, i32, E>>
where
    F: Fn(i32) -> Result<i32, E>,
{
    Shape::wrap(Closure::new(function))
}

/// Creates an [`IntConsumer`] shape.
pub fn int_consumer<F, E>(function: F) -> Shape<IntConsumer, Closure<F, i32, (), E>>
where
    F: Fn(i32) -> Result<(), E>,
{
    Shape::wrap(Closure::new(function))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::Missing;

    #[test]
    fn shapes_are_callable_without_a_chain() {
        assert_eq!(producer(|| Ok::<_, Missing>(3)).call(()), Ok(3));
        assert_eq!(int_unary_op(|x| Ok::<_, Missing>(x + 1)).call(41), Ok(42));
        assert_eq!(to_int(|s: &str| Ok::<_, Missing>(s.len() as i32)).call("abc"), Ok(3));
    }

    #[test]
    fn consumer_runs_its_effect() {
        let seen = RefCell::new(Vec::new());
        let sink = consumer(|s: &str| {
            seen.borrow_mut().push(s.to_owned());
            Ok::<_, Missing>(())
        });

        sink.call("a").unwrap();
        sink.call("b").unwrap();

        assert_eq!(*seen.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn debug_shows_kind() {
        let shape = int_consumer(|_| Ok::<_, Missing>(()));
        assert_eq!(format!("{shape:?}"), "Shape { kind: \"IntConsumer\", .. }");
    }

    #[test]
    fn cloned_shapes_share_behavior() {
        let double = unary_op(|x: i32| Ok::<_, Missing>(x * 2));
        let copy = double.clone();
        assert_eq!(double.call(4), copy.call(4));
    }
}
