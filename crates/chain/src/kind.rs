//! Shape kinds and the rules for composing them.
//!
//! Every [`Shape`](crate::Shape) and [`Chain`](crate::Chain) carries a kind
//! marker that names its shape at the type level. The markers are uninhabited
//! enums; they exist only to select which operations a chain offers and what
//! kind results from [`Chain::and()`](crate::Chain::and).
//!
//! | Kind | Input | Output |
//! |---|---|---|
//! | [`Producer`] | `()` | `T` |
//! | [`Transformer`] | `T` | `R` |
//! | [`UnaryOp`] | `T` | `T` |
//! | [`Consumer`] | `T` | `()` |
//! | [`Action`] | `()` | `()` |
//! | [`IntProducer`] | `()` | `i32` |
//! | [`IntTransformer`] | `i32` | `T` |
//! | [`ToInt`] | `T` | `i32` |
//! | [`IntUnaryOp`] | `i32` | `i32` |
//! | [`IntConsumer`] | `i32` | `()` |
//!
//! The set of kinds is closed. [`Compose`] is implemented exactly for the
//! pairs that may be chained, so an unsupported pair, or any `.and()` after a
//! consumer or action, is rejected by the compiler.

use crate::Step;

mod sealed {
    pub trait Sealed {}
}

/// A shape kind marker.
pub trait Kind: sealed::Sealed {
    /// The kind's name, used in `Debug` output.
    const NAME: &'static str;
}

/// Kinds whose steps return a value, and so support `with_default()`.
pub trait Valued: Kind {}

/// Kinds whose steps only have side effects, and so support `null_tolerant()`.
///
/// Terminal kinds implement no [`Compose`], which ends the chain. A consumer
/// has nothing to pass on, so even a next step taking `()` is rejected:
///
/// ```compile_fail
/// use catena_chain::{Chain, Missing, consumer};
///
/// let sink = Chain::of(consumer(|_: i32| Ok::<_, Missing>(())));
/// let _ = sink.and(consumer(|(): ()| Ok(())));
/// ```
///
/// The same holds for an int consumer:
///
/// ```compile_fail
/// use catena_chain::{Chain, Missing, consumer, int_consumer};
///
/// let sink = Chain::of(int_consumer(|_| Ok::<_, Missing>(())));
/// let _ = sink.and(consumer(|(): ()| Ok(())));
/// ```
pub trait Terminal: Kind {}

/// The kind produced by chaining a `Self` step with a `Next` step.
pub trait Compose<Next: Kind>: Kind {
    type Output: Kind;
}

macro_rules! define_kinds {
    ($($(#[$meta:meta])* $name:ident: $role:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $name {}

            impl sealed::Sealed for $name {}

            impl Kind for $name {
                const NAME: &'static str = stringify!($name);
            }

            impl $role for $name {}
        )+
    };
}

macro_rules! compose_table {
    ($($source:ident + $next:ident => $output:ident;)+) => {
        $(
            impl Compose<$next> for $source {
                type Output = $output;
            }
        )+
    };
}

define_kinds! {
    /// Takes nothing, produces a value.
    Producer: Valued;
    /// Takes a value, produces a value of a possibly different type.
    Transformer: Valued;
    /// Takes a value, produces a value of the same type.
    UnaryOp: Valued;
    /// Takes a value, produces nothing.
    Consumer: Terminal;
    /// Takes nothing, produces nothing.
    Action: Terminal;
    /// Takes nothing, produces an `i32`.
    IntProducer: Valued;
    /// Takes an `i32`, produces a value.
    IntTransformer: Valued;
    /// Takes a value, produces an `i32`.
    ToInt: Valued;
    /// Takes an `i32`, produces an `i32`.
    IntUnaryOp: Valued;
    /// Takes an `i32`, produces nothing.
    IntConsumer: Terminal;
}

compose_table! {
    Producer + Consumer => Action;
    Producer + Transformer => Producer;
    Producer + UnaryOp => Producer;
    Producer + ToInt => IntProducer;

    Transformer + Consumer => Consumer;
    Transformer + Transformer => Transformer;
    Transformer + UnaryOp => Transformer;
    Transformer + ToInt => ToInt;

    UnaryOp + Consumer => Consumer;
    UnaryOp + Transformer => Transformer;
    UnaryOp + UnaryOp => UnaryOp;
    UnaryOp + ToInt => ToInt;

    IntProducer + IntConsumer => Action;
    IntProducer + IntTransformer => Producer;
    IntProducer + IntUnaryOp => IntProducer;
    IntProducer + ToInt => IntProducer;

    IntTransformer + Consumer => IntConsumer;
    IntTransformer + Transformer => IntTransformer;
    IntTransformer + UnaryOp => IntTransformer;
    IntTransformer + ToInt => IntUnaryOp;

    ToInt + IntConsumer => Consumer;
    ToInt + IntTransformer => Transformer;
    ToInt + IntUnaryOp => ToInt;

    IntUnaryOp + IntConsumer => IntConsumer;
    IntUnaryOp + IntTransformer => IntTransformer;
    IntUnaryOp + IntUnaryOp => IntUnaryOp;
}

/// Kinds that a step of type `S` may be wrapped as.
///
/// Ties each kind to the input and output types it declares, so a shape
/// built with [`Shape::new()`](crate::Shape::new) always matches its kind.
pub trait Fits<S: Step>: Kind {}

impl<S: Step<Input = ()>> Fits<S> for Producer {}
impl<S: Step> Fits<S> for Transformer {}
impl<S: Step<Input = T, Output = T>, T> Fits<S> for UnaryOp {}
impl<S: Step<Output = ()>> Fits<S> for Consumer {}
impl<S: Step<Input = (), Output = ()>> Fits<S> for Action {}
impl<S: Step<Input = (), Output = i32>> Fits<S> for IntProducer {}
impl<S: Step<Input = i32>> Fits<S> for IntTransformer {}
impl<S: Step<Output = i32>> Fits<S> for ToInt {}
impl<S: Step<Input = i32, Output = i32>> Fits<S> for IntUnaryOp {}
impl<S: Step<Input = i32, Output = ()>> Fits<S> for IntConsumer {}
