//! Typed, left-to-right composition of small callables.
//!
//! This crate builds pipelines out of single-input, single-output steps and
//! side-effect-only steps:
//!
//! - [`Step`]: the fallible callable every shape is built on
//! - [`Shape`]: a step tagged with its [`kind`], built with constructors
//!   such as [`producer()`], [`transformer()`] or [`consumer()`]
//! - [`Chain`]: an immutable wrapper around one shape, extended with
//!   [`Chain::and()`]; the resulting kind is fixed at compile time
//! - [`WithDefault`] and [`NullTolerant`]: recover from the one failure this
//!   crate intercepts, a missing value ([`MaybeMissing`])
//!
//! ```
//! use catena_chain::{Chain, Error, OrMissing, consumer, producer, transformer};
//!
//! let settings = [("retries", "3"), ("timeout", "")];
//! let lookup = |key: &str| {
//!     settings
//!         .iter()
//!         .find(|(k, _)| *k == key)
//!         .map(|(_, v)| v.to_string())
//!         .or_missing::<Error>()
//! };
//!
//! let retries = Chain::of(producer(|| lookup("retries")))
//!     .and(transformer(|v: String| v.parse::<u32>().map_err(Error::failed)))
//!     .with_default(1);
//! assert_eq!(retries.get().unwrap(), 3);
//!
//! let color = Chain::of(producer(|| lookup("color")))
//!     .and(transformer(|v: String| Ok(v.to_uppercase())))
//!     .with_default("NONE".to_string());
//! assert_eq!(color.get().unwrap(), "NONE");
//!
//! // Parse failures are not missing values, so they are not replaced.
//! let timeout = Chain::of(producer(|| lookup("timeout")))
//!     .and(transformer(|v: String| v.parse::<u32>().map_err(Error::failed)))
//!     .with_default(30);
//! assert!(timeout.get().is_err());
//!
//! let report = Chain::of(producer(|| lookup("verbose")))
//!     .and(consumer(|v: String| {
//!         println!("verbose = {v}");
//!         Ok(())
//!     }))
//!     .null_tolerant();
//! assert!(report.run().is_ok());
//! ```

mod chain;
mod error;
pub mod kind;
mod shape;
pub mod step;

pub use chain::{Chain, NullTolerant, WithDefault};
pub use error::{BoxError, Error, MaybeMissing, Missing, OrMissing};
pub use shape::{
    IntoShape, Shape, action, consumer, int_consumer, int_producer, int_transformer, int_unary_op,
    producer, to_int, transformer, unary_op,
};
pub use step::Step;
