use std::{convert::Infallible, error::Error as StdError};

use thiserror::Error;

/// Boxed error type carried by [`Error::Failed`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Classifies a failure as a missing value or not.
///
/// [`Chain::with_default()`](crate::Chain::with_default) and
/// [`Chain::null_tolerant()`](crate::Chain::null_tolerant) only intercept
/// failures for which `is_missing()` returns `true`. Every other failure is
/// returned to the caller untouched.
///
/// Implement this for your own error type to use it in recoverable chains:
///
/// ```
/// use catena_chain::MaybeMissing;
///
/// #[derive(Debug)]
/// enum LookupError {
///     NotFound,
///     Corrupt(String),
/// }
///
/// impl MaybeMissing for LookupError {
///     fn is_missing(&self) -> bool {
///         matches!(self, LookupError::NotFound)
///     }
/// }
///
/// assert!(LookupError::NotFound.is_missing());
/// assert!(!LookupError::Corrupt("bad checksum".into()).is_missing());
/// ```
pub trait MaybeMissing {
    /// Returns `true` if this failure means an upstream value was absent.
    fn is_missing(&self) -> bool;
}

/// The missing-value failure.
///
/// Raised by a step that could not produce or accept a value because an
/// upstream value was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("value is missing")]
pub struct Missing;

impl MaybeMissing for Missing {
    fn is_missing(&self) -> bool {
        true
    }
}

/// A ready-made error type for chains that can fail in more than one way.
///
/// Only [`Error::Missing`] is ever intercepted by the fallback wrappers.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Missing(#[from] Missing),

    #[error("{0}")]
    Failed(#[source] BoxError),
}

impl Error {
    /// Wraps an error as a failure that is not a missing value.
    ///
    /// A [`Missing`] stays missing, and an [`Error`] is returned as is, so
    /// `.map_err(Error::failed)` never hides a missing value from
    /// [`Chain::with_default()`](crate::Chain::with_default):
    ///
    /// ```
    /// use catena_chain::{Error, MaybeMissing, Missing};
    ///
    /// assert!(Error::failed(Missing).is_missing());
    /// assert!(!Error::failed(std::fmt::Error).is_missing());
    /// ```
    pub fn failed<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let boxed: BoxError = Box::new(error);
        match boxed.downcast::<Missing>() {
            Ok(missing) => Self::Missing(*missing),
            Err(boxed) => match boxed.downcast::<Error>() {
                Ok(error) => *error,
                Err(boxed) => Self::Failed(boxed),
            },
        }
    }

    /// Creates a failure from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::Failed(message.into())
    }
}

impl MaybeMissing for Error {
    fn is_missing(&self) -> bool {
        matches!(self, Error::Missing(_))
    }
}

impl MaybeMissing for Infallible {
    fn is_missing(&self) -> bool {
        match *self {}
    }
}

impl<T: MaybeMissing + ?Sized> MaybeMissing for Box<T> {
    fn is_missing(&self) -> bool {
        (**self).is_missing()
    }
}

/// Converts an absent value into the missing-value failure.
///
/// This is the boundary where `None` becomes a failure that a chain can
/// short-circuit on:
///
/// ```
/// use catena_chain::{Missing, OrMissing};
///
/// let found: Option<&str> = Some("value");
/// let absent: Option<&str> = None;
///
/// assert_eq!(found.or_missing::<Missing>(), Ok("value"));
/// assert_eq!(absent.or_missing::<Missing>(), Err(Missing));
/// ```
pub trait OrMissing<T> {
    /// Returns the value, or the missing-value failure if there is none.
    ///
    /// # Errors
    ///
    /// Returns `E::from(Missing)` when the value is absent.
    fn or_missing<E: From<Missing>>(self) -> Result<T, E>;
}

impl<T> OrMissing<T> for Option<T> {
    fn or_missing<E: From<Missing>>(self) -> Result<T, E> {
        self.ok_or_else(|| E::from(Missing))
    }
}
