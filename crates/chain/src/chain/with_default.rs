use crate::{MaybeMissing, Step};

/// A step that substitutes a fallback value for a missing value.
///
/// Returned by [`Chain::with_default()`](crate::Chain::with_default). It
/// offers no further chaining.
#[derive(Debug, Clone)]
pub struct WithDefault<S, T> {
    step: S,
    fallback: T,
}

impl<S, T> WithDefault<S, T> {
    pub(crate) const fn new(step: S, fallback: T) -> Self {
        Self { step, fallback }
    }

    /// The value returned in place of a missing value.
    pub fn fallback(&self) -> &T {
        &self.fallback
    }
}

impl<S, T> WithDefault<S, T>
where
    S: Step<Output = T>,
    S::Error: MaybeMissing,
    T: Clone,
{
    /// Calls the wrapped step with no input.
    ///
    /// # Errors
    ///
    /// Returns any failure that is not a missing value.
    pub fn get(&self) -> Result<T, S::Error>
    where
        S: Step<Input = ()>,
    {
        self.call(())
    }

    /// Calls the wrapped step with the given input.
    ///
    /// # Errors
    ///
    /// Returns any failure that is not a missing value.
    pub fn apply(&self, input: S::Input) -> Result<T, S::Error> {
        self.call(input)
    }
}

impl<S, T> Step for WithDefault<S, T>
where
    S: Step<Output = T>,
    S::Error: MaybeMissing,
    T: Clone,
{
    type Input = S::Input;
    type Output = T;
    type Error = S::Error;

    /// Calls the wrapped step, returning the fallback if it reports a
    /// missing value.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        match self.step.call(input) {
            Err(error) if error.is_missing() => {
                #[cfg(feature = "tracing")]
                tracing::trace!("missing value replaced by fallback");
                Ok(self.fallback.clone())
            }
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{Error, step::Closure};

    fn lookup(key: &str) -> Result<i32, Error> {
        match key {
            "one" => Ok(1),
            "broken" => Err(Error::msg("backend unavailable")),
            _ => Err(Error::from(crate::Missing)),
        }
    }

    #[test]
    fn fallback_only_for_missing() {
        let cached = WithDefault::new(Closure::new(lookup), -1);

        assert_eq!(cached.apply("one").unwrap(), 1);
        assert_eq!(cached.apply("two").unwrap(), -1);
        assert_eq!(
            cached.apply("broken").unwrap_err().to_string(),
            "backend unavailable"
        );
        assert_eq!(*cached.fallback(), -1);
    }

    #[test]
    fn wrapped_step_called_once_per_call() {
        let calls = Cell::new(0);
        let counted = WithDefault::new(
            Closure::new(|()| {
                calls.set(calls.get() + 1);
                Err::<i32, _>(crate::Missing)
            }),
            7,
        );

        assert_eq!(counted.get(), Ok(7));
        assert_eq!(counted.get(), Ok(7));
        assert_eq!(calls.get(), 2);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn substitution_is_traced() {
        use std::{
            io,
            sync::{Arc, Mutex},
        };

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let cached = WithDefault::new(Closure::new(lookup), 0);
        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(cached.apply("one").unwrap(), 1);
            assert_eq!(cached.apply("two").unwrap(), 0);
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("missing value replaced by fallback").count(), 1);
    }
}
