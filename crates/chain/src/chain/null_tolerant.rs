use crate::{MaybeMissing, Step};

/// A side-effect-only step that skips its effect on a missing value.
///
/// Returned by [`Chain::null_tolerant()`](crate::Chain::null_tolerant). It
/// offers no further chaining.
#[derive(Debug, Clone)]
pub struct NullTolerant<S> {
    step: S,
}

impl<S> NullTolerant<S> {
    pub(crate) const fn new(step: S) -> Self {
        Self { step }
    }
}

impl<S> NullTolerant<S>
where
    S: Step<Output = ()>,
    S::Error: MaybeMissing,
{
    /// Calls the wrapped step with no input.
    ///
    /// # Errors
    ///
    /// Returns any failure that is not a missing value.
    pub fn run(&self) -> Result<(), S::Error>
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
    pub fn accept(&self, input: S::Input) -> Result<(), S::Error> {
        self.call(input)
    }
}

impl<S> Step for NullTolerant<S>
where
    S: Step<Output = ()>,
    S::Error: MaybeMissing,
{
    type Input = S::Input;
    type Output = ();
    type Error = S::Error;

    fn call(&self, input: Self::Input) -> Result<(), Self::Error> {
        match self.step.call(input) {
            Err(error) if error.is_missing() => {
                #[cfg(feature = "tracing")]
                tracing::trace!("missing value discarded");
                Ok(())
            }
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Missing, step::Closure};

    #[test]
    fn missing_is_discarded() {
        let tolerant = NullTolerant::new(Closure::new(|_: &str| Err::<(), _>(Missing)));
        assert_eq!(tolerant.accept("anything"), Ok(()));
    }

    #[test]
    fn other_failures_surface() {
        let tolerant = NullTolerant::new(Closure::new(|()| Err::<(), _>(Error::msg("jammed"))));
        assert_eq!(tolerant.run().unwrap_err().to_string(), "jammed");
    }
}
