use std::{fmt, marker::PhantomData};

use super::Step;

/// A step backed by a one-argument closure.
///
/// The marker records the closure's signature so the input, output and error
/// types are fixed when the step is built.
pub struct Closure<F, I, O, E> {
    function: F,
    _marker: PhantomData<fn(I) -> Result<O, E>>,
}

impl<F, I, O, E> Closure<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
{
    /// Creates a new closure-based step.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F, I, O, E> Step for Closure<F, I, O, E>
where
    F: Fn(I) -> Result<O, E>,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (self.function)(input)
    }
}

impl<F: Clone, I, O, E> Clone for Closure<F, I, O, E> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, I, O, E> fmt::Debug for Closure<F, I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure").finish_non_exhaustive()
    }
}

/// A step backed by a zero-argument closure.
///
/// Its input is always `()`.
pub struct Thunk<F, O, E> {
    function: F,
    _marker: PhantomData<fn() -> Result<O, E>>,
}

impl<F, O, E> Thunk<F, O, E>
where
    F: Fn() -> Result<O, E>,
{
    /// Creates a new thunk-based step.
    pub const fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<F, O, E> Step for Thunk<F, O, E>
where
    F: Fn() -> Result<O, E>,
{
    type Input = ();
    type Output = O;
    type Error = E;

    fn call(&self, (): Self::Input) -> Result<Self::Output, Self::Error> {
        (self.function)()
    }
}

impl<F: Clone, O, E> Clone for Thunk<F, O, E> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, O, E> fmt::Debug for Thunk<F, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thunk").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn closure_forwards_input() {
        let step = Closure::new(|s: &str| Ok::<_, ()>(s.len()));
        assert_eq!(step.call("four"), Ok(4));
    }

    #[test]
    fn thunk_is_called_once_per_call() {
        let calls = Cell::new(0);
        let step = Thunk::new(|| {
            calls.set(calls.get() + 1);
            Ok::<_, ()>(calls.get())
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(step.call(()), Ok(1));
        assert_eq!(step.call(()), Ok(2));
    }
}
