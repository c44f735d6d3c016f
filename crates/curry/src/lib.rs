//! Partial application of one- and two-argument callables.
//!
//! Each function here binds some arguments of a callable ahead of time and
//! returns a value that calls the original with the rest:
//!
//! - [`of()`]: bind the only argument of a one-argument callable
//! - [`of_first()`]: bind the first argument of a two-argument callable
//! - [`of_second()`]: bind the second argument of a two-argument callable
//! - [`of_both()`]: bind both arguments of a two-argument callable
//!
//! The wrappers only forward. Nothing is called when they are built, each
//! invocation calls the original exactly once, and whatever the original
//! returns (including an `Err`) is passed back unchanged. Bound arguments are
//! owned by the wrapper and lent to the callable by reference, so they are
//! never cloned.
//!
//! Numeric callables need no special treatment: a callable returning `i32`
//! curries like any other.
//!
//! # Example
//!
//! ```
//! use catena_curry::{of, of_both, of_first, of_second};
//!
//! let greet = |greeting: &&str, name: &str| format!("{greeting}, {name}!");
//!
//! let hello = of_first(greet, "Hello");
//! assert_eq!(hello.apply("Ada"), "Hello, Ada!");
//!
//! let to_ada = of_second(|greeting: &str, name: &&str| greet(&greeting, *name), "Ada");
//! assert_eq!(to_ada.apply("Goodbye"), "Goodbye, Ada!");
//!
//! let fixed = of_both(|greeting: &&str, name: &&str| greet(greeting, *name), "Hi", "Grace");
//! assert_eq!(fixed.get(), "Hi, Grace!");
//!
//! let len = of(|s: &String| s.len(), "catena".to_string());
//! assert_eq!(len.get(), 6);
//! ```

mod both;
mod first;
mod second;
mod unary;

pub use both::BoundBoth;
pub use first::BoundFirst;
pub use second::BoundSecond;
pub use unary::Bound;

/// Binds the only argument of a one-argument callable.
///
/// The result is a producer: [`Bound::get()`] calls `function(&arg)`.
pub fn of<F, A>(function: F, arg: A) -> Bound<F, A> {
    Bound::new(function, arg)
}

/// Binds the first argument of a two-argument callable.
///
/// [`BoundFirst::apply()`] calls `function(&first, second)`.
///
/// The bound argument is lent, never moved, so a function taking it by value
/// is adapted with a closure that copies or clones it:
///
/// ```
/// use catena_curry::of_first;
///
/// fn scale(factor: i32, x: i32) -> i32 {
///     factor * x
/// }
///
/// let triple = of_first(|factor: &i32, x| scale(*factor, x), 3);
/// assert_eq!(triple.apply(14), 42);
///
/// fn label(prefix: String, id: u32) -> String {
///     format!("{prefix}-{id}")
/// }
///
/// let order = of_first(|prefix: &String, id| label(prefix.clone(), id), "ord".to_string());
/// assert_eq!(order.apply(7), "ord-7");
/// ```
pub fn of_first<F, A>(function: F, first: A) -> BoundFirst<F, A> {
    BoundFirst::new(function, first)
}

/// Binds the second argument of a two-argument callable.
///
/// [`BoundSecond::apply()`] calls `function(first, &second)`.
pub fn of_second<F, B>(function: F, second: B) -> BoundSecond<F, B> {
    BoundSecond::new(function, second)
}

/// Binds both arguments of a two-argument callable.
///
/// The result is a producer: [`BoundBoth::get()`] calls
/// `function(&first, &second)`.
pub fn of_both<F, A, B>(function: F, first: A, second: B) -> BoundBoth<F, A, B> {
    BoundBoth::new(function, first, second)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Person {
        first_name: String,
        second_name: String,
    }

    impl Person {
        fn new(first_name: &str, second_name: &str) -> Self {
            Self {
                first_name: first_name.to_owned(),
                second_name: second_name.to_owned(),
            }
        }

        fn name(&self) -> String {
            format!("{} {}", self.first_name, self.second_name)
        }
    }

    #[test]
    fn curry_unary_function() {
        let name = of(Person::name, Person::new("Joel", "Matthew"));
        assert_eq!(name.get(), "Joel Matthew");
        assert_eq!(name.arg().first_name, "Joel");
    }

    #[test]
    fn curry_binary_function_first() {
        let joel = of_first(
            |first: &String, second: &str| Person::new(first, second),
            "Joel".to_string(),
        );
        assert_eq!(joel.apply("Matthew").name(), "Joel Matthew");
        assert_eq!(joel.first(), "Joel");
    }

    #[test]
    fn curry_binary_function_second() {
        let matthew = of_second(
            |first: &str, second: &String| Person::new(first, second),
            "Matthew".to_string(),
        );
        assert_eq!(matthew.apply("Joel").name(), "Joel Matthew");
        assert_eq!(matthew.second(), "Matthew");
    }

    #[test]
    fn curry_binary_function_both() {
        let both = of_both(
            |first: &String, second: &String| Person::new(first, second),
            "Joel".to_string(),
            "Matthew".to_string(),
        );
        assert_eq!(both.get().name(), "Joel Matthew");
        assert_eq!(
            (both.first().as_str(), both.second().as_str()),
            ("Joel", "Matthew")
        );
    }

    #[test]
    fn curry_numeric_functions() {
        let difference = |a: &i32, b: i32| a - b;
        assert_eq!(of_first(difference, 10).apply(3), 7);

        let halve = of_second(|a: i32, b: &i32| a / b, 2);
        assert_eq!(halve.apply(9), 4);

        let product = of_both(|a: &i32, b: &i32| a * b, 6, 7);
        assert_eq!(product.get(), 42);

        let negated = of(|a: &i32| -a, 5);
        assert_eq!(negated.get(), -5);
    }

    #[test]
    fn curry_by_value_functions() {
        fn full_name(first: String, second: String) -> String {
            format!("{first} {second}")
        }

        let joel = of_first(
            |first: &String, second: String| full_name(first.clone(), second),
            "Joel".to_string(),
        );
        assert_eq!(joel.apply("Matthew".to_string()), "Joel Matthew");

        let shifted = of_second(|x: i32, by: &u32| x << *by, 3);
        assert_eq!(shifted.apply(1), 8);
    }

    #[test]
    fn curry_floating_point() {
        let square = of_second(|base: f64, exp: &f64| base.powf(*exp), 2.0);
        assert_relative_eq!(square.apply(3.0), 9.0);
        assert_relative_eq!(square.apply(0.5), 0.25);

        let hypot = of_both(|x: &f64, y: &f64| x.hypot(*y), 3.0, 4.0);
        assert_relative_eq!(hypot.get(), 5.0);
    }

    #[test]
    fn never_called_at_construction() {
        let calls = Cell::new(0);
        let add = |a: &i32, b: i32| {
            calls.set(calls.get() + 1);
            a + b
        };

        let first = of_first(add, 1);
        let both = of_both(|a: &i32, b: &i32| add(a, *b), 1, 2);
        assert_eq!(calls.get(), 0);

        first.apply(2);
        assert_eq!(calls.get(), 1);

        both.get();
        both.get();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn failures_pass_through_unchanged() {
        let parse = of_second(
            |text: &str, radix: &u32| u32::from_str_radix(text, *radix),
            16,
        );
        assert_eq!(parse.apply("ff"), Ok(255));
        assert!(parse.apply("zz").is_err());
    }

    proptest! {
        #[test]
        fn of_first_matches_direct_call(a in any::<i32>(), b in any::<i32>()) {
            let f = |a: &i32, b: i32| a.wrapping_mul(31).wrapping_sub(b);
            prop_assert_eq!(of_first(f, a).apply(b), f(&a, b));
        }

        #[test]
        fn of_second_matches_direct_call(a in any::<i32>(), b in any::<i32>()) {
            let f = |a: i32, b: &i32| a.wrapping_mul(31).wrapping_sub(*b);
            prop_assert_eq!(of_second(f, b).apply(a), f(a, &b));
        }

        #[test]
        fn of_both_matches_direct_call(a in ".*", b in ".*") {
            let f = |a: &String, b: &String| format!("{a}|{b}");
            prop_assert_eq!(of_both(f, a.clone(), b.clone()).get(), f(&a, &b));
        }

        #[test]
        fn each_call_invokes_once(a in any::<i64>(), calls in 0usize..8) {
            let count = Cell::new(0);
            let bound = of(
                |x: &i64| {
                    count.set(count.get() + 1);
                    x.wrapping_add(1)
                },
                a,
            );
            for _ in 0..calls {
                prop_assert_eq!(bound.get(), a.wrapping_add(1));
            }
            prop_assert_eq!(count.get(), calls);
        }
    }
}
