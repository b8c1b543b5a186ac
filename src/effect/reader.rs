//! Reader - computations that read from a shared environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Zipping two readers builds a
//! reader that runs *both* against the same environment, so a configuration
//! value, a request context or a dependency bundle is passed once and seen by
//! every part of the computation.
//!
//! # Note on Type Classes
//!
//! Reader provides `fmap`, `zip2`, `zip3`, `zip2_with`, `zip3_with` and
//! `sequence` directly on the type rather than through
//! [`Functor`](crate::typeclass::Functor) and [`Zip`](crate::typeclass::Zip).
//! The wrapped `Rc<dyn Fn>` needs `'static` bounds that the shared traits
//! don't carry. The methods behave exactly like their trait counterparts.
//!
//! # Examples
//!
//! ```rust
//! use zipwise::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! let host = Reader::asks(|config: Config| config.host);
//! let port = Reader::asks(|config: Config| config.port);
//! let address = host.zip2_with(port, |host, port| format!("{host}:{port}"));
//!
//! let config = Config {
//!     port: 8080,
//!     host: "localhost".to_string(),
//! };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use std::rc::Rc;

use crate::typeclass::{Zip, unpack3};

/// A computation that produces an `A` from an environment `R`.
///
/// # Type Parameters
///
/// - `R`: The environment type (read-only context)
/// - `A`: The result type
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a new Reader from a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipwise::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// assert_eq!(reader.run(21), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation against `environment`.
    ///
    /// A Reader can be run any number of times.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Creates a Reader that ignores the environment and returns `value`.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Creates a Reader that projects a value from the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipwise::effect::Reader;
    ///
    /// let length: Reader<String, usize> = Reader::asks(|name: String| name.len());
    /// assert_eq!(length.run("zipwise".to_string()), 7);
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` against an environment transformed by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipwise::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let local_reader = Reader::local(|environment| environment + 10, reader);
    /// assert_eq!(local_reader.run(5), 30);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| (computation_function)(modifier(environment)))
    }

    /// Maps a function over the result of this Reader.
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| function((original_function)(environment)))
    }

    /// Combines two Readers into a Reader of a pair.
    ///
    /// Both run against a clone of the same environment; `self` runs first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipwise::effect::Reader;
    ///
    /// let doubled: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let label: Reader<i32, String> = Reader::new(|environment: i32| environment.to_string());
    /// assert_eq!(doubled.zip2(label).run(21), (42, "21".to_string()));
    /// ```
    #[must_use]
    pub fn zip2<B>(self, other: Reader<R, B>) -> Reader<R, (A, B)>
    where
        B: 'static,
        R: Clone,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        Reader::new(move |environment: R| {
            let a = (self_function)(environment.clone());
            let b = (other_function)(environment);
            (a, b)
        })
    }

    /// Combines two Readers using a binary function.
    pub fn zip2_with<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        self.zip2(other).fmap(move |(a, b)| function(a, b))
    }

    /// Combines three Readers into a Reader of a triple.
    #[must_use]
    pub fn zip3<B, C>(self, second: Reader<R, B>, third: Reader<R, C>) -> Reader<R, (A, B, C)>
    where
        B: 'static,
        C: 'static,
        R: Clone,
    {
        self.zip2(second.zip2(third)).fmap(unpack3)
    }

    /// Combines three Readers using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipwise::effect::Reader;
    ///
    /// let reader1: Reader<i32, i32> = Reader::new(|environment| environment);
    /// let reader2: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let reader3: Reader<i32, i32> = Reader::new(|environment| environment * 3);
    /// let combined = reader1.zip3_with(reader2, reader3, |a, b, c| a + b + c);
    /// assert_eq!(combined.run(10), 60);
    /// ```
    pub fn zip3_with<B, C, D, F>(
        self,
        second: Reader<R, B>,
        third: Reader<R, C>,
        function: F,
    ) -> Reader<R, D>
    where
        F: Fn(A, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        R: Clone,
    {
        self.zip3(second, third)
            .fmap(move |(a, b, c)| function(a, b, c))
    }

    /// Turns a list of Readers into a Reader of a list.
    ///
    /// Every Reader runs against a clone of the environment, in input order.
    /// An empty list yields a Reader that always returns `[]`.
    ///
    /// Neighbouring Readers are combined pairwise with
    /// [`zip2_with`](Self::zip2_with), layer by layer, so running the result
    /// nests only logarithmically many closures however long the list is.
    pub fn sequence(readers: Vec<Self>) -> Reader<R, Vec<A>>
    where
        R: Clone,
    {
        let mut layer: Vec<Reader<R, Vec<A>>> = readers
            .into_iter()
            .map(|reader| reader.fmap(|value| vec![value]))
            .collect();

        while layer.len() > 1 {
            let mut readers = layer.into_iter();
            let mut combined = Vec::with_capacity(readers.len().div_ceil(2));
            while let Some(front) = readers.next() {
                combined.push(match readers.next() {
                    Some(back) => front.zip2_with(back, |mut front, back| {
                        front.extend(back);
                        front
                    }),
                    None => front,
                });
            }
            layer = combined;
        }

        layer.pop().unwrap_or_else(|| Reader::new(|_| Vec::new()))
    }
}

impl<Env> Reader<Env, Env>
where
    Env: 'static,
{
    /// Creates a Reader that returns the entire environment.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

/// Zips two Readers whose results are themselves containers of kind `K`.
///
/// The results are combined with `K::zip2`, so the usual rules of the kind
/// apply: `None` wins for options, vectors are truncated, and so on.
///
/// # Examples
///
/// ```rust
/// use zipwise::effect::{Reader, zip2_in};
/// use zipwise::typeclass::OptionKind;
///
/// let first: Reader<Vec<i32>, Option<i32>> = Reader::asks(|values: Vec<i32>| values.first().copied());
/// let last: Reader<Vec<i32>, Option<i32>> = Reader::asks(|values: Vec<i32>| values.last().copied());
/// let ends = zip2_in::<OptionKind, _, _, _>(first, last);
///
/// assert_eq!(ends.run(vec![1, 2, 3]), Some((1, 3)));
/// assert_eq!(ends.run(vec![]), None);
/// ```
pub fn zip2_in<K, R, A, B>(
    left: Reader<R, K::Of<A>>,
    right: Reader<R, K::Of<B>>,
) -> Reader<R, K::Of<(A, B)>>
where
    K: Zip + 'static,
    R: Clone + 'static,
    A: 'static,
    B: 'static,
    K::Of<A>: 'static,
    K::Of<B>: 'static,
    K::Of<(A, B)>: 'static,
{
    left.zip2(right).fmap(|(a, b)| K::zip2::<A, B>(a, b))
}

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> std::fmt::Display for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Reader>")
    }
}
