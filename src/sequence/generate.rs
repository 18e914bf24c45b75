//! Generators and repetition.
//!
//! `iterate`, `repeat` and `cycle` never end on their own; bound them with
//! `take`, `take_while` or `zip` before forcing them.
//!
//! # Examples
//!
//! ```rust
//! use lambseq::control::Optional;
//! use lambseq::sequence::{iterate, unfold, Sequence};
//!
//! let powers = iterate(1, |power| power * 2).take(5);
//! assert_eq!(powers.collect_values(), vec![1, 2, 4, 8, 16]);
//!
//! let countdown = unfold(3, |n| if n == 0 { Optional::absent() } else { Optional::present((n, n - 1)) });
//! assert_eq!(countdown.collect_values(), vec![3, 2, 1]);
//! ```

use super::cursor::Cursor;
use super::slice::Take;
use crate::control::Optional;

/// `seed`, `f(seed)`, `f(f(seed))`, ... without end.
///
/// `function` is applied once per pull, never ahead of time.
#[inline]
pub fn iterate<T, F>(seed: T, function: F) -> Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    Iterate {
        seed: Some(seed),
        last: None,
        function,
        position: 0,
    }
}

/// The same value without end.
#[inline]
pub const fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value, position: 0 }
}

/// The same value `count` times.
///
/// # Examples
///
/// ```rust
/// use lambseq::sequence::{replicate, Sequence};
///
/// assert_eq!(replicate(3, 'z').collect_values(), vec!['z', 'z', 'z']);
/// ```
#[inline]
pub const fn replicate<T: Clone>(count: usize, value: T) -> Take<Repeat<T>> {
    Take::new(repeat(value), count)
}

/// Builds a sequence from a state.
///
/// `function` receives the current state and returns `Absent` to stop, or
/// `Present((value, next_state))` to emit `value` and continue.
#[inline]
pub const fn unfold<S, V, F>(seed: S, function: F) -> Unfold<S, F>
where
    F: FnMut(S) -> Optional<(V, S)>,
{
    Unfold {
        state: Some(seed),
        function,
        position: 0,
    }
}

/// Created by [`iterate`].
#[derive(Debug, Clone)]
pub struct Iterate<T, F> {
    seed: Option<T>,
    last: Option<T>,
    function: F,
    position: usize,
}

impl<T, F> Cursor for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Key = usize;
    type Value = T;

    fn pull(&mut self) -> Option<(usize, T)> {
        let value = match self.seed.take() {
            Some(seed) => seed,
            None => (self.function)(self.last.as_ref()?),
        };
        self.last = Some(value.clone());
        let position = self.position;
        self.position += 1;
        Some((position, value))
    }
}

/// Created by [`repeat`].
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    position: usize,
}

impl<T: Clone> Cursor for Repeat<T> {
    type Key = usize;
    type Value = T;

    #[inline]
    fn pull(&mut self) -> Option<(usize, T)> {
        let position = self.position;
        self.position += 1;
        Some((position, self.value.clone()))
    }
}

/// Created by [`unfold`].
#[derive(Debug, Clone)]
pub struct Unfold<S, F> {
    state: Option<S>,
    function: F,
    position: usize,
}

impl<S, V, F> Cursor for Unfold<S, F>
where
    F: FnMut(S) -> Optional<(V, S)>,
{
    type Key = usize;
    type Value = V;

    fn pull(&mut self) -> Option<(usize, V)> {
        let state = self.state.take()?;
        let (value, next) = (self.function)(state).into_option()?;
        self.state = Some(next);
        let position = self.position;
        self.position += 1;
        Some((position, value))
    }
}

/// Repeats the upstream's entries, keys included, without end.
///
/// The first pass is buffered as it is pulled; later passes replay the
/// buffer. An empty upstream gives an empty cycle.
pub struct Cycle<C: Cursor> {
    upstream: Option<C>,
    buffer: Vec<(C::Key, C::Value)>,
    replay: usize,
}

impl<C: Cursor> Cycle<C> {
    pub(crate) const fn new(upstream: C) -> Self {
        Self {
            upstream: Some(upstream),
            buffer: Vec::new(),
            replay: 0,
        }
    }
}

impl<C> Cursor for Cycle<C>
where
    C: Cursor,
    C::Key: Clone,
    C::Value: Clone,
{
    type Key = C::Key;
    type Value = C::Value;

    fn pull(&mut self) -> Option<(C::Key, C::Value)> {
        if let Some(upstream) = self.upstream.as_mut() {
            if let Some(entry) = upstream.pull() {
                self.buffer.push(entry.clone());
                return Some(entry);
            }
            self.upstream = None;
            tracing::trace!(entries = self.buffer.len(), "cycle buffered its first pass");
        }
        if self.buffer.is_empty() {
            return None;
        }
        let entry = self.buffer[self.replay].clone();
        self.replay = (self.replay + 1) % self.buffer.len();
        Some(entry)
    }
}
