//! Two lazy views of one upstream.
//!
//! `partition`, `span`, `separate`, `split_at` and `unzip` hand out two
//! cursors that read from the same upstream. The upstream is owned by a
//! shared router. Whichever branch pulls, the router takes the next upstream
//! entry and asks its [`Splitter`] where it goes; entries for the other
//! branch wait in that branch's queue. Each branch therefore sees exactly
//! its own entries in upstream order, whatever the interleaving of pulls.
//!
//! Once a branch is dropped nothing more is queued for it. A splitter can
//! also close the left side (as `span` does at the first failing value), so
//! that side ends without pulling further.
//!
//! Branches share state through `Rc<RefCell<..>>` and are not `Send`. A
//! predicate must not pull from a sibling branch of the fork it runs in.
//!
//! # Examples
//!
//! ```rust
//! use lambseq::sequence::{normalize, Sequence};
//!
//! let (evens, odds) = normalize(vec![1, 2, 3, 4, 5]).partition(|value| value % 2 == 0);
//!
//! // Pulling the odd branch first queues the even values for later
//! assert_eq!(odds.collect_entries(), vec![(0, 1), (2, 3), (4, 5)]);
//! assert_eq!(evens.collect_entries(), vec![(1, 2), (3, 4)]);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::cursor::Cursor;

/// Where a routed entry goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<L, R> {
    /// To the left branch only.
    Left(L),
    /// To the right branch only.
    Right(R),
    /// One part to each branch.
    Both(L, R),
}

/// Decides which branch receives each upstream entry.
pub trait Splitter<K, V> {
    /// The entries the left branch yields.
    type Left;
    /// The entries the right branch yields.
    type Right;

    /// Routes one upstream entry. Called exactly once per entry.
    fn route(&mut self, key: K, value: V) -> Route<Self::Left, Self::Right>;

    /// Returns `false` once no further entry can be routed left.
    fn left_open(&self) -> bool {
        true
    }
}

// =============================================================================
// Splitters
// =============================================================================

/// Left: values satisfying the predicate. Right: the rest.
#[derive(Debug, Clone)]
pub struct Partition<P> {
    predicate: P,
}

impl<K, V, P> Splitter<K, V> for Partition<P>
where
    P: FnMut(&V) -> bool,
{
    type Left = (K, V);
    type Right = (K, V);

    fn route(&mut self, key: K, value: V) -> Route<(K, V), (K, V)> {
        if (self.predicate)(&value) {
            Route::Left((key, value))
        } else {
            Route::Right((key, value))
        }
    }
}

/// Left: the longest prefix satisfying the predicate. Right: everything after.
#[derive(Debug, Clone)]
pub struct Span<P> {
    predicate: P,
    spanning: bool,
}

impl<K, V, P> Splitter<K, V> for Span<P>
where
    P: FnMut(&V) -> bool,
{
    type Left = (K, V);
    type Right = (K, V);

    fn route(&mut self, key: K, value: V) -> Route<(K, V), (K, V)> {
        if self.spanning && (self.predicate)(&value) {
            Route::Left((key, value))
        } else {
            self.spanning = false;
            Route::Right((key, value))
        }
    }

    fn left_open(&self) -> bool {
        self.spanning
    }
}

/// Left: the first `remaining` entries. Right: the rest.
#[derive(Debug, Clone)]
pub struct SplitAt {
    remaining: usize,
}

impl<K, V> Splitter<K, V> for SplitAt {
    type Left = (K, V);
    type Right = (K, V);

    fn route(&mut self, key: K, value: V) -> Route<(K, V), (K, V)> {
        if self.remaining > 0 {
            self.remaining -= 1;
            Route::Left((key, value))
        } else {
            Route::Right((key, value))
        }
    }

    fn left_open(&self) -> bool {
        self.remaining > 0
    }
}

/// Splits pair values: the first components left, the second right, both
/// under fresh positional keys.
#[derive(Debug, Clone, Default)]
pub struct Unzip {
    position: usize,
}

impl<K, A, B> Splitter<K, (A, B)> for Unzip {
    type Left = (usize, A);
    type Right = (usize, B);

    fn route(&mut self, _key: K, (first, second): (A, B)) -> Route<(usize, A), (usize, B)> {
        let position = self.position;
        self.position += 1;
        Route::Both((position, first), (position, second))
    }
}

// =============================================================================
// Router
// =============================================================================

struct Lane<T> {
    queue: VecDeque<T>,
    attached: bool,
}

impl<T> Lane<T> {
    const fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            attached: true,
        }
    }

    fn hold(&mut self, entry: T, side: &'static str) {
        if self.attached {
            self.queue.push_back(entry);
            tracing::trace!(side, queued = self.queue.len(), "fork buffered an entry");
        }
    }

    fn detach(&mut self) {
        self.attached = false;
        self.queue.clear();
    }
}

struct Router<C, S>
where
    C: Cursor,
    S: Splitter<C::Key, C::Value>,
{
    upstream: C,
    splitter: S,
    exhausted: bool,
    left: Lane<S::Left>,
    right: Lane<S::Right>,
}

impl<C, S> Router<C, S>
where
    C: Cursor,
    S: Splitter<C::Key, C::Value>,
{
    const fn new(upstream: C, splitter: S) -> Self {
        Self {
            upstream,
            splitter,
            exhausted: false,
            left: Lane::new(),
            right: Lane::new(),
        }
    }

    fn next_route(&mut self) -> Option<Route<S::Left, S::Right>> {
        if self.exhausted {
            return None;
        }
        match self.upstream.pull() {
            Some((key, value)) => Some(self.splitter.route(key, value)),
            None => {
                self.exhausted = true;
                None
            }
        }
    }

    fn pull_left(&mut self) -> Option<S::Left> {
        loop {
            if let Some(entry) = self.left.queue.pop_front() {
                return Some(entry);
            }
            if !self.splitter.left_open() {
                return None;
            }
            match self.next_route()? {
                Route::Left(entry) => return Some(entry),
                Route::Right(entry) => self.right.hold(entry, "right"),
                Route::Both(entry, other) => {
                    self.right.hold(other, "right");
                    return Some(entry);
                }
            }
        }
    }

    fn pull_right(&mut self) -> Option<S::Right> {
        loop {
            if let Some(entry) = self.right.queue.pop_front() {
                return Some(entry);
            }
            match self.next_route()? {
                Route::Right(entry) => return Some(entry),
                Route::Left(entry) => self.left.hold(entry, "left"),
                Route::Both(other, entry) => {
                    self.left.hold(other, "left");
                    return Some(entry);
                }
            }
        }
    }
}

type Shared<C, S> = Rc<RefCell<Router<C, S>>>;

/// Splits `upstream` into two branches routed by `splitter`.
///
/// The built-in two-sided operations are forks with the splitters defined
/// above; a custom [`Splitter`] plugs in the same way.
pub fn fork<C, S>(upstream: C, splitter: S) -> Forked<C, S>
where
    C: Cursor,
    S: Splitter<C::Key, C::Value>,
{
    let router = Rc::new(RefCell::new(Router::new(upstream, splitter)));
    (
        LeftBranch {
            router: Rc::clone(&router),
        },
        RightBranch { router },
    )
}

pub(crate) fn partition<C, P>(upstream: C, predicate: P) -> Forked<C, Partition<P>>
where
    C: Cursor,
    P: FnMut(&C::Value) -> bool,
{
    fork(upstream, Partition { predicate })
}

pub(crate) fn span<C, P>(upstream: C, predicate: P) -> Forked<C, Span<P>>
where
    C: Cursor,
    P: FnMut(&C::Value) -> bool,
{
    fork(
        upstream,
        Span {
            predicate,
            spanning: true,
        },
    )
}

pub(crate) fn split_at<C: Cursor>(upstream: C, count: usize) -> Forked<C, SplitAt> {
    fork(upstream, SplitAt { remaining: count })
}

pub(crate) fn unzip<C, A, B>(upstream: C) -> Forked<C, Unzip>
where
    C: Cursor<Value = (A, B)>,
{
    fork(upstream, Unzip::default())
}

/// The pair of branches returned by a fork.
pub type Forked<C, S> = (LeftBranch<C, S>, RightBranch<C, S>);

// =============================================================================
// Branches
// =============================================================================

/// The left view of a fork.
pub struct LeftBranch<C, S>
where
    C: Cursor,
    S: Splitter<C::Key, C::Value>,
{
    router: Shared<C, S>,
}

/// The right view of a fork.
pub struct RightBranch<C, S>
where
    C: Cursor,
    S: Splitter<C::Key, C::Value>,
{
    router: Shared<C, S>,
}

impl<C, S, K, V> Cursor for LeftBranch<C, S>
where
    C: Cursor,
    S: Splitter<C::Key, C::Value, Left = (K, V)>,
{
    type Key = K;
    type Value = V;

    fn pull(&mut self) -> Option<(K, V)> {
        self.router.borrow_mut().pull_left()
    }
}

impl<C, S, K, V> Cursor for RightBranch<C, S>
where
    C: Cursor,
    S: Splitter<C::Key, C::Value, Right = (K, V)>,
{
    type Key = K;
    type Value = V;

    fn pull(&mut self) -> Option<(K, V)> {
        self.router.borrow_mut().pull_right()
    }
}

impl<C, S> Drop for LeftBranch<C, S>
where
    C: Cursor,
    S: Splitter<C::Key, C::Value>,
{
    fn drop(&mut self) {
        if let Ok(mut router) = self.router.try_borrow_mut() {
            router.left.detach();
        }
    }
}

impl<C, S> Drop for RightBranch<C, S>
where
    C: Cursor,
    S: Splitter<C::Key, C::Value>,
{
    fn drop(&mut self) {
        if let Ok(mut router) = self.router.try_borrow_mut() {
            router.right.detach();
        }
    }
}

static_assertions::assert_not_impl_any!(
    LeftBranch<super::ArrayCursor<usize, i32>, SplitAt>: Send, Sync
);
