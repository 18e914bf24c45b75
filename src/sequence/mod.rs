//! Lazy, pull-based sequence processing.
//!
//! This module provides:
//!
//! - [`Cursor`]: The single-pass `(key, value)` pull protocol
//! - [`normalize`]: Conversion of vectors, maps, strings and iterators into cursors
//! - [`Sequence`]: List-processing combinators available on every cursor
//! - [`iterate`], [`repeat`], [`replicate`], [`unfold`]: Generators
//! - [`IndexedView`]: Read-only positional access to in-memory cursors
//!
//! Adapters compute nothing until they are pulled. Combinators that pass
//! source elements through keep their keys; combinators that produce new
//! elements number them from zero.
//!
//! # Examples
//!
//! ## Infinite Sources
//!
//! ```rust
//! use lambseq::sequence::{iterate, Sequence};
//!
//! let collatz = iterate(27_u64, |&n| if n % 2 == 0 { n / 2 } else { 3 * n + 1 });
//! let steps = collatz.take_while(|&n| n != 1).count();
//! assert_eq!(steps, 111);
//! ```
//!
//! ## Keys Follow Their Values
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use lambseq::sequence::{normalize, Sequence};
//!
//! let stock = BTreeMap::from([("apples", 3), ("kiwis", 0), ("pears", 7)]);
//! let available = normalize(stock).filter(|count| *count > 0).keys().collect::<Vec<_>>();
//! assert_eq!(available, vec!["apples", "pears"]);
//! ```
//!
//! ## Two Views of One Source
//!
//! ```rust
//! use lambseq::sequence::{normalize, Sequence};
//!
//! let (digits, rest) = normalize("2024-10-19").span(char::is_ascii_digit);
//! assert_eq!(digits.collect_values().into_iter().collect::<String>(), "2024");
//! assert_eq!(rest.collect_values().into_iter().collect::<String>(), "-10-19");
//! ```

mod access;
mod combinators;
mod cursor;
mod fork;
mod generate;
mod group;
#[cfg(feature = "json")]
mod json;
mod materialize;
mod order;
mod reduce;
mod scan;
mod search;
mod slice;
mod source;
mod transform;
mod view;
mod zip;

pub use access::{Init, Peekable, Tail};
pub use combinators::{Group, Sequence};
pub use cursor::{Cursor, Fuse, IntoCursor};
pub use fork::{fork, Forked, LeftBranch, Partition, RightBranch, Route, Span, SplitAt, Splitter, Unzip};
pub use generate::{iterate, repeat, replicate, unfold, Cycle, Iterate, Repeat, Unfold};
pub use group::GroupBy;
#[cfg(feature = "json")]
pub use json::{normalize_json, JsonCursor, JsonKey};
pub use materialize::{Entries, Keys, Values};
pub use reduce::Concat;
pub use scan::Scan;
pub use search::FindIndices;
pub use slice::{DropWhile, Skip, Take, TakeWhile};
pub use source::{from_values, normalize, ArrayCursor, Delegate, TextCursor};
pub use transform::{Filter, Intercalate, Intersperse, Map, Reverse};
pub use view::IndexedView;
pub use zip::{Zip, Zip3, ZipWith, ZipWith3};
