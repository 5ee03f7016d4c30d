//! # enumerable
//!
//! Traversal and aggregation combinators built from a single visiting
//! primitive.
//!
//! ## Overview
//!
//! Every operation in this crate is written against one trait, [`Visit`],
//! whose only job is to hand each logical unit of a container to a callback
//! in order. Two container shapes exist:
//!
//! - **Ordered sequences** (slices, `Vec`, arrays) are seen through a
//!   [`SequenceView`]; each unit is a `&T`.
//! - **Associative containers** (`HashMap`, `BTreeMap`, `IndexMap`) are seen
//!   through a [`PairView`]; each unit is a `(&K, &V)` pair, so a key is never
//!   visited without its value.
//!
//! On top of that primitive the [`Enumerable`] extension trait layers:
//!
//! - `each` / `each_with_index`: visitation, optionally with logical positions
//! - `select`: filtering into a container of the same shape
//! - `all` / `any` / `none`: quantifiers
//! - `count`, `count_by`, `count_value`: counting
//! - `map`: transformation into a `Vec`
//! - `inject`: left fold driven by a named [`Operator`] or a closure
//!
//! Operations called without a callback return an [`Enumerator`], a lazy
//! handle that can be iterated, rewound and traversed again.
//!
//! ## Feature Flags
//!
//! - `indexmap` (default): `IndexMap` as an insertion-ordered associative
//!   container
//! - `serde`: `Serialize`/`Deserialize` for [`Operator`] and [`Number`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let numbers = [1, 2, 3];
//! let odd = numbers.view().select(|number| *number % 2 == 1);
//! assert_eq!(odd, vec![1, 3]);
//!
//! let difference = numbers.view().inject_operator(Operator::Subtract);
//! assert_eq!(difference, Ok(-4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use enumerable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::enumerable::{Enumerable, Quantifier};
    pub use crate::enumerator::{Enumerator, Indexed};
    pub use crate::error::{ArithmeticError, ReduceError, UnknownOperatorError};
    pub use crate::inject::{Combinator, InjectArg, Reduction};
    pub use crate::operator::{Arithmetic, Number, Operand, Operator};
    pub use crate::view::{AsView, PairSource, PairView, Rebuild, SequenceView, Visit};
}

pub mod enumerable;
pub mod enumerator;
pub mod error;
pub mod inject;
pub mod operator;
pub mod view;

pub use enumerable::{Enumerable, Quantifier};
pub use enumerator::{Enumerator, Indexed};
pub use error::{ArithmeticError, ReduceError, UnknownOperatorError};
pub use inject::{Combinator, InjectArg, Reduction};
pub use operator::{Arithmetic, Number, Operand, Operator};
pub use view::{AsView, PairSource, PairView, Rebuild, SequenceView, Visit};
