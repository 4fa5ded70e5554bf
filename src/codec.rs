//! Boundary towards the BUFR codec library.
//!
//! The binary unpacking itself (message framing, bit decoding,
//! descriptor table resolution) is not part of this crate. A backend
//! implements [`BufrSource`] and [`BufrMessage`] over whatever codec it
//! wraps; the bundled `eccodes` feature provides one on top of the
//! ecCodes bindings. Handles and key iterators are plain values whose
//! `Drop` releases the underlying codec resources.

use std::fmt::{self, Display, Formatter};

use crate::error::BufrError;

#[cfg(feature = "eccodes")]
pub mod ecc;
#[cfg(feature = "eccodes")]
pub use self::ecc::{EccodesMessage, EccodesSource};

/// Reserved integer sentinel for "value missing" (`CODES_MISSING_LONG`).
pub const MISSING_LONG: i64 = 2_147_483_647;
/// Reserved floating-point sentinel for "value missing"
/// (`CODES_MISSING_DOUBLE`).
pub const MISSING_DOUBLE: f64 = 1e100;

/// A single decoded BUFR value as produced at the codec-fetch boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum BufrValue {
    Long(i64),
    Double(f64),
    Text(String),
    Missing,
}

impl BufrValue {
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Long(v) => *v == MISSING_LONG,
            Self::Double(v) => *v == MISSING_DOUBLE,
            Self::Text(_) => false,
            Self::Missing => true,
        }
    }

    pub(crate) fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Strips surrounding whitespace from text values. Compressed
    /// messages pad station names to a fixed width.
    pub(crate) fn trimmed(self) -> Self {
        match self {
            Self::Text(s) => Self::Text(s.trim().to_owned()),
            other => other,
        }
    }
}

impl Display for BufrValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Long(v) if *v == MISSING_LONG => write!(f, "missing"),
            Self::Double(v) if *v == MISSING_DOUBLE => write!(f, "missing"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v:.2}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Result of pulling once on a message source.
///
/// A decode error only concerns the one message being pulled; the
/// consumer is expected to report it and pull again.
#[derive(Debug)]
pub enum MessageRead<M> {
    Message(M),
    End,
    DecodeError(BufrError),
}

/// One decoded BUFR message handle.
pub trait BufrMessage {
    /// Iterator over the declared key names, in message order. The
    /// iterator is a stateful codec resource obtained anew for every
    /// traversal and released when dropped.
    type KeyIter<'a>: Iterator<Item = String>
    where
        Self: 'a;

    /// Expands the data section. Must be called once before accessing
    /// data keys; header keys are readable without it.
    fn set_unpack(&mut self) -> Result<(), BufrError>;

    fn keys(&self) -> Self::KeyIter<'_>;

    /// Scalar value of a key. Fetch and encoding failures are folded
    /// into `None`, never surfaced.
    fn scalar(&self, key: &str) -> Option<BufrValue>;

    /// Array-form value of a key, one element per subset in compressed
    /// messages.
    fn array(&self, key: &str) -> Option<Vec<BufrValue>>;

    /// Numeric WMO descriptor code of a key, for diagnostics.
    fn descriptor_code(&self, key: &str) -> Option<i64>;
}

/// A lazy, single-pass sequence of decoded messages.
pub trait BufrSource {
    type Message: BufrMessage;

    fn next_message(&mut self) -> MessageRead<Self::Message>;
}
