//! Error types for the netsim core library.
//!
//! Defines the error enums surfaced by [`crate::Network`] and the random
//! service, each paired with a stable machine-readable code.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by a [`crate::RandomSource`] when asked for samples with
/// unusable distribution parameters.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RandomError {
    /// Normal samples need a finite, non-negative standard deviation.
    #[error("standard deviation must be finite and non-negative (got {stddev})")]
    InvalidStdDev {
        /// The rejected standard deviation.
        stddev: f64,
    },
    /// Distribution means must be finite, and non-negative for Poisson draws.
    #[error("distribution mean {mean} is not usable")]
    InvalidMean {
        /// The rejected mean.
        mean: f64,
    },
    /// Uniform integer bounds were inverted.
    #[error("uniform range is empty: low={low}, high={high}")]
    InvalidRange {
        /// Inclusive lower bound supplied by the caller.
        low: usize,
        /// Inclusive upper bound supplied by the caller.
        high: usize,
    },
    /// A sampled count does not fit in `usize`.
    #[error("sampled count {draw} does not fit in usize")]
    CountOverflow {
        /// The raw floating-point draw.
        draw: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`RandomError`] variants.
    enum RandomErrorCode for RandomError {
        /// Normal samples need a finite, non-negative standard deviation.
        InvalidStdDev => InvalidStdDev { .. } => "RANDOM_INVALID_STDDEV",
        /// Distribution means must be finite.
        InvalidMean => InvalidMean { .. } => "RANDOM_INVALID_MEAN",
        /// Uniform integer bounds were inverted.
        InvalidRange => InvalidRange { .. } => "RANDOM_INVALID_RANGE",
        /// A sampled count does not fit in `usize`.
        CountOverflow => CountOverflow { .. } => "RANDOM_COUNT_OVERFLOW",
    }
}

/// Error type produced by [`crate::Network`] queries and bulk mutations.
///
/// Rejected single-link insertions are not errors; see
/// [`crate::LinkRejection`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NetworkError {
    /// A query named a node index at or beyond the node count.
    #[error("node {node} is out of range for a network of {node_count} node(s)")]
    NodeOutOfRange {
        /// The requested node index.
        node: usize,
        /// Number of nodes in the network at the time of the query.
        node_count: usize,
    },
    /// `random_connect` was asked for a mean degree outside
    /// `0.0..=MAX_MEAN_DEGREE`.
    #[error(
        "mean degree must lie in 0..={max} (got {mean_degree})",
        max = crate::network::MAX_MEAN_DEGREE
    )]
    InvalidMeanDegree {
        /// The rejected mean degree.
        mean_degree: f64,
    },
    /// The random source returned a different number of samples than asked.
    #[error("random source returned {actual} sample(s) where {expected} were requested")]
    SampleCountMismatch {
        /// Number of samples requested.
        expected: usize,
        /// Number of samples returned.
        actual: usize,
    },
    /// The random service refused to produce samples.
    #[error("random source failure: {0}")]
    Random(#[from] RandomError),
}

define_error_codes! {
    /// Stable codes describing [`NetworkError`] variants.
    enum NetworkErrorCode for NetworkError {
        /// A query named a node index at or beyond the node count.
        NodeOutOfRange => NodeOutOfRange { .. } => "NETWORK_NODE_OUT_OF_RANGE",
        /// `random_connect` was asked for an unusable mean degree.
        InvalidMeanDegree => InvalidMeanDegree { .. } => "NETWORK_INVALID_MEAN_DEGREE",
        /// The random source returned the wrong number of samples.
        SampleCountMismatch => SampleCountMismatch { .. } => "NETWORK_SAMPLE_COUNT_MISMATCH",
        /// The random service refused to produce samples.
        RandomFailure => Random(..) => "NETWORK_RANDOM_FAILURE",
    }
}

impl NetworkError {
    /// Retrieve the inner [`RandomErrorCode`] when the error originated in the
    /// random service.
    #[must_use]
    pub const fn random_code(&self) -> Option<RandomErrorCode> {
        match self {
            Self::Random(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, NetworkError>;
