// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
///
/// None of these errors are returned by the parse functions: they are
/// produced by coercion strategies, logged, and then replaced by a
/// fallback value.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Default coercion errors
    //------------------------------
    /// A value starting with `{` or `[` was not valid JSON.
    #[error("invalid JSON value {value:?}: {reason}")]
    InvalidJson {
        /// The raw value.
        value: String,
        /// Why the JSON parser rejected it.
        reason: String,
    },

    //------------------------------
    // Custom coercion errors
    //------------------------------
    /// A custom coercer rejected a value.
    #[error("cannot coerce value {value:?}: {reason}")]
    InvalidValue {
        /// The raw value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A [ValueCoercer](crate::ValueCoercer) failed to select a coercer
    /// for an argument.
    #[error("cannot get coercer for argument {id}: {reason}")]
    CoercerLookup {
        /// The argument name or positional index.
        id: String,
        /// Why the lookup failed.
        reason: String,
    },

    /// Any other error raised by a custom coercer.
    #[error("generic error: {0:?}")]
    GenericError(String),
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
