// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Number, Value};

use crate::error::{Error, Result};

/// Decimal literals (with optional sign, fraction and exponent) plus
/// unsigned hex, octal and binary integers.
const NUMERIC_PATTERN: &str = r"^(?:[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?|0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+)$";

/// Largest integer an `f64` can hold without losing precision (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn numeric_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();

    // Note: unwrap safe as the pattern is a constant.
    RE.get_or_init(|| Regex::new(NUMERIC_PATTERN).unwrap())
}

/// Identifies the argument a value belongs to when selecting a coercer.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum ArgId {
    /// A named argument (the text between the prefix and the delimiter).
    Name(String),
    /// A positional argument, identified by its index in the token list.
    Index(usize),
}

impl fmt::Display for ArgId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArgId::Name(name) => write!(f, "{:?}", name),
            ArgId::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for ArgId {
    fn from(name: &str) -> Self {
        ArgId::Name(name.into())
    }
}

impl From<String> for ArgId {
    fn from(name: String) -> Self {
        ArgId::Name(name)
    }
}

impl From<usize> for ArgId {
    fn from(index: usize) -> Self {
        ArgId::Index(index)
    }
}

/// A strategy that converts a raw argument value into a [Value].
///
/// Implemented by [DefaultCoercer] and by any closure or function with the
/// signature `Fn(&str) -> Result<Value>`.
pub trait Coerce {
    /// Convert `raw` into a value.
    ///
    /// # Return value
    ///
    /// If the conversion fails, the parser logs the error and stores
    /// `raw` unchanged as a string.
    fn coerce(&self, raw: &str) -> Result<Value>;
}

impl<F> Coerce for F
where
    F: Fn(&str) -> Result<Value>,
{
    fn coerce(&self, raw: &str) -> Result<Value> {
        self(raw)
    }
}

/// Selects the [Coerce] strategy to use for a particular argument.
pub trait ValueCoercer {
    /// Return the coercer for the argument identified by `id`.
    ///
    /// # Return value
    ///
    /// - `Ok(Some(coercer))`: use `coercer` for this argument.
    /// - `Ok(None)`: use the [DefaultCoercer].
    /// - `Err(_)`: the error is logged and the raw value is stored
    ///   unchanged as a string.
    fn coercer(&self, id: &ArgId) -> Result<Option<&dyn Coerce>>;
}

impl<'a> fmt::Debug for dyn ValueCoercer + 'a {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ValueCoercer: {:p}", self)
    }
}

/// The built-in coercion policy. See [coerce()].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DefaultCoercer;

impl Coerce for DefaultCoercer {
    fn coerce(&self, raw: &str) -> Result<Value> {
        coerce(raw)
    }
}

/// A registry of coercers keyed by argument.
///
/// Arguments without a registered coercer use the [DefaultCoercer].
#[derive(Default)]
pub struct Coercers<'a> {
    entries: HashMap<ArgId, Box<dyn Coerce + 'a>>,
}

impl<'a> Coercers<'a> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Coercers::default()
    }

    /// Register `coercer` for the argument `id` (a name or a positional
    /// index). A later registration for the same argument replaces the
    /// earlier one.
    pub fn add<I, C>(&mut self, id: I, coercer: C)
    where
        I: Into<ArgId>,
        C: Coerce + 'a,
    {
        self.entries.insert(id.into(), Box::new(coercer));
    }

    /// Determine if a coercer has been registered for `id`.
    pub fn exists(&self, id: &ArgId) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns the number of registered coercers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no coercers have been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> fmt::Debug for Coercers<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut keys: Vec<&ArgId> = self.entries.keys().collect();
        keys.sort_unstable();

        f.debug_struct("Coercers").field("entries", &keys).finish()
    }
}

impl<'a> ValueCoercer for Coercers<'a> {
    fn coercer(&self, id: &ArgId) -> Result<Option<&dyn Coerce>> {
        Ok(self.entries.get(id).map(|c| &**c as &dyn Coerce))
    }
}

/// Convert a number into its JSON form: integers that an `f64` holds
/// exactly become JSON integers, everything else a JSON float.
fn json_number(n: f64) -> Option<Number> {
    if !n.is_finite() {
        return None;
    }

    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Some(Number::from(n as i64));
    }

    Number::from_f64(n)
}

/// Returns the number `value` represents, if it is a (finite) numeric
/// literal once surrounding whitespace is removed.
fn parse_number(value: &str) -> Option<Number> {
    let literal = value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    if literal.is_empty() || !numeric_literal().is_match(literal) {
        return None;
    }

    let radix = match literal.get(..2) {
        Some("0x") | Some("0X") => 16,
        Some("0o") | Some("0O") => 8,
        Some("0b") | Some("0B") => 2,
        _ => 10,
    };

    let n = if radix == 10 {
        literal.parse::<f64>().ok()?
    } else {
        // The digits were validated by the pattern.
        literal[2..].chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })?
    };

    json_number(n)
}

/// Apply the default coercion policy to a raw string value.
///
/// In priority order:
///
/// 1. A non-empty numeric literal (`12`, `-3.5`, `.5e2`, `0x1f`) becomes
///    a number.
/// 2. `true` / `false` (in any case) become booleans.
/// 3. A value starting with `{` or `[` is parsed as JSON.
/// 4. Anything else is returned as a string.
///
/// # Errors
///
/// Returns [Error::InvalidJson] if step 3 fails.
pub fn coerce(raw: &str) -> Result<Value> {
    if let Some(n) = parse_number(raw) {
        return Ok(Value::Number(n));
    }

    match raw.to_lowercase().as_str() {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => (),
    }

    if raw.starts_with('{') || raw.starts_with('[') {
        return serde_json::from_str(raw).map_err(|e| Error::InvalidJson {
            value: raw.into(),
            reason: e.to_string(),
        });
    }

    Ok(Value::String(raw.into()))
}

/// Apply [coerce()] to a string value. Any other kind of value is
/// returned unchanged.
pub fn coerce_value(value: Value) -> Result<Value> {
    match value {
        Value::String(s) => coerce(&s),
        other => Ok(other),
    }
}
