// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::ffi::OsString;
use std::fmt;

use log::{debug, trace, warn};
use serde_json::{Map, Value};

use crate::coerce::{ArgId, Coerce, DefaultCoercer};
use crate::config::{get_args, Config, Options};

/// Name of the reserved field holding the positional arguments in the
/// JSON form of [ParsedArgs].
pub const POSITIONAL_KEY: &str = "positional";

/// The result of a parse: the positional arguments plus every named
/// argument found.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedArgs {
    /// Positional values. Entries are only `None` when
    /// [Options::keep_positional_indices()] was set and the token at that
    /// index was not positional.
    positional: Vec<Option<Value>>,

    /// Named values in the order the names were first seen.
    named: Map<String, Value>,
}

impl ParsedArgs {
    /// The positional arguments (possibly sparse).
    pub fn positional(&self) -> &[Option<Value>] {
        &self.positional
    }

    /// The positional arguments that are present, in order.
    pub fn positional_values(&self) -> impl Iterator<Item = &Value> {
        self.positional.iter().flatten()
    }

    /// All named arguments.
    pub fn named(&self) -> &Map<String, Value> {
        &self.named
    }

    /// Returns the value of the named argument `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.named.get(name)
    }

    /// Determine if the named argument `name` was specified.
    pub fn contains(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// Returns the number of named arguments (positional arguments are
    /// not counted).
    pub fn named_len(&self) -> usize {
        self.named.len()
    }

    /// Returns `true` if at least one named argument was found.
    pub fn has_named(&self) -> bool {
        !self.named.is_empty()
    }

    /// Returns the arguments as a single JSON object: a
    /// [POSITIONAL_KEY] array (gaps shown as `null`) followed by the
    /// named values.
    ///
    /// # Note
    ///
    /// A named argument called `positional` replaces the array in the
    /// returned object.
    pub fn to_json(&self) -> Value {
        let positional = self
            .positional
            .iter()
            .map(|v| v.clone().unwrap_or(Value::Null))
            .collect();

        let mut map = Map::new();

        map.insert(POSITIONAL_KEY.into(), Value::Array(positional));

        for (name, value) in &self.named {
            if name == POSITIONAL_KEY {
                debug!(
                    "named argument {:?} replaces the positional arguments in the JSON output",
                    name
                );
            }

            map.insert(name.clone(), value.clone());
        }

        Value::Object(map)
    }

    fn set(&mut self, name: &str, value: Value) {
        self.named.insert(name.into(), value);
    }

    fn push_positional(&mut self, value: Value) {
        self.positional.push(Some(value));
    }

    fn set_positional(&mut self, index: usize, value: Value) {
        if self.positional.len() <= index {
            self.positional.resize(index + 1, None);
        }

        self.positional[index] = Some(value);
    }
}

impl fmt::Display for ParsedArgs {
    /// Pretty printed JSON.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let json = serde_json::to_string_pretty(&self.to_json()).map_err(|_| fmt::Error)?;

        write!(f, "{}", json)
    }
}

/// Single pass token classifier.
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    config: Config<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser for a resolved configuration.
    pub fn new(config: Config<'a>) -> Self {
        Parser { config }
    }

    /// The configuration the parser uses.
    pub fn config(&self) -> &Config<'a> {
        &self.config
    }

    /// Returns the first configured prefix `token` starts with.
    fn match_prefix(&self, token: &str) -> Option<&str> {
        self.config
            .prefixes()
            .iter()
            .map(|p| p.as_str())
            .find(|p| token.starts_with(p))
    }

    /// Split a named argument (with the prefix removed) into a name and an
    /// inline value.
    ///
    /// The delimiter found earliest in `arg` is used; if two delimiters
    /// are found at the same index, the one declared first wins. Returns
    /// `None` if there is no delimiter or nothing follows it.
    fn split_delimited<'t>(&self, arg: &'t str) -> Option<(&'t str, &'t str)> {
        let (index, delimiter) = self
            .config
            .delimiters()
            .iter()
            .filter(|d| !d.is_empty())
            .filter_map(|d| arg.find(d.as_str()).map(|index| (index, d)))
            .min_by_key(|(index, _)| *index)?;

        let value = &arg[index + delimiter.len()..];

        if value.is_empty() {
            return None;
        }

        Some((&arg[..index], value))
    }

    /// Coerce `raw`, using the configured coercer for `id` if there is
    /// one. Never fails: errors are logged and `raw` is returned as a
    /// string.
    fn coerce(&self, id: &ArgId, raw: &str) -> Value {
        let custom = match self.config.coercer() {
            Some(lookup) => match lookup.coercer(id) {
                Ok(coercer) => coercer,
                Err(e) => {
                    warn!("failed to get coercer for argument {}: {}", id, e);

                    return Value::String(raw.into());
                }
            },
            None => None,
        };

        let coercer: &dyn Coerce = custom.unwrap_or(&DefaultCoercer);

        match coercer.coerce(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("failed to coerce value {:?} for argument {}: {}", raw, id, e);

                Value::String(raw.into())
            }
        }
    }

    /// Parse the configured tokens.
    pub fn parse(&self) -> ParsedArgs {
        let tokens = self.config.tokens();
        let mut parsed = ParsedArgs::default();

        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i].as_str();

            if let Some(prefix) = self.match_prefix(token) {
                let arg = &token[prefix.len()..];

                if let Some((name, value)) = self.split_delimited(arg) {
                    trace!("token[{}]: {:?}: named {:?} with inline value", i, token, name);

                    let value = self.coerce(&ArgId::from(name), value);
                    parsed.set(name, value);
                } else {
                    // Look ahead: the next token is this argument's value
                    // unless it is empty or itself a named argument.
                    let next = tokens
                        .get(i + 1)
                        .map(|t| t.as_str())
                        .filter(|t| !t.is_empty() && self.match_prefix(t).is_none());

                    match next {
                        Some(value) => {
                            trace!("token[{}]: {:?}: named {:?} with value {:?}", i, token, arg, value);

                            let value = self.coerce(&ArgId::from(arg), value);
                            parsed.set(arg, value);

                            // Consumed
                            i += 1;
                        }
                        None => {
                            trace!("token[{}]: {:?}: flag {:?}", i, token, arg);

                            parsed.set(arg, Value::Bool(true));
                        }
                    }
                }
            } else {
                trace!("token[{}]: {:?}: positional", i, token);

                let value = self.coerce(&ArgId::Index(i), token);

                if self.config.keep_positional_indices() {
                    parsed.set_positional(i, value);
                } else {
                    parsed.push_positional(value);
                }
            }

            i += 1;
        }

        debug!(
            "parsed {} tokens: {} named, {} positional",
            tokens.len(),
            parsed.named_len(),
            parsed.positional_values().count()
        );

        parsed
    }
}

/// Parse the program's own command-line arguments, unless `options`
/// specifies the tokens to parse.
///
/// This is the simplest interface to the parser.
pub fn parse(options: Options<'_>) -> ParsedArgs {
    Parser::new(Config::resolve(options, get_args)).parse()
}

/// Parse `tokens` (which must _not_ include the program name).
///
/// Any tokens specified in `options` are replaced by `tokens`.
pub fn parse_with_args<I>(options: Options<'_>, tokens: I) -> ParsedArgs
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    Parser::new(Config::resolve(options.tokens(tokens), Vec::new)).parse()
}
