// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::ffi::OsString;
use std::rc::Rc;

use crate::coerce::ValueCoercer;

/// Prefixes that mark a token as a named argument, in the order they are
/// tried.
pub const DEFAULT_PREFIXES: &[&str] = &["--", "-"];

/// Strings that separate a named argument from an inline value.
pub const DEFAULT_DELIMITERS: &[&str] = &[":", "="];

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Note
///
/// Arguments are returned as OS strings: any that are not valid UTF-8 are
/// dropped when the [Config] is resolved.
///
/// This isn't usually required: just call [parse()](crate::parse).
pub fn get_args() -> Vec<OsString> {
    env::args_os().skip(1).collect()
}

/// Keep only the entries that are valid UTF-8 strings.
fn strings_only<I>(entries: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    entries
        .into_iter()
        .filter_map(|entry| entry.into().into_string().ok())
        .collect()
}

fn to_strings(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

/// Caller supplied parsing options.
///
/// Every setting is optional: anything not specified takes the default
/// value when the options are resolved into a [Config].
#[derive(Clone, Debug, Default)]
pub struct Options<'a> {
    tokens: Option<Vec<String>>,
    prefixes: Option<Vec<String>>,
    delimiters: Option<Vec<String>>,
    keep_positional_indices: bool,
    coercer: Option<Rc<dyn ValueCoercer + 'a>>,
}

impl<'a> Options<'a> {
    /// Create a new options object.
    pub fn new() -> Self {
        Options::default()
    }

    /// Specify the tokens to parse (without the program name).
    ///
    /// Tokens that are not valid UTF-8 are silently ignored.
    pub fn tokens<I>(self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        Options {
            tokens: Some(strings_only(tokens)),
            ..self
        }
    }

    /// Specify the prefixes that mark a named argument (default:
    /// [DEFAULT_PREFIXES]).
    ///
    /// Prefixes are tried in the order given and the first one that
    /// matches is used, so `["-", "--"]` would leave `--verbose` named
    /// `-verbose`.
    pub fn prefixes<I>(self, prefixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        Options {
            prefixes: Some(strings_only(prefixes)),
            ..self
        }
    }

    /// Specify the strings that separate a named argument from its value
    /// (default: [DEFAULT_DELIMITERS]). Empty delimiters are ignored.
    pub fn delimiters<I>(self, delimiters: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        Options {
            delimiters: Some(strings_only(delimiters)),
            ..self
        }
    }

    /// Store each positional argument at its index in the token list
    /// rather than appending it.
    pub fn keep_positional_indices(self) -> Self {
        Options {
            keep_positional_indices: true,
            ..self
        }
    }

    /// Specify the [ValueCoercer] used to select a coercer per argument.
    pub fn coercer<C>(self, coercer: C) -> Self
    where
        C: ValueCoercer + 'a,
    {
        Options {
            coercer: Some(Rc::new(coercer)),
            ..self
        }
    }
}

/// A fully resolved, immutable parsing configuration.
#[derive(Clone, Debug)]
pub struct Config<'a> {
    tokens: Vec<String>,
    prefixes: Vec<String>,
    delimiters: Vec<String>,
    keep_positional_indices: bool,
    coercer: Option<Rc<dyn ValueCoercer + 'a>>,
}

impl<'a> Config<'a> {
    /// Resolve `options`, filling in defaults for anything unset.
    ///
    /// `default_tokens` is only called if `options` does not specify any
    /// tokens; pass [get_args] to parse the program's own arguments.
    pub fn resolve<F>(options: Options<'a>, default_tokens: F) -> Self
    where
        F: FnOnce() -> Vec<OsString>,
    {
        let tokens = match options.tokens {
            Some(tokens) => tokens,
            None => strings_only(default_tokens()),
        };

        Config {
            tokens,
            prefixes: options
                .prefixes
                .unwrap_or_else(|| to_strings(DEFAULT_PREFIXES)),
            delimiters: options
                .delimiters
                .unwrap_or_else(|| to_strings(DEFAULT_DELIMITERS)),
            keep_positional_indices: options.keep_positional_indices,
            coercer: options.coercer,
        }
    }

    /// The tokens to parse.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The named argument prefixes, in match order.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// The name/value delimiters, in declaration order.
    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Whether positional arguments keep their token index.
    pub fn keep_positional_indices(&self) -> bool {
        self.keep_positional_indices
    }

    /// The per-argument coercer selector, if any.
    pub fn coercer(&self) -> Option<&(dyn ValueCoercer + 'a)> {
        self.coercer.as_deref()
    }
}
