// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Simple crate for parsing command-line arguments into a map.
//!
//! If you want lots of extra features (help text, subcommands, required
//! options), you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Details](#details)
//! * [Value coercion](#value-coercion)
//! * [Custom coercion](#custom-coercion)
//! * [Logging](#logging)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! This crate turns a list of command-line arguments into a [ParsedArgs]
//! value holding:
//!
//! - The positional arguments, in order.
//! - One entry per named argument, holding its value.
//!
//! Nothing needs to be registered up front: any argument that starts with
//! one of the configured prefixes (`--` or `-` by default) is a named
//! argument. Values are converted into numbers, booleans or JSON where
//! they look like one.
//!
//! # Quickstart
//!
//! ```rust
//! use argmap::{parse_with_args, Options};
//! use serde_json::json;
//!
//! let parsed = parse_with_args(
//!     Options::default(),
//!     vec!["-v", "--level=3", "--name", "the end", "input.txt"],
//! );
//!
//! assert_eq!(parsed.get("v"), Some(&json!(true)));
//! assert_eq!(parsed.get("level"), Some(&json!(3)));
//! assert_eq!(parsed.get("name"), Some(&json!("the end")));
//!
//! let positional: Vec<_> = parsed.positional_values().collect();
//! assert_eq!(positional, vec![&json!("input.txt")]);
//! ```
//!
//! To parse the program's own arguments, call [parse()]:
//!
//! ```rust,no_run
//! let parsed = argmap::parse(argmap::Options::default());
//!
//! println!("{}", parsed);
//! ```
//!
//! # Details
//!
//! Arguments are handled strictly left to right:
//!
//! 1. If the argument starts with one of the prefixes (tried in the
//!    order given, the first that matches is used) it is a named argument
//!    and the prefix is removed.
//!
//!    1. If the rest contains a delimiter (`:` or `=` by default) with
//!       something after it, the part before the delimiter is the name
//!       and the part after it the value (`--level=3`, `-mode:fast`).
//!       If more than one delimiter is present, the one nearest the
//!       start wins (`-a=1:2` sets `a` to `"1:2"`).
//!    1. Otherwise, if the next argument exists, is not empty and is not
//!       itself a named argument, it becomes the value and is skipped
//!       (`--name value`).
//!    1. Otherwise the argument is a flag and its value is `true`.
//!
//! 1. Any other argument is positional.
//!
//! If a name is given more than once, the last value wins.
//!
//! ## Positional indices
//!
//! By default positional arguments are stored densely. With
//! [Options::keep_positional_indices()], each positional argument is
//! stored at its index in the argument list and the slots used by named
//! arguments are left empty (`None`):
//!
//! ```rust
//! use argmap::{parse_with_args, Options};
//! use serde_json::json;
//!
//! let options = Options::new().keep_positional_indices();
//! let parsed = parse_with_args(options, vec!["--mode=fast", "a", "b"]);
//!
//! assert_eq!(parsed.positional(), &[None, Some(json!("a")), Some(json!("b"))]);
//! ```
//!
//! ## Prefixes and delimiters
//!
//! ```rust
//! use argmap::{parse_with_args, Options};
//! use serde_json::json;
//!
//! let options = Options::new().prefixes(vec!["/"]).delimiters(vec!["="]);
//! let parsed = parse_with_args(options, vec!["/out=a.txt", "-x"]);
//!
//! assert_eq!(parsed.get("out"), Some(&json!("a.txt")));
//! assert_eq!(parsed.positional(), &[Some(json!("-x"))]);
//! ```
//!
//! # Value coercion
//!
//! Unless a [custom coercer](#custom-coercion) is specified, values are
//! converted by [coerce()]:
//!
//! | Value | Result |
//! |-|-|
//! | `123`, `-1.5`, `.5e3`, `0x1f` | number |
//! | `true`, `FALSE` | boolean |
//! | `{"a":1}`, `[1,2]` | JSON object / array |
//! | anything else | string |
//!
//! If a value starting with `{` or `[` is not valid JSON, a warning is
//! logged and the string is kept.
//!
//! # Custom coercion
//!
//! Register a [Coerce] strategy per argument name or positional index in
//! a [Coercers] registry (or implement [ValueCoercer] yourself):
//!
//! ```rust
//! use argmap::{parse_with_args, Coercers, Options, Result};
//! use serde_json::{json, Value};
//!
//! let mut coercers = Coercers::new();
//!
//! // Keep "id" values as strings.
//! coercers.add("id", |raw: &str| -> Result<Value> { Ok(Value::String(raw.into())) });
//!
//! let options = Options::new().coercer(coercers);
//! let parsed = parse_with_args(options, vec!["--id=007", "--count=007"]);
//!
//! assert_eq!(parsed.get("id"), Some(&json!("007")));
//! assert_eq!(parsed.get("count"), Some(&json!(7)));
//! ```
//!
//! If a coercer fails, the raw string is stored instead.
//!
//! # Logging
//!
//! Coercion failures are reported as warnings through the
//! [`log`](https://crates.io/crates/log) facade; parsing itself never
//! fails. Install any logger to see them.
//!
//! # Limitations
//!
//! - A value can never start with a prefix when it is given as a
//!   separate argument: `--offset -5` is two flags. Use `--offset=-5`.
//! - Named arguments have at most one value.
//! - There is no help generation, no required arguments and no
//!   subcommands.

mod coerce;
mod config;
mod error;
mod parser;

pub use error::{Error, Result};

pub use coerce::{coerce, coerce_value, ArgId, Coerce, Coercers, DefaultCoercer, ValueCoercer};
pub use config::{get_args, Config, Options, DEFAULT_DELIMITERS, DEFAULT_PREFIXES};
pub use parser::{parse, parse_with_args, ParsedArgs, Parser, POSITIONAL_KEY};

pub use serde_json::{Map, Value};
