// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to convert particular arguments yourself.
///
/// ```bash
/// $ cargo run --example custom-coercer -- --port 8080 --tag=007 first --level loud
/// ```
use argmap::{parse, Coercers, Error, Options, Result, Value};
use flexi_logger::Logger;

/// Only accept valid TCP ports.
fn port(raw: &str) -> Result<Value> {
    raw.parse::<u16>()
        .map(Value::from)
        .map_err(|e| Error::InvalidValue {
            value: raw.into(),
            reason: e.to_string(),
        })
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let mut coercers = Coercers::new();

    coercers.add("port", port);

    // Tags are never numbers, so keep any leading zeros.
    coercers.add("tag", |raw: &str| -> Result<Value> { Ok(Value::String(raw.into())) });

    // The first argument is upper cased if it is positional.
    coercers.add(0_usize, |raw: &str| -> Result<Value> {
        Ok(Value::String(raw.to_uppercase()))
    });

    coercers.add("level", |raw: &str| -> Result<Value> {
        match raw {
            "quiet" => Ok(Value::from(0)),
            "normal" => Ok(Value::from(1)),
            "loud" => Ok(Value::from(2)),
            _ => Err(Error::GenericError(format!("unknown level {:?}", raw))),
        }
    });

    let parsed = parse(Options::new().coercer(coercers));

    println!("{}", parsed);

    if let Some(port) = parsed.get("port").and_then(Value::as_u64) {
        println!("INFO: listening on port {}", port);
    }

    Ok(())
}
