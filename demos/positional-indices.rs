// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how positional arguments can keep their place on
/// the command-line, using `/` style options.
///
/// ```bash
/// $ cargo run --example positional-indices -- one /v two /out=file three
/// ```
use argmap::{parse, Options};
use flexi_logger::Logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_env_or_str("warn")?.start()?;

    let options = Options::new()
        .prefixes(vec!["/"])
        .delimiters(vec!["="])
        .keep_positional_indices();

    let parsed = parse(options);

    for (i, value) in parsed.positional().iter().enumerate() {
        match value {
            Some(value) => println!("INFO: argument {}: {}", i, value),
            None => println!("INFO: argument {}: (named)", i),
        }
    }

    for (name, value) in parsed.named() {
        println!("INFO: /{} = {}", name, value);
    }

    Ok(())
}
