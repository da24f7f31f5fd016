// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// Print the program's own arguments as JSON.
///
/// Try:
///
/// ```bash
/// $ cargo run --example debug -- -test -testEquals=equals_pass p-index-4 \
///     -testColon:colon_pass p-index-7 -testSpace space_pass --double-hyphen \
///     --number:123.5 -boolean:true --json '{"array":[],"object":{}}'
/// ```
use argmap::{parse, Options};
use flexi_logger::Logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Coercion warnings are shown unless RUST_LOG says otherwise.
    let _logger = Logger::try_with_env_or_str("warn")?.start()?;

    let parsed = parse(Options::default());

    println!("{}", parsed);

    Ok(())
}
