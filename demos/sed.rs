//! A `sed`-like command line. The option schema is loaded from JSON rather
//! than declared in code.

use std::path::PathBuf;

use pargs::prelude::*;

const SCHEMA: &str = r#"{
    "expression": { "type": "string", "short": "e", "multiple": true },
    "in-place": { "type": "boolean", "short": "i" },
    "line-length": { "type": "string", "short": "l" },
    "sandbox": { "type": "boolean" }
}"#;

#[derive(Default, Debug)]
struct Args {
    scripts: Vec<String>,
    files: Vec<PathBuf>,
    in_place: bool,
    line_length: Option<u32>,
    sandbox: bool,
}

fn parse_args() -> Result<Args, pargs::Error> {
    let schema: OptionSchema =
        serde_json::from_str(SCHEMA).map_err(|err| pargs::Error::Custom(err.into()))?;
    let parsed = ParseConfig::new()
        .options(schema)
        .allow_positionals(true)
        .parse()?;

    let mut args = Args {
        in_place: parsed.flag("in-place"),
        sandbox: parsed.flag("sandbox"),
        ..Args::default()
    };
    if let Some(scripts) = parsed.get_all("expression") {
        args.scripts = scripts
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect();
    }
    if let Some(length) = parsed.get("line-length") {
        args.line_length = Some(
            length
                .parse()
                .map_err(|err| format!("cannot parse argument {:?}: {}", length, err))?,
        );
    }

    let mut scripts_or_files = parsed.positionals().iter();
    if args.scripts.is_empty() {
        let script = scripts_or_files.next().ok_or("missing script")?;
        args.scripts.push(script.clone());
    }
    args.files.extend(scripts_or_files.map(PathBuf::from));

    Ok(args)
}

fn main() -> Result<(), pargs::Error> {
    env_logger::init();
    println!("{:#?}", parse_args()?);
    Ok(())
}
