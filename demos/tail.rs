//! Prints the parsed arguments of a `tail`-like command, along with the raw
//! token stream. Run with `RUST_LOG=pargs=trace` to watch the scan.

#[derive(Debug)]
struct Args {
    follow: bool,
    number: u64,
    file: Option<std::path::PathBuf>,
}

fn parse_args() -> Result<Args, pargs::Error> {
    use pargs::prelude::*;

    let config = ParseConfig::new()
        .option("follow", OptionSpec::boolean().short('f'))
        .option("lines", OptionSpec::string().short('n'))
        .allow_positionals(true)
        .tokens(true);
    let parsed = pargs::parse_args(config)?;

    for token in parsed.tokens().unwrap_or_default() {
        eprintln!("{:?}", token);
    }

    let number = match parsed.get("lines") {
        Some(lines) => lines
            .parse()
            .map_err(|err| format!("cannot parse argument {:?}: {}", lines, err))?,
        None => 10,
    };
    let file = match parsed.positionals() {
        [] => None,
        [file] => Some(file.into()),
        [_, extra, ..] => return Err(format!("unexpected argument {:?}", extra).into()),
    };

    Ok(Args {
        follow: parsed.flag("follow"),
        number,
        file,
    })
}

fn main() -> Result<(), pargs::Error> {
    env_logger::init();
    let args = parse_args()?;
    println!("{:#?}", args);
    Ok(())
}
