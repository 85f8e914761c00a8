use pargs::prelude::*;

struct Args {
    thing: String,
    number: u32,
    shout: bool,
}

fn parse_args() -> Result<Args, pargs::Error> {
    let parsed = ParseConfig::new()
        .option("number", OptionSpec::string().short('n'))
        .option("shout", OptionSpec::boolean())
        .option("help", OptionSpec::boolean().short('h'))
        .allow_positionals(true)
        .parse()?;

    if parsed.flag("help") {
        println!("Usage: hello [-n|--number=NUM] [--shout] THING");
        std::process::exit(0);
    }

    let number = match parsed.get("number") {
        Some(number) => number
            .parse()
            .map_err(|err| format!("cannot parse argument {:?}: {}", number, err))?,
        None => 1,
    };
    let thing = match parsed.positionals() {
        [thing] => thing.clone(),
        [] => return Err("missing argument THING".into()),
        [_, extra, ..] => return Err(format!("unexpected argument {:?}", extra).into()),
    };

    Ok(Args {
        thing,
        number,
        shout: parsed.flag("shout"),
    })
}

fn main() -> Result<(), pargs::Error> {
    env_logger::init();
    let args = parse_args()?;
    let mut message = format!("Hello {}", args.thing);
    if args.shout {
        message = message.to_uppercase();
    }
    for _ in 0..args.number {
        println!("{}", message);
    }
    Ok(())
}
