#![no_main]
use libfuzzer_sys::fuzz_target;
use pargs::{OptionSchema, OptionSpec, OptionValue, ParseConfig, Token, RESERVED_KEY};

// We check some basic invariants but mainly make sure that it
// doesn't panic or hang.
fuzz_target!(|data: &[u8]| {
    let mut data = data;
    let mut decisions = 0;
    if !data.is_empty() {
        // Decide strictness and whether positionals are allowed
        decisions = data[0];
        data = &data[1..];
    }
    let args: Vec<String> = data
        // Arguments can't contain null bytes (on Unix) so it's a
        // reasonable separator
        .split(|&x| x == b'\0')
        .map(|arg| String::from_utf8_lossy(arg).into_owned())
        .collect();

    // A fixed schema with a duplicated alias and a multiple option.
    let schema = OptionSchema::new()
        .option("all", OptionSpec::boolean().short('a').multiple(true))
        .option("file", OptionSpec::string().short('f'))
        .option("again", OptionSpec::string().short('a'))
        .option("tag", OptionSpec::string().short('t').multiple(true));

    let tokens = pargs::tokenize(&args, &schema);
    assert_eq!(tokens, pargs::tokenize(&args, &schema));
    assert!(tokens.windows(2).all(|w| w[0].index() <= w[1].index()));
    assert!(
        tokens
            .iter()
            .filter(|tok| matches!(tok, Token::OptionTerminator { .. }))
            .count()
            <= 1
    );

    let result = ParseConfig::from_args(args.iter())
        .options(schema.clone())
        .strict(decisions & 1 == 1)
        .allow_positionals(decisions & 2 == 2)
        .tokens(true)
        .parse();
    let parsed = match result {
        Ok(parsed) => parsed,
        Err(_) => {
            // Permissive mode only fails on positionals.
            assert!(decisions & 1 == 1 || decisions & 2 == 0);
            return;
        }
    };
    assert_eq!(parsed.tokens(), Some(tokens.as_slice()));
    assert!(!parsed.contains(RESERVED_KEY));
    for (name, value) in parsed.values() {
        let seen = tokens
            .iter()
            .filter(|tok| matches!(tok, Token::Option { name: n, .. } if n == name))
            .count();
        match value {
            OptionValue::Multiple(list) => assert_eq!(list.len(), seen),
            OptionValue::Single(_) => assert!(seen > 0 && !schema.is_multiple(name)),
        }
    }
});
