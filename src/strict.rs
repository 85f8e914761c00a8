//! Checks applied to each option token in strict mode.

use crate::classify::looks_like_an_option;
use crate::schema::{OptionSchema, OptionType};
use crate::Error;

/// Reject unknown options, string options without a value and boolean
/// options with one.
pub(crate) fn check_option_usage(
    schema: &OptionSchema,
    allow_positionals: bool,
    name: &str,
    raw_name: &str,
    value: Option<&str>,
) -> Result<(), Error> {
    let kind = match schema.type_of(name) {
        Some(kind) => kind,
        None => {
            return Err(Error::UnknownOption {
                raw_name: raw_name.to_owned(),
                allow_positionals,
            })
        }
    };

    match (kind, value) {
        (OptionType::String, None) => Err(Error::MissingOptionArgument {
            name: name.to_owned(),
            short: schema.short_of(name),
        }),
        (OptionType::Boolean, Some(_)) => Err(Error::UnexpectedOptionArgument {
            name: name.to_owned(),
            short: schema.short_of(name),
        }),
        _ => Ok(()),
    }
}

/// Reject a value taken from the following argument if it looks like the
/// user meant it as another option.
pub(crate) fn check_option_like_value(
    name: &str,
    raw_name: &str,
    value: Option<&str>,
    inline_value: Option<bool>,
) -> Result<(), Error> {
    match (value, inline_value) {
        (Some(value), Some(false)) if looks_like_an_option(value) => {
            Err(Error::AmbiguousOptionValue {
                name: name.to_owned(),
                raw_name: raw_name.to_owned(),
                value: value.to_owned(),
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::OptionSpec;

    fn schema() -> OptionSchema {
        OptionSchema::new()
            .option("output", OptionSpec::string().short('o'))
            .option("verbose", OptionSpec::boolean())
    }

    #[test]
    fn test_usage() {
        let schema = schema();
        assert!(check_option_usage(&schema, false, "output", "-o", Some("x")).is_ok());
        assert!(check_option_usage(&schema, false, "verbose", "--verbose", None).is_ok());

        match check_option_usage(&schema, true, "nope", "--nope", None) {
            Err(Error::UnknownOption {
                raw_name,
                allow_positionals,
            }) => {
                assert_eq!(raw_name, "--nope");
                assert!(allow_positionals);
            }
            _ => panic!(),
        }

        match check_option_usage(&schema, false, "output", "-o", None) {
            Err(Error::MissingOptionArgument { name, short }) => {
                assert_eq!(name, "output");
                assert_eq!(short, Some('o'));
            }
            _ => panic!(),
        }

        match check_option_usage(&schema, false, "verbose", "--verbose", Some("")) {
            Err(Error::UnexpectedOptionArgument { name, short }) => {
                assert_eq!(name, "verbose");
                assert_eq!(short, None);
            }
            _ => panic!(),
        }
    }

    #[test]
    fn test_option_like_value() {
        assert!(check_option_like_value("output", "-o", Some("-x"), Some(true)).is_ok());
        assert!(check_option_like_value("output", "-o", Some("-"), Some(false)).is_ok());
        assert!(check_option_like_value("output", "-o", None, None).is_ok());
        match check_option_like_value("output", "--output", Some("--verbose"), Some(false)) {
            Err(Error::AmbiguousOptionValue { value, .. }) => assert_eq!(value, "--verbose"),
            _ => panic!(),
        }
    }
}
