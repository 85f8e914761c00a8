use std::ffi::OsString;

use thiserror::Error;

/// Shorthand for results carrying a parse [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// An error during argument parsing.
///
/// Every error is fatal to the parse call that raised it: no partial result
/// is returned.
///
/// This implements [`From`] for `String` and `&str`, for easy ad-hoc error
/// messages in application code.
#[derive(Error)]
#[non_exhaustive]
pub enum Error {
    /// A declarative option entry is malformed.
    #[error("The property 'options.{option}.{field}' {reason}")]
    InvalidSchema {
        /// The long name of the offending entry.
        option: String,
        /// The offending field, e.g. `short`.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// An option that is not in the schema was found (strict mode).
    #[error("Unknown option '{raw_name}'{}", unknown_hint(.raw_name, .allow_positionals))]
    UnknownOption {
        /// The option as it was typed, e.g. `--foo` or `-f`.
        raw_name: String,
        /// Whether positionals were allowed, which changes the hint.
        allow_positionals: bool,
    },

    /// A string option has no value (strict mode).
    #[error("Option '{}<value>' argument missing", short_and_long(.name, .short))]
    MissingOptionArgument {
        /// The long name of the option.
        name: String,
        /// Its short alias, if it has one.
        short: Option<char>,
    },

    /// A boolean option was given a value (strict mode).
    #[error("Option '{}' does not take an argument", short_and_long(.name, .short).trim_end())]
    UnexpectedOptionArgument {
        /// The long name of the option.
        name: String,
        /// Its short alias, if it has one.
        short: Option<char>,
    },

    /// A value taken from the following argument looks like an option
    /// (strict mode).
    #[error(
        "Option '{raw_name}' argument is ambiguous.\n\
         Did you forget to specify the option argument for '{raw_name}'?\n\
         To specify an option argument starting with a dash use {}.",
        ambiguity_example(.name, .raw_name)
    )]
    AmbiguousOptionValue {
        /// The long name of the option.
        name: String,
        /// The option as it was typed.
        raw_name: String,
        /// The value that was captured.
        value: String,
    },

    /// A positional argument was found when none are allowed.
    #[error("Unexpected argument '{0}'. This command does not take positional arguments")]
    UnexpectedPositional(String),

    /// An argument taken from the environment was not valid unicode.
    #[error("argument is invalid unicode: {0:?}")]
    NonUnicodeArgument(OsString),

    /// For custom error messages in application code.
    #[error("{0}")]
    Custom(Box<dyn std::error::Error + Send + Sync + 'static>),
}

fn unknown_hint(raw_name: &str, allow_positionals: &bool) -> String {
    if *allow_positionals {
        format!(
            ". To specify a positional argument starting with a '-', \
             place it at the end of the command after '--', as in '-- {:?}'",
            raw_name
        )
    } else {
        String::new()
    }
}

fn short_and_long(name: &str, short: &Option<char>) -> String {
    match short {
        Some(short) => format!("-{}, --{} ", short, name),
        None => format!("--{} ", name),
    }
}

fn ambiguity_example(name: &str, raw_name: &str) -> String {
    // Only show the short form if the user typed the short form.
    if raw_name.starts_with("--") {
        format!("'{}=-XYZ'", raw_name)
    } else {
        format!("'--{}=-XYZ' or '{}-XYZ'", name, raw_name)
    }
}

// This is printed when returning an error from main(), so defer to Display
impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Custom(msg.into())
    }
}

impl From<&'_ str> for Error {
    fn from(msg: &'_ str) -> Self {
        Error::Custom(msg.into())
    }
}

/// For [`OsString::into_string`].
impl From<OsString> for Error {
    fn from(arg: OsString) -> Self {
        Error::NonUnicodeArgument(arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_messages() {
        let err = Error::MissingOptionArgument {
            name: "output".into(),
            short: Some('o'),
        };
        assert_eq!(err.to_string(), "Option '-o, --output <value>' argument missing");

        let err = Error::MissingOptionArgument {
            name: "output".into(),
            short: None,
        };
        assert_eq!(err.to_string(), "Option '--output <value>' argument missing");

        let err = Error::UnexpectedOptionArgument {
            name: "verbose".into(),
            short: Some('v'),
        };
        assert_eq!(err.to_string(), "Option '-v, --verbose' does not take an argument");
    }

    #[test]
    fn test_unknown_hint() {
        let err = Error::UnknownOption {
            raw_name: "--foo".into(),
            allow_positionals: false,
        };
        assert_eq!(err.to_string(), "Unknown option '--foo'");

        let err = Error::UnknownOption {
            raw_name: "--foo".into(),
            allow_positionals: true,
        };
        assert!(err.to_string().ends_with("as in '-- \"--foo\"'"));
    }

    #[test]
    fn test_ambiguity_example() {
        let err = Error::AmbiguousOptionValue {
            name: "output".into(),
            raw_name: "-o".into(),
            value: "-x".into(),
        };
        assert!(err.to_string().contains("'--output=-XYZ' or '-o-XYZ'"));

        let err = Error::AmbiguousOptionValue {
            name: "output".into(),
            raw_name: "--output".into(),
            value: "-x".into(),
        };
        assert!(err.to_string().contains("use '--output=-XYZ'."));
    }

    #[test]
    fn test_custom() {
        let err = Error::from("missing FILE argument");
        assert_eq!(format!("{:?}", err), "missing FILE argument");
    }
}
