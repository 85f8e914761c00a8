//! A strict command line parser driven by a declarative option schema.
//!
//! You describe the options you recognize, and the parser hands back a map
//! of option values and a list of positional arguments. Short options may be
//! grouped (`-rf`), a string option takes its value inline (`-fFILE`,
//! `--file=FILE`) or from the next argument, and `--` ends option parsing.
//!
//! In strict mode (the default) unknown options, missing or unexpected
//! values, and values that look like a forgotten option are errors.
//!
//! ## Example
//! ```
//! use pargs::prelude::*;
//!
//! fn main() -> Result<(), pargs::Error> {
//!     let parsed = ParseConfig::from_args(["-vo", "out.txt", "--", "-input"])
//!         .option("verbose", OptionSpec::boolean().short('v'))
//!         .option("output", OptionSpec::string().short('o'))
//!         .allow_positionals(true)
//!         .parse()?;
//!
//!     assert!(parsed.flag("verbose"));
//!     assert_eq!(parsed.get("output"), Some("out.txt"));
//!     assert_eq!(parsed.positionals(), ["-input"]);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use log::debug;

mod classify;
mod error;
mod schema;
mod strict;
mod tokens;
mod values;

pub use classify::{classify, looks_like_an_option, ArgKind};
pub use error::{Error, Result};
pub use schema::{OptionSchema, OptionSpec, OptionType, RawOptionSpec};
pub use tokens::{tokenize, Token};
pub use values::{OptionValue, Value, Values, RESERVED_KEY};

use strict::{check_option_like_value, check_option_usage};
use values::store_option;

/// Everything a single parse needs.
///
/// Built with [`ParseConfig::new`] (arguments come from the environment at
/// parse time) or [`ParseConfig::from_args`].
#[derive(Debug, Clone)]
pub struct ParseConfig {
    args: Option<Vec<String>>,
    options: OptionSchema,
    strict: bool,
    allow_positionals: Option<bool>,
    tokens: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            args: None,
            options: OptionSchema::new(),
            strict: true,
            allow_positionals: None,
            tokens: false,
        }
    }
}

impl ParseConfig {
    /// Create a config without arguments.
    ///
    /// [`parse`][ParseConfig::parse] then reads them from
    /// [`std::env::args_os`], skipping the executable name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config for an explicit argument list. This may be useful for
    /// testing.
    ///
    /// The executable name must not be included.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new().args(args)
    }

    /// Replace the argument list.
    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Declare one option.
    pub fn option(mut self, name: impl Into<String>, spec: OptionSpec) -> Self {
        self.options.insert(name, spec);
        self
    }

    /// Replace the whole schema.
    pub fn options(mut self, options: OptionSchema) -> Self {
        self.options = options;
        self
    }

    /// Enable or disable strict mode. Enabled by default.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Allow or forbid positional arguments.
    ///
    /// If never set, positionals are allowed exactly when strict mode is off.
    pub fn allow_positionals(mut self, allow: bool) -> Self {
        self.allow_positionals = Some(allow);
        self
    }

    /// Include the token sequence in the result.
    pub fn tokens(mut self, tokens: bool) -> Self {
        self.tokens = tokens;
        self
    }

    /// Parse, reading the environment if no arguments were given.
    pub fn parse(self) -> Result<ParsedArgs> {
        self.parse_with_source(env_args)
    }

    /// Parse, calling `source` for the arguments if none were given.
    ///
    /// `source` is not called at all when an argument list was supplied.
    pub fn parse_with_source<F>(self, source: F) -> Result<ParsedArgs>
    where
        F: FnOnce() -> Result<Vec<String>>,
    {
        let ParseConfig {
            args,
            options,
            strict,
            allow_positionals,
            tokens: return_tokens,
        } = self;
        let allow_positionals = allow_positionals.unwrap_or(!strict);
        let args = match args {
            Some(args) => args,
            None => source()?,
        };
        debug!(
            "parsing {} arguments (strict: {}, allow_positionals: {})",
            args.len(),
            strict,
            allow_positionals
        );

        let tokens = tokenize(args, &options);
        let kept_tokens = if return_tokens {
            Some(tokens.clone())
        } else {
            None
        };

        let mut values = Values::new();
        let mut positionals = Vec::new();
        for token in tokens {
            match token {
                Token::Option {
                    name,
                    raw_name,
                    value,
                    inline_value,
                    ..
                } => {
                    if strict {
                        check_option_usage(
                            &options,
                            allow_positionals,
                            &name,
                            &raw_name,
                            value.as_deref(),
                        )?;
                        check_option_like_value(&name, &raw_name, value.as_deref(), inline_value)?;
                    }
                    store_option(&mut values, &options, name, value);
                }
                Token::Positional { value, .. } => {
                    if !allow_positionals {
                        return Err(Error::UnexpectedPositional(value));
                    }
                    positionals.push(value);
                }
                Token::OptionTerminator { .. } => {}
            }
        }

        debug!(
            "parsed {} options and {} positionals",
            values.len(),
            positionals.len()
        );
        Ok(ParsedArgs {
            values,
            positionals,
            tokens: kept_tokens,
        })
    }
}

/// Parse according to `config`. Shorthand for [`ParseConfig::parse`].
pub fn parse_args(config: ParseConfig) -> Result<ParsedArgs> {
    config.parse()
}

/// The default argument source: the process arguments minus the executable
/// name.
fn env_args() -> Result<Vec<String>> {
    std::env::args_os()
        .skip(1)
        .map(|arg| arg.into_string().map_err(Error::from))
        .collect()
}

/// The outcome of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    values: Values,
    positionals: Vec<String>,
    tokens: Option<Vec<Token>>,
}

impl ParsedArgs {
    /// Option values keyed by long name.
    pub fn values(&self) -> &Values {
        &self.values
    }

    /// Positional arguments in order, including those after `--`.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// The token sequence, if it was requested with
    /// [`ParseConfig::tokens`].
    pub fn tokens(&self) -> Option<&[Token]> {
        self.tokens.as_deref()
    }

    /// Whether an option was seen at all.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The last string value of an option.
    ///
    /// Returns `None` if the option is absent or its last occurrence had no
    /// value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name)?.last()?.as_str()
    }

    /// Every value of an option, in order.
    pub fn get_all(&self, name: &str) -> Option<&[Value]> {
        self.values.get(name).map(OptionValue::as_slice)
    }

    /// Whether an option's last occurrence carried no value.
    pub fn flag(&self, name: &str) -> bool {
        self.values
            .get(name)
            .and_then(OptionValue::last)
            .map_or(false, Value::is_true)
    }

    /// Take the result apart.
    pub fn into_parts(self) -> (Values, Vec<String>, Option<Vec<Token>>) {
        (self.values, self.positionals, self.tokens)
    }
}

/// A small prelude for declaring and parsing options.
///
/// ```
/// use pargs::prelude::*;
///
/// let parsed = ParseConfig::from_args(["--name=pargs"])
///     .option("name", OptionSpec::string())
///     .parse()
///     .unwrap();
/// assert_eq!(parsed.get("name"), Some("pargs"));
/// ```
pub mod prelude {
    pub use super::{OptionSchema, OptionSpec, OptionValue, ParseConfig, ParsedArgs, Value};
}
