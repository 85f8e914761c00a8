//! Classification of a single raw argument.
//!
//! The shapes are tried in a fixed order and the first match wins:
//! terminator, lone short, short cluster, short with inline value,
//! lone long, long with inline value, positional.

use crate::schema::OptionSchema;

/// The shape of one raw argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind<'a> {
    /// Exactly `--`.
    OptionTerminator,
    /// `-f`.
    LoneShort(char),
    /// `-rf`, where the first letter does not resolve to a string option.
    ShortCluster,
    /// `-fVALUE`, where the first letter resolves to a string option.
    ShortWithValue {
        /// The option letter.
        short: char,
        /// Everything after the letter.
        value: &'a str,
    },
    /// `--foo`. Carries the name without dashes.
    LoneLong(&'a str),
    /// `--foo=bar`. The value may itself contain `=`.
    LongWithValue {
        /// The name without dashes.
        name: &'a str,
        /// Everything after the separating `=`.
        value: &'a str,
    },
    /// Anything else, including `-` and the empty string.
    Positional,
}

/// Classify `arg`, consulting `schema` only to tell clusters from short
/// options with an inline value.
pub fn classify<'a>(arg: &'a str, schema: &OptionSchema) -> ArgKind<'a> {
    if arg == "--" {
        return ArgKind::OptionTerminator;
    }

    if let Some((short, rest)) = split_short(arg) {
        if rest.is_empty() {
            return ArgKind::LoneShort(short);
        }
        let long = schema.resolve_long_name(short);
        return if schema.is_string(&long) {
            ArgKind::ShortWithValue { short, value: rest }
        } else {
            ArgKind::ShortCluster
        };
    }

    if let Some(body) = arg.strip_prefix("--") {
        // `body` is non-empty here, since `--` was handled above.
        return match split_long(body) {
            Some((name, value)) => ArgKind::LongWithValue { name, value },
            None => ArgKind::LoneLong(body),
        };
    }

    ArgKind::Positional
}

/// Whether a captured value looks like the user forgot the option's value
/// and typed another option instead.
///
/// This never affects parsing, only strict-mode checks.
pub fn looks_like_an_option(value: &str) -> bool {
    value.starts_with('-') && value.chars().nth(1).is_some()
}

/// Split `-xREST` into `('x', "REST")`. The second character must exist and
/// must not be a dash.
fn split_short(arg: &str) -> Option<(char, &str)> {
    let mut chars = arg.strip_prefix('-')?.chars();
    match chars.next() {
        Some(ch) if ch != '-' => Some((ch, chars.as_str())),
        _ => None,
    }
}

/// Split a long option body at the first `=` that is not its first
/// character. `--=x` is a lone option named `=x`.
fn split_long(body: &str) -> Option<(&str, &str)> {
    let first = body.chars().next()?.len_utf8();
    let eq = first + body[first..].find('=')?;
    Some((&body[..eq], &body[eq + 1..]))
}
