//! The scanning pass that turns raw arguments into tokens.

use std::collections::VecDeque;

use log::trace;

use crate::classify::{classify, ArgKind};
use crate::schema::OptionSchema;

/// One unit of the parsed command line.
///
/// `index` is the position of the originating argument in the raw input.
/// All members of an expanded short option cluster share the index of the
/// cluster, and a value taken from the following argument uses up that
/// argument's index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An option, with or without a value.
    Option {
        /// The long name, or the bare letter for an undeclared short option.
        name: String,
        /// The option as typed, without any inline value: `-f`, `--foo`.
        raw_name: String,
        /// Position in the raw input.
        index: usize,
        /// The value, if one was captured.
        value: Option<String>,
        /// `Some(true)` if the value was part of the same argument
        /// (`-fVALUE`, `--foo=VALUE`), `Some(false)` if it was the following
        /// argument, `None` if there is no value.
        inline_value: Option<bool>,
    },
    /// A free-standing argument.
    Positional {
        /// Position in the raw input.
        index: usize,
        /// The argument.
        value: String,
    },
    /// The first `--`.
    OptionTerminator {
        /// Position in the raw input.
        index: usize,
    },
}

impl Token {
    /// Position of the originating argument in the raw input.
    pub fn index(&self) -> usize {
        match self {
            Token::Option { index, .. }
            | Token::Positional { index, .. }
            | Token::OptionTerminator { index } => *index,
        }
    }
}

/// Scan `args` from left to right and produce tokens.
///
/// This never fails and never second-guesses: a string option takes the next
/// argument as its value whatever it looks like, so `--port --verbose` gives
/// `port` the value `--verbose`. Strict mode flags such cases afterwards.
pub fn tokenize<I>(args: I, schema: &OptionSchema) -> Vec<Token>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut remaining: VecDeque<String> = args.into_iter().map(Into::into).collect();
    let mut tokens = Vec::with_capacity(remaining.len());

    // The index of the argument being processed, and of the next fresh one.
    let mut index = 0;
    let mut next_index = 0;
    // Synthetic arguments from an expanded cluster still in `remaining`.
    // They reuse the cluster's index.
    let mut group_count = 0;

    while let Some(arg) = remaining.pop_front() {
        if group_count > 0 {
            group_count -= 1;
        } else {
            index = next_index;
            next_index += 1;
        }

        let token = match classify(&arg, schema) {
            ArgKind::OptionTerminator => {
                tokens.push(Token::OptionTerminator { index });
                for value in remaining.drain(..) {
                    tokens.push(Token::Positional {
                        index: next_index,
                        value,
                    });
                    next_index += 1;
                }
                break;
            }
            ArgKind::LoneShort(short) => {
                let name = schema.resolve_long_name(short).into_owned();
                let value = take_value(&mut remaining, schema, &name);
                if value.is_some() {
                    next_index += 1;
                }
                option_token(name, format!("-{}", short), index, value, false)
            }
            ArgKind::ShortCluster => {
                let expanded = expand_cluster(&arg, schema);
                trace!("expanded {:?} into {:?}", arg, expanded);
                group_count = expanded.len();
                for synthetic in expanded.into_iter().rev() {
                    remaining.push_front(synthetic);
                }
                continue;
            }
            ArgKind::ShortWithValue { short, value } => {
                let name = schema.resolve_long_name(short).into_owned();
                option_token(
                    name,
                    format!("-{}", short),
                    index,
                    Some(value.to_owned()),
                    true,
                )
            }
            ArgKind::LoneLong(name) => {
                let value = take_value(&mut remaining, schema, name);
                if value.is_some() {
                    next_index += 1;
                }
                option_token(name.to_owned(), arg.clone(), index, value, false)
            }
            ArgKind::LongWithValue { name, value } => option_token(
                name.to_owned(),
                format!("--{}", name),
                index,
                Some(value.to_owned()),
                true,
            ),
            ArgKind::Positional => Token::Positional { index, value: arg },
        };

        trace!("{:?}", token);
        tokens.push(token);
    }

    tokens
}

/// A string option greedily takes the next argument, whatever its shape.
fn take_value(
    remaining: &mut VecDeque<String>,
    schema: &OptionSchema,
    name: &str,
) -> Option<String> {
    if schema.is_string(name) {
        remaining.pop_front()
    } else {
        None
    }
}

fn option_token(
    name: String,
    raw_name: String,
    index: usize,
    value: Option<String>,
    inline: bool,
) -> Token {
    let inline_value = value.as_ref().map(|_| inline);
    Token::Option {
        name,
        raw_name,
        index,
        value,
        inline_value,
    }
}

/// Split `-abc` into `-a`, `-b`, `-c`.
///
/// A string option that is not the last letter takes the rest of the cluster
/// as its inline value, so `-bfFILE` becomes `-b`, `-fFILE`. A string option
/// in last position is left alone and takes the following argument when its
/// synthetic `-f` is scanned.
fn expand_cluster(arg: &str, schema: &OptionSchema) -> Vec<String> {
    let letters = &arg[1..];
    let mut expanded = Vec::new();
    for (pos, short) in letters.char_indices() {
        let last = pos + short.len_utf8() == letters.len();
        let long = schema.resolve_long_name(short);
        if !schema.is_string(&long) || last {
            expanded.push(format!("-{}", short));
        } else {
            expanded.push(format!("-{}", &letters[pos..]));
            break;
        }
    }
    expanded
}
