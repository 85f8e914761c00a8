//! The declarative description of recognized options, and lookups over it.
//!
//! A schema maps long option names to an [`OptionSpec`]. Declaration order
//! matters: when two entries share a short alias the first one wins.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::Error;

/// Whether an option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// Takes a value, either inline (`--foo=bar`, `-fbar`) or from the
    /// following argument.
    String,
    /// A flag. Stored as `true` when present.
    Boolean,
}

/// How a single long option behaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    kind: OptionType,
    short: Option<char>,
    multiple: bool,
}

impl OptionSpec {
    /// An option of the given type with no short alias.
    pub fn new(kind: OptionType) -> Self {
        OptionSpec {
            kind,
            short: None,
            multiple: false,
        }
    }

    /// A value-taking option.
    pub fn string() -> Self {
        Self::new(OptionType::String)
    }

    /// A flag.
    pub fn boolean() -> Self {
        Self::new(OptionType::Boolean)
    }

    /// Add a single-character alias, usable as `-c`.
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Collect every occurrence instead of keeping only the last one.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// The declared type.
    pub fn kind(&self) -> OptionType {
        self.kind
    }

    /// The short alias, if any.
    pub fn short_alias(&self) -> Option<char> {
        self.short
    }

    /// Whether occurrences accumulate.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }
}

/// An option entry as it appears in a declarative source, before checking.
///
/// Converting a map of these into an [`OptionSchema`] fails with
/// [`Error::InvalidSchema`] if an entry is malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct RawOptionSpec {
    /// `"string"` or `"boolean"`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: Option<String>,
    /// Must be exactly one character if present.
    pub short: Option<String>,
    /// Defaults to false.
    pub multiple: Option<bool>,
}

impl RawOptionSpec {
    fn check(self, name: &str) -> Result<OptionSpec, Error> {
        let invalid = |field, reason: String| Error::InvalidSchema {
            option: name.to_owned(),
            field,
            reason,
        };

        let kind = match self.kind.as_deref() {
            Some("string") => OptionType::String,
            Some("boolean") => OptionType::Boolean,
            Some(other) => {
                return Err(invalid(
                    "type",
                    format!("must be one of 'string' or 'boolean'. Received {:?}", other),
                ))
            }
            None => {
                return Err(invalid(
                    "type",
                    "must be one of 'string' or 'boolean'. Received nothing".to_owned(),
                ))
            }
        };

        let short = match self.short {
            None => None,
            Some(short) => {
                let mut chars = short.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(ch),
                    _ => {
                        return Err(invalid(
                            "short",
                            format!("must be a single character. Received {:?}", short),
                        ))
                    }
                }
            }
        };

        Ok(OptionSpec {
            kind,
            short,
            multiple: self.multiple.unwrap_or(false),
        })
    }
}

/// The set of recognized options, keyed by long name.
///
/// This is read-only while parsing; all lookups are pure and never fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "IndexMap<String, RawOptionSpec>")
)]
pub struct OptionSchema {
    options: IndexMap<String, OptionSpec>,
}

impl OptionSchema {
    /// An empty schema. Every option is unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option. Re-declaring a name replaces its spec but keeps
    /// its original position.
    pub fn option(mut self, name: impl Into<String>, spec: OptionSpec) -> Self {
        self.insert(name, spec);
        self
    }

    /// Declare an option in place.
    pub fn insert(&mut self, name: impl Into<String>, spec: OptionSpec) {
        self.options.insert(name.into(), spec);
    }

    /// Look up the spec for a long name.
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.get(name)
    }

    /// Iterate over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionSpec)> {
        self.options.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether no options are declared.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Map a short alias to its long name.
    ///
    /// The first entry in declaration order with a matching alias wins. If
    /// no entry matches, the letter itself is used as the long name, so an
    /// undeclared `-f` surfaces as `f`.
    pub fn resolve_long_name(&self, short: char) -> Cow<'_, str> {
        self.options
            .iter()
            .find(|(_, spec)| spec.short == Some(short))
            .map(|(name, _)| Cow::Borrowed(name.as_str()))
            .unwrap_or_else(|| Cow::Owned(short.to_string()))
    }

    /// The declared type of a long option, if it is declared.
    pub fn type_of(&self, name: &str) -> Option<OptionType> {
        self.get(name).map(OptionSpec::kind)
    }

    /// Whether a long option is declared with `multiple`.
    pub fn is_multiple(&self, name: &str) -> bool {
        self.get(name).map_or(false, OptionSpec::is_multiple)
    }

    /// Whether a long option is declared at all.
    pub fn is_known(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// The short alias declared for a long option.
    pub fn short_of(&self, name: &str) -> Option<char> {
        self.get(name).and_then(OptionSpec::short_alias)
    }

    pub(crate) fn is_string(&self, name: &str) -> bool {
        self.type_of(name) == Some(OptionType::String)
    }
}

impl<S: Into<String>> FromIterator<(S, OptionSpec)> for OptionSchema {
    fn from_iter<I: IntoIterator<Item = (S, OptionSpec)>>(iter: I) -> Self {
        OptionSchema {
            options: iter
                .into_iter()
                .map(|(name, spec)| (name.into(), spec))
                .collect(),
        }
    }
}

impl TryFrom<IndexMap<String, RawOptionSpec>> for OptionSchema {
    type Error = Error;

    fn try_from(raw: IndexMap<String, RawOptionSpec>) -> Result<Self, Error> {
        let mut options = IndexMap::with_capacity(raw.len());
        for (name, spec) in raw {
            let spec = spec.check(&name)?;
            options.insert(name, spec);
        }
        Ok(OptionSchema { options })
    }
}
