//! Script membership tests and the ordered language registry
//!
//! A language is identified purely by the script its letters belong to.
//! The registry keeps the membership tests in registration order, and the
//! index of the first test that accepts a character is that character's
//! language. Order is a configuration choice: with overlapping tables the
//! earlier registration wins.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::ops::RangeInclusive;

/// Scripts commonly registered, in the order `subtok list scripts` shows them
pub const COMMON_SCRIPTS: &[&str] = &[
    "Latin",
    "Cyrillic",
    "Greek",
    "Armenian",
    "Georgian",
    "Hebrew",
    "Arabic",
    "Devanagari",
    "Bengali",
    "Tamil",
    "Thai",
    "Han",
    "Hiragana",
    "Katakana",
    "Hangul",
];

/// Membership test for one registered language
pub trait ScriptMembership: Send + Sync {
    /// Check if the character belongs to this script
    fn contains(&self, ch: char) -> bool;

    /// Display name of the script
    fn name(&self) -> &str;
}

/// Membership in a named Unicode script (`Script=` property)
pub struct UnicodeScript {
    name: String,
    pattern: Regex,
}

impl UnicodeScript {
    /// Create a membership test for the named Unicode script
    ///
    /// Names follow Unicode's loose matching, so `"latin"` and `"Latin"`
    /// are the same script.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let well_formed = !name.is_empty()
            && name
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | ' ' | '-'));
        if !well_formed {
            return Err(Error::UnknownScript(name));
        }

        let pattern = Regex::new(&format!(r"\A\p{{Script={name}}}\z"))
            .map_err(|_| Error::UnknownScript(name.clone()))?;

        Ok(Self { name, pattern })
    }
}

impl ScriptMembership for UnicodeScript {
    fn contains(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.pattern.is_match(ch.encode_utf8(&mut buf))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for UnicodeScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnicodeScript")
            .field("name", &self.name)
            .finish()
    }
}

/// Membership in an explicit table of inclusive code point ranges
#[derive(Debug, Clone)]
pub struct CharRanges {
    name: String,
    ranges: Vec<RangeInclusive<u32>>,
}

impl CharRanges {
    /// Create a table from `(start, end)` code point pairs
    pub fn new(name: impl Into<String>, ranges: &[(u32, u32)]) -> Result<Self> {
        let ranges = ranges
            .iter()
            .map(|&(start, end)| {
                if start > end || end > char::MAX as u32 {
                    Err(Error::InvalidRange { start, end })
                } else {
                    Ok(start..=end)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: name.into(),
            ranges,
        })
    }

    /// The ranges in this table
    pub fn ranges(&self) -> &[RangeInclusive<u32>] {
        &self.ranges
    }
}

impl ScriptMembership for CharRanges {
    fn contains(&self, ch: char) -> bool {
        let code = ch as u32;
        self.ranges.iter().any(|range| range.contains(&code))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Membership decided by a closure
pub struct FnScript<F> {
    name: String,
    predicate: F,
}

impl<F> FnScript<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    /// Wrap a predicate under a display name
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> ScriptMembership for FnScript<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    fn contains(&self, ch: char) -> bool {
        (self.predicate)(ch)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered set of script membership tests; index = language id
#[derive(Default)]
pub struct LanguageRegistry {
    scripts: Vec<Box<dyn ScriptMembership>>,
}

impl LanguageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry of named Unicode scripts, in the given order
    pub fn from_script_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.register(UnicodeScript::new(name)?);
        }
        Ok(registry)
    }

    /// Append a script; returns its language index
    pub fn register(&mut self, script: impl ScriptMembership + 'static) -> usize {
        self.scripts.push(Box::new(script));
        self.scripts.len() - 1
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, script: impl ScriptMembership + 'static) -> Self {
        self.register(script);
        self
    }

    /// Index of the first script containing `ch`
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.scripts.iter().position(|script| script.contains(ch))
    }

    /// Name of the script registered at `index`
    pub fn name(&self, index: usize) -> Option<&str> {
        self.scripts.get(index).map(|script| script.name())
    }

    /// Names of all registered scripts in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scripts.iter().map(|script| script.name())
    }

    /// Number of registered scripts
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Check if no script is registered
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

impl fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
