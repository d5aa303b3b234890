//! Entry point kinds and the selection of which entry point classes to generate.
//!
//! An entry point class aggregates static factory methods for every generated
//! assertion type. The generator can emit several flavors side by side.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Flavor of generated entry point class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryPointKind {
    Standard,
    Soft,
    JunitSoft,
    Bdd,
    BddSoft,
    JunitBddSoft,
    AutoCloseableSoft,
    AutoCloseableBddSoft,
}

impl EntryPointKind {
    pub const ALL: [EntryPointKind; 8] = [
        EntryPointKind::Standard,
        EntryPointKind::Soft,
        EntryPointKind::JunitSoft,
        EntryPointKind::Bdd,
        EntryPointKind::BddSoft,
        EntryPointKind::JunitBddSoft,
        EntryPointKind::AutoCloseableSoft,
        EntryPointKind::AutoCloseableBddSoft,
    ];

    /// Canonical upper-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            EntryPointKind::Standard => "STANDARD",
            EntryPointKind::Soft => "SOFT",
            EntryPointKind::JunitSoft => "JUNIT_SOFT",
            EntryPointKind::Bdd => "BDD",
            EntryPointKind::BddSoft => "BDD_SOFT",
            EntryPointKind::JunitBddSoft => "JUNIT_BDD_SOFT",
            EntryPointKind::AutoCloseableSoft => "AUTO_CLOSEABLE_SOFT",
            EntryPointKind::AutoCloseableBddSoft => "AUTO_CLOSEABLE_BDD_SOFT",
        }
    }

    /// File name of the class the generator emits for this kind.
    pub fn file_name(self) -> &'static str {
        match self {
            EntryPointKind::Standard => "Assertions.java",
            EntryPointKind::Soft => "SoftAssertions.java",
            EntryPointKind::JunitSoft => "JUnitSoftAssertions.java",
            EntryPointKind::Bdd => "BddAssertions.java",
            EntryPointKind::BddSoft => "BDDSoftAssertions.java",
            EntryPointKind::JunitBddSoft => "JUnitBDDSoftAssertions.java",
            EntryPointKind::AutoCloseableSoft => "AutoCloseableSoftAssertions.java",
            EntryPointKind::AutoCloseableBddSoft => "AutoCloseableBDDSoftAssertions.java",
        }
    }

    /// Class name without the `.java` suffix.
    pub fn class_name(self) -> &'static str {
        self.file_name().trim_end_matches(".java")
    }

    pub fn valid_names() -> Vec<String> {
        Self::ALL.iter().map(|k| k.name().to_string()).collect()
    }
}

impl fmt::Display for EntryPointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntryPointKind {
    type Err = ConfigError;

    /// Case-insensitive; `-` is accepted in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == normalized)
            .ok_or_else(|| ConfigError::InvalidConfiguration {
                token: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

/// Set of entry point kinds to generate.
///
/// `Default` is `{STANDARD}`. An empty selection is representable, but the
/// resolver treats it as unset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct EntryPointSelection {
    kinds: BTreeSet<EntryPointKind>,
}

impl EntryPointSelection {
    pub fn empty() -> Self {
        Self {
            kinds: BTreeSet::new(),
        }
    }

    pub fn of<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = EntryPointKind>,
    {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Parse names case-insensitively. Fails on the first unknown name.
    pub fn from_names<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let kinds = names
            .into_iter()
            .map(|n| n.as_ref().parse::<EntryPointKind>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { kinds })
    }

    /// Replace the selection with exactly `kinds`.
    pub fn only<I>(&mut self, kinds: I) -> &mut Self
    where
        I: IntoIterator<Item = EntryPointKind>,
    {
        self.kinds = kinds.into_iter().collect();
        self
    }

    /// Replace the selection with exactly the named kinds.
    ///
    /// On error the selection is left untouched.
    pub fn only_names<I, S>(&mut self, names: I) -> Result<&mut Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        *self = Self::from_names(names)?;
        Ok(self)
    }

    fn toggle(&mut self, kind: EntryPointKind, enabled: bool) -> &mut Self {
        if enabled {
            self.kinds.insert(kind);
        } else {
            self.kinds.remove(&kind);
        }
        self
    }

    pub fn set_standard(&mut self, enabled: bool) -> &mut Self {
        self.toggle(EntryPointKind::Standard, enabled)
    }

    pub fn set_soft(&mut self, enabled: bool) -> &mut Self {
        self.toggle(EntryPointKind::Soft, enabled)
    }

    pub fn set_junit_soft(&mut self, enabled: bool) -> &mut Self {
        self.toggle(EntryPointKind::JunitSoft, enabled)
    }

    pub fn set_bdd(&mut self, enabled: bool) -> &mut Self {
        self.toggle(EntryPointKind::Bdd, enabled)
    }

    pub fn standard(&self) -> bool {
        self.contains(EntryPointKind::Standard)
    }

    pub fn soft(&self) -> bool {
        self.contains(EntryPointKind::Soft)
    }

    pub fn junit_soft(&self) -> bool {
        self.contains(EntryPointKind::JunitSoft)
    }

    pub fn bdd(&self) -> bool {
        self.contains(EntryPointKind::Bdd)
    }

    pub fn contains(&self, kind: EntryPointKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntryPointKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl Default for EntryPointSelection {
    fn default() -> Self {
        Self::of([EntryPointKind::Standard])
    }
}

impl TryFrom<Vec<String>> for EntryPointSelection {
    type Error = ConfigError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_names(names)
    }
}

impl From<EntryPointSelection> for Vec<String> {
    fn from(selection: EntryPointSelection) -> Self {
        selection.iter().map(|k| k.name().to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a EntryPointSelection {
    type Item = &'a EntryPointKind;
    type IntoIter = std::collections::btree_set::Iter<'a, EntryPointKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.kinds.iter()
    }
}
