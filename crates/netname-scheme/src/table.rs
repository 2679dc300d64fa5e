//! The table of known naming schemes.
//!
//! Rows are ordered oldest first. New schemes are only ever appended, because
//! [`LATEST`] always names the final row.

use crate::error::Error;
use crate::flags::NamingSchemeFlags;
use std::fmt;
use std::str::FromStr;

/// Reserved alias for the newest scheme in [`NAMING_SCHEMES`].
pub const LATEST: &str = "latest";

/// Scheme used when neither the kernel command line nor the environment
/// selects a known one. Set at build time with `DEFAULT_NET_NAMING_SCHEME`.
pub const DEFAULT_NAME: &str = match option_env!("DEFAULT_NET_NAMING_SCHEME") {
    Some(name) => name,
    None => LATEST,
};

// Evaluated at compile time, so a default missing from the table fails the build.
const DEFAULT_INDEX: usize = match position(DEFAULT_NAME) {
    Some(i) => i,
    None => panic!("DEFAULT_NET_NAMING_SCHEME does not name a known naming scheme"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamingScheme {
    pub name: &'static str,
    pub flags: NamingSchemeFlags,
}

impl NamingScheme {
    const fn new(name: &'static str, flags: NamingSchemeFlags) -> Self {
        Self { name, flags }
    }

    /// Whether every flag in `flags` is enabled by this scheme.
    pub fn has(&self, flags: NamingSchemeFlags) -> bool {
        self.flags.contains(flags)
    }
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for &'static NamingScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_name(s).ok_or_else(|| Error::UnknownScheme(s.to_string()))
    }
}

const ROWS: &[NamingScheme] = &[
    NamingScheme::new("v238", NamingSchemeFlags::V238),
    NamingScheme::new("v239", NamingSchemeFlags::V239),
    NamingScheme::new("rhel-8.0", NamingSchemeFlags::RHEL_8_0),
    NamingScheme::new("rhel-8.1", NamingSchemeFlags::RHEL_8_1),
    NamingScheme::new("rhel-8.2", NamingSchemeFlags::RHEL_8_2),
    NamingScheme::new("rhel-8.3", NamingSchemeFlags::RHEL_8_3),
    NamingScheme::new("rhel-8.4", NamingSchemeFlags::RHEL_8_4),
    NamingScheme::new("rhel-8.5", NamingSchemeFlags::RHEL_8_5),
    NamingScheme::new("rhel-8.6", NamingSchemeFlags::RHEL_8_6),
    NamingScheme::new("rhel-8.7", NamingSchemeFlags::RHEL_8_7),
];

/// Every known scheme, oldest first. All scheme references handed out by this
/// crate point into this one table.
pub static NAMING_SCHEMES: &[NamingScheme] = ROWS;

/// The newest scheme, i.e. the last row of [`NAMING_SCHEMES`].
pub fn latest() -> &'static NamingScheme {
    &NAMING_SCHEMES[ROWS.len() - 1]
}

/// The build-time default scheme.
pub fn default_scheme() -> &'static NamingScheme {
    &NAMING_SCHEMES[DEFAULT_INDEX]
}

/// Find a scheme by exact, case-sensitive name.
///
/// [`LATEST`] is checked before the table, so a row can never shadow it.
pub fn from_name(name: &str) -> Option<&'static NamingScheme> {
    position(name).map(|i| &NAMING_SCHEMES[i])
}

const fn position(name: &str) -> Option<usize> {
    if str_eq(name, LATEST) {
        return Some(ROWS.len() - 1);
    }

    let mut i = 0;
    while i < ROWS.len() {
        if str_eq(ROWS[i].name, name) {
            return Some(i);
        }
        i += 1;
    }
    None
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
