//! Kernel command line access.
//!
//! The command line is a whitespace separated list of words. Single or double
//! quotes group a word and are dropped (`a="b c"` is the word `a=b c`), an
//! unterminated quote runs to the end of the line, and backslashes are kept
//! verbatim.

use crate::env;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the running kernel's command line.
pub const PROC_CMDLINE: &str = "/proc/cmdline";

/// When set, its value replaces the contents of [`PROC_CMDLINE`].
pub const OVERRIDE_ENV: &str = "SYSTEMD_PROC_CMDLINE";

/// Where a kernel command line is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Source {
    /// [`OVERRIDE_ENV`] if set, otherwise [`PROC_CMDLINE`].
    #[default]
    Kernel,
    /// An explicit file with the same format as `/proc/cmdline`.
    File(PathBuf),
}

impl Source {
    pub fn read(&self) -> Result<String> {
        match self {
            Source::Kernel => read(),
            Source::File(path) => read_from(path),
        }
    }

    pub fn get_key(&self, key: &str) -> Result<Option<String>> {
        Ok(get_key_from(&self.read()?, key))
    }
}

/// Read the kernel command line, honouring [`OVERRIDE_ENV`].
pub fn read() -> Result<String> {
    if let Some(line) = env::var(OVERRIDE_ENV) {
        return Ok(line);
    }
    read_from(PROC_CMDLINE)
}

pub fn read_from(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .map(|line| line.trim_end().to_string())
        .map_err(|source| Error::CmdlineRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Look up `key` on the kernel command line.
pub fn get_key(key: &str) -> Result<Option<String>> {
    Source::Kernel.get_key(key)
}

/// Look up the value of `key=value` in `line`.
///
/// `-` and `_` are interchangeable in keys and the last occurrence wins. A
/// bare `key` without `=` carries no value and is skipped.
pub fn get_key_from(line: &str, key: &str) -> Option<String> {
    words(line).into_iter().rev().find_map(|word| {
        let (k, v) = word.split_once('=')?;
        key_eq(k, key).then(|| v.to_string())
    })
}

/// Split a command line into unquoted words.
pub fn words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_ascii_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_word {
        words.push(current);
    }
    words
}

fn key_eq(a: &str, b: &str) -> bool {
    fn norm(c: u8) -> u8 {
        if c == b'_' { b'-' } else { c }
    }
    a.len() == b.len()
        && a
            .bytes()
            .zip(b.bytes())
            .all(|(x, y)| norm(x) == norm(y))
}
