//! Resolution of the active naming scheme.
//!
//! Two inputs are consulted: the `net.naming-scheme=` kernel command line key
//! and the `NET_NAMING_SCHEME` environment variable. The environment wins,
//! unless its value starts with `:`, in which case the kernel command line wins
//! and the environment (minus the colon) is only the fallback. An empty, absent
//! or unknown name selects [`default_scheme`].
//!
//! The result is computed once per [`SchemeCell`]; [`naming_scheme`] uses a
//! process-wide cell.

use crate::flags::NamingSchemeFlags;
use crate::table::{self, NamingScheme, default_scheme};
use netname_platform::{cmdline, env};
use once_cell::sync::OnceCell;
use std::fmt;
use tracing::{debug, info, warn};

/// Kernel command line key selecting a scheme.
pub const CMDLINE_KEY: &str = "net.naming-scheme";

/// Environment variable selecting a scheme.
pub const ENV_VAR: &str = "NET_NAMING_SCHEME";

/// The external inputs of a resolution.
pub trait SchemeInputs {
    /// Value of [`CMDLINE_KEY`] on the kernel command line.
    fn kernel_cmdline(&self) -> Option<String>;
    /// Value of [`ENV_VAR`].
    fn env(&self) -> Option<String>;
}

/// Reads the real kernel command line and process environment.
#[derive(Debug, Clone, Default)]
pub struct SystemInputs {
    cmdline: cmdline::Source,
}

impl SystemInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cmdline(cmdline: cmdline::Source) -> Self {
        Self { cmdline }
    }
}

impl SchemeInputs for SystemInputs {
    fn kernel_cmdline(&self) -> Option<String> {
        match self.cmdline.get_key(CMDLINE_KEY) {
            Ok(value) => value,
            Err(err) => {
                debug!(error = %err, "kernel command line unavailable");
                None
            }
        }
    }

    fn env(&self) -> Option<String> {
        env::var(ENV_VAR)
    }
}

/// Where the active scheme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    KernelCmdline,
    Environment,
    Default,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Origin::KernelCmdline => "kernel command line",
            Origin::Environment => "environment",
            Origin::Default => "default",
        })
    }
}

/// A requested scheme name and the input it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub origin: Origin,
}

impl<'a> Candidate<'a> {
    fn new(name: &'a str, origin: Origin) -> Self {
        Self { name, origin }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub scheme: &'static NamingScheme,
    pub origin: Origin,
    /// A requested name that matched no scheme.
    pub rejected: Option<String>,
}

/// Pick the requested name from the environment and kernel command line values.
pub fn select_candidate<'a>(
    env: Option<&'a str>,
    cmdline: Option<&'a str>,
) -> Option<Candidate<'a>> {
    let cmdline = cmdline.map(|name| Candidate::new(name, Origin::KernelCmdline));
    match env {
        None => cmdline,
        Some(value) => match value.strip_prefix(':') {
            Some(fallback) => cmdline.or(Some(Candidate::new(fallback, Origin::Environment))),
            None => Some(Candidate::new(value, Origin::Environment)),
        },
    }
}

/// Resolve the scheme for `inputs` without caching.
pub fn resolve<I: SchemeInputs + ?Sized>(inputs: &I) -> Resolution {
    let cmdline = inputs.kernel_cmdline();
    let env = inputs.env();

    let mut rejected = None;
    let candidate =
        select_candidate(env.as_deref(), cmdline.as_deref()).filter(|c| !c.name.is_empty());

    if let Some(candidate) = candidate {
        if let Some(scheme) = table::from_name(candidate.name) {
            info!("Using interface naming scheme '{}'.", scheme.name);
            return Resolution {
                scheme,
                origin: candidate.origin,
                rejected: None,
            };
        }

        warn!(
            "Unknown interface naming scheme '{}' requested, ignoring.",
            candidate.name
        );
        rejected = Some(candidate.name.to_string());
    }

    let scheme = default_scheme();
    info!("Using default interface naming scheme '{}'.", scheme.name);
    Resolution {
        scheme,
        origin: Origin::Default,
        rejected,
    }
}

/// Write-once holder of a [`Resolution`].
///
/// The inputs are read by the first caller only. Concurrent first callers
/// block until that resolution is stored.
#[derive(Debug, Default)]
pub struct SchemeCell {
    cell: OnceCell<Resolution>,
}

impl SchemeCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn get_or_resolve<I: SchemeInputs + ?Sized>(&self, inputs: &I) -> &Resolution {
        self.cell.get_or_init(|| resolve(inputs))
    }

    pub fn get(&self) -> Option<&Resolution> {
        self.cell.get()
    }
}

static ACTIVE: SchemeCell = SchemeCell::new();

/// Resolve the process-wide scheme from `inputs`.
///
/// Only the first call (here or through [`naming_scheme`]) reads its inputs;
/// later calls return the stored resolution and ignore `inputs`.
pub fn init<I: SchemeInputs + ?Sized>(inputs: &I) -> &'static Resolution {
    ACTIVE.get_or_resolve(inputs)
}

/// The process-wide resolution, read from [`SystemInputs`] on first use.
pub fn active() -> &'static Resolution {
    init(&SystemInputs::new())
}

/// The naming scheme in effect for this process.
pub fn naming_scheme() -> &'static NamingScheme {
    active().scheme
}

/// Whether the active scheme enables every flag in `flags`.
pub fn naming_scheme_has(flags: NamingSchemeFlags) -> bool {
    naming_scheme().has(flags)
}
