//! Network interface naming schemes.
//!
//! Stable interface names and improvements to the naming logic pull in
//! opposite directions. Each improvement is therefore guarded by a flag in
//! [`NamingSchemeFlags`], and each release defines a [`NamingScheme`] that
//! bundles the flags it implements. Installers can pin a scheme through the
//! `net.naming-scheme=` kernel command line key or the `NET_NAMING_SCHEME`
//! environment variable, so interface names do not move under them on upgrade.
//!
//! # Example
//!
//! ```
//! use netname_scheme::{NamingSchemeFlags, SchemeCell, SchemeInputs};
//!
//! struct Pinned;
//!
//! impl SchemeInputs for Pinned {
//!     fn kernel_cmdline(&self) -> Option<String> {
//!         Some("rhel-8.4".to_string())
//!     }
//!
//!     fn env(&self) -> Option<String> {
//!         None
//!     }
//! }
//!
//! let cell = SchemeCell::new();
//! let scheme = cell.get_or_resolve(&Pinned).scheme;
//! assert_eq!(scheme.name, "rhel-8.4");
//! assert!(scheme.has(NamingSchemeFlags::BRIDGE_NO_SLOT));
//! assert!(!scheme.has(NamingSchemeFlags::SLOT_FUNCTION_ID));
//! ```

pub use error::{Error, Result};
pub use flags::NamingSchemeFlags;
pub use resolve::{
    CMDLINE_KEY, Candidate, ENV_VAR, Origin, Resolution, SchemeCell, SchemeInputs, SystemInputs,
    active, init, naming_scheme, naming_scheme_has, resolve, select_candidate,
};
pub use table::{
    DEFAULT_NAME, LATEST, NAMING_SCHEMES, NamingScheme, default_scheme, from_name, latest,
};

mod error;
pub mod flags;
pub mod resolve;
pub mod table;
