//! Capability flags of a naming scheme.
//!
//! Each tweak to the interface naming logic gets its own flag, and every
//! released scheme is the union of the flags it implements. The masks on
//! [`NamingSchemeFlags`] accumulate: a newer scheme includes the flags of the
//! one it derives from.

use crate::error::{Error, Result};

bitflags::bitflags! {
    /// A set of naming scheme capabilities.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NamingSchemeFlags: u32 {
        /// Use the "v" suffix for SR-IOV virtual functions.
        const SR_IOV_V = 1 << 0;
        /// Use NPAR "ARI" function numbers.
        const NPAR_ARI = 1 << 1;
        /// Ignore PCI hotplug slot information when the device is a PCI bridge.
        const BRIDGE_NO_SLOT = 1 << 9;
        /// Use `function_id`, if present, to identify PCI hotplug slots.
        const SLOT_FUNCTION_ID = 1 << 10;
        /// Allow the full 16 bits for the onboard index.
        const INDEX_16BIT = 1 << 11;
    }
}

impl NamingSchemeFlags {
    pub const V238: Self = Self::empty();
    pub const V239: Self = Self::V238.union(Self::SR_IOV_V).union(Self::NPAR_ARI);
    pub const RHEL_8_0: Self = Self::V239;
    pub const RHEL_8_1: Self = Self::V239;
    pub const RHEL_8_2: Self = Self::V239;
    pub const RHEL_8_3: Self = Self::V239;
    pub const RHEL_8_4: Self = Self::V239.union(Self::BRIDGE_NO_SLOT);
    pub const RHEL_8_5: Self = Self::RHEL_8_4;
    pub const RHEL_8_6: Self = Self::RHEL_8_4;
    pub const RHEL_8_7: Self = Self::RHEL_8_4
        .union(Self::SLOT_FUNCTION_ID)
        .union(Self::INDEX_16BIT);

    /// Parse a single capability name.
    ///
    /// Case and `-`/`_` are ignored, so `bridge-no-slot` names
    /// [`Self::BRIDGE_NO_SLOT`]. `16bit-index` is accepted for
    /// [`Self::INDEX_16BIT`].
    pub fn parse_capability(name: &str) -> Result<Self> {
        let normalized = name.trim().to_ascii_uppercase().replace('-', "_");
        let normalized = match normalized.as_str() {
            "16BIT_INDEX" => "INDEX_16BIT",
            other => other,
        };
        Self::from_name(normalized).ok_or_else(|| Error::UnknownFlag(name.to_string()))
    }

    /// Names of the individual capabilities in this set, lowest bit first.
    pub fn capability_names(self) -> impl Iterator<Item = &'static str> {
        self.iter_names().map(|(name, _)| name)
    }
}
