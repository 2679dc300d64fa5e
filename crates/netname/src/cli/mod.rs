pub mod app;
pub mod has;
pub mod lookup;
pub mod ls;
pub mod show;

use netname_scheme::NamingSchemeFlags;

pub(crate) fn capability_list(flags: NamingSchemeFlags) -> String {
    if flags.is_empty() {
        return "-".to_string();
    }
    flags.capability_names().collect::<Vec<_>>().join(", ")
}
