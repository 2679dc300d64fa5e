use netname_scheme::{NamingSchemeFlags, SchemeInputs, init, naming_scheme_has};
use std::process::ExitCode;

#[derive(Clone, Debug, clap::Args)]
pub struct HasArg {
    /// Capability names, e.g. SR_IOV_V or bridge-no-slot
    #[arg(required = true, value_parser = parse_capability)]
    pub capabilities: Vec<NamingSchemeFlags>,
}

fn parse_capability(name: &str) -> Result<NamingSchemeFlags, String> {
    NamingSchemeFlags::parse_capability(name).map_err(|e| e.to_string())
}

impl HasArg {
    pub fn run(self, inputs: &impl SchemeInputs) -> anyhow::Result<ExitCode> {
        init(inputs);
        let wanted = self
            .capabilities
            .into_iter()
            .fold(NamingSchemeFlags::empty(), |acc, flag| acc | flag);

        Ok(if naming_scheme_has(wanted) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}
