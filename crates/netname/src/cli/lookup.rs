use netname_scheme::NamingScheme;
use std::process::ExitCode;

#[derive(Clone, Debug, clap::Args)]
pub struct LookupArg {
    /// Scheme name, or "latest"
    pub name: String,
}

impl LookupArg {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        let scheme: &NamingScheme = self.name.parse()?;
        println!("{}: {}", scheme, super::capability_list(scheme.flags));
        Ok(ExitCode::SUCCESS)
    }
}
