use netname_scheme::{SchemeInputs, init};
use std::process::ExitCode;

#[derive(Clone, Debug, Default, clap::Args)]
pub struct ShowArg {
    /// Print only the scheme name
    #[arg(short, long)]
    pub quiet: bool,
}

impl ShowArg {
    pub fn run(self, inputs: &impl SchemeInputs) -> anyhow::Result<ExitCode> {
        let resolution = init(inputs);

        if self.quiet {
            println!("{}", resolution.scheme);
            return Ok(ExitCode::SUCCESS);
        }

        println!("scheme:       {}", resolution.scheme);
        println!("origin:       {}", resolution.origin);
        if let Some(rejected) = &resolution.rejected {
            println!("ignored:      {rejected}");
        }
        println!("capabilities: {}", super::capability_list(resolution.scheme.flags));
        Ok(ExitCode::SUCCESS)
    }
}
