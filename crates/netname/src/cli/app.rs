use crate::cli::{has, lookup, ls, show};
use clap::{Parser, Subcommand};
use netname_platform::cmdline;
use netname_scheme::SystemInputs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "netname",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect the active network interface naming scheme",
    long_about = None,
    propagate_version = true
)]
pub struct App {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Read the kernel command line from this file instead of /proc/cmdline
    #[arg(long, global = true, value_name = "PATH")]
    pub cmdline_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "s", name = "show", about = "Resolve and print the active scheme")]
    Show(show::ShowArg),
    #[command(alias = "ls", name = "list", about = "List all known schemes")]
    List(ls::ListArg),
    #[command(alias = "l", name = "lookup", about = "Look up a scheme by name")]
    Lookup(lookup::LookupArg),
    #[command(
        name = "has",
        about = "Exit successfully if the active scheme has every capability"
    )]
    Has(has::HasArg),
}

impl App {
    fn inputs(&self) -> SystemInputs {
        match &self.cmdline_file {
            Some(path) => {
                debug!(path = %path.display(), "reading kernel command line from file");
                SystemInputs::with_cmdline(cmdline::Source::File(path.clone()))
            }
            None => SystemInputs::new(),
        }
    }

    pub fn run(self) -> anyhow::Result<ExitCode> {
        let inputs = self.inputs();
        match self.cmd {
            None => show::ShowArg::default().run(&inputs),
            Some(Commands::Show(arg)) => arg.run(&inputs),
            Some(Commands::List(arg)) => arg.run(),
            Some(Commands::Lookup(arg)) => arg.run(),
            Some(Commands::Has(arg)) => arg.run(&inputs),
        }
    }
}
