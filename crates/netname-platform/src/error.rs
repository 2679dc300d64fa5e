use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read kernel command line from {path}: {source}")]
    CmdlineRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
