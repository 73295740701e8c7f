use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid module config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid log filter '{0}'")]
    InvalidFilter(String),

    #[error("output sink: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for mlua::Error {
    fn from(err: Error) -> Self {
        mlua::Error::external(err)
    }
}
