use crate::{
    net,
    render::Style,
    session::Role
};
use clap::{error::ErrorKind, Parser};

pub const USAGE: &str = "Usage: casual-chess w or casual-chess b";

/// Two-player chess over TCP. One side hosts, the other connects.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// `b` to host and play black, anything else to connect and play white
    #[arg(allow_hyphen_values = true)]
    pub side: String,
    /// Host to dial when connecting
    #[arg(long, default_value = net::DEFAULT_HOST)]
    pub host: String,
    /// Port to listen on or dial
    #[arg(long, default_value_t = net::DEFAULT_PORT)]
    pub port: u16,
    /// Board output format
    #[arg(long, value_enum, default_value_t = Style::Ansi)]
    pub render: Style
}

#[derive(Debug)]
pub enum ConfigError {
    /// Help or version was requested; print and exit successfully.
    Display(clap::Error),
    Usage(clap::Error)
}

impl Config {
    pub fn role(&self) -> Role {
        Role::from_arg(&self.side)
    }
    pub fn parse_from_args<I, T>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone
    {
        Config::try_parse_from(args).map_err(|error| match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ConfigError::Display(error),
            _ => ConfigError::Usage(error)
        })
    }
}
