//! CLI argument definitions for the Persona binary.

use clap::{Parser, Subcommand};
use url::Url;

/// Persona assertion inspection and login parameter tool
#[derive(Parser, Debug)]
#[command(name = "persona")]
#[command(about = "Decode Persona assertions and produce cookie-login parameters")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode an assertion and show its claims
    Inspect(InspectArgs),
    /// Register assertions and print the login parameters for a site
    LoginParams(LoginParamsArgs),
}

/// Arguments for the inspect command
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// The assertion, or a URL carrying it in its personaAssertion parameter
    pub assertion: String,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the login-params command
#[derive(clap::Args, Debug)]
pub struct LoginParamsArgs {
    /// Identity to log in as
    #[arg(short, long, env = "PERSONA_EMAIL")]
    pub email: String,

    /// Site to produce login parameters for
    #[arg(short, long)]
    pub site: Url,

    /// Accept assertions whose expiration has passed
    #[arg(long, env = "PERSONA_SKIP_EXPIRATION_CHECK")]
    pub skip_expiration_check: bool,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Assertions to register, in order; URLs carrying a personaAssertion
    /// parameter are accepted too
    #[arg(required = true)]
    pub assertions: Vec<String>,
}
