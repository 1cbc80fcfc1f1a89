//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(author, version, about = "Current weather with clothing hints")]
#[command(long_about = r#"
SkyCast looks up the current weather for a location and suggests what to wear.

With a LOCATION argument it prints one report and exits. Without one it starts
an interactive prompt that keeps a search history and favorite locations for
the rest of the session (type `help` there for commands).

The provider API key is read from SKYCAST_API_KEY or from `weather.api_key` in
the config file (default: ~/.config/skycast/config.toml).

Example:
  skycast Paris
  skycast --celsius "São Paulo,BR"
  skycast
"#)]
pub struct Cli {
    /// Location to look up (starts the interactive prompt when omitted)
    pub location: Option<String>,

    /// Show temperatures in Celsius instead of the configured unit
    #[arg(short, long)]
    pub celsius: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
