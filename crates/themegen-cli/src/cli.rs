use clap::Parser;
use std::path::PathBuf;

/// themegen: generate Theme.qml and theme.css from a design token file.
#[derive(Parser, Debug)]
#[command(name = "themegen", version, about)]
pub struct Args {
    /// Project root that relative paths resolve against.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file path override (default: <root>/themegen.toml if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. debug, themegen_tokens=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
