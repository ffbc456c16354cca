use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "td", about = concat!("[x] optodo v", env!("CARGO_PKG_VERSION"), " - operational to-dos"), version)]
pub struct Cli {
    /// Config file (defaults to ./optodo.toml when present)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Append logs to this file (filter with OPTODO_LOG)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long = "print-config")]
    pub print_config: bool,
}
