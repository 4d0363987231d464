use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chemsafe-server", version, about = "Chemical safety lookup service")]
pub(crate) struct Args {
    /// Optional TOML config file
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Overrides `PORT` and the config file
    #[arg(long)]
    pub(crate) listen_addr: Option<String>,
    /// Directory of static frontend assets
    #[arg(long)]
    pub(crate) static_dir: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    pub(crate) log_to_stderr: bool,
}
