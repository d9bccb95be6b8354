use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "portlite-scan", about = "Minimal sequential TCP connect scanner")]
pub struct Cli {
    /// Hostname or IP address to scan
    #[arg(short, long)]
    pub target: String,

    /// Inclusive port range ("440-445") or a single port ("443")
    #[arg(short, long, default_value = "1-1024")]
    pub ports: String,

    /// Print a formatted report with service names instead of a bare port list
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[arg(long, default_value_t = 5000)]
    pub connect_timeout_ms: u64,

    /// Emit the scan result as JSON on stdout
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,
}

impl Cli {
    pub fn parse() -> Self {
        Parser::parse()
    }
}
