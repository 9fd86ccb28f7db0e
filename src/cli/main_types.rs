use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "strategist")]
#[command(about = "Consult the Art of War for counsel on modern conflicts")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[arg(long, global = true, env = "STRATEGIST_API_KEY")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe your situation and receive strategic counsel
    Consult {
        /// The conflict or problem to analyse (interactive when omitted)
        query: Vec<String>,
    },
    /// Show configuration readiness
    Status,
}
