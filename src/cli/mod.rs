use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glimpse")]
#[command(about = "A page summary scraping service", long_about = None)]
pub struct Cli {
    /// Address to bind the HTTP server to (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides the PORT environment variable and the
    /// config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to an alternative config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
