use clap::{Parser, Subcommand};
use directories_next::ProjectDirs;
use std::path::PathBuf;

mod dto;
mod http;
mod routes;
mod tracing;

mod commands {
    pub mod serve;
    pub mod version;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the http api server
    Serve(commands::serve::Command),
    /// Print the server version
    Version(commands::version::Command),
}

impl Command {
    pub async fn execute(self, config_path: &str) -> eyre::Result<()> {
        use commands::*;
        match self {
            Self::Serve(o) => serve::handle(o, config_path).await?,
            Self::Version(o) => version::handle(o).await?,
        };

        Ok(())
    }
}

// Note: for uniformity, we dont use clap `default_value` or `default_value_t` options
#[derive(Parser, Debug)]
#[command(
    name = "itrackd",
    version,
    long_about = Some("Issue tracking rest api backed by a document store.")
)]
struct Args {
    /// Path of configuration file (default: "~/.config/itrack/config.toml")
    #[arg(short, long)]
    config: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn get_config_path(&self) -> eyre::Result<String> {
        let config_path = match &self.config {
            Some(x) => Ok(x.clone()),
            None => {
                if let Some(proj_dirs) = ProjectDirs::from("", "", "itrack") {
                    let config_dir = proj_dirs.config_dir();
                    let config_path: PathBuf = config_dir.join("config.toml");

                    config_path
                        .to_str()
                        .map(|t| t.to_owned())
                        .ok_or_else(|| eyre::eyre!("couldn't convert os path to string"))
                } else {
                    Err(eyre::eyre!("Project directories could not be found."))
                }
            }
        }?;

        Ok(shellexpand::full(&config_path)?.into_owned())
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing::setup()?;

    let args = Args::parse();
    let config_path = args.get_config_path()?;

    args.command.execute(&config_path).await?;
    Ok(())
}
