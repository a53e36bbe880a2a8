use clap::Args;

#[derive(Args, Debug)]
pub struct Command {}

pub async fn handle(_: Command) -> eyre::Result<()> {
    println!("itrackd {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
