// src/bin/cli.rs
use tv_favs::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let params = cli::parse_args(std::env::args().skip(1))?;
    cli::run(params)?;
    Ok(())
}
