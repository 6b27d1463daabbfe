use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod icon_gen;
mod png;

#[derive(Debug, Parser)]
#[clap(
    name = "icon-stub",
    about = "Generate solid-color placeholder PNG icons for development"
)]
struct Args {
    /// Output directory for the generated icons.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(&icon_gen::IconSet::default(), &args.output)
}
