mod estimate;
mod report;
mod serve;

use clap::{Parser, Subcommand};

use crate::{
    cli::{estimate::EstimateArgs, report::ReportArgs, serve::ServeArgs},
    prelude::*,
    tables::{build_classes_table, build_regions_table},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: estimate every device of a fleet file and print the totals.
    #[clap(name = "report")]
    Report(ReportArgs),

    /// Estimate a single device given on the command line.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// List the known regions and their carbon intensity.
    #[clap(name = "regions")]
    Regions,

    /// List the device classes and their power draw range.
    #[clap(name = "classes")]
    Classes,

    /// Serve the browser front-end as static files.
    #[clap(name = "serve")]
    Serve(ServeArgs),
}

impl Command {
    pub async fn run(self) -> Result {
        match self {
            Self::Report(args) => args.run(),
            Self::Estimate(args) => args.run(),
            Self::Regions => {
                println!("{}", build_regions_table());
                Ok(())
            }
            Self::Classes => {
                println!("{}", build_classes_table());
                Ok(())
            }
            Self::Serve(args) => args.run().await,
        }
    }
}
