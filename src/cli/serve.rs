use std::path::PathBuf;

use clap::Parser;

use crate::{prelude::*, serve::serve};

#[derive(Parser)]
pub struct ServeArgs {
    #[clap(long, default_value = "0.0.0.0:3000", env = "BIND_ADDRESS")]
    bind_address: String,

    /// Directory with `index.html` and the assets.
    #[clap(long, default_value = ".", env = "STATIC_ROOT")]
    root: PathBuf,
}

impl ServeArgs {
    pub async fn run(self) -> Result {
        serve(&self.bind_address, self.root).await
    }
}
