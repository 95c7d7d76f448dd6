mod cli;
mod list_error;
mod logger;
mod model;
mod s3_store;
mod session;
mod utils;

use std::io::stdout;
use std::process::exit;

use log::{debug, info};

use crate::cli::{build_cli, ListCmd};
use crate::s3_store::StoreClient;
use crate::session::Session;
use crate::utils::write_names;

type GenError = Box<dyn std::error::Error>;

#[tokio::main]
async fn main() {
    logger::build_logger().init();

    let matches = build_cli();
    let cmd = ListCmd::build(&matches);

    match run(cmd).await {
        Ok(_) => exit(0),
        Err(err) => {
            eprintln!("❌  Failed due to error='{}'", err);
            exit(1);
        }
    }
}

async fn run(cmd: ListCmd) -> Result<(), GenError> {
    let session = Session::open(&cmd.profile, cmd.region.as_deref()).await?;
    debug!(
        "opened session for profile '{}' in region {}",
        cmd.profile,
        session.region.name()
    );

    let store = StoreClient::open(&session)?;
    let buckets = store.list_buckets().await?;
    info!("profile '{}' sees {} buckets", cmd.profile, buckets.len());

    write_names(&mut stdout(), &buckets)?;

    Ok(())
}
