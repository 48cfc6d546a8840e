use clap::Parser;
use std::time::Duration;

use release_milestone::{
    Args, Command, CreateMilestoneThroughApiCall, command,
};

mod result;

use crate::result::Result;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("release_milestone")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = Args::parse();

    initialize_logger(cli_args.debug)?;

    let repository = cli_args.get_repository()?;
    let version = cli_args.command.version()?;
    let api_token = cli_args.get_api_token()?;

    let creator = CreateMilestoneThroughApiCall::with_reqwest(
        api_token,
        Duration::from_secs(cli_args.timeout),
    )?;

    match cli_args.command {
        Command::Create {
            ignore_existing, ..
        } => {
            let created = command::create::execute(
                &creator,
                &repository,
                &version,
                ignore_existing,
            )
            .await?;

            if let Some(url) = created {
                println!("{url}");
            }
        }
        Command::CreateNext { .. } => {
            let created =
                command::create_next::execute(&creator, &repository, &version)
                    .await?;

            for url in created {
                println!("{url}");
            }
        }
    }

    Ok(())
}
