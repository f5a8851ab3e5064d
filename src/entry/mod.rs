use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::adapters::cli::to_run_config;
use crate::args::GeneratorArgs;
use crate::domain::run::RunConfig;
use crate::error::AppResult;
use crate::http::{ReqwestClient, RequestProducer};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    crate::system::logger::init_logging(args.verbose, args.no_color);

    apply_config(&mut args, &matches)?;
    let run_config = to_run_config(&args);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute(run_config))
}

fn parse_args() -> AppResult<(GeneratorArgs, ArgMatches)> {
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let matches = GeneratorArgs::command().get_matches_from(raw_args);
    let args = GeneratorArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_config(args: &mut GeneratorArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}

async fn execute(run_config: RunConfig) -> AppResult<()> {
    let client = ReqwestClient::new()?;
    let producer = RequestProducer::new(run_config, client)?;
    let sent = producer.run().await?;
    tracing::info!("Sent {} request(s).", sent);
    Ok(())
}
