use std::io::Write;

use anyhow::Result;
use clap::Parser;
use github_explorer_config::Config;
use github_explorer_ghapi_github::GithubApiService;

use crate::commands::{Command, CommandContext, SubCommand};

/// GitHub repository explorer
#[derive(Parser)]
#[clap(author, version, about, long_about = None, name = "github-explorer")]
#[clap(propagate_version = true)]
pub struct Args {
    #[clap(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async {
            let api_service = GithubApiService::new(config.clone());
            let ctx = CommandContext {
                config,
                api_service: Box::new(api_service),
                writer: Box::new(std::io::stdout()),
            };

            Self::parse_args_async(args, ctx).await
        })
    }

    pub(crate) async fn parse_args_async<W: Write>(
        args: Args,
        ctx: CommandContext<W>,
    ) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
