//! Commands.

use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;
use github_explorer_config::Config;
use github_explorer_ghapi_interface::ApiService;

use self::{
    contents::ContentsCommand, download::DownloadCommand, search::SearchCommand, ui::UiCommand,
};

mod contents;
mod download;
mod search;
mod ui;

pub(crate) struct CommandContext<W: Write> {
    pub config: Config,
    pub api_service: Box<dyn ApiService>,
    pub writer: W,
}

#[async_trait(?Send)]
pub(crate) trait Command {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Ui(UiCommand),
    Search(SearchCommand),
    Contents(ContentsCommand),
    Download(DownloadCommand),
}

#[async_trait(?Send)]
impl Command for SubCommand {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()> {
        match self {
            Self::Ui(sub) => sub.execute(ctx).await,
            Self::Search(sub) => sub.execute(ctx).await,
            Self::Contents(sub) => sub.execute(ctx).await,
            Self::Download(sub) => sub.execute(ctx).await,
        }
    }
}
