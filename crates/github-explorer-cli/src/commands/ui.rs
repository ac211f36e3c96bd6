use std::{io::Write, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use github_explorer_logging::temporarily_disable_logging;
use github_explorer_tui::run_tui;

use crate::commands::{Command, CommandContext};

/// Start TUI
#[derive(Parser)]
pub(crate) struct UiCommand;

#[async_trait(?Send)]
impl Command for UiCommand {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()> {
        let _guard = temporarily_disable_logging();
        run_tui(ctx.config, Arc::from(ctx.api_service))
            .await
            .map_err(Into::into)
    }
}
