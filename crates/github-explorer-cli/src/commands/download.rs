use std::{io::Write, path::PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;

use crate::commands::{Command, CommandContext};

/// Download a repository file to the download directory
#[derive(Parser)]
pub(crate) struct DownloadCommand {
    /// Repository owner
    owner: String,
    /// Repository name
    name: String,
    /// File path, relative to the repository root
    path: String,
}

#[async_trait(?Send)]
impl Command for DownloadCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let content = ctx
            .api_service
            .file_content_get(&self.owner, &self.name, &self.path)
            .await?;

        let file_name = self.path.rsplit('/').next().unwrap_or(&self.path);
        let directory = PathBuf::from(&ctx.config.download_directory);
        tokio::fs::create_dir_all(&directory).await?;
        let target = directory.join(file_name);
        tokio::fs::write(&target, content).await?;

        writeln!(ctx.writer, "Saved {} to {}", self.path, target.display())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn saves_file_under_its_own_name() {
        let download_dir = tempfile::tempdir().unwrap();

        let mut ctx = CommandContextTest::new();
        ctx.config.download_directory = download_dir.path().display().to_string();
        ctx.api_service
            .expect_file_content_get()
            .once()
            .withf(|owner, name, path| {
                owner == "raysan5" && name == "raylib" && path == "src/raylib.h"
            })
            .return_once(|_, _, _| Ok("#pragma once\n".into()));

        let output = test_command(ctx, &["download", "raysan5", "raylib", "src/raylib.h"]).await;

        let target = download_dir.path().join("raylib.h");
        assert_eq!(
            output,
            format!("Saved src/raylib.h to {}\n", target.display())
        );
        assert_eq!(std::fs::read_to_string(target).unwrap(), "#pragma once\n");
    }
}
