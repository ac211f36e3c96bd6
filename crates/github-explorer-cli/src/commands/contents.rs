use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;

use crate::commands::{Command, CommandContext};

/// List the contents of a repository folder
#[derive(Parser)]
pub(crate) struct ContentsCommand {
    /// Repository owner
    owner: String,
    /// Repository name
    name: String,
    /// Folder path, relative to the repository root
    #[clap(default_value = "")]
    path: String,
}

#[async_trait(?Send)]
impl Command for ContentsCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let entries = ctx
            .api_service
            .contents_list(&self.owner, &self.name, &self.path)
            .await?;
        if entries.is_empty() {
            writeln!(ctx.writer, "Empty folder")?;
        } else {
            for entry in entries {
                let suffix = if entry.is_dir() { "/" } else { "" };
                writeln!(ctx.writer, "- {}{}", entry.path, suffix)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use github_explorer_ghapi_interface::types::{GhContentEntry, GhContentType};
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn root_listing() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_contents_list()
            .once()
            .withf(|owner, name, path| owner == "raysan5" && name == "raylib" && path.is_empty())
            .return_once(|_, _, _| {
                Ok(vec![
                    GhContentEntry {
                        name: "src".into(),
                        path: "src".into(),
                        content_type: GhContentType::Dir,
                        ..GhContentEntry::default()
                    },
                    GhContentEntry {
                        name: "README.md".into(),
                        path: "README.md".into(),
                        content_type: GhContentType::File,
                        ..GhContentEntry::default()
                    },
                ])
            });

        let output = test_command(ctx, &["contents", "raysan5", "raylib"]).await;
        assert_eq!(output, "- src/\n- README.md\n");
    }

    #[tokio::test]
    async fn empty_folder() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_contents_list()
            .once()
            .withf(|owner, name, path| owner == "raysan5" && name == "raylib" && path == "docs")
            .return_once(|_, _, _| Ok(vec![]));

        let output = test_command(ctx, &["contents", "raysan5", "raylib", "docs"]).await;
        assert_eq!(output, "Empty folder\n");
    }
}
