use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;

use crate::commands::{Command, CommandContext};

/// Search GitHub repositories
#[derive(Parser)]
pub(crate) struct SearchCommand {
    /// Search query
    query: String,
}

#[async_trait(?Send)]
impl Command for SearchCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let repositories = ctx.api_service.repositories_search(&self.query).await?;
        if repositories.is_empty() {
            writeln!(ctx.writer, "No repositories found matching your search.")?;
        } else {
            for repository in repositories {
                writeln!(
                    ctx.writer,
                    "- {} ({} stars)",
                    repository.full_name, repository.stargazers_count
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use github_explorer_ghapi_interface::types::GhRepository;
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn no_results() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_repositories_search()
            .once()
            .withf(|query| query == "nothing-here")
            .return_once(|_| Ok(vec![]));

        let output = test_command(ctx, &["search", "nothing-here"]).await;
        assert_eq!(output, "No repositories found matching your search.\n");
    }

    #[tokio::test]
    async fn results_in_ranking_order() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_repositories_search()
            .once()
            .withf(|query| query == "raylib")
            .return_once(|_| {
                Ok(vec![
                    GhRepository {
                        full_name: "raysan5/raylib".into(),
                        stargazers_count: 21000,
                        ..GhRepository::default()
                    },
                    GhRepository {
                        full_name: "other/raylib-rs".into(),
                        stargazers_count: 800,
                        ..GhRepository::default()
                    },
                ])
            });

        let output = test_command(ctx, &["search", "raylib"]).await;
        assert_eq!(
            output,
            "- raysan5/raylib (21000 stars)\n- other/raylib-rs (800 stars)\n"
        );
    }
}
