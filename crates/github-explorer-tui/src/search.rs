//! Search session state.

use github_explorer_ghapi_interface::{types::GhRepository, ApiError};
use tui::widgets::ListState;

/// Fixed banner shown when a search fails. The underlying error is logged,
/// not shown.
pub const SEARCH_ERROR_MESSAGE: &str = "Failed to fetch repositories. Please try again.";

/// Search view status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No query submitted yet.
    Idle,
    /// Search request in flight.
    Loading,
    /// At least one result.
    Results,
    /// Zero results.
    Empty,
    /// Search failed.
    Error,
}

/// State of one search interaction.
pub struct SearchSession {
    pub query: String,
    pub status: SearchStatus,
    pub repositories: Vec<GhRepository>,
    pub results_state: ListState,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            status: SearchStatus::Idle,
            repositories: Vec::new(),
            results_state: ListState::default(),
            generation: 0,
        }
    }

    /// Prepare a new search, clearing the previous error and selection.
    ///
    /// Returns the generation the request must be tagged with, or `None`
    /// when the query is blank or a search is already in flight.
    pub fn begin_search(&mut self) -> Option<u64> {
        if self.query.trim().is_empty() || self.status == SearchStatus::Loading {
            return None;
        }

        self.generation += 1;
        self.status = SearchStatus::Loading;
        self.results_state.select(None);
        Some(self.generation)
    }

    /// Apply a finished search, ignoring results from a stale generation.
    pub fn finish_search(&mut self, generation: u64, result: Result<Vec<GhRepository>, ApiError>) {
        if generation != self.generation {
            return;
        }

        match result {
            Ok(repositories) if repositories.is_empty() => {
                self.repositories = repositories;
                self.status = SearchStatus::Empty;
            }
            Ok(repositories) => {
                self.repositories = repositories;
                self.status = SearchStatus::Results;
                self.set_first_selection();
            }
            Err(err) => {
                tracing::error!(error = %err, query = %self.query, "repository search failed");
                self.status = SearchStatus::Error;
            }
        }
    }

    pub fn set_first_selection(&mut self) {
        if !self.repositories.is_empty() {
            self.results_state.select(Some(0));
        }
    }

    pub fn selected_repository(&self) -> Option<&GhRepository> {
        self.results_state
            .selected()
            .and_then(|i| self.repositories.get(i))
    }

    pub fn next_repository(&mut self) {
        if self.repositories.is_empty() {
            return;
        }

        let i = match self.results_state.selected() {
            Some(i) => {
                if i >= self.repositories.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.results_state.select(Some(i));
    }

    pub fn previous_repository(&mut self) {
        if self.repositories.is_empty() {
            return;
        }

        let i = match self.results_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.repositories.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.results_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use github_explorer_ghapi_interface::{types::GhRepository, ApiError};
    use pretty_assertions::assert_eq;

    use super::{SearchSession, SearchStatus};

    fn repository(name: &str, stars: u64) -> GhRepository {
        GhRepository {
            name: name.into(),
            full_name: format!("owner/{name}"),
            stargazers_count: stars,
            ..GhRepository::default()
        }
    }

    #[test]
    fn blank_query_is_not_submitted() {
        let mut session = SearchSession::new();
        session.query = "   \t".into();

        assert_eq!(session.begin_search(), None);
        assert_eq!(session.status, SearchStatus::Idle);
    }

    #[test]
    fn resubmit_while_loading_is_ignored() {
        let mut session = SearchSession::new();
        session.query = "raylib".into();

        assert_eq!(session.begin_search(), Some(1));
        assert_eq!(session.begin_search(), None);
        assert_eq!(session.status, SearchStatus::Loading);
    }

    #[test]
    fn results_keep_api_ranking() {
        let mut session = SearchSession::new();
        session.query = "raylib".into();
        let generation = session.begin_search().unwrap();

        session.finish_search(
            generation,
            Ok(vec![repository("a", 300), repository("b", 200)]),
        );

        assert_eq!(session.status, SearchStatus::Results);
        assert!(session.repositories[0].stargazers_count >= session.repositories[1].stargazers_count);
        assert_eq!(session.selected_repository().unwrap().name, "a");
    }

    #[test]
    fn empty_results_enter_empty_state() {
        let mut session = SearchSession::new();
        session.query = "zzzz".into();
        let generation = session.begin_search().unwrap();

        session.finish_search(generation, Ok(vec![]));

        assert_eq!(session.status, SearchStatus::Empty);
    }

    #[test]
    fn failed_search_enters_error_state() {
        let mut session = SearchSession::new();
        session.query = "raylib".into();
        let generation = session.begin_search().unwrap();

        session.finish_search(generation, Err(ApiError::GitHubStatus { status: 403 }));

        assert_eq!(session.status, SearchStatus::Error);
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut session = SearchSession::new();
        session.query = "first".into();
        let stale = session.begin_search().unwrap();
        session.finish_search(stale, Ok(vec![]));

        session.query = "second".into();
        let current = session.begin_search().unwrap();

        // The first search resolves late; its payload must not leak into
        // the second one.
        session.finish_search(stale, Ok(vec![repository("late", 1)]));
        assert_eq!(session.status, SearchStatus::Loading);
        assert!(session.repositories.is_empty());

        session.finish_search(current, Ok(vec![repository("fresh", 2)]));
        assert_eq!(session.status, SearchStatus::Results);
        assert_eq!(session.repositories[0].name, "fresh");
    }

    #[test]
    fn selection_wraps_around() {
        let mut session = SearchSession::new();
        session.query = "x".into();
        let generation = session.begin_search().unwrap();
        session.finish_search(
            generation,
            Ok(vec![repository("a", 2), repository("b", 1)]),
        );

        session.next_repository();
        assert_eq!(session.selected_repository().unwrap().name, "b");
        session.next_repository();
        assert_eq!(session.selected_repository().unwrap().name, "a");
        session.previous_repository();
        assert_eq!(session.selected_repository().unwrap().name, "b");
    }
}
