//! Application module.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use github_explorer_config::Config;
use github_explorer_ghapi_interface::ApiService;
use tokio::sync::mpsc::UnboundedSender;
use tracing::instrument::WithSubscriber;
use tui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::{
    errors::Result,
    events::AppEvent,
    explorer::{ExplorerSession, RootStatus, TreeRow, CONTENTS_ERROR_MESSAGE},
    search::{SearchSession, SearchStatus, SEARCH_ERROR_MESSAGE},
};

/// Which part of the search screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing edits the query.
    Query,
    /// Arrow keys move through the result list.
    Results,
}

pub struct App {
    config: Config,
    api_service: Arc<dyn ApiService>,
    events_tx: UnboundedSender<AppEvent>,
    pub search: SearchSession,
    pub explorer: Option<ExplorerSession>,
    pub focus: Focus,
    pub should_quit: bool,
    session_counter: u64,
}

impl App {
    pub fn new(
        config: Config,
        api_service: Arc<dyn ApiService>,
        events_tx: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            config,
            api_service,
            events_tx,
            search: SearchSession::new(),
            explorer: None,
            focus: Focus::Query,
            should_quit: false,
            session_counter: 0,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.explorer.is_some() {
            self.on_explorer_key(key.code);
        } else {
            self.on_search_key(key.code);
        }
    }

    fn on_search_key(&mut self, code: KeyCode) {
        match self.focus {
            Focus::Query => match code {
                KeyCode::Enter => self.submit_search(),
                KeyCode::Char(c) => self.search.query.push(c),
                KeyCode::Backspace => {
                    self.search.query.pop();
                }
                KeyCode::Down if self.search.status == SearchStatus::Results => {
                    self.focus = Focus::Results;
                    if self.search.results_state.selected().is_none() {
                        self.search.set_first_selection();
                    }
                }
                _ => {}
            },
            Focus::Results => match code {
                KeyCode::Enter => self.open_selected_repository(),
                KeyCode::Up => self.search.previous_repository(),
                KeyCode::Down => self.search.next_repository(),
                KeyCode::Esc => self.focus = Focus::Query,
                KeyCode::Char(c) => {
                    self.focus = Focus::Query;
                    self.search.query.push(c);
                }
                KeyCode::Backspace => {
                    self.focus = Focus::Query;
                    self.search.query.pop();
                }
                _ => {}
            },
        }
    }

    fn on_explorer_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.close_explorer(),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => {
                if let Some(explorer) = self.explorer.as_mut() {
                    explorer.previous_row();
                }
            }
            KeyCode::Down => {
                if let Some(explorer) = self.explorer.as_mut() {
                    explorer.next_row();
                }
            }
            KeyCode::Enter => self.toggle_selected_folder(),
            KeyCode::Char('d') => self.download_selected_file(),
            _ => {}
        }
    }

    /// Apply a finished background task, discarding results whose search
    /// generation or explorer session is no longer current.
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SearchFinished { generation, result } => {
                self.search.finish_search(generation, result);
            }
            AppEvent::RootLoaded { session, result } => {
                if let Some(explorer) = self.current_session_mut(session) {
                    explorer.finish_root(result);
                }
            }
            AppEvent::FolderLoaded {
                session,
                path,
                result,
            } => {
                if let Some(explorer) = self.current_session_mut(session) {
                    explorer.finish_folder(path, result);
                }
            }
            AppEvent::DownloadFinished {
                session,
                path,
                result,
            } => {
                if let Some(explorer) = self.current_session_mut(session) {
                    explorer.finish_download(&path, result);
                }
            }
        }
    }

    fn current_session_mut(&mut self, session: u64) -> Option<&mut ExplorerSession> {
        self.explorer
            .as_mut()
            .filter(|explorer| explorer.session == session)
    }

    pub(crate) fn submit_search(&mut self) {
        let Some(generation) = self.search.begin_search() else {
            return;
        };

        let query = self.search.query.clone();
        let api_service = Arc::clone(&self.api_service);
        let tx = self.events_tx.clone();
        // Spawned work keeps the UI thread's dispatcher, so muting logging
        // there also mutes the fetches running on other worker threads.
        tokio::spawn(
            async move {
                let result = api_service.repositories_search(&query).await;
                let _ = tx.send(AppEvent::SearchFinished { generation, result });
            }
            .with_current_subscriber(),
        );
    }

    pub(crate) fn open_selected_repository(&mut self) {
        let Some(repository) = self.search.selected_repository().cloned() else {
            return;
        };

        self.session_counter += 1;
        let session = self.session_counter;
        let owner = repository.owner.login.clone();
        let name = repository.name.clone();
        self.explorer = Some(ExplorerSession::new(repository, session));

        let api_service = Arc::clone(&self.api_service);
        let tx = self.events_tx.clone();
        tokio::spawn(
            async move {
                let result = api_service.contents_list(&owner, &name, "").await;
                let _ = tx.send(AppEvent::RootLoaded { session, result });
            }
            .with_current_subscriber(),
        );
    }

    /// Back to the search results. Cached results are kept as-is; late
    /// explorer events will carry a dead session id and be dropped.
    pub(crate) fn close_explorer(&mut self) {
        self.explorer = None;
        self.focus = Focus::Results;
    }

    pub(crate) fn toggle_selected_folder(&mut self) {
        let Some(explorer) = self.explorer.as_mut() else {
            return;
        };
        let Some(path) = explorer
            .selected_entry()
            .filter(|entry| entry.is_dir())
            .map(|entry| entry.path.clone())
        else {
            return;
        };

        if explorer.toggle_folder(&path) {
            let session = explorer.session;
            let owner = explorer.repository.owner.login.clone();
            let name = explorer.repository.name.clone();
            let api_service = Arc::clone(&self.api_service);
            let tx = self.events_tx.clone();
            tokio::spawn(
                async move {
                    let result = api_service.contents_list(&owner, &name, &path).await;
                    let _ = tx.send(AppEvent::FolderLoaded {
                        session,
                        path,
                        result,
                    });
                }
                .with_current_subscriber(),
            );
        }
    }

    pub(crate) fn download_selected_file(&mut self) {
        let Some(explorer) = self.explorer.as_mut() else {
            return;
        };
        let Some((path, file_name)) = explorer
            .selected_entry()
            .filter(|entry| entry.is_file())
            .map(|entry| (entry.path.clone(), entry.name.clone()))
        else {
            return;
        };

        if !explorer.begin_download(&path) {
            return;
        }

        let session = explorer.session;
        let owner = explorer.repository.owner.login.clone();
        let name = explorer.repository.name.clone();
        let directory = PathBuf::from(&self.config.download_directory);
        let api_service = Arc::clone(&self.api_service);
        let tx = self.events_tx.clone();
        tokio::spawn(
            async move {
                let result =
                    save_file_content(&*api_service, &owner, &name, &path, &directory, &file_name)
                        .await;
                let _ = tx.send(AppEvent::DownloadFinished {
                    session,
                    path,
                    result,
                });
            }
            .with_current_subscriber(),
        );
    }

    pub fn draw<B: Backend>(&mut self, f: &mut Frame<B>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(1),
                    Constraint::Min(0),
                    Constraint::Length(7),
                ]
                .as_ref(),
            )
            .split(f.size());

        Self::draw_title(f, chunks[0]);
        if self.explorer.is_some() {
            self.draw_explorer(f, chunks[1]);
        } else {
            self.draw_search(f, chunks[1]);
        }
        self.draw_help(f, chunks[2]);
    }

    fn draw_title<B: Backend>(f: &mut Frame<B>, area: Rect) {
        let title = Spans::from(vec![Span::styled(
            "GitHub Explorer - Terminal UI",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]);
        let p = Paragraph::new(title).alignment(Alignment::Center);
        f.render_widget(p, area);
    }

    fn draw_search<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(3),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ]
                .as_ref(),
            )
            .split(area);

        let query = Paragraph::new(self.search.query.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search GitHub repositories"),
        );
        f.render_widget(query, chunks[0]);

        let status_line = match self.search.status {
            SearchStatus::Idle => Spans::from(""),
            SearchStatus::Loading => Spans::from("Searching..."),
            SearchStatus::Empty => Spans::from("No repositories found matching your search."),
            SearchStatus::Error => Spans::from(Span::styled(
                SEARCH_ERROR_MESSAGE,
                Style::default().fg(Color::Red),
            )),
            SearchStatus::Results => {
                Spans::from(format!("{} repositories", self.search.repositories.len()))
            }
        };
        f.render_widget(Paragraph::new(status_line), chunks[1]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
            .split(chunks[2]);

        let items: Vec<ListItem> = self
            .search
            .repositories
            .iter()
            .map(|repository| {
                let line = format!(
                    "{} ({})",
                    repository.full_name,
                    repository.language.as_deref().unwrap_or("Not specified")
                );
                ListItem::new(vec![Spans::from(line)])
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Results"))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, body[0], &mut self.search.results_state);

        self.draw_selected_repository(f, body[1]);
    }

    fn draw_selected_repository<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        let block = Block::default().title("Repository").borders(Borders::ALL);

        if let Some(repository) = self.search.selected_repository() {
            let counts = Spans::from(vec![
                Span::styled("Stars", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": "),
                Span::styled(
                    repository.stargazers_count.to_string(),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw("  "),
                Span::styled("Forks", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": "),
                Span::styled(
                    repository.forks_count.to_string(),
                    Style::default().fg(Color::Blue),
                ),
                Span::raw("  "),
                Span::styled("Watchers", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": "),
                Span::styled(
                    repository.watchers_count.to_string(),
                    Style::default().fg(Color::Blue),
                ),
            ]);

            let text = vec![
                Spans::from(vec![Span::styled(
                    repository.full_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )]),
                Spans::from(""),
                Spans::from(
                    repository
                        .description
                        .clone()
                        .unwrap_or_else(|| "No description available".into()),
                ),
                Spans::from(""),
                counts,
                Spans::from(vec![
                    Span::styled("Language", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(": "),
                    Span::raw(
                        repository
                            .language
                            .clone()
                            .unwrap_or_else(|| "Not specified".into()),
                    ),
                ]),
                Spans::from(vec![
                    Span::styled(
                        "Default branch",
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(": "),
                    Span::raw(repository.default_branch.clone()),
                ]),
                Spans::from(vec![
                    Span::styled("URL", Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(": "),
                    Span::raw(repository.html_url.clone()),
                ]),
            ];

            let paragraph = Paragraph::new(text).wrap(Wrap { trim: true }).block(block);
            f.render_widget(paragraph, area);
        } else {
            let paragraph = Paragraph::new("Select a repository to browse its files").block(block);
            f.render_widget(paragraph, area);
        }
    }

    fn draw_explorer<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        let Some(explorer) = self.explorer.as_mut() else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)].as_ref())
            .split(area);

        let header = vec![
            Spans::from(vec![Span::styled(
                explorer.repository.full_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Spans::from(
                explorer
                    .repository
                    .description
                    .clone()
                    .unwrap_or_default(),
            ),
        ];
        f.render_widget(Paragraph::new(header), chunks[0]);

        let block = Block::default()
            .title("Repository Files")
            .borders(Borders::ALL);

        match explorer.root_status {
            RootStatus::Loading => {
                f.render_widget(Paragraph::new("Loading...").block(block), chunks[1]);
            }
            RootStatus::Error => {
                let banner = Span::styled(CONTENTS_ERROR_MESSAGE, Style::default().fg(Color::Red));
                f.render_widget(Paragraph::new(banner).block(block), chunks[1]);
            }
            RootStatus::Loaded if explorer.root_contents.is_empty() => {
                f.render_widget(
                    Paragraph::new("This repository is empty.").block(block),
                    chunks[1],
                );
            }
            RootStatus::Loaded => {
                let items: Vec<ListItem> = explorer
                    .rows()
                    .iter()
                    .map(|row| {
                        let line = match row {
                            TreeRow::Entry { entry, depth } => {
                                let indent = "  ".repeat(*depth);
                                let marker = if entry.is_dir() {
                                    if explorer.is_folder_pending(&entry.path) {
                                        "~ "
                                    } else if explorer.is_expanded(&entry.path) {
                                        "v "
                                    } else {
                                        "> "
                                    }
                                } else if explorer.is_downloading(&entry.path) {
                                    "* "
                                } else {
                                    "  "
                                };
                                Spans::from(format!("{indent}{marker}{}", entry.name))
                            }
                            TreeRow::Placeholder { text, depth } => {
                                let indent = "  ".repeat(*depth);
                                Spans::from(Span::styled(
                                    format!("{indent}  {text}"),
                                    Style::default().fg(Color::DarkGray),
                                ))
                            }
                        };
                        ListItem::new(vec![line])
                    })
                    .collect();

                let list = List::new(items)
                    .block(block)
                    .highlight_style(Style::default().add_modifier(Modifier::BOLD))
                    .highlight_symbol(">> ");
                f.render_stateful_widget(list, chunks[1], &mut explorer.list_state);
            }
        }
    }

    fn draw_help<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let text = if self.explorer.is_some() {
            vec![
                Spans::from(vec![
                    Span::styled("ENTER", bold),
                    Span::raw(" - Expand or collapse the selected folder"),
                ]),
                Spans::from(vec![
                    Span::styled("d", bold),
                    Span::raw(" - Download the selected file"),
                ]),
                Spans::from(vec![
                    Span::styled("UP/DOWN", bold),
                    Span::raw(" - Move selection cursor"),
                ]),
                Spans::from(vec![
                    Span::styled("ESCAPE", bold),
                    Span::raw(" - Back to search results"),
                ]),
                Spans::from(vec![
                    Span::styled("q", bold),
                    Span::raw(" - Quit application"),
                ]),
            ]
        } else {
            vec![
                Spans::from(vec![
                    Span::styled("ENTER", bold),
                    Span::raw(" - Submit search, or open the selected repository"),
                ]),
                Spans::from(vec![
                    Span::styled("UP/DOWN", bold),
                    Span::raw(" - Move selection cursor through results"),
                ]),
                Spans::from(vec![
                    Span::styled("ESCAPE", bold),
                    Span::raw(" - Back to query editing"),
                ]),
                Spans::from(vec![
                    Span::styled("CTRL-C", bold),
                    Span::raw(" - Quit application"),
                ]),
            ]
        };

        let paragraph =
            Paragraph::new(text).block(Block::default().title("Help").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

async fn save_file_content(
    api_service: &dyn ApiService,
    owner: &str,
    name: &str,
    path: &str,
    directory: &Path,
    file_name: &str,
) -> Result<()> {
    let content = api_service.file_content_get(owner, name, path).await?;
    tokio::fs::create_dir_all(directory).await?;
    tokio::fs::write(directory.join(file_name), content).await?;
    Ok(())
}
