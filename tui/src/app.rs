use crate::{
    form::FormState,
    game::GameState,
    menu::MenuState,
    preferences::{self, Preferences},
    theme::Theme,
    theme_select::ThemeSelectState,
};
use color_eyre::eyre::{Result, eyre};
use crossterm::event::EventStream;
use lexigrid_core::{Session, Validated};
use lexigrid_providers::{GeminiClient, GenerateRequest, GenerationError, generate_puzzle};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum AppView {
    #[default]
    Menu,
    /// Puzzle options and content input.
    Form,
    /// Solving the puzzle held by [`GameState::session`].
    Playing,
    Help,
    ThemeSelect,
}

#[derive(Debug)]
pub struct AppState {
    pub menu: MenuState,
    pub form: FormState,
    pub game: GameState,
    pub theme_select: ThemeSelectState,
    pub theme: &'static Theme,
    pub preferences: Preferences,
}

impl AppState {
    pub fn from_preferences(preferences: Preferences) -> Self {
        Self {
            menu: MenuState::default(),
            form: FormState::from_preferences(&preferences),
            game: GameState::default(),
            theme_select: ThemeSelectState::default(),
            theme: Theme::by_id(&preferences.theme_id),
            preferences,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_preferences(Preferences::default())
    }
}

/// Result of one background generation, tagged with its request number.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub seq: u64,
    pub result: Result<Validated, GenerationError>,
}

/// 35 FPS = 1000ms / 35
const FPS_RATE: Duration = Duration::from_millis(1000 / 35);

pub struct App {
    /// Active application view.
    pub view: AppView,
    /// View to return to from help.
    pub previous_view: Option<AppView>,
    /// Application state.
    ///
    /// This is shared among all views.
    pub state: AppState,
    /// Is the application running?
    pub is_running: bool,
    /// Event stream.
    pub event_stream: EventStream,
    /// Number of the latest generation request.
    generation_seq: u64,
    /// Request whose result we are waiting for, if any.
    pending: Option<u64>,
    outcome_tx: mpsc::UnboundedSender<GenerationOutcome>,
    outcome_rx: Option<mpsc::UnboundedReceiver<GenerationOutcome>>,
}

impl App {
    /// Construct a new instance of [`App`] with the saved preferences.
    pub fn new() -> Self {
        Self::with_state(AppState::from_preferences(preferences::load_preferences()))
    }

    pub fn with_state(state: AppState) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            is_running: false,
            event_stream: EventStream::new(),
            view: AppView::Menu,
            previous_view: None,
            state,
            generation_seq: 0,
            pending: None,
            outcome_tx,
            outcome_rx: Some(outcome_rx),
        }
    }

    /// Set the active view.
    pub fn set_view(&mut self, view: AppView) {
        self.view = view;
    }

    /// Is a generation in flight?
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: ratatui::DefaultTerminal) -> Result<()> {
        let mut outcomes = self
            .outcome_rx
            .take()
            .ok_or_else(|| eyre!("application loop already started"))?;
        self.is_running = true;

        // create a ticker for the loading spinner
        let mut interval = tokio::time::interval(FPS_RATE);

        while self.is_running {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                _ = interval.tick() => {
                    self.state.form.tick = self.state.form.tick.wrapping_add(1);
                }
                Some(outcome) = outcomes.recv() => {
                    self.finish_generation(outcome);
                }
                result = self.handle_crossterm_events() => {
                    result?;
                }
            }
        }

        log::info!("shutting down");
        Ok(())
    }

    /// Renders the user interface.
    fn draw(&mut self, frame: &mut ratatui::Frame) {
        match self.view {
            AppView::Menu => self.draw_menu(frame),
            AppView::Form => self.draw_form(frame),
            AppView::Playing => self.draw_game(frame),
            AppView::Help => self.draw_help(frame),
            AppView::ThemeSelect => self.draw_theme_select(frame),
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    async fn handle_crossterm_events(&mut self) -> Result<()> {
        use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
        use futures::{FutureExt, StreamExt};

        let event = self.event_stream.next().fuse().await;
        match event {
            Some(Ok(evt)) => match evt {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // application-wide CTRL+C handler
                    if matches!(
                        (key.modifiers, key.code),
                        (
                            KeyModifiers::CONTROL,
                            KeyCode::Char('c') | KeyCode::Char('C')
                        )
                    ) {
                        self.quit();
                        return Ok(());
                    };

                    match self.view {
                        AppView::Menu => self.handle_menu_input(key),
                        AppView::Form => self.handle_form_input(key),
                        AppView::Playing => self.handle_game_input(key),
                        AppView::Help => self.handle_help_input(key),
                        AppView::ThemeSelect => self.handle_theme_select_input(key),
                    }
                }
                Event::Mouse(mouse) if self.view == AppView::Playing => {
                    self.handle_game_mouse(mouse);
                }
                Event::Paste(text) => {
                    if self.view == AppView::Form {
                        self.state.form.paste(&text);
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            },
            Some(Err(e)) => return Err(e.into()),
            None => self.quit(),
        }
        Ok(())
    }

    /// Open help, remembering where to go back to.
    pub fn show_help(&mut self) {
        self.previous_view = Some(self.view);
        self.view = AppView::Help;
    }

    /// Start generating a puzzle in the background.
    ///
    /// The current puzzle is discarded right away. Does nothing while another
    /// generation is pending.
    pub fn start_generation(&mut self, request: GenerateRequest) {
        if self.is_loading() {
            return;
        }
        self.generation_seq += 1;
        let seq = self.generation_seq;
        self.pending = Some(seq);
        self.state.form.error = None;
        self.state.game = GameState::default();

        let client = self.client();
        let tx = self.outcome_tx.clone();
        log::info!("starting generation #{} with {}", seq, client.model());
        tokio::spawn(async move {
            let result = generate_puzzle(&client, &request).await;
            let _ = tx.send(GenerationOutcome { seq, result });
        });
    }

    /// Stop waiting for the pending generation. Its result will be dropped.
    pub fn cancel_generation(&mut self) {
        if let Some(seq) = self.pending.take() {
            log::info!("cancelled generation #{}", seq);
        }
    }

    /// Apply a finished generation, unless a newer request superseded it.
    pub fn finish_generation(&mut self, outcome: GenerationOutcome) {
        if self.pending != Some(outcome.seq) {
            log::warn!("discarding stale generation #{}", outcome.seq);
            return;
        }
        self.pending = None;

        match outcome.result {
            Ok(validated) => {
                for warning in &validated.warnings {
                    log::debug!("clue {} dropped: {}", warning.index, warning.reason);
                }
                self.state.game = GameState::new(Session::new(validated.puzzle));
                self.view = AppView::Playing;
            }
            Err(e) if e.is_validation() => {
                log::warn!("generation #{} returned an unusable puzzle: {}", outcome.seq, e);
                self.state.form.error = Some(e.user_message());
            }
            Err(e) => {
                log::error!("generation #{} failed: {}", outcome.seq, e);
                self.state.form.error = Some(e.user_message());
            }
        }
    }

    fn client(&self) -> GeminiClient {
        let prefs = &self.state.preferences;
        // an empty key fails on the first request with an actionable message
        GeminiClient::from_env()
            .unwrap_or_else(|_| GeminiClient::new(prefs.api_key.clone().unwrap_or_default()))
            .with_model(prefs.model.clone())
    }

    /// Persist the current preferences, logging failures.
    pub fn save_preferences(&self) {
        if let Err(e) = preferences::save_preferences(&self.state.preferences) {
            log::warn!("could not save preferences: {}", e);
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.is_running = false;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
