//! Main Application
//!
//! The App struct is the step driver and display client for one sort
//! session:
//! - Event loop (keyboard, resize)
//! - A timer that pulls exactly one step per tick from the session
//! - Rendering of the current snapshot and highlight
//!
//! All sorting logic lives in `sorter_core`; the App only decides *when*
//! to advance and *what* to show.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use sorter_core::{
    Advance, AlgorithmKind, DatasetShape, Highlight, SortOrder, SortSession, VisualizerConfig,
};

use crate::theme::{ACCENT, DIM_GRAY, SUCCESS_GREEN};
use crate::widgets::BarChart;

/// Fastest allowed pacing
const MIN_STEP_INTERVAL: Duration = Duration::from_millis(1);

/// Slowest allowed pacing
const MAX_STEP_INTERVAL: Duration = Duration::from_millis(2000);

/// What the status line reports
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Waiting for the user to start a sort
    Idle,
    /// A sequence is being stepped
    Sorting,
    /// The last sequence ran to exhaustion
    Sorted { algorithm: AlgorithmKind, steps: usize },
    /// Data was regenerated; any previous run was dropped
    NewData { shape: DatasetShape },
    /// Generating data failed
    Error(String),
}

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// Resolved configuration (dataset, pacing defaults)
    config: VisualizerConfig,

    // === Sort State ===
    /// Owner of the array and the in-flight sequence
    session: SortSession<u32>,
    /// Algorithm used by the next start
    algorithm: AlgorithmKind,
    /// Order used by the next start
    order: SortOrder,
    /// Highlight from the most recent step
    highlight: Highlight,

    // === Pacing ===
    /// Pause between two steps
    step_interval: Duration,
    /// Set when the timer must be rebuilt with a new period
    interval_changed: bool,

    // === Misc State ===
    status: Status,
    /// How many datasets were generated (advances the seed)
    generation: u64,
}

impl App {
    /// Create a new App with freshly generated data
    pub fn new(config: VisualizerConfig) -> anyhow::Result<Self> {
        let data = config.generate_data()?;
        info!(
            bars = data.len(),
            algorithm = %config.algorithm,
            order = %config.order,
            "Generated initial dataset"
        );

        Ok(Self {
            running: true,
            algorithm: config.algorithm,
            order: config.order,
            step_interval: config.step_interval,
            session: SortSession::new(data),
            highlight: Highlight::none(),
            interval_changed: false,
            status: Status::Idle,
            generation: 0,
            config,
        })
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();
        let mut ticker = Self::ticker(self.step_interval);

        // Render initial frame immediately so user sees UI
        terminal.draw(|frame| self.draw(frame))?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e.into()),
                        None => self.running = false,
                    }
                }

                // Step tick - only armed while a sequence is in flight
                _ = ticker.tick(), if self.session.is_running() => {
                    self.tick();
                }
            }

            if self.interval_changed {
                ticker = Self::ticker(self.step_interval);
                self.interval_changed = false;
            }

            terminal.draw(|frame| self.draw(frame))?;
        }

        Ok(())
    }

    fn ticker(period: Duration) -> Interval {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }

    /// Pull one step from the session
    ///
    /// On exhaustion the highlight is cleared so the final render shows the
    /// sorted array plainly.
    pub fn tick(&mut self) {
        match self.session.advance() {
            Advance::Step(step) => {
                self.highlight = step.highlight;
            }
            Advance::Done => {
                self.highlight = Highlight::none();
                if self.status == Status::Sorting {
                    let steps = self.session.steps_emitted();
                    info!(algorithm = %self.algorithm, steps, "Sort complete");
                    self.status = Status::Sorted {
                        algorithm: self.session.algorithm().unwrap_or(self.algorithm),
                        steps,
                    };
                }
            }
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            // Quit
            KeyCode::Esc | KeyCode::Char('q') => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }

            // Start (always from the current contents)
            KeyCode::Enter | KeyCode::Char(' ') => self.start(),

            // Algorithm choice
            KeyCode::Tab => self.algorithm = self.algorithm.next(),
            KeyCode::BackTab => self.algorithm = self.algorithm.previous(),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.algorithm = AlgorithmKind::ALL[index];
            }

            // Order choice
            KeyCode::Char('o') => self.order = self.order.toggled(),

            // Data
            KeyCode::Char('r') => self.regenerate(),
            KeyCode::Char('s') => {
                self.config.dataset.shape = self.config.dataset.shape.next();
                self.regenerate();
            }

            // Pacing
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_step_interval(self.step_interval / 2);
            }
            KeyCode::Char('-') => {
                self.set_step_interval(self.step_interval * 2);
            }

            _ => {}
        }
    }

    /// Start a fresh sort, dropping any sort in flight
    fn start(&mut self) {
        self.session.start(self.algorithm, self.order);
        self.highlight = Highlight::none();
        self.status = Status::Sorting;
        debug!(algorithm = %self.algorithm, order = %self.order, "Sort started");
    }

    /// Replace the data with a new dataset
    fn regenerate(&mut self) {
        self.generation += 1;
        let mut config = self.config.clone();
        config.seed = self.config.seed.map(|seed| seed.wrapping_add(self.generation));

        match config.generate_data() {
            Ok(data) => {
                self.session.replace_data(data);
                self.highlight = Highlight::none();
                self.status = Status::NewData {
                    shape: self.config.dataset.shape,
                };
            }
            Err(e) => {
                warn!(error = %e, "Dataset generation failed");
                self.status = Status::Error(e.to_string());
            }
        }
    }

    fn set_step_interval(&mut self, period: Duration) {
        let period = period.clamp(MIN_STEP_INTERVAL, MAX_STEP_INTERVAL);
        if period != self.step_interval {
            self.step_interval = period;
            self.interval_changed = true;
        }
    }

    /// Render the whole UI into a frame
    pub fn draw(&self, frame: &mut Frame) {
        let [title_area, chart_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(self.title_line(), title_area);

        let chart = BarChart::new(self.session.data())
            .domain(self.config.dataset.min_value, self.config.dataset.max_value)
            .highlight(&self.highlight);
        frame.render_widget(chart, chart_area);

        frame.render_widget(self.status_line(), status_area);
    }

    fn title_line(&self) -> Paragraph<'static> {
        let title = Line::from(vec![
            Span::styled(
                " sortviz ",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "| {} {} {} | {} bars | {}ms/step",
                self.algorithm.label(),
                self.order.arrow(),
                self.order,
                self.session.len(),
                self.step_interval.as_millis()
            )),
        ]);
        Paragraph::new(title)
    }

    fn status_line(&self) -> Paragraph<'static> {
        let (text, color) = match &self.status {
            Status::Idle => ("Ready".to_string(), DIM_GRAY),
            Status::Sorting => (
                format!("Sorting... {} steps", self.session.steps_emitted()),
                ACCENT,
            ),
            Status::Sorted { algorithm, steps } => (
                format!("Sorted with {} in {} steps", algorithm.label(), steps),
                SUCCESS_GREEN,
            ),
            Status::NewData { shape } => (format!("New {shape} data"), DIM_GRAY),
            Status::Error(message) => (format!("Error: {message}"), ACCENT),
        };

        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {text} "), Style::default().fg(color)),
            Span::styled(
                "| Enter start | Tab/1-6 algorithm | o order | r data | s shape | +/- speed | q quit",
                Style::default().fg(DIM_GRAY),
            ),
        ]))
    }

    // === Accessors ===

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_sorting(&self) -> bool {
        self.session.is_running()
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn data(&self) -> &[u32] {
        self.session.data()
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }
}
