//! App Driver Tests
//!
//! These tests drive the App without a real terminal: keys are fed through
//! `handle_key`, steps are pulled through `tick`, and frames are rendered
//! into a `TestBackend`.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;

use sorter_core::{AlgorithmKind, DatasetShape, SortOrder, VisualizerConfig};
use sortviz_tui::theme::{MARKER_PRIMARY, MARKER_SECONDARY};
use sortviz_tui::{App, Status};

// ============================================================================
// Helpers
// ============================================================================

fn config(bars: usize) -> VisualizerConfig {
    let mut config = VisualizerConfig::new();
    config.dataset.count = bars;
    config.seed = Some(7);
    config
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Tick until the status leaves `Sorting`, with a hard cap
fn run_to_completion(app: &mut App) -> usize {
    let mut ticks = 0;
    while app.is_sorting() || *app.status() == Status::Sorting {
        app.tick();
        ticks += 1;
        assert!(ticks < 100_000, "sort did not finish");
    }
    ticks
}

fn is_sorted(values: &[u32], order: SortOrder) -> bool {
    values.windows(2).all(|w| order.precedes(&w[0], &w[1]))
}

// ============================================================================
// Startup
// ============================================================================

#[test]
fn test_new_app_is_idle() {
    let app = App::new(config(20)).unwrap();

    assert!(app.is_running());
    assert!(!app.is_sorting());
    assert_eq!(app.status(), &Status::Idle);
    assert_eq!(app.data().len(), 20);
    assert!(app.highlight().is_empty());
}

#[test]
fn test_seeded_config_is_reproducible() {
    let a = App::new(config(30)).unwrap();
    let b = App::new(config(30)).unwrap();
    assert_eq!(a.data(), b.data());
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_every_algorithm_sorts_through_the_app() {
    for (index, kind) in AlgorithmKind::ALL.iter().enumerate() {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let mut app = App::new(config(25)).unwrap();
            let key = char::from(b'1' + index as u8);
            press(&mut app, KeyCode::Char(key));
            if order == SortOrder::Descending {
                press(&mut app, KeyCode::Char('o'));
            }
            assert_eq!(app.algorithm(), *kind);
            assert_eq!(app.order(), order);

            press(&mut app, KeyCode::Enter);
            assert!(app.is_sorting());
            run_to_completion(&mut app);

            assert!(is_sorted(app.data(), order), "{kind} {order}");
            assert!(app.highlight().is_empty());
            match app.status() {
                Status::Sorted { algorithm, .. } => assert_eq!(algorithm, kind),
                other => panic!("unexpected status {other:?}"),
            }
        }
    }
}

#[test]
fn test_tick_sets_highlight_while_sorting() {
    let mut app = App::new(config(10)).unwrap();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Enter);

    app.tick();
    assert!(!app.highlight().is_empty());
}

#[test]
fn test_restart_drops_sort_in_flight() {
    let mut app = App::new(config(40)).unwrap();
    press(&mut app, KeyCode::Enter);
    for _ in 0..5 {
        app.tick();
    }

    // Switch algorithm mid-run and restart from the partially sorted data
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Enter);
    assert!(app.highlight().is_empty());
    run_to_completion(&mut app);

    assert!(is_sorted(app.data(), SortOrder::Ascending));
    assert!(matches!(
        app.status(),
        Status::Sorted {
            algorithm: AlgorithmKind::Quick,
            ..
        }
    ));
}

#[test]
fn test_sorting_sorted_data_again_completes() {
    let mut app = App::new(config(15)).unwrap();
    press(&mut app, KeyCode::Enter);
    run_to_completion(&mut app);
    let sorted = app.data().to_vec();

    press(&mut app, KeyCode::Enter);
    run_to_completion(&mut app);
    assert_eq!(app.data(), sorted.as_slice());
}

#[test]
fn test_tick_without_sort_is_harmless() {
    let mut app = App::new(config(5)).unwrap();
    let before = app.data().to_vec();
    app.tick();
    assert_eq!(app.data(), before.as_slice());
    assert_eq!(app.status(), &Status::Idle);
}

// ============================================================================
// Key Handling
// ============================================================================

#[test]
fn test_tab_cycles_algorithms() {
    let mut app = App::new(config(5)).unwrap();
    assert_eq!(app.algorithm(), AlgorithmKind::Bubble);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.algorithm(), AlgorithmKind::Insertion);

    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.algorithm(), AlgorithmKind::Heap);
}

#[test]
fn test_order_toggle() {
    let mut app = App::new(config(5)).unwrap();
    press(&mut app, KeyCode::Char('o'));
    assert_eq!(app.order(), SortOrder::Descending);
    press(&mut app, KeyCode::Char('o'));
    assert_eq!(app.order(), SortOrder::Ascending);
}

#[test]
fn test_regenerate_replaces_data_and_stops_sort() {
    let mut app = App::new(config(50)).unwrap();
    let before = app.data().to_vec();
    press(&mut app, KeyCode::Enter);
    app.tick();

    press(&mut app, KeyCode::Char('r'));
    assert!(!app.is_sorting());
    assert_ne!(app.data(), before.as_slice());
    assert_eq!(
        app.status(),
        &Status::NewData {
            shape: DatasetShape::Random
        }
    );
}

#[test]
fn test_shape_key_cycles_shape() {
    let mut app = App::new(config(30)).unwrap();
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(
        app.status(),
        &Status::NewData {
            shape: DatasetShape::Sorted
        }
    );
    assert!(is_sorted(app.data(), SortOrder::Ascending));
}

#[test]
fn test_speed_keys_clamp() {
    let mut app = App::new(config(5)).unwrap();
    let start = app.step_interval();

    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.step_interval(), start / 2);

    for _ in 0..32 {
        press(&mut app, KeyCode::Char('+'));
    }
    assert_eq!(app.step_interval(), Duration::from_millis(1));

    for _ in 0..32 {
        press(&mut app, KeyCode::Char('-'));
    }
    assert_eq!(app.step_interval(), Duration::from_millis(2000));
}

#[test]
fn test_quit_keys() {
    let mut app = App::new(config(5)).unwrap();
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.is_running());

    let mut app = App::new(config(5)).unwrap();
    press(&mut app, KeyCode::Esc);
    assert!(!app.is_running());

    let mut app = App::new(config(5)).unwrap();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.is_running());
}

// ============================================================================
// Rendering
// ============================================================================

fn render(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_draw_shows_title_and_status() {
    let app = App::new(config(20)).unwrap();
    let screen = render(&app, 120, 12);

    assert!(screen.contains("sortviz"));
    assert!(screen.contains("Bubble"));
    assert!(screen.contains("20 bars"));
    assert!(screen.contains("Ready"));
}

#[test]
fn test_draw_after_completion() {
    let mut app = App::new(config(20)).unwrap();
    press(&mut app, KeyCode::Enter);
    run_to_completion(&mut app);

    let screen = render(&app, 120, 12);
    assert!(screen.contains("Sorted with Bubble"));
}

/// Number of chart cells drawn in a marker color
fn marker_cells(app: &App, width: u16, height: u16) -> usize {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let is_marker = |color: Color| color == MARKER_PRIMARY || color == MARKER_SECONDARY;
    // Skip the title row and the status row
    (1..height - 1)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .filter(|&pos| is_marker(buffer[pos].fg))
        .count()
}

#[test]
fn test_every_step_is_visible_with_more_bars_than_columns() {
    let mut app = App::new(config(1000)).unwrap();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Enter);

    let mut steps = 0;
    let mut hidden = 0;
    loop {
        app.tick();
        if !app.is_sorting() {
            break;
        }
        steps += 1;
        if marker_cells(&app, 80, 12) == 0 {
            hidden += 1;
        }
    }

    assert_eq!(steps, 999);
    assert_eq!(hidden, 0, "{hidden}/{steps} steps drew no highlighted column");
}

#[test]
fn test_default_bars_fit_narrow_terminal() {
    let mut app = App::new(config(50)).unwrap();
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Enter);
    app.tick();

    assert!(!app.highlight().is_empty());
    assert!(marker_cells(&app, 20, 8) > 0);
}

#[test]
fn test_draw_tiny_terminal_does_not_panic() {
    let mut app = App::new(config(200)).unwrap();
    press(&mut app, KeyCode::Enter);
    app.tick();
    let _ = render(&app, 10, 3);
    let _ = render(&app, 1, 1);
}
