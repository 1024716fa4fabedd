mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use math_legends::build_info;
use math_legends::combat::{CombatController, CombatPhase};
use math_legends::core::GameConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::name_entry::NameEntryScreen;
use ui::{draw_game, GameView};

/// Pause between judging an answer and applying it, so the verdict is visible
const ADVANCE_DELAY: Duration = Duration::from_millis(600);
const POLL_INTERVAL: Duration = Duration::from_millis(50);
const MAX_ANSWER_LENGTH: usize = 12;
const LOG_FILE_NAME: &str = "math-legends.log";

enum Screen {
    NameEntry,
    Game,
}

enum Flow {
    Continue,
    Quit,
}

#[derive(Default)]
struct Options {
    seed: Option<u64>,
    config_path: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    init_logging();

    let config = match &options.config_path {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(seed = ?options.seed, ?config, "starting");

    let mut controller = CombatController::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut controller, &mut rng);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        warn!(error = %e, "terminal loop failed");
    }
    info!(
        defeated = controller.monsters_defeated(),
        level = controller.player().level,
        "goodbye"
    );
    result
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-V" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Math Legends - Arithmetic Battles in the Terminal\n");
                println!("Usage: math-legends [options]\n");
                println!("Options:");
                println!("  --seed <N>       Seed the dice for a reproducible game");
                println!("  --config <PATH>  Load game rules from a JSON file");
                println!("  --version        Show version information");
                println!("  --help           Show this help message");
                println!();
                println!("Logs are written to the data directory; set RUST_LOG to adjust.");
                std::process::exit(0);
            }
            "--seed" => {
                match args.get(i + 1).and_then(|s| s.parse().ok()) {
                    Some(seed) => options.seed = Some(seed),
                    None => {
                        eprintln!("--seed expects a number");
                        std::process::exit(1);
                    }
                }
                i += 1;
            }
            "--config" => {
                match args.get(i + 1) {
                    Some(path) => options.config_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("--config expects a path");
                        std::process::exit(1);
                    }
                }
                i += 1;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'math-legends --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    options
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging() {
    let Some(dir) = dirs::data_local_dir().map(|d| d.join("math-legends")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
    else {
        return;
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("math_legends=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut CombatController,
    rng: &mut StdRng,
) -> io::Result<()> {
    let mut screen = Screen::NameEntry;
    let mut name_screen = NameEntryScreen::new();
    let mut view = GameView::default();
    let mut judged_at: Option<Instant> = None;

    loop {
        match screen {
            Screen::NameEntry => {
                terminal.draw(|f| {
                    let area = f.size();
                    name_screen.draw(f, area);
                })?;

                if event::poll(POLL_INTERVAL)? {
                    if let Event::Key(key_event) = event::read()? {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key_event.code {
                            KeyCode::Char(c) => name_screen.push(c),
                            KeyCode::Backspace => name_screen.pop(),
                            KeyCode::Enter => {
                                if let Some(name) = name_screen.submit() {
                                    match controller.submit_name(&name) {
                                        Ok(()) => {
                                            if let Err(e) = controller.spawn_monster(rng) {
                                                view.notice = Some(e.to_string());
                                            }
                                            screen = Screen::Game;
                                        }
                                        Err(e) => name_screen.reject(e.to_string()),
                                    }
                                }
                            }
                            KeyCode::Esc => return Ok(()),
                            _ => {}
                        }
                    }
                }
            }

            Screen::Game => {
                if judged_at.is_some_and(|t| t.elapsed() >= ADVANCE_DELAY) {
                    judged_at = None;
                    if let Err(e) = controller.advance(rng) {
                        view.notice = Some(e.to_string());
                    }
                }

                view.clamp_selection(controller.inventory().len(), controller.shop_stock().len());
                terminal.draw(|f| draw_game(f, controller, &view))?;

                if event::poll(POLL_INTERVAL)? {
                    if let Event::Key(key_event) = event::read()? {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        if let Flow::Quit =
                            handle_game_key(key_event, controller, &mut view, &mut judged_at, rng)
                        {
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

fn handle_game_key(
    key: KeyEvent,
    controller: &mut CombatController,
    view: &mut GameView,
    judged_at: &mut Option<Instant>,
    rng: &mut StdRng,
) -> Flow {
    view.notice = None;

    if controller.phase() == &CombatPhase::Shop {
        match key.code {
            KeyCode::Up => view.selected_stock = view.selected_stock.saturating_sub(1),
            KeyCode::Down => {
                if view.selected_stock + 1 < controller.shop_stock().len() {
                    view.selected_stock += 1;
                }
            }
            KeyCode::Enter => {
                let stock_id = controller
                    .shop_stock()
                    .get(view.selected_stock)
                    .map(|item| item.id.clone());
                if let Some(id) = stock_id {
                    if let Err(e) = controller.purchase(&id, rng) {
                        view.notice = Some(e.to_string());
                    }
                }
            }
            KeyCode::Esc | KeyCode::Char('c') => {
                view.selected_stock = 0;
                if let Err(e) = controller.close_shop(rng) {
                    view.notice = Some(e.to_string());
                }
            }
            KeyCode::Char('q') => return Flow::Quit,
            _ => {}
        }
        return Flow::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
            if view.answer_input.len() < MAX_ANSWER_LENGTH {
                view.answer_input.push(c);
            }
        }
        KeyCode::Backspace => {
            view.answer_input.pop();
        }
        KeyCode::Enter => {
            if judged_at.is_none() && !view.answer_input.is_empty() {
                match controller.submit_answer(&view.answer_input) {
                    Ok(_) => *judged_at = Some(Instant::now()),
                    Err(e) => view.notice = Some(e.to_string()),
                }
                view.answer_input.clear();
            }
        }
        KeyCode::Up => view.selected_item = view.selected_item.saturating_sub(1),
        KeyCode::Down => {
            if view.selected_item + 1 < controller.inventory().len() {
                view.selected_item += 1;
            }
        }
        KeyCode::Char('u') => {
            let item_id = controller
                .inventory()
                .get(view.selected_item)
                .map(|item| item.id.clone());
            if let Some(id) = item_id {
                if let Err(e) = controller.use_item(&id) {
                    view.notice = Some(e.to_string());
                }
            }
        }
        KeyCode::Char('f') => {
            if let Err(e) = controller.spawn_monster(rng) {
                view.notice = Some(e.to_string());
            }
        }
        KeyCode::Char('r') => {
            if controller.phase() == &CombatPhase::GameOver {
                *judged_at = None;
                view.answer_input.clear();
                controller.restart(rng);
            }
        }
        KeyCode::Char('d') => {
            if judged_at.is_none() {
                if let Err(e) = controller.despawn() {
                    view.notice = Some(e.to_string());
                }
            }
        }
        _ => {}
    }
    Flow::Continue
}
