use std::io;
use std::panic;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;

use viper::config::{self, GameConfig, GridSize, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use viper::game::{GameState, GameStatus};
use viper::input::{GameInput, InputHandler};
use viper::platform::Platform;
use viper::renderer::{self, RenderView};
use viper::terminal_runtime::{restore_terminal, TerminalSession};
use viper::theme::{self, GLYPHS_ASCII, GLYPHS_UNICODE, THEME_CLASSIC};

/// Delay between render frames; ticks run on their own score-paced interval.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(name = "viper", about = "Classic terminal Snake", version)]
struct Cli {
    /// Playing field width in cells, wall ring included.
    #[arg(long)]
    width: Option<u16>,

    /// Playing field height in cells, wall ring included.
    #[arg(long)]
    height: Option<u16>,

    /// Color theme: classic, ocean or neon.
    #[arg(long)]
    theme: Option<String>,

    /// Force the plain ASCII glyph set.
    #[arg(long)]
    ascii: bool,

    /// Seed the fruit spawner for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let platform = Platform::detect();

    let settings = match config::load_settings() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Ignoring unreadable settings file: {error}");
            config::Settings::default()
        }
    };

    let grid = GridSize {
        width: cli.width.or(settings.width).unwrap_or(DEFAULT_GRID_WIDTH),
        height: cli
            .height
            .or(settings.height)
            .unwrap_or(DEFAULT_GRID_HEIGHT),
    };
    let game_config = match (GameConfig {
        grid,
        ..GameConfig::default()
    })
    .validated()
    {
        Ok(game_config) => game_config,
        Err(error) => {
            eprintln!("Invalid configuration: {error}");
            return ExitCode::from(2);
        }
    };

    let theme = match cli.theme.as_deref().or(settings.theme.as_deref()) {
        None => &THEME_CLASSIC,
        Some(name) => match theme::by_name(name) {
            Some(theme) => theme,
            None => {
                eprintln!("Unknown theme {name:?}; available: classic, ocean, neon");
                return ExitCode::from(2);
            }
        },
    };
    let glyphs = if cli.ascii || platform.prefers_ascii_glyphs() {
        &GLYPHS_ASCII
    } else {
        &GLYPHS_UNICODE
    };
    let view = RenderView { theme, glyphs };

    install_panic_hook();

    match run(game_config, cli.seed, &view) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(game_config: GameConfig, seed: Option<u64>, view: &RenderView<'_>) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut state = new_game(game_config, seed);
    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, view))?;

        if let Some(game_input) = input.poll_input()? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Confirm if state.status.is_terminal() => {
                    state = new_game(game_config, seed);
                    last_tick = Instant::now();
                }
                other => state.apply_input(other),
            }
        }

        if state.status == GameStatus::Running && last_tick.elapsed() >= state.tick_interval() {
            state.tick();
            last_tick = Instant::now();
        }

        thread::sleep(FRAME_INTERVAL);
    }

    Ok(())
}

fn new_game(game_config: GameConfig, seed: Option<u64>) -> GameState {
    match seed {
        Some(seed) => GameState::new_with_seed(game_config, seed),
        None => GameState::new(game_config),
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}
