mod build_info;
mod game;
mod ui;

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game::logic::{jump, reset, step};
use game::types::{GameState, TICKS_PER_SECOND};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Physics tick interval in milliseconds (60 Hz).
const TICK_INTERVAL_MS: u64 = 1000 / TICKS_PER_SECOND;

/// Clamp frame dt to avoid a physics spiral after a pause or terminal lag.
const MAX_FRAME_MS: u64 = 100;

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    seed: Option<u64>,
    debug_overlay: bool,
    command: Option<CliCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliCommand {
    Version,
    Help,
}

/// Parse arguments (excluding the program name handling: `args[0]` is
/// skipped). Malformed input is an error, never silently ignored.
fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        seed: None,
        debug_overlay: false,
        command: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => options.command = Some(CliCommand::Version),
            "--help" | "-h" => options.command = Some(CliCommand::Help),
            "--seed" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--seed requires a value".to_string())?;
                options.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid seed: {}", value))?,
                );
                i += 1;
            }
            "--debug" => options.debug_overlay = true,
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'birb --help' for usage.");
            std::process::exit(1);
        }
    };

    match options.command {
        Some(CliCommand::Version) => {
            println!(
                "birb {} ({})",
                build_info::BUILD_DATE,
                build_info::BUILD_COMMIT
            );
            return Ok(());
        }
        Some(CliCommand::Help) => {
            println!("Flappy Birb - Terminal Flappy Bird Clone\n");
            println!("Usage: birb [options]\n");
            println!("Options:");
            println!("  --seed N   Seed the pipe generator (reproducible runs)");
            println!("  --debug    Start with the debug overlay enabled");
            println!("  --version  Show version information");
            println!("  --help     Show this help message");
            println!("\nControls: Space/Up/Enter flap, D toggles debug, Q/Esc quits.");
            return Ok(());
        }
        None => {}
    }

    let mut debug_overlay = options.debug_overlay;
    let mut rng = match options.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Playfield dimensions derive from the terminal surface and are
    // re-sampled every frame, so resizes flow into the simulation.
    let size = terminal.size()?;
    let (width, height) = ui::game_scene::playfield_size(ui::game_scene::play_area(size));
    let mut game = GameState::new(&mut rng, width, height);

    let mut last_frame = Instant::now();
    let mut accumulated_ms: u64 = 0;

    // Main loop
    loop {
        let size = terminal.size()?;
        let play = ui::game_scene::play_area(size);
        let (width, height) = ui::game_scene::playfield_size(play);

        // Handle input
        if event::poll(Duration::from_millis(5))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('d') => debug_overlay = !debug_overlay,
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                        if game.game_over {
                            reset(&mut game, &mut rng, width, height);
                            accumulated_ms = 0;
                        } else {
                            jump(&mut game);
                        }
                    }
                    _ => {
                        // Any other key restarts from the game-over screen
                        if game.game_over {
                            reset(&mut game, &mut rng, width, height);
                            accumulated_ms = 0;
                        }
                    }
                }
            }
        }

        // Fixed-timestep physics: drain elapsed time in 16ms ticks
        let dt_ms = (last_frame.elapsed().as_millis() as u64).min(MAX_FRAME_MS);
        last_frame = Instant::now();
        accumulated_ms += dt_ms;
        while accumulated_ms >= TICK_INTERVAL_MS {
            accumulated_ms -= TICK_INTERVAL_MS;
            step(&mut game, &mut rng, width, height);
            if game.game_over {
                break;
            }
        }

        terminal.draw(|frame| {
            ui::game_scene::render(frame, frame.size(), &game, debug_overlay);
        })?;
    }

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("birb")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_defaults() {
        let options = parse_args(&args(&[])).unwrap();
        assert_eq!(options.seed, None);
        assert!(!options.debug_overlay);
        assert_eq!(options.command, None);
    }

    #[test]
    fn test_parse_seed_and_debug() {
        let options = parse_args(&args(&["--seed", "42", "--debug"])).unwrap();
        assert_eq!(options.seed, Some(42));
        assert!(options.debug_overlay);
    }

    #[test]
    fn test_malformed_seed_is_an_error() {
        let err = parse_args(&args(&["--seed", "banana"])).unwrap_err();
        assert!(err.contains("Invalid seed"), "got: {}", err);
    }

    #[test]
    fn test_missing_seed_value_is_an_error() {
        let err = parse_args(&args(&["--seed"])).unwrap_err();
        assert!(err.contains("--seed requires a value"), "got: {}", err);
    }

    #[test]
    fn test_unknown_option_is_an_error() {
        let err = parse_args(&args(&["--frobnicate"])).unwrap_err();
        assert!(err.contains("Unknown option"), "got: {}", err);
    }

    #[test]
    fn test_version_and_help_flags() {
        let options = parse_args(&args(&["--version"])).unwrap();
        assert_eq!(options.command, Some(CliCommand::Version));
        let options = parse_args(&args(&["-h"])).unwrap();
        assert_eq!(options.command, Some(CliCommand::Help));
    }
}
