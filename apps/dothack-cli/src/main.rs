use clap::{Parser, Subcommand, ValueEnum};
use dothack_input::Action;
use dothack_kernel::{Game, GameConfig, LoopState};
use dothack_render::tiles::{TileWindow, is_checker_tile};
use dothack_render::{DebugTextRenderer, Renderer, Scene, Viewport};
use glam::{IVec2, Vec2};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dothack-cli", about = "Headless tool for dothack")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run the game loop without a window and print the final frame
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "600")]
        frames: u32,
        /// Seconds per frame
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,
        /// Direction held for the whole run
        #[arg(short, long = "move", value_enum, default_value_t = Direction::None)]
        direction: Direction,
        /// Print the world as JSON instead of the frame summary
        #[arg(long)]
        json: bool,
    },
    /// Draw the checkerboard around a world position
    Tiles {
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        x: f32,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        y: f32,
        /// Tiles on each side of the reference tile
        #[arg(short, long, default_value = "8")]
        radius: i32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Direction {
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    fn vector(self) -> Vec2 {
        match self {
            Direction::None => Vec2::ZERO,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
        }
    }
}

/// Run `frames` frames holding `direction`. Stops early if the game exits.
fn simulate(frames: u32, dt: f32, direction: Direction) -> Game {
    let mut game = Game::new(GameConfig::default());
    let dir = direction.vector();
    let actions: Vec<Action> = if dir == Vec2::ZERO {
        Vec::new()
    } else {
        vec![Action::Move(dir)]
    };
    for _ in 0..frames {
        if game.frame(&actions, dt) == LoopState::Exited {
            break;
        }
    }
    game
}

/// One character per tile, rows top to bottom: `#` drawn, `.` skipped,
/// `@` the reference tile.
fn tile_map(window: &TileWindow) -> String {
    let mut out = String::new();
    for y in window.y_range() {
        for x in window.x_range() {
            let tile = IVec2::new(x, y);
            let c = if tile == window.center {
                '@'
            } else if is_checker_tile(tile) {
                '#'
            } else {
                '.'
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("dothack-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", dothack_common::crate_info());
            println!("input: {}", dothack_input::crate_info());
            println!("kernel: {}", dothack_kernel::crate_info());
            println!("render: {}", dothack_render::crate_info());
            println!("assets: {}", dothack_assets::crate_info());
        }
        Commands::Simulate {
            frames,
            dt,
            direction,
            json,
        } => {
            anyhow::ensure!(dt >= 0.0 && dt.is_finite(), "--dt must be a non-negative number");
            tracing::info!(frames, dt, ?direction, "simulating");
            let game = simulate(frames, dt, direction);

            if json {
                println!("{}", serde_json::to_string_pretty(game.world())?);
            } else {
                let frame = Scene::new(Viewport::DEFAULT).compose(&game);
                print!("{}", DebugTextRenderer::new().render(&frame));
                println!("{}", game.world().summary());
            }
            println!("State hash: {:#018x}", game.world().state_hash());
        }
        Commands::Tiles { x, y, radius } => {
            anyhow::ensure!(radius > 0, "--radius must be positive");
            let window = TileWindow::with_radius(Vec2::new(x, y), IVec2::splat(radius));
            println!(
                "Tiles around ({x}, {y}) -> tile ({}, {})",
                window.center.x, window.center.y
            );
            print!("{}", tile_map(&window));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_runs_every_frame() {
        let game = simulate(30, 1.0 / 60.0, Direction::None);
        assert_eq!(game.world().tick(), 30);
        assert_eq!(game.state(), LoopState::Running);
    }

    #[test]
    fn simulate_moves_player() {
        let game = simulate(60, 0.5, Direction::Left);
        let player = game.world().player().map(|p| p.position);
        assert_eq!(player, Some(Vec2::new(-3000.0, 0.0)));
    }

    #[test]
    fn simulate_is_deterministic() {
        let a = simulate(120, 1.0 / 60.0, Direction::Down);
        let b = simulate(120, 1.0 / 60.0, Direction::Down);
        assert_eq!(a.world().state_hash(), b.world().state_hash());
    }

    #[test]
    fn tile_map_marks_reference_and_checker() {
        let window = TileWindow::with_radius(Vec2::ZERO, IVec2::splat(2));
        let map = tile_map(&window);
        let rows: Vec<&str> = map.lines().collect();
        assert_eq!(rows.len(), 4);
        // Rows y = -2..2, columns x = -2..2; reference tile (0, 0) is row 2, column 2.
        assert_eq!(rows[2], ".#@#");
        assert_eq!(rows[1], "#.#.");
    }

    #[test]
    fn tile_map_far_from_origin_does_not_overflow() {
        let window = TileWindow::with_radius(Vec2::new(1.0e12, 0.0), IVec2::splat(1));
        assert_eq!(window.center.x, i32::MAX);
        let map = tile_map(&window);
        // The column range is clipped at i32::MAX, leaving one column per row.
        let rows: Vec<&str> = map.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == 1));
    }
}
