//! Headless Bounce Demo
//!
//! Simulates a ball bouncing around a tiled arena without opening a window:
//! - Border of 32x32 rect tiles, plus a few loose blocks in the middle
//! - Circle ball launched at a seeded random angle
//! - Fixed time step, or the wall clock with an fps limit; every bounce is logged
//! - A scripted Escape press ends the run, drained like window input
//!
//! Usage: `bounce [config.toml|config.ron] [ticks] [seed] [fps]`
//!
//! An `fps` of 0 (the default) steps by a fixed amount as fast as possible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shade_engine::foundation::logging;
use shade_engine::prelude::*;

// Arena settings
const ARENA_WIDTH: f32 = 640.0;
const ARENA_HEIGHT: f32 = 480.0;
const TILE: f32 = 32.0;

// Ball settings
const BALL_RADIUS: f32 = 8.0;
const BALL_SPEED: f32 = 240.0;

// Simulation settings
const TIME_STEP: f32 = 1.0 / 30.0;
const DEFAULT_TICKS: u64 = 900;
const DEFAULT_SEED: u64 = 0x5EED;
const DEFAULT_FPS: u32 = 0;

#[derive(thiserror::Error, Debug)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Events(#[from] EventError),

    #[error("invalid argument {name}: {value:?}")]
    InvalidArgument { name: &'static str, value: String },
}

struct Tile {
    pos: Vec3,
}

impl Collider for Tile {
    fn position(&self) -> Vec3 {
        self.pos
    }

    fn shape(&self) -> Shape {
        Shape::rect(0.0, TILE, 0.0, TILE)
    }
}

struct Ball {
    motion: Motion,
    shape: Shape,
}

impl Collider for Ball {
    fn position(&self) -> Vec3 {
        self.motion.position
    }

    fn shape(&self) -> Shape {
        self.shape
    }
}

impl Ball {
    fn launch(rng: &mut StdRng) -> Self {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let velocity = Vec2::new(angle.cos(), angle.sin()) * BALL_SPEED;
        Self {
            motion: Motion::new(Vec3::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0, 1.0), velocity),
            shape: Shape::circle(0.0, 0.0, BALL_RADIUS),
        }
    }

    /// Move one step and bounce off anything hit. Returns the reflected axes.
    fn update(&mut self, dt: f32, tiles: &[Tile], policy: HitPolicy) -> ReflectAxes {
        let previous = self.motion.step(dt);

        let mut axes = policy.resolve(&collide(&*self, tiles));

        // Escaped through a corner seam: keep it inside the arena anyway
        let pos = self.motion.position;
        let mut escaped = ReflectAxes::empty();
        if pos.x < 0.0 || pos.x > ARENA_WIDTH {
            escaped |= ReflectAxes::X;
        }
        if pos.y < 0.0 || pos.y > ARENA_HEIGHT {
            escaped |= ReflectAxes::Y;
        }
        if !escaped.is_empty() {
            log::warn!(
                "Ball left the arena at ({:.1}, {:.1}) without a tile hit, reflecting {:?}",
                pos.x,
                pos.y,
                escaped
            );
            axes |= escaped;
        }

        self.motion.bounce(&previous, axes);
        axes
    }
}

/// Where each tick's time step comes from
enum Stepper {
    /// Constant step, as fast as the machine allows
    Fixed,
    /// Wall clock, limited to `fps` ticks per second
    Realtime { clock: Clock, fps: u32 },
}

impl Stepper {
    fn new(fps: u32) -> Self {
        if fps == 0 {
            Self::Fixed
        } else {
            Self::Realtime {
                clock: Clock::new(),
                fps,
            }
        }
    }

    /// Seconds to advance this tick
    fn next_step(&mut self) -> f32 {
        match self {
            Self::Fixed => TIME_STEP,
            // Capped so a throttled tick cannot carry the ball through a tile
            Self::Realtime { clock, fps } => (clock.tick(*fps) / 1000.0).min(TIME_STEP),
        }
    }
}

fn build_arena() -> Vec<Tile> {
    let cols = (ARENA_WIDTH / TILE) as u32;
    let rows = (ARENA_HEIGHT / TILE) as u32;

    let mut tiles = Vec::new();
    for col in 0..cols {
        for row in 0..rows {
            if col == 0 || row == 0 || col == cols - 1 || row == rows - 1 {
                tiles.push(Tile {
                    pos: Vec3::new(col as f32 * TILE, row as f32 * TILE, 0.0),
                });
            }
        }
    }

    // A few loose blocks to make the path interesting
    for (col, row) in [(5, 4), (6, 4), (13, 10), (9, 11)] {
        tiles.push(Tile {
            pos: Vec3::new(col as f32 * TILE, row as f32 * TILE, 0.0),
        });
    }

    tiles
}

struct BounceApp {
    config: EngineConfig,
    events: EventQueue,
    tiles: Vec<Tile>,
    ball: Ball,
    stepper: Stepper,
    bounces: u64,
}

impl BounceApp {
    fn new(config: EngineConfig, seed: u64, fps: u32) -> Result<Self, AppError> {
        config.validate()?;
        let events = config.events.build_queue()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let ball = Ball::launch(&mut rng);

        log::info!(
            "Ball launched from {:?} with velocity {:?} (policy {:?})",
            ball.motion.position,
            ball.motion.velocity,
            config.physics.hit_policy
        );

        Ok(Self {
            config,
            events,
            tiles: build_arena(),
            ball,
            stepper: Stepper::new(fps),
            bounces: 0,
        })
    }

    fn run(mut self, max_ticks: u64) -> Result<(), AppError> {
        let mut tick = 0;
        let mut running = true;

        while running {
            // Stand-in for the window's key callback
            if tick == max_ticks {
                self.events.push(KeyEvent::new(KeyCode::Escape, KeyAction::Press))?;
            }

            for event in self.events.drain() {
                if event.is_down(KeyCode::Escape) {
                    running = false;
                }
            }
            if !running {
                break;
            }

            let dt = self.stepper.next_step();
            let axes = self
                .ball
                .update(dt, &self.tiles, self.config.physics.hit_policy);
            if !axes.is_empty() {
                self.bounces += 1;
                log::info!(
                    "tick {tick}: bounce {:?} at ({:.1}, {:.1})",
                    axes,
                    self.ball.motion.position.x,
                    self.ball.motion.position.y
                );
            }

            tick += 1;
        }

        log::info!(
            "Stopped after {tick} ticks with {} bounces, ball at ({:.1}, {:.1})",
            self.bounces,
            self.ball.motion.position.x,
            self.ball.motion.position.y
        );
        Ok(())
    }
}

fn parse_arg<T: std::str::FromStr>(
    value: Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, AppError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| AppError::InvalidArgument { name, value }),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => EngineConfig::load_from_file(&path).map_err(AppError::from)?,
        None => EngineConfig::default(),
    };
    logging::init_with_level(&config.log_level);

    let ticks = parse_arg(args.next(), "ticks", DEFAULT_TICKS)?;
    let seed = parse_arg(args.next(), "seed", DEFAULT_SEED)?;
    let fps = parse_arg(args.next(), "fps", DEFAULT_FPS)?;

    let app = BounceApp::new(config, seed, fps)?;
    app.run(ticks)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_outside_arena_is_reflected_without_tiles() {
        let mut ball = Ball {
            motion: Motion::new(Vec3::new(ARENA_WIDTH - 1.0, 100.0, 1.0), Vec2::new(60.0, 0.0)),
            shape: Shape::circle(0.0, 0.0, BALL_RADIUS),
        };

        let axes = ball.update(TIME_STEP, &[], HitPolicy::All);

        assert_eq!(axes, ReflectAxes::X);
        assert_eq!(ball.motion.velocity, Vec2::new(-60.0, 0.0));
        assert_eq!(ball.motion.position.x, ARENA_WIDTH - 1.0);
    }

    #[test]
    fn test_stepper_modes() {
        assert_eq!(Stepper::new(0).next_step(), TIME_STEP);

        let mut realtime = Stepper::new(60);
        assert_eq!(realtime.next_step(), 0.0);
        assert!(realtime.next_step() <= TIME_STEP);
    }

    #[test]
    fn test_run_stops_on_scripted_escape() {
        let app = BounceApp::new(EngineConfig::default(), DEFAULT_SEED, 0).unwrap();
        assert!(app.run(30).is_ok());
    }
}
