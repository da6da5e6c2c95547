use pong_physics::objects::Direction;
use std::env;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod game;
mod visual;

use game::{Game, Input};

/// Our crates log at info, everything else at warn. `RUST_LOG` directives are
/// appended, so they win.
const DEFAULT_FILTER: &str = "warn,pong_physics=info,pong_demo=info";

fn main() {
    let args: Vec<String> = env::args().collect();

    let filter = log_filter(env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not install logger: {}", e);
    }

    if args.len() > 1 && args[1] == "headless" {
        let frames = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(600);
        run_headless(frames);
        return;
    }

    if let Err(e) = visual::run_visual() {
        eprintln!("Error running pong: {}", e);
    }
}

fn log_filter(env_filter: Option<&str>) -> String {
    let mut filter = DEFAULT_FILTER.to_owned();
    if let Some(extra) = env_filter.filter(|f| !f.is_empty()) {
        filter.push(',');
        filter.push_str(extra);
    }
    filter
}

/// Plays a scripted rally without a window: both players track the ball.
fn run_headless(frames: usize) {
    let mut game = match Game::new() {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Invalid court: {}", e);
            return;
        }
    };
    game.update(&Input { start: true, ..Default::default() }, 0.0);

    let dt = 1.0 / 165.0;
    for frame in 0..frames {
        let ball_y = game.court.ball.center().y;
        let mut input = Input { serve: [true, true], ..Default::default() };
        for (i, paddle) in game.court.paddles.iter().enumerate().take(2) {
            input.movement[i] = Direction::from_axis((ball_y - paddle.rect().center.y).signum() as i32);
        }
        game.update(&input, dt);

        if frame % 60 == 0 {
            let pos = game.court.ball.center();
            println!(
                "Frame {}: {:?} ball ({:.2}, {:.2}) speed {:.1} lives {:?}",
                frame,
                game.state,
                pos.x,
                pos.y,
                game.court.ball.speed(),
                game.lives
            );
        }
    }
    println!("Finished after {} frames", frames);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_appends_env_directives() {
        assert_eq!(log_filter(None), DEFAULT_FILTER);
        assert_eq!(log_filter(Some("")), DEFAULT_FILTER);
        assert_eq!(
            log_filter(Some("pong_physics=trace")),
            "warn,pong_physics=info,pong_demo=info,pong_physics=trace"
        );
        // Parses as a valid filter either way
        assert!(EnvFilter::try_new(log_filter(Some("pong_physics=debug"))).is_ok());
    }
}
