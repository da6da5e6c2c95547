use ggez::event::{self, EventHandler};
use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{self, Color, DrawMode, DrawParam, Mesh, Text};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameError, GameResult};
use pong_physics::objects::Direction;
use pong_physics::shapes::Rect;

use crate::game::{Game, GameState, Input};

const BACKGROUND: Color = Color { r: 8.0 / 255.0, g: 20.0 / 255.0, b: 32.0 / 255.0, a: 1.0 };
const BALL_COLOR: Color = Color { r: 1.0, g: 0.85, b: 0.3, a: 1.0 };
const PADDLE_COLOR: Color = Color { r: 0.9, g: 0.9, b: 0.95, a: 1.0 };
const SCORE_COLOR: Color = Color { r: 24.0 / 255.0, g: 144.0 / 255.0, b: 192.0 / 255.0, a: 1.0 };

// Up, down, serve for each player
const KEYS: [[KeyCode; 3]; 2] = [
    [KeyCode::W, KeyCode::S, KeyCode::D],
    [KeyCode::Up, KeyCode::Down, KeyCode::Left],
];

struct MainState {
    game: Game,
}

impl MainState {
    fn new() -> GameResult<MainState> {
        let game = Game::new().map_err(|e| GameError::CustomError(e.to_string()))?;
        Ok(MainState { game })
    }

    fn poll_input(ctx: &Context) -> Input {
        let keyboard = &ctx.keyboard;
        let mut input = Input { start: keyboard.is_key_pressed(KeyCode::Space), ..Default::default() };
        for (i, [up, down, serve]) in KEYS.iter().enumerate() {
            input.movement[i] = if keyboard.is_key_pressed(*up) {
                Direction::Up
            } else if keyboard.is_key_pressed(*down) {
                Direction::Down
            } else {
                Direction::Still
            };
            input.serve[i] = keyboard.is_key_pressed(*serve);
        }
        input
    }
}

fn draw_rect(ctx: &mut Context, canvas: &mut graphics::Canvas, rect: &Rect, color: Color) -> GameResult {
    let tl = rect.top_left();
    let mesh = Mesh::new_rectangle(
        ctx,
        DrawMode::fill(),
        graphics::Rect::new(tl.x as f32, tl.y as f32, rect.size.x as f32, rect.size.y as f32),
        color,
    )?;
    canvas.draw(&mesh, DrawParam::new());
    Ok(())
}

fn draw_text(canvas: &mut graphics::Canvas, text: &str, x: f32, y: f32, color: Color) {
    let mut text = Text::new(text);
    text.set_scale(28.0);
    canvas.draw(&text, DrawParam::new().dest(GVec2::new(x, y)).color(color));
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let dt = ctx.time.delta().as_secs_f64();
        let input = Self::poll_input(ctx);
        self.game.update(&input, dt);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, BACKGROUND);
        let court = &self.game.court;
        let width = court.layout().screen_size.x as f32;

        if self.game.state != GameState::GameOver {
            draw_rect(ctx, &mut canvas, &court.ball.rect, BALL_COLOR)?;
        }
        if self.game.state != GameState::Menu {
            for paddle in &court.paddles {
                // Drawn at the smoothed position
                let drawn = Rect::new(paddle.render_center, paddle.rect().size);
                draw_rect(ctx, &mut canvas, &drawn, PADDLE_COLOR)?;
            }
        }

        match self.game.state {
            GameState::Menu => {
                draw_text(&mut canvas, "pong.", width * 0.45, 200.0, BALL_COLOR);
                draw_text(&mut canvas, "Press Space to begin", width * 0.35, 300.0, PADDLE_COLOR);
            }
            GameState::Serving | GameState::InGame => {
                draw_text(&mut canvas, &self.game.lives[0].to_string(), width * 0.25, 340.0, SCORE_COLOR);
                draw_text(&mut canvas, &self.game.lives[1].to_string(), width * 0.75, 340.0, SCORE_COLOR);
                if self.game.state == GameState::Serving {
                    draw_text(&mut canvas, "press D / Left to serve", width * 0.36, 200.0, SCORE_COLOR);
                }
            }
            GameState::GameOver => {
                draw_text(&mut canvas, "Game Over", width * 0.42, 280.0, Color::RED);
                draw_text(&mut canvas, "winner serves to continue", width * 0.34, 380.0, SCORE_COLOR);
            }
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        if input.keycode == Some(KeyCode::Escape) {
            ctx.request_quit();
        }
        Ok(())
    }
}

pub fn run_visual() -> GameResult {
    let size = pong_physics::CourtLayout::default().screen_size;
    let cb = ggez::ContextBuilder::new("pong_demo", "pong")
        .window_setup(ggez::conf::WindowSetup::default().title("pong.").vsync(false))
        .window_mode(ggez::conf::WindowMode::default().dimensions(size.x as f32, size.y as f32));

    let (ctx, event_loop) = cb.build()?;
    let state = MainState::new()?;
    event::run(ctx, event_loop, state)
}
