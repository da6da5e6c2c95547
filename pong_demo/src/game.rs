//! Round bookkeeping around the physics court: who is serving, lives, and
//! which screen is showing.

use pong_physics::objects::Direction;
use pong_physics::world::{Court, PlayMode, Side};
use pong_physics::{CourtLayout, PhysicsConfig};

pub const STARTING_LIVES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Serving,
    InGame,
    GameOver,
}

/// One frame of player input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Input {
    pub movement: [Direction; 2],
    pub serve: [bool; 2],
    pub start: bool,
}

pub struct Game {
    pub court: Court,
    pub state: GameState,
    pub lives: [u32; 2],
    pub winner: usize,
}

impl Game {
    pub fn new() -> pong_physics::Result<Self> {
        Ok(Self {
            court: Court::new(CourtLayout::default(), PhysicsConfig::default())?,
            state: GameState::Menu,
            lives: [STARTING_LIVES; 2],
            winner: 0,
        })
    }

    pub fn update(&mut self, input: &Input, dt: f64) {
        match self.state {
            GameState::Menu => {
                self.court.step_ball(PlayMode::Attract, dt);
                if input.start {
                    self.state = GameState::Serving;
                }
            }
            GameState::Serving => {
                self.court.drive_paddles(&input.movement, dt);
                self.serve(input);
            }
            GameState::InGame => {
                self.court.drive_paddles(&input.movement, dt);
                self.court.step_ball(PlayMode::Rally, dt);
                if let Some(side) = self.court.check_miss() {
                    self.miss(side);
                }
            }
            GameState::GameOver => {
                if input.serve[self.winner] {
                    self.back_to_menu();
                }
            }
        }
    }

    fn serve(&mut self, input: &Input) {
        for i in 0..self.court.paddles.len().min(2) {
            if !self.court.track_serve(i) {
                continue;
            }
            if input.serve[i] && self.court.launch(i, input.movement[i]) {
                self.state = GameState::InGame;
            }
        }
    }

    fn miss(&mut self, side: Side) {
        let (loser, winner) = match side {
            Side::Left => (0, 1),
            Side::Right => (1, 0),
        };
        self.lives[loser] = self.lives[loser].saturating_sub(1);
        if self.lives[loser] == 0 {
            self.state = GameState::GameOver;
            self.winner = winner;
            tracing::info!(winner, "game over");
        } else {
            self.state = GameState::Serving;
        }
        self.court.award_serve(side);
    }

    fn back_to_menu(&mut self) {
        self.lives = [STARTING_LIVES; 2];
        self.court.reset_ball();
        self.court.award_serve(Side::Left);
        self.state = GameState::Menu;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pong_physics::math::vec2::Vec2;

    fn serve_left() -> Input {
        Input { serve: [true, false], ..Default::default() }
    }

    #[test]
    fn test_menu_to_serving() {
        let mut game = Game::new().unwrap();
        game.update(&Input::default(), 0.016);
        assert_eq!(game.state, GameState::Menu);
        game.update(&Input { start: true, ..Default::default() }, 0.016);
        assert_eq!(game.state, GameState::Serving);
    }

    #[test]
    fn test_serve_starts_rally() {
        let mut game = Game::new().unwrap();
        game.state = GameState::Serving;
        game.update(&Input::default(), 0.016);
        assert_eq!(game.state, GameState::Serving);
        assert_eq!(game.court.ball.center(), Vec2::new(168.0, 360.0));

        game.update(&serve_left(), 0.016);
        assert_eq!(game.state, GameState::InGame);
        assert!(game.court.ball.velocity.x > 0.0);
    }

    #[test]
    fn test_miss_costs_a_life_and_ends_game() {
        let mut game = Game::new().unwrap();
        game.state = GameState::InGame;
        for expected in [2, 1] {
            game.court.ball.rect.center = Vec2::new(-100.0, 360.0);
            game.court.ball.velocity = Vec2::new(-10.0, 0.0);
            game.update(&Input::default(), 0.016);
            assert_eq!(game.lives[0], expected);
            assert_eq!(game.state, GameState::Serving);
            game.state = GameState::InGame;
        }
        game.court.ball.rect.center = Vec2::new(-100.0, 360.0);
        game.update(&Input::default(), 0.016);
        assert_eq!(game.state, GameState::GameOver);
        assert_eq!(game.winner, 1);

        // Only the winner can dismiss the screen
        game.update(&serve_left(), 0.016);
        assert_eq!(game.state, GameState::GameOver);
        game.update(&Input { serve: [false, true], ..Default::default() }, 0.016);
        assert_eq!(game.state, GameState::Menu);
        assert_eq!(game.lives, [STARTING_LIVES; 2]);
    }
}
