pub mod compass_draw;
pub mod console;
pub mod rover_draw;

#[cfg(target_arch = "wasm32")]
use macroquad::miniquad;
use macroquad::prelude::*;
use rover_core::{Command, InputFilter, Outcome, RoverConfig, RoverController, RoverState};
use std::sync::atomic::{AtomicU32, Ordering};

use crate::compass_draw::{NeedleTween, draw_compass};
use crate::console::{Console, Submission, readout_lines};
use crate::rover_draw::{RoverDrawConfig, draw_rover};

const PAGE_MARGIN: f32 = 20.0;
const COMPASS_RADIUS: f32 = 60.0;
const COMPASS_GAP: f32 = 10.0;
const FORM_GAP: f32 = 40.0;
const FORM_PADDING: f32 = 20.0;
const FORM_BORDER: f32 = 4.0;
const FORM_HEIGHT: f32 = 210.0;
const BRAND_COLOR: Color = Color::from_rgba(117, 25, 0, 255);
const INPUT_TEXT_COLOR: Color = Color::from_rgba(242, 215, 215, 255);
const GRID_LINE_COLOR: Color = Color::from_rgba(190, 60, 40, 255);
const FORM_TEXT_COLOR: Color = Color::from_rgba(139, 0, 0, 255);

// 0 means "nothing queued"; any other value is a Unicode scalar from the host page.
static PENDING_CHAR: AtomicU32 = AtomicU32::new(0);

/// Lets the host page forward a character typed into its own input field.
/// Only the first character queued within a frame is kept.
#[unsafe(no_mangle)]
pub extern "C" fn rover_submit_char(code: u32) {
    let _ = PENDING_CHAR.compare_exchange(0, code, Ordering::SeqCst, Ordering::SeqCst);
}

fn take_pending_char() -> Option<char> {
    match PENDING_CHAR.swap(0, Ordering::SeqCst) {
        0 => None,
        code => char::from_u32(code),
    }
}

pub fn log_ui_action(label: &str) {
    #[cfg(target_arch = "wasm32")]
    miniquad::info!("{}", label);
    #[cfg(not(target_arch = "wasm32"))]
    println!("{}", label);
}

pub struct GameState {
    controller: RoverController,
    console: Console,
    needle: NeedleTween,
    rover_draw: RoverDrawConfig,
}

impl GameState {
    pub fn new(config: &RoverConfig) -> Self {
        let controller = match RoverController::from_config(config) {
            Ok(controller) => controller,
            Err(err) => {
                log_ui_action(&format!("{}; using default rover config", err));
                RoverController::default()
            }
        };
        let filter = if config.allow_backward {
            InputFilter::with_backward()
        } else {
            InputFilter::default()
        };

        Self {
            needle: NeedleTween::settled(controller.state().heading.needle_degrees()),
            controller,
            console: Console::new(filter),
            rover_draw: RoverDrawConfig::default(),
        }
    }

    pub fn state(&self) -> RoverState {
        self.controller.state()
    }

    pub fn handle_char(&mut self, input: char, now: f64) -> Option<Outcome> {
        match self.console.submit(input, now) {
            Submission::Accepted(command) => Some(self.execute(command, now)),
            Submission::Locked => {
                log_ui_action(&format!("input locked, dropped {:?}", input));
                None
            }
            Submission::Disallowed(_) => None,
        }
    }

    fn execute(&mut self, command: Command, now: f64) -> Outcome {
        let (state, outcome) = self.controller.apply_command_reporting(command);
        match outcome {
            Outcome::Blocked => log_ui_action(&format!(
                "{:?} blocked at ({}, {}) heading {}",
                command,
                state.position.x,
                state.position.y,
                state.heading.degrees()
            )),
            _ => log_ui_action(&format!(
                "{:?}: ({}, {}) heading {}",
                command,
                state.position.x,
                state.position.y,
                state.heading.degrees()
            )),
        }
        if !command.is_move() {
            self.needle.retarget(state.heading.needle_degrees(), now);
        }
        outcome
    }

    pub fn handle_keyboard(&mut self, now: f64) {
        while let Some(input) = get_char_pressed() {
            self.handle_char(input, now);
        }
        if let Some(input) = take_pending_char() {
            self.handle_char(input, now);
        }
    }

    pub fn update(&mut self, now: f64) {
        self.console.update(now);
    }

    fn grid_origin(&self) -> Vec2 {
        let extent = self.controller.grid().extent() as f32;
        let content_width = extent + COMPASS_GAP + COMPASS_RADIUS * 2.0;
        let x = ((screen_width() - content_width) * 0.5).max(PAGE_MARGIN);
        let content_height = extent + FORM_GAP + FORM_HEIGHT;
        let y = ((screen_height() - content_height) * 0.5).max(PAGE_MARGIN);
        vec2(x, y)
    }

    pub fn render(&self, now: f64) {
        clear_background(Color::from_rgba(245, 236, 230, 255));
        let origin = self.grid_origin();
        self.draw_grid(origin);
        self.draw_rover(origin);

        let extent = self.controller.grid().extent() as f32;
        let compass_center = vec2(
            origin.x + extent + COMPASS_GAP + COMPASS_RADIUS,
            origin.y + COMPASS_RADIUS,
        );
        draw_compass(compass_center, COMPASS_RADIUS, self.needle.angle_at(now));

        self.draw_form(vec2(origin.x, origin.y + extent + FORM_GAP), extent);
    }

    fn draw_grid(&self, origin: Vec2) {
        let grid = self.controller.grid();
        let extent = grid.extent() as f32;
        let cell = grid.cell_size() as f32;
        draw_rectangle(origin.x, origin.y, extent, extent, WHITE);
        for i in 0..=grid.cells_per_axis() {
            let offset = i as f32 * cell;
            draw_line(
                origin.x + offset,
                origin.y,
                origin.x + offset,
                origin.y + extent,
                1.0,
                GRID_LINE_COLOR,
            );
            draw_line(
                origin.x,
                origin.y + offset,
                origin.x + extent,
                origin.y + offset,
                1.0,
                GRID_LINE_COLOR,
            );
        }
    }

    fn draw_rover(&self, origin: Vec2) {
        let state = self.controller.state();
        let cell = self.controller.grid().cell_size() as f32;
        let center = origin
            + vec2(state.position.x as f32, state.position.y as f32)
            + vec2(cell * 0.5, cell * 0.5);
        draw_rover(center, cell, state.heading.sprite_degrees(), &self.rover_draw);
    }

    fn draw_form(&self, top_left: Vec2, width: f32) {
        draw_rectangle(top_left.x, top_left.y, width, FORM_HEIGHT, WHITE);
        draw_rectangle_lines(
            top_left.x,
            top_left.y,
            width,
            FORM_HEIGHT,
            FORM_BORDER * 2.0,
            BRAND_COLOR,
        );

        let left = top_left.x + FORM_PADDING;
        let right = top_left.x + width - FORM_PADDING;
        let mut y = top_left.y + FORM_PADDING + 20.0;
        draw_text("Coordinates:", left, y, 26.0, FORM_TEXT_COLOR);
        let status = self.console.status_line();
        let status_size = measure_text(status, None, 22, 1.0);
        draw_text(status, right - status_size.width, y, 22.0, FORM_TEXT_COLOR);

        y += 20.0;
        let input_height = 40.0;
        draw_rectangle(left, y, right - left, input_height, BRAND_COLOR);
        if let Some(echoed) = self.console.echoed() {
            draw_text(
                &echoed.to_string(),
                left + 10.0,
                y + 28.0,
                26.0,
                INPUT_TEXT_COLOR,
            );
        } else if (get_time() * 2.0) as i64 % 2 == 0 {
            draw_line(left + 10.0, y + 8.0, left + 10.0, y + 32.0, 2.0, INPUT_TEXT_COLOR);
        }

        y += input_height + 30.0;
        for line in readout_lines(&self.controller.state()) {
            draw_text(&line, left, y, 22.0, BLACK);
            y += 24.0;
        }
    }
}

pub async fn run(config: RoverConfig) {
    install_panic_hook();
    let mut game = GameState::new(&config);

    loop {
        let now = get_time();
        game.update(now);
        game.handle_keyboard(now);
        game.render(now);

        next_frame().await;
    }
}

#[cfg(target_arch = "wasm32")]
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if let Some(location) = info.location() {
            miniquad::error!("panic at {}:{}: {}", location.file(), location.line(), msg);
        } else {
            miniquad::error!("panic: {}", msg);
        }
    }));
}

#[cfg(not(target_arch = "wasm32"))]
fn install_panic_hook() {}

#[cfg(test)]
mod tests {
    use super::*;
    use rover_core::{MoveStrategy, Position};

    #[test]
    fn keystrokes_drive_the_rover_with_input_lock() {
        let mut game = GameState::new(&RoverConfig::default());

        assert_eq!(game.handle_char('r', 0.0), Some(Outcome::Turned));
        assert_eq!(game.handle_char('f', 0.1), None);
        game.update(0.5);
        assert_eq!(game.handle_char('f', 0.6), Some(Outcome::Moved));

        let state = game.state();
        assert_eq!(state.position, Position::new(250, 250));
        assert_eq!(state.heading.degrees(), 90);
    }

    #[test]
    fn backward_key_is_ignored_unless_enabled() {
        let mut game = GameState::new(&RoverConfig::default());
        assert_eq!(game.handle_char('b', 0.0), None);
        assert_eq!(game.state(), RoverState::default());

        let config = RoverConfig {
            allow_backward: true,
            move_strategy: MoveStrategy::Reversing,
            ..RoverConfig::default()
        };
        let mut game = GameState::new(&config);
        assert_eq!(game.handle_char('b', 0.0), Some(Outcome::Moved));
        assert_eq!(game.state().position, Position::new(200, 300));
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let mut config = RoverConfig::default();
        config.start.position = Position::new(1000, 0);
        let game = GameState::new(&config);
        assert_eq!(game.state(), RoverState::default());
    }

    #[test]
    fn pending_host_char_keeps_first_and_is_taken_once() {
        rover_submit_char('L' as u32);
        rover_submit_char('F' as u32);
        assert_eq!(take_pending_char(), Some('L'));
        assert_eq!(take_pending_char(), None);

        rover_submit_char('R' as u32);
        assert_eq!(take_pending_char(), Some('R'));
    }

    #[test]
    fn only_turns_retarget_the_compass() {
        let mut game = GameState::new(&RoverConfig::default());
        game.handle_char('f', 0.0);
        assert_eq!(game.needle, NeedleTween::settled(0.0));

        game.update(1.0);
        game.handle_char('l', 1.0);
        assert_eq!(game.needle.angle_at(2.0), 90.0);
    }
}
