//! Movement and turning rules.

use termcaster::core::{Controller, Grid, MoveOutcome, Player};
use termcaster::types::{Command, Vec2f, PLAYER_STEP};

fn approx(a: Vec2f, b: Vec2f) -> bool {
    (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
}

#[test]
fn forward_into_wall_is_rolled_back() {
    // Wall row at x = 4; one step from 3.8 lands at 4.05.
    let grid = Grid::bordered(5, 5);
    let mut player = Player::new(Vec2f::new(3.8, 2.5), Vec2f::new(1.0, 0.0));
    let before = player.position();

    assert_eq!(player.apply(Command::MoveForward, &grid), MoveOutcome::Blocked);
    assert_eq!(player.position(), before);
}

#[test]
fn forward_short_of_wall_moves_exactly_one_step() {
    let grid = Grid::bordered(5, 5);
    let start = Vec2f::new(3.5, 2.5);
    let mut player = Player::new(start, Vec2f::new(1.0, 0.0));

    assert_eq!(player.apply(Command::MoveForward, &grid), MoveOutcome::Moved);
    assert_eq!(player.position(), start + player.direction().scale(PLAYER_STEP));
    assert_eq!(player.position(), Vec2f::new(3.75, 2.5));
}

#[test]
fn diagonal_step_is_step_times_direction() {
    let grid = Grid::bordered(10, 10);
    let start = Vec2f::new(4.5, 4.5);
    let mut player = Player::new(start, Vec2f::new(1.0, 1.0));
    let dir = player.direction();

    assert_eq!(player.apply(Command::MoveForward, &grid), MoveOutcome::Moved);
    assert_eq!(player.position(), start + dir.scale(PLAYER_STEP));

    assert_eq!(player.apply(Command::MoveBackward, &grid), MoveOutcome::Moved);
    assert!(approx(player.position(), start));
}

#[test]
fn backward_into_wall_is_rolled_back() {
    let grid = Grid::bordered(5, 5);
    let mut player = Player::new(Vec2f::new(1.1, 2.5), Vec2f::new(1.0, 0.0));
    let before = player.position();

    assert_eq!(player.apply(Command::MoveBackward, &grid), MoveOutcome::Blocked);
    assert_eq!(player.position(), before);
}

#[test]
fn no_sliding_along_walls() {
    // Diagonal into the wall: the whole step is rejected, not just the blocked axis.
    let grid = Grid::bordered(5, 5);
    let mut player = Player::new(Vec2f::new(3.9, 2.5), Vec2f::new(1.0, 1.0));
    let before = player.position();

    assert_eq!(player.apply(Command::MoveForward, &grid), MoveOutcome::Blocked);
    assert_eq!(player.position(), before);
}

#[test]
fn stepping_off_an_unbordered_map_is_blocked() {
    let grid = Grid::from_rows(&["..", ".."]).unwrap();
    let mut player = Player::new(Vec2f::new(1.9, 0.5), Vec2f::new(1.0, 0.0));
    assert_eq!(player.apply(Command::MoveForward, &grid), MoveOutcome::Blocked);
    assert_eq!(player.position(), Vec2f::new(1.9, 0.5));
}

#[test]
fn turn_left_then_right_restores_direction() {
    let grid = Grid::bordered(5, 5);
    let mut player = Player::new(Vec2f::new(2.5, 2.5), Vec2f::new(1.0, 1.0));
    let original = player.direction();

    assert_eq!(player.apply(Command::TurnLeft, &grid), MoveOutcome::Turned);
    assert!(!approx(player.direction(), original));
    assert_eq!(player.apply(Command::TurnRight, &grid), MoveOutcome::Turned);
    assert!(approx(player.direction(), original));
}

#[test]
fn full_circle_of_turns_returns_home() {
    let grid = Grid::bordered(5, 5);
    let mut player = Player::new(Vec2f::new(2.5, 2.5), Vec2f::new(0.0, 1.0));
    for _ in 0..36 {
        player.apply(Command::TurnRight, &grid);
    }
    assert!(approx(player.direction(), Vec2f::new(0.0, 1.0)));
    assert!((player.direction().length() - 1.0).abs() < 1e-4);
}

#[test]
fn turning_inside_a_corner_is_never_blocked() {
    let grid = Grid::bordered(3, 3);
    let mut player = Player::new(Vec2f::new(1.5, 1.5), Vec2f::new(1.0, 0.0));
    for _ in 0..5 {
        assert_eq!(player.apply(Command::TurnLeft, &grid), MoveOutcome::Turned);
    }
    assert_eq!(player.position(), Vec2f::new(1.5, 1.5));
}

#[test]
fn controller_builtin_walks_and_quits() {
    let mut ctl = Controller::builtin().unwrap();
    assert_eq!(ctl.player().position(), Player::START_POSITION);

    assert_eq!(ctl.apply(Command::MoveForward), MoveOutcome::Moved);
    assert_eq!(ctl.apply(Command::NoOp), MoveOutcome::Idle);
    assert_eq!(ctl.apply(Command::Quit), MoveOutcome::Quit);
}

#[test]
fn controller_cast_tracks_player() {
    let mut ctl = Controller::builtin().unwrap();
    let before = ctl.cast(40).to_vec();
    ctl.apply(Command::TurnRight);
    ctl.apply(Command::TurnRight);
    let after = ctl.cast(40).to_vec();
    assert_eq!(before.len(), 40);
    assert_eq!(after.len(), 40);
    assert_ne!(before, after);
    assert_eq!(ctl.samples(), after.as_slice());
}
