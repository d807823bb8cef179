//! End-to-end scenarios through the public API

use glam::Vec2;
use paddle_ball::renderer::DrawCommand;
use paddle_ball::sim::{
    Ball, GamePhase, GameState, Paddle, PaddleContact, Playfield, TickInput, tick,
};
use paddle_ball::{Game, GameConfig};

const FIELD: Playfield = Playfield {
    width: 560.0,
    height: 640.0,
};

#[test]
fn ball_in_free_flight() {
    let mut ball = Ball::new(Vec2::new(100.0, 60.0), Vec2::new(8.0, 8.0), 12.0);
    ball.update(FIELD);
    assert_eq!(ball.pos(), Vec2::new(108.0, 68.0));
    assert_eq!(ball.velocity(), Vec2::new(8.0, 8.0));
    assert!(!ball.missed());
}

#[test]
fn ball_reflects_off_left_wall_after_moving() {
    let mut ball = Ball::new(Vec2::new(5.0, 68.0), Vec2::new(-8.0, 8.0), 12.0);
    ball.update(FIELD);
    assert_eq!(ball.x(), -3.0);
    assert_eq!(ball.velocity().x, 8.0);
}

#[test]
fn paddle_collision_bounces_snaps_and_scores_once() {
    let config = GameConfig::default();
    let mut paddle = Paddle::new(&config, FIELD, 0.0);
    paddle.y = 500.0;
    // Pointer at 160 puts the paddle at x in [100, 220]
    paddle.set_pointer_target(160.0);

    // Center 150, bottom 505 > 500, top 481 < 532
    let mut ball = Ball::new(Vec2::new(150.0, 493.0), Vec2::new(8.0, 8.0), 12.0);
    let mut hits = 0;
    if paddle.update(&mut ball, 0.0, FIELD) == PaddleContact::Hit {
        hits += 1;
    }
    assert_eq!((paddle.left(), paddle.right()), (100.0, 220.0));
    assert_eq!(hits, 1);
    assert_eq!(ball.velocity().y, -8.0);
    assert_eq!(ball.y(), 500.0 - 12.0);

    // Ball leaves upward without another hit
    for _ in 0..10 {
        ball.update(FIELD);
        if paddle.update(&mut ball, 0.0, FIELD) == PaddleContact::Hit {
            hits += 1;
        }
    }
    assert_eq!(hits, 1);
}

#[test]
fn miss_ends_the_game_for_good() {
    let config = GameConfig::default();
    let ball = Ball::new(Vec2::new(40.0, 600.0), Vec2::new(0.0, 12.0), 12.0);
    let mut state = GameState::with_ball(3, ball, &config, FIELD, 0.0);

    // Keep the paddle far to the right
    let input = TickInput {
        pointer_x: Some(1_000.0),
        ..Default::default()
    };
    let mut ended_at = None;
    for i in 0..10 {
        if tick(&mut state, &input).ended {
            ended_at = Some(i);
        }
    }
    // y goes 612, 624, 636; bottom edge 648 > 640 on the third tick
    assert_eq!(ended_at, Some(2));
    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(state.ball.missed());

    // Geometry that would otherwise overlap does not score
    state.paddle.x = 0.0;
    state.ball.reposition(state.paddle.top() + 4.0);
    tick(&mut state, &input);
    assert_eq!(state.score, 0);
}

#[test]
fn game_runs_to_game_over_on_autopilot() {
    let mut game = Game::new(GameConfig::default(), FIELD, 1234, 0.0);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut last_score = 0;
    let mut frames = 0;
    loop {
        let frame = game.step(&input);
        frames += 1;
        assert!(game.score() >= last_score);
        last_score = game.score();
        if !frame.reschedule {
            assert!(matches!(
                frame.commands.as_slice(),
                [DrawCommand::Text { text, .. }] if text == "GAME OVER"
            ));
            break;
        }
        if frames > 200_000 {
            break;
        }
    }
    assert!(game.is_over());
}

#[test]
fn same_seed_same_spawn() {
    let config = GameConfig::default();
    let a = GameState::new(2024, &config, FIELD, 0.0);
    let b = GameState::new(2024, &config, FIELD, 0.0);
    assert_eq!(a.ball, b.ball);
}
