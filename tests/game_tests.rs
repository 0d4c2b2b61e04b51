//! Session bookkeeping validation
//!
//! Covers the money/clock/rank rules independently of the engine.

use last_mile::engine::{
    time_bonus_for_len, Color, GameConfig, GameSession, GameStatus, Order, Rank,
    RANK_MASTER_ORDERS, RANK_OPERATOR_ORDERS,
};

#[test]
fn test_session_starts_on_intro() {
    let session = GameSession::new();
    assert_eq!(session.status, GameStatus::Intro);
    assert_eq!(session.money, 0);
    assert_eq!(session.completed_orders, 0);
    assert!(session.rank().is_none());
}

#[test]
fn test_session_start_uses_config() {
    let config = GameConfig::default();
    let session = GameSession::start(&config);
    assert_eq!(session.status, GameStatus::Playing);
    assert_eq!(session.time_left, 60);
    assert_eq!(session.money, 0);
    assert_eq!(session.completed_orders, 0);
    assert!(session.last_delivered.is_empty());
}

#[test]
fn test_complete_order_credits_reward_and_bonus() {
    let mut session = GameSession::start(&GameConfig::default());
    let order = Order::initial();

    let bonus = session.complete_order(&order);

    assert_eq!(bonus, 25);
    assert_eq!(session.money, 2100);
    assert_eq!(session.completed_orders, 1);
    assert_eq!(session.time_left, 85);
    assert_eq!(
        session.last_delivered,
        vec![Color::Green, Color::Green, Color::Red]
    );
}

#[test]
fn test_time_bonus_table() {
    assert_eq!(time_bonus_for_len(2), 20);
    assert_eq!(time_bonus_for_len(3), 25);
    assert_eq!(time_bonus_for_len(4), 30);
    assert_eq!(time_bonus_for_len(5), 35);
}

#[test]
fn test_tick_finishes_at_zero() {
    let mut session = GameSession::start(&GameConfig::default());

    for _ in 0..59 {
        assert!(!session.tick());
    }
    assert_eq!(session.time_left, 1);
    assert!(session.is_playing());

    assert!(session.tick());
    assert_eq!(session.time_left, 0);
    assert_eq!(session.status, GameStatus::Finished);

    // Ticks after the end change nothing
    assert!(!session.tick());
    assert_eq!(session.time_left, 0);
}

#[test]
fn test_rank_thresholds() {
    assert_eq!(Rank::from_completed(0), Rank::Trainee);
    assert_eq!(Rank::from_completed(1), Rank::Trainee);
    assert_eq!(Rank::from_completed(RANK_OPERATOR_ORDERS), Rank::Operator);
    assert_eq!(Rank::from_completed(RANK_MASTER_ORDERS), Rank::Master);
    assert_eq!(Rank::from_completed(12), Rank::Master);
    assert_eq!(Rank::Master.label(), "Master");
    assert_eq!(Rank::Operator.label(), "Operator");
    assert_eq!(Rank::Trainee.label(), "Trainee");
}

#[test]
fn test_rank_only_when_finished() {
    let mut session = GameSession::start(&GameConfig::default());
    session.completed_orders = 3;
    assert!(session.rank().is_none());

    session.time_left = 1;
    session.tick();
    assert_eq!(session.rank(), Some(Rank::Master));
}

#[test]
fn test_summary_mentions_progress() {
    let mut session = GameSession::start(&GameConfig::default());
    session.complete_order(&Order::fallback());
    let summary = session.summary();
    assert!(summary.contains("Money: 1800"));
    assert!(summary.contains("Orders: 1"));
}
