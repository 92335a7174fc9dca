//! Session state machine tests.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_arena::{
    GameSession, Mode, MoveError, Outcome, Phase, Player, Position, Square,
};

fn pos(i: usize) -> Position {
    Position::from_index(i).unwrap()
}

#[test]
fn test_new_session_is_idle() {
    let mut session = GameSession::new(Mode::HumanVsHuman);
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(
        session.apply_human_move(pos(0)).unwrap_err(),
        MoveError::NotRunning
    );
}

#[test]
fn test_start_clears_board_and_sets_mover() {
    let mut session = GameSession::new(Mode::HumanVsHuman);
    session.start(Player::X);
    session.apply_human_move(pos(4)).unwrap();

    let report = session.start(Player::O);
    assert!(report.placements.is_empty());
    assert_eq!(session.to_move(), Player::O);
    assert!(session.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(session.phase(), Phase::Running);
}

#[test]
fn test_players_alternate() {
    let mut session = GameSession::new(Mode::HumanVsHuman);
    session.start(Player::X);
    assert_eq!(session.to_move(), Player::X);
    session.apply_human_move(pos(0)).unwrap();
    assert_eq!(session.to_move(), Player::O);
    session.apply_human_move(pos(4)).unwrap();
    assert_eq!(session.to_move(), Player::X);
}

#[test]
fn test_move_on_computer_turn_rejected_without_state_change() {
    let mut session = GameSession::new(Mode::HumanVsHuman);
    session.start(Player::X);
    session.apply_human_move(pos(0)).unwrap();

    // O becomes computer-controlled mid-game; its turn is no longer
    // accepted from the outside.
    session.set_mode(Mode::HumanVsOptimal);
    let before = session.board().clone();
    assert_eq!(
        session.apply_human_move(pos(4)).unwrap_err(),
        MoveError::NotYourTurn
    );
    assert_eq!(session.board(), &before);
    assert_eq!(session.to_move(), Player::O);
}

#[test]
fn test_occupied_square_rejected_without_state_change() {
    let mut session = GameSession::new(Mode::HumanVsHuman);
    session.start(Player::X);
    session.apply_human_move(pos(4)).unwrap();

    let before = session.board().clone();
    assert_eq!(
        session.apply_human_move(pos(4)).unwrap_err(),
        MoveError::Occupied(Position::Center)
    );
    assert_eq!(session.board(), &before);
    assert_eq!(session.to_move(), Player::O);
}

#[test]
fn test_win_transition_reports_outcome_once() {
    let mut session = GameSession::new(Mode::HumanVsHuman);
    session.start(Player::X);
    for i in [0, 4, 1, 5] {
        assert_eq!(session.apply_human_move(pos(i)).unwrap().outcome, None);
    }
    let report = session.apply_human_move(pos(2)).unwrap();
    let expected = Outcome::Won {
        player: Player::X,
        line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
    };
    assert_eq!(report.outcome, Some(expected));
    assert_eq!(session.phase(), Phase::Ended(expected));

    // The game is over; further moves are rejected, so no second
    // outcome can ever be emitted for this game.
    assert_eq!(
        session.apply_human_move(pos(8)).unwrap_err(),
        MoveError::NotRunning
    );
}

#[test]
fn test_computer_replies_within_same_turn() {
    let mut session = GameSession::new(Mode::HumanVsOptimal);
    session.start(Player::X);
    let report = session.apply_human_move(pos(0)).unwrap();

    assert_eq!(report.placements.len(), 2);
    assert_eq!(report.placements[0], (Player::X, Position::TopLeft));
    assert_eq!(report.placements[1].0, Player::O);
    // Perfect play answers a corner opening with the center.
    assert_eq!(report.placements[1].1, Position::Center);
    assert_eq!(session.to_move(), Player::X);
}

#[test]
fn test_computer_opens_when_it_starts() {
    let mut session = GameSession::new(Mode::HumanVsOptimal);
    let report = session.start(Player::O);

    // Empty-board shortcut: the machine opens in the center.
    assert_eq!(report.placements, vec![(Player::O, Position::Center)]);
    assert_eq!(session.to_move(), Player::X);
    assert_eq!(session.phase(), Phase::Running);
}

#[test]
fn test_random_computer_plays_legal_moves() {
    let mut session =
        GameSession::with_rng(Mode::HumanVsRandom, StdRng::seed_from_u64(42));
    session.start(Player::X);

    let report = session.apply_human_move(pos(4)).unwrap();
    assert_eq!(report.placements.len(), 2);
    let (player, reply) = report.placements[1];
    assert_eq!(player, Player::O);
    assert_ne!(reply, Position::Center);
    assert_eq!(session.board().get(reply), Square::Occupied(Player::O));
}

#[test]
fn test_optimal_computer_never_loses_a_full_game() {
    // Human plays first-available; the perfect computer must not lose.
    let mut session = GameSession::new(Mode::HumanVsOptimal);
    session.start(Player::X);
    loop {
        if session.phase() != Phase::Running {
            break;
        }
        let target = Position::ALL
            .iter()
            .copied()
            .find(|p| session.board().is_empty(*p))
            .unwrap();
        session.apply_human_move(target).unwrap();
    }
    match session.phase() {
        Phase::Ended(Outcome::Won { player, .. }) => assert_eq!(player, Player::O),
        Phase::Ended(Outcome::Drawn) => {}
        other => panic!("unexpected phase {other:?}"),
    }
}
