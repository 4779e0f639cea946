//! Turn controller tests - eligibility filters, history, draw countdown and wins

use mice_men::core::{Board, Match, MatchConfig, MatchOutcome, MoveError, Phase, Scores};
use mice_men::types::{Direction, Team, HISTORY_LEN};

/// Boards without empty cells never settle, so only the rules under test act.
fn packed_match(rows: &[&str], first: Team) -> Match {
    let board = Board::from_ascii(rows).expect("fixture rows");
    let config = MatchConfig::default().with_first_team(first);
    Match::with_board(board, config).expect("valid fixture")
}

fn play_first_eligible(game: &mut Match) {
    let team = game.current_team();
    let column = game.eligible_columns(team)[0];
    game.commit_move(team, column, Direction::Up).unwrap();
}

const TWO_A_COLUMNS: [&str; 3] = ["#####a####", "##b####a##", "###b######"];
const ONE_A_COLUMN: [&str; 3] = ["#####a####", "##b#######", "###b######"];

#[test]
fn test_six_repeats_exclude_the_column() {
    let mut game = packed_match(&TWO_A_COLUMNS, Team::A);

    for _ in 0..HISTORY_LEN {
        assert!(game.eligible_columns(Team::A).contains(&5));
        game.commit_move(Team::A, 5, Direction::Up).unwrap();
        play_first_eligible(&mut game);
    }

    assert_eq!(game.eligible_columns(Team::A), vec![7]);
    assert_eq!(
        game.commit_move(Team::A, 5, Direction::Up).unwrap_err(),
        MoveError::ColumnNotEligible {
            column: 5,
            team: Team::A
        }
    );
}

#[test]
fn test_repeat_ban_outranks_opponent_last_column() {
    // Column 7 holds mice of both teams, so B can shift it right before A's 7th move.
    let rows = ["#####a####", "##b####a##", "#######b##"];
    let mut game = packed_match(&rows, Team::A);

    for turn in 0..HISTORY_LEN {
        game.commit_move(Team::A, 5, Direction::Up).unwrap();
        let column = if turn + 1 == HISTORY_LEN { 7 } else { 2 };
        game.commit_move(Team::B, column, Direction::Up).unwrap();
    }

    assert_eq!(game.history(Team::B).last(), Some(7));
    assert_eq!(game.eligible_columns(Team::A), vec![7]);
    assert!(game.commit_move(Team::A, 7, Direction::Up).is_ok());
}

#[test]
fn test_six_repeats_fall_back_when_nothing_else() {
    let mut game = packed_match(&ONE_A_COLUMN, Team::A);

    for _ in 0..HISTORY_LEN {
        game.commit_move(Team::A, 5, Direction::Down).unwrap();
        play_first_eligible(&mut game);
    }

    assert_eq!(game.eligible_columns(Team::A), vec![5]);
    assert!(game.commit_move(Team::A, 5, Direction::Down).is_ok());
}

#[test]
fn test_another_column_clears_the_repeat_ban() {
    let mut game = packed_match(&TWO_A_COLUMNS, Team::A);

    for _ in 0..HISTORY_LEN {
        game.commit_move(Team::A, 5, Direction::Up).unwrap();
        play_first_eligible(&mut game);
    }
    game.commit_move(Team::A, 7, Direction::Up).unwrap();
    play_first_eligible(&mut game);

    assert_eq!(game.history(Team::A).as_slice(), &[5, 5, 5, 5, 5, 7]);
    assert_eq!(game.eligible_columns(Team::A), vec![5, 7]);
}

#[test]
fn test_history_is_bounded() {
    let mut game = packed_match(&TWO_A_COLUMNS, Team::A);
    for _ in 0..20 {
        play_first_eligible(&mut game);
        assert!(game.history(Team::A).len() <= HISTORY_LEN);
        assert!(game.history(Team::B).len() <= HISTORY_LEN);
    }
    assert_eq!(game.history(Team::A).len(), HISTORY_LEN);
    assert_eq!(game.state().turn, 20);
}

#[test]
fn test_opponent_last_column_is_excluded() {
    let rows = ["####a#####", "####b#a###", "###b######"];
    let mut game = packed_match(&rows, Team::B);
    assert_eq!(game.eligible_columns(Team::A), vec![4, 6]);

    game.commit_move(Team::B, 4, Direction::Up).unwrap();
    assert_eq!(game.eligible_columns(Team::A), vec![6]);
}

#[test]
fn test_opponent_filter_falls_back_when_nothing_else() {
    let rows = ["####a#####", "####b#####", "###b######"];
    let mut game = packed_match(&rows, Team::B);

    game.commit_move(Team::B, 4, Direction::Up).unwrap();
    assert_eq!(game.eligible_columns(Team::A), vec![4]);
    assert!(game.commit_move(Team::A, 4, Direction::Up).is_ok());
}

#[test]
fn test_turns_alternate() {
    let mut game = packed_match(&TWO_A_COLUMNS, Team::B);
    assert_eq!(game.current_team(), Team::B);
    play_first_eligible(&mut game);
    assert_eq!(game.current_team(), Team::A);
    assert_eq!(game.phase(), Phase::AwaitingSelection(Team::A));
    play_first_eligible(&mut game);
    assert_eq!(game.current_team(), Team::B);
}

#[test]
fn test_draw_countdown_runs_out() {
    let board = Board::from_ascii(&TWO_A_COLUMNS).unwrap();
    let config = MatchConfig::default()
        .with_first_team(Team::A)
        .with_draw_rule(0, 2);
    let mut game = Match::with_board(board, config).unwrap();

    // The move that reaches the threshold starts the countdown without spending it.
    play_first_eligible(&mut game);
    assert_eq!(game.snapshot().draw_countdown, Some(2));
    play_first_eligible(&mut game);
    assert_eq!(game.snapshot().draw_countdown, Some(1));
    assert!(!game.is_finished());

    play_first_eligible(&mut game);
    assert!(game.is_finished());
    assert!(game.is_draw());
    assert_eq!(game.winner(), None);
    assert_eq!(game.phase(), Phase::Over(MatchOutcome::Draw));

    let team = game.current_team();
    assert_eq!(
        game.commit_move(team, 5, Direction::Up).unwrap_err(),
        MoveError::MatchOver
    );
}

#[test]
fn test_zero_countdown_draws_immediately() {
    let board = Board::from_ascii(&TWO_A_COLUMNS).unwrap();
    let config = MatchConfig::default()
        .with_first_team(Team::A)
        .with_draw_rule(0, 0);
    let mut game = Match::with_board(board, config).unwrap();

    play_first_eligible(&mut game);
    assert!(game.is_draw());
    assert_eq!(game.state().turn, 1);
}

#[test]
fn test_goal_exit_scores_and_last_mouse_wins() {
    let board = Board::from_ascii(&["......", "##a.b#", "######"]).unwrap();
    let config = MatchConfig::default().with_first_team(Team::A);
    let mut game = Match::with_board(board, config).unwrap();

    let result = game.commit_move(Team::A, 2, Direction::Up).unwrap();
    assert_eq!(result.scores.get(Team::A), 1);
    assert_eq!(result.scores.get(Team::B), 0);

    // Team A has no mice left, so it is home even though 1 < 12.
    assert_eq!(game.winner(), Some(Team::A));
    assert_eq!(result.state.outcome(), Some(MatchOutcome::Winner(Team::A)));
}

#[test]
fn test_trapped_move_scores_nothing() {
    let board = Board::from_ascii(&["......", "##a.b#", "######", "######"]).unwrap();
    let config = MatchConfig::default().with_first_team(Team::A);
    let mut game = Match::with_board(board, config).unwrap();

    let result = game.commit_move(Team::A, 2, Direction::Down).unwrap();
    assert_eq!(result.scores.get(Team::A), 0);
    assert!(!game.is_finished());
    assert_eq!(game.current_team(), Team::B);
}

#[test]
fn test_stepwise_resolution_matches_commit() {
    let board = Board::from_ascii(&["......", "##a.b#", "######"]).unwrap();
    let config = MatchConfig::default().with_first_team(Team::A);
    let mut committed = Match::with_board(board, config).unwrap();
    let mut stepped = committed.clone();

    committed.commit_move(Team::A, 2, Direction::Up).unwrap();

    stepped.begin_move(Team::A, 2, Direction::Up).unwrap();
    let mut steps = 0;
    while stepped.try_advance_one() {
        steps += 1;
        assert!(steps < 1000, "resolution did not terminate");
    }

    // Two walks and one goal pass.
    assert_eq!(steps, 3);
    assert_eq!(stepped.board(), committed.board());
    assert_eq!(stepped.state(), committed.state());
    assert_eq!(stepped.last_move(), committed.last_move());
}

#[test]
fn test_board_without_both_teams_rejected() {
    let board = Board::from_ascii(&["..a.", "####"]).unwrap();
    assert!(Match::with_board(board, MatchConfig::default()).is_err());
}

/// Two mice for A and one for B on cheese, nothing on an exit column.
const OPEN_TOP: [&str; 3] = ["..........", "##a.b##a##", "##########"];

#[test]
fn test_winning_score_ends_match_with_mice_left() {
    let board = Board::from_ascii(&OPEN_TOP).unwrap();
    let config = MatchConfig::default()
        .with_first_team(Team::A)
        .with_winning_score(1)
        .with_draw_rule(1, 8);
    let mut game = Match::with_board(board, config).unwrap();

    game.commit_move(Team::A, 2, Direction::Up).unwrap();
    assert_eq!(game.winner(), Some(Team::A));
    assert_eq!(game.board().piece_count(Team::A), 1);
    assert_eq!(game.scores(), Scores::new(1, 0));
}

#[test]
fn test_win_during_draw_countdown() {
    let board = Board::from_ascii(&OPEN_TOP).unwrap();
    let config = MatchConfig::default()
        .with_first_team(Team::A)
        .with_winning_score(1)
        .with_draw_rule(0, 8);
    let mut game = Match::with_board(board, config).unwrap();

    // Two trapping moves: the first starts the countdown, the second spends one.
    game.commit_move(Team::A, 7, Direction::Down).unwrap();
    game.commit_move(Team::B, 4, Direction::Down).unwrap();
    assert_eq!(game.snapshot().draw_countdown, Some(7));
    assert_eq!(game.scores(), Scores::new(0, 0));

    game.commit_move(Team::A, 2, Direction::Up).unwrap();
    assert_eq!(game.winner(), Some(Team::A));
    assert!(!game.is_draw());
    assert_eq!(game.board().piece_count(Team::A), 1);
    assert!(game.state().countdown_active);
    assert_eq!(game.state().countdown, 7);
}

#[test]
fn test_countdown_starts_after_eleven_exits_each() {
    // Eleven mice per team start on their exit columns; one each is boxed in.
    let mut rows = vec!["a#ab#b"];
    rows.extend(std::iter::repeat("a####b").take(10));
    let board = Board::from_ascii(&rows).unwrap();
    let config = MatchConfig::default().with_first_team(Team::A);
    let mut game = Match::with_board(board, config).unwrap();

    assert_eq!(game.scores(), Scores::new(11, 11));
    assert!(!game.is_finished());
    assert_eq!(game.snapshot().draw_countdown, None);

    play_first_eligible(&mut game);
    assert_eq!(game.snapshot().draw_countdown, Some(8));

    for _ in 0..7 {
        play_first_eligible(&mut game);
    }
    assert!(!game.is_finished());
    assert_eq!(game.snapshot().draw_countdown, Some(1));

    play_first_eligible(&mut game);
    assert!(game.is_draw());
    assert_eq!(game.state().turn, 9);
    assert_eq!(game.scores(), Scores::new(11, 11));
}
