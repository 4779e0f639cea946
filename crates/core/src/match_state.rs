//! Match state module - the turn controller
//!
//! Ties the board, the column shift, settlement and scoring together. A turn goes:
//!
//! 1. The team to move picks one of its [eligible columns](Match::eligible_columns)
//!    and a direction.
//! 2. The column is recorded in the team's history and shifted.
//! 3. The board resolves: settlement steps until stable, then a goal pass; the two
//!    alternate until a goal pass removes nothing.
//! 4. Win and draw conditions are evaluated and the other team is up.
//!
//! [`Match::commit_move`] runs a whole turn at once. Presentation layers that
//! want to show every intermediate board call [`Match::begin_move`] and then
//! [`Match::try_advance_one`] once per frame; both paths end in the same state.

use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::error::{MoveError, SetupError};
use crate::generator::generate_board;
use crate::history::TeamHistory;
use crate::rng::GameRng;
use crate::scoring::{collect_exits, GoalExit, Scores};
use crate::settle::{self, SettleStep};
use crate::shift::shift_column;
use crate::snapshot::{board_hash, MatchSnapshot};
use crate::types::{Cell, Coord, Direction, Occupant, Team};
use crate::Board;

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Winner(Team),
    Draw,
}

/// Where the turn controller currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for this team to pick a column
    AwaitingSelection(Team),
    /// This team's shift has been applied and the board is still relaxing
    Resolving(Team),
    Over(MatchOutcome),
}

/// Scores, turn and end-of-match bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchState {
    pub scores: Scores,
    pub current_team: Team,
    pub finished: bool,
    pub draw: bool,
    pub winner: Option<Team>,
    /// Committed moves left before a draw, meaningful once `countdown_active`
    pub countdown: u32,
    pub countdown_active: bool,
    /// Committed moves so far
    pub turn: u32,
}

impl MatchState {
    fn new(first_team: Team) -> Self {
        Self {
            scores: Scores::default(),
            current_team: first_team,
            finished: false,
            draw: false,
            winner: None,
            countdown: 0,
            countdown_active: false,
            turn: 0,
        }
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        if !self.finished {
            return None;
        }
        Some(match self.winner {
            Some(team) => MatchOutcome::Winner(team),
            None => MatchOutcome::Draw,
        })
    }
}

/// Something observable that happened while a move resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveEvent {
    Shifted { column: usize, direction: Direction },
    Settled(SettleStep),
    Exited(GoalExit),
}

/// A cell whose occupant changed over the course of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellDelta {
    pub coord: Coord,
    pub before: Cell,
    pub after: Cell,
}

/// Everything a presentation layer needs to replay a committed move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub team: Team,
    pub column: usize,
    pub direction: Direction,
    pub scores: Scores,
    /// Net cell changes between the board before the shift and the resolved board
    pub deltas: Vec<CellDelta>,
    /// Shift, settlement steps and exits in the order they happened
    pub events: Vec<MoveEvent>,
    pub state: MatchState,
}

#[derive(Debug, Clone)]
struct PendingMove {
    team: Team,
    column: usize,
    direction: Direction,
    before: Board,
    events: Vec<MoveEvent>,
}

/// One full match
#[derive(Debug, Clone)]
pub struct Match {
    config: MatchConfig,
    seed: u64,
    board: Board,
    state: MatchState,
    histories: [TeamHistory; 2],
    pending: Option<PendingMove>,
    last_move: Option<MoveResult>,
}

/// One settlement step, or one goal pass once the board is stable.
///
/// Returns `false` when neither changed the board.
fn resolve_once(board: &mut Board, scores: &mut Scores, events: &mut Vec<MoveEvent>) -> bool {
    if let Some(step) = settle::try_advance_one(board) {
        events.push(MoveEvent::Settled(step));
        return true;
    }
    let exits = collect_exits(board);
    if exits.is_empty() {
        return false;
    }
    scores.credit(&exits);
    events.extend(exits.into_iter().map(MoveEvent::Exited));
    true
}

/// Keep only the columns passing `keep`, unless that would leave none
fn filter_unless_empty(columns: &mut Vec<usize>, keep: impl Fn(usize) -> bool) {
    let filtered: Vec<usize> = columns.iter().copied().filter(|&c| keep(c)).collect();
    if !filtered.is_empty() {
        *columns = filtered;
    }
}

fn diff_boards(before: &Board, after: &Board) -> Vec<CellDelta> {
    before
        .cells()
        .iter()
        .zip(after.cells())
        .enumerate()
        .filter(|(_, (b, a))| b != a)
        .map(|(idx, (b, a))| CellDelta {
            coord: Coord::new((idx % after.width()) as i32, (idx / after.width()) as i32),
            before: *b,
            after: *a,
        })
        .collect()
}

impl Match {
    /// Generate a board from `seed` and start a match on it
    ///
    /// The first team comes from the config or, if unset, a coin flip on the
    /// same seed after the board is generated.
    pub fn new(config: MatchConfig, seed: u64) -> Result<Self, SetupError> {
        config.validate()?;
        let mut rng = GameRng::new(seed);
        let board = generate_board(&config.board, &mut rng)?;
        let first_team = config.first_team.unwrap_or_else(|| {
            if rng.gen_bool(0.5) {
                Team::A
            } else {
                Team::B
            }
        });
        Ok(Self::start(config, seed, board, first_team))
    }

    /// Start a match on a prepared board
    ///
    /// The board dimensions override the ones in `config`. Team A moves first
    /// unless the config says otherwise.
    pub fn with_board(board: Board, mut config: MatchConfig) -> Result<Self, SetupError> {
        config.board.width = board.width();
        config.board.height = board.height();
        config.validate()?;
        if Team::ALL.iter().any(|&team| board.piece_count(team) == 0) {
            return Err(SetupError::InvalidRules("each team needs at least one piece"));
        }
        let first_team = config.first_team.unwrap_or(Team::A);
        Ok(Self::start(config, 0, board, first_team))
    }

    fn start(config: MatchConfig, seed: u64, mut board: Board, first_team: Team) -> Self {
        let mut state = MatchState::new(first_team);
        let mut events = Vec::new();
        while resolve_once(&mut board, &mut state.scores, &mut events) {}

        let mut game = Self {
            config,
            seed,
            board,
            state,
            histories: [TeamHistory::new(), TeamHistory::new()],
            pending: None,
            last_move: None,
        };
        game.check_winner();
        log::info!(
            "match started: {}x{}, {} to move, score {}-{}",
            game.board.width(),
            game.board.height(),
            first_team,
            game.state.scores.get(Team::A),
            game.state.scores.get(Team::B)
        );
        game
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn scores(&self) -> Scores {
        self.state.scores
    }

    pub fn current_team(&self) -> Team {
        self.state.current_team
    }

    pub fn history(&self, team: Team) -> &TeamHistory {
        &self.histories[team.index()]
    }

    /// Result of the most recently completed move
    pub fn last_move(&self) -> Option<&MoveResult> {
        self.last_move.as_ref()
    }

    pub fn occupant(&self, coord: Coord) -> Option<Occupant> {
        self.board.get(coord)
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    pub fn winner(&self) -> Option<Team> {
        self.state.winner
    }

    pub fn is_draw(&self) -> bool {
        self.state.draw
    }

    pub fn phase(&self) -> Phase {
        if let Some(outcome) = self.state.outcome() {
            Phase::Over(outcome)
        } else if let Some(pending) = &self.pending {
            Phase::Resolving(pending.team)
        } else {
            Phase::AwaitingSelection(self.state.current_team)
        }
    }

    /// Columns `team` may shift, after the anti-repetition filters
    ///
    /// Starts from every column holding one of the team's pieces, then drops any
    /// column the team shifted on each of its remembered turns, then the column
    /// the opponent shifted last. A filter that would leave nothing is skipped, so
    /// the result is only empty when the team has no pieces left.
    pub fn eligible_columns(&self, team: Team) -> Vec<usize> {
        let mut columns = self.board.team_columns(team);

        let own = self.history(team);
        filter_unless_empty(&mut columns, |c| !own.saturated_by(c));

        if let Some(last) = self.history(team.opponent()).last() {
            filter_unless_empty(&mut columns, |c| c != last);
        }

        columns
    }

    fn validate_move(&self, team: Team, column: usize) -> Result<(), MoveError> {
        if self.state.finished {
            return Err(MoveError::MatchOver);
        }
        if self.pending.is_some() {
            return Err(MoveError::MoveInProgress);
        }
        if team != self.state.current_team {
            return Err(MoveError::NotYourTurn {
                expected: self.state.current_team,
                got: team,
            });
        }
        if column >= self.board.width() {
            return Err(MoveError::ColumnOutOfRange {
                column,
                width: self.board.width(),
            });
        }
        if !self.eligible_columns(team).contains(&column) {
            return Err(MoveError::ColumnNotEligible { column, team });
        }
        Ok(())
    }

    fn start_move(
        &mut self,
        team: Team,
        column: usize,
        direction: Direction,
    ) -> Result<PendingMove, MoveError> {
        self.validate_move(team, column)?;

        self.histories[team.index()].push(column);
        let before = self.board.clone();
        shift_column(&mut self.board, column, direction);

        Ok(PendingMove {
            team,
            column,
            direction,
            before,
            events: vec![MoveEvent::Shifted { column, direction }],
        })
    }

    /// Shift a column and resolve the board completely
    pub fn commit_move(
        &mut self,
        team: Team,
        column: usize,
        direction: Direction,
    ) -> Result<MoveResult, MoveError> {
        let mut pending = self.start_move(team, column, direction)?;
        while resolve_once(&mut self.board, &mut self.state.scores, &mut pending.events) {}
        let result = self.finish_turn(pending);
        self.last_move = Some(result.clone());
        Ok(result)
    }

    /// Shift a column and leave the board to be resolved step by step
    pub fn begin_move(
        &mut self,
        team: Team,
        column: usize,
        direction: Direction,
    ) -> Result<(), MoveError> {
        let pending = self.start_move(team, column, direction)?;
        self.pending = Some(pending);
        Ok(())
    }

    /// Advance the resolving move by one settlement step or one goal pass
    ///
    /// Returns `false` once the board is resolved; that call also completes the
    /// turn, after which [`Match::last_move`] holds its result. Returns `false`
    /// immediately when no move is resolving.
    pub fn try_advance_one(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        if resolve_once(&mut self.board, &mut self.state.scores, &mut pending.events) {
            return true;
        }
        if let Some(pending) = self.pending.take() {
            let result = self.finish_turn(pending);
            self.last_move = Some(result);
        }
        false
    }

    /// Resolve the current move to completion; returns the number of steps
    pub fn settle_fully(&mut self) -> usize {
        let mut steps = 0;
        while self.try_advance_one() {
            steps += 1;
        }
        steps
    }

    fn finish_turn(&mut self, pending: PendingMove) -> MoveResult {
        self.state.turn += 1;
        self.update_outcome();
        if !self.state.finished {
            self.state.current_team = pending.team.opponent();
        }

        log::debug!(
            "turn {}: {} shifted column {} {}, {} events, score {}-{}",
            self.state.turn,
            pending.team,
            pending.column,
            pending.direction.as_str(),
            pending.events.len(),
            self.state.scores.get(Team::A),
            self.state.scores.get(Team::B)
        );

        MoveResult {
            team: pending.team,
            column: pending.column,
            direction: pending.direction,
            scores: self.state.scores,
            deltas: diff_boards(&pending.before, &self.board),
            events: pending.events,
            state: self.state,
        }
    }

    /// A team is home once it reaches the winning score or has no mice left
    fn is_home(&self, team: Team) -> bool {
        self.state.scores.get(team) >= self.config.winning_score
            || self.board.piece_count(team) == 0
    }

    /// Settle a win; returns `true` if the match ended
    fn check_winner(&mut self) -> bool {
        match (self.is_home(Team::A), self.is_home(Team::B)) {
            (true, true) => self.finish(None),
            (true, false) => self.finish(Some(Team::A)),
            (false, true) => self.finish(Some(Team::B)),
            (false, false) => return false,
        }
        true
    }

    fn update_outcome(&mut self) {
        if self.check_winner() {
            return;
        }

        if self.state.countdown_active {
            self.state.countdown = self.state.countdown.saturating_sub(1);
            if self.state.countdown == 0 {
                self.finish(None);
            }
        } else if self.state.scores.min() >= self.config.draw_threshold {
            self.state.countdown_active = true;
            self.state.countdown = self.config.draw_countdown;
            log::info!(
                "both teams reached {}, draw in {} moves",
                self.config.draw_threshold,
                self.config.draw_countdown
            );
            if self.state.countdown == 0 {
                self.finish(None);
            }
        }
    }

    fn finish(&mut self, winner: Option<Team>) {
        self.state.finished = true;
        self.state.winner = winner;
        self.state.draw = winner.is_none();
        match winner {
            Some(team) => log::info!("{} wins after {} turns", team, self.state.turn),
            None => log::info!("match drawn after {} turns", self.state.turn),
        }
    }

    pub fn snapshot_into(&self, out: &mut MatchSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend(self.board.to_ascii());
        out.board_hash = board_hash(&self.board);
        out.seed = self.seed;
        out.turn = self.state.turn;
        out.current_team = self.state.current_team;
        out.phase = self.phase();
        out.scores = self.state.scores;
        out.history_a.clear();
        out.history_a.extend_from_slice(self.history(Team::A).as_slice());
        out.history_b.clear();
        out.history_b.extend_from_slice(self.history(Team::B).as_slice());
        out.draw_countdown = self
            .state
            .countdown_active
            .then_some(self.state.countdown);
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let mut s = MatchSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_match(rows: &[&str]) -> Match {
        let board = Board::from_ascii(rows).unwrap();
        let config = MatchConfig::default()
            .with_winning_score(1)
            .with_draw_rule(1, 8)
            .with_first_team(Team::A);
        let config = MatchConfig {
            board: config.board.with_pieces_per_team(1),
            ..config
        };
        Match::with_board(board, config).unwrap()
    }

    #[test]
    fn test_new_match_is_settled_and_awaiting() {
        let game = Match::new(MatchConfig::default(), 7).unwrap();
        assert!(settle::is_stable(game.board()));
        assert!(matches!(game.phase(), Phase::AwaitingSelection(_)));
        assert_eq!(game.state().turn, 0);
    }

    #[test]
    fn test_wrong_team_rejected() {
        let mut game = small_match(&["......", "##a.b#", "######"]);
        let err = game.commit_move(Team::B, 4, Direction::Up).unwrap_err();
        assert_eq!(
            err,
            MoveError::NotYourTurn {
                expected: Team::A,
                got: Team::B
            }
        );
    }

    #[test]
    fn test_column_checks() {
        let mut game = small_match(&["......", "##a.b#", "######"]);
        assert_eq!(
            game.commit_move(Team::A, 9, Direction::Up).unwrap_err(),
            MoveError::ColumnOutOfRange {
                column: 9,
                width: 6
            }
        );
        assert_eq!(
            game.commit_move(Team::A, 1, Direction::Up).unwrap_err(),
            MoveError::ColumnNotEligible {
                column: 1,
                team: Team::A
            }
        );
        // Rejected moves leave no trace in the history.
        assert!(game.history(Team::A).is_empty());
    }

    #[test]
    fn test_begin_move_blocks_second_move() {
        let mut game = small_match(&["......", "##a.b#", "######"]);
        game.begin_move(Team::A, 2, Direction::Up).unwrap();
        assert_eq!(game.phase(), Phase::Resolving(Team::A));
        assert_eq!(
            game.commit_move(Team::A, 2, Direction::Up).unwrap_err(),
            MoveError::MoveInProgress
        );
        game.settle_fully();
        assert!(game.last_move().is_some());
    }

    #[test]
    fn test_try_advance_without_move_is_noop() {
        let mut game = small_match(&["......", "##a.b#", "######"]);
        let before = game.board().clone();
        assert!(!game.try_advance_one());
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_deltas_cover_net_changes() {
        // Shifting column 2 up lifts `a` onto row 2, where it walks to x = 0 and exits.
        let mut game = small_match(&["......", "##a.b#", "######"]);
        let result = game.commit_move(Team::A, 2, Direction::Up).unwrap();

        assert_eq!(result.scores.get(Team::A), 1);
        assert_eq!(
            result.deltas,
            vec![
                CellDelta {
                    coord: Coord::new(2, 0),
                    before: Some(Occupant::Obstacle),
                    after: None,
                },
                CellDelta {
                    coord: Coord::new(2, 1),
                    before: Some(Occupant::Piece(Team::A)),
                    after: Some(Occupant::Obstacle),
                },
            ]
        );
        assert_eq!(result.events.len(), 4);
        assert!(matches!(
            result.events.last(),
            Some(MoveEvent::Exited(GoalExit { team: Team::A, .. }))
        ));
        assert_eq!(game.winner(), Some(Team::A));
        assert_eq!(game.phase(), Phase::Over(MatchOutcome::Winner(Team::A)));
    }
}
