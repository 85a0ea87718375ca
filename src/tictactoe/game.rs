//! The Super Tic-Tac-Toe game engine

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{
    board::{Cell, Player, SubBoard, SubBoardStatus},
    coords::{GridPos, SubBoardId},
    lines::{CELL_COUNT, LineAnalyzer, SUB_BOARD_CELLS, SUB_BOARD_LINES, WINNING_LINES},
};
use crate::config::{GameConfig, NextBoardRule};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub board: SubBoardId,
    pub cell: GridPos,
    pub player: Player,
}

/// Where the player to move must play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActiveBoard {
    Fixed(SubBoardId),
    /// Any unresolved sub-board may be selected
    FreeChoice,
}

impl ActiveBoard {
    pub fn fixed(self) -> Option<SubBoardId> {
        match self {
            ActiveBoard::Fixed(board) => Some(board),
            ActiveBoard::FreeChoice => None,
        }
    }
}

impl fmt::Display for ActiveBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveBoard::Fixed(board) => write!(f, "{board}"),
            ActiveBoard::FreeChoice => write!(f, "any"),
        }
    }
}

/// Overall game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    /// Every sub-board resolved without a meta-board line
    Draw,
}

impl GameStatus {
    pub fn is_decided(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "{player} wins the game"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// Why a request was refused. A refused request never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    CellOccupied,
    /// The requested (or stuck active) sub-board is already resolved
    SubBoardResolved,
    GameAlreadyDecided,
    /// A sub-board must be selected before playing
    SubBoardNotChosen,
    /// Selecting a sub-board is only allowed during a free choice
    NoFreeChoice,
    /// The move names a sub-board other than the active one
    WrongSubBoard,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rejection::CellOccupied => "invalid move: cell is already occupied",
            Rejection::SubBoardResolved => "sub-board is already resolved",
            Rejection::GameAlreadyDecided => "the game is already decided",
            Rejection::SubBoardNotChosen => "choose a sub-board first",
            Rejection::NoFreeChoice => "no free choice of sub-board is pending",
            Rejection::WrongSubBoard => "that is not the active sub-board",
        };
        write!(f, "{text}")
    }
}

/// What an applied move did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub placed: Move,
    /// Status of the played sub-board after the move
    pub sub_board: SubBoardStatus,
    /// Whether this move resolved the played sub-board
    pub resolved_now: bool,
    pub status: GameStatus,
    /// Active board for the next player
    pub next: ActiveBoard,
    /// Set when the move pointed at a sub-board that is already resolved
    pub redirect_blocked: Option<SubBoardId>,
}

impl MoveReport {
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Result of [`SuperGame::play`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Applied(MoveReport),
    Rejected(Rejection),
}

impl PlayOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, PlayOutcome::Applied(_))
    }

    pub fn report(&self) -> Option<&MoveReport> {
        match self {
            PlayOutcome::Applied(report) => Some(report),
            PlayOutcome::Rejected(_) => None,
        }
    }
}

/// Result of [`SuperGame::select_sub_board`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected(SubBoardId),
    Rejected(Rejection),
}

/// Complete Super Tic-Tac-Toe state.
///
/// The 81 cells live in one flat array (see [`super::lines::cell_index`]);
/// `checks` caches each sub-board's resolution and is the only input to the
/// meta-board win check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperGame {
    cells: [Cell; CELL_COUNT],
    checks: [SubBoardStatus; 9],
    current_player: Player,
    active: ActiveBoard,
    status: GameStatus,
    rule: NextBoardRule,
    history: Vec<Move>,
    first_player: Player,
    start: SubBoardId,
}

impl SuperGame {
    /// New game with X first, free choice, and a random start drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::starting_at(SubBoardId::random(rng))
    }

    /// New game with default settings and a fixed starting sub-board.
    pub fn starting_at(start: SubBoardId) -> Self {
        Self::with_parts(start, Player::X, NextBoardRule::default())
    }

    /// Build a game from a configuration.
    ///
    /// An explicit `start` wins over `seed`; with neither, the thread RNG
    /// picks the starting sub-board.
    pub fn from_config(config: &GameConfig) -> Self {
        let start = match (config.start, config.seed) {
            (Some(start), _) => start,
            (None, Some(seed)) => SubBoardId::random(&mut StdRng::seed_from_u64(seed)),
            (None, None) => SubBoardId::random(&mut rand::rng()),
        };
        Self::with_parts(start, config.first_player, config.next_board_rule)
    }

    fn with_parts(start: SubBoardId, first_player: Player, rule: NextBoardRule) -> Self {
        debug!(%start, %first_player, %rule, "new game");
        SuperGame {
            cells: [Cell::Empty; CELL_COUNT],
            checks: [SubBoardStatus::InPlay; 9],
            current_player: first_player,
            active: ActiveBoard::Fixed(start),
            status: GameStatus::InProgress,
            rule,
            history: Vec::new(),
            first_player,
            start,
        }
    }

    /// Play `(row, col)` inside the active sub-board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinate`] when either index is outside
    /// `0..=2`. Every other refusal is a [`PlayOutcome::Rejected`].
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, row: usize, col: usize) -> crate::Result<PlayOutcome> {
        let cell = GridPos::new(row, col)?;
        Ok(self.play_cell(cell))
    }

    /// [`SuperGame::play`] with an already validated position
    pub fn play_cell(&mut self, cell: GridPos) -> PlayOutcome {
        self.apply(cell)
    }

    /// Play `cell` in `board`, selecting `board` first if a free choice is
    /// pending. Nothing changes unless the move itself is legal.
    pub fn play_at(&mut self, board: SubBoardId, cell: GridPos) -> PlayOutcome {
        if self.status.is_decided() {
            return PlayOutcome::Rejected(Rejection::GameAlreadyDecided);
        }
        match self.active {
            ActiveBoard::FreeChoice => {
                if self.checks[board.index()].is_resolved() {
                    return PlayOutcome::Rejected(Rejection::SubBoardResolved);
                }
                if self.cell(board, cell) != Cell::Empty {
                    return PlayOutcome::Rejected(Rejection::CellOccupied);
                }
                self.active = ActiveBoard::Fixed(board);
            }
            ActiveBoard::Fixed(active) if active != board => {
                return PlayOutcome::Rejected(Rejection::WrongSubBoard);
            }
            ActiveBoard::Fixed(_) => {}
        }
        self.apply(cell)
    }

    /// Pick the sub-board to play in while a free choice is pending.
    ///
    /// The turn does not pass.
    pub fn select_sub_board(&mut self, row: usize, col: usize) -> crate::Result<SelectOutcome> {
        let board = SubBoardId::new(row, col)?;
        Ok(self.select(board))
    }

    /// [`SuperGame::select_sub_board`] with an already validated id
    pub fn select(&mut self, board: SubBoardId) -> SelectOutcome {
        if self.status.is_decided() {
            return SelectOutcome::Rejected(Rejection::GameAlreadyDecided);
        }
        if self.active != ActiveBoard::FreeChoice {
            return SelectOutcome::Rejected(Rejection::NoFreeChoice);
        }
        if self.checks[board.index()].is_resolved() {
            return SelectOutcome::Rejected(Rejection::SubBoardResolved);
        }
        debug!(%board, player = %self.current_player, "sub-board selected");
        self.active = ActiveBoard::Fixed(board);
        SelectOutcome::Selected(board)
    }

    fn apply(&mut self, cell: GridPos) -> PlayOutcome {
        if self.status.is_decided() {
            debug!(status = %self.status, "move after the game was decided");
            return PlayOutcome::Rejected(Rejection::GameAlreadyDecided);
        }
        let board = match self.active {
            ActiveBoard::Fixed(board) => board,
            ActiveBoard::FreeChoice => return PlayOutcome::Rejected(Rejection::SubBoardNotChosen),
        };
        if self.checks[board.index()].is_resolved() {
            return PlayOutcome::Rejected(Rejection::SubBoardResolved);
        }
        let idx = SUB_BOARD_CELLS[board.index()][cell.index()];
        if self.cells[idx] != Cell::Empty {
            debug!(%board, %cell, "cell occupied");
            return PlayOutcome::Rejected(Rejection::CellOccupied);
        }

        let player = self.current_player;
        self.cells[idx] = player.to_cell();
        let placed = Move {
            board,
            cell,
            player,
        };
        self.history.push(placed);
        debug!(%board, %cell, %player, "mark placed");

        let sub_board = self.resolve_sub_board(board);
        let resolved_now = sub_board.is_resolved();
        if resolved_now {
            self.update_status();
        }

        // The played cell names the opponent's sub-board.
        let target = cell;
        let mut redirect_blocked = None;
        if self.checks[target.index()].is_resolved() {
            debug!(%target, rule = %self.rule, "redirect to a resolved sub-board");
            redirect_blocked = Some(target);
            if self.rule == NextBoardRule::FreeChoice {
                self.active = ActiveBoard::FreeChoice;
            }
        } else {
            self.active = ActiveBoard::Fixed(target);
        }
        self.current_player = player.opponent();

        PlayOutcome::Applied(MoveReport {
            placed,
            sub_board,
            resolved_now,
            status: self.status,
            next: self.active,
            redirect_blocked,
        })
    }

    /// Re-evaluate the sub-board that was just played; decorate it if won.
    fn resolve_sub_board(&mut self, board: SubBoardId) -> SubBoardStatus {
        let i = board.index();
        if let Some(winner) = LineAnalyzer::winner(&self.cells, &SUB_BOARD_LINES[i]) {
            self.checks[i] = SubBoardStatus::Won(winner);
            let glyph = SubBoard::decoration(winner);
            for (&idx, &cell) in SUB_BOARD_CELLS[i].iter().zip(glyph.cells.iter()) {
                self.cells[idx] = cell;
            }
            info!(%board, %winner, "sub-board won");
        } else if SUB_BOARD_CELLS[i]
            .iter()
            .all(|&idx| self.cells[idx] != Cell::Empty)
        {
            self.checks[i] = SubBoardStatus::Drawn;
            info!(%board, "sub-board drawn");
        }
        self.checks[i]
    }

    fn update_status(&mut self) {
        let meta = self.meta_cells();
        if let Some(winner) = LineAnalyzer::winner(&meta, &WINNING_LINES) {
            self.status = GameStatus::Won(winner);
            info!(%winner, "game won");
        } else if self.checks.iter().all(|status| status.is_resolved()) {
            self.status = GameStatus::Draw;
            info!("game drawn");
        }
    }

    fn meta_cells(&self) -> [Cell; 9] {
        self.checks.map(SubBoardStatus::to_cell)
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn active_board(&self) -> ActiveBoard {
        self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    pub fn next_board_rule(&self) -> NextBoardRule {
        self.rule
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Sub-board that was active before the first move
    pub fn start(&self) -> SubBoardId {
        self.start
    }

    /// Moves applied so far, in order
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Raw flat board (see [`super::lines::cell_index`])
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, board: SubBoardId, cell: GridPos) -> Cell {
        self.cells[SUB_BOARD_CELLS[board.index()][cell.index()]]
    }

    /// Copy out one sub-board
    pub fn sub_board(&self, board: SubBoardId) -> SubBoard {
        SubBoard {
            cells: SUB_BOARD_CELLS[board.index()].map(|idx| self.cells[idx]),
        }
    }

    pub fn sub_board_status(&self, board: SubBoardId) -> SubBoardStatus {
        self.checks[board.index()]
    }

    /// Resolution of every sub-board, row-major
    pub fn sub_board_checks(&self) -> &[SubBoardStatus; 9] {
        &self.checks
    }

    /// Cells the current player may play right now.
    ///
    /// Empty while a free choice is pending or once the game is decided.
    pub fn legal_moves(&self) -> Vec<GridPos> {
        if self.status.is_decided() {
            return Vec::new();
        }
        match self.active {
            ActiveBoard::Fixed(board) if !self.checks[board.index()].is_resolved() => {
                GridPos::all()
                    .filter(|&cell| self.cell(board, cell) == Cell::Empty)
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// Sub-boards that may be selected; empty unless a free choice is pending.
    pub fn selectable_sub_boards(&self) -> Vec<SubBoardId> {
        if self.status.is_decided() || self.active != ActiveBoard::FreeChoice {
            return Vec::new();
        }
        SubBoardId::all()
            .filter(|board| !self.checks[board.index()].is_resolved())
            .collect()
    }

    /// Render the nested grid for the console
    pub fn draw_console(&self) -> String {
        super::render::draw_console(self)
    }

    /// Serializable snapshot of the game
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            status: self.status,
            winner: self.winner(),
            current_player: self.current_player,
            active_board: self.active,
            next_board_rule: self.rule,
            sub_boards: self.checks.to_vec(),
            moves: self.history.clone(),
        }
    }
}

/// Machine-readable snapshot of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub status: GameStatus,
    pub winner: Option<Player>,
    pub current_player: Player,
    pub active_board: ActiveBoard,
    pub next_board_rule: NextBoardRule,
    /// Row-major resolution of the nine sub-boards
    pub sub_boards: Vec<SubBoardStatus>,
    pub moves: Vec<Move>,
}

impl GameSummary {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
