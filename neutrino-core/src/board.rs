//! 棋盘与局面状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT, PIECES_PER_PLAYER};
use crate::error::{FormatError, RuleError};
use crate::moves::{Move, MoveGenerator};
use crate::piece::{Piece, Player, Position};

/// 棋盘
///
/// 5x5 行优先存储，索引为 y * 5 + x。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Piece; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: [Piece::None; CELL_COUNT],
        }
    }

    /// 创建初始棋盘
    pub fn initial() -> Self {
        let mut board = Self::empty();

        // 底线：黑方在 y=0，白方在 y=4
        for player in [Player::Black, Player::White] {
            for x in 0..BOARD_SIZE as u8 {
                board.set(Position::new_unchecked(x, player.home_row()), player.piece());
            }
        }

        // 中微子在正中央
        board.set(Position::new_unchecked(2, 2), Piece::Neutrino);

        board
    }

    /// 获取指定位置的内容（棋盘外视为空格）
    pub fn get(&self, pos: Position) -> Piece {
        if pos.is_valid() {
            self.squares[pos.to_index()]
        } else {
            Piece::None
        }
    }

    /// 获取指定位置的内容，越界时返回错误
    pub fn piece_at(&self, pos: Position) -> Result<Piece, RuleError> {
        if pos.is_valid() {
            Ok(self.squares[pos.to_index()])
        } else {
            Err(RuleError::OutOfBounds {
                x: i16::from(pos.x),
                y: i16::from(pos.y),
            })
        }
    }

    /// 设置指定位置的内容
    pub(crate) fn set(&mut self, pos: Position, piece: Piece) {
        if pos.is_valid() {
            self.squares[pos.to_index()] = piece;
        }
    }

    /// 移动棋子（不检查规则）
    pub(crate) fn move_piece(&mut self, from: Position, to: Position) {
        let piece = self.get(from);
        self.set(from, Piece::None);
        self.set(to, piece);
    }

    /// 按行优先顺序获取某种棋子的全部位置
    pub fn positions_of(&self, piece: Piece) -> Vec<Position> {
        Position::all().filter(|&pos| self.get(pos) == piece).collect()
    }

    /// 查找中微子位置
    pub fn neutrino_position(&self) -> Option<Position> {
        Position::all().find(|&pos| self.get(pos) == Piece::Neutrino)
    }

    /// 统计某种棋子的数量
    pub fn count(&self, piece: Piece) -> usize {
        self.squares.iter().filter(|&&p| p == piece).count()
    }

    /// 获取一行
    pub fn row(&self, y: u8) -> [Piece; BOARD_SIZE] {
        let start = y as usize * BOARD_SIZE;
        let mut row = [Piece::None; BOARD_SIZE];
        row.copy_from_slice(&self.squares[start..start + BOARD_SIZE]);
        row
    }

    /// 检查棋子数量不变量：1 个中微子，双方各 5 子，其余 14 格为空
    pub fn validate(&self) -> Result<(), FormatError> {
        let expected = [
            (Piece::Neutrino, 1),
            (Piece::White, PIECES_PER_PLAYER),
            (Piece::Black, PIECES_PER_PLAYER),
        ];
        for (piece, expected) in expected {
            let actual = self.count(piece);
            if actual != expected {
                return Err(FormatError::PieceCount {
                    piece,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// 完整的局面状态
///
/// 一个完整回合分两步：先走中微子，再走己方棋子。`moved_neutrino`
/// 记录的是当前处于哪一步，而不是历史信息。
///
/// 状态是值类型：`apply_move` 总是返回新状态，原状态不变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u64", try_from = "u64")]
pub struct State {
    pub(crate) board: Board,
    pub(crate) moved_neutrino: bool,
    pub(crate) current_player: Player,
}

impl State {
    /// 创建初始状态：白方先走，先走中微子
    pub fn initial() -> Self {
        Self {
            board: Board::initial(),
            moved_neutrino: false,
            current_player: Player::White,
        }
    }

    /// 从棋盘创建状态（不检查棋子数量）
    pub(crate) fn from_parts(board: Board, current_player: Player, moved_neutrino: bool) -> Self {
        Self {
            board,
            moved_neutrino,
            current_player,
        }
    }

    /// 棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前走子方
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// 本回合是否已经走过中微子
    pub fn moved_neutrino(&self) -> bool {
        self.moved_neutrino
    }

    /// 获取指定位置的内容
    pub fn piece_at(&self, pos: Position) -> Result<Piece, RuleError> {
        self.board.piece_at(pos)
    }

    /// 按行优先顺序获取某种棋子的全部位置
    pub fn positions_of(&self, piece: Piece) -> Vec<Position> {
        self.board.positions_of(piece)
    }

    /// 下一步要走的棋子
    pub fn piece_to_move(&self) -> Piece {
        if self.moved_neutrino {
            self.current_player.piece()
        } else {
            Piece::Neutrino
        }
    }

    /// 走出导致当前局面的那一步的玩家
    ///
    /// 对初始局面没有意义（此时返回黑方）。
    pub fn previous_move_player(&self) -> Player {
        if self.moved_neutrino {
            self.current_player
        } else {
            self.current_player.opponent()
        }
    }

    /// 当前局面的全部合法走法
    pub fn legal_moves(&self) -> Vec<Move> {
        MoveGenerator::legal_moves(self)
    }

    /// 执行走法（只检查起点棋子和终点空格，不检查是否合法）
    ///
    /// 这一检查保证棋子数量不变量永远不会被破坏；完整的合法性检查见 [`State::play`]。
    pub fn apply_move(&self, mv: Move) -> Result<State, RuleError> {
        let from = self.board.piece_at(mv.from)?;
        let to = self.board.piece_at(mv.to)?;
        if from != self.piece_to_move() || to != Piece::None {
            return Err(mv.invalid());
        }
        Ok(self.apply_unchecked(mv))
    }

    /// 执行走法，走法必须在 `legal_moves` 中
    pub fn play(&self, mv: Move) -> Result<State, RuleError> {
        if self.is_terminal() {
            return Err(RuleError::GameOver);
        }
        if !self.legal_moves().contains(&mv) {
            return Err(mv.invalid());
        }
        Ok(self.apply_unchecked(mv))
    }

    /// 执行走法（不做任何检查，仅用于走法生成器产生的走法）
    pub(crate) fn apply_unchecked(&self, mv: Move) -> State {
        let mut next = *self;
        next.board.move_piece(mv.from, mv.to);
        if self.moved_neutrino {
            next.current_player = self.current_player.opponent();
        }
        next.moved_neutrino = !self.moved_neutrino;
        next
    }

    /// 全部后继局面，顺序与 `legal_moves` 一致
    pub fn next_states(&self) -> Vec<State> {
        self.legal_moves()
            .into_iter()
            .map(|mv| self.apply_unchecked(mv))
            .collect()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::initial()
    }
}
