//! 走法生成和验证

use serde::{Deserialize, Serialize};

use crate::board::{Board, State};
use crate::constants::BOARD_SIZE;
use crate::error::RuleError;
use crate::piece::{Piece, Player, Position, DIRECTIONS};

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始位置
    pub from: Position,
    /// 目标位置
    pub to: Position,
}

impl Move {
    /// 创建新走法
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    pub(crate) fn invalid(&self) -> RuleError {
        RuleError::InvalidMove {
            from_x: self.from.x,
            from_y: self.from.y,
            to_x: self.to.x,
            to_y: self.to.y,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成从指定位置出发的全部目标格
    ///
    /// 棋子沿八个方向之一一直滑到被棋子或边界挡住为止，停在最后一个空格上；
    /// 一步都走不动的方向不产生走法。
    pub fn destinations_from(board: &Board, pos: Position) -> Vec<Position> {
        let mut destinations = Vec::with_capacity(DIRECTIONS.len());

        for (dx, dy) in DIRECTIONS {
            let Some(to) = Self::slide(board, pos, dx, dy) else {
                continue;
            };

            // 不允许用己方棋子填满自己的底线
            if Self::completes_home_row(board, pos, to) {
                continue;
            }

            destinations.push(to);
        }

        destinations
    }

    /// 当前局面的全部合法走法（终局时为空）
    pub fn legal_moves(state: &State) -> Vec<Move> {
        // 中微子已进入底线时游戏结束；无子可走的情况生成结果本来就为空
        if state.neutrino_home_owner().is_some() {
            return Vec::new();
        }
        Self::generate(state)
    }

    /// 不考虑胜负，按规则生成走子方的全部走法
    pub(crate) fn generate(state: &State) -> Vec<Move> {
        let board = state.board();
        let mut moves = Vec::with_capacity(32);

        for from in board.positions_of(state.piece_to_move()) {
            for to in Self::destinations_from(board, from) {
                moves.push(Move::new(from, to));
            }
        }

        moves
    }

    /// 沿一个方向滑行，返回终点；走不动时返回 None
    fn slide(board: &Board, from: Position, dx: i8, dy: i8) -> Option<Position> {
        let mut current = from;
        while let Some(next) = current.offset(dx, dy) {
            if board.get(next) != Piece::None {
                break;
            }
            current = next;
        }
        (current != from).then_some(current)
    }

    /// 检查走完后是否由走子方自己的棋子占满了自己的底线
    fn completes_home_row(board: &Board, from: Position, to: Position) -> bool {
        let Some(owner) = Player::home_row_owner(to.y) else {
            return false;
        };
        let piece = board.get(from);
        if piece.owner() != Some(owner) {
            return false;
        }

        (0..BOARD_SIZE as u8).all(|x| {
            let cell = Position::new_unchecked(x, to.y);
            if cell == to {
                true
            } else if cell == from {
                false
            } else {
                board.get(cell) == piece
            }
        })
    }
}
