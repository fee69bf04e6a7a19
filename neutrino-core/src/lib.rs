//! Neutrino 规则引擎
//!
//! 5x5 棋盘，双方各 5 子，外加一个中立的中微子。每回合先走中微子，
//! 再走己方棋子；棋子沿直线滑行到被挡住为止。把中微子推进对方底线，
//! 或让对方无子可走，即获胜。
//!
//! 包含:
//! - 棋子、棋盘、局面等核心数据结构
//! - 走法生成和规则验证
//! - 胜负判定
//! - 局面的 64 位规范编码（十进制字符串）和批量 Base64 编码
//! - 文本记谱与棋谱记录
//! - 可达局面统计

mod batch;
mod board;
mod census;
mod codec;
mod constants;
mod error;
mod moves;
mod notation;
mod outcome;
mod piece;
mod record;

pub use batch::Batch;
pub use board::{Board, State};
pub use census::{census, census_from};
pub use constants::*;
pub use error::{FormatError, NeutrinoError, Result, RuleError};
pub use moves::{Move, MoveGenerator};
pub use notation::{Notation, INITIAL_NOTATION};
pub use outcome::{Outcome, WinReason};
pub use piece::{Piece, Player, Position, DIRECTIONS};
pub use record::{find_move, GameRecord};
