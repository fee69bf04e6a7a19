//! 棋子、玩家与位置定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, HOME_ROW_BLACK, HOME_ROW_WHITE};
use crate::error::{FormatError, RuleError};

/// 格子内容
///
/// 数值编号是序列化格式的一部分，不能调整顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Piece {
    /// 空格
    None = 0,
    /// 白方棋子
    White = 1,
    /// 黑方棋子
    Black = 2,
    /// 中微子（中立棋子）
    Neutrino = 3,
}

impl Piece {
    /// 获取记谱字符
    pub fn to_char(self) -> char {
        match self {
            Piece::None => '.',
            Piece::White => 'W',
            Piece::Black => 'B',
            Piece::Neutrino => 'N',
        }
    }

    /// 从记谱字符解析
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            '.' => Some(Piece::None),
            'W' => Some(Piece::White),
            'B' => Some(Piece::Black),
            'N' => Some(Piece::Neutrino),
            _ => None,
        }
    }

    /// 棋子所属玩家（空格和中微子没有归属）
    pub fn owner(self) -> Option<Player> {
        match self {
            Piece::White => Some(Player::White),
            Piece::Black => Some(Player::Black),
            Piece::None | Piece::Neutrino => None,
        }
    }
}

impl TryFrom<u8> for Piece {
    type Error = FormatError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Piece::None),
            1 => Ok(Piece::White),
            2 => Ok(Piece::Black),
            3 => Ok(Piece::Neutrino),
            _ => Err(FormatError::InvalidPiece { tag }),
        }
    }
}

impl From<Piece> for u8 {
    fn from(piece: Piece) -> u8 {
        piece as u8
    }
}

/// 玩家
///
/// 白方 = 0，黑方 = 1，同样属于序列化格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    /// 白方（先手，底线在 y = 4）
    White = 0,
    /// 黑方（后手，底线在 y = 0）
    Black = 1,
}

impl Player {
    /// 获取对方
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// 该玩家对应的棋子
    pub fn piece(self) -> Piece {
        match self {
            Player::White => Piece::White,
            Player::Black => Piece::Black,
        }
    }

    /// 该玩家的底线
    pub fn home_row(self) -> u8 {
        match self {
            Player::White => HOME_ROW_WHITE,
            Player::Black => HOME_ROW_BLACK,
        }
    }

    /// 查询某一行是谁的底线（第 1-3 行没有归属）
    pub fn home_row_owner(y: u8) -> Option<Player> {
        match y {
            HOME_ROW_BLACK => Some(Player::Black),
            HOME_ROW_WHITE => Some(Player::White),
            _ => None,
        }
    }

    /// 获取记谱字符
    pub fn to_char(self) -> char {
        match self {
            Player::White => 'w',
            Player::Black => 'b',
        }
    }

    /// 从记谱字符解析
    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'w' | 'W' => Some(Player::White),
            'b' | 'B' => Some(Player::Black),
            _ => None,
        }
    }
}

/// 八个滑行方向，顺序决定走法枚举顺序
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 棋盘位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// 列 (0-4)
    pub x: u8,
    /// 行 (0-4)
    pub y: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if (x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// 创建新位置，越界时返回错误
    pub fn try_new(x: i16, y: i16) -> Result<Self, RuleError> {
        if (0..BOARD_SIZE as i16).contains(&x) && (0..BOARD_SIZE as i16).contains(&y) {
            Ok(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(RuleError::OutOfBounds { x, y })
        }
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.x as usize) < BOARD_SIZE && (self.y as usize) < BOARD_SIZE
    }

    /// 获取偏移后的位置
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Position> {
        Position::try_new(
            i16::from(self.x) + i16::from(dx),
            i16::from(self.y) + i16::from(dy),
        )
        .ok()
    }

    /// 转换为行优先索引
    pub fn to_index(&self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    /// 从行优先索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Position {
                x: (index % BOARD_SIZE) as u8,
                y: (index / BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    /// 按行优先顺序遍历全部 25 个位置
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE * BOARD_SIZE).map(|i| Position {
            x: (i % BOARD_SIZE) as u8,
            y: (i / BOARD_SIZE) as u8,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
