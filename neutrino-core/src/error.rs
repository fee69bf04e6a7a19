//! 错误类型定义

use thiserror::Error;

use crate::piece::Piece;

/// 规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// 位置超出 5x5 棋盘
    #[error("Position out of bounds: ({x}, {y})")]
    OutOfBounds { x: i16, y: i16 },

    /// 走法不在合法走法列表中
    #[error("Invalid move: from ({from_x}, {from_y}) to ({to_x}, {to_y})")]
    InvalidMove {
        from_x: u8,
        from_y: u8,
        to_x: u8,
        to_y: u8,
    },

    /// 无效的棋盘记谱
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,
}

/// 编解码错误
#[derive(Error, Debug)]
pub enum FormatError {
    /// 高位（第 52 位及以上）被置位
    #[error("Encoded state {value:#x} sets bits above the 52-bit layout")]
    UnusedBits { value: u64 },

    /// 十进制字符串无法解析为 u64
    #[error("Invalid decimal state: {input:?}")]
    InvalidDecimal { input: String },

    /// 无效的棋子编号
    #[error("Invalid piece tag: {tag}")]
    InvalidPiece { tag: u8 },

    /// 棋子数量不满足不变量
    #[error("Expected {expected} {piece:?} pieces, found {actual}")]
    PieceCount {
        piece: Piece,
        expected: usize,
        actual: usize,
    },

    /// 批量数据长度不是 8 的倍数
    #[error("Batch length {len} is not a multiple of 8 bytes")]
    BatchLength { len: usize },

    /// Base64 解码错误
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 棋谱中没有任何局面
    #[error("History is empty")]
    EmptyHistory,

    /// 棋谱中相邻两个局面之间不存在合法走法
    #[error("History breaks at state {index}: no legal move leads there")]
    BrokenHistory { index: usize },
}

/// 顶层错误类型
#[derive(Error, Debug)]
pub enum NeutrinoError {
    /// 规则错误
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// 编解码错误
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

/// 操作结果类型
pub type Result<T, E = NeutrinoError> = std::result::Result<T, E>;
