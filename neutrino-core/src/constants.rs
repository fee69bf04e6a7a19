//! 规则常量定义

/// 棋盘边长（5x5）
pub const BOARD_SIZE: usize = 5;

/// 棋盘格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 每方棋子数量
pub const PIECES_PER_PLAYER: usize = 5;

/// 黑方底线（y = 0）
pub const HOME_ROW_BLACK: u8 = 0;

/// 白方底线（y = 4）
pub const HOME_ROW_WHITE: u8 = 4;

/// 状态头部位数：bit 0 = 是否已走中微子，bit 1 = 当前走子方
pub const HEADER_BITS: u32 = 2;

/// 每个格子占用的位数
pub const CELL_BITS: u32 = 2;

/// 编码一个状态实际使用的位数（2 + 2 * 25 = 52）
pub const STATE_BITS: u32 = HEADER_BITS + CELL_BITS * CELL_COUNT as u32;

/// 有效位掩码，高 12 位必须为 0
pub const STATE_MASK: u64 = (1 << STATE_BITS) - 1;

/// 批量编码中每个状态占用的字节数（小端 u64）
pub const WORD_BYTES: usize = 8;

/// 棋谱版本
pub const RECORD_VERSION: &str = "1.0";
