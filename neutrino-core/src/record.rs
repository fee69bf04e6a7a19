//! 棋谱记录
//!
//! 棋谱保存从起始局面开始的全部局面，传输时使用批量编码或 JSON。
//! 相邻两个局面之间必须恰好隔一步合法走法。

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::batch::Batch;
use crate::board::State;
use crate::constants::RECORD_VERSION;
use crate::error::{FormatError, Result, RuleError};
use crate::moves::Move;
use crate::outcome::Outcome;

/// 完整的棋谱记录
///
/// 反序列化时同样检查历史，空棋谱和断开的棋谱都会被拒绝。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameRecord")]
pub struct GameRecord {
    /// 版本号
    pub version: String,
    /// 局面列表，第一个是起始局面，不会为空
    states: Vec<State>,
}

/// 未经检查的棋谱，仅用于反序列化
#[derive(Deserialize)]
struct RawGameRecord {
    version: String,
    states: Vec<State>,
}

impl TryFrom<RawGameRecord> for GameRecord {
    type Error = FormatError;

    fn try_from(raw: RawGameRecord) -> Result<Self, Self::Error> {
        Self::check_history(&raw.states)?;
        Ok(Self {
            version: raw.version,
            states: raw.states,
        })
    }
}

impl GameRecord {
    /// 从初始局面开始新棋谱
    pub fn new() -> Self {
        Self::from_state(State::initial())
    }

    /// 从指定局面开始新棋谱
    pub fn from_state(start: State) -> Self {
        Self {
            version: RECORD_VERSION.to_string(),
            states: vec![start],
        }
    }

    /// 从局面序列创建，检查相邻局面之间是否由合法走法连接
    pub fn from_states(states: Vec<State>) -> Result<Self, FormatError> {
        Self::check_history(&states)?;
        Ok(Self {
            version: RECORD_VERSION.to_string(),
            states,
        })
    }

    fn check_history(states: &[State]) -> Result<(), FormatError> {
        if states.is_empty() {
            return Err(FormatError::EmptyHistory);
        }
        for (i, pair) in states.windows(2).enumerate() {
            if find_move(&pair[0], &pair[1]).is_none() {
                warn!(index = i + 1, "history contains an unreachable state");
                return Err(FormatError::BrokenHistory { index: i + 1 });
            }
        }
        Ok(())
    }

    /// 从十进制编码的起始局面出发，依次走完给定走法
    pub fn replay(start: &str, moves: &[Move]) -> Result<Self> {
        let mut record = Self::from_state(State::from_decimal(start)?);
        for &mv in moves {
            record.play(mv)?;
        }
        Ok(record)
    }

    /// 起始局面
    pub fn start(&self) -> &State {
        &self.states[0]
    }

    /// 当前局面
    pub fn current(&self) -> &State {
        &self.states[self.states.len() - 1]
    }

    /// 全部局面
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// 已走步数（中微子和己方棋子各算一步）
    pub fn ply(&self) -> usize {
        self.states.len() - 1
    }

    /// 当前局面的终局结果
    pub fn outcome(&self) -> Option<Outcome> {
        self.current().outcome()
    }

    /// 走一步
    pub fn play(&mut self, mv: Move) -> Result<&State, RuleError> {
        let next = self.current().play(mv)?;
        self.states.push(next);
        debug!(ply = self.ply(), %mv, "played move");
        Ok(self.current())
    }

    /// 悔一步，返回被撤销的走法
    pub fn undo(&mut self) -> Option<Move> {
        if self.states.len() < 2 {
            return None;
        }
        let undone = self.states.pop()?;
        let mv = find_move(self.current(), &undone);
        debug!(ply = self.ply(), "undid move");
        mv
    }

    /// 走法列表（由相邻局面还原）
    pub fn moves(&self) -> Vec<Move> {
        self.states
            .windows(2)
            .filter_map(|pair| find_move(&pair[0], &pair[1]))
            .collect()
    }

    /// 批量编码
    pub fn to_batch(&self) -> String {
        Batch::encode(&self.states)
    }

    /// 从批量编码恢复
    pub fn from_batch(text: &str) -> Result<Self, FormatError> {
        Self::from_states(Batch::decode(text)?)
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// 查找从 `from` 走到 `to` 的合法走法
pub fn find_move(from: &State, to: &State) -> Option<Move> {
    from.legal_moves()
        .into_iter()
        .find(|&mv| from.apply_unchecked(mv) == *to)
}
