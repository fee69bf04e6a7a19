//! 局面的 64 位规范编码
//!
//! 位布局（从最低位开始）：
//! - bit 0：是否已走中微子
//! - bit 1：当前走子方（0 = 白，1 = 黑）
//! - bit 2+2i, 3+2i：第 i = y*5+x 格的棋子编号
//!
//! 共使用 52 位，高 12 位必须为 0。十进制字符串形式用于单个局面的交换。

use crate::board::{Board, State};
use crate::constants::{CELL_BITS, HEADER_BITS, STATE_MASK};
use crate::error::FormatError;
use crate::piece::{Piece, Player, Position};

const CELL_MASK: u64 = (1 << CELL_BITS) - 1;

fn cell_shift(pos: Position) -> u32 {
    HEADER_BITS + CELL_BITS * pos.to_index() as u32
}

impl State {
    /// 编码为 64 位整数
    pub fn encode(&self) -> u64 {
        let mut value = self.moved_neutrino as u64;
        value |= (self.current_player as u64) << 1;

        for pos in Position::all() {
            value |= u64::from(u8::from(self.board.get(pos))) << cell_shift(pos);
        }

        value
    }

    /// 从 64 位整数解码
    ///
    /// 高位被置位或棋子数量不满足不变量时返回错误。
    pub fn decode(value: u64) -> Result<State, FormatError> {
        if value & !STATE_MASK != 0 {
            return Err(FormatError::UnusedBits { value });
        }

        let moved_neutrino = value & 0b01 != 0;
        let current_player = if value & 0b10 != 0 {
            Player::Black
        } else {
            Player::White
        };

        let mut board = Board::empty();
        for pos in Position::all() {
            let tag = ((value >> cell_shift(pos)) & CELL_MASK) as u8;
            board.set(pos, Piece::try_from(tag)?);
        }
        board.validate()?;

        Ok(State::from_parts(board, current_player, moved_neutrino))
    }

    /// 十进制字符串形式
    pub fn to_decimal(&self) -> String {
        self.encode().to_string()
    }

    /// 从十进制字符串解码
    pub fn from_decimal(text: &str) -> Result<State, FormatError> {
        let value = text
            .parse::<u64>()
            .map_err(|_| FormatError::InvalidDecimal {
                input: text.to_string(),
            })?;
        Self::decode(value)
    }
}

impl From<State> for u64 {
    fn from(state: State) -> u64 {
        state.encode()
    }
}

impl From<&State> for u64 {
    fn from(state: &State) -> u64 {
        state.encode()
    }
}

impl TryFrom<u64> for State {
    type Error = FormatError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        State::decode(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> State {
        State::from_rows(
            Player::Black,
            false,
            ["B.BBB", "NB...", ".....", "....W", "WWWW."],
        )
        .unwrap()
    }

    #[test]
    fn test_encode_initial() {
        assert_eq!(State::initial().encode(), 0x554000c000aa8);
        assert_eq!(State::initial().to_decimal(), "1499734061615784");
    }

    #[test]
    fn test_encode_fixture() {
        let state = fixture();
        assert_eq!(state.encode(), 0x155000000ba8a);
        assert_eq!(u64::from(&state), 0x155000000ba8a);
        assert_eq!(state.to_decimal(), "374933465119370");
    }

    #[test]
    fn test_header_bits() {
        let s = State::initial();
        let after = s.next_states()[0];
        assert_eq!(after.encode() & 0b11, 0b01);

        let black = fixture();
        assert_eq!(black.encode() & 0b11, 0b10);
    }

    #[test]
    fn test_decode_fixtures() {
        assert_eq!(State::decode(0x554000c000aa8).unwrap(), State::initial());
        assert_eq!(State::from_decimal("374933465119370").unwrap(), fixture());
        assert_eq!(State::try_from(0x155000000ba8a_u64).unwrap(), fixture());
    }

    #[test]
    fn test_roundtrip_reachable() {
        let mut frontier = vec![State::initial()];
        for _ in 0..4 {
            let mut next = Vec::new();
            for state in &frontier {
                assert_eq!(State::decode(state.encode()).unwrap(), *state);
                assert_eq!(State::from_decimal(&state.to_decimal()).unwrap(), *state);
                assert_eq!(state.encode() & !STATE_MASK, 0);
                next.extend(state.next_states());
            }
            frontier = next;
        }
    }

    #[test]
    fn test_reject_unused_bits() {
        let value = State::initial().encode() | (1 << 52);
        assert!(matches!(
            State::decode(value),
            Err(FormatError::UnusedBits { .. })
        ));
        assert!(State::decode(u64::MAX).is_err());
    }

    #[test]
    fn test_reject_bad_decimal() {
        for input in ["", "abc", "-1", "0x554000c000aa8", "18446744073709551616"] {
            assert!(matches!(
                State::from_decimal(input),
                Err(FormatError::InvalidDecimal { .. })
            ));
        }
    }

    #[test]
    fn test_reject_invalid_board() {
        // 空棋盘没有中微子
        assert!(matches!(
            State::decode(0),
            Err(FormatError::PieceCount {
                piece: Piece::Neutrino,
                ..
            })
        ));
    }

    #[test]
    fn test_serde_as_integer() {
        let json = serde_json::to_string(&State::initial()).unwrap();
        assert_eq!(json, "1499734061615784");
        let state: State = serde_json::from_str(&json).unwrap();
        assert_eq!(state, State::initial());

        assert!(serde_json::from_str::<State>("0").is_err());
    }
}
