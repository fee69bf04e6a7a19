//! 文本记谱
//!
//! 棋盘用 5 个长度为 5 的字符串表示，从第 0 行开始：
//! `.` 空格，`W` 白子，`B` 黑子，`N` 中微子。
//!
//! 单行格式：`<第0行>/<第1行>/<第2行>/<第3行>/<第4行> <走子方> <阶段>`
//!
//! 走子方为 `w` 或 `b`；阶段为 `n`（该走中微子）或 `p`（该走己方棋子）。
//!
//! 示例：
//! `BBBBB/...../..N../...../WWWWW w n`

use crate::board::{Board, State};
use crate::constants::BOARD_SIZE;
use crate::error::RuleError;
use crate::piece::{Piece, Player, Position};

/// 初始局面
pub const INITIAL_NOTATION: &str = "BBBBB/...../..N../...../WWWWW w n";

/// 记谱处理
pub struct Notation;

impl Notation {
    /// 解析单行记谱
    pub fn parse(text: &str) -> Result<State, RuleError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(invalid(format!(
                "Expected 3 fields (board, player, phase), got {}",
                parts.len()
            )));
        }

        let rows: Vec<&str> = parts[0].split('/').collect();

        let player = single_char(parts[1])
            .and_then(Player::from_char)
            .ok_or_else(|| invalid(format!("Invalid player: {}", parts[1])))?;

        let moved_neutrino = match parts[2] {
            "n" => false,
            "p" => true,
            other => return Err(invalid(format!("Invalid phase: {}", other))),
        };

        Self::parse_rows(player, moved_neutrino, &rows)
    }

    /// 由走子方、阶段和 5 行棋盘构造局面
    pub fn parse_rows(
        player: Player,
        moved_neutrino: bool,
        rows: &[&str],
    ) -> Result<State, RuleError> {
        let board = Self::parse_board(rows)?;
        board.validate().map_err(|e| invalid(e.to_string()))?;
        Ok(State::from_parts(board, player, moved_neutrino))
    }

    /// 解析棋盘部分
    fn parse_board(rows: &[&str]) -> Result<Board, RuleError> {
        if rows.len() != BOARD_SIZE {
            return Err(invalid(format!(
                "Expected {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (y, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != BOARD_SIZE {
                return Err(invalid(format!(
                    "Row {} has {} columns, expected {}",
                    y,
                    cells.len(),
                    BOARD_SIZE
                )));
            }

            for (x, c) in cells.into_iter().enumerate() {
                let piece = Piece::from_char(c)
                    .ok_or_else(|| invalid(format!("Invalid piece character: {}", c)))?;
                board.set(Position::new_unchecked(x as u8, y as u8), piece);
            }
        }

        Ok(board)
    }

    /// 将局面转换为单行记谱
    pub fn to_string(state: &State) -> String {
        let phase = if state.moved_neutrino() { 'p' } else { 'n' };
        format!(
            "{} {} {}",
            Self::board_rows(state.board()).join("/"),
            state.current_player().to_char(),
            phase
        )
    }

    /// 将棋盘转换为 5 行字符串
    pub fn board_rows(board: &Board) -> Vec<String> {
        (0..BOARD_SIZE as u8)
            .map(|y| board.row(y).iter().map(|p| p.to_char()).collect())
            .collect()
    }
}

impl State {
    /// 由文本棋盘构造局面
    ///
    /// 棋子数量必须满足 1 个中微子、双方各 5 子。
    pub fn from_rows(
        player: Player,
        moved_neutrino: bool,
        rows: [&str; BOARD_SIZE],
    ) -> Result<State, RuleError> {
        Notation::parse_rows(player, moved_neutrino, &rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in Notation::board_rows(self).iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Notation::to_string(self))
    }
}

fn invalid(reason: String) -> RuleError {
    RuleError::InvalidNotation { reason }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_initial() {
        let state = Notation::parse(INITIAL_NOTATION).unwrap();
        assert_eq!(state, State::initial());
        assert_eq!(Notation::to_string(&state), INITIAL_NOTATION);
    }

    #[test]
    fn test_from_rows() {
        let state = State::from_rows(
            Player::Black,
            false,
            ["B.BBB", "NB...", ".....", "....W", "WWWW."],
        )
        .unwrap();

        assert_eq!(state.current_player(), Player::Black);
        assert!(!state.moved_neutrino());
        assert_eq!(
            state.board().get(Position::new_unchecked(0, 1)),
            Piece::Neutrino
        );
        assert_eq!(
            state.board().get(Position::new_unchecked(4, 3)),
            Piece::White
        );
        assert_eq!(
            Notation::to_string(&state),
            "B.BBB/NB.../...../....W/WWWW. b n"
        );
    }

    #[test]
    fn test_roundtrip_custom() {
        let text = "BBB../...../..B../BWW../NWWW. w p";
        let state = Notation::parse(text).unwrap();
        assert!(state.moved_neutrino());
        assert_eq!(Notation::to_string(&state), text);
        assert_eq!(state.to_string(), text);
    }

    #[test]
    fn test_board_display() {
        let board = Board::initial();
        assert_eq!(board.to_string(), "BBBBB\n.....\n..N..\n.....\nWWWWW");
    }

    #[test]
    fn test_invalid_notation() {
        // 行数不对
        assert!(Notation::parse("BBBBB/...../..N.. w n").is_err());

        // 列数不对
        assert!(Notation::parse("BBBBB/....../..N../...../WWWWW w n").is_err());

        // 无效字符
        assert!(Notation::parse("BBBBB/...../..X../...../WWWWW w n").is_err());

        // 无效走子方和阶段
        assert!(Notation::parse("BBBBB/...../..N../...../WWWWW r n").is_err());
        assert!(Notation::parse("BBBBB/...../..N../...../WWWWW w x").is_err());
        assert!(Notation::parse("BBBBB/...../..N../...../WWWWW w").is_err());
    }

    #[test]
    fn test_piece_count_rejected() {
        let err = State::from_rows(
            Player::White,
            false,
            ["BBBBB", "..N..", "..N..", ".....", "WWWWW"],
        )
        .unwrap_err();
        assert!(matches!(err, RuleError::InvalidNotation { .. }));

        assert!(State::from_rows(
            Player::White,
            false,
            ["BBBB.", ".....", "..N..", ".....", "WWWWW"],
        )
        .is_err());
    }
}
