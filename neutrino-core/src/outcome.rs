//! 胜负判定

use serde::{Deserialize, Serialize};

use crate::board::State;
use crate::moves::MoveGenerator;
use crate::piece::Player;

/// 胜利原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// 中微子被推进了对方底线
    NeutrinoHome,
    /// 对方无子可走（困毙判负）
    NoLegalMoves,
}

/// 终局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// 胜方
    pub winner: Player,
    /// 胜利原因
    pub reason: WinReason,
}

impl State {
    /// 中微子所在底线的归属方
    pub(crate) fn neutrino_home_owner(&self) -> Option<Player> {
        self.board
            .neutrino_position()
            .and_then(|pos| Player::home_row_owner(pos.y))
    }

    /// 判定终局结果，游戏未结束时返回 None
    pub fn outcome(&self) -> Option<Outcome> {
        // 中微子进入谁的底线，谁就输
        if let Some(loser) = self.neutrino_home_owner() {
            return Some(Outcome {
                winner: loser.opponent(),
                reason: WinReason::NeutrinoHome,
            });
        }

        if MoveGenerator::generate(self).is_empty() {
            return Some(Outcome {
                winner: self.current_player.opponent(),
                reason: WinReason::NoLegalMoves,
            });
        }

        None
    }

    /// 胜方，游戏未结束时返回 None
    pub fn winner(&self) -> Option<Player> {
        self.outcome().map(|outcome| outcome.winner)
    }

    /// 是否为终局
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(player: Player, moved_neutrino: bool, rows: [&str; 5]) -> State {
        State::from_rows(player, moved_neutrino, rows).unwrap()
    }

    #[test]
    fn test_initial_not_terminal() {
        let s = State::initial();
        assert_eq!(s.winner(), None);
        assert!(!s.is_terminal());
    }

    #[test]
    fn test_neutrino_on_black_home_row() {
        let s = state(
            Player::Black,
            false,
            ["BBNBB", "B....", ".....", "W....", ".WWWW"],
        );
        assert_eq!(
            s.outcome(),
            Some(Outcome {
                winner: Player::White,
                reason: WinReason::NeutrinoHome,
            })
        );
    }

    #[test]
    fn test_neutrino_on_white_home_row() {
        let s = state(
            Player::White,
            true,
            ["BBBBB", ".....", "..W..", "W....", "N.WWW"],
        );
        assert_eq!(s.winner(), Some(Player::Black));
        assert!(s.legal_moves().is_empty());
    }

    #[test]
    fn test_no_legal_moves_loses() {
        // 中微子被团团围住，白方无法完成本回合
        let s = state(
            Player::White,
            false,
            ["BB...", "WB...", "NW...", "BW...", "B.WW."],
        );
        assert_eq!(
            s.outcome(),
            Some(Outcome {
                winner: Player::Black,
                reason: WinReason::NoLegalMoves,
            })
        );

        // 同一局面轮到黑方时，输的是黑方
        let s = state(
            Player::Black,
            false,
            ["BB...", "WB...", "NW...", "BW...", "B.WW."],
        );
        assert_eq!(s.winner(), Some(Player::White));
    }

    #[test]
    fn test_home_row_checked_before_moves() {
        // 中微子在白方底线上且无路可走：仍按底线判定
        let s = state(
            Player::White,
            false,
            ["BBB..", ".....", "..B..", "BWW..", "NWWW."],
        );
        assert_eq!(
            s.outcome(),
            Some(Outcome {
                winner: Player::Black,
                reason: WinReason::NeutrinoHome,
            })
        );
    }
}
