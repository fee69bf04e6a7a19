//! 可达局面统计
//!
//! 从起始局面按代做广度优先展开，每一代按规范编码去重。

use std::collections::HashSet;

use tracing::debug;

use crate::board::State;

/// 从初始局面开始统计第 0 代到第 `generations` 代的局面数
pub fn census(generations: usize) -> Vec<usize> {
    census_from(State::initial(), generations)
}

/// 从指定局面开始统计第 0 代到第 `generations` 代的局面数
pub fn census_from(start: State, generations: usize) -> Vec<usize> {
    let mut sizes = Vec::with_capacity(generations + 1);
    let mut frontier = vec![start];
    sizes.push(frontier.len());

    for generation in 1..=generations {
        let mut seen = HashSet::new();
        let mut next = Vec::new();
        for state in &frontier {
            for child in state.next_states() {
                if seen.insert(child.encode()) {
                    next.push(child);
                }
            }
        }
        debug!(generation, states = next.len(), "expanded generation");

        sizes.push(next.len());
        frontier = next;
    }

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Player;

    #[test]
    fn test_census_fixture() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        assert_eq!(census(5), vec![1, 8, 95, 197, 1950, 3701]);
    }

    #[test]
    fn test_census_zero_generations() {
        assert_eq!(census(0), vec![1]);
    }

    #[test]
    fn test_census_from_terminal() {
        let terminal = State::from_rows(
            Player::White,
            false,
            ["BB...", "WB...", "NW...", "BW...", "B.WW."],
        )
        .unwrap();
        assert_eq!(census_from(terminal, 2), vec![1, 0, 0]);
    }
}
