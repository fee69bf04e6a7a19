//! 局面序列的批量编码
//!
//! 每个局面先编码为 64 位整数，按小端顺序排成 8 字节一组的字节串，
//! 再整体做标准 Base64 编码（带填充）。空序列编码为空字符串。

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use crate::board::State;
use crate::constants::WORD_BYTES;
use crate::error::FormatError;

/// 批量编解码
pub struct Batch;

impl Batch {
    /// 编码局面序列
    pub fn encode(states: &[State]) -> String {
        let mut bytes = Vec::with_capacity(states.len() * WORD_BYTES);
        for state in states {
            bytes.extend_from_slice(&state.encode().to_le_bytes());
        }
        STANDARD.encode(bytes)
    }

    /// 解码局面序列
    pub fn decode(text: &str) -> Result<Vec<State>, FormatError> {
        let bytes = STANDARD.decode(text)?;
        if bytes.len() % WORD_BYTES != 0 {
            return Err(FormatError::BatchLength { len: bytes.len() });
        }
        debug!(states = bytes.len() / WORD_BYTES, "decoding state batch");

        bytes
            .chunks_exact(WORD_BYTES)
            .map(|chunk| {
                let mut word = [0u8; WORD_BYTES];
                word.copy_from_slice(chunk);
                State::decode(u64::from_le_bytes(word))
            })
            .collect()
    }
}
