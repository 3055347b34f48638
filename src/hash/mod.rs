//! 哈希模块 - 字符串哈希与探测策略

pub mod strategy;
pub mod double_hash;
pub mod linear_probe;

pub use strategy::{strategy_for, ProbeSequence, ProbeStrategy};
pub use double_hash::DoubleHashStrategy;
pub use linear_probe::LinearProbeStrategy;

/// 多项式累加哈希: `acc = byte + 31 * acc`，按 u32 回绕
///
/// 逐字节处理 UTF-8 编码，空串哈希为 0。不提供抗碰撞保证。
///
/// 字节按无符号值 (0..=255) 参与运算。ASCII 单词与按有符号 `char` 累加的实现结果一致，
/// 非 ASCII 字节（如 "é" 的 0xC3 0xA9）则不同：此处 `word_hash("é") == 6214`，
/// 有符号累加会得到 4294965318。分词器只产生 ASCII 单词。
#[inline]
pub fn word_hash(word: &str) -> u32 {
    word.bytes()
        .fold(0u32, |acc, b| (b as u32).wrapping_add(acc.wrapping_mul(31)))
}

/// 哈希值对应的初始槽位
#[inline]
pub fn calculate_slot(hash: u32, capacity: usize) -> usize {
    hash as usize % capacity
}
