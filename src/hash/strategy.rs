//! 探测策略模块 - 定义初始槽位与步长

use crate::{
    error::HashTableError,
    hash::{word_hash, DoubleHashStrategy, LinearProbeStrategy},
    types::ProbeMethod,
};

/// 探测策略特征
pub trait ProbeStrategy {
    /// 哈希值对应的初始槽位
    fn home_slot(&self, hash: u32) -> usize;

    /// 探测步长，范围 [1, capacity - 1]（容量为 1 时为 1）
    fn step(&self, hash: u32) -> usize;

    /// 表容量
    fn capacity(&self) -> usize;

    /// 策略对应的探测方式
    fn method(&self) -> ProbeMethod;

    /// 生成键的完整探测序列
    fn probe_sequence(&self, word: &str) -> ProbeSequence {
        let hash = word_hash(word);
        ProbeSequence::new(self.home_slot(hash), self.step(hash), self.capacity())
    }
}

/// 按方式创建探测策略
pub fn strategy_for(
    method: ProbeMethod,
    capacity: usize,
) -> Result<Box<dyn ProbeStrategy>, HashTableError> {
    Ok(match method {
        ProbeMethod::LinearProbing => Box::new(LinearProbeStrategy::new(capacity)?),
        ProbeMethod::DoubleHashing => Box::new(DoubleHashStrategy::new(capacity)?),
    })
}

/// 探测序列迭代器
///
/// 依次产生 `(attempt, slot)`，`attempt` 从 0 开始，最多 `capacity` 次。
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    slot: usize,
    step: usize,
    capacity: usize,
    attempt: usize,
}

impl ProbeSequence {
    pub fn new(home: usize, step: usize, capacity: usize) -> Self {
        Self {
            slot: home,
            step,
            capacity,
            attempt: 0,
        }
    }

    /// 已产生的探测次数
    pub fn attempts(&self) -> usize {
        self.attempt
    }
}

impl Iterator for ProbeSequence {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.attempt >= self.capacity {
            return None;
        }
        let item = (self.attempt, self.slot);
        self.attempt += 1;
        self.slot = (self.slot + self.step) % self.capacity;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capacity - self.attempt;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}
