//! 双哈希策略 - 步长由哈希值对 capacity - 1 取模得到

use crate::{
    error::HashTableError,
    hash::{calculate_slot, strategy::ProbeStrategy},
    types::ProbeMethod,
};

/// 双哈希策略
///
/// 步长为 `1 + hash % (capacity - 1)`，永不为 0。容量为素数时探测序列覆盖所有槽位，
/// 否则可能只在部分槽位间循环。
#[derive(Debug, Clone)]
pub struct DoubleHashStrategy {
    capacity: usize,
}

impl DoubleHashStrategy {
    /// 创建新双哈希策略，容量至少为 2
    pub fn new(capacity: usize) -> Result<Self, HashTableError> {
        ProbeMethod::DoubleHashing.check_capacity(capacity)?;
        Ok(Self { capacity })
    }
}

impl ProbeStrategy for DoubleHashStrategy {
    fn home_slot(&self, hash: u32) -> usize {
        calculate_slot(hash, self.capacity)
    }

    fn step(&self, hash: u32) -> usize {
        1 + calculate_slot(hash, self.capacity - 1)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn method(&self) -> ProbeMethod {
        ProbeMethod::DoubleHashing
    }
}
