//! 线性探测策略 - 冲突时顺序检查下一个槽位

use crate::{
    error::HashTableError,
    hash::{calculate_slot, strategy::ProbeStrategy},
    types::ProbeMethod,
};

/// 线性探测策略
#[derive(Debug, Clone)]
pub struct LinearProbeStrategy {
    capacity: usize,
}

impl LinearProbeStrategy {
    /// 创建新线性探测策略
    pub fn new(capacity: usize) -> Result<Self, HashTableError> {
        ProbeMethod::LinearProbing.check_capacity(capacity)?;
        Ok(Self { capacity })
    }
}

impl ProbeStrategy for LinearProbeStrategy {
    fn home_slot(&self, hash: u32) -> usize {
        calculate_slot(hash, self.capacity)
    }

    fn step(&self, _hash: u32) -> usize {
        1
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn method(&self) -> ProbeMethod {
        ProbeMethod::LinearProbing
    }
}
