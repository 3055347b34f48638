//! 核心类型定义 - 探测方式、槽位与插入结果

use std::{fmt, str::FromStr};

use crate::error::HashTableError;

/// 冲突解决方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProbeMethod {
    /// 线性探测，步长恒为 1
    #[default]
    LinearProbing,
    /// 双哈希，步长由第二次取模决定
    DoubleHashing,
}

impl ProbeMethod {
    /// 报表中使用的名称
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProbeMethod::LinearProbing => "Linear Probing",
            ProbeMethod::DoubleHashing => "Double Hashing",
        }
    }

    /// 该方式要求的最小容量
    pub const fn min_capacity(&self) -> usize {
        match self {
            ProbeMethod::LinearProbing => 1,
            // 步长公式对 capacity - 1 取模
            ProbeMethod::DoubleHashing => 2,
        }
    }

    /// 校验容量: 0 为无效配置，低于最小容量则报告所需下限
    pub fn check_capacity(&self, capacity: usize) -> Result<(), HashTableError> {
        if capacity == 0 {
            return Err(HashTableError::InvalidConfig {
                reason: "容量不能为 0".to_string(),
            });
        }
        let minimum = self.min_capacity();
        if capacity < minimum {
            return Err(HashTableError::CapacityTooSmall {
                capacity,
                minimum,
                method: *self,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ProbeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProbeMethod {
    type Err = HashTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "linear probing" | "l" => Ok(ProbeMethod::LinearProbing),
            "double" | "double hashing" | "d" => Ok(ProbeMethod::DoubleHashing),
            _ => Err(HashTableError::UnknownMethod { name: s.to_string() }),
        }
    }
}

/// 表中的一个槽位
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Empty,
    Occupied {
        /// 出现次数，至少为 1
        frequency: u32,
        key: String,
        /// 该键在插入顺序中的序号，用于查询探测记录
        ordinal: usize,
    },
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// 空槽位返回 0
    pub fn frequency(&self) -> u32 {
        match self {
            Slot::Empty => 0,
            Slot::Occupied { frequency, .. } => *frequency,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Slot::Empty => None,
            Slot::Occupied { key, .. } => Some(key),
        }
    }

    pub fn ordinal(&self) -> Option<usize> {
        match self {
            Slot::Empty => None,
            Slot::Occupied { ordinal, .. } => Some(*ordinal),
        }
    }
}

/// 插入操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// 新键落入空槽位
    Inserted { frequency: u32 },
    /// 键已存在，计数加一
    Incremented { frequency: u32 },
    /// 探测序列耗尽，未找到空槽位或相同键
    Rejected,
}

impl InsertOutcome {
    /// 插入后的出现次数，被拒绝时为 0
    pub fn frequency(&self) -> u32 {
        match self {
            InsertOutcome::Inserted { frequency } | InsertOutcome::Incremented { frequency } => {
                *frequency
            }
            InsertOutcome::Rejected => 0,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, InsertOutcome::Rejected)
    }

    /// 是否新增了一个不同的键
    pub fn is_new_key(&self) -> bool {
        matches!(self, InsertOutcome::Inserted { .. })
    }
}
