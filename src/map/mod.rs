//! 哈希表核心模块 - 开放寻址词频表及其配置

pub mod table;

pub use table::{HashTable, HashTableConfig};

/// 默认槽位数量（素数）
pub const DEFAULT_CAPACITY: usize = 113;
