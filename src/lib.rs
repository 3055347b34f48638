//! 定长开放寻址词频哈希表
//!
//! 将字符串映射到出现次数，并记录每个新键放置时所需的探测次数，
//! 用于观察随着表逐渐填满，探测序列长度如何增长。
//!
//! ## 主要特性
//! - 线性探测与双哈希两种冲突解决方式
//! - 容量在创建时固定，不扩容、不删除
//! - 按插入顺序记录探测次数，输出周期统计表
//!
//! ## 快速开始
//!
//! ```rust
//! use probe_hashtable::*;
//!
//! fn main() -> Result<(), HashTableError> {
//!     let mut table = HashTable::new(113, ProbeMethod::DoubleHashing)?;
//!
//!     table.insert("cat");
//!     table.insert("cat");
//!     assert_eq!(table.search("cat"), 2);
//!     assert_eq!(table.search("dog"), 0);
//!
//!     let mut out = Vec::new();
//!     write_stats(&table, &mut out, 10)?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}
// 核心模块导出
pub mod error;
pub mod types;
pub mod map;
pub mod hash;
pub mod stats;
pub mod words;

use std::io::BufRead;

// 公共接口导出
pub use crate::{
    map::{
        HashTable,
        HashTableConfig,
        DEFAULT_CAPACITY
    },
    hash::{
        ProbeStrategy,
        DoubleHashStrategy,
        LinearProbeStrategy,
        ProbeSequence,
        strategy_for,
        word_hash
    },
    stats::{
        CollisionRecorder,
        CollisionSummary,
        StatsSnapshot,
        snapshots,
        write_frequencies,
        write_entire_table,
        write_stats
    },
    error::HashTableError,
    types::{InsertOutcome, ProbeMethod, Slot}
};

// 便捷功能函数

/// 批量插入
///
/// 遇到第一个被拒绝的词即停止，返回成功插入或计数的词数。
pub fn insert_words<I, S>(table: &mut HashTable, words: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut count = 0;
    for word in words {
        if table.insert(word.as_ref()).is_rejected() {
            log_info!("table full after {} words", count);
            break;
        }
        count += 1;
    }
    count
}

/// 从输入流读取单词并插入
pub fn count_words<R: BufRead>(table: &mut HashTable, reader: R) -> Result<usize, HashTableError> {
    let mut count = 0;
    for word in words::Words::new(reader) {
        let word = word.map_err(|e| {
            log_error!("failed to read input after {} words: {}", count, e);
            e
        })?;
        if table.insert(&word).is_rejected() {
            log_info!("table full after {} words", count);
            break;
        }
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_insert_words_stops_on_rejection() {
        let mut table = HashTable::new(2, ProbeMethod::LinearProbing).unwrap();
        let accepted = insert_words(&mut table, ["x", "y", "x", "z", "y"]);
        assert_eq!(accepted, 3, "第四个词无法放入");
        assert_eq!(table.search("x"), 2);
        assert_eq!(table.search("y"), 1);
    }

    #[test]
    fn test_count_words() {
        let mut table = HashTable::new(DEFAULT_CAPACITY, ProbeMethod::DoubleHashing).unwrap();
        let text = "the quick brown fox jumps over the lazy dog. The END";
        let count = count_words(&mut table, Cursor::new(text)).unwrap();
        assert_eq!(count, 11);
        assert_eq!(table.search("the"), 3);
        assert_eq!(table.len(), 9);
    }

    #[test]
    fn test_count_words_io_error() {
        let mut table = HashTable::new(7, ProbeMethod::LinearProbing).unwrap();
        let err = count_words(&mut table, Cursor::new(vec![0xffu8, b'\n'])).unwrap_err();
        assert!(matches!(err, HashTableError::Io(_)));
    }
}
