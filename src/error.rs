//! 统一错误处理 - 构造与报表输出可能出现的错误

use crate::types::ProbeMethod;

/// 哈希表可能发生的错误
///
/// 插入被拒绝（探测路径已满）与查找未命中都不是错误，分别由
/// [`InsertOutcome::Rejected`](crate::InsertOutcome::Rejected) 和返回值 0 表示。
#[derive(Debug, thiserror::Error)]
pub enum HashTableError {
    #[error("无效配置: {reason}")]
    InvalidConfig {
        reason: String,
    },

    #[error("容量 {capacity} 不满足 {method} 的最小容量 {minimum}")]
    CapacityTooSmall {
        capacity: usize,
        minimum: usize,
        method: ProbeMethod,
    },

    #[error("无法识别的探测方式: {name}")]
    UnknownMethod {
        name: String,
    },

    #[error("报表写入失败: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message() {
        let err = HashTableError::CapacityTooSmall {
            capacity: 1,
            minimum: 2,
            method: ProbeMethod::DoubleHashing,
        };
        let message = err.to_string();
        assert!(message.contains("Double Hashing"), "错误信息应包含探测方式: {}", message);
        assert!(message.contains('1') && message.contains('2'));
    }

    #[test]
    fn test_invalid_config_message() {
        let err = HashTableError::InvalidConfig {
            reason: "容量不能为 0".to_string(),
        };
        assert_eq!(err.to_string(), "无效配置: 容量不能为 0");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: HashTableError = io.into();
        assert!(matches!(err, HashTableError::Io(_)));
        assert!(err.to_string().contains("closed"));
    }
}
