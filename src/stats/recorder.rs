// src/stats/recorder.rs
//! 冲突记录器 - 按插入顺序保存每个新键的探测次数

/// 冲突记录器
///
/// 只追加；第 k 项为第 k 个新插入键的探测次数（0 表示落在初始槽位）。
#[derive(Debug, Clone, Default)]
pub struct CollisionRecorder {
    probes: Vec<usize>,
}

/// 前 n 项探测记录的汇总
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionSummary {
    /// 参与统计的条目数
    pub entries: usize,
    /// 无冲突落位的条目数
    pub at_home: usize,
    /// 平均探测次数
    pub average: f64,
    /// 最大探测次数
    pub max: usize,
}

impl CollisionSummary {
    /// 无冲突落位的百分比，范围 [0, 100]
    pub fn percent_at_home(&self) -> f64 {
        self.at_home as f64 * 100.0 / self.entries as f64
    }
}

impl CollisionRecorder {
    /// 预留 `capacity` 项空间
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            probes: Vec::with_capacity(capacity),
        }
    }

    /// 记录一次新键插入
    pub fn record(&mut self, probes: usize) {
        self.probes.push(probes);
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// 第 `ordinal` 个插入键的探测次数
    pub fn get(&self, ordinal: usize) -> Option<usize> {
        self.probes.get(ordinal).copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.probes
    }

    /// 汇总前 `n` 项；`n` 为 0 或超过已记录数时返回 `None`
    pub fn summary(&self, n: usize) -> Option<CollisionSummary> {
        if n == 0 || n > self.probes.len() {
            return None;
        }
        let prefix = &self.probes[..n];
        let at_home = prefix.iter().filter(|&&p| p == 0).count();
        let max = prefix.iter().copied().max().unwrap_or(0);
        let total: usize = prefix.iter().sum();

        Some(CollisionSummary {
            entries: n,
            at_home,
            average: total as f64 / n as f64,
            max,
        })
    }

    /// 总冲突次数
    pub fn total_collisions(&self) -> usize {
        self.probes.iter().sum()
    }
}
