//! 开放寻址词频表核心实现

use std::fmt;

use crate::{
    error::HashTableError,
    hash::{strategy_for, ProbeStrategy},
    map::DEFAULT_CAPACITY,
    stats::CollisionRecorder,
    types::{InsertOutcome, ProbeMethod, Slot},
};

/// 哈希表配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashTableConfig {
    /// 槽位数量，创建后不变；双哈希建议使用素数
    pub capacity: usize,
    pub method: ProbeMethod,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            method: ProbeMethod::LinearProbing,
        }
    }
}

impl HashTableConfig {
    pub fn new(capacity: usize, method: ProbeMethod) -> Self {
        Self { capacity, method }
    }

    /// 校验容量是否满足探测方式的要求
    pub fn validate(&self) -> Result<(), HashTableError> {
        self.method.check_capacity(self.capacity)
    }
}

/// 定长开放寻址词频表
///
/// 键为字符串，值为出现次数。每插入一个新键，都会按插入顺序记录放置它所用的探测次数。
/// 不支持删除与扩容；表被丢弃时释放所有键。
pub struct HashTable {
    slots: Vec<Slot>,
    num_keys: usize,
    config: HashTableConfig,
    strategy: Box<dyn ProbeStrategy>,
    collisions: CollisionRecorder,
}

impl HashTable {
    /// 创建指定容量与探测方式的表
    pub fn new(capacity: usize, method: ProbeMethod) -> Result<Self, HashTableError> {
        Self::with_config(HashTableConfig::new(capacity, method))
    }

    pub fn with_config(config: HashTableConfig) -> Result<Self, HashTableError> {
        config.validate()?;
        let strategy = strategy_for(config.method, config.capacity)?;

        let mut slots = Vec::with_capacity(config.capacity);
        slots.resize_with(config.capacity, Slot::default);

        log_debug!("created table capacity={} method={}", config.capacity, config.method);

        Ok(Self {
            slots,
            num_keys: 0,
            collisions: CollisionRecorder::with_capacity(config.capacity),
            strategy,
            config,
        })
    }

    /// 插入一个词
    ///
    /// 沿探测序列查找：遇到空槽位则放入新键，遇到相同键则计数加一，
    /// 序列耗尽则返回 [`InsertOutcome::Rejected`]。
    pub fn insert(&mut self, word: &str) -> InsertOutcome {
        for (attempt, index) in self.strategy.probe_sequence(word) {
            match &mut self.slots[index] {
                slot @ Slot::Empty => {
                    *slot = Slot::Occupied {
                        frequency: 1,
                        key: word.to_owned(),
                        ordinal: self.num_keys,
                    };
                    self.collisions.record(attempt);
                    self.num_keys += 1;
                    return InsertOutcome::Inserted { frequency: 1 };
                }
                Slot::Occupied { key, frequency, .. } if key.as_str() == word => {
                    *frequency += 1;
                    return InsertOutcome::Incremented { frequency: *frequency };
                }
                Slot::Occupied { .. } => {}
            }
        }

        log_warn!(
            "probe sequence exhausted for {:?} (keys={}, capacity={})",
            word,
            self.num_keys,
            self.config.capacity
        );
        InsertOutcome::Rejected
    }

    /// 查找词频，未找到返回 0
    pub fn search(&self, word: &str) -> u32 {
        for (_, index) in self.strategy.probe_sequence(word) {
            match &self.slots[index] {
                Slot::Empty => return 0,
                Slot::Occupied { key, frequency, .. } if key.as_str() == word => return *frequency,
                Slot::Occupied { .. } => {}
            }
        }
        0
    }

    pub fn contains(&self, word: &str) -> bool {
        self.search(word) > 0
    }

    /// 不同键的数量
    pub fn len(&self) -> usize {
        self.num_keys
    }

    pub fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn method(&self) -> ProbeMethod {
        self.config.method
    }

    pub fn config(&self) -> &HashTableConfig {
        &self.config
    }

    pub fn load_factor(&self) -> f64 {
        self.num_keys as f64 / self.config.capacity as f64
    }

    /// 按槽位索引排列的全部槽位
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// 按槽位顺序遍历已占用槽位的 `(键, 频次)`
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Empty => None,
            Slot::Occupied { key, frequency, .. } => Some((key.as_str(), *frequency)),
        })
    }

    /// 冲突记录器
    pub fn collisions(&self) -> &CollisionRecorder {
        &self.collisions
    }

    /// 按插入顺序的探测次数
    pub fn probe_history(&self) -> &[usize] {
        self.collisions.as_slice()
    }
}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("method", &self.config.method)
            .field("size", &self.num_keys)
            .field("capacity", &self.config.capacity)
            .field("load_factor", &self.load_factor())
            .finish()
    }
}
