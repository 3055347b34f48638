//! 分词 - 从文本中提取小写单词
//!
//! 单词是连续的 ASCII 字母或数字，其余字符均视为分隔符。

use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

/// 拆分一段文本
pub fn split_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_ascii_lowercase())
}

/// 按行读取并逐个产生单词
pub struct Words<R> {
    reader: R,
    line: String,
    pending: VecDeque<String>,
}

impl<R: BufRead> Words<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Some(Ok(word));
            }
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => self.pending.extend(split_words(&self.line)),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
