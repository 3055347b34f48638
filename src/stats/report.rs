// src/stats/report.rs
//! 报表输出 - 词频清单、全表转储与周期统计

use std::io::{self, Write};

use crate::{
    map::HashTable,
    stats::recorder::CollisionSummary,
    types::Slot,
};

const RULE: &str = "-----------------------------------------------------";

/// 表填充到某一比例时的统计快照
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    pub percent_full: usize,
    pub current_entries: usize,
    pub summary: CollisionSummary,
}

/// 按 `num_stats` 等分计算快照
///
/// 阈值按容量而非键数计算，`current_entries` 为 0 或超过已插入键数的快照被跳过，
/// 因此结果可能少于 `num_stats` 项。
pub fn snapshots(table: &HashTable, num_stats: usize) -> Vec<StatsSnapshot> {
    (1..=num_stats)
        .filter_map(|i| {
            let percent_full = 100 * i / num_stats;
            let current_entries = table.capacity() * percent_full / 100;
            table
                .collisions()
                .summary(current_entries)
                .map(|summary| StatsSnapshot {
                    percent_full,
                    current_entries,
                    summary,
                })
        })
        .collect()
}

/// 每个已占用槽位输出一行 `频次\t键`
pub fn write_frequencies<W: Write>(table: &HashTable, out: &mut W) -> io::Result<()> {
    for (key, frequency) in table.iter() {
        writeln!(out, "{}\t{}", frequency, key)?;
    }
    Ok(())
}

/// 输出全部槽位：索引、频次、该槽位键插入时的探测次数、键
pub fn write_entire_table<W: Write>(table: &HashTable, out: &mut W) -> io::Result<()> {
    for (index, slot) in table.slots().iter().enumerate() {
        match slot {
            Slot::Empty => writeln!(out, "{:5} {:5} {:5}   {}", index, 0, 0, "[EMPTY]")?,
            Slot::Occupied { frequency, key, ordinal } => {
                let probes = table.collisions().get(*ordinal).unwrap_or(0);
                writeln!(out, "{:5} {:5} {:5}   {}", index, frequency, probes, key)?;
            }
        }
    }
    Ok(())
}

/// 输出周期统计表
pub fn write_stats<W: Write>(table: &HashTable, out: &mut W, num_stats: usize) -> io::Result<()> {
    write!(out, "\n{}\n\n", table.method())?;
    writeln!(out, "Percent   Current   Percent    Average      Maximum")?;
    writeln!(out, " Full     Entries   At Home   Collisions   Collisions")?;
    writeln!(out, "{}", RULE)?;
    for snapshot in snapshots(table, num_stats) {
        let summary = &snapshot.summary;
        writeln!(
            out,
            "{:4} {:10} {:10.1} {:10.2} {:11}",
            snapshot.percent_full,
            snapshot.current_entries,
            summary.percent_at_home(),
            summary.average,
            summary.max
        )?;
    }
    write!(out, "{}\n\n", RULE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProbeMethod;

    /// 容量 10 线性探测，依次插入 a(7) k(7->8) b(8->9) u(7->0) d(0->1)
    fn clustered_table() -> HashTable {
        let mut table = HashTable::new(10, ProbeMethod::LinearProbing).unwrap();
        for word in ["a", "k", "b", "u", "d"] {
            assert!(table.insert(word).is_new_key());
        }
        table
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).expect("写入内存缓冲不应失败");
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_frequencies() {
        let mut table = clustered_table();
        table.insert("k");
        let text = render(|out| write_frequencies(&table, out));
        assert_eq!(text, "1\tu\n1\td\n1\ta\n2\tk\n1\tb\n");
    }

    #[test]
    fn test_write_entire_table() {
        let table = clustered_table();
        let text = render(|out| write_entire_table(&table, out));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], format!("{:5} {:5} {:5}   {}", 0, 1, 3, "u"));
        assert_eq!(lines[1], format!("{:5} {:5} {:5}   {}", 1, 1, 1, "d"));
        assert_eq!(lines[2], format!("{:5} {:5} {:5}   {}", 2, 0, 0, "[EMPTY]"));
        assert_eq!(lines[7], format!("{:5} {:5} {:5}   {}", 7, 1, 0, "a"));
        assert_eq!(lines[9], format!("{:5} {:5} {:5}   {}", 9, 1, 1, "b"));
    }

    #[test]
    fn test_snapshots_skip_unfilled() {
        let table = clustered_table();
        let snaps = snapshots(&table, 10);
        assert_eq!(snaps.len(), 5, "只有前 5 个快照满足 current_entries <= num_keys");
        for snap in &snaps {
            assert!(snap.current_entries > 0 && snap.current_entries <= table.len());
            let pct = snap.summary.percent_at_home();
            assert!((0.0..=100.0).contains(&pct));
        }
        assert_eq!(snaps[4].percent_full, 50);
        assert_eq!(snaps[4].summary.max, 3);
    }

    #[test]
    fn test_write_stats() {
        let table = clustered_table();
        let text = render(|out| write_stats(&table, out, 10));
        let expected_rows = [
            format!("{:4} {:10} {:10.1} {:10.2} {:11}", 10, 1, 100.0, 0.0, 0),
            format!("{:4} {:10} {:10.1} {:10.2} {:11}", 20, 2, 50.0, 0.5, 1),
            format!("{:4} {:10} {:10.1} {:10.2} {:11}", 30, 3, 100.0 / 3.0, 2.0 / 3.0, 1),
            format!("{:4} {:10} {:10.1} {:10.2} {:11}", 40, 4, 25.0, 1.25, 3),
            format!("{:4} {:10} {:10.1} {:10.2} {:11}", 50, 5, 20.0, 1.2, 3),
        ];
        let mut expected = String::from("\nLinear Probing\n\n");
        expected.push_str("Percent   Current   Percent    Average      Maximum\n");
        expected.push_str(" Full     Entries   At Home   Collisions   Collisions\n");
        expected.push_str(RULE);
        expected.push('\n');
        for row in &expected_rows {
            expected.push_str(row);
            expected.push('\n');
        }
        expected.push_str(RULE);
        expected.push_str("\n\n");
        assert_eq!(text, expected);
        assert!(text.contains("  30          3       33.3       0.67           1"));
    }

    #[test]
    fn test_write_stats_zero_snapshots() {
        let table = clustered_table();
        let text = render(|out| write_stats(&table, out, 0));
        assert_eq!(text.matches(RULE).count(), 2);
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn test_double_hashing_title() {
        let table = HashTable::new(13, ProbeMethod::DoubleHashing).unwrap();
        let text = render(|out| write_stats(&table, out, 4));
        assert!(text.starts_with("\nDouble Hashing\n\n"));
    }
}
