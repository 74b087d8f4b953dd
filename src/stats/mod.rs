use std::collections::HashMap;

use crate::tables::ClassificationIndex;

/// статистика по запечённым таблицам классов
#[derive(Debug, Clone)]
pub struct BakeStats
{
    pub blocks: HashMap<String, BakeStatsBlock>,
}

#[derive(Debug, Clone)]
pub struct BakeStatsBlock
{
    /// количество кодпоинтов
    pub count: usize,
    pub order: usize,
    pub r16: usize,
    pub r32: usize,
    /// начало диапазона -> описание
    pub entries: HashMap<u32, String>,
}

impl BakeStats
{
    pub fn new() -> Self
    {
        Self {
            blocks: HashMap::new(),
        }
    }

    /// собрать статистику по таблицам
    pub fn collect(index: &ClassificationIndex) -> Self
    {
        let mut stats = Self::new();

        index.tables().for_each(|(class, table)| {
            let block = stats.touch(class.name());

            block.r16 = table.r16.len();
            block.r32 = table.r32.len();

            table.iter().for_each(|(lo, hi)| {
                let description = match lo == hi {
                    true => format!("U+{:04X}", lo),
                    false => format!("U+{:04X}..U+{:04X}", lo, hi),
                };

                block.inc(lo, hi, description);
            });
        });

        stats
    }

    /// добавляем ключ
    pub fn touch(&mut self, key: impl AsRef<str>) -> &mut BakeStatsBlock
    {
        let order = self.blocks.values().map(|e| e.order).max().unwrap_or(0) + 1;

        self.blocks
            .entry(key.as_ref().to_string())
            .or_insert(BakeStatsBlock {
                count: 0,
                order,
                r16: 0,
                r32: 0,
                entries: HashMap::new(),
            })
    }

    /// всего кодпоинтов, отнесённых к какому-либо классу
    pub fn total(&self) -> usize
    {
        self.blocks.values().map(|b| b.count).sum()
    }
}

impl Default for BakeStats
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl BakeStatsBlock
{
    /// учесть диапазон и добавить его описание
    pub fn inc(&mut self, lo: u32, hi: u32, description: impl AsRef<str>)
    {
        self.count += (hi - lo) as usize + 1;
        self.entries
            .insert(lo, description.as_ref().to_string());
    }
}
