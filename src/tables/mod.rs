use std::io::BufRead;

use crate::class::MathClass;
use crate::error::{BakeError, Result};
use crate::parse::{ParsedLine, ParsedLines, ReadLines};

pub use range::{CodepointRange, Range16, Range32};

mod range;


/// таблица диапазонов одного класса.
/// диапазон, у которого верхняя граница больше 0xFFFF, целиком хранится в r32
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeTable
{
    pub r16: Vec<Range16>,
    pub r32: Vec<Range32>,
}

impl RangeTable
{
    /// добавить диапазон. порядок и пересечения здесь не проверяются
    pub fn push(&mut self, lo: u32, hi: u32)
    {
        match hi <= u16::MAX as u32 {
            true => self.r16.push(Range16 {
                lo: lo as u16,
                hi: hi as u16,
            }),
            false => self.r32.push(Range32 { lo, hi }),
        }
    }

    /// кодпоинт входит в один из диапазонов таблицы
    pub fn contains(&self, code: u32) -> bool
    {
        // в r32 может лежать диапазон, начинающийся в BMP, поэтому r32 смотрим всегда
        (code <= u16::MAX as u32 && range::search(&self.r16, code))
            || range::search(&self.r32, code)
    }

    /// все диапазоны: сначала r16, затем r32
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_
    {
        self.r16
            .iter()
            .map(|r| r.bounds())
            .chain(self.r32.iter().map(|r| r.bounds()))
    }

    pub fn len(&self) -> usize
    {
        self.r16.len() + self.r32.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.r16.is_empty() && self.r32.is_empty()
    }

    /// размер запечённых диапазонов в байтах
    pub fn size(&self) -> usize
    {
        self.r16.len() * core::mem::size_of::<Range16>()
            + self.r32.len() * core::mem::size_of::<Range32>()
    }

    /// диапазоны должны строго возрастать и не пересекаться, иначе бинарный поиск врёт
    fn validate(&self, class: MathClass) -> Result<()>
    {
        let mut previous: Option<(u32, u32)> = None;

        for range in self.iter() {
            if let Some(previous) = previous {
                if range.0 <= previous.1 {
                    return Err(BakeError::UnsortedRanges {
                        class,
                        previous,
                        range,
                    });
                }
            }

            previous = Some(range);
        }

        Ok(())
    }
}

/// таблицы диапазонов всех пятнадцати классов. после сборки не изменяется
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationIndex
{
    tables: [RangeTable; 15],
}

impl ClassificationIndex
{
    /// собрать таблицы из строк исходного файла. первая же ошибка прерывает сборку
    pub fn build<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::compose(ParsedLines::new(lines))
    }

    /// собрать таблицы, читая строки из источника по мере разбора
    pub fn read<R: BufRead>(reader: R) -> Result<Self>
    {
        Self::compose(ReadLines::new(reader))
    }

    /// заполнение таблиц
    fn compose(parsed_lines: impl Iterator<Item = Result<ParsedLine>>) -> Result<Self>
    {
        let mut index = Self::default();

        for parsed in parsed_lines {
            let parsed = parsed?;
            let (lo, hi) = parsed.range;

            index.tables[parsed.class.index()].push(lo, hi);
        }

        for class in MathClass::ALL {
            let table = index.table(class);
            table.validate(class)?;

            log::debug!(
                "{}: {} ranges ({} r16, {} r32)",
                class,
                table.len(),
                table.r16.len(),
                table.r32.len()
            );
        }

        Ok(index)
    }

    /// сборка с дополнительной проверкой: ни один кодпоинт не относится к двум классам
    pub fn build_strict<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = Self::build(lines)?;
        index.check_disjoint()?;

        Ok(index)
    }

    /// строгая сборка с чтением из источника
    pub fn read_strict<R: BufRead>(reader: R) -> Result<Self>
    {
        let index = Self::read(reader)?;
        index.check_disjoint()?;

        Ok(index)
    }

    /// таблица класса
    pub fn table(&self, class: MathClass) -> &RangeTable
    {
        &self.tables[class.index()]
    }

    /// таблицы в порядке объявления классов
    pub fn tables(&self) -> impl Iterator<Item = (MathClass, &RangeTable)>
    {
        MathClass::ALL.into_iter().zip(self.tables.iter())
    }

    /// класс кодпоинта. при пересечении классов побеждает объявленный раньше
    pub fn classify(&self, code: u32) -> Option<MathClass>
    {
        MathClass::ALL
            .into_iter()
            .find(|&class| self.table(class).contains(code))
    }

    pub fn classify_char(&self, c: char) -> Option<MathClass>
    {
        self.classify(c as u32)
    }

    /// то же, что classify, но кодпоинт из нескольких классов - ошибка
    pub fn classify_strict(&self, code: u32) -> Result<Option<MathClass>>
    {
        let mut matches = MathClass::ALL
            .into_iter()
            .filter(|&class| self.table(class).contains(code));

        let first = match matches.next() {
            Some(class) => class,
            None => return Ok(None),
        };

        match matches.next() {
            Some(second) => Err(BakeError::OverlappingClasses {
                code,
                first,
                second,
            }),
            None => Ok(Some(first)),
        }
    }

    /// проверка, что диапазоны разных классов не пересекаются
    pub fn check_disjoint(&self) -> Result<()>
    {
        let mut ranges: Vec<(u32, u32, MathClass)> = self
            .tables()
            .flat_map(|(class, table)| table.iter().map(move |(lo, hi)| (lo, hi, class)))
            .collect();

        ranges.sort();

        let mut covered: Option<(u32, MathClass)> = None;

        for (lo, hi, class) in ranges {
            if let Some((end, owner)) = covered {
                if lo <= end {
                    return Err(BakeError::OverlappingClasses {
                        code: lo,
                        first: owner,
                        second: class,
                    });
                }
            }

            covered = Some((hi, class));
        }

        Ok(())
    }

    /// общее количество диапазонов
    pub fn len(&self) -> usize
    {
        self.tables.iter().map(|t| t.len()).sum()
    }

    pub fn is_empty(&self) -> bool
    {
        self.tables.iter().all(|t| t.is_empty())
    }

    /// размер данных в байтах
    pub fn size(&self) -> usize
    {
        self.tables.iter().map(|t| t.size()).sum()
    }
}
