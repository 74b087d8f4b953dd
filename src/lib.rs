//! запекание таблицы математических классов Unicode (MathClass.txt)
//! в диапазоны кодпоинтов по классам и классификация кодпоинтов по ним

#[macro_use]
extern crate lazy_static;

pub mod class;
pub mod error;
pub mod output;
pub mod parse;
pub mod stats;
pub mod tables;

pub use class::MathClass;
pub use error::{BakeError, Result};
pub use tables::{ClassificationIndex, RangeTable};

/// собрать таблицы классов из строк исходного файла
pub fn build<I, S>(lines: I) -> Result<ClassificationIndex>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ClassificationIndex::build(lines)
}

/// класс кодпоинта или None, если кодпоинт не входит ни в один класс
pub fn classify(index: &ClassificationIndex, code: u32) -> Option<MathClass>
{
    index.classify(code)
}
