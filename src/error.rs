use thiserror::Error;

use crate::class::MathClass;

pub type Result<T> = std::result::Result<T, BakeError>;

/// ошибки запекания таблицы классов
#[derive(Error, Debug)]
pub enum BakeError
{
    /// строка не делится на два поля через `;`
    #[error("line {line_number}: expected two semicolon-delimited fields, got {line:?}")]
    MalformedLine
    {
        line_number: usize,
        line: String,
    },

    /// некорректный hex-литерал или диапазон, в котором конец меньше начала
    #[error("line {line_number}: invalid code point {literal:?}")]
    InvalidCodePoint
    {
        line_number: usize,
        literal: String,
    },

    #[error("line {line_number}: unknown class tag {tag:?}")]
    UnknownClassTag
    {
        line_number: usize,
        tag: String,
    },

    /// диапазоны класса идут не по возрастанию или пересекаются
    #[error(
        "{class}: range U+{:04X}..U+{:04X} does not follow U+{:04X}..U+{:04X}",
        .range.0, .range.1, .previous.0, .previous.1
    )]
    UnsortedRanges
    {
        class: MathClass,
        previous: (u32, u32),
        range: (u32, u32),
    },

    /// кодпоинт отнесён сразу к двум классам (строгий режим)
    #[error("U+{code:04X} belongs to both {first} and {second}")]
    OverlappingClasses
    {
        code: u32,
        first: MathClass,
        second: MathClass,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl BakeError
{
    pub fn malformed_line(line_number: usize, line: impl Into<String>) -> Self
    {
        Self::MalformedLine {
            line_number,
            line: line.into(),
        }
    }

    pub fn invalid_code_point(line_number: usize, literal: impl Into<String>) -> Self
    {
        Self::InvalidCodePoint {
            line_number,
            literal: literal.into(),
        }
    }

    pub fn unknown_class_tag(line_number: usize, tag: impl Into<String>) -> Self
    {
        Self::UnknownClassTag {
            line_number,
            tag: tag.into(),
        }
    }
}
