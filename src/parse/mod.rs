//! разбор строк таблицы математических классов
//!
//! формат:
//!
//! ```text
//! # комментарий
//! 002F;B
//! 0030..0039;N
//! ```

use std::io::{BufRead, Lines};

use crate::class::MathClass;
use crate::error::{BakeError, Result};

#[cfg(test)]
mod tests;

/// разобранная строка таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine
{
    /// номер строки в источнике, начиная с 1
    pub line_number: usize,
    /// диапазон кодпоинтов, включительно
    pub range: (u32, u32),
    pub class: MathClass,
}

/// однопроходный ленивый разбор последовательности строк.
/// после первой ошибки итератор больше ничего не возвращает
pub struct ParsedLines<I>
{
    lines: I,
    line_number: usize,
    failed: bool,
}

impl<I, S> ParsedLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: impl IntoIterator<Item = S, IntoIter = I>) -> Self
    {
        Self {
            lines: lines.into_iter(),
            line_number: 0,
            failed: false,
        }
    }
}

impl<I, S> Iterator for ParsedLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<ParsedLine>;

    fn next(&mut self) -> Option<Self::Item>
    {
        if self.failed {
            return None;
        }

        for line in self.lines.by_ref() {
            self.line_number += 1;

            match parse_line(self.line_number, line.as_ref()) {
                Ok(Some(parsed)) => return Some(Ok(parsed)),
                Ok(None) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }

        None
    }
}

/// то же, что ParsedLines, но строки читаются из источника по мере разбора.
/// ошибка чтения возвращается как BakeError::Io
pub struct ReadLines<R>
{
    lines: Lines<R>,
    line_number: usize,
    failed: bool,
}

impl<R: BufRead> ReadLines<R>
{
    pub fn new(reader: R) -> Self
    {
        Self {
            lines: reader.lines(),
            line_number: 0,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for ReadLines<R>
{
    type Item = Result<ParsedLine>;

    fn next(&mut self) -> Option<Self::Item>
    {
        if self.failed {
            return None;
        }

        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line_number = self.line_number;

            let parsed = line
                .map_err(BakeError::from)
                .and_then(|line| parse_line(line_number, &line));

            match parsed {
                Ok(Some(parsed)) => return Some(Ok(parsed)),
                Ok(None) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }

        None
    }
}

/// разобрать строку. комментарии и пустые строки - None
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<ParsedLine>>
{
    let text = line.trim();

    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let parts: Vec<&str> = text.split(';').collect();

    if parts.len() != 2 {
        return Err(BakeError::malformed_line(line_number, line));
    }

    let range = parse_code_points(line_number, parts[0].trim())?;

    let tag = parts[1].trim();
    let class = match MathClass::from_tag(tag) {
        Some(class) => class,
        None => return Err(BakeError::unknown_class_tag(line_number, tag)),
    };

    Ok(Some(ParsedLine {
        line_number,
        range,
        class,
    }))
}

/// кодпоинт (`002F`) или диапазон кодпоинтов (`0030..0039`, конец включительно)
pub fn parse_code_points(line_number: usize, raw: &str) -> Result<(u32, u32)>
{
    if !raw.contains("..") {
        let code = parse_hex(line_number, raw)?;
        return Ok((code, code));
    }

    let parts: Vec<&str> = raw.split("..").collect();

    if parts.len() != 2 {
        return Err(BakeError::invalid_code_point(line_number, raw));
    }

    let start = parse_hex(line_number, parts[0].trim())?;
    let end = parse_hex(line_number, parts[1].trim())?;

    if end < start {
        return Err(BakeError::invalid_code_point(line_number, raw));
    }

    Ok((start, end))
}

/// from_str_radix допускает знак `+`, поэтому цифры проверяем сами
fn parse_hex(line_number: usize, literal: &str) -> Result<u32>
{
    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BakeError::invalid_code_point(line_number, literal));
    }

    u32::from_str_radix(literal, 16)
        .map_err(|_| BakeError::invalid_code_point(line_number, literal))
}
