use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::stats::BakeStats;
use crate::tables::{ClassificationIndex, CodepointRange, RangeTable};

use format::format_range_vec;

pub mod format;

/// длина строки в файле с подготовленными данными
pub const FORMAT_STRING_LENGTH: usize = 120;

/// записать таблицы классов
pub fn write_index(
    classname: impl AsRef<str>,
    filename: impl AsRef<Path>,
    index: &ClassificationIndex,
) -> Result<()>
{
    let mut file = BufWriter::new(File::create(filename.as_ref())?);

    write!(file, "{}", format_index(classname, index))?;
    file.flush()?;

    Ok(())
}

/// таблицы в виде литерала структуры, по полю на класс
pub fn format_index(classname: impl AsRef<str>, index: &ClassificationIndex) -> String
{
    let mut output = format!("{} {{\n", classname.as_ref());

    index.tables().for_each(|(class, table)| {
        output.push_str(&format!(
            "  {}: {},\n",
            class.name().to_lowercase(),
            format_table(table)
        ));
    });

    output.push_str("}\n");
    output
}

fn format_table(table: &RangeTable) -> String
{
    let r16: Vec<(u16, u16)> = table.r16.iter().map(|r| (r.lo, r.hi)).collect();
    let r32: Vec<(u32, u32)> = table.r32.iter().map(|r| r.bounds()).collect();

    format!(
        "RangeTable {{\n    \
            r16: &[{}    ],\n    \
            r32: &[{}    ],\n  \
        }}",
        indent(format_range_vec(&r16, 4, FORMAT_STRING_LENGTH)),
        indent(format_range_vec(&r32, 5, FORMAT_STRING_LENGTH)),
    )
}

fn indent(list: String) -> String
{
    list.replace("\n    ", "\n      ")
}

/// записать статистику по классам
pub fn write_stats(filename: impl AsRef<Path>, stats: &BakeStats) -> Result<()>
{
    let mut file = BufWriter::new(File::create(filename.as_ref())?);

    let mut headers: Vec<&String> = stats.blocks.keys().collect();
    headers.sort_by_key(|k| stats.blocks[*k].order);

    for header in headers.iter() {
        let block = &stats.blocks[*header];

        writeln!(
            file,
            "{}. {} ({}, r16: {}, r32: {})",
            block.order, header, block.count, block.r16, block.r32
        )?;
    }

    writeln!(file)?;

    for header in headers.iter() {
        let block = &stats.blocks[*header];

        write!(file, "{}. {} ({})\n\n", block.order, header, block.count)?;

        let mut codes: Vec<&u32> = block.entries.keys().collect();
        codes.sort();

        for code in codes {
            writeln!(file, "{}", block.entries[code])?;
        }

        writeln!(file)?;
    }

    file.flush()?;

    Ok(())
}
