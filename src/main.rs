use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use mathclass_bakery::output::{write_index, write_stats};
use mathclass_bakery::stats::BakeStats;
use mathclass_bakery::ClassificationIndex;

// https://www.unicode.org/Public/math/revision-15/MathClass-15.txt
const DEFAULT_SOURCE: &str = "./MathClass-15.txt";
const DEFAULT_OUTPUT: &str = "./data/mathclass.rs.txt";
const DEFAULT_STATS: &str = "./data_stats/mathclass.stats.txt";

fn main() -> Result<()>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let mut args = std::env::args().skip(1);

    let source = args.next().unwrap_or_else(|| DEFAULT_SOURCE.to_string());
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let stats_output = args.next().unwrap_or_else(|| DEFAULT_STATS.to_string());

    let strict = std::env::var("MATHCLASS_STRICT").is_ok_and(|v| v == "1");

    let index = bake(&source, strict)?;
    let stats = BakeStats::collect(&index);

    create_parent(&output)?;
    write_index("MathClassData", &output, &index)
        .with_context(|| format!("failed to write {}", output))?;

    create_parent(&stats_output)?;
    write_stats(&stats_output, &stats)
        .with_context(|| format!("failed to write {}", stats_output))?;

    log::info!(
        "MathClass: {} ranges, {} code points, {} b",
        index.len(),
        stats.total(),
        index.size()
    );

    Ok(())
}

fn bake(source: &str, strict: bool) -> Result<ClassificationIndex>
{
    let file = File::open(source).with_context(|| format!("failed to open {}", source))?;
    let reader = BufReader::new(file);

    let index = match strict {
        true => ClassificationIndex::read_strict(reader),
        false => ClassificationIndex::read(reader),
    };

    index.with_context(|| format!("failed to bake {}", source))
}

fn create_parent(path: &str) -> Result<()>
{
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    Ok(())
}
