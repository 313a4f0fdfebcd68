//! Generation sequencing: decode a pattern, then write it and each of its
//! successors to numbered files.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::PatternFormat;
use crate::codec::{PatternCodec, RunLength};
use crate::domain::{tick_parallel, tick_with, BoundedGrid, ConwayRule, LifeLikeRule, Rule};
use crate::error::Result;

/// Insert `.<generation>` before the extension: `out.txt` -> `out.3.txt`.
pub fn generation_path(template: &Path, generation: u64) -> PathBuf {
    let stem = template.file_stem().unwrap_or_default().to_string_lossy();
    let name = match template.extension() {
        Some(ext) => format!("{stem}.{generation}.{}", ext.to_string_lossy()),
        None => format!("{stem}.{generation}"),
    };
    template.with_file_name(name)
}

/// One driver run
#[derive(Clone, Debug)]
pub struct DriverConfig {
    pub input: PathBuf,
    pub generations: u64,
    pub output: PathBuf,
    pub parallel: bool,
    /// Overrides any rule named in an RLE header
    pub rule: Option<LifeLikeRule>,
}

/// Load the input and the rule it should evolve under. An RLE header's rule is
/// honoured when it parses; otherwise Conway's rule applies.
pub fn load_pattern(path: &Path) -> Result<(BoundedGrid, Option<LifeLikeRule>)> {
    match PatternFormat::from_path(path)? {
        PatternFormat::Rle => {
            let text = std::fs::read_to_string(path)?;
            let (header, grid) = RunLength.decode_with_header(&text)?;
            let rule = header.rule.as_deref().and_then(|rule| match rule.parse::<LifeLikeRule>() {
                Ok(rule) => Some(rule),
                Err(_) => {
                    debug!(rule, "header rule not recognised, using B3/S23");
                    None
                }
            });
            Ok((grid, rule))
        }
        format => Ok((format.codec().load(path)?, None)),
    }
}

/// Write generations `0..=generations` and return the files written, in order
pub fn run(config: &DriverConfig) -> Result<Vec<PathBuf>> {
    let output_codec = PatternFormat::from_path(&config.output)?.codec();
    let (mut grid, header_rule) = load_pattern(&config.input)?;
    let rule: Box<dyn Rule> = match config.rule.or(header_rule) {
        Some(rule) => Box::new(rule),
        None => Box::new(ConwayRule),
    };
    info!(
        input = %config.input.display(),
        bounds = %grid.bounds(),
        rule = %rule.name(),
        "loaded pattern"
    );

    let mut written = Vec::new();
    for generation in 0..=config.generations {
        let path = generation_path(&config.output, generation);
        output_codec.save(&grid, &path)?;
        info!(path = %path.display(), population = grid.population(), "wrote generation");
        written.push(path);

        if generation < config.generations {
            grid = if config.parallel {
                tick_parallel(&grid, rule.as_ref())
            } else {
                tick_with(&grid, rule.as_ref())
            };
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;

    #[test]
    fn test_generation_path_inserts_index() {
        assert_eq!(generation_path(Path::new("out.txt"), 3), PathBuf::from("out.3.txt"));
        assert_eq!(
            generation_path(Path::new("runs/blinker.txt"), 0),
            PathBuf::from("runs/blinker.0.txt")
        );
        assert_eq!(generation_path(Path::new("out"), 12), PathBuf::from("out.12"));
        assert_eq!(
            generation_path(Path::new("a.b/life.v2.txt"), 1),
            PathBuf::from("a.b/life.v2.1.txt")
        );
    }

    #[test]
    fn test_huge_generation_count_fails_on_first_write() {
        let dir = std::env::temp_dir().join(format!("life_window_driver_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("in.txt");
        std::fs::write(&input, "0 2 0 2\n1 1\n").unwrap();

        let config = DriverConfig {
            input,
            generations: u64::MAX,
            output: dir.join("out.rle"),
            parallel: false,
            rule: None,
        };
        assert!(matches!(run(&config), Err(LifeError::Unsupported { .. })));
        assert!(!dir.join("out.0.rle").exists());
    }
}
