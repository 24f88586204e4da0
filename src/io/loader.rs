//! Configuration file loader.
//!
//! ## Format
//!
//! ```text
//! 5 7          <- rows cols
//! *            <- live cell character (may share the first line)
//! .......      <- `rows` grid lines
//! ..***..
//! .......
//! .......
//! .......
//! ```
//!
//! Any character equal to the live character marks that cell alive.
//! Characters past `cols` are ignored; short or blank lines leave cells dead.

use std::path::Path;

use tracing::{debug, warn};

use crate::core::{ConfigError, Grid};

/// A parsed configuration: the populated grid and its live character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedConfig {
    pub grid: Grid,
    pub live_char: char,
}

/// Parse a configuration from text.
///
/// ```
/// use glife::io::parse_config;
///
/// let loaded = parse_config("2 3 #\n#.#\n.#.\n").unwrap();
/// assert_eq!(loaded.live_char, '#');
/// assert_eq!(loaded.grid.population(), 3);
/// ```
pub fn parse_config(text: &str) -> Result<LoadedConfig, ConfigError> {
    let mut lines = text.lines();
    let mut dims: Vec<usize> = Vec::with_capacity(2);
    let mut live_char = None;

    // Header tokens may span one or two lines.
    while live_char.is_none() {
        let line = lines.next().ok_or_else(|| {
            if dims.len() < 2 {
                ConfigError::MissingDimensions
            } else {
                ConfigError::MissingLiveChar
            }
        })?;

        for token in line.split_whitespace() {
            if dims.len() < 2 {
                let value = token
                    .parse()
                    .map_err(|_| ConfigError::InvalidDimension(token.to_string()))?;
                dims.push(value);
            } else {
                live_char = token.chars().next();
                break;
            }
        }
    }

    let (rows, cols) = (dims[0], dims[1]);
    Grid::check_dimensions(rows, cols)?;
    let live_char = live_char.ok_or(ConfigError::MissingLiveChar)?;

    let grid_lines: Vec<&str> = lines.by_ref().take(rows).collect();
    if grid_lines.len() < rows {
        return Err(ConfigError::MissingRows {
            expected: rows,
            found: grid_lines.len(),
        });
    }

    let extra = lines.filter(|l| !l.trim().is_empty()).count();
    if extra > 0 {
        warn!(extra, "ignoring grid lines past the declared row count");
    }

    let grid = Grid::from_rows(rows, cols, grid_lines, live_char);
    debug!(rows, cols, %live_char, population = grid.population(), "configuration parsed");

    Ok(LoadedConfig { grid, live_char })
}

/// Read and parse a configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<LoadedConfig, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_char_on_second_line() {
        let loaded = parse_config("3 3\n*\n...\n.*.\n...\n").unwrap();
        assert_eq!(loaded.live_char, '*');
        assert_eq!(loaded.grid.rows(), 3);
        assert_eq!(loaded.grid.cols(), 3);
        assert!(loaded.grid.is_alive(2, 2));
        assert_eq!(loaded.grid.population(), 1);
    }

    #[test]
    fn test_live_char_on_first_line() {
        let loaded = parse_config("2 2 @\n@.\n.@\n").unwrap();
        assert_eq!(loaded.live_char, '@');
        assert!(loaded.grid.is_alive(1, 1));
        assert!(loaded.grid.is_alive(2, 2));
    }

    #[test]
    fn test_rest_of_live_char_line_ignored() {
        let loaded = parse_config("1 3\n* comment\n***\n").unwrap();
        assert_eq!(loaded.grid.population(), 3);
    }

    #[test]
    fn test_short_and_blank_lines() {
        let loaded = parse_config("3 4\nx\nx\n\nxxxxxx\n").unwrap();
        assert!(loaded.grid.is_alive(1, 1));
        assert_eq!(loaded.grid.population(), 5);
    }

    #[test]
    fn test_crlf_line_endings() {
        let loaded = parse_config("2 2\r\n*\r\n**\r\n.*\r\n").unwrap();
        assert_eq!(loaded.grid.population(), 3);
    }

    #[test]
    fn test_extra_lines_ignored() {
        let loaded = parse_config("1 1\n*\n*\n*\n*\n").unwrap();
        assert_eq!(loaded.grid.population(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_config(""), Err(ConfigError::MissingDimensions)));
        assert!(matches!(parse_config("4\n"), Err(ConfigError::MissingDimensions)));
    }

    #[test]
    fn test_non_numeric_dimension() {
        match parse_config("4 x\n*\n") {
            Err(ConfigError::InvalidDimension(token)) => assert_eq!(token, "x"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            parse_config("-3 3\n*\n"),
            Err(ConfigError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_zero_dimension() {
        assert!(matches!(
            parse_config("0 3\n*\n"),
            Err(ConfigError::ZeroDimension { rows: 0, cols: 3 })
        ));
    }

    #[test]
    fn test_oversized_dimensions() {
        assert!(matches!(
            parse_config("1 18446744073709551615 *\n*\n"),
            Err(ConfigError::TooLarge { rows: 1, .. })
        ));
        assert!(matches!(
            parse_config("1 100000000000 *\n*\n"),
            Err(ConfigError::TooLarge { rows: 1, cols: 100_000_000_000 })
        ));
    }

    #[test]
    fn test_missing_live_char() {
        assert!(matches!(parse_config("3 3\n"), Err(ConfigError::MissingLiveChar)));
        assert!(matches!(parse_config("3 3\n\n\n"), Err(ConfigError::MissingLiveChar)));
    }

    #[test]
    fn test_missing_rows() {
        assert!(matches!(
            parse_config("3 3\n*\n...\n"),
            Err(ConfigError::MissingRows { expected: 3, found: 1 })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/definitely/not/here.dat").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
