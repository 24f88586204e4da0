//! Terminal renderer and plain text log.
//!
//! Both are [`Observer`]s. `TerminalRenderer` draws each generation with
//! colored live cells and paces output at the configured frames per second.
//! `TextLog` writes the same frames without escape codes, for `--outfile`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crossterm::queue;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Grid, Result};
use crate::simulation::{Frame, Observer, Outcome};
use crate::termination::Status;

/// Named colors for live cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellColor {
    Black,
    Blue,
    Crimson,
    DarkGreen,
    DeepSkyBlue,
    DodgerBlue,
    Green,
    LightBlue,
    LightGrey,
    LightYellow,
    #[default]
    Red,
    SteelBlue,
    White,
    Yellow,
}

impl CellColor {
    /// All accepted names, in help-text order.
    pub const NAMES: [&'static str; 14] = [
        "BLACK",
        "BLUE",
        "CRIMSON",
        "DARK_GREEN",
        "DEEP_SKY_BLUE",
        "DODGER_BLUE",
        "GREEN",
        "LIGHT_BLUE",
        "LIGHT_GREY",
        "LIGHT_YELLOW",
        "RED",
        "STEEL_BLUE",
        "WHITE",
        "YELLOW",
    ];

    /// Terminal color.
    #[must_use]
    pub fn to_terminal(self) -> Color {
        match self {
            CellColor::Black => Color::Black,
            CellColor::Blue => Color::Blue,
            CellColor::Crimson => Color::Rgb { r: 220, g: 20, b: 60 },
            CellColor::DarkGreen => Color::DarkGreen,
            CellColor::DeepSkyBlue => Color::Rgb { r: 0, g: 191, b: 255 },
            CellColor::DodgerBlue => Color::Rgb { r: 30, g: 144, b: 255 },
            CellColor::Green => Color::Green,
            CellColor::LightBlue => Color::Rgb { r: 173, g: 216, b: 230 },
            CellColor::LightGrey => Color::Grey,
            CellColor::LightYellow => Color::Rgb { r: 255, g: 255, b: 224 },
            CellColor::Red => Color::Red,
            CellColor::SteelBlue => Color::Rgb { r: 70, g: 130, b: 180 },
            CellColor::White => Color::White,
            CellColor::Yellow => Color::Yellow,
        }
    }
}

impl FromStr for CellColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let color = match s.to_ascii_uppercase().as_str() {
            "BLACK" => CellColor::Black,
            "BLUE" => CellColor::Blue,
            "CRIMSON" => CellColor::Crimson,
            "DARK_GREEN" => CellColor::DarkGreen,
            "DEEP_SKY_BLUE" => CellColor::DeepSkyBlue,
            "DODGER_BLUE" => CellColor::DodgerBlue,
            "GREEN" => CellColor::Green,
            "LIGHT_BLUE" => CellColor::LightBlue,
            "LIGHT_GREY" => CellColor::LightGrey,
            "LIGHT_YELLOW" => CellColor::LightYellow,
            "RED" => CellColor::Red,
            "STEEL_BLUE" => CellColor::SteelBlue,
            "WHITE" => CellColor::White,
            "YELLOW" => CellColor::Yellow,
            _ => return Err(ConfigError::UnknownColor(s.to_string())),
        };
        Ok(color)
    }
}

/// Display settings for the terminal renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Generations shown per second (0 = no delay).
    pub fps: u32,

    /// Color of live cells.
    pub alive_color: CellColor,

    /// Sleep between frames.
    pub pace: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: 2,
            alive_color: CellColor::default(),
            pace: true,
        }
    }
}

impl DisplayConfig {
    /// Set frames per second.
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Set the live cell color.
    #[must_use]
    pub fn with_alive_color(mut self, color: CellColor) -> Self {
        self.alive_color = color;
        self
    }

    /// Disable pacing.
    #[must_use]
    pub fn without_pacing(mut self) -> Self {
        self.pace = false;
        self
    }

    /// Delay between frames.
    #[must_use]
    pub fn frame_delay(&self) -> Duration {
        if !self.pace || self.fps == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(1.0 / f64::from(self.fps))
    }
}

/// Header line for generation `index`, 1-based for display.
fn header(index: usize, max_generations: Option<usize>) -> String {
    match max_generations {
        Some(max) => format!("Generation [{}]:[{}]", index + 1, max),
        None => format!("Generation [{}]:[\u{221E}]", index + 1),
    }
}

fn horizontal_rule(grid: &Grid) -> String {
    "-".repeat(grid.cols() + 4)
}

fn ending(outcome: &Outcome) -> String {
    match outcome.status {
        Status::Stable { matched } => format!(
            "Simulation ended due to stability: generation [{}] equals [{}].",
            matched + 1,
            outcome.final_generation + 1
        ),
        status => format!(
            "Simulation ended due to {}.",
            status.reason().unwrap_or("an unknown reason")
        ),
    }
}

/// Colored terminal renderer.
pub struct TerminalRenderer<W: Write> {
    out: W,
    config: DisplayConfig,
    live_char: char,
}

impl TerminalRenderer<std::io::Stdout> {
    /// Render to standard output.
    #[must_use]
    pub fn stdout(config: DisplayConfig, live_char: char) -> Self {
        Self::new(std::io::stdout(), config, live_char)
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render to any writer.
    pub fn new(out: W, config: DisplayConfig, live_char: char) -> Self {
        Self {
            out,
            config,
            live_char,
        }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for TerminalRenderer<W> {
    fn on_start(&mut self, grid: &Grid) -> Result<()> {
        let banner = "*".repeat(64);
        writeln!(self.out, "{banner}")?;
        writeln!(self.out, "Welcome to Conway's game of Life.")?;
        writeln!(
            self.out,
            "Running a simulation on a grid of size {} by {} in which",
            grid.rows(),
            grid.cols()
        )?;
        writeln!(self.out, "each cell can either be occupied by an organism or not.")?;
        writeln!(self.out, "The occupied cells change from generation to generation")?;
        writeln!(self.out, "according to the number of neighboring cells which are alive.")?;
        writeln!(self.out, "{banner}")?;
        Ok(())
    }

    fn on_generation(&mut self, frame: &Frame<'_>) -> Result<()> {
        let grid = frame.grid;
        let color = self.config.alive_color.to_terminal();
        let rule = horizontal_rule(grid);

        queue!(
            self.out,
            Print(header(frame.index, frame.max_generations)),
            Print("\n"),
            PrintStyledContent(rule.as_str().white().bold()),
            Print("\n")
        )?;

        for x in 1..=grid.rows() {
            queue!(self.out, PrintStyledContent("| ".white().bold()))?;
            for y in 1..=grid.cols() {
                if grid.is_alive(x, y) {
                    queue!(self.out, PrintStyledContent(self.live_char.with(color).bold()))?;
                } else {
                    queue!(self.out, Print(' '))?;
                }
            }
            queue!(self.out, PrintStyledContent(" |".white().bold()), Print("\n"))?;
        }

        queue!(
            self.out,
            PrintStyledContent(rule.as_str().white().bold()),
            Print("\n\n")
        )?;
        self.out.flush()?;

        let delay = self.config.frame_delay();
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        Ok(())
    }

    fn on_finish(&mut self, outcome: &Outcome) -> Result<()> {
        queue!(
            self.out,
            PrintStyledContent(ending(outcome).red()),
            Print("\n")
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// Plain text generation log.
///
/// Alive cells use the configured live character, dead cells `.`.
pub struct TextLog<W: Write> {
    out: W,
    live_char: char,
}

impl TextLog<BufWriter<File>> {
    /// Create (or truncate) a log file.
    pub fn create(path: impl AsRef<Path>, live_char: char) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), live_char))
    }
}

impl<W: Write> TextLog<W> {
    /// Log to any writer.
    pub fn new(out: W, live_char: char) -> Self {
        Self { out, live_char }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for TextLog<W> {
    fn on_generation(&mut self, frame: &Frame<'_>) -> Result<()> {
        writeln!(self.out, "{}", header(frame.index, frame.max_generations))?;
        writeln!(self.out, "live: {}", frame.generation.len())?;

        let grid = frame.grid;
        for x in 1..=grid.rows() {
            let line: String = (1..=grid.cols())
                .map(|y| if grid.is_alive(x, y) { self.live_char } else { '.' })
                .collect();
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn on_finish(&mut self, outcome: &Outcome) -> Result<()> {
        writeln!(self.out, "{}", ending(outcome))?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_names_parse() {
        for name in CellColor::NAMES {
            assert!(name.parse::<CellColor>().is_ok(), "{name}");
        }
        assert_eq!("red".parse::<CellColor>().unwrap(), CellColor::Red);
        assert!(matches!(
            "MAGENTA".parse::<CellColor>(),
            Err(ConfigError::UnknownColor(_))
        ));
    }

    #[test]
    fn test_color_serde_uses_names() {
        let json = serde_json::to_string(&CellColor::DeepSkyBlue).unwrap();
        assert_eq!(json, "\"DEEP_SKY_BLUE\"");
    }

    #[test]
    fn test_display_config_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.fps, 2);
        assert_eq!(config.alive_color, CellColor::Red);
        assert_eq!(config.frame_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_frame_delay_disabled() {
        assert_eq!(DisplayConfig::default().without_pacing().frame_delay(), Duration::ZERO);
        assert_eq!(DisplayConfig::default().with_fps(0).frame_delay(), Duration::ZERO);
    }

    #[test]
    fn test_display_config_serde() {
        let config = DisplayConfig::default()
            .with_fps(10)
            .with_alive_color(CellColor::Yellow);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DisplayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_header() {
        assert_eq!(header(0, Some(10)), "Generation [1]:[10]");
        assert_eq!(header(4, None), "Generation [5]:[\u{221E}]");
    }

    #[test]
    fn test_ending() {
        let stable = Outcome {
            status: Status::Stable { matched: 0 },
            final_generation: 2,
            population: 3,
        };
        assert_eq!(
            ending(&stable),
            "Simulation ended due to stability: generation [1] equals [3]."
        );

        let extinct = Outcome {
            status: Status::Extinct,
            final_generation: 1,
            population: 0,
        };
        assert_eq!(ending(&extinct), "Simulation ended due to extinction.");
    }
}
