// Copyright 2025. Scene scripts for the line-clip command-line driver.
//
// A scene script is a plain-text list of clip configuration events, one per
// line. Blank lines and `#` comments are ignored:
//
//   window xmin ymin xmax ymax
//   line x1 y1 x2 y2
//   algorithm <0|1|2|sutherland-cohen|liang-barsky|midpoint>
//   clear

use line_clip::{Algorithm, ClipConfig, ClipError, ClipScene, ClipWindow};
use thiserror::Error;

/// Smallest coordinate accepted in a scene script.
pub const COORD_MIN: i32 = -1000;
/// Largest coordinate accepted in a scene script.
pub const COORD_MAX: i32 = 1000;
/// Maximum number of lines held by a scene at once.
pub const MAX_LINES: usize = 100;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected} arguments, got {got}")]
    ArgumentCount {
        line: usize,
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: invalid integer '{value}'")]
    InvalidInteger { line: usize, value: String },

    #[error("line {line}: coordinate {value} outside {}..={}", COORD_MIN, COORD_MAX)]
    CoordinateRange { line: usize, value: i32 },

    #[error("line {line}: scene holds more than {} lines", MAX_LINES)]
    TooManyLines { line: usize },

    #[error("line {line}: {source}")]
    Clip {
        line: usize,
        #[source]
        source: ClipError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SceneError>;

// ============================================================================
// Commands
// ============================================================================

/// One parsed scene event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneCommand {
    Window([i32; 4]),
    Line([i32; 4]),
    Algorithm(Algorithm),
    Clear,
}

/// Parse a scene script into commands, with 1-based line numbers.
pub fn parse_script(text: &str) -> Result<Vec<(usize, SceneCommand)>> {
    let mut commands = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        let mut words = content.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        let cmd = match command {
            "window" => SceneCommand::Window(parse_coords(line, command, &args)?),
            "line" => SceneCommand::Line(parse_coords(line, command, &args)?),
            "algorithm" => {
                expect_args(line, command, &args, 1)?;
                let algorithm = args[0]
                    .parse::<Algorithm>()
                    .map_err(|source| SceneError::Clip { line, source })?;
                SceneCommand::Algorithm(algorithm)
            }
            "clear" => {
                expect_args(line, command, &args, 0)?;
                SceneCommand::Clear
            }
            _ => {
                return Err(SceneError::UnknownCommand {
                    line,
                    command: command.to_string(),
                })
            }
        };
        commands.push((line, cmd));
    }
    Ok(commands)
}

fn expect_args(line: usize, command: &str, args: &[&str], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(SceneError::ArgumentCount {
            line,
            command: command.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn parse_coords(line: usize, command: &str, args: &[&str]) -> Result<[i32; 4]> {
    expect_args(line, command, args, 4)?;
    let mut out = [0i32; 4];
    for (slot, arg) in out.iter_mut().zip(args) {
        let value: i32 = arg.parse().map_err(|_| SceneError::InvalidInteger {
            line,
            value: arg.to_string(),
        })?;
        if !(COORD_MIN..=COORD_MAX).contains(&value) {
            return Err(SceneError::CoordinateRange { line, value });
        }
        *slot = value;
    }
    Ok(out)
}

// ============================================================================
// Scene building
// ============================================================================

/// Default window used until a script sets one.
pub fn default_window() -> ClipWindow {
    ClipWindow::normalized(-100, -100, 100, 100)
}

/// Replay `commands` against a fresh [`ClipScene`].
pub fn build_scene(commands: &[(usize, SceneCommand)], config: ClipConfig) -> Result<ClipScene> {
    let mut scene = ClipScene::new(default_window(), config);
    for (line, cmd) in commands {
        let line = *line;
        match cmd {
            SceneCommand::Window([xmin, ymin, xmax, ymax]) => scene
                .set_window(*xmin, *ymin, *xmax, *ymax)
                .map_err(|source| SceneError::Clip { line, source })?,
            SceneCommand::Line([x1, y1, x2, y2]) => {
                if scene.lines().len() >= MAX_LINES {
                    return Err(SceneError::TooManyLines { line });
                }
                scene.add_line(*x1, *y1, *x2, *y2);
            }
            SceneCommand::Algorithm(a) => scene.set_algorithm(*a),
            SceneCommand::Clear => scene.clear_lines(),
        }
    }
    log::info!(
        "scene: {} lines, window {}, algorithm {}",
        scene.lines().len(),
        scene.window(),
        scene.algorithm()
    );
    Ok(scene)
}

/// Parse and replay a scene script.
pub fn load_scene(text: &str, config: ClipConfig) -> Result<ClipScene> {
    build_scene(&parse_script(text)?, config)
}

// ============================================================================
// Tests
// ============================================================================
