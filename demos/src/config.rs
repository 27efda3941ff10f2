use std::path::PathBuf;

use clap::{ArgAction, Parser};
use gridstar_core::Point;
use gridstar_paths::SearchConfig;

/// Run A* on randomly obstructed grids and record how long it takes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 50)]
    pub resx: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 50)]
    pub resy: i32,

    /// Number of random obstacles
    #[arg(long, default_value_t = 20)]
    pub obs: usize,

    /// Start x coordinate
    #[arg(long, default_value_t = 15, allow_negative_numbers = true)]
    pub x1: i32,

    /// Start y coordinate
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub y1: i32,

    /// Goal x coordinate
    #[arg(long, default_value_t = 40, allow_negative_numbers = true)]
    pub x2: i32,

    /// Goal y coordinate
    #[arg(long, default_value_t = 48, allow_negative_numbers = true)]
    pub y2: i32,

    /// Number of experiments to run
    #[arg(long, default_value_t = 1)]
    pub exp: usize,

    /// Print the grid before and after each search
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub console: bool,

    /// Save the final grid of each experiment as a PPM image
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub image: bool,

    /// Seed for obstacle placement (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for images and the timing table
    #[arg(short, long, default_value = "saves")]
    pub output: PathBuf,

    /// Ask for new parameters on stdin between experiments
    #[arg(short, long)]
    pub interactive: bool,

    /// Stop a search after this many expansions
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Log the open/closed set sizes at every search step
    #[arg(long)]
    pub trace_steps: bool,
}

/// Parameters of one experiment. The interactive prompt edits these
/// between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiment {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub goal: Point,
    pub obstacles: usize,
}

impl Default for Experiment {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            start: Point::new(15, 10),
            goal: Point::new(40, 48),
            obstacles: 20,
        }
    }
}

/// Everything the runner needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub first: Experiment,
    pub experiments: usize,
    pub console: bool,
    pub image: bool,
    pub image_min_res: u32,
    pub seed: Option<u64>,
    pub output: PathBuf,
    pub csv_file: String,
    pub delimiter: u8,
    pub interactive: bool,
    pub trace_steps: bool,
    pub search: SearchConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            first: Experiment::default(),
            experiments: 1,
            console: true,
            image: true,
            image_min_res: 300,
            seed: None,
            output: PathBuf::from("saves"),
            csv_file: "timeToGetPathInGrid.csv".to_owned(),
            delimiter: b';',
            interactive: false,
            trace_steps: false,
            search: SearchConfig::default(),
        }
    }
}

impl From<Args> for ExperimentConfig {
    fn from(args: Args) -> Self {
        Self {
            first: Experiment {
                width: args.resx,
                height: args.resy,
                start: Point::new(args.x1, args.y1),
                goal: Point::new(args.x2, args.y2),
                obstacles: args.obs,
            },
            experiments: args.exp,
            console: args.console,
            image: args.image,
            seed: args.seed,
            output: args.output,
            interactive: args.interactive,
            trace_steps: args.trace_steps,
            search: SearchConfig {
                max_expansions: args.max_expansions,
                ..SearchConfig::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let args = Args::parse_from(["gridstar"]);
        let cfg = ExperimentConfig::from(args);
        assert_eq!(cfg.first, Experiment::default());
        assert_eq!(cfg.experiments, 1);
        assert!(cfg.console && cfg.image);
        assert_eq!(cfg.output, PathBuf::from("saves"));
        assert_eq!(cfg.search, SearchConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "gridstar", "--resx", "8", "--resy", "6", "--obs", "5", "--x1", "0", "--y1", "1",
            "--x2", "7", "--y2", "5", "--exp", "3", "--console", "false", "--seed", "42",
        ]);
        let cfg = ExperimentConfig::from(args);
        assert_eq!(
            cfg.first,
            Experiment {
                width: 8,
                height: 6,
                start: Point::new(0, 1),
                goal: Point::new(7, 5),
                obstacles: 5,
            }
        );
        assert_eq!(cfg.experiments, 3);
        assert!(!cfg.console);
        assert!(cfg.image);
        assert_eq!(cfg.seed, Some(42));
    }
}
