use crate::entrypoints::cli::parse_args;
use clap::{Parser, Subcommand, ValueEnum};
use kdtree_points::data::Rectangle;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// KdTree Points - Load a 2D point file and answer spatial queries over it
pub struct Settings {
    /// Point file to load (one `x y` pair per line)
    #[clap(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Index used to answer the queries
    #[clap(short, long, value_enum, default_value = "kd-tree")]
    pub backend: Backend,

    /// Root region of the k-d tree, as `xmin,ymin,xmax,ymax`
    #[clap(
        long,
        value_parser = parse_bounds,
        default_value = "0,0,1,1",
        allow_hyphen_values = true
    )]
    pub bounds: Rectangle,

    /// Print results as JSON
    #[clap(long, default_value = "false")]
    pub json: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// 2D k-d tree
    KdTree,
    /// Brute-force ordered set
    Brute,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Points inside the rectangle, boundary included
    Range {
        #[clap(allow_negative_numbers = true)]
        xmin: f64,
        #[clap(allow_negative_numbers = true)]
        ymin: f64,
        #[clap(allow_negative_numbers = true)]
        xmax: f64,
        #[clap(allow_negative_numbers = true)]
        ymax: f64,
    },
    /// Closest point to (x, y)
    Nearest {
        #[clap(allow_negative_numbers = true)]
        x: f64,
        #[clap(allow_negative_numbers = true)]
        y: f64,
    },
    /// Whether (x, y) is stored
    Contains {
        #[clap(allow_negative_numbers = true)]
        x: f64,
        #[clap(allow_negative_numbers = true)]
        y: f64,
    },
    /// Size and shape of the index
    Stats,
    /// Partition of the k-d tree, in pre-order
    Splits,
}

fn parse_bounds(value: &str) -> Result<Rectangle, String> {
    let bounds = value
        .split(',')
        .map(|field| {
            field
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("{field:?}: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let [xmin, ymin, xmax, ymax] = bounds[..] else {
        return Err(format!(
            "expected 4 comma-separated values, got {}",
            bounds.len()
        ));
    };
    Rectangle::new(xmin, ymin, xmax, ymax).map_err(|e| e.to_string())
}

impl Settings {
    /// Parse settings from the command line, exiting with usage on error
    pub fn from_cli() -> Self {
        match parse_args::<Settings>() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }
}
