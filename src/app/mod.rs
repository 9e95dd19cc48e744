pub(crate) mod commands;
pub(crate) mod settings;

use kdtree_points::data::{self, Config, KdTree, PointSet};
use settings::{Backend, Settings};
use std::io::Write;

/// Error types for the command line application
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Data(#[from] data::DataError),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("The {0} command is not supported by the {1} backend")]
    Unsupported(&'static str, &'static str),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Load the input file into the selected backend, run the command and write the result
pub fn run(settings: &Settings, out: &mut impl Write) -> Result<()> {
    profiling::scope!("app::run");

    let points = data::loader::load_points(&settings.input)?;

    let output = match settings.backend {
        Backend::KdTree => {
            let mut tree = KdTree::with_config(Config {
                bounds: settings.bounds,
            });
            tree.extend(points);
            tracing::info!(
                "Built k-d tree with {} points (height {})",
                tree.len(),
                tree.height()
            );
            commands::execute_kd_tree(&tree, &settings.command)?
        }
        Backend::Brute => {
            let set: PointSet = points.into_iter().collect();
            tracing::info!("Built point set with {} points", set.len());
            commands::execute_point_set(&set, &settings.command)?
        }
    };

    if settings.json {
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::settings::Command;
    use std::path::PathBuf;

    fn write_points(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "kdtree-points-{}-{}.txt",
            name,
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    fn settings(input: PathBuf, backend: Backend, json: bool, command: Command) -> Settings {
        Settings {
            input,
            backend,
            bounds: kdtree_points::data::Rectangle::UNIT,
            json,
            command,
        }
    }

    fn run_to_string(settings: &Settings) -> String {
        let mut out = Vec::new();
        run(settings, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_range_on_both_backends() {
        let input = write_points("range", "0.5 0.5\n0.25 0.25\n0.75 0.75\n0.1 0.9\n");
        let command = Command::Range {
            xmin: 0.0,
            ymin: 0.0,
            xmax: 0.6,
            ymax: 0.6,
        };

        for backend in [Backend::KdTree, Backend::Brute] {
            let text = run_to_string(&settings(input.clone(), backend, false, command.clone()));
            assert_eq!(text, "(0.25, 0.25)\n(0.5, 0.5)\n");
        }
        std::fs::remove_file(input).unwrap();
    }

    #[test]
    fn test_run_nearest_json() {
        let input = write_points("nearest", "0.5 0.5\n0.25 0.25\n");
        let text = run_to_string(&settings(
            input.clone(),
            Backend::KdTree,
            true,
            Command::Nearest { x: 0.26, y: 0.24 },
        ));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["command"], "nearest");
        assert_eq!(value["nearest"], serde_json::json!([0.25, 0.25]));
        std::fs::remove_file(input).unwrap();
    }

    #[test]
    fn test_run_splits_requires_kd_tree() {
        let input = write_points("splits", "0.5 0.5\n");
        let result = run(
            &settings(input.clone(), Backend::Brute, false, Command::Splits),
            &mut Vec::new(),
        );
        assert!(matches!(result, Err(AppError::Unsupported("splits", "brute"))));
        std::fs::remove_file(input).unwrap();
    }

    #[test]
    fn test_run_missing_input() {
        let result = run(
            &settings(
                PathBuf::from("/definitely/not/here.txt"),
                Backend::KdTree,
                false,
                Command::Stats,
            ),
            &mut Vec::new(),
        );
        assert!(matches!(result, Err(AppError::Data(data::DataError::Io(_)))));
    }
}
