use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use thiserror::Error;

///
/// The pipeline stage an error was raised in.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Cluster,
    DiffGenes,
    Heatmap,
    Histogram,
    Output,
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Cluster => "cluster",
            Stage::DiffGenes => "diff-genes",
            Stage::Heatmap => "heatmap",
            Stage::Histogram => "histogram",
            Stage::Output => "output",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug)]
pub enum CirclinkError {
    #[error("Can't read file: {path:?}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't write file: {path:?}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record at line {line}: expected {expected} fields, found {found}: {content:?}")]
    MalformedRecord {
        line: usize,
        content: String,
        expected: usize,
        found: usize,
    },

    #[error("No gene-module records found after the header, there is no module to finalize")]
    NoModules,

    #[error("No differentially expressed gene matched the cluster table, proportions are undefined")]
    EmptyDifferentialSet,

    #[error("Invalid config file, it must have a `.toml` extension: {0:?}")]
    InvalidConfigFile(PathBuf),

    #[error("Unknown empty-diff policy: {0}. Expected `fail` or `zero`")]
    InvalidPolicy(String),

    #[error("{stage} stage failed")]
    StageFailed {
        stage: Stage,
        #[source]
        source: Box<CirclinkError>,
    },

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CirclinkError {
    /// Attach the path that was being read to a bare IO error.
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            CirclinkError::Io(source) => CirclinkError::FileRead {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }

    pub fn in_stage(self, stage: Stage) -> Self {
        CirclinkError::StageFailed {
            stage,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CirclinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Stage::Cluster, "cluster")]
    #[case(Stage::DiffGenes, "diff-genes")]
    #[case(Stage::Histogram, "histogram")]
    fn test_stage_names(#[case] stage: Stage, #[case] expected: &str) {
        assert_eq!(stage.to_string(), expected);
    }

    #[rstest]
    fn test_with_path_only_wraps_io() {
        let io = CirclinkError::Io(std::io::Error::other("boom"));
        let wrapped = io.with_path(Path::new("genes.csv"));
        assert!(matches!(wrapped, CirclinkError::FileRead { ref path, .. } if path == Path::new("genes.csv")));

        let untouched = CirclinkError::NoModules.with_path(Path::new("genes.csv"));
        assert!(matches!(untouched, CirclinkError::NoModules));
    }

    #[rstest]
    fn test_stage_failed_message() {
        let err = CirclinkError::EmptyDifferentialSet.in_stage(Stage::Histogram);
        assert_eq!(err.to_string(), "histogram stage failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
