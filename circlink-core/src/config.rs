use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::errors::CirclinkError;

///
/// What the histogram stage does when no differential gene matched the cluster table.
///
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmptyDiffPolicy {
    /// Abort the run.
    #[default]
    Fail,
    /// Write zero counts and `0.0` proportions.
    Zero,
}

impl FromStr for EmptyDiffPolicy {
    type Err = CirclinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(EmptyDiffPolicy::Fail),
            "zero" => Ok(EmptyDiffPolicy::Zero),
            _ => Err(CirclinkError::InvalidPolicy(s.to_string())),
        }
    }
}

/// File names written into the output directory.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputNames {
    pub cluster: String,
    pub caryotype: String,
    pub gene_names: String,
    pub heatmap: String,
    pub histo_count: String,
    pub histo_prop: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        OutputNames {
            cluster: DEFAULT_CLUSTER_FILE.to_string(),
            caryotype: DEFAULT_CARYOTYPE_FILE.to_string(),
            gene_names: DEFAULT_GENE_NAMES_FILE.to_string(),
            heatmap: DEFAULT_HEATMAP_FILE.to_string(),
            histo_count: DEFAULT_HISTO_COUNT_FILE.to_string(),
            histo_prop: DEFAULT_HISTO_PROP_FILE.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CirclinkConfig {
    pub empty_diff: EmptyDiffPolicy,
    pub outputs: OutputNames,
}

impl TryFrom<&Path> for CirclinkConfig {
    type Error = CirclinkError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        if path.extension().and_then(OsStr::to_str) != Some("toml") {
            return Err(CirclinkError::InvalidConfigFile(path.to_path_buf()));
        }
        let toml_str = read_to_string(path).map_err(|source| CirclinkError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    #[rstest]
    fn test_defaults() {
        let config = CirclinkConfig::default();
        assert_eq!(config.empty_diff, EmptyDiffPolicy::Fail);
        assert_eq!(config.outputs.heatmap, "heatmapage.txt");
        assert_eq!(config.outputs.histo_prop, "histoProp.txt");
    }

    #[rstest]
    fn test_partial_toml() {
        let config: CirclinkConfig =
            toml::from_str("empty_diff = \"zero\"\n[outputs]\ncluster = \"genes.txt\"\n").unwrap();
        assert_eq!(config.empty_diff, EmptyDiffPolicy::Zero);
        assert_eq!(config.outputs.cluster, "genes.txt");
        assert_eq!(config.outputs.caryotype, "caryotype.txt");
    }

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/circos/circlink.toml");
        let config = CirclinkConfig::try_from(path.as_path()).unwrap();
        assert_eq!(config.empty_diff, EmptyDiffPolicy::Zero);
        assert_eq!(config.outputs.histo_count, "counts.txt");
    }

    #[rstest]
    fn test_rejects_other_extensions() {
        let path = PathBuf::from("../tests/data/circos/correlations.csv");
        let result = CirclinkConfig::try_from(path.as_path());
        assert!(matches!(result, Err(CirclinkError::InvalidConfigFile(_))));
    }

    #[rstest]
    fn test_bad_policy_in_toml() {
        let result = toml::from_str::<CirclinkConfig>("empty_diff = \"nan\"\n");
        assert_eq!(result.is_err(), true);
    }

    #[rstest]
    #[case("fail", EmptyDiffPolicy::Fail)]
    #[case("Zero", EmptyDiffPolicy::Zero)]
    fn test_policy_from_str(#[case] raw: &str, #[case] expected: EmptyDiffPolicy) {
        assert_eq!(EmptyDiffPolicy::from_str(raw).unwrap(), expected);
    }
}
