use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;

use circlink_core::{CirclinkConfig, EmptyDiffPolicy, PipelineInputs, RunSummary, run_pipeline};

use crate::cli::*;

fn required_path(matches: &ArgMatches, name: &str) -> PathBuf {
    let value = matches
        .get_one::<String>(name)
        .expect("clap enforces required positional arguments");
    PathBuf::from(value)
}

///
/// Resolve the run configuration: defaults, then the config file, then CLI flags.
///
fn resolve_config(matches: &ArgMatches) -> Result<CirclinkConfig> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG) {
        Some(path) => CirclinkConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => CirclinkConfig::default(),
    };

    if let Some(policy) = matches.get_one::<String>(EMPTY_DIFF_ARG) {
        config.empty_diff = EmptyDiffPolicy::from_str(policy)?;
    }

    Ok(config)
}

pub fn run_circlink(matches: &ArgMatches) -> Result<RunSummary> {
    let inputs = PipelineInputs {
        gene_module: required_path(matches, GENE_MODULE_ARG),
        diff_genes: required_path(matches, DIFF_GENES_ARG),
        correlations: required_path(matches, CORRELATIONS_ARG),
        output_dir: required_path(matches, OUTPUT_DIR_ARG),
    };
    let config = resolve_config(matches)?;

    let summary = run_pipeline(&inputs, &config).with_context(|| {
        format!(
            "Failed to build Circos files in {}",
            inputs.output_dir.display()
        )
    })?;

    Ok(summary)
}
