use std::fmt::{self, Display};
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use log::info;

use crate::cluster::ClusterAssignment;
use crate::config::CirclinkConfig;
use crate::diff::DiffGeneTable;
use crate::errors::{CirclinkError, Result, Stage};
use crate::heatmap::HeatmapTrack;
use crate::histogram::build_histograms;
use crate::io::TrackWrite;

///
/// The three analysis outputs to combine, and where to put the tracks.
///
#[derive(Debug, Clone)]
pub struct PipelineInputs {
    pub gene_module: PathBuf,
    pub diff_genes: PathBuf,
    pub correlations: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub genes: usize,
    pub modules: usize,
    pub diff_rows: usize,
    pub correlation_rows: usize,
    pub unmatched_genes: usize,
    pub unmatched_modules: usize,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} genes in {} modules, {} differential gene rows ({} identifiers unmatched), {} heatmap rows ({} labels unmatched)",
            self.genes,
            self.modules,
            self.diff_rows,
            self.unmatched_genes,
            self.correlation_rows,
            self.unmatched_modules
        )
    }
}

fn write_output<T: Display>(records: &[T], output_dir: &Path, name: &str) -> Result<()> {
    let path = output_dir.join(name);
    records
        .write_track(&path)
        .map_err(|e| e.in_stage(Stage::Output))?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

///
/// Build every Circos track from a gene-module file, a differential gene list and a
/// module-trait correlation file.
///
/// Stages run in order and each one writes its tracks before the next starts, so a
/// failing stage leaves the tracks of the previous stages on disk.
///
/// # Arguments
/// - inputs: input files and output directory
/// - config: output names and the empty differential set policy
///
pub fn run_pipeline(inputs: &PipelineInputs, config: &CirclinkConfig) -> Result<RunSummary> {
    let outputs = &config.outputs;
    let output_dir = inputs.output_dir.as_path();

    create_dir_all(output_dir)
        .map_err(|source| CirclinkError::FileWrite {
            path: output_dir.to_path_buf(),
            source,
        })
        .map_err(|e| e.in_stage(Stage::Output))?;

    info!("Assigning coordinates from {}", inputs.gene_module.display());
    let assignment = ClusterAssignment::from_path(&inputs.gene_module)
        .map_err(|e| e.in_stage(Stage::Cluster))?;
    write_output(&assignment.genes.genes, output_dir, &outputs.cluster)?;
    write_output(&assignment.karyotype.modules, output_dir, &outputs.caryotype)?;

    info!("Mapping differential genes from {}", inputs.diff_genes.display());
    let diff_genes = DiffGeneTable::from_path(&inputs.diff_genes, &assignment.genes)
        .map_err(|e| e.in_stage(Stage::DiffGenes))?;
    write_output(&diff_genes.rows, output_dir, &outputs.gene_names)?;

    info!("Attaching correlations from {}", inputs.correlations.display());
    let heatmap = HeatmapTrack::from_path(&inputs.correlations, &assignment.karyotype)
        .map_err(|e| e.in_stage(Stage::Heatmap))?;
    write_output(&heatmap.rows, output_dir, &outputs.heatmap)?;

    let histograms = build_histograms(&assignment.karyotype, &diff_genes.rows, config.empty_diff)
        .map_err(|e| e.in_stage(Stage::Histogram))?;
    write_output(&histograms.counts, output_dir, &outputs.histo_count)?;
    write_output(&histograms.proportions, output_dir, &outputs.histo_prop)?;

    let summary = RunSummary {
        genes: assignment.genes.len(),
        modules: assignment.karyotype.len(),
        diff_rows: diff_genes.len(),
        correlation_rows: heatmap.len(),
        unmatched_genes: diff_genes.unmatched.len(),
        unmatched_modules: heatmap.unmatched.len(),
    };
    info!("{}", summary);

    Ok(summary)
}
