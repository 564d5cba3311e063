use fxhash::FxHashMap;
use log::warn;

use crate::cluster::Karyotype;
use crate::config::EmptyDiffPolicy;
use crate::errors::{CirclinkError, Result};
use crate::models::{CountEntry, DiffGeneRecord, Proportion, ProportionEntry};

///
/// Two parallel histogram tracks, one bar per module extent.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histograms {
    pub counts: Vec<CountEntry>,
    pub proportions: Vec<ProportionEntry>,
}

///
/// Count the differentially expressed genes of every module and their share of all
/// differential-gene rows.
///
/// The denominator is the number of rows in `diff_genes`, so a gene matched twice
/// counts twice. With no rows at all the proportions are undefined and `policy`
/// decides between failing and writing zeros.
///
/// # Arguments
/// - karyotype: module extents, in output order
/// - diff_genes: rows produced by [crate::diff::map_diff_genes]
/// - policy: what to do when `diff_genes` is empty
///
pub fn build_histograms(
    karyotype: &Karyotype,
    diff_genes: &[DiffGeneRecord],
    policy: EmptyDiffPolicy,
) -> Result<Histograms> {
    let total = diff_genes.len();

    if total == 0 {
        match policy {
            EmptyDiffPolicy::Fail => return Err(CirclinkError::EmptyDifferentialSet),
            EmptyDiffPolicy::Zero => {
                warn!("No differential gene rows, writing zero proportions for every module")
            }
        }
    }

    let mut per_module: FxHashMap<&str, usize> = FxHashMap::default();
    for row in diff_genes.iter() {
        *per_module.entry(row.module_id.as_str()).or_insert(0) += 1;
    }

    let mut counts = Vec::with_capacity(karyotype.len());
    let mut proportions = Vec::with_capacity(karyotype.len());

    for extent in karyotype.modules.iter() {
        let count = per_module
            .get(extent.module_id.as_str())
            .copied()
            .unwrap_or(0);
        let proportion = match total {
            0 => 0.0,
            _ => count as f64 / total as f64,
        };

        counts.push(CountEntry::new(extent, count));
        proportions.push(ProportionEntry::new(extent, Proportion(proportion)));
    }

    Ok(Histograms {
        counts,
        proportions,
    })
}
