use std::io::BufRead;
use std::path::Path;

use log::debug;

use crate::cluster::Karyotype;
use crate::errors::{CirclinkError, Result};
use crate::models::CorrelationRecord;
use crate::utils::{get_dynamic_reader, split_record, strip_module_prefix};

///
/// Module extents annotated with their module-trait correlation.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeatmapTrack {
    pub rows: Vec<CorrelationRecord>,
    /// Module ids (prefix removed) with no extent in the karyotype.
    pub unmatched: Vec<String>,
}

impl HeatmapTrack {
    pub fn from_path(path: &Path, karyotype: &Karyotype) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;
        attach_correlations(reader, karyotype).map_err(|e| e.with_path(path))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

///
/// Attach module-trait correlations to the module extents.
///
/// Each line is `"MEmodule","value"`. The leading `ME` is removed before lookup and the
/// value is carried through untouched. Rows follow the correlation file; a label naming
/// several extents (a module split into runs) yields one row per extent.
///
pub fn attach_correlations<R: BufRead>(reader: R, karyotype: &Karyotype) -> Result<HeatmapTrack> {
    let index = karyotype.index_by_module();

    let mut rows: Vec<CorrelationRecord> = Vec::new();
    let mut unmatched: Vec<String> = Vec::new();

    for (index_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index_no + 1;

        if line.trim().is_empty() {
            debug!("Skipping blank line {} of the correlation file", line_no);
            continue;
        }

        let fields = split_record(&line);
        let [label, correlation]: [String; 2] =
            fields
                .try_into()
                .map_err(|fields: Vec<String>| CirclinkError::MalformedRecord {
                    line: line_no,
                    content: line.clone(),
                    expected: 2,
                    found: fields.len(),
                })?;

        let module_id = strip_module_prefix(&label);
        match index.get(module_id) {
            Some(extents) => rows.extend(
                extents
                    .iter()
                    .map(|extent| CorrelationRecord::new(extent, correlation.clone())),
            ),
            None => {
                debug!("Correlation label {:?} names no module", label);
                unmatched.push(module_id.to_string());
            }
        }
    }

    Ok(HeatmapTrack { rows, unmatched })
}
