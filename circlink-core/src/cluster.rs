use std::io::BufRead;
use std::path::Path;

use fxhash::{FxHashMap, FxHashSet};
use log::{debug, warn};

use crate::errors::{CirclinkError, Result};
use crate::models::{GeneRecord, ModuleExtent};
use crate::utils::{get_dynamic_reader, split_record, strip_identifier_prefix};

///
/// Every gene of the gene-module file, in input order, with its synthetic coordinate.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneTable {
    pub genes: Vec<GeneRecord>,
}

impl GeneTable {
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    ///
    /// Index genes by name. Duplicated names keep all of their records, in table order.
    ///
    pub fn index_by_name(&self) -> FxHashMap<&str, Vec<&GeneRecord>> {
        let mut index: FxHashMap<&str, Vec<&GeneRecord>> = FxHashMap::default();
        for gene in self.genes.iter() {
            index.entry(gene.name.as_str()).or_default().push(gene);
        }
        index
    }
}

///
/// Module extents in the order modules first appear in the gene-module file.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Karyotype {
    pub modules: Vec<ModuleExtent>,
}

impl Karyotype {
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn total_genes(&self) -> u64 {
        self.modules.iter().map(|m| m.gene_count() as u64).sum()
    }

    pub fn index_by_module(&self) -> FxHashMap<&str, Vec<&ModuleExtent>> {
        let mut index: FxHashMap<&str, Vec<&ModuleExtent>> = FxHashMap::default();
        for extent in self.modules.iter() {
            index.entry(extent.module_id.as_str()).or_default().push(extent);
        }
        index
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAssignment {
    pub genes: GeneTable,
    pub karyotype: Karyotype,
}

impl ClusterAssignment {
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;
        assign_coordinates(reader).map_err(|e| e.with_path(path))
    }
}

///
/// Lay the genes of a gene-module file out on synthetic per-module coordinates.
///
/// The first line is a header. Each following line is `"gene","module"`. Genes are
/// numbered from 0 within a run of identical module ids; a module is closed as soon as
/// the module id changes, so a module reappearing later starts a new run at 0.
///
/// # Arguments
/// - reader: a reader over the gene-module file
///
pub fn assign_coordinates<R: BufRead>(reader: R) -> Result<ClusterAssignment> {
    let mut genes: Vec<GeneRecord> = Vec::new();
    let mut modules: Vec<ModuleExtent> = Vec::new();
    let mut seen_modules: FxHashSet<String> = FxHashSet::default();

    let mut current_module: Option<String> = None;
    let mut gene_pos: u32 = 0;

    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_no = index + 1;

        if line.trim().is_empty() {
            debug!("Skipping blank line {} of the gene-module file", line_no);
            continue;
        }

        let fields = split_record(&line);
        let [identifier, module_id]: [String; 2] =
            fields
                .try_into()
                .map_err(|fields: Vec<String>| CirclinkError::MalformedRecord {
                    line: line_no,
                    content: line.clone(),
                    expected: 2,
                    found: fields.len(),
                })?;

        if current_module.as_deref() != Some(module_id.as_str()) {
            if let Some(previous) = current_module.take() {
                modules.push(ModuleExtent::new(previous, gene_pos));
            }
            if !seen_modules.insert(module_id.clone()) {
                warn!(
                    "Module {} reappears at line {} after other modules, its coordinates restart at 0",
                    module_id, line_no
                );
            }
            current_module = Some(module_id.clone());
            gene_pos = 0;
        }

        let name = strip_identifier_prefix(&identifier);
        genes.push(GeneRecord::new(name, module_id, gene_pos));
        gene_pos += 1;
    }

    match current_module {
        Some(last) => modules.push(ModuleExtent::new(last, gene_pos)),
        None => return Err(CirclinkError::NoModules),
    }

    debug!(
        "Assigned coordinates to {} genes over {} modules",
        genes.len(),
        modules.len()
    );

    Ok(ClusterAssignment {
        genes: GeneTable { genes },
        karyotype: Karyotype { modules },
    })
}
