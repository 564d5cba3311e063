use std::fmt::{self, Display};

use crate::consts::{KARYOTYPE_KEYWORD, KARYOTYPE_PARENT};

///
/// The span of one module on the synthetic karyotype. Modules always start at 0
/// and are as long as the number of genes assigned to them.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct ModuleExtent {
    pub module_id: String,
    pub start: u32,
    pub end: u32,
}

impl ModuleExtent {
    pub fn new(module_id: String, gene_count: u32) -> Self {
        ModuleExtent {
            module_id,
            start: 0,
            end: gene_count,
        }
    }

    pub fn gene_count(&self) -> u32 {
        self.end - self.start
    }
}

/// Karyotype line: `chr - id label start end color`. The module id fills all three name slots.
impl Display for ModuleExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            KARYOTYPE_KEYWORD,
            KARYOTYPE_PARENT,
            self.module_id,
            self.module_id,
            self.start,
            self.end,
            self.module_id
        )
    }
}

///
/// A module extent carrying the module-trait correlation, verbatim from the input.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct CorrelationRecord {
    pub module_id: String,
    pub start: u32,
    pub end: u32,
    pub correlation: String,
}

impl CorrelationRecord {
    pub fn new(extent: &ModuleExtent, correlation: String) -> Self {
        CorrelationRecord {
            module_id: extent.module_id.clone(),
            start: extent.start,
            end: extent.end,
            correlation,
        }
    }
}

impl Display for CorrelationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.module_id, self.start, self.end, self.correlation
        )
    }
}
