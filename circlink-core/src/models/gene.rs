use std::fmt::{self, Display};

///
/// A gene placed on its module with a synthetic, one base wide coordinate.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct GeneRecord {
    pub name: String,
    pub module_id: String,
    pub start: u32,
    pub end: u32,
}

impl GeneRecord {
    pub fn new(name: String, module_id: String, position: u32) -> Self {
        GeneRecord {
            name,
            module_id,
            start: position,
            end: position + 1,
        }
    }
}

/// `name  module  start  end`, tab separated.
impl Display for GeneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.name, self.module_id, self.start, self.end
        )
    }
}

///
/// A differentially expressed gene, located through the cluster table.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct DiffGeneRecord {
    pub module_id: String,
    pub start: u32,
    pub end: u32,
    pub name: String,
}

impl From<&GeneRecord> for DiffGeneRecord {
    fn from(gene: &GeneRecord) -> Self {
        DiffGeneRecord {
            module_id: gene.module_id.clone(),
            start: gene.start,
            end: gene.end,
            name: gene.name.clone(),
        }
    }
}

impl Display for DiffGeneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.module_id, self.start, self.end, self.name
        )
    }
}
