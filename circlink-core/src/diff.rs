use std::io::BufRead;
use std::path::Path;

use log::debug;

use crate::cluster::GeneTable;
use crate::errors::Result;
use crate::models::DiffGeneRecord;
use crate::utils::{gene_key, get_dynamic_reader};

///
/// Differentially expressed genes located on the cluster table.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffGeneTable {
    /// One row per matching gene record, in input order and then table order.
    pub rows: Vec<DiffGeneRecord>,
    /// Normalized identifiers that matched nothing.
    pub unmatched: Vec<String>,
}

impl DiffGeneTable {
    pub fn from_path(path: &Path, genes: &GeneTable) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;
        map_diff_genes(reader, genes).map_err(|e| e.with_path(path))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

///
/// Look up every differentially expressed gene in the cluster table.
///
/// Identifiers are normalized like the gene-module file (quotes removed, database
/// prefix dropped). An identifier matching several genes yields one row per match; a
/// miss yields nothing.
///
/// # Arguments
/// - reader: one gene identifier per line, no header
/// - genes: the table built by [crate::cluster::assign_coordinates]
///
pub fn map_diff_genes<R: BufRead>(reader: R, genes: &GeneTable) -> Result<DiffGeneTable> {
    let index = genes.index_by_name();

    let mut rows: Vec<DiffGeneRecord> = Vec::new();
    let mut unmatched: Vec<String> = Vec::new();

    for (index_no, line) in reader.lines().enumerate() {
        let line = line?;

        if line.trim().is_empty() {
            debug!(
                "Skipping blank line {} of the differential gene file",
                index_no + 1
            );
            continue;
        }

        let key = gene_key(&line);
        match index.get(key.as_str()) {
            Some(matches) => rows.extend(matches.iter().map(|gene| DiffGeneRecord::from(*gene))),
            None => {
                debug!("Differential gene {} is not in the cluster table", key);
                unmatched.push(key);
            }
        }
    }

    Ok(DiffGeneTable { rows, unmatched })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::cluster::assign_coordinates;

    #[fixture]
    fn genes() -> GeneTable {
        let input = "h\n\"ENSG00000000003.14|TSPAN6\",\"modA\"\n\"g2\",\"modA\"\n\"g3\",\"modB\"\n";
        assign_coordinates(Cursor::new(input.as_bytes()))
            .unwrap()
            .genes
    }

    fn map(input: &str, genes: &GeneTable) -> DiffGeneTable {
        map_diff_genes(Cursor::new(input.as_bytes()), genes).unwrap()
    }

    fn lines(table: &DiffGeneTable) -> Vec<String> {
        table.rows.iter().map(|r| r.to_string()).collect()
    }

    #[rstest]
    fn test_single_match(genes: GeneTable) {
        let table = map("g2\n", &genes);
        assert_eq!(lines(&table), vec!["modA 1 2 g2"]);
    }

    #[rstest]
    fn test_prefixed_and_quoted_identifiers(genes: GeneTable) {
        let table = map("\"ENSG00000000003.14|TSPAN6\"\n\"g3\"\nTSPAN6\n", &genes);
        assert_eq!(
            lines(&table),
            vec!["modA 0 1 TSPAN6", "modB 0 1 g3", "modA 0 1 TSPAN6"]
        );
    }

    #[rstest]
    fn test_miss_is_not_an_error(genes: GeneTable) {
        let table = map("NOTAGENE\n", &genes);
        assert!(table.is_empty());
        assert_eq!(table.unmatched, vec!["NOTAGENE"]);
    }

    #[rstest]
    fn test_input_order_is_kept(genes: GeneTable) {
        let table = map("g3\ng2\n", &genes);
        assert_eq!(lines(&table), vec!["modB 0 1 g3", "modA 1 2 g2"]);
    }

    #[rstest]
    fn test_duplicate_genes_give_duplicate_rows() {
        let genes = assign_coordinates(Cursor::new("h\ng1,A\ng2,A\ng1,B\n".as_bytes()))
            .unwrap()
            .genes;
        let table = map("g1\n\n", &genes);
        assert_eq!(lines(&table), vec!["A 0 1 g1", "B 0 1 g1"]);
    }
}
