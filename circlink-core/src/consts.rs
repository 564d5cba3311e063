/// Separator between a database identifier and the gene symbol, e.g. `ENSG00000000003.14|TSPAN6`.
pub const IDENTIFIER_SEPARATOR: char = '|';

/// Number of leading characters dropped from an identifier carrying [IDENTIFIER_SEPARATOR].
/// Matches a versioned Ensembl gene id plus the separator.
pub const IDENTIFIER_PREFIX_LEN: usize = 19;

/// Prefix WGCNA puts in front of module eigengene labels.
pub const MODULE_LABEL_PREFIX: &str = "ME";

pub const FIELD_DELIMITER: char = ',';
pub const QUOTE_CHAR: char = '"';

// karyotype lines are `chr - <id> <label> <start> <end> <color>`
pub const KARYOTYPE_KEYWORD: &str = "chr";
pub const KARYOTYPE_PARENT: &str = "-";

pub const DEFAULT_CLUSTER_FILE: &str = "cluster.txt";
pub const DEFAULT_CARYOTYPE_FILE: &str = "caryotype.txt";
pub const DEFAULT_GENE_NAMES_FILE: &str = "gene.names.txt";
pub const DEFAULT_HEATMAP_FILE: &str = "heatmapage.txt";
pub const DEFAULT_HISTO_COUNT_FILE: &str = "histoCount.txt";
pub const DEFAULT_HISTO_PROP_FILE: &str = "histoProp.txt";
