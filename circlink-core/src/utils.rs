use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::consts::{
    FIELD_DELIMITER, IDENTIFIER_PREFIX_LEN, IDENTIFIER_SEPARATOR, MODULE_LABEL_PREFIX, QUOTE_CHAR,
};
use crate::errors::{CirclinkError, Result};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|source| CirclinkError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Remove every quote character from a field, then trim surrounding whitespace.
///
pub fn normalize_field(field: &str) -> String {
    field.replace(QUOTE_CHAR, "").trim().to_string()
}

///
/// Split a comma delimited line into normalized fields.
///
pub fn split_record(line: &str) -> Vec<String> {
    line.split(FIELD_DELIMITER).map(normalize_field).collect()
}

///
/// Drop the database identifier in front of a gene symbol.
///
/// When the identifier contains a `|`, the first [IDENTIFIER_PREFIX_LEN] characters
/// are removed no matter where the separator sits. Identifiers without it are kept as is.
///
pub fn strip_identifier_prefix(identifier: &str) -> String {
    if identifier.contains(IDENTIFIER_SEPARATOR) {
        identifier.chars().skip(IDENTIFIER_PREFIX_LEN).collect()
    } else {
        identifier.to_string()
    }
}

///
/// Normalize a raw identifier into the key used to join genes by name.
///
pub fn gene_key(raw: &str) -> String {
    strip_identifier_prefix(&normalize_field(raw))
}

///
/// Turn a module eigengene label (`MEturquoise`) into a module id (`turquoise`).
///
pub fn strip_module_prefix(label: &str) -> &str {
    label.strip_prefix(MODULE_LABEL_PREFIX).unwrap_or(label)
}

///
/// Format a proportion the way downstream tracks expect: shortest round-trip digits,
/// always with a decimal point, and scientific notation with a two digit exponent below `1e-4`.
///
pub fn format_proportion(value: f64) -> String {
    if value != 0.0 && value.is_finite() && value.abs() < 1e-4 {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => formatted,
        };
    }

    let formatted = value.to_string();
    if value.is_finite() && !formatted.contains('.') {
        format!("{}.0", formatted)
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("\"ENSG00000000003.14|TSPAN6\"", "TSPAN6")]
    #[case("ENSG00000000003.14|TSPAN6", "TSPAN6")]
    #[case("  \"TSPAN6\"  ", "TSPAN6")]
    #[case("g2", "g2")]
    // fixed offset, not split at the separator
    #[case("g1|AAAAAAAAAAAAAAAAAAA", "AAA")]
    #[case("ENSG00000000001.01|AAAAAAAAAAAAAAAAAAA", "AAAAAAAAAAAAAAAAAAA")]
    #[case("short|id", "")]
    fn test_gene_key(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(gene_key(raw), expected);
    }

    #[rstest]
    fn test_prefix_counts_characters() {
        // 18 multi-byte characters plus the separator
        let raw = format!("{}|SYMBOL", "é".repeat(18));
        assert_eq!(strip_identifier_prefix(&raw), "SYMBOL");
    }

    #[rstest]
    fn test_split_record() {
        let fields = split_record("\"ENSG00000000003.14|TSPAN6\", \"turquoise\"\r");
        assert_eq!(fields, vec!["ENSG00000000003.14|TSPAN6", "turquoise"]);
    }

    #[rstest]
    #[case("MEturquoise", "turquoise")]
    #[case("turquoise", "turquoise")]
    #[case("modME", "modME")]
    #[case("MEME", "ME")]
    fn test_strip_module_prefix(#[case] label: &str, #[case] expected: &str) {
        assert_eq!(strip_module_prefix(label), expected);
    }

    #[rstest]
    #[case(0.0, "0.0")]
    #[case(1.0, "1.0")]
    #[case(0.5, "0.5")]
    #[case(0.6, "0.6")]
    #[case(1.0 / 3.0, "0.3333333333333333")]
    #[case(0.0001, "0.0001")]
    #[case(0.00005, "5e-05")]
    #[case(0.000015, "1.5e-05")]
    fn test_format_proportion(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_proportion(value), expected);
    }

    #[rstest]
    fn test_missing_file_reports_path() {
        let path = Path::new("does/not/exist.csv");
        let err = get_dynamic_reader(path).err().unwrap();
        assert!(matches!(err, CirclinkError::FileRead { ref path, .. } if path == Path::new("does/not/exist.csv")));
    }
}
