use clap::{Arg, ArgAction, Command, arg};

use crate::consts;

pub const GENE_MODULE_ARG: &str = "gene-module";
pub const DIFF_GENES_ARG: &str = "diff-genes";
pub const CORRELATIONS_ARG: &str = "correlations";
pub const OUTPUT_DIR_ARG: &str = "output-dir";
pub const CONFIG_ARG: &str = "config";
pub const EMPTY_DIFF_ARG: &str = "empty-diff";
pub const VERBOSE_FLAG: &str = "verbose";

pub fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Create the files Circos needs to link differentially expressed genes with the co-expression modules of a WGCNA analysis.")
        .arg_required_else_help(true)
        .arg(
            Arg::new(GENE_MODULE_ARG)
                .required(true)
                .help("Gene-module association given by WGCNA (csv, header line first)."),
        )
        .arg(
            Arg::new(DIFF_GENES_ARG)
                .required(true)
                .help("List of differentially expressed genes, one per line."),
        )
        .arg(
            Arg::new(CORRELATIONS_ARG)
                .required(true)
                .help("Correlation between each module eigengene and a trait (csv)."),
        )
        .arg(
            Arg::new(OUTPUT_DIR_ARG)
                .required(true)
                .help("Directory where the Circos files are written."),
        )
        .arg(arg!(-c --config <FILE> "Path to a circlink.toml config file.").required(false))
        .arg(
            arg!(--"empty-diff" <POLICY> "What to do when no differential gene matches: fail or zero.")
                .required(false)
                .value_parser(["fail", "zero"]),
        )
        .arg(
            arg!(-v --verbose "Log every skipped line and unmatched identifier.")
                .action(ArgAction::SetTrue),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_positional_arguments() {
        let matches = build_parser()
            .try_get_matches_from(["circlink", "genes.csv", "diff.txt", "cor.csv", "out"])
            .unwrap();

        assert_eq!(
            matches.get_one::<String>(GENE_MODULE_ARG).unwrap(),
            "genes.csv"
        );
        assert_eq!(matches.get_one::<String>(OUTPUT_DIR_ARG).unwrap(), "out");
        assert_eq!(matches.get_flag(VERBOSE_FLAG), false);
        assert!(matches.get_one::<String>(CONFIG_ARG).is_none());
    }

    #[rstest]
    fn test_no_arguments_is_an_error() {
        let result = build_parser().try_get_matches_from(["circlink"]);
        assert_eq!(result.is_err(), true);
    }

    #[rstest]
    #[case(&["circlink", "a", "b", "c"])]
    #[case(&["circlink", "a", "b", "c", "d", "--empty-diff", "nan"])]
    fn test_invalid_invocations(#[case] args: &[&str]) {
        assert_eq!(build_parser().try_get_matches_from(args.to_vec()).is_err(), true);
    }

    #[rstest]
    fn test_optional_flags() {
        let matches = build_parser()
            .try_get_matches_from([
                "circlink",
                "a",
                "b",
                "c",
                "d",
                "--empty-diff",
                "zero",
                "-c",
                "circlink.toml",
                "-v",
            ])
            .unwrap();

        assert_eq!(matches.get_one::<String>(EMPTY_DIFF_ARG).unwrap(), "zero");
        assert_eq!(
            matches.get_one::<String>(CONFIG_ARG).unwrap(),
            "circlink.toml"
        );
        assert_eq!(matches.get_flag(VERBOSE_FLAG), true);
    }
}
