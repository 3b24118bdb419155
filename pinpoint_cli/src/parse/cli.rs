use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use pinpoint::config::{self, AssumptionMode, CollapseStrategy, WeightPolicy};

pub fn cli() -> Command {
    Command::new("pinpoint")
        .about("Encodes axiom pinpointing problems for MaxSAT solvers, and extracts the modules they report")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(encode())
        .subcommand(extract())
        .subcommand(translate())
}

fn encode() -> Command {
    Command::new("encode")
        .about("Writes a WCNF instance in which the clauses are hard, the query is forced false, and each assumption is soft.")

        .arg(Arg::new("cnf")
            .required(true)
            .value_name("CNF")
            .value_parser(value_parser!(PathBuf))
            .help("The clause source, one clause per line, each ending with 0."))

        .arg(Arg::new("assumptions")
            .required(true)
            .value_name("ASSUMPTIONS")
            .value_parser(value_parser!(PathBuf))
            .help("The assumptions, laid out according to the mode."))

        .arg(Arg::new("query")
            .required(true)
            .value_name("QUERY")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(isize))
            .help("The query literal, whose negation is forced."))

        .arg(Arg::new("mode")
            .long("mode")
            .short('m')
            .value_name("MODE")
            .value_parser(clap::builder::ValueParser::new(assumption_mode_parser))
            .required(false)
            .num_args(1)
            .help(format!("How assumptions are laid out.
Default: {}", config::defaults::ASSUMPTION_MODE))
            .long_help(format!("How assumptions are laid out.
Default: {}

  - {}: One assumption per line, as the first token of the line.
  - {}   : A single line of assumptions, ending with 0.", config::defaults::ASSUMPTION_MODE, AssumptionMode::NoOpt, AssumptionMode::Coi)))

        .arg(Arg::new("weight")
            .long("weight")
            .short('w')
            .value_name("POLICY")
            .value_parser(clap::builder::ValueParser::new(weight_policy_parser))
            .required(false)
            .num_args(1)
            .help(format!("How the weight of hard clauses is chosen.
Default: {}", config::defaults::WEIGHT_POLICY))
            .long_help(format!("How the weight of hard clauses is chosen.
Default: {}

  - {} : One more than the top variable.
  - {}: One more than the greater of the top variable and the count of assumptions.", config::defaults::WEIGHT_POLICY, WeightPolicy::TopVar, WeightPolicy::Dominant)))

        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help("Treat any warning found while encoding as an error."))

        .arg(Arg::new("output")
            .long("output")
            .short('o')
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("The path to write the WCNF instance to.
Default: Standard output"))
}

fn extract() -> Command {
    Command::new("extract")
        .about("Writes the axioms of a module as an ontology fragment, with an index map.")

        .arg(Arg::new("gci")
            .required(true)
            .value_name("GCI")
            .value_parser(value_parser!(PathBuf))
            .help("The general concept inclusions, one '<id> <axiom>' per line."))

        .arg(Arg::new("ri")
            .required(true)
            .value_name("RI")
            .value_parser(value_parser!(PathBuf))
            .help("The role inclusions, one '<id> <axiom>' per line."))

        .arg(Arg::new("module")
            .required(true)
            .value_name("MODULE")
            .value_parser(value_parser!(PathBuf))
            .help("The module, a single line of axiom identifiers ending with 0."))

        .arg(Arg::new("name")
            .required(true)
            .value_name("NAME")
            .help("The name of the fragment and index map."))

        .arg(Arg::new("out_dir")
            .required(true)
            .value_name("OUT_DIR")
            .value_parser(value_parser!(PathBuf))
            .help("The directory to write the fragment and index map to."))

        .arg(Arg::new("collapse")
            .long("collapse")
            .value_name("STRATEGY")
            .value_parser(clap::builder::ValueParser::new(collapse_parser))
            .required(false)
            .num_args(1)
            .help(format!("How a pair of definitions sharing an identifier is read.
Default: {}", config::defaults::COLLAPSE_STRATEGY))
            .long_help(format!("How a pair of definitions sharing an identifier is read.
Default: {}

  - {}   : Any pair is an equivalence.
  - {}: A pair is an equivalence if the second definition is the converse of the first.
              Otherwise, the definition is ambiguous.", config::defaults::COLLAPSE_STRATEGY, CollapseStrategy::Count, CollapseStrategy::Converse)))

        .arg(Arg::new("marker")
            .long("marker")
            .value_name("TOKEN")
            .required(false)
            .num_args(1)
            .allow_hyphen_values(true)
            .help(format!("The relation token of an equivalence.
Default: {}", config::defaults::EQUIVALENCE_MARKER)))
}

fn translate() -> Command {
    Command::new("translate")
        .about("Translates the sequence indices of an index map to original axiom identifiers, or the other way round.")

        .arg(Arg::new("map")
            .long("map")
            .required(true)
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .num_args(1)
            .help("The index map."))

        .arg(Arg::new("reverse")
            .long("reverse")
            .short('r')
            .action(ArgAction::SetTrue)
            .help("Translate original identifiers to sequence indices."))

        .arg(Arg::new("values")
            .required(true)
            .value_name("VALUES")
            .num_args(1..)
            .value_parser(value_parser!(u64))
            .help("The values to translate."))
}

fn assumption_mode_parser(arg: &str) -> Result<AssumptionMode, std::io::Error> {
    arg.parse().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown assumption mode")
    })
}

fn weight_policy_parser(arg: &str) -> Result<WeightPolicy, std::io::Error> {
    arg.parse().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown weight policy")
    })
}

fn collapse_parser(arg: &str) -> Result<CollapseStrategy, std::io::Error> {
    arg.parse().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown collapse strategy")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify() {
        cli().debug_assert();
    }

    #[test]
    fn negative_query() {
        let matches = cli()
            .try_get_matches_from(["pinpoint", "encode", "a.cnf", "a.assump", "-3", "--mode", "coi"])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        assert_eq!(args.get_one::<isize>("query"), Some(&-3));
        assert_eq!(args.get_one::<AssumptionMode>("mode"), Some(&AssumptionMode::Coi));
    }

    #[test]
    fn unknown_mode() {
        let matches = cli().try_get_matches_from(["pinpoint", "encode", "a", "b", "1", "--mode", "all"]);
        assert!(matches.is_err());
    }
}
