use clap::ArgMatches;

use pinpoint::config::{AssumptionMode, CollapseStrategy, Config, WeightPolicy};

/// A [Config] from the arguments of a subcommand, with defaults for anything absent.
pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(mode)) = args.try_get_one::<AssumptionMode>("mode") {
        the_config.assumption_mode.value = *mode
    };

    if let Ok(Some(policy)) = args.try_get_one::<WeightPolicy>("weight") {
        the_config.weight_policy.value = *policy
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("strict") {
        the_config.strict.value = true
    };

    if let Ok(Some(strategy)) = args.try_get_one::<CollapseStrategy>("collapse") {
        the_config.collapse.value = *strategy
    };

    if let Ok(Some(marker)) = args.try_get_one::<String>("marker") {
        the_config.equivalence_marker = marker.clone()
    };

    the_config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::cli::cli;

    #[test]
    fn encode_options() {
        let matches = cli()
            .try_get_matches_from([
                "pinpoint", "encode", "a.cnf", "a.assump", "1", "--weight", "top-var", "--strict",
            ])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        let config = config_from_args(args);

        assert_eq!(config.weight_policy.value, WeightPolicy::TopVar);
        assert!(config.strict.value);
        assert_eq!(config.assumption_mode.value, AssumptionMode::NoOpt);
    }

    #[test]
    fn extract_options() {
        let matches = cli()
            .try_get_matches_from([
                "pinpoint", "extract", "g", "r", "m", "q1", "out", "--collapse", "converse", "--marker",
                "(equiv",
            ])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        let config = config_from_args(args);

        assert_eq!(config.collapse.value, CollapseStrategy::Converse);
        assert_eq!(config.equivalence_marker, "(equiv");
    }
}
