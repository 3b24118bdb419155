use std::path::PathBuf;

use clap::ArgMatches;

/// Paths and other options of `encode` relevant only to the CLI.
#[derive(Clone, Debug)]
pub struct EncodeIO {
    pub cnf: PathBuf,
    pub assumptions: PathBuf,
    pub query: isize,
    pub output: Option<PathBuf>,
}

/// Paths and other options of `extract` relevant only to the CLI.
#[derive(Clone, Debug)]
pub struct ExtractIO {
    pub gci: PathBuf,
    pub ri: PathBuf,
    pub module: PathBuf,
    pub name: String,
    pub out_dir: PathBuf,
}

/// Paths and other options of `translate` relevant only to the CLI.
#[derive(Clone, Debug)]
pub struct TranslateIO {
    pub map: PathBuf,
    pub reverse: bool,
    pub values: Vec<u64>,
}

// Required arguments are checked by clap before any of these are built.
fn required<T: Clone + Send + Sync + 'static>(args: &ArgMatches, id: &str) -> T {
    match args.get_one::<T>(id) {
        Some(value) => value.clone(),
        None => unreachable!("{id} is required"),
    }
}

impl EncodeIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        EncodeIO {
            cnf: required(args, "cnf"),
            assumptions: required(args, "assumptions"),
            query: required(args, "query"),
            output: args.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl ExtractIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        ExtractIO {
            gci: required(args, "gci"),
            ri: required(args, "ri"),
            module: required(args, "module"),
            name: required(args, "name"),
            out_dir: required(args, "out_dir"),
        }
    }
}

impl TranslateIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        TranslateIO {
            map: required(args, "map"),
            reverse: args.get_flag("reverse"),
            values: args
                .get_many::<u64>("values")
                .map(|values| values.copied().collect())
                .unwrap_or_default(),
        }
    }
}
