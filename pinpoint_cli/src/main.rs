#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use pinpoint::{
    config::Config,
    procedures::{encode::encode, extract::extract},
    structures::{axiom::AxiomId, index_map::IndexMap},
    types::err::{self},
};

mod config_io;
mod misc;
mod parse;

use config_io::{EncodeIO, ExtractIO, TranslateIO};
use misc::{open_reader, write_output, CliError};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = match parse::cli::cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let result = match matches.subcommand() {
        Some(("encode", args)) => run_encode(parse::config::config_from_args(args), EncodeIO::from_args(args)),
        Some(("extract", args)) => run_extract(parse::config::config_from_args(args), ExtractIO::from_args(args)),
        Some(("translate", args)) => run_translate(TranslateIO::from_args(args)),
        _ => unreachable!("a subcommand is required"),
    };

    if let Err(e) = result {
        eprintln!("c {e}");
        std::process::exit(e.exit_code());
    }
}

fn run_encode(config: Config, io: EncodeIO) -> Result<(), CliError> {
    let cnf = open_reader(&io.cnf)?;
    let assumptions = open_reader(&io.assumptions)?;

    let encoding = encode(cnf, assumptions, io.query, &config)?;
    for warning in &encoding.warnings {
        eprintln!("c warning: {warning}");
    }

    write_output(io.output.as_deref(), &encoding.wcnf)
}

fn run_extract(config: Config, io: ExtractIO) -> Result<(), CliError> {
    let gci = open_reader(&io.gci)?;
    let ri = open_reader(&io.ri)?;
    let module = open_reader(&io.module)?;

    // Nothing is written unless the whole module was extracted.
    let extraction = extract(gci, ri, module, &config)?;
    extraction
        .write(&io.out_dir, &io.name)
        .map_err(err::ErrorKind::from)?;

    Ok(())
}

fn run_translate(io: TranslateIO) -> Result<(), CliError> {
    let map = IndexMap::read(open_reader(&io.map)?)?;

    let translations = io
        .values
        .iter()
        .map(|value| {
            translate_value(&map, *value, io.reverse)
                .map(|translated| format!("{value} {translated}\n"))
                .map_err(err::ErrorKind::from)
        })
        .collect::<Result<String, _>>()?;

    write_output(None, &translations)
}

/// Translates a sequence index to an original identifier, or the reverse.
fn translate_value(map: &IndexMap, value: u64, reverse: bool) -> Result<String, err::IndexError> {
    match reverse {
        true => map.sequence_of(AxiomId(value)).map(|index| index.to_string()),
        false => match usize::try_from(value) {
            Ok(sequence_index) => map.original_of(sequence_index).map(|id| id.to_string()),
            Err(_) => Err(err::IndexError::FaultyReference(value.to_string())),
        },
    }
}
