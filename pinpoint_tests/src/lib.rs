use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use pinpoint::{
    config::Config,
    procedures::{
        encode::{encode, Encoding},
        extract::{extract, Extraction},
    },
    structures::{literal::Literal, wcnf::Wcnf},
    types::err,
};
use xz2::read::XzDecoder;

pub fn data_subdir(dirs: Vec<&str>) -> PathBuf {
    let mut path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    for dir in dirs {
        path = path.join(dir);
    }
    path
}

pub fn open(path: &Path) -> Box<dyn BufRead> {
    let file = match File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };

    match &path.extension() {
        Some(extension) if *extension == "xz" => Box::new(BufReader::new(XzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    }
}

/// The path of some case, without extensions, so `data/encode/chain` for `data/encode/chain.cnf.xz`.
pub fn case_stem(path: &Path) -> PathBuf {
    let name = match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.trim_end_matches(".xz").trim_end_matches(".cnf"),
        None => panic!("Unnamed case {path:?}"),
    };
    path.with_file_name(name)
}

fn sibling(stem: &Path, extension: &str) -> PathBuf {
    let mut name = stem.as_os_str().to_owned();
    name.push(format!(".{extension}"));
    PathBuf::from(name)
}

pub fn read_query(stem: &Path) -> Literal {
    let path = sibling(stem, "query");
    match std::fs::read_to_string(&path).map(|q| q.trim().parse::<Literal>()) {
        Ok(Ok(query)) => query,
        _ => panic!("Bad query {path:?}"),
    }
}

/// An encoding of the case of the given clause source.
///
/// The assumptions and query of the case are read from the `.assump` and `.query` siblings of the clause source.
pub fn encode_case(cnf: &Path, config: &Config) -> Result<Encoding, err::ErrorKind> {
    let stem = case_stem(cnf);
    encode(
        open(cnf),
        open(&sibling(&stem, "assump")),
        read_query(&stem),
        config,
    )
}

/// The expected encoding of a case, if given as a `.wcnf` sibling of the clause source.
pub fn expected_encoding(cnf: &Path) -> Option<Wcnf> {
    let path = sibling(&case_stem(cnf), "wcnf");
    match path.exists() {
        true => match Wcnf::read(open(&path)) {
            Ok(wcnf) => Some(wcnf),
            Err(e) => panic!("Bad expectation {path:?}: {e}"),
        },
        false => None,
    }
}

/// All cases of clause sources in the directory, compressed or otherwise.
pub fn cases(dir: &Path) -> Vec<PathBuf> {
    let pattern = format!("{}/*.cnf*", dir.display());
    let mut cases = glob::glob(&pattern)
        .expect("bad glob")
        .flatten()
        .collect::<Vec<_>>();
    cases.sort();
    cases
}

/// An extraction of the `gci`, `ri`, and `module` files of a directory.
pub fn extract_dir(dir: &Path, config: &Config) -> Result<Extraction, err::ErrorKind> {
    extract(
        open(&dir.join("gci")),
        open(&dir.join("ri")),
        open(&dir.join("module")),
        config,
    )
}

/// Extracts the `gci`, `ri`, and `module` files of a directory, and writes the artifacts to `out_dir`.
pub fn extract_to(
    dir: &Path,
    out_dir: &Path,
    name: &str,
    config: &Config,
) -> Result<(PathBuf, PathBuf), err::ErrorKind> {
    let extraction = extract_dir(dir, config)?;
    Ok(extraction.write(out_dir, name)?)
}

/// A fresh, empty, directory for the artifacts of a test.
pub fn scratch_dir(test: &str) -> PathBuf {
    let path = std::env::temp_dir()
        .join("pinpoint_tests")
        .join(format!("{test}-{}", std::process::id()));
    if path.exists() {
        std::fs::remove_dir_all(&path).expect("stale scratch");
    }
    std::fs::create_dir_all(&path).expect("scratch");
    path
}

/// The sorted names of the entries of a directory.
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names = std::fs::read_dir(dir)
        .expect("missing directory")
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    names.sort();
    names
}

#[cfg(feature = "log")]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
    log::trace!("Logging initialised");
}

#[cfg(not(feature = "log"))]
pub fn init_logger() {}
