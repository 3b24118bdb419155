/*!
Extraction of the axioms of a module.

For each identifier of a module, in order, the definitions of the identifier are [collapsed](crate::procedures::collapse) into a single axiom.
The axiom is serialized as one line of the ontology fragment, and given the next sequence index of the [index map](crate::structures::index_map).

Any fault aborts the whole extraction, as the fragment and map are used downstream as a unit.

```rust
# use pinpoint::config::Config;
# use pinpoint::procedures::extract::extract;
let gci = "5 subClassOf A B\n5 subClassOf B A\n8 subClassOf C A\n";
let ri = "3 subPropertyOf r s\n";
let module = "8 3 5 0\n";

let extraction = extract(gci.as_bytes(), ri.as_bytes(), module.as_bytes(), &Config::default()).unwrap();
assert_eq!(
    extraction.fragment(),
    "subClassOf C A\nsubPropertyOf r s\n(equivalent A B\n"
);
assert_eq!(
    extraction.index_map.to_string(),
    "1 8 subClassOf C A\n2 3 subPropertyOf r s\n3 5 (equivalent A B\n"
);
```
*/

use std::{
    fs::File,
    io::{BufRead, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    builder::{definitions::DefinitionIndex, module::read_module},
    config::Config,
    misc::log::targets::{self},
    procedures::collapse::Collapse,
    structures::{
        axiom::{Axiom, AxiomId},
        index_map::IndexMap,
    },
    types::err::{self},
};

/// The extension of an ontology fragment.
pub const FRAGMENT_EXTENSION: &str = "krss";

/// The extension of an index map.
pub const MAP_EXTENSION: &str = "map";

/// The extension added to an artifact while it is being written.
pub const PART_EXTENSION: &str = "part";

/// The axioms of a module, in module order, with their index map.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    pub axioms: Vec<Axiom>,
    pub index_map: IndexMap,
}

impl Extraction {
    /// The ontology fragment, one serialized axiom per line.
    pub fn fragment(&self) -> String {
        self.index_map
            .entries()
            .iter()
            .fold(String::new(), |fragment, entry| fragment + &entry.text + "\n")
    }

    /// Writes the fragment and index map to `<out_dir>/<name>.krss` and `<out_dir>/<name>.map`, returning the paths.
    ///
    /// Each artifact is written to a `.part` sibling, and the pair renamed once both are complete.
    /// On any failure, the parts and any artifact with the same name are removed, so either both artifacts are written or neither is.
    pub fn write(&self, out_dir: &Path, name: &str) -> Result<(PathBuf, PathBuf), err::WriteError> {
        let (fragment_path, map_path) = artifact_paths(out_dir, name);
        let fragment_part = part_path(&fragment_path);
        let map_part = part_path(&map_path);

        let written = write_part(&fragment_part, &self.fragment())
            .and_then(|_| write_part(&map_part, &self.index_map))
            .and_then(|_| rename(&fragment_part, &fragment_path))
            .and_then(|_| rename(&map_part, &map_path));

        if let Err(e) = written {
            log::error!(target: targets::EXTRACT, "{e}");
            for path in [&fragment_part, &map_part, &fragment_path, &map_path] {
                remove_stale(path);
            }
            return Err(e);
        }

        log::info!(target: targets::EXTRACT, "Wrote {fragment_path:?} and {map_path:?}");
        Ok((fragment_path, map_path))
    }
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{PART_EXTENSION}"));
    PathBuf::from(name)
}

fn write_part(path: &Path, contents: &impl std::fmt::Display) -> Result<(), err::WriteError> {
    let write_error = |e: std::io::Error| err::WriteError {
        path: path.to_path_buf(),
        kind: e.kind(),
    };

    let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
    write!(writer, "{contents}").map_err(write_error)?;
    writer.flush().map_err(write_error)
}

fn rename(from: &Path, to: &Path) -> Result<(), err::WriteError> {
    std::fs::rename(from, to).map_err(|e| err::WriteError {
        path: to.to_path_buf(),
        kind: e.kind(),
    })
}

/// Removes a file left by a failed write, if present.
fn remove_stale(path: &Path) {
    if !path.is_file() {
        return;
    }
    if let Err(e) = std::fs::remove_file(path) {
        log::warn!(target: targets::EXTRACT, "Unable to remove {path:?}: {e}");
    }
}

/// Reads definitions and a module, and extracts the axioms of the module.
pub fn extract(
    gci: impl BufRead,
    ri: impl BufRead,
    module: impl BufRead,
    config: &Config,
) -> Result<Extraction, err::ErrorKind> {
    let index = DefinitionIndex::read(gci, ri)?;
    let module = read_module(module)?;
    extract_module(&index, &module, config).map_err(err::ErrorKind::from)
}

/// Extracts the axioms of a module from definitions which have already been read.
pub fn extract_module(
    index: &DefinitionIndex,
    module: &[AxiomId],
    config: &Config,
) -> Result<Extraction, err::ExtractError> {
    let strategy = config.collapse.value;

    let extraction = module
        .iter()
        .try_fold(Extraction::default(), |mut extraction, id| {
            let axiom = match strategy.collapse(*id, index.get(*id)) {
                Ok(axiom) => axiom,
                Err(e) => {
                    log::error!(target: targets::EXTRACT, "{e}");
                    return Err(e);
                }
            };

            let text = axiom.serialize(&config.equivalence_marker);
            let sequence_index = extraction.index_map.push(*id, text);
            log::trace!(target: targets::EXTRACT, "Axiom {id} at {sequence_index}");

            extraction.axioms.push(axiom);
            Ok(extraction)
        })?;

    let equivalences = extraction
        .axioms
        .iter()
        .filter(|axiom| matches!(axiom, Axiom::Equivalence(_)))
        .count();
    log::info!(target: targets::EXTRACT, "Extracted {} axioms, of which {equivalences} are equivalences", extraction.axioms.len());

    Ok(extraction)
}

/// The paths of the fragment and index map of a module with the given name.
pub fn artifact_paths(out_dir: &Path, name: &str) -> (PathBuf, PathBuf) {
    (
        out_dir.join(format!("{name}.{FRAGMENT_EXTENSION}")),
        out_dir.join(format!("{name}.{MAP_EXTENSION}")),
    )
}
