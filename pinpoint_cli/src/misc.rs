use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use pinpoint::types::err::{self};
use xz2::read::XzDecoder;

#[derive(Debug)]
pub enum CliError {
    /// Some file could not be read or written.
    Io(PathBuf, std::io::Error),

    /// A fault in the data passed between stages of the pipeline.
    Data(err::ErrorKind),
}

impl CliError {
    /// The exit code of the process, given the error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(..) => 1,
            Self::Data(_) => 2,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "{path:?}: {e}"),
            Self::Data(e) => write!(f, "{e}"),
        }
    }
}

impl From<err::ErrorKind> for CliError {
    fn from(e: err::ErrorKind) -> Self {
        match e {
            err::ErrorKind::Write(e) => CliError::Io(e.path, std::io::Error::from(e.kind)),
            _ => CliError::Data(e),
        }
    }
}

/// Opens a file for reading, decompressing if the extension of the file is `xz`.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, CliError> {
    let file = match File::open(path) {
        Err(e) => return Err(CliError::Io(path.to_path_buf(), e)),
        Ok(f) => f,
    };

    match &path.extension() {
        Some(extension) if *extension == "xz" => Ok(Box::new(BufReader::new(XzDecoder::new(file)))),
        _ => Ok(Box::new(BufReader::new(file))),
    }
}

/// Writes the display of some value to the path, or to standard output if no path is given.
pub fn write_output(path: Option<&Path>, contents: &impl std::fmt::Display) -> Result<(), CliError> {
    match path {
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write!(writer, "{contents}")
                .and_then(|_| writer.flush())
                .map_err(|e| CliError::Io(PathBuf::from("<stdout>"), e))
        }
        Some(path) => write_file(path, contents),
    }
}

fn write_file(path: &Path, contents: &impl std::fmt::Display) -> Result<(), CliError> {
    let file = File::create(path).map_err(|e| CliError::Io(path.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);
    write!(writer, "{contents}")
        .and_then(|_| writer.flush())
        .map_err(|e| CliError::Io(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        let write = err::ErrorKind::Write(err::WriteError {
            path: PathBuf::from("out/q.krss"),
            kind: std::io::ErrorKind::PermissionDenied,
        });
        assert_eq!(CliError::from(write).exit_code(), 1);

        let fault = err::ErrorKind::Extract(err::ExtractError::FaultyReference(
            pinpoint::structures::axiom::AxiomId(9),
        ));
        assert_eq!(CliError::from(fault).exit_code(), 2);
    }
}
