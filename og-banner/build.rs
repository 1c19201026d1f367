use std::{env, fs, io, path::PathBuf};

use grass::{Options, OutputStyle};
use grass_compiler::Error as SassError;
use thiserror::Error;

/// SCSS sources and the file name each one is compiled to in `OUT_DIR`.
const STYLESHEETS: [(&str, &str); 2] = [
    ("scss/banner.scss", "banner.css"),
    ("scss/landing.scss", "landing.css"),
];

fn main() {
    if let Err(error) = compile_stylesheets() {
        panic!("{error}");
    }
}

#[derive(Debug, Error)]
enum BuildStylesheetError {
    #[error("OUT_DIR is not set: {0}")]
    OutDir(#[source] env::VarError),

    #[error("{path} does not compile: {error}")]
    Sass {
        path: &'static str,
        error: Box<SassError>,
    },

    #[error("could not write {path}: {error}")]
    Write { path: PathBuf, error: io::Error },
}

fn compile_stylesheets() -> Result<(), BuildStylesheetError> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").map_err(BuildStylesheetError::OutDir)?);
    let options = Options::default().style(OutputStyle::Compressed);

    for (source, output) in STYLESHEETS {
        // Each stylesheet is self-contained, so only its own source matters.
        println!("cargo:rerun-if-changed={source}");

        let css = grass::from_path(source, &options).map_err(|error| BuildStylesheetError::Sass {
            path: source,
            error,
        })?;

        let path = out_dir.join(output);
        fs::write(&path, css).map_err(|error| BuildStylesheetError::Write { path, error })?;
    }

    Ok(())
}
