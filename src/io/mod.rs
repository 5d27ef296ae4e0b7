//! # Reading of transportation problems
//!
//! This module provides read functionality for problem files.
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use log::info;

use crate::data::number::Cost;
use crate::data::problem::Problem;
use crate::io::error::ImportError;

pub mod error;
pub mod plain;

pub use plain::parse;

/// Import a problem from a file.
///
/// Currently only supports the plain text format, with extension `txt` or `tp`.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, the contents can't be parsed
/// or don't describe a valid problem, an error type is returned.
pub fn import<C: Cost + FromStr>(file_path: &Path) -> Result<Problem<C>, ImportError> {
    // Choose the right parser
    let parse = match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("txt" | "tp") => plain::parse,
            Some(extension_string) => return Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => return Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => return Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    };

    // Open and read the file
    let mut program = String::new();
    File::open(file_path)
        .map_err(ImportError::IO)?
        .read_to_string(&mut program)
        .map_err(ImportError::IO)?;
    info!("read {} bytes from {:?}", program.len(), file_path);

    parse(&program)
}
