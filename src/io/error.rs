//! # Error reporting for reading of problem files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;

use crate::data::error::ProblemError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into numbers of the right shape.
    ///
    /// # Note
    ///
    /// Numbers that were read fine but don't form a valid problem, like a negative supply, are not
    /// represented with this error.
    Parse(ParseError),
    /// The numbers read don't describe a valid transportation problem.
    Problem(ProblemError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::FileExtension(message) => message.fmt(f),
            ImportError::IO(error) => error.fmt(f),
            ImportError::Parse(error) => error.fmt(f),
            ImportError::Problem(error) => error.fmt(f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::FileExtension(_) => None,
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
            ImportError::Problem(error) => Some(error),
        }
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

impl From<ProblemError> for ImportError {
    fn from(error: ProblemError) -> Self {
        ImportError::Problem(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may recursively hold more ParseErrors to provide more detail. At the end of this chain, there
/// may be a file location containing a line number and token, at which the error was caused.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    source: Option<ParseErrorSource>,
}

/// A `ParseErrorSource` can be used with a `ParseError` to describe its cause.
///
/// It can be either a file line number and the offending token, or another `ParseError` with its
/// own description and optionally, a cause.
#[derive(Debug, Eq, PartialEq)]
enum ParseErrorSource {
    FileLocation(u64, String),
    Nested(Box<ParseError>),
}

/// A `FileLocation` references a token in the file by the line number of the file as originally
/// read from the disk.
pub(super) type FileLocation<'a> = (u64, &'a str);

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), source: None, }
    }

    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A line number and the token that caused the error.
    pub fn with_file_location(
        description: impl Into<String>,
        file_location: FileLocation,
    ) -> ParseError {
        let (line_number, token) = file_location;
        ParseError {
            description: description.into(),
            source: Some(ParseErrorSource::FileLocation(line_number, token.to_string())),
        }
    }

    /// Wrap a new `ParseError` around an existing one.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `parse_error`: What caused this `ParseError`.
    pub fn with_cause(description: impl Into<String>, parse_error: ParseError) -> ParseError {
        ParseError {
            description: description.into(),
            source: Some(ParseErrorSource::Nested(Box::new(parse_error))),
        }
    }

    /// Line number of the token that caused this error, if known.
    pub fn line_number(&self) -> Option<u64> {
        match &self.source {
            Some(ParseErrorSource::FileLocation(line_number, _)) => Some(*line_number),
            Some(ParseErrorSource::Nested(error)) => error.line_number(),
            None => None,
        }
    }

    /// Get all errors in the chain, leading up to this one.
    fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        if let Some(ref source) = self.source {
            match source {
                ParseErrorSource::FileLocation(line_number, token) => {
                    descriptions.push(format!("\tCaused at line\t{}:\t{}", line_number, token));
                }
                ParseErrorSource::Nested(error) => {
                    descriptions.append(&mut error.chain_description());
                }
            }
        }

        descriptions
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.chain_description().join("\n"))
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        if let Some(ParseErrorSource::Nested(ref error)) = self.source {
            Some(&**error)
        } else {
            None
        }
    }
}
