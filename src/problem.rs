//! Two-line problem files
//!
//! A problem file holds the comma-separated minterms on its first line and
//! the comma-separated don't-cares on its second line:
//!
//! ```text
//! 0, 4, 8, 10
//! 11, 15
//! ```
//!
//! The second line may be empty, but it must be present. Further lines are
//! ignored.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::QmError;
use crate::input::{parse_list, InputError, TermList};
use crate::minimizer::{Minimization, Minimizer};

/// Errors that can occur when reading a problem file
#[derive(Debug)]
pub enum ProblemError {
    /// The file ends before the given (1-based) line
    MissingLine {
        /// The missing line number
        line: usize,
    },
    /// One of the lists is malformed
    Input(InputError),
    /// IO error while reading
    Io(io::Error),
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::MissingLine { line } => write!(
                f,
                "Problem file must contain two lines (minterms and don't-cares), line {} is missing",
                line
            ),
            ProblemError::Input(e) => write!(f, "{}", e),
            ProblemError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProblemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProblemError::MissingLine { .. } => None,
            ProblemError::Input(e) => Some(e),
            ProblemError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for ProblemError {
    fn from(err: io::Error) -> Self {
        ProblemError::Io(err)
    }
}

impl From<InputError> for ProblemError {
    fn from(err: InputError) -> Self {
        ProblemError::Input(err)
    }
}

impl From<ProblemError> for io::Error {
    fn from(err: ProblemError) -> Self {
        match err {
            ProblemError::Io(e) => e,
            ProblemError::Input(e) => e.into(),
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

/// A minimization problem: minterms plus don't-cares
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Problem {
    minterms: Vec<u64>,
    dont_cares: Vec<u64>,
}

impl Problem {
    /// Create a problem from value lists
    pub fn new(minterms: Vec<u64>, dont_cares: Vec<u64>) -> Self {
        Problem {
            minterms,
            dont_cares,
        }
    }

    /// Parse the two-line text form
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Problem;
    ///
    /// let problem = Problem::from_content("0,4,8,10\n11,15\n").unwrap();
    /// assert_eq!(problem.minterms(), &[0, 4, 8, 10]);
    /// assert_eq!(problem.dont_cares(), &[11, 15]);
    /// ```
    pub fn from_content(content: &str) -> Result<Self, ProblemError> {
        let mut lines = content.lines();
        let minterms = lines.next().ok_or(ProblemError::MissingLine { line: 1 })?;
        let dont_cares = lines.next().ok_or(ProblemError::MissingLine { line: 2 })?;

        Ok(Problem {
            minterms: parse_list(minterms, TermList::Minterms)?,
            dont_cares: parse_list(dont_cares, TermList::DontCares)?,
        })
    }

    /// Read a problem from any buffered reader
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, ProblemError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_content(&content)
    }

    /// Read a problem file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProblemError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// The minterms, as given
    pub fn minterms(&self) -> &[u64] {
        &self.minterms
    }

    /// The don't-cares, as given
    pub fn dont_cares(&self) -> &[u64] {
        &self.dont_cares
    }

    /// Minimize this problem
    pub fn solve(&self, minimizer: &Minimizer) -> Result<Minimization, QmError> {
        minimizer.minimize(&self.minterms, &self.dont_cares)
    }

    /// Write the two-line text form
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", join(&self.minterms))?;
        writeln!(writer, "{}", join(&self.dont_cares))?;
        Ok(())
    }

    /// Write the two-line text form to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write(&mut writer)?;
        writer.flush()
    }
}

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
