use std::fmt;
use std::path::PathBuf;

/// Everything that can go wrong while turning a scene file into a `Scene`.
/// All variants are fatal: no rendering work is scheduled after any of
/// them.
#[derive(Debug)]
pub enum Error {
    /// The scene file could not be opened or read.
    MissingSceneFile(PathBuf, std::io::Error),
    /// A directive had a non-numeric field, the wrong arity, a stray
    /// token, or an unmatched `popTransform`.
    MalformedDirective { line: usize, message: String },
    /// A bare word appeared where a directive keyword was expected.
    UnknownDirective { line: usize, word: String },
    /// A light directive named a kind that is neither `directional` nor
    /// `point`.
    UnknownLightKind(String),
    /// A `scale` directive with a zero component would make the transform
    /// singular and uninvertible.
    DegenerateTransform { line: usize },
    /// The file ended without one of the mandatory directives.
    IncompleteScene(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingSceneFile(path, cause) => {
                write!(f, "cannot read scene file {}: {}", path.display(), cause)
            }
            Error::MalformedDirective { line, message } => {
                write!(f, "malformed directive at line {}: {}", line, message)
            }
            Error::UnknownDirective { line, word } => {
                write!(f, "unknown directive `{}` at line {}", word, line)
            }
            Error::UnknownLightKind(kind) => write!(f, "unknown light kind `{}`", kind),
            Error::DegenerateTransform { line } => {
                write!(f, "degenerate (non-invertible) transform at line {}", line)
            }
            Error::IncompleteScene(what) => {
                write!(f, "scene is missing a `{}` directive", what)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingSceneFile(_, cause) => Some(cause),
            _ => None,
        }
    }
}
