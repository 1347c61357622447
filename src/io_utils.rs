//! Error plumbing for the command-line tools.
use std::fmt;
use std::io;
use std::path::Path;

use crate::CodecError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    /// Process exit status for this failure.
    pub code: i32,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "The file must be UTF-8 text with one word per line.",
        _ => "Check the path and try again.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Wrap a codec error raised while touching `path`.
///
/// I/O failures get the path and a suggestion; every other kind falls back
/// to [`codec_cli_error`].
pub fn path_cli_error(operation: &str, path: &Path, err: CodecError) -> CliError {
    let code = err.exit_code();
    match err {
        CodecError::Io(io) => CliError {
            msg: format_io_error(operation, path, &io),
            code,
            source: Some(Box::new(io)),
        },
        other => codec_cli_error(operation, other),
    }
}

pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        code: 1,
        source: None,
    }
}

/// Convert a codec error into a CLI error carrying its exit status and a hint.
pub fn codec_cli_error(context: &str, err: CodecError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        code: err.exit_code(),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a codec error variant.
pub fn cli_hint(err: &CodecError) -> String {
    use crate::CodecError::*;
    match err {
        MissingParameter(name) => format!("{err} Supply a non-empty {name}."),
        InvalidLength(_) => format!("{err} Check the input size."),
        InvalidAlignment => format!("{err} Pad or trim the entropy to whole words."),
        InvalidBit { .. } => format!("{err} Entropy may only contain 0 and 1."),
        WordNotFound(w) if w.is_empty() => {
            format!("{err} The mnemonic has extra spaces; try --normalize-whitespace.")
        }
        WordNotFound(_) => format!("{err} Check the spelling and the wordlist."),
        IndexOutOfRange { .. } => format!("{err} The wordlist is too short or too long."),
        ByteAlignment { .. } => format!("{err} Use a word count divisible by 8."),
        InvalidWordlist(_) => format!("{err}. Provide exactly 2048 unique words."),
        InvalidHex(_) => format!("{err}. Expected an even number of hex digits."),
        Config(_) => format!("{err}. Check the config file."),
        Io(io) => format!("{io}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_error_keeps_exit_code() {
        let e = codec_cli_error("decode failed", CodecError::WordNotFound("x".into()));
        assert_eq!(e.code, 6);
        assert!(e.msg.starts_with("decode failed: Word 'x' not found"));
    }

    #[test]
    fn io_error_names_path() {
        let err = CodecError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let e = path_cli_error("reading wordlist", Path::new("/tmp/none.txt"), err);
        assert_eq!(e.code, 10);
        assert!(e.msg.contains("/tmp/none.txt"));
        assert!(e.msg.contains("Check that the file exists"));
    }
}
