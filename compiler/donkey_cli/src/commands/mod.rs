//! Command handlers for the Donkey CLI.
//!
//! Each submodule implements one command. `read_file` lives here in the
//! module root since every file-based command needs it.

mod html;
mod lex;
mod lexers;

pub use html::html_file;
pub use lex::{format_token_dump, lex_files};
pub use lexers::{format_lexer_list, list_lexers};

/// Read a source file, describing failures the way the CLI reports them.
pub fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::read_file;

    #[test]
    fn missing_file_message() {
        let err = read_file("definitely/not/here.dk").err();
        assert_eq!(
            err,
            Some("cannot find file 'definitely/not/here.dk'".to_string())
        );
    }
}
