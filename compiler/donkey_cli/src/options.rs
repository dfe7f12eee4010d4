//! Command-line option parsing shared by `lex` and `html`.

use donkey_lexer::{Corrections, HtmlOptions};

/// Options following a command name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Ordering corrections applied to the Donkey lexer.
    pub corrections: Corrections,
    /// HTML rendering options.
    pub html: HtmlOptions,
    /// Positional file paths, in order.
    pub paths: Vec<String>,
}

/// Parse the arguments after the command name.
///
/// Flags may appear before or after paths. Returns a message suitable for
/// stderr on an unrecognized flag or correction name.
pub fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();

    for arg in args {
        if let Some(name) = arg.strip_prefix("--fix=") {
            let Some(fix) = Corrections::from_kebab_name(name) else {
                return Err(format!(
                    "unknown correction '{name}' (valid: {})",
                    Corrections::NAMES.join(", ")
                ));
            };
            options.corrections |= fix;
        } else if arg == "--fix-all" {
            options.corrections = Corrections::all();
        } else if let Some(class) = arg.strip_prefix("--class=") {
            options.html.css_class = class.to_string();
        } else if arg == "--no-pre" {
            options.html.wrap_pre = false;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            options.paths.push(arg.clone());
        }
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn defaults() {
        let options = parse_options(&[]);
        assert_eq!(options, Ok(CliOptions::default()));
    }

    #[test]
    fn paths_and_flags_mix() {
        let options = parse_options(&args(&[
            "a.dk",
            "--fix=split-until-while",
            "b.dk",
            "--no-pre",
            "--class=code",
        ]));
        assert_eq!(
            options,
            Ok(CliOptions {
                corrections: Corrections::SPLIT_UNTIL_WHILE,
                html: HtmlOptions {
                    css_class: "code".to_string(),
                    wrap_pre: false,
                },
                paths: args(&["a.dk", "b.dk"]),
            })
        );
    }

    #[test]
    fn fixes_accumulate() {
        let options = parse_options(&args(&[
            "--fix=constants-before-identifiers",
            "--fix=signed-numbers-before-punctuation",
        ]));
        assert_eq!(
            options.map(|o| o.corrections),
            Ok(Corrections::CONSTANTS_BEFORE_IDENTIFIERS
                | Corrections::SIGNED_NUMBERS_BEFORE_PUNCTUATION)
        );
    }

    #[test]
    fn fix_all() {
        let options = parse_options(&args(&["--fix-all"]));
        assert_eq!(options.map(|o| o.corrections), Ok(Corrections::all()));
    }

    #[test]
    fn unknown_correction() {
        let err = parse_options(&args(&["--fix=while-loops"])).err();
        assert!(err.is_some_and(|e| e.contains("unknown correction 'while-loops'")));
    }

    #[test]
    fn unknown_flag() {
        let err = parse_options(&args(&["--color"]));
        assert_eq!(err, Err("unknown option '--color'".to_string()));
    }
}
