//! Donkey lexer CLI

use donkey_cli::commands::{html_file, lex_files, list_lexers};
use donkey_cli::options::{parse_options, CliOptions};
use donkey_lexer::LexerRegistry;

fn main() {
    donkey_cli::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    tracing::debug!(command = %command, "dispatching");

    match command.as_str() {
        "lex" => {
            let options = options_or_exit(&args[2..]);
            if options.paths.is_empty() {
                eprintln!("Usage: donkey lex <file>... [--fix=<name>] [--fix-all]");
                std::process::exit(1);
            }
            if !lex_files(&options) {
                std::process::exit(1);
            }
        }
        "html" => {
            let options = options_or_exit(&args[2..]);
            let [path] = options.paths.as_slice() else {
                eprintln!("Usage: donkey html <file> [--class=<name>] [--no-pre] [--fix=<name>]");
                std::process::exit(1);
            };
            if !html_file(path, &options) {
                std::process::exit(1);
            }
        }
        "lexers" => {
            list_lexers(&LexerRegistry::with_builtin());
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Donkey Lexer {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn options_or_exit(args: &[String]) -> CliOptions {
    match parse_options(args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Donkey Lexer (syntax highlighting for Donkey sources)");
    println!();
    println!("Usage: donkey <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>...        Tokenize files and display tokens");
    println!("  html <file>          Render a file as highlighted HTML");
    println!("  lexers               List registered lexers and corrections");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lexer options:");
    println!("  --fix=<name>         Apply one ordering correction (repeatable)");
    println!("  --fix-all            Apply every correction");
    println!();
    println!("HTML options:");
    println!("  --class=<name>       Class of the wrapper <div> (default: highlight)");
    println!("  --no-pre             Do not wrap output in <pre>");
    println!();
    println!("Examples:");
    println!("  donkey lex main.dk");
    println!("  donkey lex a.dk b.dk --fix-all");
    println!("  donkey html main.dk --class=code > main.html");
    println!("  RUST_LOG=donkey_lexer=debug donkey lex main.dk");
}
