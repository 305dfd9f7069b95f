//! dsig command-line tool.
//!
//! Validates D-Bus type signatures and prints their parsed structure.

use dsig::commands::{check, parse_args, tree};

fn main() {
    dsig::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let invocation = match parse_args(&args[2..]) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(2);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match args[1].as_str() {
        "check" => {
            if invocation.signatures.is_empty() {
                eprintln!("Usage: dsig check [--strict] <signature>...");
                std::process::exit(2);
            }
            check(&invocation.signatures, invocation.options, &mut out)
        }
        "tree" => {
            let [signature] = invocation.signatures.as_slice() else {
                eprintln!("Usage: dsig tree [--strict] <signature>");
                std::process::exit(2);
            };
            tree(signature, invocation.options, &mut out)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    println!("dsig - D-Bus type signature tool");
    println!();
    println!("Usage: dsig <command> [options] <signature>...");
    println!();
    println!("Commands:");
    println!("  check <sig>...   Report whether each signature is valid");
    println!("  tree <sig>       Print the parsed type tree");
    println!("  help             Show this message");
    println!();
    println!("Options:");
    println!("  --strict         Enforce dict-entry and struct shape rules");
    println!();
    println!("Set RUST_LOG=dsig=debug to log why signatures are rejected.");
}
