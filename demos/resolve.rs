//! An example to resolve URI references against a base from the CLI arguments.

use uri_value::resolve::FixedBaseResolver;
use uri_value::Uri;

const USAGE: &str = "\
USAGE:
    resolve [FLAGS] [--] BASE REFERENCE...

FLAGS:
    -h, --help          Prints this help
    -n, --normalize     Normalizes the results

ARGS:
    <BASE>              Base URI
    <REFERENCE>...      URI references to resolve
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

/// CLI options.
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// Base URI.
    base: String,
    /// References.
    references: Vec<String>,
    /// Whether to normalize the results.
    normalize: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut positional = Vec::new();
        let mut normalize = false;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--normalize" | "-n" => normalize = true,
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => positional.push(arg),
            }
        }
        positional.extend(args);

        let mut positional = positional.into_iter();
        let base = positional
            .next()
            .unwrap_or_else(|| die("Base URI should be specified"));
        let references: Vec<_> = positional.collect();
        if references.is_empty() {
            die("Reference should be specified");
        }
        Self {
            base,
            references,
            normalize,
        }
    }
}

fn main() {
    let opt = CliOpt::parse();

    let base = match Uri::from_string(&opt.base) {
        Ok(v) => v,
        Err(e) => die(format_args!("Failed to parse base {:?}: {}", opt.base, e)),
    };
    let resolver = FixedBaseResolver::new(&base);

    for reference in &opt.references {
        match resolver.resolve_str(reference) {
            Ok(mut resolved) => {
                if opt.normalize {
                    resolved.normalize();
                }
                println!("{}", resolved);
            }
            Err(e) => eprintln!("ERROR: Failed to parse {:?}: {}", reference, e),
        }
    }
}
