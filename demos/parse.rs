//! An example to parse a URI reference from the CLI argument.

use uri_value::Uri;

const USAGE: &str = "\
USAGE:
    parse [FLAGS] [--] URI

FLAGS:
    -h, --help          Prints this help
    -n, --normalize     Normalizes the parsed URI

ARGS:
    <URI>               URI reference
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
    /// URI reference.
    uri: String,
    /// Whether to normalize the URI.
    normalize: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut uri = None;
        let mut normalize = false;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--normalize" | "-n" => normalize = true,
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => {
                    if uri.replace(arg).is_some() {
                        die("URI can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if uri.replace(arg).is_some() {
                die("URI can be specified at most once");
            }
        }

        let uri = uri.unwrap_or_else(|| die("URI should be specified"));
        Self { uri, normalize }
    }
}

fn main() {
    let opt = CliOpt::parse();

    let mut uri = match Uri::from_string(&opt.uri) {
        Ok(v) => v,
        Err(e) => die(format_args!("Failed to parse {:?}: {}", opt.uri, e)),
    };
    if opt.normalize && uri.normalize() {
        println!("Normalized.");
    }
    println!("URI:       {}", uri);
    println!("scheme:    {:?}", uri.scheme());
    println!("userinfo:  {:?}", uri.userinfo());
    println!("host:      {:?}", uri.host());
    println!("port:      {:?}", uri.port());
    println!("path:      {:?}", uri.path_string());
    println!("segments:  {:?}", uri.path_segments());
    match uri.query() {
        Some(query) => {
            println!("query:");
            for (key, value) in query.iter() {
                println!("    {:?} = {:?}", key, value);
            }
        }
        None => println!("query:     None"),
    }
    println!("fragment:  {:?}", uri.fragment());
}
