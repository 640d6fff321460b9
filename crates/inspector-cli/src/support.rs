use inspector_kernel::{Indent, InspectOptions};
use std::io::Read;
use tracing_subscriber::EnvFilter;

/// Exit status for unusable input: bad arguments, unreadable files, bad JSON.
pub const EXIT_USAGE: i32 = 2;

pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "inspector_kernel=trace" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("INSPECTOR_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn read_input_or_exit(input: &str) -> String {
    let result = if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(input)
    };
    result.unwrap_or_else(|e| {
        eprintln!("error: failed to read {input}: {e}");
        std::process::exit(EXIT_USAGE);
    })
}

pub fn parse_json_or_exit(text: &str, input: &str) -> serde_json::Value {
    serde_json::from_str(text).unwrap_or_else(|e| {
        eprintln!("error: invalid json in {input}: {e}");
        std::process::exit(EXIT_USAGE);
    })
}

pub fn parse_indent_or_exit(indent: i64) -> Indent {
    Indent::try_from(indent).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(EXIT_USAGE);
    })
}

pub fn load_options_or_exit(config: Option<&str>) -> InspectOptions {
    let Some(path) = config else {
        return InspectOptions::default();
    };
    InspectOptions::load(path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(EXIT_USAGE);
    })
}
