use crate::support::{
    load_options_or_exit, parse_indent_or_exit, parse_json_or_exit, read_input_or_exit,
};
use inspector_kernel::{Inspector, MatchPolicy};
use inspector_value::Value;

pub struct Args {
    pub input: String,
    pub indent: i64,
    pub config: Option<String>,
    pub max_depth: Option<usize>,
    pub first_match: bool,
    pub escape_strings: bool,
    pub json_output: bool,
}

pub fn run(args: Args) {
    let indent = parse_indent_or_exit(args.indent);
    let mut options = load_options_or_exit(args.config.as_deref());
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }
    if args.first_match {
        options.match_policy = MatchPolicy::First;
    }
    options.escape_strings |= args.escape_strings;

    let text = read_input_or_exit(&args.input);
    let value = Value::from(parse_json_or_exit(&text, &args.input));
    tracing::debug!(input = %args.input, indent = indent.level(), policy = %options.match_policy, "inspecting");

    let inspector = Inspector::default().with_options(options);
    let classification = inspector.classify(&value, indent).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    if args.json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&classification).expect("json serialization")
        );
    } else {
        println!("{}", classification.text);
    }
}
