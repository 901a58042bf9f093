use std::{
    io::Read,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use cpp_definer::{
    Definer, EditorContext, LogLevel, Position, Selection, Settings, TextDocument, config::generate_configuration_markdown,
};

const EXIT_FALLBACK: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "cpp-definer", version, about = "Turns C++ method declarations into out-of-line definitions")]
struct Args {
    /// Source file. The document is read from stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,

    /// 1-based cursor line.
    #[arg(long, required_unless_present = "print_schema", value_parser = clap::value_parser!(u32).range(1..))]
    line: Option<u32>,

    /// 1-based cursor column.
    #[arg(long, required_unless_present = "print_schema", value_parser = clap::value_parser!(u32).range(1..))]
    column: Option<u32>,

    /// 1-based line where the selection starts. The selection runs from
    /// the anchor to the cursor; without an anchor it is empty.
    #[arg(long, requires = "anchor_column", value_parser = clap::value_parser!(u32).range(1..))]
    anchor_line: Option<u32>,

    /// 1-based column where the selection starts.
    #[arg(long, requires = "anchor_line", value_parser = clap::value_parser!(u32).range(1..))]
    anchor_column: Option<u32>,

    /// Declaration text to convert. Defaults to the selected text, or the
    /// line under the cursor when nothing is selected.
    #[arg(long)]
    selection: Option<String>,

    /// Generate definitions only for a right-to-left selection and copy the
    /// selection unchanged otherwise.
    #[arg(long)]
    magic: bool,

    /// Settings file. Defaults to the nearest `cppdef.toml` above `--file`.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the settings documentation and exit.
    #[arg(long)]
    print_schema: bool,
}

fn load_settings(args: &Args) -> Settings {
    if let Some(path) = &args.config {
        return Settings::from_toml_file(path);
    }
    match &args.file {
        Some(file) => Settings::discover(file),
        None => std::env::current_dir().map(|dir| Settings::discover(&dir)).unwrap_or_default(),
    }
}

/// Installs the stderr layer (and the file layer, with `--log-file`) behind
/// a reloadable filter, so config loading is already logged and the
/// configured level can still be applied afterwards.
fn init_logging(args: &Args) -> reload::Handle<EnvFilter, Registry> {
    let directive = if args.verbose {
        LogLevel::Debug.as_directive()
    } else {
        LogLevel::default().as_directive()
    };
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(directive));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_ansi(false).with_target(false);

    let file_layer = args.log_file.as_deref().map(|log_path| {
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(Path::new(".")),
            log_path.file_name().unwrap_or(std::ffi::OsStr::new("cpp-definer.log")),
        );
        fmt::layer().with_writer(file_appender).with_ansi(false).with_target(false)
    });

    tracing_subscriber::registry().with(filter_layer).with(stderr_layer).with(file_layer).init();
    filter_handle
}

fn apply_log_level(
    args: &Args,
    handle: &reload::Handle<EnvFilter, Registry>,
    level: LogLevel,
) {
    if args.verbose || level == LogLevel::default() {
        return;
    }
    if let Err(err) = handle.reload(EnvFilter::new(level.as_directive())) {
        warn!(error = %err, "cannot apply configured log level");
    }
}

fn read_document(file: Option<&Path>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.print_schema {
        print!("{}", generate_configuration_markdown());
        return ExitCode::SUCCESS;
    }

    let log_filter = init_logging(&args);
    let settings = load_settings(&args);
    apply_log_level(&args, &log_filter, settings.logging.level);
    debug!(?settings, "settings loaded");

    let (Some(line), Some(column)) = (args.line, args.column) else {
        error!("--line and --column are required");
        return ExitCode::from(EXIT_USAGE);
    };

    let text = match read_document(args.file.as_deref()) {
        Ok(text) => text,
        Err(err) => {
            error!(error = %err, "cannot read document");
            return ExitCode::from(EXIT_USAGE);
        },
    };
    let document = TextDocument::new(text);
    let cursor = Position::new(line - 1, column - 1);
    let anchor = match (args.anchor_line, args.anchor_column) {
        (Some(anchor_line), Some(anchor_column)) => Position::new(anchor_line - 1, anchor_column - 1),
        _ => cursor,
    };
    let selection = Selection::new(anchor, cursor);

    let context = match &args.selection {
        Some(text) => document.text_before(selection.active).map(|before| EditorContext::new(text.as_str(), before)),
        None => document.editor_context(selection),
    };
    let Some(context) = context else {
        error!(line, column, lines = document.line_count(), "selection is outside the document");
        return ExitCode::from(EXIT_USAGE);
    };

    // Only a single right-to-left selection asks for a definition; anything
    // else is an ordinary copy.
    if args.magic && !selection.is_reversed() {
        debug!(?selection, "not a right-to-left selection, copying as is");
        print!("{}", context.selection_text);
        return ExitCode::from(EXIT_FALLBACK);
    }

    let definer = Definer::new(settings.definer);
    match definer.define_methods(&context) {
        Some(definitions) => {
            print!("{definitions}");
            ExitCode::SUCCESS
        },
        None => {
            info!("no definition generated, copying the selection as is");
            print!("{}", context.selection_text);
            ExitCode::from(EXIT_FALLBACK)
        },
    }
}
