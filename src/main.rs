//! Numeronym CLI
//! The main interface is through WASM bindings; this binary feeds
//! arguments or stdin lines through the same generator.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use numeronym_generator::{on_input, Case, Generator, GeneratorConfig, Scope, Unit, WriteHost};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "numeronym")]
#[command(about = "Turn text into numeronyms (internationalization -> i18n)")]
struct Args {
    /// Text to abbreviate; reads stdin line by line when omitted
    text: Vec<String>,

    /// Shortest word length that gets abbreviated
    #[arg(long, default_value = "3")]
    min_len: usize,

    /// Count length in chars or graphemes
    #[arg(long, default_value = "chars")]
    unit: Unit,

    /// Abbreviate each word or the whole phrase
    #[arg(long, default_value = "words")]
    scope: Scope,

    /// Lowercase input before abbreviating
    #[arg(long)]
    lowercase: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("numeronym_generator=debug,numeronym=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Exit status for rejected options
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);
    ExitCode::from(run(args, io::stdin().lock(), io::stdout().lock()))
}

/// Run the CLI against the given input and output, returning the exit status
fn run<R: BufRead, W: Write>(args: Args, input: R, output: W) -> u8 {
    let config = GeneratorConfig::new()
        .with_min_len(args.min_len)
        .with_unit(args.unit)
        .with_scope(args.scope)
        .with_case(if args.lowercase { Case::Lower } else { Case::Preserve });

    let generator = match Generator::with_config(config) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("error: invalid options: {e}");
            return EXIT_USAGE;
        }
    };
    tracing::debug!(
        min_len = config.min_len,
        unit = %config.unit,
        scope = %config.scope,
        case = %config.case,
        "generator ready"
    );

    let mut host = WriteHost::new(output);
    let result = if args.text.is_empty() {
        run_lines(&generator, input, &mut host)
    } else {
        on_input(&generator, &mut host, &args.text.join(" "))
    };

    match result {
        Ok(()) => 0,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => 0,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

/// One input event per line
fn run_lines<R: BufRead, W: Write>(
    generator: &Generator,
    input: R,
    host: &mut WriteHost<W>,
) -> io::Result<()> {
    let mut events = 0usize;
    for line in input.lines() {
        on_input(generator, host, &line?)?;
        events += 1;
    }
    tracing::debug!(events, "input closed");
    Ok(())
}
