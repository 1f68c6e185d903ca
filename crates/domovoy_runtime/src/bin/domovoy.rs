//! Domovoy CLI entry point.

use domovoy_runtime::repl::listing;
use domovoy_runtime::{
    Assistant, AssistantConfig, ConsoleBus, ConsoleSpeaker, EnsureConnected, Outcome, Repl,
    init_tracing,
};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    config: Option<PathBuf>,
    lexicon: Option<PathBuf>,
    utterances: Vec<String>,
    list_patterns: bool,
    list_triggers: bool,
    log: Option<String>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--list-patterns" => config.list_patterns = true,
            "--list-triggers" => config.list_triggers = true,
            "-c" | "--config" => {
                let value = args.next().ok_or("--config requires a path")?;
                config.config = Some(PathBuf::from(value));
            }
            "--lexicon" => {
                let value = args.next().ok_or("--lexicon requires a path")?;
                config.lexicon = Some(PathBuf::from(value));
            }
            "--log" => {
                config.log = Some(args.next().ok_or("--log requires a level")?);
            }
            "--" => config.utterances.extend(args.by_ref()),
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            other => config.utterances.push(other.to_string()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("domovoy {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(cli.log.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => AssistantConfig::load(path)?,
        None => AssistantConfig::demo()?,
    };
    if let Some(path) = cli.lexicon {
        config = config.with_lexicon(path);
    }

    let bus = EnsureConnected::new(ConsoleBus::stdout(&config.broker));
    let mut assistant = Assistant::from_config(&config, bus, ConsoleSpeaker::stdout())?;

    if cli.list_triggers {
        for (trigger, action) in assistant.bindings() {
            println!("{trigger} -> {action}");
        }
    }
    if cli.list_patterns {
        print!("{}", listing(assistant.engine().patterns()));
    }
    if cli.list_triggers || cli.list_patterns {
        return Ok(());
    }

    if !cli.utterances.is_empty() {
        for utterance in &cli.utterances {
            if assistant.hear(utterance)? == Outcome::Ignored {
                eprintln!("\x1b[2mignored: {utterance}\x1b[0m");
            }
        }
        return Ok(());
    }

    let mut repl = Repl::new(assistant)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mDomovoy\x1b[0m - Spoken smart-home command resolver

\x1b[1mUSAGE:\x1b[0m
    domovoy [OPTIONS] [UTTERANCES...]

\x1b[1mARGUMENTS:\x1b[0m
    [UTTERANCES...]    Utterances to handle, then exit (no REPL)

\x1b[1mOPTIONS:\x1b[0m
    -c, --config PATH  JSON configuration (default: built-in demo catalogue)
    --lexicon PATH     Extra dictionary merged after the bundled one
    --list-patterns    Print compiled patterns and exit
    --list-triggers    Print trigger words and exit
    --log LEVEL        Log filter, e.g. debug or domovoy_intent=trace
                       (default: RUST_LOG)
    -h, --help         Print help information
    -V, --version      Print version information

\x1b[1mEXAMPLES:\x1b[0m
    domovoy                                  Start interactive REPL
    domovoy \"включи лампу\"                   Handle one utterance
    domovoy -c home.json --list-patterns     Inspect a catalogue
    domovoy --log debug \"сделай лампу синей\" Trace matching decisions

\x1b[1mREPL COMMANDS:\x1b[0m
    :patterns          List compiled patterns
    :triggers          List trigger words
    :help              Show help
    :quit              Exit (or Ctrl+D)"
    );
}
