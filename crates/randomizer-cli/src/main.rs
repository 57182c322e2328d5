mod logging;
mod settings;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use randomizer_core::{
    CapitalizationMode, DictionaryRef, GenerationConstraints, SymbolSetId, ValidationError,
};
use randomizer_generate::{GenerationEngine, GenerationError};
use settings::{RandomizerSettings, SettingsError, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("invalid constraints: {0}")]
    Validation(#[from] ValidationError),
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "randomizer", version, about = "Generate random values as text")]
struct Cli {
    /// TOML settings file with stored constraints.
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,
    /// Number of values to produce, one per line.
    #[arg(long, global = true, default_value_t = 1)]
    count: usize,
    /// Compose each output line as an array of values.
    #[arg(long, global = true, default_value_t = false)]
    array: bool,
    /// Number of values inside each array (overrides the settings file).
    #[arg(long, global = true, value_name = "N")]
    array_count: Option<u32>,
    /// Seed for reproducible output.
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Emit logs as JSON.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Random integer.
    Integer(IntegerArgs),
    /// Random decimal number.
    Decimal(DecimalArgs),
    /// Random string over symbol sets.
    String(StringArgs),
    /// Random dictionary word.
    Word(WordArgs),
    /// Random version 4 UUID.
    Uuid(UuidArgs),
    /// Print the JSON Schema of the settings file.
    Schema,
}

#[derive(Args, Debug)]
struct IntegerArgs {
    #[arg(long, allow_negative_numbers = true)]
    min: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    max: Option<i64>,
    /// Radix between 2 and 36.
    #[arg(long)]
    base: Option<u8>,
    /// Separator between groups of three digits (base 10 only).
    #[arg(long)]
    grouping: Option<char>,
}

#[derive(Args, Debug)]
struct DecimalArgs {
    #[arg(long, allow_negative_numbers = true)]
    min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,
    /// Number of fractional digits.
    #[arg(long)]
    decimals: Option<u32>,
    #[arg(long)]
    grouping: Option<char>,
    #[arg(long)]
    decimal_separator: Option<char>,
}

#[derive(Args, Debug)]
struct StringArgs {
    #[arg(long)]
    min_length: Option<u32>,
    #[arg(long)]
    max_length: Option<u32>,
    #[arg(long)]
    enclosure: Option<String>,
    /// Symbol sets by name, e.g. `lowercase,digits`.
    #[arg(long, value_delimiter = ',')]
    symbols: Vec<SymbolSetId>,
    /// retain, sentence, upper, lower, first-letter or random.
    #[arg(long)]
    capitalization: Option<CapitalizationMode>,
}

#[derive(Args, Debug)]
struct WordArgs {
    #[arg(long)]
    min_length: Option<u32>,
    #[arg(long)]
    max_length: Option<u32>,
    #[arg(long)]
    enclosure: Option<String>,
    #[arg(long)]
    capitalization: Option<CapitalizationMode>,
    /// Bundled dictionary to use, e.g. `english.dic`.
    #[arg(long = "bundled", value_name = "NAME")]
    bundled: Vec<String>,
    /// Word file on disk to use, one word per line.
    #[arg(long = "dictionary", value_name = "FILE")]
    dictionaries: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct UuidArgs {
    #[arg(long)]
    enclosure: Option<String>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_json).map_err(CliError::Logging)?;

    let settings = load_settings(cli.settings.as_deref())?;
    let constraints = match cli.command {
        Command::Schema => return print_schema(),
        Command::Integer(args) => integer_constraints(args, &settings),
        Command::Decimal(args) => decimal_constraints(args, &settings),
        Command::String(args) => string_constraints(args, &settings),
        Command::Word(args) => word_constraints(args, &settings),
        Command::Uuid(args) => uuid_constraints(args, &settings),
    };

    let mut array = settings.array.clone();
    if let Some(count) = cli.array_count {
        array.count = count;
    }

    let engine = GenerationEngine::with_global_cache();
    engine.validate(&constraints)?;

    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    tracing::info!(
        event = "generation_started",
        kind = constraints.kind(),
        count = cli.count,
        array = cli.array
    );

    let values = if cli.array {
        engine.generate_array_batch(&constraints, &array, cli.count, rng.as_mut())?
    } else {
        engine.generate_batch(&constraints, cli.count, rng.as_mut())?
    };

    let mut stdout = io::stdout().lock();
    for value in values {
        writeln!(stdout, "{value}")?;
    }

    tracing::info!(event = "generation_finished", status = "success");
    Ok(())
}

fn print_schema() -> Result<(), CliError> {
    let schema = schemars::schema_for!(RandomizerSettings);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn integer_constraints(args: IntegerArgs, settings: &RandomizerSettings) -> GenerationConstraints {
    let mut integer = settings.integer.clone();
    if let Some(min) = args.min {
        integer.min = min;
    }
    if let Some(max) = args.max {
        integer.max = max;
    }
    if let Some(base) = args.base {
        integer.base = base;
    }
    if args.grouping.is_some() {
        integer.grouping_separator = args.grouping;
    }
    GenerationConstraints::Integer(integer)
}

fn decimal_constraints(args: DecimalArgs, settings: &RandomizerSettings) -> GenerationConstraints {
    let mut decimal = settings.decimal.clone();
    if let Some(min) = args.min {
        decimal.min = min;
    }
    if let Some(max) = args.max {
        decimal.max = max;
    }
    if let Some(decimals) = args.decimals {
        decimal.decimal_count = decimals;
    }
    if args.grouping.is_some() {
        decimal.grouping_separator = args.grouping;
    }
    if args.decimal_separator.is_some() {
        decimal.decimal_separator = args.decimal_separator;
    }
    GenerationConstraints::Decimal(decimal)
}

fn string_constraints(args: StringArgs, settings: &RandomizerSettings) -> GenerationConstraints {
    let mut string = settings.string.clone();
    if let Some(min_length) = args.min_length {
        string.min_length = min_length;
    }
    if let Some(max_length) = args.max_length {
        string.max_length = max_length;
    }
    if let Some(enclosure) = args.enclosure {
        string.enclosure = enclosure;
    }
    if !args.symbols.is_empty() {
        string.active_symbol_sets = args.symbols.into_iter().collect();
    }
    if let Some(capitalization) = args.capitalization {
        string.capitalization = capitalization;
    }
    GenerationConstraints::String(string)
}

fn word_constraints(args: WordArgs, settings: &RandomizerSettings) -> GenerationConstraints {
    let mut word = settings.word.clone();
    if let Some(min_length) = args.min_length {
        word.min_length = min_length;
    }
    if let Some(max_length) = args.max_length {
        word.max_length = max_length;
    }
    if let Some(enclosure) = args.enclosure {
        word.enclosure = enclosure;
    }
    if let Some(capitalization) = args.capitalization {
        word.capitalization = capitalization;
    }
    if !args.bundled.is_empty() || !args.dictionaries.is_empty() {
        word.active_dictionaries = args
            .bundled
            .into_iter()
            .map(DictionaryRef::bundled)
            .chain(args.dictionaries.into_iter().map(DictionaryRef::user))
            .collect();
    }
    GenerationConstraints::Word(word)
}

fn uuid_constraints(args: UuidArgs, settings: &RandomizerSettings) -> GenerationConstraints {
    let mut uuid = settings.uuid.clone();
    if let Some(enclosure) = args.enclosure {
        uuid.enclosure = enclosure;
    }
    GenerationConstraints::Uuid(uuid)
}
