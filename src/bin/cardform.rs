//! CLI for the card entry form.
//!
//! # Usage
//!
//! ```bash
//! # Detect the brand of a (partial) number
//! cardform classify 3714
//!
//! # Format as the input field would
//! cardform format 371449635398433
//!
//! # Validate a number
//! cardform check 4539148803436467
//!
//! # Month picker for a year
//! cardform months --year 2026
//!
//! # Draw the card preview
//! cardform preview --number 4539148803436467 --name "JANE DOE" --month 04 --year 2031 --focus name
//! ```
//!
//! Set `RUST_LOG=card_form=debug` to trace form events.

use card_form::expiry::{self, YearMonth};
use card_form::focus::Field;
use card_form::format::{self, EditKind};
use card_form::{classify, validate, CardBrand, CardForm, FormConfig};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardform")]
#[command(author, version, about = "Credit card entry form toolkit")]
struct Cli {
    /// JSON form configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the card brand from a (partial) number
    Classify {
        /// Card number or prefix
        card_number: String,
    },

    /// Format a card number with its brand grouping
    Format {
        /// Card number to format
        card_number: String,

        /// Override the detected brand
        #[arg(short, long)]
        brand: Option<BrandArg>,
    },

    /// Validate a card number (Luhn)
    Check {
        /// Card number to check
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// List month picker options
    Months {
        /// Selected year (defaults to no selection)
        #[arg(short, long)]
        year: Option<u16>,
    },

    /// List year picker options
    Years,

    /// Draw the card preview
    Preview {
        #[arg(long, default_value = "")]
        number: String,

        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        month: String,

        #[arg(long, default_value = "")]
        year: String,

        #[arg(long, default_value = "")]
        cvv: String,

        /// Focused field
        #[arg(short, long)]
        focus: Option<FieldArg>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum BrandArg {
    Visa,
    Amex,
    Mastercard,
    Discover,
    Unionpay,
    Troy,
    DinersClub,
    Jcb,
}

impl From<BrandArg> for CardBrand {
    fn from(arg: BrandArg) -> Self {
        match arg {
            BrandArg::Visa => CardBrand::Visa,
            BrandArg::Amex => CardBrand::Amex,
            BrandArg::Mastercard => CardBrand::Mastercard,
            BrandArg::Discover => CardBrand::Discover,
            BrandArg::Unionpay => CardBrand::UnionPay,
            BrandArg::Troy => CardBrand::Troy,
            BrandArg::DinersClub => CardBrand::DinersClub,
            BrandArg::Jcb => CardBrand::Jcb,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldArg {
    Number,
    Name,
    Month,
    Year,
    Cvv,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Number => Field::Number,
            FieldArg::Name => Field::Name,
            FieldArg::Month => Field::Month,
            FieldArg::Year => Field::Year,
            FieldArg::Cvv => Field::Cvv,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match FormConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => FormConfig::default(),
    };

    match cli.command {
        Commands::Classify { card_number } => cmd_classify(&card_number),
        Commands::Format { card_number, brand } => cmd_format(&card_number, brand.map(Into::into)),
        Commands::Check {
            card_number,
            output,
        } => cmd_check(&card_number, output),
        Commands::Months { year } => cmd_months(year),
        Commands::Years => cmd_years(&config),
        Commands::Preview {
            number,
            name,
            month,
            year,
            cvv,
            focus,
            output,
        } => {
            let mut form = CardForm::new(config);
            form.input_number(&number, EditKind::Insert);
            form.input_name(&name);
            if !form.select_month(&month) {
                eprintln!("Error: invalid month '{}'", month);
                return ExitCode::FAILURE;
            }
            if !form.select_year(&year) {
                eprintln!("Error: invalid year '{}'", year);
                return ExitCode::FAILURE;
            }
            form.input_cvv(&cvv);
            if let Some(field) = focus {
                form.focus(field.into());
            }
            cmd_preview(&form, output)
        }
    }
}

fn cmd_classify(card_number: &str) -> ExitCode {
    let brand = classify(card_number);
    let grouping = format::grouping_for(brand);
    println!("Brand: {}", brand.name());
    println!("Placeholder: {}", grouping.placeholder());
    ExitCode::SUCCESS
}

fn cmd_format(card_number: &str, brand: Option<CardBrand>) -> ExitCode {
    let brand = brand.unwrap_or_else(|| classify(card_number));
    println!("{}", format::format_number(card_number, brand));
    ExitCode::SUCCESS
}

fn cmd_check(card_number: &str, output: OutputFormat) -> ExitCode {
    let result = validate(card_number);
    let value = match &result {
        Ok(number) => serde_json::json!({
            "valid": true,
            "brand": number.brand().slug(),
            "masked": number.masked(),
        }),
        Err(e) => serde_json::json!({
            "valid": false,
            "error": e.to_string(),
        }),
    };

    match (output, &result) {
        (OutputFormat::Json, _) => println!("{}", value),
        (OutputFormat::Text, Ok(number)) => {
            println!("Valid: yes");
            println!("Brand: {}", number.brand().name());
            println!("Masked: {}", number.masked());
        }
        (OutputFormat::Text, Err(e)) => {
            println!("Valid: no");
            println!("Error: {}", e);
        }
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_months(year: Option<u16>) -> ExitCode {
    let today = YearMonth::today();
    let min = year.map_or(1, |y| expiry::min_valid_month(y, today.year(), today.month()));
    for option in expiry::month_options(min) {
        if option.disabled {
            println!("{} (disabled)", option.value);
        } else {
            println!("{}", option.value);
        }
    }
    ExitCode::SUCCESS
}

fn cmd_years(config: &FormConfig) -> ExitCode {
    for year in expiry::year_options(YearMonth::today().year(), config.year_span) {
        println!("{}", year);
    }
    ExitCode::SUCCESS
}

fn cmd_preview(form: &CardForm, output: OutputFormat) -> ExitCode {
    let preview = form.preview();
    match output {
        OutputFormat::Text => print!("{}", preview.render_text()),
        OutputFormat::Json => match serde_json::to_string_pretty(&preview) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}
