use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use docfixture::{
    fixtures_to_json, DocumentKind, EncodeOptions, FixtureGenerator, GeneratedFixture,
    GeneratorConfig, DEFAULT_FONT_PATH, DEFAULT_JPEG_QUALITY,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "docfixture",
    about = "Generate synthetic identity-document images for extraction tests",
    version,
    author
)]
struct Cli {
    #[command(flatten)]
    options: OutputOptions,

    /// Document to generate (all of them when omitted)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct OutputOptions {
    /// Directory the images are written into
    #[arg(short, long, global = true, default_value = ".")]
    output_dir: PathBuf,

    /// Preferred TrueType/OpenType font; a built-in bitmap font is used if it cannot be loaded
    #[arg(long, global = true, env = "DOCFIXTURE_FONT", default_value = DEFAULT_FONT_PATH)]
    font: PathBuf,

    /// JPEG quality (1-100)
    #[arg(short, long, global = true, default_value_t = DEFAULT_JPEG_QUALITY,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Write lossless PNG instead of JPEG
    #[arg(long, global = true)]
    png: bool,

    /// Print expected data as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Indian Aadhaar card (aadhaar.jpg)
    NationalId,

    /// Indian PAN card (pan.jpg)
    TaxId,

    /// Estonian passport data page (passport.jpg)
    Passport,

    /// Indian e-Visa sticker (visa.jpg)
    Visa,

    /// All four documents
    All,
}

impl Commands {
    fn kinds(&self) -> Vec<DocumentKind> {
        match self {
            Commands::NationalId => vec![DocumentKind::NationalId],
            Commands::TaxId => vec![DocumentKind::TaxId],
            Commands::Passport => vec![DocumentKind::Passport],
            Commands::Visa => vec![DocumentKind::Visa],
            Commands::All => DocumentKind::ALL.to_vec(),
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_text(fixture: &GeneratedFixture) {
    println!(
        "Created {} with {}",
        fixture.file_name(),
        fixture.kind.description()
    );
    println!();
    print!("{}", fixture.report);
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let options = cli.options;

    let kinds = cli.command.unwrap_or(Commands::All).kinds();

    let encode = if options.png {
        EncodeOptions::png()
    } else {
        EncodeOptions::jpeg(options.quality)
    };
    let config = GeneratorConfig::default()
        .with_output_dir(&options.output_dir)
        .with_font_path(&options.font)
        .with_encode(encode);

    let generator = FixtureGenerator::new(config);
    debug!(resolution = ?generator.font_resolution(), "font resolved");

    let mut fixtures = Vec::with_capacity(kinds.len());
    for (index, kind) in kinds.into_iter().enumerate() {
        let fixture = generator.generate(kind).with_context(|| {
            format!(
                "Failed to generate {} in {}",
                kind,
                options.output_dir.display()
            )
        })?;

        if !options.json {
            if index > 0 {
                println!();
            }
            print_text(&fixture);
        }
        fixtures.push(fixture);
    }

    if options.json {
        let json = fixtures_to_json(&fixtures).context("Failed to serialize expected data")?;
        println!("{json}");
    }

    if generator.font_resolution().is_fallback() {
        info!("preferred font unavailable; rendered with the built-in bitmap font");
    }

    Ok(())
}
