//! protcompare - translate two DNA sequences and compare the proteins.
//!
//! ## Usage
//!
//! ```bash
//! protcompare                                      # interactive
//! protcompare --first ATGGCC --second ATGGCA       # interactive, pre-filled
//! protcompare --first ATGGCC --second ATGGCA -o -  # report to stdout
//! protcompare --first ... --second ... -m positional --policy first -o report.txt
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use protcompare::compare::MismatchPolicy;
use protcompare::controller::run_app;
use protcompare::model::AppState;
use protcompare::pipeline::{run_comparison, ComparisonMode, ComparisonRequest};
use protcompare::report::{render_report, ReportOptions};
use protcompare::session_log;
use protcompare::translate::TranslatorKind;
use protcompare::ui::glyphs;

/// Comparison mode for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Amino acid counts as a stacked-bar chart
    Frequency,
    /// Position-by-position matches and differences
    Positional,
}

impl From<ModeArg> for ComparisonMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Frequency => ComparisonMode::Frequency,
            ModeArg::Positional => ComparisonMode::Positional,
        }
    }
}

/// Translation strategy for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TranslatorArg {
    /// Fixed standard codon table; unknown codons become "Unknown"
    Table,
    /// NCBI genetic code (see -g); invalid characters are an error
    Ncbi,
}

/// Mismatch counting for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// len(first) - matches
    First,
    /// max(len1, len2) - matches
    Longer,
    /// min(len1, len2) - matches
    Compared,
}

impl From<PolicyArg> for MismatchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::First => MismatchPolicy::FirstLength,
            PolicyArg::Longer => MismatchPolicy::LongerLength,
            PolicyArg::Compared => MismatchPolicy::ComparedOnly,
        }
    }
}

/// protcompare - translate two DNA sequences and compare the proteins
///
/// Without -o/--output, opens the interactive comparer.
/// With -o/--output, compares --first and --second and writes a text report
/// to a file (or stdout with "-").
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First DNA sequence
    #[arg(long = "first", short = 'a')]
    first: Option<String>,

    /// Second DNA sequence
    #[arg(long = "second", short = 'b')]
    second: Option<String>,

    /// Output file (enables CLI mode). Use "-" for stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Comparison to run
    #[arg(short = 'm', long = "mode", value_enum, default_value = "frequency")]
    mode: ModeArg,

    /// Translation strategy
    #[arg(short = 't', long = "translator", value_enum, default_value = "table")]
    translator: TranslatorArg,

    /// Genetic code for the ncbi translator (1-33, default: 1 = Standard)
    #[arg(short = 'g', long = "genetic-code", default_value = "1")]
    genetic_code: u8,

    /// How mismatches are counted when the proteins differ in length
    #[arg(long = "policy", value_enum, default_value = "longer")]
    policy: PolicyArg,

    /// Remove spaces and line breaks from the sequences before translating
    #[arg(long = "strip-whitespace")]
    strip_whitespace: bool,

    /// Line width of the text report
    #[arg(short = 'w', long = "wrap", default_value = "80")]
    wrap: usize,

    /// Use plain ASCII glyphs for bars and markers
    #[arg(long = "ascii")]
    ascii: bool,

    /// Write a session log to the system temp directory
    #[arg(long = "log")]
    log: bool,
}

/// Runs CLI mode: compare both sequences and write the report.
fn run_cli_mode(args: &Args, translator: TranslatorKind, output: &str) -> Result<()> {
    let request = ComparisonRequest {
        first: args.first.clone().unwrap_or_default(),
        second: args.second.clone().unwrap_or_default(),
        mode: args.mode.into(),
        policy: args.policy.into(),
        strip_whitespace: args.strip_whitespace,
    };

    let translator = translator.build()?;
    let report = run_comparison(&request, translator.as_ref())?;

    let options = ReportOptions {
        width: args.wrap,
        glyphs: glyphs::select(!args.ascii),
        ..ReportOptions::default()
    };
    let text = render_report(&report, &options);

    if output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
    } else {
        std::fs::write(output, &text)?;
        eprintln!("Wrote {} comparison report to {}", request.mode.label(), output);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Validate genetic code (1-33, with some gaps)
    if args.genetic_code < 1 || args.genetic_code > 33 {
        anyhow::bail!("Genetic code must be 1-33 (got {})", args.genetic_code);
    }

    if args.wrap < 20 {
        anyhow::bail!("Report width must be at least 20 (got {})", args.wrap);
    }

    let translator = match args.translator {
        TranslatorArg::Table => TranslatorKind::CodonTable,
        TranslatorArg::Ncbi => TranslatorKind::GeneticCode(args.genetic_code),
    };
    // Fail early on codes missing from the NCBI list (7, 8, 17-20)
    translator.build()?;

    if args.log {
        let path = session_log::init()?;
        eprintln!("Logging to {}", path.display());
        session_log::log(format_args!(
            "mode={} translator={} policy={}",
            ComparisonMode::from(args.mode).label(),
            translator.label(),
            MismatchPolicy::from(args.policy).label()
        ));
    }

    // CLI mode: output to file/stdout
    if let Some(output) = args.output.as_deref() {
        run_cli_mode(&args, translator, output)?;
    } else {
        let mut state = AppState::new(translator)
            .with_inputs(
                args.first.as_deref().unwrap_or(""),
                args.second.as_deref().unwrap_or(""),
            )
            .with_glyphs(glyphs::select(!args.ascii));
        state.comparison_mode = args.mode.into();
        state.policy = args.policy.into();
        state.strip_whitespace = args.strip_whitespace;
        run_app(state)?;
    }

    Ok(())
}
