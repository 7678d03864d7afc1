use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfnup", about = "Duplicate PDF pages or recompose them N-up", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Duplicate every page N times in place
    Duplicate {
        /// Input PDF file
        input: PathBuf,

        /// Copies of each page in the output
        #[arg(short, long, default_value = "2")]
        copies: usize,

        /// Output PDF file (default: <input>_duplicated.pdf next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Recompose pages into an N-up layout on a new paper size
    Nup {
        /// Input PDF file
        input: PathBuf,

        /// Arrangement mode
        #[arg(long, default_value = "side-by-side", value_enum)]
        mode: ModeArg,

        /// Output paper size
        #[arg(long, default_value = "a4", value_enum)]
        paper: PaperArg,

        /// Output orientation
        #[arg(long, default_value = "portrait", value_enum)]
        orientation: OrientationArg,

        /// Turn all four grid cells 90 degrees (grid mode only)
        #[arg(long)]
        rotate: bool,

        /// Output PDF file (default: <input>_2up.pdf next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    SideBySide,
    Stacked,
    RotatedTopBottom,
    Grid,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    Letter,
    Legal,
    A3,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<ModeArg> for pdf_nup::ArrangementMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::SideBySide => Self::SideBySide,
            ModeArg::Stacked => Self::Stacked,
            ModeArg::RotatedTopBottom => Self::RotatedTopBottom,
            ModeArg::Grid => Self::Grid,
        }
    }
}

impl From<PaperArg> for pdf_nup::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::A3 => Self::A3,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for pdf_nup::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Duplicate {
            input,
            copies,
            output,
        } => {
            pdf_nup::validate_input_path(&input)?;

            let options = pdf_nup::DuplicateOptions { copies };
            let document = pdf_nup::load_pdf(&input).await?;

            let stats = pdf_nup::duplicate_statistics(&document, &options)?;
            println!("Duplication:");
            println!("  Source pages: {}", stats.source_pages);
            println!("  Copies per page: {}", stats.copies);
            println!("  Output pages: {}", stats.output_pages);

            let output =
                output.unwrap_or_else(|| pdf_nup::derive_output_path(&input, "duplicated"));

            let duplicated = pdf_nup::duplicate(&document, &options).await?;
            pdf_nup::save_pdf(duplicated, &output).await?;
            println!("Duplicated → {}", output.display());
        }

        Commands::Nup {
            input,
            mode,
            paper,
            orientation,
            rotate,
            output,
            stats_only,
        } => {
            pdf_nup::validate_input_path(&input)?;

            let options = pdf_nup::ComposeOptions {
                mode: mode.into(),
                paper_size: paper.into(),
                orientation: orientation.into(),
                rotate_grid: rotate,
            };
            let document = pdf_nup::load_pdf(&input).await?;

            let stats = pdf_nup::compose_statistics(&document, &options)?;
            println!("Composition:");
            println!("  Source pages: {}", stats.source_pages);
            println!("  Copies per sheet: {}", stats.slots_per_sheet);
            println!("  Output sheets: {}", stats.output_pages);

            if stats_only {
                return Ok(());
            }

            let output = output.unwrap_or_else(|| pdf_nup::derive_output_path(&input, "2up"));

            let composed = pdf_nup::compose(&document, &options).await?;
            pdf_nup::save_pdf(composed, &output).await?;
            println!("Composed → {}", output.display());
        }
    }

    Ok(())
}
