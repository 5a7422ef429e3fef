//! 3D Coordinate Transformation Tool
//!
//! Converts a Cartesian point to cylindrical and spherical coordinates,
//! converts both back, and plots the input with its two reconstructions.
//!
//! Usage:
//!   cargo run --bin coordview -- [-x 1.0] [-y 1.0] [-z 1.0] [--svg plot.svg]
//!   cargo run --bin coordview -- --interactive

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::{info, LevelFilter};

use coordview::constants::DEFAULT_COMPONENT;
use coordview::plot::canvas::{height_for_width, terminal_width};
use coordview::{compute, PointInput};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Formatted text with a character plot
    Text,
    /// The full report as JSON
    Json,
}

/// 3D Coordinate Transformation Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts a point between Cartesian, cylindrical and spherical coordinates",
    long_about = None
)]
struct Args {
    /// Cartesian x component
    #[arg(short = 'x', long, default_value_t = DEFAULT_COMPONENT, allow_negative_numbers = true)]
    x: f64,

    /// Cartesian y component
    #[arg(short = 'y', long, default_value_t = DEFAULT_COMPONENT, allow_negative_numbers = true)]
    y: f64,

    /// Cartesian z component
    #[arg(short = 'z', long, default_value_t = DEFAULT_COMPONENT, allow_negative_numbers = true)]
    z: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the scatter plot as SVG to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Width of the character plot (defaults to the terminal width, at most 1000)
    #[arg(short, long)]
    width: Option<usize>,

    /// Skip the character plot
    #[arg(long, action = ArgAction::SetTrue)]
    no_plot: bool,

    /// Read commands from stdin and recompute after each one
    #[arg(short, long, action = ArgAction::SetTrue)]
    interactive: bool,

    /// Display detailed debugging information
    #[arg(short, long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn print_intro() {
    println!("3D Coordinate Transformation");
    println!("============================");
    println!("Visualizes the conversion between Cartesian, cylindrical and spherical");
    println!("coordinate systems for a single point (x, y, z).");
}

fn print_explanation() {
    print_section_header("Explanation");
    println!("- The point is converted from Cartesian to cylindrical and spherical coordinates.");
    println!("- Results are shown both numerically and visually.");
    println!("- o / blue is the input, + / green is the cylindrical -> Cartesian reconstruction,");
    println!("  x / red is the spherical -> Cartesian reconstruction.");
}

/// Prints the numeric results, the plot, and writes the SVG if requested
fn show(args: &Args, input: &PointInput) -> Result<()> {
    let report = compute(input.point());

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_section_header("Cartesian Input");
        println!("{}", input.summary());

        print_section_header("Cylindrical Coordinates");
        println!("{}", report.cylindrical_line());

        print_section_header("Spherical Coordinates");
        println!("{}", report.spherical_line());

        println!("\nAngles are shown in degrees for easier interpretation.");

        if !args.no_plot {
            let width = args.width.unwrap_or_else(terminal_width);
            let plot = report
                .scene()
                .with_ansi_color(io::stdout().is_terminal())
                .render_text(width, height_for_width(width))?;
            print_section_header("3D Visualization");
            println!("{}", plot);
        }
    }

    if let Some(path) = &args.svg {
        report.scene().save_svg(path)?;
        info!("wrote {}", path.display());
        if args.format == OutputFormat::Text {
            println!("\nSaved plot to {}", path.display());
        }
    }

    Ok(())
}

/// Reads commands until EOF or `quit`, recomputing after each accepted one
fn run_session(args: &Args, input: &mut PointInput) -> Result<()> {
    show(args, input)?;
    println!("\nCommands: 'x 1.5', 'y=-2', 'z+', 'x-', '1 2 3', 'reset', 'quit'");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command.eq_ignore_ascii_case("quit") || command.eq_ignore_ascii_case("exit") {
            break;
        }

        match input.apply(command) {
            Ok(()) => show(args, input)?,
            Err(e) => eprintln!("{}", e),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let mut input = PointInput::new(args.x, args.y, args.z);

    if args.format == OutputFormat::Text {
        print_intro();
    }

    if args.interactive {
        run_session(&args, &mut input)?;
    } else {
        show(&args, &input)?;
    }

    if args.format == OutputFormat::Text {
        print_explanation();
    }

    Ok(())
}
