//! Relatex CLI - relation-graph to LaTeX converter

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use relatex::{
    check_graph, convert_label_file, detect_format, format_diagnostics,
    graph_to_latex_with_diagnostics, write_latex_lines, G2LOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "g2l")]
#[command(author = "SciPenAI")]
#[command(version)]
#[command(about = "Relatex - relation-graph to LaTeX converter", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Wrap the output in $ ... $ math delimiters
    #[arg(short = 'd', long)]
    delimiters: bool,

    /// Trim surrounding whitespace from the output
    #[arg(short, long)]
    trim: bool,

    /// Detect and print the input format without converting
    #[arg(long)]
    detect: bool,

    /// Check mode - analyze the label graph for issues without converting
    #[arg(long)]
    check: bool,

    /// Use colored output (for check mode and warnings)
    #[arg(long, default_value_t = true)]
    color: bool,

    /// Strict mode: exit with error if any conversion warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Check a label graph for recognizer noise and silent repairs
    Check {
        /// Input file to check
        input: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Convert a label file (one label graph per line)
    Batch {
        /// Input label file or directory of .lg files
        input: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// Wrap each line in $ ... $ math delimiters
        #[arg(short = 'd', long)]
        delimiters: bool,

        /// File extension for output files
        #[arg(short, long)]
        extension: Option<String>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // If detect mode, just print format and exit
    if cli.detect {
        println!("{}", detect_format(&input));
        return Ok(());
    }

    // If check mode, analyze and report issues
    if cli.check {
        let result = check_graph(&input);
        println!("{}", format_diagnostics(&result, cli.color));
        if result.has_errors() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let options = G2LOptions {
        math_delimiters: cli.delimiters,
        trim_output: cli.trim,
    };

    let result = graph_to_latex_with_diagnostics(&input, &options);

    // Print warnings to stderr (unless quiet mode)
    if !cli.quiet && result.has_warnings() {
        print_warnings_to_stderr(&result.format_warnings(), cli.color);
    }

    // Check strict mode
    if cli.strict && result.has_warnings() {
        eprintln!(
            "Error: {} conversion warning(s) in strict mode",
            result.warnings.len()
        );
        std::process::exit(1);
    }

    // Output
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result.output)?;
            if result.has_warnings() {
                eprintln!(
                    "⚠ Output written to: {} ({} warning(s))",
                    path,
                    result.warnings.len()
                );
            } else {
                eprintln!("✓ Output written to: {}", path);
            }
        }
        None => {
            println!("{}", result.output);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::Check { input, no_color } => {
            let content = match input {
                Some(path) => fs::read_to_string(&path)?,
                None => {
                    let mut buffer = String::new();
                    io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };

            let result = check_graph(&content);
            println!("{}", format_diagnostics(&result, !no_color));

            if result.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Batch {
            input,
            output_dir,
            delimiters,
            extension,
        } => {
            // Create output directory if it doesn't exist
            fs::create_dir_all(&output_dir)?;

            let options = G2LOptions {
                math_delimiters: delimiters,
                trim_output: false,
            };
            let out_ext = extension.unwrap_or_else(|| "tex".to_string());

            // Find input files
            let input_path = Path::new(&input);
            let files: Vec<_> = if input_path.is_dir() {
                fs::read_dir(input_path)?
                    .filter_map(|e| e.ok())
                    .filter(|e| {
                        e.path().extension().and_then(|s| s.to_str()) == Some("lg")
                    })
                    .map(|e| e.path())
                    .collect()
            } else {
                vec![input_path.to_path_buf()]
            };

            let mut success_count = 0;
            let mut error_count = 0;

            for file_path in files {
                let filename = file_path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output");

                let output_path = Path::new(&output_dir).join(format!("{}.{}", filename, out_ext));

                match convert_label_file(&file_path, &options) {
                    Ok(lines) => match write_latex_lines(&output_path, &lines) {
                        Ok(()) => {
                            eprintln!("✓ {} ({} expression(s))", output_path.display(), lines.len());
                            success_count += 1;
                        }
                        Err(e) => {
                            eprintln!("✗ {} - {}", output_path.display(), e);
                            error_count += 1;
                        }
                    },
                    Err(e) => {
                        eprintln!("✗ {} - {}", file_path.display(), e);
                        error_count += 1;
                    }
                }
            }

            eprintln!(
                "\nBatch conversion complete: {} succeeded, {} failed",
                success_count, error_count
            );

            if error_count > 0 {
                std::process::exit(1);
            }
        }

        Commands::Info => {
            println!("Relatex - relation-graph to LaTeX converter");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Label graph → LaTeX conversion");
            println!("  ✓ Bar-fraction pattern detection (A NoRel - Below B)");
            println!("  ✓ Brace balancing for truncated/noisy input");
            println!("  ✓ Label graph diagnostics and checking");
            println!("  ✓ Batch label-file processing");
            println!("  ✓ Format auto-detection");
            println!();
            println!("Relation vocabulary:");
            println!("  Right, NoRel, Sup, Sub, Below, Inside, Above, COMMA");
            println!();
        }
    }

    Ok(())
}

/// Print conversion warnings to stderr with optional color coding.
#[cfg(feature = "cli")]
fn print_warnings_to_stderr(warnings: &[String], use_color: bool) {
    eprintln!();
    eprintln!(
        "{}Conversion Warnings ({}):{}",
        if use_color { "\x1b[33m" } else { "" },
        warnings.len(),
        if use_color { "\x1b[0m" } else { "" }
    );
    eprintln!();

    for warning in warnings {
        eprintln!("  {}", warning);
    }
    eprintln!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install relatex --features cli");
    eprintln!("  g2l [OPTIONS] [INPUT_FILE]");
}
