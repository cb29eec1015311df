//! `debtscan`: extracts structured debtor records from pharmacy
//! aged-debtors PDF reports.
//!
//! Reads one or more PDF reports, extracts a record per customer account,
//! and prints them. When stdout is a terminal the records are rendered as a
//! syntax-highlighted markdown table via `bat`; when piped, tab-separated
//! plain text is emitted. JSON output is available for downstream tooling.

use debtscan::error::{DebtscanError, Result};
use debtscan::{extract_records, pdf, render, report, ExtractConfig, Summary};

use bat::{Input, PrettyPrinter};
use is_terminal::IsTerminal;
use std::io::{self, Read, Write};
use std::process;

const USAGE: &str = "\
debtscan - extracts debtor records from pharmacy aged-debtors PDF reports

Usage: debtscan [OPTIONS] [FILE...]
       cat report.pdf | debtscan [OPTIONS]
       debtscan [OPTIONS] -

Options:
  -p, --plain          Force tab-separated plain text output
  -m, --markdown       Output as a markdown table (default when terminal detected)
  -j, --json           Output records as JSON
  -a, --arrears        Only accounts 60+ days overdue (controls excluded)
      --min-balance N  Balance floor for --arrears (default 100.00)
  -s, --summary        Append ageing totals
  -c, --config FILE    Load extraction settings from a TOML file
      --depth N        Contact look-ahead depth in lines (1-4, default 3)
  -h, --help           Show this help

When stdout is a terminal, output is pretty-printed as syntax-highlighted
markdown with decorations. When piped, plain text is emitted.

Multiple files can be specified and will be processed in order.
Use - to read from stdin explicitly.";

/// Maximum input file size (256 MiB). Prevents accidental OOM from
/// huge files.
const MAX_INPUT_SIZE: usize = 256 * 1024 * 1024;

const PDF_MAGIC: [u8; 5] = [0x25, 0x50, 0x44, 0x46, 0x2D]; // %PDF-

/// Output mode selection.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    /// Detect automatically: markdown to terminal, plain text when piped.
    Auto,
    /// Force plain text output.
    Plain,
    /// Force markdown output.
    Markdown,
    /// Serialize records as JSON.
    Json,
}

struct Options {
    mode: Mode,
    arrears: bool,
    min_balance: f64,
    summary: bool,
    config: ExtractConfig,
}

fn main() {
    pretty_env_logger::init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("debtscan: {message}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };
    let (options, files) = options;

    let mut exit_code = 0;
    for path in &files {
        let (buf, filename) = if path == "-" {
            let mut buf = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut buf) {
                eprintln!("debtscan: stdin: {e}");
                exit_code = 1;
                continue;
            }
            (buf, "stdin".to_string())
        } else {
            match std::fs::read(path) {
                Ok(b) => (b, path.clone()),
                Err(e) => {
                    eprintln!("debtscan: {path}: {e}");
                    exit_code = 1;
                    continue;
                }
            }
        };

        if buf.len() > MAX_INPUT_SIZE {
            #[allow(clippy::cast_precision_loss)] // only used in error message
            let size_mib = buf.len() as f64 / (1024.0 * 1024.0);
            eprintln!(
                "debtscan: {filename}: too large ({size_mib:.1} MiB, max {} MiB)",
                MAX_INPUT_SIZE / (1024 * 1024),
            );
            exit_code = 1;
            continue;
        }

        if let Err(e) = run(&buf, &filename, &options) {
            eprintln!("debtscan: {filename}: {e}");
            exit_code = 1;
        }
    }

    if exit_code != 0 {
        process::exit(exit_code);
    }
}

/// Parse command-line arguments into options and the file list.
/// Returns a message (not a hard exit) on bad input so `main` can show usage.
fn parse_args() -> std::result::Result<(Options, Vec<String>), String> {
    let mut mode = Mode::Auto;
    let mut arrears = false;
    let mut min_balance = report::DEFAULT_MIN_BALANCE;
    let mut summary = false;
    let mut config_path: Option<String> = None;
    let mut depth: Option<usize> = None;
    let mut files: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{USAGE}");
                process::exit(0);
            }
            "-p" | "--plain" => mode = Mode::Plain,
            "-m" | "--markdown" => mode = Mode::Markdown,
            "-j" | "--json" => mode = Mode::Json,
            "-a" | "--arrears" => arrears = true,
            "-s" | "--summary" => summary = true,
            "--min-balance" => {
                let value = args.next().ok_or("--min-balance requires a value")?;
                min_balance = value
                    .parse()
                    .map_err(|_| format!("invalid --min-balance: {value}"))?;
            }
            "-c" | "--config" => {
                config_path = Some(args.next().ok_or("--config requires a file path")?);
            }
            "--depth" => {
                let value = args.next().ok_or("--depth requires a value")?;
                depth = Some(value.parse().map_err(|_| format!("invalid --depth: {value}"))?);
            }
            "-" => files.push("-".to_string()),
            s if s.starts_with('-') => return Err(format!("unknown option: {s}")),
            s => files.push(s.to_string()),
        }
    }

    // No files specified → read from stdin
    if files.is_empty() {
        files.push("-".to_string());
    }

    let mut config = match config_path {
        Some(path) => ExtractConfig::load(&path).map_err(|e| format!("{path}: {e}"))?,
        None => ExtractConfig::default(),
    };
    if let Some(depth) = depth {
        config = config.with_lookahead(depth).map_err(|e| e.to_string())?;
    }

    Ok((
        Options {
            mode,
            arrears,
            min_balance,
            summary,
            config,
        },
        files,
    ))
}

fn run(data: &[u8], filename: &str, options: &Options) -> Result<()> {
    if data.len() < PDF_MAGIC.len() || data[..PDF_MAGIC.len()] != PDF_MAGIC {
        return Err(DebtscanError::Document(
            "not a PDF report (unrecognized format)".into(),
        ));
    }

    let lines = pdf::extract_lines(data)?;
    let mut records = extract_records(&lines, &options.config);
    log::info!(
        "{filename}: {} account records from {} lines",
        records.len(),
        lines.len()
    );

    if records.is_empty() {
        eprintln!("debtscan: {filename}: no account records found");
    }

    if options.arrears {
        let selected: Vec<_> = report::overdue_60_plus(&records, options.min_balance)
            .into_iter()
            .cloned()
            .collect();
        records = selected;
        log::info!(
            "{filename}: {} records at 60+ days arrears (balance >= {:.2})",
            records.len(),
            options.min_balance
        );
    }

    let summary = options.summary.then(|| Summary::from_records(&records));
    let is_tty = io::stdout().is_terminal();

    match options.mode {
        Mode::Json => {
            let json = serde_json::to_string_pretty(&records)
                .map_err(|e| DebtscanError::Render(e.to_string()))?;
            println!("{json}");
        }
        Mode::Plain => {
            let mut text = render::render_plain(&records);
            if let Some(summary) = &summary {
                render::render_summary_plain(summary, &mut text);
            }
            io::stdout().write_all(text.as_bytes())?;
        }
        Mode::Markdown | Mode::Auto => {
            if options.mode == Mode::Markdown || is_tty {
                let mut md = render::render_markdown(&records);
                if let Some(summary) = &summary {
                    render::render_summary_markdown(summary, &mut md);
                }
                if is_tty {
                    pretty_print(&md, filename)?;
                } else {
                    io::stdout().write_all(md.as_bytes())?;
                }
            } else {
                let mut text = render::render_plain(&records);
                if let Some(summary) = &summary {
                    render::render_summary_plain(summary, &mut text);
                }
                io::stdout().write_all(text.as_bytes())?;
            }
        }
    }

    Ok(())
}

fn pretty_print(content: &str, filename: &str) -> Result<()> {
    let input = Input::from_bytes(content.as_bytes())
        .name(filename)
        .title(filename);

    let theme = std::env::var("BAT_THEME").unwrap_or_else(|_| "ansi".to_string());

    PrettyPrinter::new()
        .input(input)
        .language("Markdown")
        .theme(&theme)
        .header(true)
        .line_numbers(false)
        .grid(true)
        .colored_output(true)
        .true_color(true)
        .paging_mode(bat::PagingMode::QuitIfOneScreen)
        .print()
        .map_err(|e| DebtscanError::Render(e.to_string()))?;

    Ok(())
}
