use man::prelude::*;
use std::path::Path;

fn main() {
    let page = Manual::new("debtscan")
        .about("extracts structured debtor records from pharmacy aged-debtors PDF reports")
        .flag(
            Flag::new()
                .short("-p")
                .long("--plain")
                .help("Force tab-separated plain text output."),
        )
        .flag(
            Flag::new()
                .short("-m")
                .long("--markdown")
                .help("Output as a markdown table (default when terminal detected)."),
        )
        .flag(
            Flag::new()
                .short("-j")
                .long("--json")
                .help("Output records as JSON."),
        )
        .flag(Flag::new().short("-a").long("--arrears").help(
            "Only print accounts that are 60 or more days overdue with a \
                     balance at or above the --min-balance floor. Medical-aid \
                     control rows are excluded.",
        ))
        .flag(
            Flag::new()
                .short("-s")
                .long("--summary")
                .help("Append per-bucket ageing totals and the outstanding total."),
        )
        .flag(
            Flag::new()
                .short("-c")
                .long("--config")
                .help("Load extraction settings (honorifics, control markers, look-ahead depth) from a TOML file."),
        )
        .flag(
            Flag::new()
                .short("-h")
                .long("--help")
                .help("Show help information."),
        )
        .arg(Arg::new("[FILE...]"))
        .custom(
            Section::new("description")
                .paragraph(
                    "debtscan reads a pharmacy's aged-debtors report PDF and prints \
                     one structured record per customer account: the six-digit \
                     account number, the cleaned account holder name, the seven \
                     ageing buckets (current through 180 days), the outstanding \
                     balance, and any email address or phone number printed near \
                     the account line.",
                )
                .paragraph(
                    "Medical-aid control rows are recognized by name and flagged \
                     rather than dropped; totals and the --arrears selection \
                     exclude them. Lines that merely resemble account rows \
                     (page headers, batch numbers) are skipped.",
                )
                .paragraph(
                    "When stdout is a terminal, output is pretty-printed as \
                     syntax-highlighted markdown via bat(1) with paging. When \
                     piped, tab-separated plain text is emitted.",
                )
                .paragraph(
                    "Multiple files can be specified and will be processed in \
                     order. Use \\fB-\\fR to read from stdin explicitly. Maximum \
                     input size is 256 MiB.",
                ),
        )
        .example(
            Example::new()
                .text("View a report in the terminal")
                .command("debtscan aged-debtors-july.pdf"),
        )
        .example(
            Example::new()
                .text("Export overdue accounts for follow-up")
                .command("debtscan --arrears --json aged-debtors-july.pdf > overdue.json"),
        )
        .example(
            Example::new()
                .text("Totals only, piped")
                .command("debtscan --plain --summary report.pdf | tail -n 4"),
        )
        .example(
            Example::new()
                .text("Read from stdin")
                .command("curl -sL https://example.com/report.pdf | debtscan"),
        )
        .custom(
            Section::new("environment")
                .paragraph(
                    "debtscan respects the \\fBNO_COLOR\\fR environment variable. \
                     When set, colored output is suppressed even on a terminal.",
                )
                .paragraph(
                    "The \\fBPAGER\\fR environment variable controls which pager \
                     is used when output is displayed on a terminal. \\fBRUST_LOG\\fR \
                     controls log verbosity (e.g. RUST_LOG=debug to see which \
                     candidate lines were skipped).",
                ),
        )
        .custom(Section::new("see also").paragraph("bat(1), pdftotext(1)"))
        .render();

    // Write to OUT_DIR (standard cargo output directory)
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("debtscan.1");
    std::fs::write(&out_path, &page).unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
