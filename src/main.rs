//! classwise - utility-class compatibility checker

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use classwise::inline::{declaration_support, parse_declarations};
use classwise::{ReportOptions, validate_class_string};

#[derive(Parser)]
#[command(name = "classwise")]
#[command(version, about = "Check utility CSS classes against a constrained rendering engine", long_about = None)]
#[command(after_help = "EXAMPLES:
    classwise 'flex p-4 shadow-lg grid'       Check a class string
    classwise --style 'float: left; top: 0'   Check inline declarations
    echo 'mx-auto' | classwise -              Read the class string from stdin")]
struct Cli {
    /// Class string to check ('-' reads stdin)
    #[arg(value_name = "CLASSES", required_unless_present = "style")]
    classes: Option<String>,

    /// Check an inline style declaration string instead of classes
    #[arg(long, value_name = "DECLARATIONS")]
    style: Option<String>,

    /// Emit violations as JSON
    #[arg(long)]
    json: bool,

    /// Surface advisory (info) findings
    #[arg(long)]
    report_info: bool,

    /// Drop findings for classes nothing recognizes
    #[arg(long)]
    ignore_unknown: bool,

    /// Class names to skip (repeatable)
    #[arg(long = "ignore", value_name = "CLASS")]
    ignore_classes: Vec<String>,

    /// Suppress output, set the exit code only
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = if let Some(ref style) = cli.style {
        check_style(style, &cli)
    } else {
        check_classes(&cli)
    };

    match result {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn check_classes(cli: &Cli) -> classwise::Result<bool> {
    let classes = match cli.classes.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(classes) => classes.to_string(),
        None => String::new(),
    };

    let options = ReportOptions {
        ignore_unknown: cli.ignore_unknown,
        report_info: cli.report_info,
        severity: None,
        ignore_classes: cli.ignore_classes.clone(),
    };
    let violations = validate_class_string(&classes, &options);

    if !cli.quiet {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&violations).expect("serializable"));
        } else {
            for v in &violations {
                println!("{}: {}", v.class_name, v.reason);
                if let Some(ref note) = v.note {
                    println!("  note: {note}");
                }
            }
        }
    }

    Ok(violations.is_empty())
}

fn check_style(style: &str, cli: &Cli) -> classwise::Result<bool> {
    let declarations = parse_declarations(style);
    if declarations.is_empty() {
        return Err(classwise::Error::InvalidInput(
            "no parseable declarations in style string".to_string(),
        ));
    }

    let mut clean = true;
    let mut findings = Vec::new();
    for decl in &declarations {
        let verdict = declaration_support(&decl.property, &decl.value);
        if !verdict.supported {
            clean = false;
        }
        findings.push((decl, verdict));
    }

    if !cli.quiet {
        if cli.json {
            let rows: Vec<serde_json::Value> = findings
                .iter()
                .map(|(decl, verdict)| {
                    serde_json::json!({
                        "property": decl.property.as_str(),
                        "value": decl.value.as_str(),
                        "verdict": verdict,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows).expect("serializable"));
        } else {
            for (decl, verdict) in &findings {
                if !verdict.supported {
                    let reason = verdict.reason.as_deref().unwrap_or("unsupported");
                    println!("{}: {}: {}", decl.property, decl.value, reason);
                } else if cli.report_info
                    && let Some(ref note) = verdict.note
                {
                    println!("{}: {}: note: {}", decl.property, decl.value, note);
                }
            }
        }
    }

    Ok(clean)
}
