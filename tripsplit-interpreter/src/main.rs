use std::{
    borrow::Cow,
    env, fs,
    path::{Path, PathBuf},
    process,
};

use tripsplit_application::{CalculationSnapshot, ProcessingOutcome, ScriptProcessor};
use tripsplit_i18n as i18n;
use tripsplit_infrastructure::TripScriptParser;
use tripsplit_presentation::{SettlementPresenter, SettlementView};

type CliResult<T> = Result<T, Cow<'static, str>>;

const USAGE: &str = "Usage: tripsplit-interpreter <file.trip> [--svg <dir>]";

struct Args {
    path: String,
    svg_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let args = parse_args(env::args().skip(1))?;

    let source = fs::read_to_string(&args.path)
        .map_err(|err| format!("Failed to read '{}': {err}", args.path))?;

    let processor = ScriptProcessor::new(&TripScriptParser);

    let (snapshots, rejected) = match processor.process(&source) {
        ProcessingOutcome::Success {
            snapshots,
            rejected,
        } => (snapshots, rejected),
        ProcessingOutcome::SyntaxError { line, detail } => {
            return Err(format!("Line {line}: {detail}").into());
        }
    };

    for rejection in &rejected {
        eprintln!("{}", i18n::rejected_command(rejection.line, &rejection.error));
    }

    if let Some(dir) = &args.svg_dir {
        fs::create_dir_all(dir)
            .map_err(|err| format!("Failed to create '{}': {err}", dir.display()))?;
    }

    for (index, snapshot) in snapshots.iter().enumerate() {
        let view = render_snapshot(snapshot);
        println!("{}", view.to_text());

        if let Some(dir) = &args.svg_dir {
            write_svgs(dir, index + 1, &view)?;
        }
    }

    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> CliResult<Args> {
    let mut path = None;
    let mut svg_dir = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--svg" => {
                let Some(dir) = args.next() else {
                    return Err("`--svg` expects an output directory".into());
                };
                svg_dir = Some(PathBuf::from(dir));
            }
            _ if path.is_none() => path = Some(arg),
            _ => return Err(format!("Unexpected argument '{arg}'\n{USAGE}").into()),
        }
    }

    let Some(path) = path else {
        return Err(USAGE.into());
    };

    Ok(Args { path, svg_dir })
}

fn render_snapshot(snapshot: &CalculationSnapshot) -> SettlementView {
    SettlementPresenter::render_with_heading(
        i18n::calculation_heading(snapshot.line),
        &snapshot.trip,
        &snapshot.result,
    )
}

fn write_svgs(dir: &Path, number: usize, view: &SettlementView) -> CliResult<()> {
    let files =
        svg_files(number, view).ok_or("Failed to combine the expense and settlement tables")?;

    for (name, svg) in files {
        let path = dir.join(name);
        fs::write(&path, svg)
            .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
        tracing::info!(path = %path.display(), "SVG written");
    }

    Ok(())
}

// Per-table documents plus both tables stacked into `calc-<n>.svg`.
fn svg_files(number: usize, view: &SettlementView) -> Option<[(String, String); 3]> {
    let combined = view.to_svg()?;
    Some([
        (
            format!("calc-{number}-expenses.svg"),
            view.expense_table_svg(),
        ),
        (
            format!("calc-{number}-settlement.svg"),
            view.settlement_table_svg(),
        ),
        (format!("calc-{number}.svg"), combined),
    ])
}
