use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{error::ErrorKind, Parser};

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::directory::{DirectoryEvent, DirectoryState, PageResetPolicy, StatusFilter};
use crate::display::{self, Clock, FixedClock, SystemClock};
use crate::output::{self, OutputFormat};
use crate::patient::{self, PatientRoster};

const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

fn print_banner() {
    const BANNER: &str = r#"
                 __  _            __      __          __
    ____  ____ _/ /_(_)__  ____  / /_____/ /__  _____/ /__
   / __ \/ __ `/ __/ / _ \/ __ \/ __/ __  / _ \/ ___/ //_/
  / /_/ / /_/ / /_/ /  __/ / / / /_/ /_/ /  __(__  ) ,<
 / .___/\__,_/\__/_/\___/_/ /_/\__/\__,_/\___/____/_/|_|
/_/
       patient directory browser
    "#;
    print!("{}", BANNER);
    println!();
}

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Mode {
    Render,
    Interactive,
    Serve(String),
}

#[derive(Clone, Debug)]
struct RunConfig {
    patients_file: Option<PathBuf>,
    search: Option<String>,
    status: StatusFilter,
    page: Option<usize>,
    page_size: usize,
    view: Option<String>,
    reset_policy: PageResetPolicy,
    as_of: Option<NaiveDate>,
    format: OutputFormat,
    output: Option<String>,
    no_color: bool,
    force_color: bool,
    verbose: u8,
    log_level: Option<String>,
    mode: Mode,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let force_color = args.color;
    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let patients_file = args
        .patients_file
        .or(cfg.patients_file)
        .map(|p| config::expand_tilde(p.trim()));

    let search = args.search.or(cfg.search);

    let status_raw = args.status.or(cfg.status).unwrap_or_else(|| "all".to_string());
    let status = StatusFilter::parse(&status_raw).ok_or_else(|| {
        format!("invalid status '{status_raw}', expected all, active, inactive or pending")
    })?;

    let page_size = args
        .page_size
        .or(cfg.page_size)
        .unwrap_or(crate::directory::DEFAULT_PAGE_SIZE);
    if page_size == 0 {
        return Err("invalid page-size, expected positive integer".to_string());
    }

    let reset_policy = if args
        .reset_page
        .or(cfg.reset_page_on_filter)
        .unwrap_or(false)
    {
        PageResetPolicy::FirstPage
    } else {
        PageResetPolicy::Keep
    };

    let as_of = match args.as_of.or(cfg.as_of) {
        Some(raw) => Some(
            display::parse_date(&raw)
                .ok_or_else(|| format!("invalid as-of date '{raw}', expected YYYY-MM-DD"))?,
        ),
        None => None,
    };

    let output_file = args
        .output
        .or(cfg.output)
        .map(|p| config::expand_tilde_string(p.trim()));

    let format = match args.format.or(cfg.format) {
        Some(raw) => OutputFormat::parse(&raw).ok_or_else(|| {
            format!("invalid format '{raw}', expected plain, vivid, json or html")
        })?,
        None => output_file
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or_default(),
    };

    let mode = if args.interactive {
        Mode::Interactive
    } else if let Some(addr) = args.serve {
        let addr = addr.trim().to_string();
        if addr.is_empty() {
            Mode::Serve(cfg.listen.unwrap_or_else(|| DEFAULT_LISTEN.to_string()))
        } else {
            Mode::Serve(addr)
        }
    } else {
        Mode::Render
    };

    Ok(RunConfig {
        patients_file,
        search,
        status,
        page: args.page,
        page_size,
        view: args.view,
        reset_policy,
        as_of,
        format,
        output: output_file,
        no_color,
        force_color,
        verbose: args.verbose,
        log_level: cfg.log_level,
        mode,
    })
}

fn load_roster(run: &RunConfig) -> Result<PatientRoster, String> {
    match run.patients_file.as_ref() {
        Some(path) => patient::load_patients(path).map_err(|e| e.to_string()),
        None => {
            tracing::debug!("using built-in patient records");
            Ok(PatientRoster::seeded())
        }
    }
}

/// Applies the start-up view options as the events a user would have sent.
fn build_state(run: &RunConfig, roster: PatientRoster) -> Result<DirectoryState, String> {
    let mut state = DirectoryState::new(roster)
        .with_page_size(run.page_size)
        .with_reset_policy(run.reset_policy);

    let mut events: Vec<DirectoryEvent> = Vec::new();
    if let Some(search) = run.search.as_ref() {
        events.push(DirectoryEvent::Search(search.clone()));
    }
    if run.status != StatusFilter::All {
        events.push(DirectoryEvent::FilterStatus(run.status));
    }
    if let Some(page) = run.page {
        events.push(DirectoryEvent::GoToPage(page));
    }
    if let Some(id) = run.view.as_ref() {
        events.push(DirectoryEvent::View(id.clone()));
    }
    for event in events {
        state.apply(event).map_err(|e| e.to_string())?;
    }
    Ok(state)
}

fn clock_for(run: &RunConfig) -> Arc<dyn Clock + Send + Sync> {
    match run.as_of {
        Some(date) => Arc::new(FixedClock(date)),
        None => Arc::new(SystemClock),
    }
}

fn run_render(run: &RunConfig, state: &DirectoryState, clock: &dyn Clock) -> Result<(), String> {
    let view = state.view(clock.today());
    let rendered = output::render(run.format, &view);
    match run.output.as_ref() {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes())
                .map_err(|e| format!("failed to write output file '{path}': {e}"))?;
            tracing::info!(%path, format = run.format.name(), "wrote rendered view");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|e| format!("failed to write output: {e}"))?;
        }
    }
    Ok(())
}

fn run_interactive(
    run: &RunConfig,
    mut state: DirectoryState,
    clock: &dyn Clock,
) -> Result<(), String> {
    print_banner();
    println!("type 'help' for commands, 'quit' to leave\n");
    let renderer = run.format.renderer();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    crate::browse::run_session(
        &mut state,
        renderer.as_ref(),
        clock,
        stdin.lock(),
        stdout.lock(),
    )
    .map_err(|e| format!("interactive session failed: {e}"))
}

fn run_serve(
    addr: &str,
    state: DirectoryState,
    clock: Arc<dyn Clock + Send + Sync>,
) -> Result<(), String> {
    print_banner();
    format_kv_line("Address", addr);
    format_kv_line("Patients", &state.roster().len().to_string());
    format_kv_line("Page size", &state.page_size().to_string());
    println!();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(crate::server::serve(addr, state, clock))
        .map_err(|e| e.to_string())
}

fn init_config(args: &CliArgs) -> Result<(), String> {
    let path = match args.config.as_deref() {
        Some(p) => config::expand_tilde(p),
        None => config::default_config_path()
            .ok_or_else(|| "could not determine home directory for config".to_string())?,
    };
    if config::ensure_default_config_file(&path)? {
        println!(":: Config :: written to {}", path.display());
    } else {
        println!(":: Config :: {} already exists, left untouched", path.display());
    }
    Ok(())
}

fn load_user_config(args: &CliArgs) -> Result<ConfigFile, String> {
    match args.config.as_deref() {
        Some(p) => config::load_config(&config::expand_tilde(p), false),
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true),
            None => Ok(ConfigFile::default()),
        },
    }
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    if args.init_config {
        return init_config(&args);
    }

    let cfg = load_user_config(&args)?;
    let run = build_run_config(args, cfg)?;

    if run.force_color {
        colored::control::set_override(true);
    } else if run.no_color {
        colored::control::set_override(false);
    }
    crate::logging::init(run.verbose, run.log_level.as_deref(), !run.no_color)?;

    let roster = load_roster(&run)?;
    let state = build_state(&run, roster)?;
    let clock = clock_for(&run);

    match run.mode.clone() {
        Mode::Render => run_render(&run, &state, clock.as_ref()),
        Mode::Interactive => run_interactive(&run, state, clock.as_ref()),
        Mode::Serve(addr) => run_serve(&addr, state, clock),
    }
}
