//! `jobwatch`: terminal front end for the job-monitor operator console.
//!
//! Every subcommand maps onto one console operation. Protected commands run
//! the same guard check as the browser and fail with "not logged in" before
//! any request goes out.

mod output;
mod session;
mod transport;


use std::cell::RefCell;
use std::io::{self, BufRead, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::auth::{self, DEFAULT_USERNAME, LoginError};
use console::guard::{self, Access};
use console::views::jobs::{self, JobQuery, JobsView};
use console::views::runs::{self, RunsView};
use console::views::settings::{self, ConfigEditor, ConfigFamily};
use console::views::sources::{self, SourcesView};
use console::{ApiClient, ConsoleConfig, RequestError, Session, SessionStore, Transport, nav};

use crate::output::print_json;
use crate::session::{DEFAULT_SESSION_FILE, FileSession};
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `jobwatch login` first")]
    NotLoggedIn,
    #[error("{0}")]
    Login(#[from] LoginError),
    #[error("request failed: {0}")]
    Request(#[from] RequestError),
    #[error("no source with id {0}")]
    UnknownSource(i64),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "jobwatch", about = "Operator console for the job-monitor API")]
struct Cli {
    /// API base URL; falls back to JOBWATCH_API_BASE, then the local default.
    #[arg(long)]
    api_base: Option<String>,

    #[arg(long, env = "JOBWATCH_SESSION_FILE", default_value = DEFAULT_SESSION_FILE)]
    session_file: PathBuf,

    /// Print raw JSON instead of text rows.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a session token.
    Login {
        #[arg(long, default_value = DEFAULT_USERNAME)]
        username: String,
        /// Read from stdin when omitted.
        #[arg(long, env = "JOBWATCH_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    Logout,
    /// Report whether a session token is stored.
    Status,
    /// Probe `GET /health`.
    Ping,
    Jobs(JobsCommand),
    Runs {
        #[arg(long)]
        limit: Option<u32>,
    },
    Sources(SourcesCommand),
    Settings(SettingsCommand),
}

#[derive(Args, Debug)]
struct JobsCommand {
    #[command(subcommand)]
    command: JobsSubcommand,
}

#[derive(Args, Debug)]
struct JobFilter {
    #[arg(long, short, default_value = "")]
    q: String,
    #[arg(long)]
    high_priority: Option<bool>,
    #[arg(long)]
    source_id: Option<i64>,
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    offset: Option<u32>,
    /// Only jobs collected at or after this ISO-8601 timestamp.
    #[arg(long)]
    start: Option<String>,
    /// Only jobs collected at or before this ISO-8601 timestamp.
    #[arg(long)]
    end: Option<String>,
}

impl From<JobFilter> for JobQuery {
    fn from(filter: JobFilter) -> Self {
        Self {
            q: filter.q,
            high_priority: filter.high_priority,
            source_id: filter.source_id,
            limit: filter.limit,
            offset: filter.offset,
            start: filter.start,
            end: filter.end,
        }
    }
}

#[derive(Subcommand, Debug)]
enum JobsSubcommand {
    List(JobFilter),
    Show { id: i64 },
    /// Trigger a crawl, then list jobs with the given filter.
    Trigger(JobFilter),
}

#[derive(Args, Debug)]
struct SourcesCommand {
    #[command(subcommand)]
    command: SourcesSubcommand,
}

#[derive(Subcommand, Debug)]
enum SourcesSubcommand {
    List,
    /// Flip a source's enabled flag.
    Toggle { id: i64 },
}

#[derive(Args, Debug)]
struct SettingsCommand {
    #[command(subcommand)]
    command: SettingsSubcommand,
}

#[derive(Subcommand, Debug)]
enum SettingsSubcommand {
    Show {
        family: Family,
    },
    /// Replace a config document with the JSON in `--file` (`-` for stdin).
    Save {
        family: Family,
        #[arg(long, default_value = "-")]
        file: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Family {
    Scoring,
    Notifications,
}

impl From<Family> for ConfigFamily {
    fn from(family: Family) -> Self {
        match family {
            Family::Scoring => Self::Scoring,
            Family::Notifications => Self::Notifications,
        }
    }
}

struct CliContext {
    api: ApiClient,
    json: bool,
}

impl CliContext {
    fn session(&self) -> &Session {
        self.api.session()
    }

    fn require_session(&self) -> Result<(), CliError> {
        match guard::check(self.session().as_ref()) {
            Access::Granted => Ok(()),
            Access::Redirect(_) => Err(CliError::NotLoggedIn),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match cli.api_base.as_deref() {
        Some(base) => ConsoleConfig::from_api_base(Some(base)),
        None => ConsoleConfig::from_env(),
    };
    let transport: Rc<dyn Transport> = Rc::new(ReqwestTransport::default());
    let session = FileSession::new(cli.session_file).shared();
    let ctx = CliContext { api: ApiClient::new(&config, session, transport), json: cli.json };

    match run(&ctx, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(ctx: &CliContext, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { username, password } => run_login(ctx, &username, password).await,
        Command::Logout => {
            nav::logout(ctx.session().as_ref());
            println!("logged out");
            Ok(())
        }
        Command::Status => {
            let state = if ctx.session().get().is_some() { "logged in" } else { "not logged in" };
            println!("{state} ({})", ctx.api.base());
            Ok(())
        }
        Command::Ping => {
            let health = ctx.api.health().await?;
            if ctx.json {
                print_json(&health)?;
            } else {
                println!("ok");
            }
            Ok(())
        }
        Command::Jobs(jobs) => {
            ctx.require_session()?;
            run_jobs(ctx, jobs.command).await
        }
        Command::Runs { limit } => {
            ctx.require_session()?;
            run_runs(ctx, limit).await
        }
        Command::Sources(sources) => {
            ctx.require_session()?;
            run_sources(ctx, sources.command).await
        }
        Command::Settings(settings) => {
            ctx.require_session()?;
            run_settings(ctx, settings.command).await
        }
    }
}

async fn run_login(ctx: &CliContext, username: &str, password: Option<String>) -> Result<(), CliError> {
    let password = match password {
        Some(password) => password,
        None => read_password_line()?,
    };
    auth::login(&ctx.api, username, &password).await?;
    println!("logged in as {username}");
    Ok(())
}

fn read_password_line() -> Result<String, CliError> {
    eprint!("password: ");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

async fn run_jobs(ctx: &CliContext, command: JobsSubcommand) -> Result<(), CliError> {
    let cell = Rc::new(RefCell::new(JobsView::new()));
    match command {
        JobsSubcommand::List(filter) => {
            jobs::load(&ctx.api, &cell, &filter.into()).await?;
        }
        JobsSubcommand::Show { id } => {
            let job = ctx.api.get_job(id).await?;
            if ctx.json {
                print_json(&serde_json::to_value(&job)?)?;
            } else {
                println!("{}", output::job_detail(&job));
            }
            return Ok(());
        }
        JobsSubcommand::Trigger(filter) => {
            let summary = jobs::trigger_crawl(&ctx.api, &cell, &filter.into()).await?;
            eprintln!("{}", output::trigger_summary(&summary));
        }
    }
    let view = cell.borrow();
    if ctx.json {
        print_json(&serde_json::to_value(&view.items)?)?;
    } else {
        view.items.iter().for_each(|job| println!("{}", output::job_line(job)));
    }
    Ok(())
}

async fn run_runs(ctx: &CliContext, limit: Option<u32>) -> Result<(), CliError> {
    let cell = Rc::new(RefCell::new(RunsView::new()));
    runs::load(&ctx.api, &cell, limit).await?;
    let view = cell.borrow();
    if ctx.json {
        print_json(&serde_json::to_value(&view.items)?)?;
    } else {
        view.items.iter().for_each(|run| println!("{}", output::run_line(run)));
    }
    Ok(())
}

async fn run_sources(ctx: &CliContext, command: SourcesSubcommand) -> Result<(), CliError> {
    let cell = Rc::new(RefCell::new(SourcesView::new()));
    sources::load(&ctx.api, &cell).await?;
    let shown = match command {
        SourcesSubcommand::List => None,
        SourcesSubcommand::Toggle { id } => {
            let row = cell.borrow().source(id).cloned().ok_or(CliError::UnknownSource(id))?;
            sources::toggle(&ctx.api, &cell, &row).await?;
            Some(id)
        }
    };
    let view = cell.borrow();
    let rows: Vec<_> = view.items.iter().filter(|source| shown.is_none_or(|id| source.id == id)).collect();
    if ctx.json {
        print_json(&serde_json::to_value(&rows)?)?;
    } else {
        rows.into_iter().for_each(|source| println!("{}", output::source_line(source)));
    }
    Ok(())
}

async fn run_settings(ctx: &CliContext, command: SettingsSubcommand) -> Result<(), CliError> {
    match command {
        SettingsSubcommand::Show { family } => {
            let cell = Rc::new(RefCell::new(ConfigEditor::new(family.into())));
            settings::load(&ctx.api, &cell).await?;
            println!("{}", cell.borrow().buffer);
        }
        SettingsSubcommand::Save { family, file } => {
            let mut editor = ConfigEditor::new(family.into());
            editor.edit(read_input(&file)?);
            let stored = settings::save(&ctx.api, &editor).await?;
            print_json(&stored)?;
        }
    }
    Ok(())
}

fn read_input(file: &str) -> Result<String, CliError> {
    if file == "-" {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}
