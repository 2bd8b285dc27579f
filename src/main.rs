//! Vertigo - standalone binary
//!
//! Runs one session on the controlling terminal and prints the movement for
//! file managers that can only shell out.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;

use vertigo::{
    translate, CrosstermTerminal, Direction, Host, KeyBindingRegistry, Movement, Numbering,
    Severity, Vertigo, VertigoConfig,
};

const USAGE: &str = "\
usage: vertigo <up|down|to> [--numbering MODE] [--config PATH] [--quiet]
       vertigo bindings [--config PATH]
       vertigo translate CODE [--config PATH]";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Move(Direction),
    Bindings,
    Translate(String),
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    command: Command,
    numbering: Numbering,
    config: Option<PathBuf>,
    quiet: bool,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut rest = args.iter();
    let command = match rest.next().map(String::as_str) {
        Some("bindings") => Command::Bindings,
        Some("translate") => match rest.next() {
            Some(code) => Command::Translate(code.clone()),
            None => bail!("translate needs a code"),
        },
        Some(token) => Command::Move(token.parse()?),
        None => bail!("missing direction"),
    };

    let mut parsed = Args { command, numbering: Numbering::Relative, config: None, quiet: false };

    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--numbering" => {
                let mode = rest.next().context("--numbering needs a mode")?;
                parsed.numbering = mode.parse()?;
            }
            "--config" => {
                let path = rest.next().context("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--quiet" | "-q" => parsed.quiet = true,
            other => bail!("unknown flag: {}", other),
        }
    }

    Ok(parsed)
}

/// Notifications go to stderr, the movement to stdout
struct ShellHost {
    numbering: Numbering,
    moved: Option<Movement>,
}

impl Host for ShellHost {
    fn numbering(&self) -> Numbering {
        self.numbering
    }

    fn apply(&mut self, movement: Movement) {
        self.moved = Some(movement);
        println!("{} {}", movement.direction, movement.count);
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Normal => eprintln!("{}", message),
            Severity::Attention => eprintln!("\x1b[31m{}\x1b[0m", message),
        }
    }
}

struct PrintedBindings;

impl KeyBindingRegistry for PrintedBindings {
    fn register_key_binding(&mut self, key: char, direction: Direction) {
        println!("{} {}", key, direction);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<VertigoConfig> {
    match path {
        Some(path) => VertigoConfig::load(&path)
            .with_context(|| format!("loading {}", path.display())),
        None => {
            let path = VertigoConfig::default_path();
            VertigoConfig::load_or_default(&path)
                .with_context(|| format!("loading {}", path.display()))
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let mut config = load_config(args.config)?;
    config.quiet |= args.quiet;
    let vertigo = Vertigo::new(config)?;

    match args.command {
        Command::Bindings => {
            vertigo.install_key_bindings(&mut PrintedBindings);
            Ok(ExitCode::SUCCESS)
        }
        Command::Translate(code) => {
            let count = translate(vertigo.alphabet(), &code)?;
            println!("{}", count);
            Ok(ExitCode::SUCCESS)
        }
        Command::Move(direction) => {
            let mut host = ShellHost { numbering: args.numbering, moved: None };
            let mut terminal = CrosstermTerminal::new();
            vertigo.execute(&mut host, &mut terminal, direction);
            io::stdout().flush()?;

            Ok(if host.moved.is_some() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("vertigo: {}\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("vertigo: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
