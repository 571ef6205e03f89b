mod app;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: boostsnake [<options>]

Play Snake in the terminal.  Steer with the arrow keys, eat the red food to
grow, and grab the blue pickup for a five-second burst of speed.

Options:
  -c, --config <path>    Read configuration from <path>
      --log-file <path>  Write log messages to <path>
  -h, --help             Display this help message and exit
  -V, --version          Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Arguments {
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct RunOptions {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl Arguments {
    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    opts.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    opts.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run(opts))
    }

    fn run(self) -> ExitCode {
        match self {
            Arguments::Run(opts) => match play(opts) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    if e.downcast_ref::<io::Error>()
                        .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
                    {
                        ExitCode::SUCCESS
                    } else {
                        eprintln!("boostsnake: {e:?}");
                        ExitCode::from(2)
                    }
                }
            },
            Arguments::Help => {
                print!("{USAGE}");
                ExitCode::SUCCESS
            }
            Arguments::Version => {
                println!("boostsnake {}", env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

fn play(opts: RunOptions) -> anyhow::Result<()> {
    let config = match opts.config {
        Some(ref path) => Config::load(path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => match Config::default_path() {
            Ok(path) => Config::load(&path, true).with_context(|| {
                format!("failed to load configuration from {}", path.display())
            })?,
            Err(_) => Config::default(),
        },
    };
    logging::init(&config.logging, opts.log_file.as_deref())?;
    let game = Game::new(config.board, config.colors.palette());
    let terminal = ratatui::init();
    let r = App::new(game).run(terminal);
    ratatui::restore();
    r.map_err(Into::into)
}

fn main() -> ExitCode {
    match Arguments::from_parser(Parser::from_env()) {
        Ok(cmd) => cmd.run(),
        Err(e) => {
            eprintln!("boostsnake: {e}");
            ExitCode::from(2)
        }
    }
}
