//! Main CLI application

use crate::commands::{build_root, ROOT_NAME, ROOT_SHORT};
use crate::config::{load_settings, Overrides, Settings};
use crate::error::IrisError;
use crate::registry::{execute, Command, Context};
use crate::ui::{self, Verbosity};
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Flags accepted before the command path
#[derive(Args, Debug, Default)]
pub struct GlobalFlags {
    /// Path to a settings file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only print command output and errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Print no diagnostics
    #[arg(short = 's', long = "silent")]
    pub silent: bool,

    /// Print verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Same as the `help` command
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Same as the `version` command
    #[arg(short = 'V', long = "version")]
    pub version: bool,
}

/// Global flags followed by the command path. Everything from the first
/// positional argument on is left for dispatch.
#[derive(Parser, Debug)]
#[command(
    name = ROOT_NAME,
    about = ROOT_SHORT,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct GlobalArgs {
    #[command(flatten)]
    pub flags: GlobalFlags,

    /// Command path followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// The root command's flags without the command path, for completion scripts
pub fn global_flags_command() -> clap::Command {
    GlobalFlags::augment_args(
        clap::Command::new(ROOT_NAME)
            .about(ROOT_SHORT)
            .disable_help_flag(true)
            .disable_version_flag(true),
    )
}

impl GlobalArgs {
    /// Parse global flags from `args` (program name first).
    ///
    /// The command path may take hyphenated values, so a leading word that
    /// still looks like a flag is one clap did not recognize.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let global = Self::try_parse_from(args)?;
        match global.command.first() {
            Some(first) if first.len() > 1 && first.starts_with('-') => {
                Err(Self::command().error(
                    ErrorKind::UnknownArgument,
                    format!("unexpected argument '{}' found", first),
                ))
            }
            _ => Ok(global),
        }
    }

    /// Verbosity requested on the command line, if any
    pub fn verbosity(&self) -> Option<Verbosity> {
        if self.flags.silent {
            Some(Verbosity::Silent)
        } else if self.flags.quiet {
            Some(Verbosity::Quiet)
        } else if self.flags.verbose {
            Some(Verbosity::Verbose)
        } else {
            None
        }
    }

    /// Settings overrides carried by the flags
    pub fn overrides(&self) -> Overrides {
        Overrides {
            no_color: self.flags.no_color,
            assume_yes: self.flags.yes,
            verbosity: self.verbosity(),
        }
    }

    /// Arguments to dispatch; `-h` and `-V` stand in for their commands
    pub fn dispatch_args(&self) -> Vec<String> {
        if self.flags.help {
            vec!["help".to_string()]
        } else if self.flags.version {
            vec!["version".to_string()]
        } else {
            self.command.clone()
        }
    }
}

/// CLI application
pub struct App {
    /// The command tree
    root: Command,
    /// Effective settings
    settings: Settings,
}

impl App {
    /// Create an app with the built-in command tree
    pub fn new(settings: Settings) -> Result<Self, IrisError> {
        Ok(App {
            root: build_root()?,
            settings,
        })
    }

    /// Dispatch `args` with the given output and input streams
    pub fn run(
        &self,
        args: &[String],
        out: &mut dyn Write,
        input: &mut dyn BufRead,
    ) -> Result<(), IrisError> {
        let mut ctx = Context::new(&self.root, out, input)
            .with_verbosity(self.settings.verbosity)
            .with_assume_yes(self.settings.assume_yes);

        execute(&mut ctx, args)?;
        ctx.out.flush()?;
        Ok(())
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), IrisError> {
    let global = GlobalArgs::try_parse_args(std::env::args_os())?;

    let settings = load_settings(global.flags.config.as_deref())?.apply(global.overrides());
    ui::set_color(settings.color);

    let app = App::new(settings)?;

    let mut out = io::stdout().lock();
    let mut input = io::stdin().lock();
    app.run(&global.dispatch_args(), &mut out, &mut input)
}
