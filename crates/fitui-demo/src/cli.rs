#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `FITUI_DEMO_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
FitUI Demo — adaptive layout selection in the terminal

USAGE:
    fitui-demo [OPTIONS]

OPTIONS:
    --screen=N           Start on screen N, 1-indexed (default: 1)
    --width=N            Initial constraint width in columns (default: 40)
    --help, -h           Show this help message
    --version, -V        Show version

SCREENS:
    1  Layout That Fits   One child set, candidate arrangements swapped
    2  View That Fits     Whole alternative subtrees swapped

KEYBINDINGS:
    Left / Right    Narrow / widen the constraint box
    Home / End      Jump to the minimum / maximum width
    1-2             Switch screens by number
    Tab / Shift-Tab Cycle through screens
    q / Esc / Ctrl+C Quit

ENVIRONMENT VARIABLES:
    FITUI_DEMO_SCREEN         Override --screen
    FITUI_DEMO_WIDTH          Override --width
    FITUI_DEMO_EXIT_AFTER_MS  Auto-quit after N milliseconds (for testing)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Starting screen (1-indexed).
    pub start_screen: u16,
    /// Initial constraint width in columns.
    pub width: u16,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            start_screen: 1,
            width: 40,
            exit_after_ms: 0,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(&args, |name| env::var(name).ok()) {
            ParseOutcome::Opts(opts) => opts,
            ParseOutcome::Help => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            ParseOutcome::Version => {
                println!("fitui-demo {VERSION}");
                process::exit(0);
            }
            ParseOutcome::Error(msg) => {
                eprintln!("error: {msg}");
                eprintln!("Try 'fitui-demo --help' for usage.");
                process::exit(2);
            }
        }
    }

    fn parse_from(args: &[String], env: impl Fn(&str) -> Option<String>) -> ParseOutcome {
        let mut opts = Self::default();

        // Environment variable defaults first, flags override below.
        if let Some(val) = env("FITUI_DEMO_SCREEN")
            && let Ok(n) = val.parse()
        {
            opts.start_screen = n;
        }
        if let Some(val) = env("FITUI_DEMO_WIDTH")
            && let Ok(n) = val.parse()
        {
            opts.width = n;
        }
        if let Some(val) = env("FITUI_DEMO_EXIT_AFTER_MS")
            && let Ok(n) = val.parse()
        {
            opts.exit_after_ms = n;
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return ParseOutcome::Help,
                "--version" | "-V" => return ParseOutcome::Version,
                other => {
                    if let Some(val) = other.strip_prefix("--screen=") {
                        match val.parse() {
                            Ok(n) => opts.start_screen = n,
                            Err(_) => {
                                return ParseOutcome::Error(format!("invalid --screen: {val}"));
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--width=") {
                        match val.parse() {
                            Ok(n) => opts.width = n,
                            Err(_) => {
                                return ParseOutcome::Error(format!("invalid --width: {val}"));
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                        match val.parse() {
                            Ok(n) => opts.exit_after_ms = n,
                            Err(_) => {
                                return ParseOutcome::Error(format!(
                                    "invalid --exit-after-ms: {val}"
                                ));
                            }
                        }
                    } else {
                        return ParseOutcome::Error(format!("unknown argument: {other}"));
                    }
                }
            }
        }

        ParseOutcome::Opts(opts)
    }
}

enum ParseOutcome {
    Opts(Opts),
    Help,
    Version,
    Error(String),
}
