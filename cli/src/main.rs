use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use serde::Deserialize;

use zuulfmt::{Formatter, Rules};

#[derive(Parser)]
#[command(name = "zuulfmt", version, about = "Zuul and Ansible YAML key-order formatter")]
struct Cli {
    /// File to rewrite in place (reads stdin and writes stdout when omitted)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Write nothing; exit 1 if the input is not already formatted
    #[arg(long)]
    check: bool,

    /// TOML file overriding the built-in key order and wrapper names
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Disable colored error output
    #[arg(long)]
    no_color: bool,
}

/// On-disk rules override. Either table falls back to the built-ins.
#[derive(Debug, Deserialize)]
struct RulesConfig {
    #[serde(default)]
    key_order: Option<Vec<String>>,

    #[serde(default)]
    wrapper_names: Option<Vec<String>>,
}

impl RulesConfig {
    fn into_rules(self) -> Rules {
        let defaults = Rules::default();
        Rules {
            key_order: self.key_order.unwrap_or(defaults.key_order),
            wrapper_names: self.wrapper_names.unwrap_or(defaults.wrapper_names),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    let rules = match &cli.rules {
        Some(path) => load_rules(path),
        None => Rules::default(),
    };

    // Read source
    let (source, source_name) = match &cli.file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(s) => (s, path.display().to_string()),
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("error: cannot read stdin: {}", e);
                process::exit(1);
            }
            (buffer, "<stdin>".to_string())
        }
    };

    // Set up codespan file database
    let mut files = SimpleFiles::new();
    let file_id = files.add(source_name.clone(), source.clone());

    let formatted = match Formatter::new(rules).format(&source, file_id) {
        Ok(out) => out,
        Err(error) => {
            let writer = StandardStream::stderr(color_choice);
            let config = term::Config::default();
            let _ = term::emit_to_write_style(
                &mut writer.lock(),
                &config,
                &files,
                &error.to_diagnostic(),
            );
            process::exit(1);
        }
    };

    if cli.check {
        if formatted != source {
            eprintln!("{}: not formatted", source_name);
            process::exit(1);
        }
        return;
    }

    match &cli.file {
        Some(path) => {
            if let Err(e) = std::fs::write(path, formatted) {
                eprintln!("error: cannot write '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
        None => print!("{}", formatted),
    }
}

fn load_rules(path: &Path) -> Rules {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", path.display(), e);
            process::exit(1);
        }
    };
    match toml::from_str::<RulesConfig>(&text) {
        Ok(config) => config.into_rules(),
        Err(e) => {
            eprintln!("error: invalid rules file '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}
