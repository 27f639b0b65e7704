/*
 * ==========================================================================
 * POLYLANG - Collection Schema Parser
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 * 
 * License:
 * This file is part of the POLYLANG schema parser project.
 * 
 * POLYLANG is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

//! `polylang <PATH> [--format debug|json|summary] [--pretty]`
//!
//! Parses a schema file or directory and prints the result.

use std::fs;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use polylang::ast::{Item, Node};
use polylang::{DiagnosticPrinter, Error, Program};

#[derive(Parser, Debug)]
#[command(name = "polylang")]
#[command(about = "Parse Polylang collection schemas")]
struct Args {
    /// Schema file, or directory of `.polylang` files
    path: std::path::PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Debug,
    Json,
    Summary,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,polylang=info"));

    fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();
}

fn main() {
    init_logging();

    let args = Args::parse();

    let program = match polylang::parse_path(&args.path) {
        Ok(program) => program,
        Err(e) => {
            report(&e);
            process::exit(1);
        }
    };

    match args.format {
        Format::Debug => println!("{:#?}", program),
        Format::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(&program)
            } else {
                serde_json::to_string(&program)
            };
            match json {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("failed to serialize program: {}", e);
                    process::exit(1);
                }
            }
        }
        Format::Summary => print!("{}", summary(&program)),
    }
}

/// Renders syntax errors against their source; everything else goes to the log.
fn report(e: &Error) {
    match (e.syntax_error(), e.file()) {
        (Some(syntax), Some(file)) => match fs::read_to_string(file) {
            Ok(source) => DiagnosticPrinter::new(file.display().to_string(), source).print(syntax),
            Err(_) => error!("{}", e),
        },
        (Some(syntax), None) => eprintln!("{}", syntax),
        _ => error!("{}", e),
    }
}

/// One line per top-level node.
fn summary(program: &Program) -> String {
    let mut out = String::new();

    for node in &program.nodes {
        let line = match node {
            Node::Collection(collection) => {
                let (mut fields, mut functions, mut indexes) = (0, 0, 0);
                for item in &collection.items {
                    match item {
                        Item::Field(_) => fields += 1,
                        Item::Function(_) => functions += 1,
                        Item::Index(_) => indexes += 1,
                    }
                }
                format!(
                    "collection {} ({} fields, {} functions, {} indexes) at {}",
                    collection.name, fields, functions, indexes, collection.span
                )
            }
            Node::Function(function) => format!(
                "function {} ({} statements) at {}",
                function.name,
                function.statements.len(),
                function.span
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }

    out
}
