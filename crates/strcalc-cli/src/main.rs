use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use strcalc::Calculator;

#[derive(Parser)]
#[command(name = "strcalc")]
#[command(about = "Sum delimited numbers", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum each expression and print the result
    Add {
        /// Expressions such as "1,2" or "//;\n1;2"; stdin is read when omitted
        #[arg(value_name = "EXPR")]
        exprs: Vec<String>,

        /// Print the full evaluation as JSON
        #[arg(long)]
        json: bool,

        /// Do not decode `\n` and `\\` in arguments
        #[arg(long)]
        raw: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match &cli.command {
        Commands::Add { exprs, json, raw } => {
            let inputs = if exprs.is_empty() {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                vec![buf]
            } else if *raw {
                exprs.clone()
            } else {
                exprs.iter().map(|e| decode_escapes(e)).collect()
            };

            let calculator = Calculator::new();
            for input in &inputs {
                log::debug!("evaluating {:?}", input);
                let evaluation = calculator
                    .evaluate(Some(input.as_str()))
                    .with_context(|| format!("failed to evaluate {:?}", input))?;
                if *json {
                    println!("{}", serde_json::to_string_pretty(&evaluation)?);
                } else {
                    println!("{}", evaluation.sum);
                }
            }
        }
    }
    Ok(())
}

/// Decodes `\n` to a newline and `\\` to a backslash. Other escapes are kept.
fn decode_escapes(arg: &str) -> String {
    let mut out = String::with_capacity(arg.len());
    let mut chars = arg.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
