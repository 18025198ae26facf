use std::fs;
use std::io::{self, Write};
use std::time::Instant;

use bfopt::{Brainfuck, filter, optimizer};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bfopt", version, about = "An optimizing Brainfuck interpreter")]
struct Cli {
    /// Brainfuck source file to execute
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Print the optimized instruction stream instead of executing
    #[arg(long = "dump-opt")]
    dump_opt: bool,
}

fn main() {
    let cli = Cli::parse();

    let Some(path) = cli.file else {
        eprintln!("Usage: bfopt [--dump-opt] <FILE>");
        let _ = io::stderr().flush();
        std::process::exit(1);
    };

    let source = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("bfopt: failed to read {path}: {e}");
            let _ = io::stderr().flush();
            std::process::exit(2);
        }
    };

    if cli.dump_opt {
        let mut code = filter::keep_commands(&source);
        optimizer::optimize(&mut code);
        println!("{}", String::from_utf8_lossy(&code));
        let _ = io::stdout().flush();
        return;
    }

    let Some(mut bf) = Brainfuck::new(&source) else {
        eprintln!("bfopt: {path}: nothing to run");
        return;
    };

    let start = Instant::now();
    let result = bf.run();
    let elapsed = start.elapsed();

    // Program output owns stdout; everything else goes to stderr.
    let _ = io::stdout().flush();
    if let Err(err) = &result {
        eprintln!("bfopt: {err}");
    }
    eprintln!("elapsed: {:.6}s", elapsed.as_secs_f64());
    let _ = io::stderr().flush();

    if result.is_err() {
        std::process::exit(1);
    }
}
