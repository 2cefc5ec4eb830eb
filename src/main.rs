use clap::Parser;
use colored::Colorize;
use cryptogram_solver::cli::{Args, OutputFormat};
use cryptogram_solver::config::FileConfig;
use cryptogram_solver::{solve, Dictionary, Solution, SolveConfig, SolverError};
use log::{debug, warn};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    human_panic::setup_panic!();
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", "error".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Maps `-v`/`-vv` to a `log` level filter, leaving `RUST_LOG` free to
/// override it (the library never installs a logger itself, per §12).
fn init_logger(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn run(args: &Args) -> Result<(), SolverError> {
    let file_config = resolve_file_config(args)?;
    let solve_config = file_config.clone().into_solve_config();
    let format = args
        .format
        .or_else(|| file_config.format.as_deref().and_then(OutputFormat::parse))
        .unwrap_or(OutputFormat::Text);

    let dictionary = load_dictionary(args, &file_config)?;

    if let Some(batch_path) = &args.batch {
        run_batch(batch_path, &dictionary, &solve_config, format, args.jobs)
    } else {
        let ciphertext = match &args.ciphertext {
            Some(text) => text.clone(),
            None => read_stdin()?,
        };
        let solutions = solve(&ciphertext, &dictionary, &solve_config)?;
        print_solutions(&ciphertext, &solutions, format);
        Ok(())
    }
}

/// Layers an optional `--config` file beneath the CLI flags (§10):
/// `./cryptogram.toml` is consulted when present and no explicit path was
/// given; explicit flags always win.
fn resolve_file_config(args: &Args) -> Result<FileConfig, SolverError> {
    let default_path = Path::new("cryptogram.toml");
    let path = args
        .config
        .clone()
        .or_else(|| default_path.exists().then(|| default_path.to_path_buf()));

    let file = match path {
        Some(path) => {
            debug!("loading config file {}", path.display());
            FileConfig::load(&path)?
        }
        None => FileConfig::default(),
    };

    let cli_overrides = FileConfig {
        max_solutions: args.max_solutions,
        timeout_ms: args.timeout_ms,
        dictionary: args.dictionary.as_ref().map(|p| p.display().to_string()),
        format: args.format.map(|f| match f {
            OutputFormat::Text => "text".to_string(),
            OutputFormat::Json => "json".to_string(),
        }),
    };

    Ok(file.merged_with(cli_overrides))
}

fn load_dictionary(args: &Args, file_config: &FileConfig) -> Result<Dictionary, SolverError> {
    let path = args
        .dictionary
        .clone()
        .or_else(|| file_config.dictionary.clone().map(Into::into));

    match path {
        Some(path) => {
            debug!("loading dictionary from {}", path.display());
            Dictionary::load_wordlist(&path)
        }
        None => {
            warn!(
                "no --dictionary given, using the small embedded default wordlist; \
                 results may be weak for long or unusual ciphertexts"
            );
            Ok(Dictionary::embedded_default().clone())
        }
    }
}

fn read_stdin() -> Result<String, SolverError> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn run_batch(
    batch_path: &Path,
    dictionary: &Dictionary,
    config: &SolveConfig,
    format: OutputFormat,
    jobs: Option<usize>,
) -> Result<(), SolverError> {
    use rayon::prelude::*;

    let text = std::fs::read_to_string(batch_path)?;
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    debug!("batch mode: {} ciphertext(s) from {}", lines.len(), batch_path.display());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.unwrap_or(0))
        .build()
        .map_err(|e| SolverError::Internal(format!("failed to build thread pool: {e}")))?;

    let results: Vec<(String, Result<Vec<Solution>, SolverError>)> = pool.install(|| {
        lines
            .par_iter()
            .map(|line| ((*line).to_string(), solve(line, dictionary, config)))
            .collect()
    });

    for (ciphertext, result) in results {
        match result {
            Ok(solutions) => print_solutions(&ciphertext, &solutions, format),
            Err(err) => eprintln!("{}: {ciphertext:?}: {err}", "error".red().bold()),
        }
    }

    Ok(())
}

fn print_solutions(ciphertext: &str, solutions: &[Solution], format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(solutions) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("{}: failed to serialize solutions: {e}", "error".red().bold()),
        },
        OutputFormat::Text => {
            if solutions.is_empty() {
                println!("{} no solution found for {:?}", "--".dimmed(), ciphertext);
                return;
            }
            for solution in solutions {
                println!("{}", solution.plaintext.green().bold());
                let cipher: Vec<String> = solution
                    .cipher
                    .iter()
                    .map(|(c, p)| format!("{c}->{p}"))
                    .collect();
                println!("  cipher: {}", cipher.join(" "));
                println!("  mean_frequency: {:.3}", solution.mean_frequency);
            }
        }
    }
}
