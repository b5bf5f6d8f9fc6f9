use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use msuvol::report::Summary;
use msuvol::{any_failed, EditOutcome, EditResult, Editor, GainFactor};
use rayon::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(name = "msuvol")]
#[command(author, version)]
#[command(about = "Batch edit the volume of MSU-1 .pcm files. Exits 0 if every file \
was edited, 1 if any file failed validation or none were found.")]
struct Args {
    /// Volume percentage relative to the current volume (50 halves it,
    /// 200 doubles it). Prompted for if omitted.
    #[arg(short, long)]
    percentage: Option<u32>,

    /// A .pcm file, or a directory whose .pcm files are edited
    /// (non-recursive). Defaults to the current directory.
    #[arg(short, long)]
    target: Option<PathBuf>,

    /// Output report file (.csv, .json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of parallel workers (default: number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Skip the advisory free-space check before writing scratch files
    #[arg(long)]
    no_space_check: bool,

    /// Only show summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let target = args.target.clone().unwrap_or_else(|| {
        std::env::current_dir().unwrap_or_else(|e| {
            eprintln!("Cannot determine current directory: {}", e);
            std::process::exit(1);
        })
    });

    let files = collect_pcm_files(&target);
    if files.is_empty() {
        eprintln!(
            "No MSU files in the given target, or the target does not have a .pcm extension."
        );
        std::process::exit(1);
    }

    let gain = match args.percentage {
        Some(p) => match GainFactor::from_percentage(p) {
            Some(g) => g,
            None => {
                eprintln!("Percentage must be a number larger than 0.");
                std::process::exit(1);
            }
        },
        None => prompt_percentage(),
    };

    // Set up thread pool
    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    if !args.quiet {
        eprintln!("\x1b[1mmsuvol - MSU-1 Volume Editor\x1b[0m");
        eprintln!("{}", "─".repeat(70));
        eprintln!("Setting {} file(s) to {}\n", files.len(), gain);
    }

    // Set up progress bar
    let pb = if !args.quiet && files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let editor = Editor::new(gain).with_space_check(!args.no_space_check);

    // Edit files in parallel; each file's scratch-and-rename is private
    // to its own worker, so outcomes match a sequential run.
    let results: Vec<EditResult> = files
        .par_iter()
        .map(|path| {
            let result = editor.edit(path);
            if let Some(ref pb) = pb {
                pb.inc(1);
                pb.set_message(result.file_name.clone());
            }
            result
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    // Print results
    if !args.quiet {
        for r in &results {
            let color = match r.outcome {
                EditOutcome::Edited => "\x1b[32m",           // Green
                EditOutcome::ValidationFailed => "\x1b[31m", // Red
                EditOutcome::Skipped => "\x1b[33m",          // Yellow
            };
            let reset = "\x1b[0m";

            match r.outcome {
                EditOutcome::Edited => println!(
                    "{}{:<10}{} {:>8} samples  {}",
                    color,
                    format!("[{}]", r.outcome),
                    reset,
                    r.samples_scaled,
                    r.file_name
                ),
                _ => println!(
                    "{}{:<10}{} {:>8}          {}  ({})",
                    color,
                    format!("[{}]", r.outcome),
                    reset,
                    "-",
                    r.file_name,
                    r.detail.as_deref().unwrap_or("unknown")
                ),
            }
        }
    }

    // Summary
    let summary = Summary::from_results(&results);
    if !args.quiet {
        eprintln!("\n{}", "─".repeat(70));
        eprintln!("\x1b[1mSummary:\x1b[0m");
        eprintln!("  \x1b[32m✓ Edited:\x1b[0m  {}", summary.edited);
        eprintln!("  \x1b[31m✗ Invalid:\x1b[0m {}", summary.invalid);
        if summary.skipped > 0 {
            eprintln!("  \x1b[33mSkipped:\x1b[0m   {}", summary.skipped);
        }
    }

    // Generate report
    if let Some(ref output_path) = args.output {
        if let Err(e) = msuvol::report::generate(output_path, &results) {
            eprintln!("Failed to write report: {}", e);
            std::process::exit(1);
        }
        if !args.quiet {
            eprintln!("\n\x1b[32mReport saved: {}\x1b[0m", output_path.display());
        }
    }

    // Validation failures fail the run; skips are advisory.
    if any_failed(&results) {
        std::process::exit(1);
    }
}

/// Collect the .pcm files a target names: either the file itself, or the
/// directory's .pcm entries one level deep (non-recursive, to match the
/// original tool's behavior).
fn collect_pcm_files(target: &PathBuf) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = if target.is_dir() {
        WalkDir::new(target)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && has_pcm_extension(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect()
    } else if has_pcm_extension(target) {
        vec![target.clone()]
    } else {
        vec![]
    };

    // Deterministic processing order regardless of directory listing order
    files.sort();
    files
}

fn has_pcm_extension(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pcm"))
        .unwrap_or(false)
}

/// Ask for the volume percentage on stdin, re-asking until the input is a
/// positive integer.
fn prompt_percentage() -> GainFactor {
    loop {
        eprint!("Enter the volume percentage to set the file(s) to: ");
        io::stderr().flush().ok();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() || input.is_empty() {
            // stdin closed; nothing sensible to do without a percentage
            eprintln!("\nNo percentage given. Exiting ...");
            std::process::exit(1);
        }

        match input.trim().parse::<u32>().ok().and_then(GainFactor::from_percentage) {
            Some(gain) => return gain,
            None => eprintln!("Please enter a number larger than 0."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // ==========================================================================
    // FILE DISCOVERY TESTS
    // ==========================================================================
    //
    // Discovery is deliberately non-recursive: a directory target edits
    // only its direct .pcm children. Album folders nest cover art and
    // alternate mixes in subdirectories, and touching those uninvited
    // would be a nasty surprise.
    // ==========================================================================

    #[test]
    fn test_directory_discovery_non_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.pcm"), b"MSU1").unwrap();
        fs::write(dir.path().join("b.pcm"), b"MSU1").unwrap();
        fs::write(dir.path().join("notes.txt"), b"hi").unwrap();

        let sub = dir.path().join("alt");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("c.pcm"), b"MSU1").unwrap();

        let files = collect_pcm_files(&dir.path().to_path_buf());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["a.pcm", "b.pcm"]);
    }

    #[test]
    fn test_single_file_target() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("track.pcm");
        fs::write(&file, b"MSU1").unwrap();

        assert_eq!(collect_pcm_files(&file), vec![file]);
    }

    #[test]
    fn test_non_pcm_file_target_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("track.wav");
        fs::write(&file, b"RIFF").unwrap();

        assert!(collect_pcm_files(&file).is_empty());
    }

    #[test]
    fn test_extension_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("TRACK.PCM");
        fs::write(&file, b"MSU1").unwrap();

        assert_eq!(collect_pcm_files(&file), vec![file]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_pcm_files(&dir.path().to_path_buf()).is_empty());
    }

    #[test]
    fn test_discovery_order_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zz.pcm", "aa.pcm", "mm.pcm"] {
            fs::write(dir.path().join(name), b"MSU1").unwrap();
        }

        let files = collect_pcm_files(&dir.path().to_path_buf());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["aa.pcm", "mm.pcm", "zz.pcm"]);
    }
}
