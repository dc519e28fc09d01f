//! Check command - find malformed arrow expressions in request files.

use astgen_driver::{check_request, load_request};
use std::path::Path;

pub fn run(files: &[std::path::PathBuf]) -> miette::Result<()> {
    if files.is_empty() {
        return Err(miette::miette!("No files specified"));
    }

    let mut total_errors = 0;

    for file in files {
        total_errors += check_file(file)?;
    }

    println!();
    if total_errors > 0 {
        println!("Check complete: {} malformed line(s)", total_errors);
        Err(miette::miette!("{} errors found", total_errors))
    } else {
        println!("Check complete: no issues found");
        Ok(())
    }
}

fn check_file(file: &Path) -> miette::Result<usize> {
    let request = load_request(file).map_err(|e| miette::miette!("{}", e))?;

    println!("Checking: {}", file.display());

    let diagnostics = check_request(&request);
    for diagnostic in &diagnostics {
        println!("  error: {}", diagnostic);
    }
    let errors = diagnostics.len();

    if errors == 0 {
        println!("  ok");
    }

    Ok(errors)
}
