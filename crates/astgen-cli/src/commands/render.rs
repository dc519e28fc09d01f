//! Render command - generate a module from a JSON request file.

use astgen_driver::{generate, load_request, write_output, GeneratorConfig};
use std::path::Path;

pub fn run(file: &Path, output: Option<&Path>, config: &GeneratorConfig) -> miette::Result<()> {
    let request = load_request(file).map_err(|e| miette::miette!("{}", e))?;
    let generated = generate(&request, config);

    super::report_diagnostics(&file.display().to_string(), &generated.diagnostics);

    match output {
        Some(path) => {
            write_output(path, &generated.text).map_err(|e| miette::miette!("{}", e))?;
            eprintln!("Generated {}: {}", request.base_name, path.display());
        }
        None => print!("{}", generated.text),
    }

    Ok(())
}
