//! Generate command - write every built-in family to disk.

use astgen_driver::{generate_all, GeneratorConfig};

pub fn run(config: &GeneratorConfig) -> miette::Result<()> {
    let written = generate_all(config).map_err(|e| miette::miette!("{}", e))?;

    let mut skipped = 0;
    for entry in &written {
        println!("Generated {}: {}", entry.family, entry.path.display());
        super::report_diagnostics(entry.family.name(), &entry.diagnostics);
        skipped += entry.diagnostics.len();
    }

    println!(
        "\n{} families, {} skipped lines",
        written.len(),
        skipped
    );

    Ok(())
}
