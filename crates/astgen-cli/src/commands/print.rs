//! Print command - show one family's generated module.

use astgen_driver::{generate_family, Family, GeneratorConfig};

pub fn run(family: Family, config: &GeneratorConfig) -> miette::Result<()> {
    let generated = generate_family(family, config);
    super::report_diagnostics(family.name(), &generated.diagnostics);

    print!("{}", generated.text);
    Ok(())
}
