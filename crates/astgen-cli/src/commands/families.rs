//! Families command - list the built-in families.

use astgen_driver::{Family, GeneratorConfig};

pub fn run(config: &GeneratorConfig) -> miette::Result<()> {
    println!("Built-in families:");
    for family in Family::ALL {
        let request = family.request();
        println!(
            "  {:6} {:5} {:2} variants  -> {}",
            family.name(),
            request.base_name,
            request.variants.len(),
            config.root.join(family.default_path()).display()
        );
    }

    Ok(())
}
