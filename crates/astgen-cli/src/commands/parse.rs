//! Parse command - show how one arrow expression is read.

use astgen_dsl::parse_arrow;

pub fn run(line: &str) -> miette::Result<()> {
    let desc = parse_arrow(line).map_err(|e| miette::miette!("{}", e))?;

    println!("Name: {}", desc.name);
    if !desc.has_fields {
        println!("Unit variant (no data holder)");
        return Ok(());
    }

    println!("Fields ({}):", desc.fields.len());
    for field in &desc.fields {
        match &field.name {
            Some(name) => println!("  {:16} {}", name, field.ty),
            None => println!("  {:16} {}", "_", field.ty),
        }
    }
    println!("\nCanonical: {}", desc);

    Ok(())
}
