use std::path::Path;

pub fn run(catalog: Option<&Path>) -> anyhow::Result<()> {
    let index = super::load_index(catalog)?;
    println!("{}", serde_json::to_string_pretty(&index.stats())?);
    Ok(())
}
