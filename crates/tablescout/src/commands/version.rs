pub fn run() -> anyhow::Result<()> {
    println!("tablescout {}", env!("CARGO_PKG_VERSION"));
    println!("TF-IDF keyword search over table metadata");
    Ok(())
}
