use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("ftc version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
