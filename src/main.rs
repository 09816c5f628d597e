fn main() -> anyhow::Result<()> {
    tokenflow::run()?;
    Ok(())
}
