fn main() -> anyhow::Result<()> {
    mriscope::run()?;
    Ok(())
}
