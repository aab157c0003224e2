#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = assessment_rust::run().await {
        eprintln!("assessment-rust fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
