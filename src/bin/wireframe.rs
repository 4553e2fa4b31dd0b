use clap::Parser;

/// Render the sample analytics dashboard to `unicorn_dashboard_wireframe.png` next to this
/// executable.
#[derive(Parser, Debug)]
#[command(name = "wireframe", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let path = wireframe::compose()?;
    println!("Wireframe saved to: {}", path.display());
    Ok(())
}
