use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    glance_core::init()?;

    let config = glance_core::Config::load()?;
    let app = match glance_ui::App::new(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Refusing to start: {}", e);
            return Ok(());
        }
    };
    app.initialize()?;

    tracing::info!("Glance started");

    println!("Glance - home panel widgets");
    println!("Configuration:");
    println!("  City: {}", app.config().city);
    println!("  Timezone: {}", app.config().timezone);
    println!(
        "  Coordinates: {}, {}",
        app.config().latitude,
        app.config().longitude
    );
    println!("Press Ctrl-C to stop.");

    tokio::signal::ctrl_c().await?;

    // Graceful shutdown
    app.shutdown().await;

    println!("\nFinal panel contents:");
    for (id, content) in app.panels().snapshot() {
        println!("  {}: {}", id, content);
    }

    Ok(())
}
