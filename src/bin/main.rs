use smartspend::config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    info!("SmartSpend categorizer starting");

    let config = AppConfig::from_env();
    let orchestrator = config.build_orchestrator();

    let description = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let description = if description.trim().is_empty() {
        "Dinner at an Italian restaurant".to_string()
    } else {
        description
    };

    info!(description = %description, "Categorizing expense");

    match orchestrator.categorize(&description).await {
        Ok(result) => {
            println!("\n=== CATEGORIZATION RESULT ===");
            println!("Description: {}", description);
            println!("Category: {}", result.category);
            println!("Source: {}", result.source);
            println!("{}", result.category.friendly_message());
            Ok(())
        }
        Err(e) => {
            eprintln!("Categorization failed: {}", e);
            Err(Box::new(e) as Box<dyn std::error::Error>)
        }
    }
}
