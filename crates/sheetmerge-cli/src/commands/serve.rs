//! Serve command - run the HTTP upload service.

use colored::Colorize;

use crate::server::app;

/// Port used when neither --port nor $PORT is given.
const DEFAULT_PORT: u16 = 5000;

pub fn run(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let port = port
        .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(DEFAULT_PORT);

    println!();
    println!(
        "{} {}",
        "Starting sheetmerge service on".cyan().bold(),
        format!("http://0.0.0.0:{}", port).white().bold()
    );
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
