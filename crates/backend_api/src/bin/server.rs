use backend_api::run_server;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment variables with sane defaults
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .unwrap_or(5000);

    println!("Spending Forecast API Server");
    println!("============================");
    println!("Listening on: {}:{}", host, port);
    println!("Environment overrides: HOST, PORT, RUST_LOG");
    println!();

    // Start the server
    run_server(&host, port).await?;

    Ok(())
}
