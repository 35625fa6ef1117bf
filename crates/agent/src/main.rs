use std::io::Write;

use stockroom_agent::{ActionResolver, ErpClient, LlmConfig, LlmResolver, render};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init_compact();

    let client = ErpClient::from_env();
    let resolver = LlmResolver::new(LlmConfig::from_env());

    println!("Stockroom assistant. Ask about stock, orders, or purchase orders.");
    println!("Type 'exit' to leave.");
    if !client.health().await {
        eprintln!("Warning: the ERP API is not reachable; start stockroom-api first.");
    }

    let stdin = std::io::stdin();
    loop {
        print!(">> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line.to_lowercase().as_str(), "exit" | "quit" | "q") {
            println!("Goodbye!");
            break;
        }

        let resolved = match resolver.resolve(line).await {
            Ok(resolved) => resolved,
            Err(err) => {
                eprintln!("Could not work out an action: {err}");
                continue;
            }
        };
        tracing::debug!(action = %resolved.action, "resolved");

        match client.dispatch(&resolved).await {
            Ok(envelope) => println!("{}", render::summarize(&resolved.action, &envelope)),
            Err(err) => eprintln!("Request failed: {err}"),
        }
    }

    Ok(())
}
