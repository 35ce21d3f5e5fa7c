//! snapkv demo server.
//!
//! This binary runs a TCP server that accepts store commands from clients.
//! It is a thin binding surface over the library; the store itself knows
//! nothing about it.

use bytes::BytesMut;
use std::sync::Arc;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    signal,
};

use snapkv::{buffer_to_array, Command, Store, StoreConfig};

/// Server configuration with defaults.
struct ServerConfig {
    host: String,
    port: u16,
    snapshot_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            snapshot_path: "snapshot.json".to_string(),
        }
    }
}

/// Entry point for the snapkv server.
#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::default();

    let store_config = StoreConfig::new()
        .snapshot_path(&config.snapshot_path)
        .build();

    // Create the shared store
    let store = Arc::new(Store::new(store_config));

    // Warm-start from an existing snapshot, if there is one
    let snapshot_path = store.snapshot_path();
    if snapshot_path.exists() {
        if let Err(e) = store.load_snapshot(&snapshot_path) {
            eprintln!("Ignoring unreadable snapshot: {}", e);
        }
    }

    // Bind the listener
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;

    println!("snapkv server listening on {}", addr);
    println!("Snapshot path: {}", snapshot_path.display());

    // Save a final snapshot on shutdown
    let shutdown_store = Arc::clone(&store);
    tokio::spawn(async move {
        if let Ok(()) = signal::ctrl_c().await {
            println!("\nShutting down...");
            let stats = shutdown_store.stats();
            println!(
                "Final stats: hits={}, misses={}, size={}",
                stats.hits, stats.misses, stats.size
            );
            let _ = shutdown_store.save_snapshot(shutdown_store.snapshot_path());
            std::process::exit(0);
        }
    });

    // Accept connections in a loop
    loop {
        match listener.accept().await {
            Ok((socket, addr)) => {
                println!("Connection from {}", addr);

                // Clone the store handle for this connection
                let store = Arc::clone(&store);

                // Spawn a task to handle this connection
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(socket, store).await {
                        eprintln!("Connection error: {}", e);
                    }
                });
            }
            Err(e) => {
                eprintln!("Failed to accept connection: {}", e);
            }
        }
    }
}

/// Handle a single client connection.
async fn handle_connection(
    mut socket: TcpStream,
    store: Arc<Store>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut buf = BytesMut::with_capacity(1024);

    // Read the request
    let n = socket.read_buf(&mut buf).await?;
    if n == 0 {
        return Ok(()); // Connection closed
    }

    // Parse the command
    let attrs = buffer_to_array(&mut buf);

    if attrs.is_empty() {
        socket.write_all(b"ERR empty command").await?;
        return Ok(());
    }

    let command = Command::get(&attrs[0]);

    // Process the command
    let response = process_command(command, &attrs, &store);

    // Send the response
    socket.write_all(response.as_bytes()).await?;

    Ok(())
}

/// Process a store command and return the response.
fn process_command(command: Command, attrs: &[String], store: &Store) -> String {
    match command {
        Command::Get => {
            if attrs.len() < 2 {
                return "ERR missing key argument".to_string();
            }

            // Empty string means not found (binding contract)
            store.get(&attrs[1])
        }

        Command::Set => {
            if attrs.len() < 3 {
                return "ERR missing key or value argument".to_string();
            }

            let key = &attrs[1];
            let value = &attrs[2];
            let ttl: i64 = match attrs.get(3) {
                Some(raw) => match raw.parse() {
                    Ok(n) => n,
                    Err(_) => return format!("ERR invalid ttl '{}'", raw),
                },
                None => 0,
            };

            let existed = store.contains(key);
            store.set(key.clone(), value.clone(), ttl);

            if existed {
                "r Ok".to_string() // Replaced
            } else {
                "Ok".to_string() // New key
            }
        }

        Command::Delete => {
            if attrs.len() < 2 {
                return "ERR missing key argument".to_string();
            }

            if store.delete(&attrs[1]) {
                "Ok".to_string()
            } else {
                String::new() // Not found
            }
        }

        Command::Save => {
            let path = attrs
                .get(1)
                .map(std::path::PathBuf::from)
                .unwrap_or_else(|| store.snapshot_path());
            match store.save_snapshot(&path) {
                Ok(()) => format!("Snapshot saved to {}", path.display()),
                Err(e) => format!("ERR {}", e),
            }
        }

        Command::Load => {
            let path = attrs
                .get(1)
                .map(std::path::PathBuf::from)
                .unwrap_or_else(|| store.snapshot_path());
            match store.load_snapshot(&path) {
                Ok(()) => format!("Snapshot loaded from {}", path.display()),
                Err(e) => format!("ERR {}", e),
            }
        }

        Command::Ping => "PONG".to_string(),

        Command::Stats => {
            let stats = store.stats();
            format!(
                "hits:{} misses:{} size:{} hit_rate:{:.1}% saves:{} loads:{}",
                stats.hits,
                stats.misses,
                stats.size,
                stats.hit_rate,
                stats.snapshot_saves,
                stats.snapshot_loads
            )
        }

        Command::Invalid => {
            format!(
                "ERR unknown command '{}'",
                attrs.first().unwrap_or(&String::new())
            )
        }
    }
}
