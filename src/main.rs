#![allow(non_snake_case)]

use collablab::client::{self, config::Config};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(client::App);
}
