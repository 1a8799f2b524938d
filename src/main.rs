#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    marketing_site::backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    marketing_site::frontend::run();
}
