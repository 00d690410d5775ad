mod bootstrap;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap::run().await {
        eprintln!("captionbot: {err:#}");
        std::process::exit(1);
    }
}
