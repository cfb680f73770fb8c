use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    notionflow::app::run().await
}
