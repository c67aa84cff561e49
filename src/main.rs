#[tokio::main(flavor = "current_thread")]
async fn main() {
    telegram_reminder::start_reminder_job().await;
}
