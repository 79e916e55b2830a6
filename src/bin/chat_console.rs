use rulebot::config::ServerConfig;
use rulebot::kernel::Conversation;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Hosts a single conversation on stdin/stdout, one line per utterance.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ServerConfig::from_env()?;
    let mut conversation = Conversation::new(config.bot);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(b"Say hello, ask who I am, or type Ctrl+D to leave.\n")
        .await?;

    while let Some(line) = lines.next_line().await? {
        let reply = conversation.step(&line);
        let out = format!(
            "[{} {:.2}] {}\n",
            reply.intent, reply.confidence, reply.response
        );
        stdout.write_all(out.as_bytes()).await?;
        stdout.flush().await?;
    }

    let summary = conversation.summary();
    tracing::info!(turns = summary.turns, answered = summary.answered, "Console session ended");
    Ok(())
}
