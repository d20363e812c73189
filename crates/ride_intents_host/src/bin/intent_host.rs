use ride_intents_core::responder::IntentResponder;
use ride_intents_host::adapters::completion::IntentHost;
use ride_intents_host::config::responder_config_from_env;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = responder_config_from_env()?;
    let host = IntentHost::new(IntentResponder::new(config));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let Some(reply) = host.reply_for_line(&line).await else {
            continue;
        };

        let mut encoded = serde_json::to_vec(&reply)?;
        encoded.push(b'\n');
        stdout.write_all(&encoded).await?;
        stdout.flush().await?;
    }

    Ok(())
}
