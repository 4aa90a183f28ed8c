use anyhow::Result;
use retro_snake::audio::TerminalBell;
use retro_snake::game::GameConfig;
use retro_snake::modes::HumanMode;
use retro_snake::storage::HighScoreStore;

/// Where the single persisted integer lives
const HIGH_SCORE_FILE: &str = "highscore.txt";

#[tokio::main]
async fn main() -> Result<()> {
    let config = GameConfig::default();
    let store = HighScoreStore::new(HIGH_SCORE_FILE);

    let mut mode = HumanMode::new(config, store, TerminalBell);
    mode.run().await?;

    Ok(())
}
