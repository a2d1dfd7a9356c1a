//! `risk` command handler.

use super::RiskArgs;
use scenesense::{Credentials, JsonError, SceneDirector, SceneSenseConfig, SceneSenseResult};

/// Assess production risk and print the result as pretty JSON.
///
/// Model failures are reported inside the result, not as an error.
pub async fn run_risk(
    config: &SceneSenseConfig,
    credentials: &Credentials,
    args: RiskArgs,
) -> SceneSenseResult<()> {
    let scene_text = args.source.read().await?;

    let director = SceneDirector::from_config(config, credentials);
    let result = director
        .risk_analyzer(config.risk())
        .analyze(&scene_text)
        .await;

    let rendered =
        serde_json::to_string_pretty(&result).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", rendered);
    Ok(())
}
