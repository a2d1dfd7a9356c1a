//! `ping` command handler.

use scenesense::{Credentials, SceneDirector, SceneSenseConfig, SceneSenseResult};

/// Send the fixed health check to the backend serving `model` and print its reply.
pub async fn run_ping(
    config: &SceneSenseConfig,
    credentials: &Credentials,
    model: &str,
) -> SceneSenseResult<()> {
    let director = SceneDirector::from_config(config, credentials);
    let provider = director.route(model);

    let reply = director.ping(model).await?;
    println!("{} ({}): {}", model, provider, reply.trim());
    Ok(())
}
