//! `analyze` command handler.

use super::AnalyzeArgs;
use scenesense::{
    AnalysisRequest, Credentials, DirectorError, DirectorErrorKind, JsonError, Mode, SceneDirector,
    SceneSenseConfig, SceneSenseResult,
};
use tracing::info;

/// Analyze a scene and print the result as pretty JSON.
pub async fn run_analyze(
    config: &SceneSenseConfig,
    credentials: &Credentials,
    args: AnalyzeArgs,
) -> SceneSenseResult<()> {
    let scene_text = args.source.read().await?;

    let request = AnalysisRequest::builder()
        .scene_text(scene_text)
        .mode(Mode::from_str_lenient(&args.mode))
        .model(args.model)
        .temperature(args.temperature.unwrap_or(*config.analysis().temperature()))
        .max_tokens(args.max_tokens.unwrap_or(*config.analysis().max_tokens()))
        .build()
        .map_err(|e| DirectorError::new(DirectorErrorKind::InvalidRequest(e.to_string())))?;

    info!(model = %request.model(), mode = %request.mode(), "Analyzing scene");

    let director = SceneDirector::from_config(config, credentials);
    let result = director.analyze(&request).await?;

    let rendered =
        serde_json::to_string_pretty(&result).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", rendered);
    Ok(())
}
