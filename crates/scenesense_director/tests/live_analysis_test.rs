use scenesense_core::{AnalysisRequest, Credentials, Mode, SceneSenseConfig};
use scenesense_director::SceneDirector;

const SCENE: &str = "INT. HOSPITAL CORRIDOR - NIGHT\nDr. Lin waits outside the operating room. The lights flicker.";

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_director_analysis() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = SceneSenseConfig::bundled()?;
    let director = SceneDirector::from_config(&config, &Credentials::from_env());

    let request = AnalysisRequest::builder()
        .scene_text(SCENE)
        .mode(Mode::Director)
        .model("llama-3.1-8b-instant")
        .build()?;

    let result = director.analyze(&request).await?;

    let intensity = result.intensity().unwrap_or(5);
    assert!((1..=10).contains(&intensity));
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_risk_analysis_never_fails() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = SceneSenseConfig::bundled()?;
    let director = SceneDirector::from_config(&config, &Credentials::from_env());

    let risk = director.risk_analyzer(config.risk()).analyze(SCENE).await;

    assert!((0.0..=1.0).contains(risk.confidence()));
    println!("{}", serde_json::to_string_pretty(&risk)?);

    Ok(())
}
