use scenesense_core::{Credentials, GenerateRequest, Message, SceneSenseConfig};
use scenesense_interface::ChatDriver;
use scenesense_models::GroqDriver;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_groq_basic_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = SceneSenseConfig::bundled()?;
    let driver = GroqDriver::from_credentials(&Credentials::from_env(), &config)?;

    let request = GenerateRequest::builder()
        .messages(vec![
            Message::system("Reply ONLY with the word OK."),
            Message::user("Test"),
        ])
        .model("llama-3.1-8b-instant")
        .temperature(0.0f32)
        .max_tokens(5u32)
        .build()?;

    let response = driver.generate(&request).await?;

    assert!(!response.text().is_empty(), "Should receive non-empty response");
    println!("Response: {}", response.text());

    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_groq_rejects_bad_key() -> Result<(), Box<dyn std::error::Error>> {
    let config = SceneSenseConfig::bundled()?;
    let driver = GroqDriver::new("gsk_invalid", config.providers().groq());

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("Hi")])
        .model("llama-3.1-8b-instant")
        .max_tokens(5u32)
        .build()?;

    let err = driver.generate(&request).await.unwrap_err();
    assert!(err.to_string().contains("401"), "unexpected error: {}", err);

    Ok(())
}
