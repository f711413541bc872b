use scrivener_core::{GenerateRequest, Message, ResponseFormat};
use scrivener_interface::ScrivenerDriver;
use scrivener_models::GroqDriver;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_groq_basic_generation() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let driver = GroqDriver::new(GroqDriver::DEFAULT_MODEL.to_string())?;

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("Say hello in three words.")])
        .max_tokens(Some(64))
        .build()?;

    let response = driver.generate(&request).await?;
    assert!(!response.text().trim().is_empty(), "Should receive non-empty response");
    println!("Response: {}", response.text());

    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_groq_json_object_mode() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let driver = GroqDriver::new(GroqDriver::DEFAULT_MODEL.to_string())?;

    let request = GenerateRequest::builder()
        .messages(vec![
            Message::system("Reply with a JSON object of the form {\"answer\": string}."),
            Message::user("What color is the sky?"),
        ])
        .response_format(ResponseFormat::JsonObject)
        .build()?;

    let response = driver.generate(&request).await?;
    let value: serde_json::Value = serde_json::from_str(&response.text())?;
    assert!(value.get("answer").is_some());

    Ok(())
}
