use scenesense_core::{Credentials, SceneSenseConfig};
use scenesense_interface::{ChatDriver, ProviderKind};
use scenesense_models::{GroqDriver, QubridDriver};

#[test]
fn test_groq_requires_its_own_key() {
    let config = SceneSenseConfig::bundled().unwrap();
    let creds = Credentials::new(None, Some("qubrid-key".to_string()));

    let err = GroqDriver::from_credentials(&creds, &config).unwrap_err();
    assert!(err.message.contains("GROQ_API_KEY not found"));
    assert!(QubridDriver::from_credentials(&creds, &config).is_ok());
}

#[test]
fn test_qubrid_requires_its_own_key() {
    let config = SceneSenseConfig::bundled().unwrap();
    let creds = Credentials::new(Some("groq-key".to_string()), Some("   ".to_string()));

    let err = QubridDriver::from_credentials(&creds, &config).unwrap_err();
    assert!(err.message.contains("QUBRID_API_KEY not found"));
}

#[test]
fn test_drivers_report_their_provider() {
    let config = SceneSenseConfig::bundled().unwrap();
    let groq = GroqDriver::new("k", config.providers().groq());
    let qubrid = QubridDriver::new("k", config.providers().qubrid());

    assert_eq!(groq.provider(), ProviderKind::Groq);
    assert_eq!(qubrid.provider_name(), "qubrid");
    assert_eq!(qubrid.upstream_model(), "meta-llama/Llama-3.3-70B-Instruct");
}

#[test]
fn test_debug_output_hides_api_key() {
    let config = SceneSenseConfig::bundled().unwrap();
    let groq = GroqDriver::new("gsk_super_secret", config.providers().groq());
    assert!(!format!("{:?}", groq).contains("gsk_super_secret"));
}
