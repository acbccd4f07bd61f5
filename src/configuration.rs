use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub scraper: ScraperSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct ScraperSettings {
    pub base_url: String,
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub page_size: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub request_timeout_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub politeness_delay_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_pages: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub full_page_threshold: usize,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let settings = config::Config::builder()
        .add_source(config::File::from(base_path.join("configuration.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
