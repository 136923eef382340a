#[derive(serde::Deserialize)]
pub struct Config {
    pub web: WebConfig,
    pub greeting: GreetingConfig,
}

#[derive(serde::Deserialize)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

impl WebConfig {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(serde::Deserialize)]
pub struct GreetingConfig {
    pub default_message: String,
}

pub fn get_config() -> Config {
    config::Config::builder()
        .add_source(config::File::new("config.yaml", config::FileFormat::Yaml))
        .build()
        .expect("failed to read config.yaml.")
        .try_deserialize::<Config>()
        .expect("failed to deserialize config.yaml.")
}
