use crate::camara::DEFAULT_BASE_URL;

/// Application configuration.
/// In debug builds the API base URL can be overridden through a .env file
/// or the environment; release builds always target the production API.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            use tracing::info;

            if dotenvy::dotenv().is_ok() {
                info!("config: loaded .env file");
            }

            let api_base_url = std::env::var("DEPUTADOS_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
            if api_base_url != DEFAULT_BASE_URL {
                info!("config: using API base URL override {}", api_base_url);
            }

            Self { api_base_url }
        }

        #[cfg(not(debug_assertions))]
        {
            Self {
                api_base_url: DEFAULT_BASE_URL.to_string(),
            }
        }
    }
}
