use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_url: String,
    pub mongo_database: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            mongo_url: lookup("MONGO_URL")
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            mongo_database: lookup("MONGO_DATABASE").unwrap_or_else(|| "restaurant".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
