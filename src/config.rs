use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        // PGSQL_URL is required with no default; its shape is not checked
        // here, a bad value surfaces as a connection error on first use.
        let database_url = env::var("PGSQL_URL").expect("PGSQL_URL must be set");
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Config {
            database_url,
            bind_addr,
        }
    }
}
