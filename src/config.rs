use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// Pretend round-trip before a login takes effect.
    pub login_delay: Duration,
    /// Pretend round-trip before a contact message is confirmed.
    pub contact_delay: Duration,
    pub session_idle: time::Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            login_delay: Duration::from_millis(1000),
            contact_delay: Duration::from_millis(2000),
            session_idle: time::Duration::minutes(5),
        }
    }
}

impl Config {
    /// Reads `FOLIOCHAT_*` variables, `.env` included. Unset ones keep their
    /// defaults.
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();

        let mut config = Config::default();
        if let Some(addr) = var::<SocketAddr>("FOLIOCHAT_ADDR")? {
            config.addr = addr;
        }
        if let Some(ms) = var::<u64>("FOLIOCHAT_LOGIN_DELAY_MS")? {
            config.login_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = var::<u64>("FOLIOCHAT_CONTACT_DELAY_MS")? {
            config.contact_delay = Duration::from_millis(ms);
        }
        if let Some(minutes) = var::<i64>("FOLIOCHAT_SESSION_IDLE_MINUTES")? {
            config.session_idle = time::Duration::minutes(minutes);
        }
        Ok(config)
    }

    /// No artificial waiting.
    pub fn instant() -> Config {
        Config {
            login_delay: Duration::ZERO,
            contact_delay: Duration::ZERO,
            ..Config::default()
        }
    }
}

fn var<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match dotenv::var(key) {
        Ok(value) => value
            .parse()
            .map(Some)
            .with_context(|| format!("{key}={value:?} is not valid")),
        Err(_) => Ok(None),
    }
}
