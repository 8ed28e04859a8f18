use std::env;
use std::net::IpAddr;
use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 8000;

/// The profile queried on one upstream platform.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub handle: String,
    /// Base URL without trailing slash.
    pub api_base: String,
}

impl Platform {
    pub fn new(handle: &str, api_base: &str) -> Self {
        Self {
            handle: handle.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn from_env(handle_var: &str, api_var: &str, handle: &str, api_base: &str) -> Self {
        let handle = env::var(handle_var).unwrap_or_else(|_| handle.to_string());
        let api_base = env::var(api_var).unwrap_or_else(|_| api_base.to_string());
        Self::new(&handle, &api_base)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub address: IpAddr,
    pub port: u16,
    pub upstream_timeout: Option<Duration>,
    pub codeforces: Platform,
    pub codechef: Platform,
    pub leetcode: Platform,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            upstream_timeout: None,
            codeforces: Platform::new("Prabhat_007", "https://codeforces.com/api"),
            codechef: Platform::new("prabhats_007", "https://codechef-api.vercel.app"),
            leetcode: Platform::new("Prabhat_007", "https://alfa-leetcode-api.onrender.com"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let defaults = Self::default();

        let address = match env::var("CPSTATS_ADDRESS") {
            Ok(address) => address
                .parse::<IpAddr>()
                .context("CPSTATS_ADDRESS is not a valid IP address")?,
            Err(_) => defaults.address,
        };

        let port = match env::var("CPSTATS_PORT") {
            Ok(port) => port.parse::<u16>().context("CPSTATS_PORT is not a valid port")?,
            Err(_) => defaults.port,
        };

        let upstream_timeout = match env::var("CPSTATS_UPSTREAM_TIMEOUT_SECS") {
            Ok(secs) => Some(Duration::from_secs(
                secs.parse::<u64>()
                    .context("CPSTATS_UPSTREAM_TIMEOUT_SECS is not a whole number of seconds")?,
            )),
            Err(_) => None,
        };

        Ok(Self {
            address,
            port,
            upstream_timeout,
            codeforces: Platform::from_env(
                "CODEFORCES_HANDLE",
                "CODEFORCES_API",
                &defaults.codeforces.handle,
                &defaults.codeforces.api_base,
            ),
            codechef: Platform::from_env(
                "CODECHEF_HANDLE",
                "CODECHEF_API",
                &defaults.codechef.handle,
                &defaults.codechef.api_base,
            ),
            leetcode: Platform::from_env(
                "LEETCODE_HANDLE",
                "LEETCODE_API",
                &defaults.leetcode.handle,
                &defaults.leetcode.api_base,
            ),
        })
    }

    /// Points every platform at the same base URL, keeping the handles.
    #[cfg(test)]
    pub fn with_api_base(base: &str) -> Self {
        let defaults = Self::default();
        Self {
            codeforces: Platform::new(&defaults.codeforces.handle, base),
            codechef: Platform::new(&defaults.codechef.handle, base),
            leetcode: Platform::new(&defaults.leetcode.handle, base),
            ..defaults
        }
    }
}
