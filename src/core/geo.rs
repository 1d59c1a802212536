//! "Where am I?" for a terminal: the one-shot geolocation used to center the
//! map at startup. A single attempt, no retry, no fallback center.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Coordinate;

pub const LOCATION_ENV: &str = "RMAPTY_LOCATION";

/// Resolve the current position. First hit wins: the `--location` flag,
/// then `$RMAPTY_LOCATION`, then `location` in the config file.
pub fn locate(flag: Option<&str>, cfg: &Config) -> AppResult<Coordinate> {
    let env = std::env::var(LOCATION_ENV).ok();
    locate_from(flag, env.as_deref(), cfg.location.as_deref())
}

fn locate_from(
    flag: Option<&str>,
    env: Option<&str>,
    configured: Option<&str>,
) -> AppResult<Coordinate> {
    let (source, raw) = match (flag, env, configured) {
        (Some(f), _, _) => ("flag", f),
        (None, Some(e), _) if !e.trim().is_empty() => ("env", e),
        (None, _, Some(c)) if !c.trim().is_empty() => ("config", c),
        _ => {
            tracing::warn!("no location source available");
            return Err(AppError::GeolocationUnavailable);
        }
    };

    match Coordinate::parse(raw) {
        Ok(c) => {
            tracing::debug!(source, %c, "location resolved");
            Ok(c)
        }
        Err(e) => {
            tracing::warn!(source, error = %e, "location unusable");
            Err(AppError::GeolocationUnavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_env_and_config() {
        let c = locate_from(Some("1,2"), Some("3,4"), Some("5,6")).unwrap();
        assert_eq!(c, Coordinate::new(1.0, 2.0));
        let c = locate_from(None, Some("3,4"), Some("5,6")).unwrap();
        assert_eq!(c, Coordinate::new(3.0, 4.0));
        let c = locate_from(None, None, Some("5,6")).unwrap();
        assert_eq!(c, Coordinate::new(5.0, 6.0));
    }

    #[test]
    fn nothing_or_garbage_is_unavailable() {
        assert!(matches!(
            locate_from(None, None, None),
            Err(AppError::GeolocationUnavailable)
        ));
        assert!(matches!(
            locate_from(Some("nowhere"), None, None),
            Err(AppError::GeolocationUnavailable)
        ));
    }
}
