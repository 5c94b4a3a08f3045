use std::env::VarError;

use anyhow::{Result, bail};

/// Get an env var as a String; decoding failures are reported as
/// errors.
pub fn getenv(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(s) => Ok(Some(s)),
        Err(e) => match e {
            VarError::NotPresent => Ok(None),
            VarError::NotUnicode(_) => bail!("{name:?} env var is not unicode"),
        }
    }
}

/// Like `getenv` but with a fallback value for when the var is not
/// set.
pub fn getenv_or(name: &str, fallbackvalue: &str) -> Result<String> {
    Ok(getenv(name)?.unwrap_or_else(|| fallbackvalue.to_string()))
}

/// Treat an env var as a flag: set and not one of "", "0", "false"
/// means true.
pub fn getenv_flag(name: &str) -> Result<bool> {
    Ok(match getenv(name)? {
        None => false,
        Some(s) => !matches!(s.trim(), "" | "0" | "false" | "no"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_getenv_flag() {
        std::env::set_var("PORTFOLIO_VIEWER_T_FLAG_A", "1");
        std::env::set_var("PORTFOLIO_VIEWER_T_FLAG_B", "false");
        assert_eq!(getenv_flag("PORTFOLIO_VIEWER_T_FLAG_A").unwrap(), true);
        assert_eq!(getenv_flag("PORTFOLIO_VIEWER_T_FLAG_B").unwrap(), false);
        assert_eq!(getenv_flag("PORTFOLIO_VIEWER_T_FLAG_UNSET").unwrap(), false);
    }

    #[test]
    fn t_getenv_or() {
        assert_eq!(getenv_or("PORTFOLIO_VIEWER_T_UNSET", "x").unwrap(), "x");
    }
}
