use serde::{Deserialize, Serialize};
use std::fmt;

/// Passenger-identifying text. `Debug` hides it entirely and `Display` shows
/// only the initial of each name part, so log lines can still tell
/// passengers apart. API responses serialize the full value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T> Masked<T> {
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Masked(***)")
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = self.0.as_ref().split_whitespace().peekable();
        if parts.peek().is_none() {
            return f.write_str("***");
        }
        for (i, part) in parts.enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let initial = part.chars().next().unwrap_or('*');
            write!(f, "{}***", initial)?;
        }
        Ok(())
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Masked(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_name_in_logs() {
        let name = Masked::from("Ada Lovelace");
        assert_eq!(format!("{:?}", name), "Masked(***)");
        assert_eq!(format!("{}", name), "A*** L***");
        assert_eq!(name.expose(), "Ada Lovelace");
    }

    #[test]
    fn test_blank_name_is_fully_masked() {
        assert_eq!(Masked::from("   ").to_string(), "***");
    }

    #[test]
    fn test_serializes_real_value() {
        let name = Masked::from("Grace Hopper");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Grace Hopper\"");
        let back: Masked<String> = serde_json::from_str("\"Grace Hopper\"").unwrap();
        assert_eq!(back, name);
    }
}
