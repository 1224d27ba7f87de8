use std::fmt;
use std::str::FromStr;

/// Named vertical placement mode for a caption block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
}

impl FromStr for VerticalAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(VerticalAnchor::Top),
            "middle" => Ok(VerticalAnchor::Middle),
            "bottom" => Ok(VerticalAnchor::Bottom),
            other => Err(format!(
                "unknown anchor '{}', expected one of: top, middle, bottom",
                other
            )),
        }
    }
}

impl fmt::Display for VerticalAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            VerticalAnchor::Top => "top",
            VerticalAnchor::Middle => "middle",
            VerticalAnchor::Bottom => "bottom",
        };
        f.write_str(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!("top".parse::<VerticalAnchor>().unwrap(), VerticalAnchor::Top);
        assert_eq!(
            "middle".parse::<VerticalAnchor>().unwrap(),
            VerticalAnchor::Middle
        );
        assert_eq!(
            "bottom".parse::<VerticalAnchor>().unwrap(),
            VerticalAnchor::Bottom
        );
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        assert!("center".parse::<VerticalAnchor>().is_err());
        assert!("TOP".parse::<VerticalAnchor>().is_err());
        assert!("".parse::<VerticalAnchor>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for anchor in [
            VerticalAnchor::Top,
            VerticalAnchor::Middle,
            VerticalAnchor::Bottom,
        ] {
            assert_eq!(anchor.to_string().parse::<VerticalAnchor>().unwrap(), anchor);
        }
    }
}
