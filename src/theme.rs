#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Whether the document root should carry the `dark` class.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        format!("Switch to {} theme", self.toggled().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::Dark.toggled();
        assert_eq!(theme, Theme::Light);
        assert!(!theme.is_dark());
        assert_eq!(theme.toggled(), Theme::Dark);
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }
}
