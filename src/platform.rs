use std::fmt;

/// Operating system family, as far as cursors are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Other,
}

const DEFAULT_CURSOR_SIZE: u32 = 32;
const DEFAULT_XCURSOR_SIZE: u32 = 24;

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// Cursor size in logical pixels before display scaling. X11 desktops
    /// publish theirs through `XCURSOR_SIZE`.
    pub fn base_cursor_size(self) -> u32 {
        match self {
            Platform::Windows | Platform::MacOs => DEFAULT_CURSOR_SIZE,
            Platform::Other => {
                parse_xcursor_size(std::env::var("XCURSOR_SIZE").ok().as_deref())
                    .unwrap_or(DEFAULT_XCURSOR_SIZE)
            }
        }
    }
}

fn parse_xcursor_size(value: Option<&str>) -> Option<u32> {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&size| size > 0)
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Other => "other",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_matches_target() {
        let platform = Platform::current();
        #[cfg(windows)]
        assert_eq!(platform, Platform::Windows);
        #[cfg(target_os = "macos")]
        assert_eq!(platform, Platform::MacOs);
        #[cfg(not(any(windows, target_os = "macos")))]
        assert_eq!(platform, Platform::Other);
    }

    #[test]
    fn test_xcursor_size_parsing() {
        assert_eq!(parse_xcursor_size(Some("48")), Some(48));
        assert_eq!(parse_xcursor_size(Some(" 32\n")), Some(32));
        assert_eq!(parse_xcursor_size(Some("0")), None);
        assert_eq!(parse_xcursor_size(Some("large")), None);
        assert_eq!(parse_xcursor_size(None), None);
    }

    #[test]
    fn test_desktop_base_sizes() {
        assert_eq!(Platform::Windows.base_cursor_size(), 32);
        assert_eq!(Platform::MacOs.base_cursor_size(), 32);
        assert!(Platform::Other.base_cursor_size() > 0);
    }
}
