#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    QuitRequested,
    InputKey(KeyInput),
    Resized { width: u16, height: u16 },
}

impl AppEvent {
    /// Human-readable form used when an unhandled event is echoed to the
    /// diagnostic sink.
    pub fn describe(&self) -> String {
        match self {
            AppEvent::QuitRequested => "quit".to_owned(),
            AppEvent::InputKey(key) => {
                if key.ctrl {
                    format!("key 'ctrl+{}'", key.key)
                } else {
                    format!("key '{}'", key.key)
                }
            }
            AppEvent::Resized { width, height } => format!("resize {width}x{height}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_plain_key() {
        let event = AppEvent::InputKey(KeyInput::new("x", false));

        assert_eq!(event.describe(), "key 'x'");
    }

    #[test]
    fn describes_ctrl_modified_key() {
        let event = AppEvent::InputKey(KeyInput::new("o", true));

        assert_eq!(event.describe(), "key 'ctrl+o'");
    }

    #[test]
    fn describes_resize() {
        let event = AppEvent::Resized {
            width: 80,
            height: 24,
        };

        assert_eq!(event.describe(), "resize 80x24");
    }
}
