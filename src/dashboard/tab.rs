use std::fmt::Display;

/// The three mutually exclusive dashboard views.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Orbit,
    Attitude,
    Controls,
}

impl Tab {
    /// Navigation order, left to right.
    pub const ALL: [Tab; 3] = [Tab::Orbit, Tab::Attitude, Tab::Controls];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Orbit => "Orbit",
            Tab::Attitude => "Attitude",
            Tab::Controls => "Controls",
        }
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Handle identifying one attached navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(pub u64);

/// A button that selects `target` when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavControl {
    pub id: ControlId,
    pub label: &'static str,
    pub target: Tab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_is_initial() {
        assert_eq!(Tab::default(), Tab::Orbit);
        assert_eq!(Tab::ALL[0], Tab::Orbit);
    }

    #[test]
    fn labels_match_display() {
        for tab in Tab::ALL {
            assert_eq!(tab.to_string(), tab.label());
        }
    }
}
