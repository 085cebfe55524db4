use serde::{Deserialize, Serialize};

/// One position in the visitor's journey through the booth.
///
/// Serialized with the upper-case names the frontend switches on
/// (`WELCOME`, `INSTRUCTIONS`, `WAIT_RETURN`, `THANK_YOU`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum FlowStep {
    /// Attract screen shown between visitors.
    #[default]
    Welcome = 0,
    /// How to use the notebook tool.
    Instructions = 1,
    /// Visitor has been handed off to the external app.
    WaitReturn = 2,
    /// Closing screen before the next visitor.
    ThankYou = 3,
}

impl FlowStep {
    /// All steps in journey order.
    pub const ALL: [FlowStep; 4] = [
        FlowStep::Welcome,
        FlowStep::Instructions,
        FlowStep::WaitReturn,
        FlowStep::ThankYou,
    ];

    /// The step that follows this one in the linear journey.
    ///
    /// `ThankYou` has no successor; the next visitor starts from a reset.
    pub fn next(self) -> Option<FlowStep> {
        match self {
            FlowStep::Welcome => Some(FlowStep::Instructions),
            FlowStep::Instructions => Some(FlowStep::WaitReturn),
            FlowStep::WaitReturn => Some(FlowStep::ThankYou),
            FlowStep::ThankYou => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FlowStep::Welcome => "WELCOME",
            FlowStep::Instructions => "INSTRUCTIONS",
            FlowStep::WaitReturn => "WAIT_RETURN",
            FlowStep::ThankYou => "THANK_YOU",
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a stored discriminant. Returns `None` for bytes that no step uses.
    pub fn from_u8(value: u8) -> Option<FlowStep> {
        match value {
            0 => Some(FlowStep::Welcome),
            1 => Some(FlowStep::Instructions),
            2 => Some(FlowStep::WaitReturn),
            3 => Some(FlowStep::ThankYou),
            _ => None,
        }
    }
}

impl std::fmt::Display for FlowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
