//! Select-field options for the contact form

use serde::{Deserialize, Serialize};

/// Kind of project the inquiry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Mobile,
    Web,
    Aiml,
    Dashboard,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        Self::Mobile,
        Self::Web,
        Self::Aiml,
        Self::Dashboard,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mobile => "Mobile App",
            Self::Web => "Web App",
            Self::Aiml => "AI/ML Project",
            Self::Dashboard => "Data Dashboard",
            Self::Other => "Other",
        }
    }
}

/// Budget range for the inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "under5k")]
    Under5k,
    #[serde(rename = "5k-10k")]
    From5kTo10k,
    #[serde(rename = "10k-25k")]
    From10kTo25k,
    #[serde(rename = "25k-50k")]
    From25kTo50k,
    #[serde(rename = "over50k")]
    Over50k,
    #[serde(rename = "discuss")]
    Discuss,
}

impl Budget {
    pub const ALL: [Budget; 6] = [
        Self::Under5k,
        Self::From5kTo10k,
        Self::From10kTo25k,
        Self::From25kTo50k,
        Self::Over50k,
        Self::Discuss,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Under5k => "Under $5,000",
            Self::From5kTo10k => "$5,000 - $10,000",
            Self::From10kTo25k => "$10,000 - $25,000",
            Self::From25kTo50k => "$25,000 - $50,000",
            Self::Over50k => "Over $50,000",
            Self::Discuss => "Let's Discuss",
        }
    }
}

/// Step through an option list, treating `None` as the slot before the first entry.
///
/// Moving forward past the last entry wraps back to `None`, and so does moving
/// backward from the first one, so a select field can always be unset again.
pub fn cycle<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let len = all.len();
    if len == 0 {
        return None;
    }
    let position = current.and_then(|c| all.iter().position(|v| *v == c));
    match (position, forward) {
        (None, true) => Some(all[0]),
        (None, false) => Some(all[len - 1]),
        (Some(i), true) if i + 1 < len => Some(all[i + 1]),
        (Some(i), false) if i > 0 => Some(all[i - 1]),
        _ => None,
    }
}
