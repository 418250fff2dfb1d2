/// Categorical tier behind the "Safe / Moderate / Critical" label next to
/// the score readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Safe,
    Moderate,
    Critical,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Safe => "Safe",
            RiskTier::Moderate => "Moderate",
            RiskTier::Critical => "Critical",
        }
    }

    pub fn ansi_color(&self) -> &'static str {
        match self {
            RiskTier::Safe => "\x1b[32m",
            RiskTier::Moderate => "\x1b[33m",
            RiskTier::Critical => "\x1b[31m",
        }
    }
}

/// Fill tier of the gauge bar. Deliberately a separate scale from
/// [`RiskTier`]: the mid boundary is 40 here but 30 for the label, and the
/// two are tuned independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeFill {
    Low,
    Mid,
    Critical,
}

impl GaugeFill {
    pub fn ansi_color(&self) -> &'static str {
        match self {
            GaugeFill::Low => "\x1b[32m",
            GaugeFill::Mid => "\x1b[33m",
            GaugeFill::Critical => "\x1b[31m",
        }
    }
}

pub fn label_tier(score: u8) -> RiskTier {
    if score > 70 {
        RiskTier::Critical
    } else if score > 30 {
        RiskTier::Moderate
    } else {
        RiskTier::Safe
    }
}

pub fn gauge_fill(score: u8) -> GaugeFill {
    if score > 70 {
        GaugeFill::Critical
    } else if score > 40 {
        GaugeFill::Mid
    } else {
        GaugeFill::Low
    }
}
