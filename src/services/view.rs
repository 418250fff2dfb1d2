use crate::domain::models::{Prediction, Reason, UserStats, ViewModel};

#[derive(thiserror::Error, Debug)]
pub enum ViewError {
    #[error("churn probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),
}

/// Merge the three raw payloads into one display record. A probability
/// outside [0, 1] is a service defect and is reported, never clamped.
pub fn build_view_model(
    prediction: &Prediction,
    reasons: &[Reason],
    stats: &UserStats,
) -> Result<ViewModel, ViewError> {
    let p = prediction.churn_probability;
    if !(0.0..=1.0).contains(&p) {
        return Err(ViewError::ProbabilityOutOfRange(p));
    }
    Ok(ViewModel {
        risk_score: (p * 100.0).round() as u8,
        risk_level: prediction.risk_level.clone(),
        reasons: reasons.iter().map(|r| r.message.clone()).collect(),
        membership_days: stats.membership_days,
        total_transactions: stats.total_transactions,
        days_to_expire: stats.days_to_expire,
    })
}

/// Negative `days_to_expire` is a lapsed subscription, not an error.
pub fn subscription_status(days_to_expire: i64) -> String {
    if days_to_expire < 0 {
        format!("Expired ({} days ago)", -days_to_expire)
    } else {
        format!("{} Days Left", days_to_expire)
    }
}
