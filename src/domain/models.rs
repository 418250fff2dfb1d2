use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Payload of `GET /predict/{id}`. The service also returns `user_id`,
/// `is_churn_prediction` and `actual_status`; nothing here consumes them.
#[derive(Debug, Deserialize, Clone)]
pub struct Prediction {
    pub churn_probability: f64,
    pub risk_level: String,
}

/// One ranked entry of `GET /explain/{id}`. Only `message` is consumed;
/// `value` has no fixed type on the wire and is held opaquely.
#[derive(Debug, Deserialize, Clone)]
pub struct Reason {
    #[serde(default)]
    pub feature: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub impact: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Explanation {
    pub reasons: Vec<Reason>,
}

/// Payload of `GET /user-stats/{id}`. `days_to_expire` may be negative for
/// an already-lapsed subscription.
#[derive(Debug, Deserialize, Clone)]
pub struct UserStats {
    pub membership_days: i64,
    pub total_transactions: i64,
    pub days_to_expire: i64,
}

/// Payload of `GET /users/random`. The service returns the id as a number
/// or a string depending on the backing dataset.
#[derive(Debug, Deserialize)]
pub struct RandomUser {
    pub user_id: serde_json::Value,
}

/// The merged, display-ready record for one successful lookup. Built whole
/// or not at all; `reasons` keeps the server-supplied ranking.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ViewModel {
    pub risk_score: u8,
    pub risk_level: String,
    pub reasons: Vec<String>,
    pub membership_days: i64,
    pub total_transactions: i64,
    pub days_to_expire: i64,
}
