use crate::domain::models::ViewModel;
use crate::services::api::ApiClient;
use crate::services::error::{
    classify_prediction_failure, classify_secondary_failure, unknown_failure, LookupError,
};
use crate::services::view::build_view_model;

/// One end-to-end lookup: prediction first, then explanation and stats,
/// then the merge. A prediction failure short-circuits before the other two
/// requests are issued; a secondary failure discards the partial success.
pub fn run_lookup(api: &ApiClient, user_id: &str) -> Result<ViewModel, LookupError> {
    debug_assert!(
        !user_id.trim().is_empty(),
        "callers validate the user id before running a lookup"
    );
    log::debug!("lookup started for {}", user_id);

    let prediction = api.prediction(user_id).map_err(classify_prediction_failure)?;
    let reasons = api.explanation(user_id).map_err(classify_secondary_failure)?;
    let stats = api.user_stats(user_id).map_err(classify_secondary_failure)?;

    let view = build_view_model(&prediction, &reasons, &stats).map_err(unknown_failure)?;
    log::debug!("lookup for {} resolved with score {}", user_id, view.risk_score);
    Ok(view)
}
