use crate::domain::models::{ErrorBody, JsonErr, JsonOut, ViewModel};
use crate::services::error::ErrorKind;
use crate::services::risk::{gauge_fill, label_tier};
use crate::services::view::subscription_status;

const RESET: &str = "\x1b[0m";
const GAUGE_WIDTH: usize = 20;

pub fn render_view(view: &ViewModel) -> String {
    let score = view.risk_score;
    let tier = label_tier(score);
    let fill = gauge_fill(score);
    let filled = (score as usize * GAUGE_WIDTH).div_ceil(100);

    let mut out = String::new();
    out.push_str("Churn Probability\n");
    out.push_str(&format!(
        "  [{}{}{}{}]  {}%  {}{}{} ({})\n",
        fill.ansi_color(),
        "#".repeat(filled),
        RESET,
        "-".repeat(GAUGE_WIDTH - filled),
        score,
        tier.ansi_color(),
        tier.label(),
        RESET,
        view.risk_level
    ));
    out.push_str("Risk Factors\n");
    if view.reasons.is_empty() {
        out.push_str("  (none)\n");
    }
    for (index, reason) in view.reasons.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, reason));
    }
    out.push_str("User Stats\n");
    out.push_str(&format!(
        "  Membership Duration  {} Days\n",
        view.membership_days
    ));
    out.push_str(&format!(
        "  Total Transactions   {}\n",
        view.total_transactions
    ));
    out.push_str(&format!(
        "  Subscription Status  {}\n",
        subscription_status(view.days_to_expire)
    ));
    out
}

pub fn print_view(json: bool, view: &ViewModel) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: view
            })?
        );
    } else {
        print!("{}", render_view(view));
    }
    Ok(())
}

pub fn print_failure(json: bool, kind: ErrorKind, message: &str) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonErr {
                ok: false,
                error: ErrorBody {
                    code: kind.code().to_string(),
                    message: message.to_string(),
                },
            })?
        );
    } else {
        println!("analysis failed: {}", message);
    }
    Ok(())
}
