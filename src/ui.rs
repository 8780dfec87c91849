use crate::config::Action;
use crate::state::Display;

pub fn render_display(action: Action, display: &Display) -> String {
    match action {
        Action::Tap => TAP_VIEW
            .replace("{{POINTS}}", &display.points)
            .replace("{{MSG}}", &display.status),
        Action::Mine => MINE_VIEW
            .replace("{{STATUS}}", &display.status)
            .replace("{{BALANCE}}", &display.balance),
    }
}

pub fn render_alert(message: &str) -> String {
    ALERT_VIEW.replace("{{ALERT}}", message)
}

pub fn render_prompt(action: Action) -> &'static str {
    match action {
        Action::Tap => "press enter to tap, type 'balance' to refresh points",
        Action::Mine => "enter a username to mine",
    }
}

const TAP_VIEW: &str = "points: {{POINTS}}\nmsg: {{MSG}}";

const MINE_VIEW: &str = "status: {{STATUS}}\nbalance: {{BALANCE}}";

const ALERT_VIEW: &str = "alert: {{ALERT}}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_view_shows_points_and_msg() {
        let display = Display {
            points: "42".into(),
            ..Display::default()
        };
        assert_eq!(render_display(Action::Tap, &display), "points: 42\nmsg: ");
    }

    #[test]
    fn mine_view_shows_status_and_balance() {
        let display = Display {
            status: "ok".into(),
            balance: "Balance: 100".into(),
            ..Display::default()
        };
        assert_eq!(
            render_display(Action::Mine, &display),
            "status: ok\nbalance: Balance: 100"
        );
    }

    #[test]
    fn alert_is_prefixed() {
        assert_eq!(render_alert("Please enter username"), "alert: Please enter username");
    }
}
