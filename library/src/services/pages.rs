use crate::services::capabilities::AnalyticsTracker;

pub const HOME_PAGE_PATH: &str = "/home";

const HOME_PAGE_CONTENT: &str = "<div>content</div>";

pub async fn render_page<A: AnalyticsTracker>(analytics: &A) -> String {
    analytics.track_page_view(HOME_PAGE_PATH);
    HOME_PAGE_CONTENT.to_string()
}
