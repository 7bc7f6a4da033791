//! Directory page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::application::services::ListingFetch;
use crate::domain::entities::{ListingEntry, Submission};
use crate::domain::form::SUCCESS_RESET_DELAY;
use crate::state::AppState;
use crate::telemetry::AnalyticsConfig;

/// Template for the directory page.
///
/// Renders `templates/index.html` with:
/// - The listing grid, in store order
/// - A degraded-state notice when the store could not be read
/// - The submission form, with `required` markers taken from [`Submission`]
/// - The analytics snippet, only when analytics was enabled at startup
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub listings: Vec<ListingEntry>,
    pub degraded: bool,
    pub analytics: Option<AnalyticsConfig>,
    pub reset_delay_ms: u128,
    pub email_required: bool,
    pub twitter_required: bool,
    pub link_required: bool,
}

impl IndexTemplate {
    pub fn new(fetch: ListingFetch, analytics: Option<AnalyticsConfig>) -> Self {
        let degraded = !fetch.is_available();
        let listings = match fetch {
            ListingFetch::Available(entries) => entries,
            ListingFetch::Unavailable(_) => Vec::new(),
        };

        Self {
            listings,
            degraded,
            analytics,
            reset_delay_ms: SUCCESS_RESET_DELAY.as_millis(),
            email_required: Submission::is_required("email"),
            twitter_required: Submission::is_required("twitter"),
            link_required: Submission::is_required("link"),
        }
    }
}

/// Renders the directory page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Template
///
/// Uses `templates/index.html`. The store is queried once per view; a store
/// failure still renders the page, with the degraded-state notice.
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    let fetch = state.listing_service.fetch_listings().await;
    IndexTemplate::new(fetch, state.analytics.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::StoreError;

    fn entry(name: &str) -> ListingEntry {
        ListingEntry::new(name, "https://example.com", "A timer").unwrap()
    }

    #[test]
    fn test_available_listings_rendered() {
        let template = IndexTemplate::new(
            ListingFetch::Available(vec![entry("Flow"), entry("Pomofocus")]),
            None,
        );

        let html = template.render().unwrap();
        assert!(!template.degraded);
        assert!(html.contains("Flow"));
        assert!(html.contains("Pomofocus"));
        assert!(!html.contains("data-degraded"));
        assert!(!html.contains("posthog"));
    }

    #[test]
    fn test_unavailable_store_renders_notice() {
        let template = IndexTemplate::new(
            ListingFetch::Unavailable(StoreError::Network("refused".to_string())),
            None,
        );

        let html = template.render().unwrap();
        assert!(template.degraded);
        assert!(template.listings.is_empty());
        assert!(html.contains("data-degraded"));
    }

    #[test]
    fn test_form_schema_and_delay() {
        let template = IndexTemplate::new(ListingFetch::Available(vec![]), None);

        assert!(template.email_required);
        assert!(template.link_required);
        assert!(!template.twitter_required);
        assert_eq!(template.reset_delay_ms, 3000);

        let html = template.render().unwrap();
        assert!(html.contains(r#"data-reset-delay="3000""#));
    }

    #[test]
    fn test_analytics_snippet_only_when_configured() {
        let template = IndexTemplate::new(
            ListingFetch::Available(vec![]),
            Some(AnalyticsConfig {
                key: "phc_test".to_string(),
                host: "https://eu.posthog.com".to_string(),
            }),
        );

        let html = template.render().unwrap();
        assert!(html.contains("phc_test"));
        assert!(html.contains("eu.posthog.com"));
    }

    #[test]
    fn test_analytics_values_stay_out_of_script_source() {
        let template = IndexTemplate::new(
            ListingFetch::Available(vec![]),
            Some(AnalyticsConfig {
                key: r#"phc_"x'</script>"#.to_string(),
                host: "https://eu.posthog.com".to_string(),
            }),
        );

        let html = template.render().unwrap();
        assert!(html.contains("data-posthog-key=\"phc_"));
        assert!(!html.contains(r#"phc_"x"#));
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_listing_text_is_escaped() {
        let template = IndexTemplate::new(
            ListingFetch::Available(vec![entry("<script>x</script>")]),
            None,
        );

        let html = template.render().unwrap();
        assert!(!html.contains("<script>x</script>"));
    }
}
