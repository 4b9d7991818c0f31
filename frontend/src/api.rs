use feedback_admin_shared::{FeedbackPage, FetchError, PageRequest};
#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;

#[cfg(not(feature = "mock"))]
use crate::config::API_BASE;
#[cfg(feature = "mock")]
use crate::models;

/// Fetch one page of feedback, sorted and sliced by the data source.
///
/// Identical requests return identical pages, which is what lets the page
/// cache stand in for repeated calls.
pub async fn fetch_feedback_page(request: &PageRequest) -> Result<FeedbackPage, FetchError> {
    #[cfg(feature = "mock")]
    {
        return Ok(feedback_admin_shared::feedback::query_page(&models::mock_feedbacks(), request));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = feedback_page_url(API_BASE, request);
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?;

        if !response.ok() {
            return Err(FetchError::Http {
                status: response.status(),
            });
        }

        response
            .json::<FeedbackPage>()
            .await
            .map_err(|e| FetchError::Decode(format!("{:?}", e)))
    }
}

#[cfg(not(feature = "mock"))]
fn feedback_page_url(base: &str, request: &PageRequest) -> String {
    format!(
        "{}/feedbacks?page={}&size={}&order={}&sort={}",
        base.trim_end_matches('/'),
        request.page,
        request.size,
        request.order.as_param(),
        request.sort.as_param(),
    )
}
