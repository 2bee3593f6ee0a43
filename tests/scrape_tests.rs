//! Integration tests for the scrape pipeline
//!
//! These tests use wiremock to stand in for the listing endpoint and
//! exercise the full plan -> fetch -> parse -> aggregate cycle, including
//! retry exhaustion and page-order preservation.

use mep_meetings::config::{Config, OutputConfig, ScraperConfig, UserAgentConfig};
use mep_meetings::links::PageRequest;
use mep_meetings::scraper::{
    build_http_client, fetch_page, parse_page, Coordinator, Meeting, RetryPolicy, Site,
};
use mep_meetings::ScrapeError;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A [`Site`] planning its pages against a mock server instead of the fixed
/// europarl endpoint; parsing is the real parser.
struct ListingSite {
    endpoint: Url,
}

impl ListingSite {
    fn new(server_uri: &str) -> Self {
        Self {
            endpoint: Url::parse(&format!("{}/loadmore-meetings", server_uri))
                .expect("mock server URI is a valid URL"),
        }
    }
}

impl Site for ListingSite {
    fn plan_links(&self, pages: u32) -> Vec<PageRequest> {
        (1..=pages)
            .map(|page| {
                let page_param = page.to_string();
                let url = Url::parse_with_params(
                    self.endpoint.as_str(),
                    &[
                        ("meetingType", "PAST"),
                        ("memberId", "256864"),
                        ("termId", "10"),
                        ("page", page_param.as_str()),
                        ("pageSize", "10"),
                    ],
                )
                .expect("mock listing URL is valid");
                PageRequest { url, page }
            })
            .collect()
    }

    fn parse_page(&self, body: &str, request: &PageRequest) -> Vec<Meeting> {
        parse_page(body, request)
    }
}

fn test_config(pages: u32, max_connections: u32) -> Config {
    Config {
        scraper: ScraperConfig {
            seed_url: "https://www.europarl.europa.eu/meps/en/256864/NAME/meetings/past"
                .to_string(),
            pages,
            max_connections,
            request_timeout_secs: 5,
        },
        user_agent: UserAgentConfig::default(),
        output: OutputConfig {
            csv_path: "./unused.csv".to_string(),
        },
    }
}

/// Fast retry policy so failure tests don't sit through the 2s default delay
fn fast_retries() -> RetryPolicy {
    RetryPolicy::new(3, Duration::from_millis(10))
}

fn container(title: &str) -> String {
    format!(
        r#"<div class="erpl_document-header">
            <p class="t-item">{title}</p>
            <time datetime="2025-03-12">12-03-2025</time>
            <span class="erpl_document-subtitle-location">Brussels</span>
            <span class="erpl_document-subtitle-capacity">Member</span>
            <span class="erpl_badge-committee">AGRI</span>
            <span class="erpl_document-subtitle-author">Farming Alliance</span>
        </div>"#
    )
}

#[tokio::test]
async fn test_two_page_scrape_aggregates_records() {
    let server = MockServer::start().await;

    // Page 1 has three meetings
    Mock::given(method("GET"))
        .and(path("/loadmore-meetings"))
        .and(query_param("page", "1"))
        .and(query_param("memberId", "256864"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "{}{}{}",
            container("First"),
            container("Second"),
            container("Third")
        )))
        .mount(&server)
        .await;

    // Page 2 is past the end of the listing: empty body
    Mock::given(method("GET"))
        .and(path("/loadmore-meetings"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let site = ListingSite::new(&server.uri());
    let coordinator =
        Coordinator::new(site, &test_config(2, 8)).expect("coordinator builds");

    let meetings = coordinator.run().await.expect("run completes");

    assert_eq!(meetings.len(), 3);
    assert!(meetings.iter().all(|m| m.page == 1));
    assert_eq!(meetings[0].title.as_deref(), Some("First"));
    assert_eq!(meetings[1].title.as_deref(), Some("Second"));
    assert_eq!(meetings[2].title.as_deref(), Some("Third"));
    assert_eq!(meetings[0].place.as_deref(), Some("Brussels"));
}

#[tokio::test]
async fn test_retry_gives_up_after_exactly_three_attempts() {
    let server = MockServer::start().await;

    // expect(3) makes the server itself verify the attempt count on drop
    Mock::given(method("GET"))
        .and(path("/loadmore-meetings"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let site = ListingSite::new(&server.uri());
    let url = site.plan_links(1).remove(0).url;

    let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(5))
        .expect("client builds");

    let result = fetch_page(&client, &url, &fast_retries()).await;

    match result {
        Err(ScrapeError::FetchExhausted { attempts, .. }) => assert_eq!(attempts, 3),
        other => panic!("expected FetchExhausted, got {:?}", other.map(|b| b.len())),
    }
}

#[tokio::test]
async fn test_retry_recovers_after_transient_failures() {
    let server = MockServer::start().await;

    // First two attempts fail, third succeeds
    Mock::given(method("GET"))
        .and(path("/loadmore-meetings"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/loadmore-meetings"))
        .respond_with(ResponseTemplate::new(200).set_body_string(container("Recovered")))
        .mount(&server)
        .await;

    let site = ListingSite::new(&server.uri());
    let url = site.plan_links(1).remove(0).url;

    let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(5))
        .expect("client builds");

    let body = fetch_page(&client, &url, &fast_retries())
        .await
        .expect("third attempt succeeds");
    assert!(body.contains("Recovered"));
}

#[tokio::test]
async fn test_failed_page_does_not_discard_other_pages() {
    let server = MockServer::start().await;

    // Page 1 always fails
    Mock::given(method("GET"))
        .and(path("/loadmore-meetings"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // Page 2 has two meetings
    Mock::given(method("GET"))
        .and(path("/loadmore-meetings"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("{}{}", container("Kept"), container("Also kept"))),
        )
        .mount(&server)
        .await;

    let site = ListingSite::new(&server.uri());
    let coordinator = Coordinator::new(site, &test_config(2, 8))
        .expect("coordinator builds")
        .with_retry_policy(fast_retries());

    let meetings = coordinator.run().await.expect("run completes despite page 1");

    assert_eq!(meetings.len(), 2);
    assert!(meetings.iter().all(|m| m.page == 2));
}

#[tokio::test]
async fn test_page_order_preserved_regardless_of_completion_order() {
    let server = MockServer::start().await;

    // Page 1 is slow, page 2 answers immediately
    Mock::given(method("GET"))
        .and(path("/loadmore-meetings"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(container("From page one"))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/loadmore-meetings"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(container("From page two")))
        .mount(&server)
        .await;

    let site = ListingSite::new(&server.uri());
    let coordinator =
        Coordinator::new(site, &test_config(2, 2)).expect("coordinator builds");

    let meetings = coordinator.run().await.expect("run completes");

    assert_eq!(meetings.len(), 2);
    assert_eq!(meetings[0].title.as_deref(), Some("From page one"));
    assert_eq!(meetings[0].page, 1);
    assert_eq!(meetings[1].title.as_deref(), Some("From page two"));
    assert_eq!(meetings[1].page, 2);
}

#[tokio::test]
async fn test_single_page_end_to_end_record_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/loadmore-meetings"))
        .and(query_param("meetingType", "PAST"))
        .and(query_param("termId", "10"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(container("Only meeting")))
        .mount(&server)
        .await;

    let site = ListingSite::new(&server.uri());
    let coordinator =
        Coordinator::new(site, &test_config(1, 8)).expect("coordinator builds");

    let meetings = coordinator.run().await.expect("run completes");

    assert_eq!(meetings.len(), 1);
    let meeting = &meetings[0];
    assert_eq!(meeting.title.as_deref(), Some("Only meeting"));
    assert_eq!(
        meeting.date,
        chrono::NaiveDate::from_ymd_opt(2025, 3, 12)
    );
    assert_eq!(meeting.capacity.as_deref(), Some("Member"));
    assert_eq!(meeting.committee_code.as_deref(), Some("AGRI"));
    assert_eq!(meeting.meeting_with.as_deref(), Some("Farming Alliance"));
    assert_eq!(meeting.page, 1);
}
