//! Debounce timing on a paused clock.
//!
//! Drives the controller the way a frontend does: every input re-arms a single
//! timer task (aborting the previous one), and the fetch runs in its own task
//! so that re-arming never cancels a request already in flight.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bookfinder_core::config::DEFAULT_DEBOUNCE_MS;
use bookfinder_core::{Book, FetchTicket, SearchController, SearchRequest, SearchResponse};
use tokio::task::JoinHandle;

const DEBOUNCE: Duration = Duration::from_millis(DEFAULT_DEBOUNCE_MS);

#[derive(Default)]
struct Driver {
    controller: Arc<Mutex<SearchController>>,
    calls: Arc<Mutex<Vec<SearchRequest>>>,
    timer: Option<JoinHandle<()>>,
}

impl Driver {
    fn input(&mut self, f: impl FnOnce(&mut SearchController) -> Option<FetchTicket>) {
        self.input_with_latency(Duration::ZERO, f);
    }

    /// Like `input`, with `latency` of simulated network time for the
    /// request this input eventually issues.
    fn input_with_latency(
        &mut self,
        latency: Duration,
        f: impl FnOnce(&mut SearchController) -> Option<FetchTicket>,
    ) {
        let ticket = f(&mut *self.controller.lock().unwrap());
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        let Some(ticket) = ticket else { return };

        let controller = self.controller.clone();
        let calls = self.calls.clone();
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(DEBOUNCE).await;
            let request = controller.lock().unwrap().begin_fetch(ticket);
            let Some(request) = request else { return };
            calls.lock().unwrap().push(request.clone());
            tokio::spawn(async move {
                tokio::time::sleep(latency).await;
                let response = SearchResponse {
                    num_found: 1,
                    docs: vec![Book {
                        key: format!("/works/{}", request.query),
                        title: request.query.clone(),
                        ..Default::default()
                    }],
                };
                controller.lock().unwrap().finish(ticket, Ok(response));
            });
        }));
    }

    fn calls(&self) -> Vec<SearchRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[tokio::test(start_paused = true)]
async fn rapid_typing_issues_one_request() {
    let mut d = Driver::default();
    for q in ["h", "ha", "har"] {
        d.input(|c| c.set_query(q));
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(d.calls().is_empty());

    tokio::time::sleep(DEBOUNCE).await;
    assert_eq!(d.calls(), vec![SearchRequest { query: "har".into(), page: 1 }]);

    let c = d.controller.lock().unwrap();
    assert!(!c.loading());
    assert_eq!(c.results()[0].title, "har");
}

#[tokio::test(start_paused = true)]
async fn pauses_longer_than_debounce_fire_each_time() {
    let mut d = Driver::default();
    d.input(|c| c.set_query("dune"));
    tokio::time::sleep(DEBOUNCE + Duration::from_millis(10)).await;
    d.input(|c| c.next_page());
    tokio::time::sleep(DEBOUNCE + Duration::from_millis(10)).await;

    assert_eq!(
        d.calls(),
        vec![
            SearchRequest { query: "dune".into(), page: 1 },
            SearchRequest { query: "dune".into(), page: 2 },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn clearing_before_timer_fires_sends_nothing() {
    let mut d = Driver::default();
    d.input(|c| c.set_query("dune"));
    tokio::time::sleep(Duration::from_millis(200)).await;
    d.input(|c| c.clear());
    tokio::time::sleep(DEBOUNCE * 2).await;

    assert!(d.calls().is_empty());
    assert!(!d.controller.lock().unwrap().loading());
}

#[tokio::test(start_paused = true)]
async fn slow_stale_response_does_not_overwrite_newer_results() {
    let mut d = Driver::default();
    d.input_with_latency(Duration::from_secs(5), |c| c.set_query("har"));
    tokio::time::sleep(DEBOUNCE + Duration::from_millis(10)).await;
    // first request is in flight; keep typing. The newer request answers
    // first, the superseded one arrives afterwards.
    d.input_with_latency(Duration::from_millis(100), |c| c.set_query("harry"));
    tokio::time::sleep(DEBOUNCE + Duration::from_millis(200)).await;
    {
        let c = d.controller.lock().unwrap();
        assert_eq!(c.results()[0].title, "harry");
        assert!(!c.loading());
    }

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(d.calls().len(), 2);
    let c = d.controller.lock().unwrap();
    assert_eq!(c.query(), "harry");
    assert_eq!(c.results()[0].title, "harry");
}
