//! End-to-end report runs against a wiremock stand-in for the cluster.

use es_recon::{run, EsClient, ReconConfig, RunOutcome};
use esrecon_core::{Endpoint, Scheme};
use rand::rngs::mock::StepRng;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EsClient {
    let addr = server.address();
    EsClient::new(Endpoint::new(Scheme::Http, addr.ip().to_string(), addr.port())).unwrap()
}

async fn run_report(client: &EsClient) -> (RunOutcome, String) {
    colored::control::set_override(false);
    let mut out = Vec::new();
    let outcome = run(client, &ReconConfig::default(), &mut StepRng::new(0, 0), &mut out)
        .await
        .unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

async fn mount_cluster(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/_cluster/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cluster_name": "es1", "status": "green", "number_of_nodes": 3
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/_cluster/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "indices": {
                "count": 2,
                "docs": { "count": 10 },
                "store": { "size_in_bytes": 2097152 }
            }
        })))
        .mount(server)
        .await;
}

async fn mount_indices(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .and(query_param("format", "json"))
        .and(query_param("bytes", "mb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "index": "a", "docs.count": "5", "store.size": "1mb", "health": "green" },
            { "index": "b", "docs.count": "5", "store.size": "1mb", "health": "yellow" }
        ])))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn hits(n: usize) -> serde_json::Value {
    let hits: Vec<_> = (0..n)
        .map(|i| json!({ "_index": "a", "_id": i.to_string(), "_source": { "seq": i } }))
        .collect();
    json!({ "hits": { "total": { "value": n }, "hits": hits } })
}

#[tokio::test]
async fn full_report_against_mock_cluster() {
    let server = MockServer::start().await;
    mount_cluster(&server).await;
    mount_indices(&server, 1).await;
    Mock::given(method("PUT"))
        .and(path("/synack-aaaaaa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "acknowledged": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/(a|b)/_search$"))
        .and(body_json(json!({ "size": 5, "query": { "match_all": {} } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(hits(2)))
        .expect(2)
        .mount(&server)
        .await;

    let (outcome, text) = run_report(&client_for(&server)).await;
    assert_eq!(outcome, RunOutcome::Completed);

    assert!(text.contains("Successfully created index: synack-aaaaaa"));
    assert!(text.contains("Cluster Name      : es1"));
    assert!(text.contains("Status            : GREEN"));
    assert!(text.contains("Number of Nodes   : 3"));
    assert!(text.contains("Number of Indices : 2"));
    assert!(text.contains("Total Docs        : 10"));
    assert!(text.contains("Total Size        : 2.00 MB"));

    let row_a = format!("{:40} {:>10} {:>10} {:>10}", "a", "5", "1mb", "GREEN");
    let row_b = format!("{:40} {:>10} {:>10} {:>10}", "b", "5", "1mb", "YELLOW");
    let pos_a = text.find(&row_a).expect("row for a");
    let pos_b = text.find(&row_b).expect("row for b");
    assert!(pos_a < pos_b);

    assert!(text.contains("--- Index: a ---"));
    assert!(text.contains("--- Index: b ---"));
    assert_eq!(text.matches("Document 1:").count(), 2);
    assert_eq!(text.matches("Document 2:").count(), 2);
    assert!(text.contains("\"seq\": 1"));
    assert!(!text.contains("[!]"));

    let probe_at = text.find("Successfully created").unwrap();
    let overview_at = text.find("Cluster Overview").unwrap();
    assert!(probe_at < overview_at);
}

#[tokio::test]
async fn rejected_probe_still_lists_indices() {
    let server = MockServer::start().await;
    mount_cluster(&server).await;
    mount_indices(&server, 1).await;
    Mock::given(method("PUT"))
        .and(path_regex(r"^/synack-[a-z0-9]{6}$"))
        .respond_with(ResponseTemplate::new(403).set_body_string("cluster is read-only"))
        .expect(1)
        .mount(&server)
        .await;

    let (outcome, text) = run_report(&client_for(&server)).await;
    assert_eq!(outcome, RunOutcome::Completed);
    assert!(text.contains(
        "[-] Could not create index (might be read-only): 403 - cluster is read-only"
    ));
    assert!(text.contains("All Indices"));
    // search endpoints are unmocked, so each dump reports and yields nothing
    assert!(text.contains("[!] Error dumping index 'a': 404 Not Found"));
    assert!(!text.contains("Document 1:"));
}

#[tokio::test]
async fn dump_index_never_exceeds_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/logs/_search"))
        .and(body_json(json!({ "size": 3, "query": { "match_all": {} } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(hits(8)))
        .mount(&server)
        .await;

    let docs = client_for(&server).dump_index("logs", 3).await.unwrap();
    assert_eq!(docs.len(), 3);
    assert_eq!(docs[0].payload(), &json!({ "seq": 0 }));
}

#[tokio::test]
async fn broken_reads_fall_back_to_placeholders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/_cluster/health"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/_cluster/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    mount_indices(&server, 1).await;

    let (outcome, text) = run_report(&client_for(&server)).await;
    assert_eq!(outcome, RunOutcome::Completed);
    assert!(text.contains("[!] Error getting cluster health: 500 Internal Server Error"));
    assert!(text.contains("[!] Error getting cluster stats: invalid JSON"));
    assert!(text.contains("Cluster Name      : N/A"));
    assert!(text.contains("Status            : N/A"));
    assert!(text.contains("Total Size        : 0.00 MB"));
}

#[tokio::test]
async fn unreachable_target_stops_before_overview() {
    // nothing listens on port 1
    let client = EsClient::new(Endpoint::new(Scheme::Http, "127.0.0.1", 1)).unwrap();
    let (outcome, text) = run_report(&client).await;

    assert_eq!(outcome, RunOutcome::NoIndices);
    assert!(text.contains("[!] Error getting cluster health"));
    assert!(text.contains("[!] Error getting cluster stats"));
    assert!(text.contains("[!] Error creating index"));
    assert!(text.contains("[!] Error listing indices"));
    assert!(text.contains("[!] No indices found or unable to connect."));
    assert!(!text.contains("Cluster Overview"));
    assert!(!text.contains("All Indices"));
    assert!(!text.contains("Sample Dump"));
}

#[tokio::test]
async fn odd_field_types_still_render_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/_cluster/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cluster_name": "es1", "status": "green", "number_of_nodes": "3"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/_cluster/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "indices": {
                "count": 2,
                "docs": { "count": 10 },
                "store": { "size_in_bytes": 2097152.0 }
            }
        })))
        .mount(&server)
        .await;
    mount_indices(&server, 1).await;

    let (outcome, text) = run_report(&client_for(&server)).await;
    assert_eq!(outcome, RunOutcome::Completed);
    assert!(!text.contains("[!] Error getting cluster"));
    assert!(text.contains("Cluster Name      : es1"));
    assert!(text.contains("Number of Nodes   : 3"));
    assert!(text.contains("Total Docs        : 10"));
    assert!(text.contains("Total Size        : 2.00 MB"));
}
