//! Integration tests for the multiversion dispatcher using wiremock
//!
//! These tests run the generated dispatcher methods against a mocked Compute
//! REST API, checking version routing, conversion of request and response
//! bodies, operation scoping and the delete path.

use std::time::Duration;

use gce_multiversion::gcp::auth::GcpCredentials;
use gce_multiversion::multiversion::{
    ClientSet, ComputeMultiversionService, DeletePolicy, DeleteRetryPolicy, OperationWaiter,
    ScopeType, WaitPolicy,
};
use gce_multiversion::shared;
use gce_multiversion::version::ApiVersion;
use gce_multiversion::Error;
use serde_json::{json, Value};
use wiremock::matchers::{bearer_token, body_partial_json, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROJECT: &str = "test-project";

fn service(server: &MockServer, enable_beta: bool) -> ComputeMultiversionService {
    let clients = ClientSet::new(
        GcpCredentials::from_access_token("test-token"),
        &server.uri(),
        enable_beta,
    )
    .expect("clients should build");
    ComputeMultiversionService::new(clients)
}

fn operation(status: &str) -> Value {
    json!({
        "kind": "compute#operation",
        "id": "7423786523651234567",
        "name": "operation-1",
        "zone": "https://www.googleapis.com/compute/v1/projects/test-project/zones/us-central1-a",
        "operationType": "insert",
        "status": status,
        "progress": 0
    })
}

fn fast_wait() -> WaitPolicy {
    WaitPolicy {
        timeout: Duration::from_millis(200),
        poll_interval: Duration::from_millis(10),
    }
}

fn fast_delete() -> DeletePolicy {
    DeletePolicy {
        wait: fast_wait(),
        retry: DeleteRetryPolicy {
            attempts: 20,
            delay: Duration::from_millis(5),
        },
    }
}

mod dispatch_tests {
    use super::*;

    /// Beta insert sends beta-only fields and converts the operation back
    #[tokio::test]
    async fn test_insert_address_on_beta_keeps_ip_version() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/compute/beta/projects/test-project/regions/us-central1/addresses"))
            .and(bearer_token("test-token"))
            .and(body_partial_json(json!({"name": "lb", "ipVersion": "IPV6"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation("PENDING")))
            .expect(1)
            .mount(&server)
            .await;

        let address = shared::Address {
            name: "lb".to_string(),
            ip_version: "IPV6".to_string(),
            ..Default::default()
        };
        let op = service(&server, true)
            .insert_address(PROJECT, "us-central1", &address, ApiVersion::V0Beta)
            .await
            .unwrap();

        assert_eq!(op.name, "operation-1");
        assert_eq!(op.status, "PENDING");
        assert_eq!(op.id, 7423786523651234567);
        assert_eq!(op.operation_type, "insert");
    }

    /// v1 insert drops beta-only fields and carries a request id
    #[tokio::test]
    async fn test_insert_address_on_v1_drops_beta_fields() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/compute/v1/projects/test-project/regions/us-central1/addresses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation("PENDING")))
            .expect(1)
            .mount(&server)
            .await;

        let address = shared::Address {
            name: "lb".to_string(),
            address: "10.0.0.2".to_string(),
            ip_version: "IPV6".to_string(),
            ..Default::default()
        };
        service(&server, false)
            .insert_address(PROJECT, "us-central1", &address, ApiVersion::V1)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body, json!({"name": "lb", "address": "10.0.0.2"}));
        assert!(requests[0]
            .url
            .query_pairs()
            .any(|(k, v)| k == "requestId" && !v.is_empty()));
    }

    /// Global addresses use the global collection but the Address record
    #[tokio::test]
    async fn test_get_global_address() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/compute/v1/projects/test-project/global/addresses/web-ip"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "12",
                "name": "web-ip",
                "address": "34.120.0.1",
                "status": "IN_USE",
                "users": ["https://www.googleapis.com/compute/v1/projects/test-project/global/forwardingRules/web"]
            })))
            .mount(&server)
            .await;

        let addr = service(&server, false)
            .get_global_address(PROJECT, "web-ip", ApiVersion::V1)
            .await
            .unwrap();

        assert_eq!(addr.address, "34.120.0.1");
        assert_eq!(addr.users.len(), 1);
        assert!(addr.region.is_empty());
    }

    /// A rejected token is refreshed and the call made once more
    #[tokio::test]
    async fn test_stale_token_is_refreshed_once() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/compute/v1/projects/test-project/global/addresses/web-ip"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"code": 401, "message": "Request had invalid authentication credentials."}
            })))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/compute/v1/projects/test-project/global/addresses/web-ip"))
            .and(bearer_token("test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "web-ip",
                "address": "34.120.0.1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let addr = service(&server, false)
            .get_global_address(PROJECT, "web-ip", ApiVersion::V1)
            .await
            .unwrap();
        assert_eq!(addr.address, "34.120.0.1");
    }

    /// A beta-only resource is never called on v1
    #[tokio::test]
    async fn test_beta_only_resource_rejects_v1_without_calling() {
        let server = MockServer::start().await;

        Mock::given(path_regex(".*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let svc = service(&server, true);
        let policy = shared::SslPolicy {
            name: "modern".to_string(),
            ..Default::default()
        };

        let err = svc.insert_ssl_policy(PROJECT, &policy, ApiVersion::V1).await.unwrap_err();
        assert!(matches!(err, Error::UnknownVersion { version: ApiVersion::V1, .. }));

        let err = svc.delete_ssl_policy(PROJECT, "modern", ApiVersion::V1).await.unwrap_err();
        assert!(matches!(err, Error::UnknownVersion { .. }));
    }

    /// Full update is only offered where the update tier is full
    #[tokio::test]
    async fn test_update_instance_group_manager_is_gated() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/compute/v1/projects/test-project/zones/us-central1-a/instanceGroupManagers/web"))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation("PENDING")))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/compute/beta/projects/test-project/zones/us-central1-a/instanceGroupManagers/web"))
            .and(body_partial_json(json!({
                "targetSize": 4,
                "namedPorts": [{"name": "http", "port": 80}],
                "autoHealingPolicies": [{"healthCheck": "hc", "initialDelaySec": 300}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation("RUNNING")))
            .expect(1)
            .mount(&server)
            .await;

        let svc = service(&server, true);
        let manager = shared::InstanceGroupManager {
            name: "web".to_string(),
            target_size: 4,
            named_ports: vec![shared::NamedPort {
                name: "http".to_string(),
                port: 80,
            }],
            auto_healing_policies: vec![shared::InstanceGroupManagerAutoHealingPolicy {
                health_check: "hc".to_string(),
                initial_delay_sec: 300,
            }],
            ..Default::default()
        };

        let err = svc
            .update_instance_group_manager(PROJECT, "us-central1-a", "web", &manager, ApiVersion::V1)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnknownVersion { .. }));

        let op = svc
            .update_instance_group_manager(PROJECT, "us-central1-a", "web", &manager, ApiVersion::V0Beta)
            .await
            .unwrap();
        assert_eq!(op.status, "RUNNING");
    }

    /// Beta calls fail locally when no beta client is configured
    #[tokio::test]
    async fn test_beta_without_beta_client() {
        let server = MockServer::start().await;

        Mock::given(path_regex(".*"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = service(&server, false)
            .get_address(PROJECT, "us-central1", "lb", ApiVersion::V0Beta)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnknownVersion { version: ApiVersion::V0Beta, .. }));
    }

    /// Backend errors come back unchanged
    #[tokio::test]
    async fn test_backend_error_is_propagated() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/compute/v1/projects/test-project/zones/us-central1-a/instanceGroups/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {
                    "code": 404,
                    "message": "The resource 'projects/test-project/zones/us-central1-a/instanceGroups/missing' was not found"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = service(&server, false)
            .get_instance_group(PROJECT, "us-central1-a", "missing", ApiVersion::V1)
            .await
            .unwrap_err();

        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("was not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

mod operation_tests {
    use super::*;

    /// Each scope polls its own operations collection
    #[tokio::test]
    async fn test_wait_operation_scopes() {
        let server = MockServer::start().await;

        for p in [
            "/compute/v1/projects/test-project/global/operations/operation-1",
            "/compute/v1/projects/test-project/regions/us-central1/operations/operation-1",
            "/compute/v1/projects/test-project/zones/us-central1-a/operations/operation-1",
        ] {
            Mock::given(method("GET"))
                .and(path(p))
                .respond_with(ResponseTemplate::new(200).set_body_json(operation("DONE")))
                .expect(1)
                .mount(&server)
                .await;
        }

        let svc = service(&server, false);
        let global = svc
            .wait_operation(PROJECT, "operation-1", ScopeType::Global, Some("us-central1"))
            .await
            .unwrap();
        assert!(global.is_done());

        svc.wait_operation(PROJECT, "operation-1", ScopeType::Region, Some("us-central1"))
            .await
            .unwrap();
        svc.wait_operation(PROJECT, "operation-1", ScopeType::Zone, Some("us-central1-a"))
            .await
            .unwrap();
    }

    /// The waiter polls until DONE and reports operation errors
    #[tokio::test]
    async fn test_waiter_reports_operation_errors() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/compute/v1/projects/test-project/zones/us-central1-a/operations/operation-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation("RUNNING")))
            .up_to_n_times(2)
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/compute/v1/projects/test-project/zones/us-central1-a/operations/operation-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "operation-1",
                "status": "DONE",
                "error": {"errors": [{"code": "RESOURCE_IN_USE_BY_ANOTHER_RESOURCE", "message": "in use"}]}
            })))
            .mount(&server)
            .await;

        let svc = service(&server, false);
        let issued: shared::Operation = serde_json::from_value::<gce_multiversion::compute::v1::Operation>(
            operation("PENDING"),
        )
        .map(|op| shared::Operation::from_production(&op))
        .unwrap();

        let err = OperationWaiter::new(&svc, fast_wait())
            .wait(PROJECT, issued, ScopeType::Zone, Some("us-central1-a"), "Deleting Address")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::OperationFailed { ref errors, .. } if errors == &["in use"]));
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    /// The delete call is retried until it is accepted
    #[tokio::test]
    async fn test_delete_instance_group_manager_retries_then_waits() {
        let server = MockServer::start().await;
        let igm = "/compute/v1/projects/test-project/zones/us-central1-a/instanceGroupManagers/web";

        Mock::given(method("DELETE"))
            .and(path(igm))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({
                "error": {"code": 503, "message": "backend unavailable"}
            })))
            .up_to_n_times(2)
            .with_priority(1)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(igm))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation("RUNNING")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/compute/v1/projects/test-project/zones/us-central1-a/operations/operation-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation("DONE")))
            .mount(&server)
            .await;

        service(&server, false)
            .delete_instance_group_manager_and_wait(
                PROJECT,
                "us-central1-a",
                "web",
                3,
                ApiVersion::V1,
                &fast_delete(),
            )
            .await
            .unwrap();
    }

    /// A delete that times out while the group stays the same size fails
    #[tokio::test]
    async fn test_delete_fails_when_group_is_not_shrinking() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/compute/v1/projects/test-project/zones/us-central1-a/instanceGroupManagers/web"))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation("RUNNING")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/compute/v1/projects/test-project/zones/us-central1-a/operations/operation-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation("RUNNING")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/compute/v1/projects/test-project/zones/us-central1-a/instanceGroups/web"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "web", "size": 3})))
            .expect(1)
            .mount(&server)
            .await;

        let err = service(&server, false)
            .delete_instance_group_manager_and_wait(
                PROJECT,
                "us-central1-a",
                "web",
                3,
                ApiVersion::V1,
                &fast_delete(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotShrinking { size: 3, previous: 3, .. }));
        assert!(err.to_string().contains("isn't shrinking"));
    }

    /// Once the group is empty a further timeout counts as done
    #[tokio::test]
    async fn test_delete_succeeds_once_group_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/compute/v1/projects/test-project/zones/us-central1-a/instanceGroupManagers/web"))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation("RUNNING")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/compute/v1/projects/test-project/zones/us-central1-a/operations/operation-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation("RUNNING")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/compute/v1/projects/test-project/zones/us-central1-a/instanceGroups/web"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "web", "size": 0})))
            .expect(1)
            .mount(&server)
            .await;

        service(&server, false)
            .delete_instance_group_manager_and_wait(
                PROJECT,
                "us-central1-a",
                "web",
                2,
                ApiVersion::V1,
                &fast_delete(),
            )
            .await
            .unwrap();
    }
}
