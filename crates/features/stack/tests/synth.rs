use izero_domain::BuildMode;
use izero_stack::{
    CertificateRef, ContextProvisioner, HostedZone, ProvisionError, Provisioner, ResourceKind,
    StackEnv, outputs, synthesize,
};
use std::cell::RefCell;

fn base_vars() -> Vec<(&'static str, &'static str)> {
    vec![
        ("PROJECT_ENV", "sandbox"),
        ("PROJECT_KEY", "storefront"),
        ("PROJECT_NONCE", "q1w2e3r4"),
        ("LOG_LEVEL", "info"),
    ]
}

fn static_env() -> StackEnv {
    let mut vars = base_vars();
    vars.push(("CDK_ENV_API_HOSTED_ZONE", "acme.dev"));
    vars.push(("CDK_ENV_API_SUBDOMAIN", "api.sandbox"));
    StackEnv::from_vars(vars)
}

/// Records every call and can be told to fail.
#[derive(Debug, Default)]
struct RecordingProvisioner {
    calls: RefCell<Vec<String>>,
    fail_certificates: bool,
}

impl Provisioner for RecordingProvisioner {
    fn lookup_hosted_zone(&self, zone_name: &str) -> Result<HostedZone, ProvisionError> {
        self.calls.borrow_mut().push(format!("zone:{zone_name}"));
        Ok(HostedZone { id: "Z42".into(), name: zone_name.into() })
    }

    fn issue_certificate(
        &self,
        domain_name: &str,
        _zone: &HostedZone,
    ) -> Result<CertificateRef, ProvisionError> {
        self.calls.borrow_mut().push(format!("cert:{domain_name}"));
        if self.fail_certificates {
            return Err(ProvisionError::Certificate {
                domain_name: domain_name.into(),
                message: "quota exceeded".into(),
                context: None,
            });
        }
        Ok(CertificateRef { arn: format!("arn:test:{domain_name}"), domain_name: domain_name.into() })
    }
}

#[test]
fn ephemeral_stack_has_only_compute_and_gateway() {
    let provisioner = RecordingProvisioner::default();
    let graph = synthesize("Backend", &StackEnv::from_vars(base_vars()), &provisioner).unwrap();

    assert_eq!(graph.build_mode, BuildMode::Ephemeral);
    assert_eq!(graph.tags.len(), 1);
    assert_eq!(graph.tags["buildType"], "ephemeral");

    assert!(graph.contains(ResourceKind::Function));
    assert!(graph.contains(ResourceKind::RestApi));
    assert!(!graph.contains(ResourceKind::Certificate));
    assert!(!graph.contains(ResourceKind::DomainName));
    assert!(!graph.contains(ResourceKind::AliasRecord));

    assert_eq!(graph.outputs.len(), 1);
    assert_eq!(
        graph.output(outputs::API_GATEWAY),
        Some("${sandbox-storefront-ApiGateway-q1w2e3r4.Url}")
    );
    assert!(provisioner.calls.borrow().is_empty());
}

#[test]
fn static_stack_adds_certificate_domain_and_record() {
    let provisioner = RecordingProvisioner::default();
    let graph = synthesize("Backend", &static_env(), &provisioner).unwrap();

    assert_eq!(graph.build_mode, BuildMode::Static);
    assert_eq!(graph.tags["buildType"], "static");

    let roles: Vec<(ResourceKind, Option<&str>)> =
        graph.resources.iter().map(|r| (r.kind(), r.tag("role"))).collect();
    assert_eq!(
        roles,
        [
            (ResourceKind::Function, Some("api")),
            (ResourceKind::Certificate, Some("hosting")),
            (ResourceKind::RestApi, Some("api")),
            (ResourceKind::DomainName, Some("api")),
            (ResourceKind::AliasRecord, Some("networking")),
        ]
    );

    assert_eq!(graph.output(outputs::CERTIFICATE_ARN), Some("arn:test:api.sandbox.acme.dev"));
    assert_eq!(graph.output(outputs::API_DOMAIN_NAME), Some("api.sandbox.acme.dev"));
    assert!(graph.output(outputs::API_GATEWAY).is_some());
    assert_eq!(*provisioner.calls.borrow(), ["zone:acme.dev", "cert:api.sandbox.acme.dev"]);
}

#[test]
fn one_sided_domain_config_fails_before_any_lookup() {
    let mut vars = base_vars();
    vars.push(("CDK_ENV_API_HOSTED_ZONE", "acme.dev"));
    let provisioner = RecordingProvisioner::default();

    let err = synthesize("Backend", &StackEnv::from_vars(vars), &provisioner).unwrap_err();
    assert_eq!(err.kind(), "Config");
    assert!(err.to_string().contains("both be present or both be absent"));
    assert!(provisioner.calls.borrow().is_empty());
}

#[test]
fn malformed_zone_is_rejected() {
    let mut vars = base_vars();
    vars.push(("CDK_ENV_API_HOSTED_ZONE", "not a zone"));
    vars.push(("CDK_ENV_API_SUBDOMAIN", "api"));
    let err = synthesize("Backend", &StackEnv::from_vars(vars), &ContextProvisioner::default())
        .unwrap_err();
    assert_eq!(err.kind(), "Config");
}

#[test]
fn provisioning_failures_propagate_without_a_graph() {
    let provisioner = RecordingProvisioner { fail_certificates: true, ..Default::default() };
    let err = synthesize("Backend", &static_env(), &provisioner).unwrap_err();
    assert_eq!(err.kind(), "Provisioning");
    assert!(err.to_string().contains("quota exceeded"));
    assert_eq!(provisioner.calls.borrow().len(), 2);
}

#[test]
fn unknown_zone_in_context_aborts_synthesis() {
    let err = synthesize("Backend", &static_env(), &ContextProvisioner::default()).unwrap_err();
    assert_eq!(err.kind(), "Provisioning");
}

#[test]
fn context_provisioner_yields_pending_certificates() {
    let provisioner = ContextProvisioner::new([("acme.dev", "Z9")]);
    let graph = synthesize("Backend", &static_env(), &provisioner).unwrap();
    assert_eq!(
        graph.output(outputs::CERTIFICATE_ARN),
        Some("pending:certificate/api.sandbox.acme.dev")
    );
}

#[test]
fn empty_environment_synthesizes_an_ephemeral_stack() {
    let graph =
        synthesize("Backend", &StackEnv::default(), &ContextProvisioner::default()).unwrap();

    assert_eq!(graph.build_mode, BuildMode::Ephemeral);
    assert_eq!(graph.tags.len(), 1);
    assert_eq!(graph.outputs.len(), 1);
    assert_eq!(graph.output(outputs::API_GATEWAY), Some("${Backend-ApiGateway.Url}"));
    assert!(!graph.contains(ResourceKind::Certificate));
}

#[test]
fn graph_serializes_with_kind_and_properties() {
    let graph =
        synthesize("Backend", &StackEnv::from_vars(base_vars()), &ContextProvisioner::default())
            .unwrap();
    let json = serde_json::to_value(&graph).unwrap();

    assert_eq!(json["buildMode"], "ephemeral");
    assert_eq!(json["production"], false);
    let function = &json["resources"][0];
    assert_eq!(function["id"], "FunctionExpress");
    assert_eq!(function["kind"], "Function");
    assert_eq!(function["properties"]["handler"], "index.default");
    assert_eq!(function["properties"]["memorySizeMb"], 1024);
    assert_eq!(function["properties"]["environment"]["LOG_LEVEL"], "info");
    assert_eq!(function["tags"]["role"], "api");
}
