use izero_domain::{
    AccountMode, DeploymentConfig, DeploymentConfigInner, DomainConfig, Environment, ProjectConfig,
};
use izero_kernel::UniquenessToken;
use izero_workflow::{RewriteWarning, Rewriter, WorkflowSet};
use proptest::prelude::*;
use std::fs;

const SANDBOX: &str = "\
name: Deploy Sandbox
on:
  push:
    branches:
      - feat/*
jobs:
  deploy:
    runs-on: ubuntu-latest
    env:
      AWS_ROLE_ARN: ${{ vars.ACCOUNT_SANDBOX_AWS_ROLE_ARN }}
      PROJECT_ENV: sandbox
      PROJECT_KEY: initzero-project
      PROJECT_NONCE: xxxxxxxx
      CDK_ENV_API_HOSTED_ZONE:
      CDK_ENV_WEB_HOSTED_ZONE:
      CDK_ENV_API_SUBDOMAIN:
      CDK_ENV_WEB_SUBDOMAIN:
      PROJECT_SPONSOR: none
      PROJECT_SERVICE: none
      SERVICE_TEAM: development
      SERVICE_EMAIL: none
    steps:
      - uses: actions/checkout@v4
";

const PRODUCTION: &str = "\
on:
  push:
    tags:
      - v1.**
env:
  AWS_ROLE_ARN: ${{ vars.ACCOUNT_PRODUCTION_AWS_ROLE_ARN }}
  PROJECT_KEY: initzero-project
  PROJECT_NONCE: xxxxxxxx
";

fn custom_config(mode: AccountMode) -> DeploymentConfig {
    DeploymentConfigInner::builder()
        .account_mode(mode)
        .project(
            ProjectConfig::builder()
                .key("storefront")
                .sponsor("acme")
                .service("shop")
                .team("platform")
                .email("ops@acme.dev")
                .build(),
        )
        .domain(DomainConfig::builder().hosted_zone("acme.dev").api_subdomain("api").build())
        .build()
        .into()
}

fn branch_items(text: &str) -> Vec<&str> {
    text.lines()
        .skip_while(|l| l.trim() != "branches:")
        .skip(1)
        .take_while(|l| l.trim_start().starts_with("- "))
        .map(|l| l.trim_start().trim_start_matches("- "))
        .collect()
}

#[test]
fn single_sandbox_follows_development_branch() {
    let out = Rewriter::new(&DeploymentConfig::default())
        .unwrap()
        .rewrite(SANDBOX, Environment::Sandbox).unwrap();
    assert_eq!(branch_items(&out.text), ["feat/*", "main"]);
    assert!(out.is_clean(), "{:?}", out.warnings);
}

#[test]
fn single_account_collapses_the_role_placeholder() {
    let out = Rewriter::new(&DeploymentConfig::default())
        .unwrap()
        .rewrite(SANDBOX, Environment::Sandbox).unwrap();
    assert!(out.text.contains("AWS_ROLE_ARN: ${{ vars.ACCOUNT_AWS_ROLE_ARN }}\n"));
    assert!(!out.text.contains("ACCOUNT_SANDBOX_AWS_ROLE_ARN"));
}

#[test]
fn multi_account_keeps_per_account_roles() {
    let out = Rewriter::new(&custom_config(AccountMode::Multi))
        .unwrap()
        .rewrite(SANDBOX, Environment::Sandbox).unwrap();
    assert!(out.text.contains("${{ vars.ACCOUNT_SANDBOX_AWS_ROLE_ARN }}"));
    assert!(out.text.contains("CDK_ENV_API_HOSTED_ZONE: sandbox.acme.dev\n"));
    assert!(out.text.contains("CDK_ENV_API_SUBDOMAIN: api\n"));
    assert!(out.text.contains("CDK_ENV_WEB_SUBDOMAIN: '@'\n"));
}

#[test]
fn resolved_names_and_metadata_land_on_their_keys() {
    let nonce = UniquenessToken::parse("n0nce123").unwrap();
    let out = Rewriter::new(&custom_config(AccountMode::Single))
        .unwrap()
        .rewrite_with_nonce(SANDBOX, Environment::Sandbox, nonce)
        .unwrap();

    for line in [
        "      PROJECT_ENV: sandbox",
        "      PROJECT_KEY: storefront",
        "      PROJECT_NONCE: n0nce123",
        "      CDK_ENV_API_HOSTED_ZONE: acme.dev",
        "      CDK_ENV_WEB_HOSTED_ZONE: acme.dev",
        "      CDK_ENV_API_SUBDOMAIN: api.sandbox",
        "      CDK_ENV_WEB_SUBDOMAIN: sandbox",
        "      PROJECT_SPONSOR: acme",
        "      PROJECT_SERVICE: shop",
        "      SERVICE_TEAM: platform",
        "      SERVICE_EMAIL: ops@acme.dev",
    ] {
        assert!(out.text.lines().any(|l| l == line), "missing line {line:?} in\n{}", out.text);
    }
}

#[test]
fn production_replaces_the_tag_list() {
    let config: DeploymentConfig = DeploymentConfigInner::builder()
        .triggers(izero_domain::TriggerConfig::builder().production_tag("release-*").build())
        .build()
        .into();
    let out = Rewriter::new(&config).unwrap().rewrite(PRODUCTION, Environment::Production).unwrap();
    assert!(out.text.contains("    tags:\n      - release-*\nenv:"));
}

#[test]
fn missing_anchors_are_skipped_and_reported() {
    let out = Rewriter::new(&DeploymentConfig::default())
        .unwrap()
        .rewrite(PRODUCTION, Environment::Production).unwrap();

    assert!(out.warnings.contains(&RewriteWarning::MissingAnchor { key: "SERVICE_EMAIL" }));
    assert!(out.warnings.contains(&RewriteWarning::MissingAnchor { key: "PROJECT_ENV" }));
    assert!(!out.text.contains("SERVICE_EMAIL"));
    assert!(!out.warnings.contains(&RewriteWarning::MissingAnchor { key: "PROJECT_KEY" }));
}

#[test]
fn missing_trigger_list_is_reported() {
    let out = Rewriter::new(&DeploymentConfig::default())
        .unwrap()
        .rewrite(PRODUCTION, Environment::Development).unwrap();
    assert!(out.warnings.contains(&RewriteWarning::MissingAnchor { key: "branches" }));
    assert!(out.text.contains("    tags:\n      - v1.**\n"));
}

#[test]
fn each_rewrite_draws_a_fresh_nonce() {
    let rewriter = Rewriter::new(&DeploymentConfig::default()).unwrap();
    let first = rewriter.rewrite(SANDBOX, Environment::Sandbox).unwrap();
    let second = rewriter.rewrite(&first.text, Environment::Sandbox).unwrap();
    assert_ne!(first.nonce, second.nonce);
    assert!(second.text.contains(&second.nonce.to_string()));
    assert!(!second.text.contains(&first.nonce.to_string()));
}

#[test]
fn workflow_set_rewrites_files_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let set = WorkflowSet::new(dir.path());
    fs::create_dir_all(dir.path().join(".github/workflows")).unwrap();
    fs::write(set.path(Environment::Sandbox), SANDBOX).unwrap();

    let rewriter = Rewriter::new(&DeploymentConfig::default()).unwrap();

    let preview = set.apply(&rewriter, Environment::Sandbox, true).unwrap();
    assert!(preview.preview.is_some());
    assert_eq!(fs::read_to_string(set.path(Environment::Sandbox)).unwrap(), SANDBOX);

    let report = set.apply(&rewriter, Environment::Sandbox, false).unwrap();
    assert!(report.preview.is_none());
    let written = fs::read_to_string(&report.path).unwrap();
    assert!(written.contains(&report.nonce.to_string()));
}

#[test]
fn workflow_set_writes_nothing_when_one_file_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let set = WorkflowSet::new(dir.path());
    fs::create_dir_all(dir.path().join(".github/workflows")).unwrap();
    fs::write(set.path(Environment::Production), PRODUCTION).unwrap();
    fs::write(set.path(Environment::Sandbox), SANDBOX).unwrap();

    let rewriter = Rewriter::new(&DeploymentConfig::default()).unwrap();
    let err = set.apply_all(&rewriter, &Environment::ALL, false).unwrap_err();

    assert_eq!(err.kind(), "Io");
    assert!(err.to_string().contains("deploy-development.yml"));
    assert_eq!(fs::read_to_string(set.path(Environment::Production)).unwrap(), PRODUCTION);
    assert_eq!(fs::read_to_string(set.path(Environment::Sandbox)).unwrap(), SANDBOX);
}

#[test]
fn workflow_set_fails_on_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let rewriter = Rewriter::new(&DeploymentConfig::default()).unwrap();
    let err = WorkflowSet::new(dir.path())
        .apply(&rewriter, Environment::Production, false)
        .unwrap_err();
    assert_eq!(err.kind(), "Io");
    assert!(err.to_string().contains("deploy-production.yml"));
}

fn strip_nonce(text: &str) -> String {
    text.lines().filter(|l| !l.trim_start().starts_with("PROJECT_NONCE:")).collect::<Vec<_>>().join("\n")
}

proptest! {
    #[test]
    fn rewriting_twice_only_changes_the_nonce(
        key in "[a-z][a-z0-9-]{0,20}",
        sponsor in "[A-Za-z][A-Za-z0-9 ]{0,12}[A-Za-z0-9]",
        team in "[a-z]{1,10}",
        follows in any::<bool>(),
        multi in any::<bool>(),
        env_index in 0usize..3,
    ) {
        let config: DeploymentConfig = DeploymentConfigInner::builder()
            .account_mode(if multi { AccountMode::Multi } else { AccountMode::Single })
            .project(ProjectConfig::builder().key(key).sponsor(sponsor).team(team).build())
            .triggers(izero_domain::TriggerConfig::builder().sandbox_follows_development(follows).build())
            .build()
            .into();
        let env = Environment::ALL[env_index];
        let rewriter = Rewriter::new(&config).unwrap();

        let first = rewriter.rewrite(SANDBOX, env).unwrap();
        let second = rewriter.rewrite(&first.text, env).unwrap();

        prop_assert_eq!(strip_nonce(&first.text), strip_nonce(&second.text));
        prop_assert_eq!(first.text.lines().count(), second.text.lines().count());
    }

    #[test]
    fn lines_without_anchors_pass_through(
        filler in proptest::collection::vec("[a-z_]{1,8}: [a-z0-9 .]{0,12}", 1..8),
    ) {
        let text = format!("{}\nPROJECT_KEY: old\n", filler.join("\n"));
        let out = Rewriter::new(&DeploymentConfig::default()).unwrap().rewrite(&text, Environment::Development).unwrap();
        for line in &filler {
            prop_assert!(out.text.lines().any(|l| l == line));
        }
    }
}
