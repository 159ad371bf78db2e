use std::sync::Arc;

use chrono::{TimeZone, Utc};
use hrdesk_application::AppContext;
use hrdesk_core::clock::FixedClock;
use hrdesk_core::config::{DEFAULT_HR_PASSWORD, DEFAULT_HR_USERNAME, RootConfig};
use hrdesk_core::employee::ExperienceType;
use hrdesk_core::session::Role;
use hrdesk_core::wizard::{FormField, HiddenFieldPolicy, IntakeWizard, WizardStage};
use hrdesk_core::HrError;
use hrdesk_infrastructure::Argon2CredentialHasher;
use tempfile::TempDir;

fn context(policy: HiddenFieldPolicy) -> (AppContext, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let mut config = RootConfig::default();
    config.wizard.hidden_fields = policy;

    let ctx = AppContext::with_parts(
        &config,
        temp_dir.path(),
        Arc::new(Argon2CredentialHasher::with_params(8, 1, 1).unwrap()),
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 6, 3, 9, 15, 0).unwrap())),
    )
    .unwrap();
    (ctx, temp_dir)
}

/// Experienced at Acme, then switched back to Fresher before submitting.
fn acme_then_fresher(wizard: &mut IntakeWizard) {
    wizard.set_field(FormField::EmployeeName, "Nisha Patel").unwrap();
    wizard.next();
    wizard.next();
    assert_eq!(wizard.stage(), WizardStage::Experience);

    wizard
        .set_field(FormField::ExperienceType, "Experienced")
        .unwrap();
    wizard.set_field(FormField::OrganizationName, "Acme").unwrap();
    wizard.set_field(FormField::ExperienceType, "Fresher").unwrap();
    assert!(!wizard.is_visible(FormField::OrganizationName));

    wizard.next();
    wizard.set_field(FormField::Username, "nisha").unwrap();
    wizard.set_field(FormField::Password, "Welcome@1").unwrap();
}

#[tokio::test]
async fn test_hidden_branch_values_are_kept_under_retain() {
    let (ctx, _temp_dir) = context(HiddenFieldPolicy::Retain);

    let mut wizard = ctx.intake.start();
    acme_then_fresher(&mut wizard);
    let employee = ctx.intake.submit(&mut wizard).await.unwrap();

    let stored = ctx.directory.get(&employee.id).await.unwrap();
    assert_eq!(stored.experience_type, ExperienceType::Fresher);
    assert_eq!(stored.organization_name.as_deref(), Some("Acme"));
}

#[tokio::test]
async fn test_hidden_branch_values_are_dropped_under_clear() {
    let (ctx, _temp_dir) = context(HiddenFieldPolicy::ClearOnBranchChange);

    let mut wizard = ctx.intake.start();
    acme_then_fresher(&mut wizard);
    let employee = ctx.intake.submit(&mut wizard).await.unwrap();

    let stored = ctx.directory.get(&employee.id).await.unwrap();
    assert_eq!(stored.organization_name, None);
}

#[tokio::test]
async fn test_added_employee_can_sign_in_and_read_own_record() {
    let (ctx, temp_dir) = context(HiddenFieldPolicy::Retain);

    ctx.auth
        .login_as(Role::Hr, DEFAULT_HR_USERNAME, DEFAULT_HR_PASSWORD)
        .await
        .unwrap();
    let mut wizard = ctx.intake.start();
    acme_then_fresher(&mut wizard);
    let employee = ctx.intake.submit(&mut wizard).await.unwrap();
    ctx.auth.logout().await.unwrap();

    let raw = std::fs::read_to_string(temp_dir.path().join("employees.json")).unwrap();
    assert!(!raw.contains("Welcome@1"));
    assert!(raw.contains("$argon2id$"));

    let user = ctx
        .auth
        .login_as(Role::Employee, "nisha", "Welcome@1")
        .await
        .unwrap();
    assert_eq!(user.employee_id.as_deref(), Some(employee.id.as_str()));

    let own = ctx.directory.own_profile(&user).await.unwrap();
    assert_eq!(own.employee_name, "Nisha Patel");
}

#[tokio::test]
async fn test_wrong_login_type_persists_no_session() {
    let (ctx, temp_dir) = context(HiddenFieldPolicy::Retain);

    let err = ctx
        .auth
        .login_as(Role::Employee, DEFAULT_HR_USERNAME, DEFAULT_HR_PASSWORD)
        .await
        .unwrap_err();

    assert_eq!(err, HrError::InvalidCredentials);
    assert!(ctx.auth.current_user().await.unwrap().is_none());
    assert!(!temp_dir.path().join("currentUser.json").exists());
}

#[tokio::test]
async fn test_session_survives_a_new_context() {
    let temp_dir = TempDir::new().unwrap();
    let config = RootConfig::default();
    let hasher = Arc::new(Argon2CredentialHasher::with_params(8, 1, 1).unwrap());
    let clock = Arc::new(FixedClock(Utc::now()));

    let first = AppContext::with_parts(&config, temp_dir.path(), hasher.clone(), clock.clone())
        .unwrap();
    first
        .auth
        .login_user(DEFAULT_HR_USERNAME, DEFAULT_HR_PASSWORD)
        .await
        .unwrap()
        .unwrap();

    let second = AppContext::with_parts(&config, temp_dir.path(), hasher, clock).unwrap();
    let user = second.auth.require_role(Role::Hr).await.unwrap();
    assert_eq!(user.username, DEFAULT_HR_USERNAME);
}

#[tokio::test]
async fn test_list_and_delete_flow() {
    let (ctx, _temp_dir) = context(HiddenFieldPolicy::Retain);
    assert!(ctx.directory.rows().await.unwrap().is_empty());

    let mut wizard = ctx.intake.start();
    acme_then_fresher(&mut wizard);
    let employee = ctx.intake.submit(&mut wizard).await.unwrap();

    let rows = ctx.directory.rows().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username, "nisha");

    let err = ctx.directory.delete(&employee.id, "").await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(ctx.directory.rows().await.unwrap().len(), 1);

    ctx.directory
        .delete(&employee.id, "Duplicate entry")
        .await
        .unwrap();
    assert!(ctx.directory.rows().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_same_instant_submissions_from_two_front_ends_keep_both_records() {
    let temp_dir = TempDir::new().unwrap();
    let config = RootConfig::default();
    let hasher = Arc::new(Argon2CredentialHasher::with_params(8, 1, 1).unwrap());
    let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap()));

    // two contexts, each with its own id generator, like two running processes
    let first = AppContext::with_parts(&config, temp_dir.path(), hasher.clone(), clock.clone())
        .unwrap();
    let second = AppContext::with_parts(&config, temp_dir.path(), hasher, clock).unwrap();

    let mut alice = first.intake.start();
    alice.set_field(FormField::EmployeeName, "Alice").unwrap();
    let mut bob = second.intake.start();
    bob.set_field(FormField::EmployeeName, "Bob").unwrap();
    for wizard in [&mut alice, &mut bob] {
        wizard.next();
        wizard.next();
        wizard.next();
    }

    let (a, b) = tokio::join!(
        first.intake.submit(&mut alice),
        second.intake.submit(&mut bob)
    );
    let (a, b) = (a.unwrap(), b.unwrap());
    assert_ne!(a.id, b.id);

    let mut stored: Vec<(String, String)> = first
        .directory
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|e| (e.id, e.employee_name))
        .collect();
    stored.sort();
    let mut expected = vec![(a.id, a.employee_name), (b.id, b.employee_name)];
    expected.sort();
    assert_eq!(stored, expected);
}
