//! Client integration tests against the documents in `client/fixtures/`.

use std::io::Write;

use tb_access::{Guarded, ProfileUpdate, Redirect};
use tb_client::routes::Screen;
use tb_client::{App, Config};

fn titles(nodes: &[tb_access::NavigationNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.title.as_str()).collect()
}

#[test]
fn test_fixture_profile_navigation() {
    let app = App::load(Config::default_for_test()).expect("fixtures should load");
    let visible = app.visible_navigation();

    assert_eq!(titles(&visible), vec!["Dashboard", "Tasks", "Projects", "Ratings"]);
    assert_eq!(titles(&visible[3].children), vec!["Rating Configs"]);
}

#[test]
fn test_fixture_profile_routes() {
    let app = App::load(Config::default_for_test()).expect("fixtures should load");

    assert_eq!(
        app.open("/tasks"),
        Some(Guarded::View(Screen::Page("/tasks".into())))
    );
    assert_eq!(
        app.open("/projects"),
        Some(Guarded::View(Screen::Page("/projects".into())))
    );
    assert_eq!(
        app.open("/roles"),
        Some(Guarded::Redirect(Redirect::to("/dashboard")))
    );
    assert_eq!(
        app.open("/users"),
        Some(Guarded::Fallback(Screen::Notice(
            "Ask an administrator for access".into()
        )))
    );
    assert_eq!(app.open("/nowhere"), None);
}

#[test]
fn test_logout_hides_gated_content() {
    let app = App::load(Config::default_for_test()).expect("fixtures should load");
    app.store().logout();

    assert_eq!(titles(&app.visible_navigation()), vec!["Dashboard"]);
    assert_eq!(
        app.open("/tasks"),
        Some(Guarded::Redirect(Redirect::to("/login")))
    );
    assert_eq!(
        app.open("/login"),
        Some(Guarded::View(Screen::Page("/login".into())))
    );
}

#[test]
fn test_profile_update_keeps_navigation() {
    let app = App::load(Config::default_for_test()).expect("fixtures should load");
    let before = app.visible_navigation();

    assert!(app.store().update_profile(ProfileUpdate {
        display_name: Some("Mira O.".into()),
        ..Default::default()
    }));

    assert_eq!(app.visible_navigation(), before);
    assert!(app.report().contains("User: Mira O."));
}

#[test]
fn test_signed_out_without_profile_file() {
    let config = Config {
        principal_file: None,
        ..Config::default_for_test()
    };
    let app = App::load(config).expect("fixtures should load");

    assert!(!app.store().snapshot().is_authenticated());
    assert_eq!(
        app.open("/dashboard"),
        Some(Guarded::Redirect(Redirect::to("/login")))
    );
}

#[test]
fn test_report_sections() {
    let app = App::load(Config::default_for_test()).expect("fixtures should load");
    let report = app.report();

    assert!(report.contains("User: Mira Okafor"));
    assert!(report.contains(
        "Permissions: view tasks, view rating configs, view projects, edit projects"
    ));
    assert!(report.contains(
        "• Dashboard (/dashboard) *\n• Tasks (/tasks)\n• Projects (/projects)\n▸ Ratings"
    ));
    assert!(!report.contains("[star]"));
    assert!(report.contains("Rating Configs -> /ratings/configs"));
    assert!(report.contains("/ratings/final => redirect /dashboard"));
    assert!(report.contains("/users => fallback: Ask an administrator for access"));
}

#[test]
fn test_strict_catalog_rejects_typo() {
    let mut nav = tempfile::NamedTempFile::new().unwrap();
    write!(
        nav,
        r#"[{{"title": "Tasks", "href": "/tasks", "requirement": {{"permission": "veiw tasks"}}}}]"#
    )
    .unwrap();

    let lenient = Config {
        navigation_file: nav.path().to_path_buf(),
        ..Config::default_for_test()
    };
    assert!(App::load(lenient.clone()).is_ok());

    let strict = Config {
        strict_catalog: true,
        ..lenient
    };
    let err = App::load(strict).err().expect("typo should fail strict mode");
    assert!(err.to_string().contains("unknown name"));
}
