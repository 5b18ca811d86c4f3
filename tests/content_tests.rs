mod test_utils;

use portfolio_admin::AppState;
use portfolio_admin::entities::project::Project;
use portfolio_admin::entities::skill::Skill;
use portfolio_admin::errors::AppError;
use test_utils::*;

fn create_project(app: &mut AppState, title: &str) -> Project {
    app.projects.start_create().unwrap();
    *app.projects.draft_mut().unwrap() = sample_project(title);
    app.projects.confirm().unwrap()
}

fn create_skill(app: &mut AppState, name: &str, level: u8) -> Skill {
    app.skills.start_create().unwrap();
    *app.skills.draft_mut().unwrap() = sample_skill(name, level);
    app.skills.confirm().unwrap()
}

#[test]
fn creating_projects_assigns_fresh_ids_and_appends() {
    let mut app = test_app();

    let first = create_project(&mut app, "First");
    let second = create_project(&mut app, "Second");

    assert_ne!(first.id, 0);
    assert_ne!(second.id, 0);
    assert_ne!(first.id, second.id);

    let titles: Vec<String> = app.projects.list().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[test]
fn updating_a_project_replaces_it_in_place() {
    let mut app = test_app();
    let first = create_project(&mut app, "First");
    create_project(&mut app, "Second");

    let mut edited = first.clone();
    edited.title = "First, revised".to_string();
    app.projects.start_edit(edited).unwrap();
    let saved = app.projects.confirm().unwrap();

    assert_eq!(saved.id, first.id);
    let titles: Vec<String> = app.projects.list().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["First, revised", "Second"]);
}

#[test]
fn saving_an_unmodified_project_is_idempotent() {
    let mut app = test_app();
    create_project(&mut app, "First");
    create_project(&mut app, "Second");

    let before = app.projects.list();
    app.projects.start_edit(before[0].clone()).unwrap();
    app.projects.confirm().unwrap();

    assert_eq!(app.projects.list(), before);
}

#[test]
fn saving_an_unknown_project_id_changes_nothing() {
    let mut app = test_app();
    create_project(&mut app, "Only");
    let before = app.projects.list();

    let mut ghost = sample_project("Ghost");
    ghost.id = 9999;
    app.projects.start_edit(ghost).unwrap();
    app.projects.confirm().unwrap();

    assert_eq!(app.projects.list(), before);
}

#[test]
fn deleting_an_unknown_project_id_is_a_no_op() {
    let mut app = test_app();
    create_project(&mut app, "First");
    create_project(&mut app, "Second");
    let before = app.projects.list();

    app.projects.delete(9999);

    assert_eq!(app.projects.list(), before);
}

#[test]
fn skills_upsert_by_name_in_place() {
    let mut app = test_app();
    create_skill(&mut app, "React", 70);
    create_skill(&mut app, "Python", 80);

    // Same name again: replaced at its current position, not appended.
    create_skill(&mut app, "React", 90);

    let skills = app.skills.list();
    assert_eq!(skills.len(), 2);
    assert_eq!(skills[0].name, "React");
    assert_eq!(skills[0].level, 90);
    assert_eq!(skills[1].name, "Python");
}

#[test]
fn saving_an_unmodified_skill_is_idempotent() {
    let mut app = test_app();
    create_skill(&mut app, "React", 70);
    create_skill(&mut app, "Python", 80);

    let before = app.skills.list();
    app.skills.start_edit(before[1].clone()).unwrap();
    app.skills.confirm().unwrap();

    assert_eq!(app.skills.list(), before);
}

#[test]
fn deleting_skills_by_name() {
    let mut app = test_app();
    create_skill(&mut app, "React", 70);
    create_skill(&mut app, "Python", 80);

    app.skills.delete("React");
    let names: Vec<String> = app.skills.list().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Python"]);

    // Unknown names are a no-op.
    app.skills.delete("Cobol");
    assert_eq!(app.skills.list().len(), 1);
}

#[test]
fn blank_tags_are_ignored_and_duplicates_allowed() {
    let mut app = test_app();
    app.projects.start_create().unwrap();

    app.projects.add_tag("");
    app.projects.add_tag("   ");
    app.projects.add_tag("Go");
    app.projects.add_tag("Go");
    assert_eq!(app.projects.draft().unwrap().stack, vec!["Go", "Go"]);

    app.projects.remove_tag(5);
    assert_eq!(app.projects.draft().unwrap().stack.len(), 2);
    app.projects.remove_tag(0);
    assert_eq!(app.projects.draft().unwrap().stack, vec!["Go"]);
}

#[test]
fn cancel_discards_the_draft_without_persisting() {
    let mut app = test_app();
    app.projects.start_create().unwrap();
    app.projects.draft_mut().unwrap().title = "Abandoned".to_string();

    app.projects.cancel();

    assert!(app.projects.list().is_empty());
    assert!(app.projects.draft().is_none());
    // The session is idle again, so a new draft can open.
    app.projects.start_create().unwrap();
}

#[test]
fn a_second_draft_cannot_open_while_one_is_active() {
    let mut app = test_app();
    app.projects.start_create().unwrap();

    assert!(matches!(
        app.projects.start_create(),
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        app.projects.start_edit(sample_project("Other")),
        Err(AppError::Conflict(_))
    ));
}

#[test]
fn site_config_patch_round_trips_through_the_store() {
    let app = test_app();

    let updated = app.site.update(portfolio_admin::entities::site_config::SiteConfigPatch {
        hero_title: Some("Hi, I'm Ana".to_string()),
        email: Some("ana@example.com".to_string()),
        ..Default::default()
    });
    assert_eq!(updated.hero_title, "Hi, I'm Ana");

    let fetched = app.site.get();
    assert_eq!(fetched.email, "ana@example.com");
    // Untouched fields keep their defaults.
    assert_eq!(fetched.about_title, "About Me");
}
