//! Repository-level tests for script versioning and the advisory lock.

use assert_matches::assert_matches;
use sqlx::PgPool;
use uwrap_core::types::DbId;
use uwrap_db::models::organization::CreateOrganization;
use uwrap_db::models::project::CreateProject;
use uwrap_db::models::script::{CreateScript, UpdateScript};
use uwrap_db::models::user::CreateUser;
use uwrap_db::repositories::{
    OrganizationRepo, ProjectRepo, ScriptRepo, ScriptVersionRepo, UserRepo,
};

async fn seed_project(pool: &PgPool) -> DbId {
    let org = OrganizationRepo::create(
        pool,
        &CreateOrganization {
            name: "Studio".to_string(),
            slug: "studio".to_string(),
            logo: None,
            settings: None,
        },
    )
    .await
    .unwrap();
    ProjectRepo::create(
        pool,
        &CreateProject {
            organization_id: org.id,
            name: "Feature".to_string(),
            description: None,
            status: None,
            cover_image: None,
            start_date: None,
            end_date: None,
            created_by_id: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_user(pool: &PgPool, email: &str) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            name: None,
            image: None,
        },
    )
    .await
    .unwrap()
    .id
}

fn content_update(content: &str) -> UpdateScript {
    UpdateScript {
        content: Some(content.to_string()),
        ..Default::default()
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn each_content_update_snapshots_previous_state(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let editor = seed_user(&pool, "editor@example.com").await;
    let script = ScriptRepo::create(
        &pool,
        &CreateScript {
            project_id,
            title: "Cold Open".to_string(),
            content: Some("first".to_string()),
            created_by_id: Some(editor),
        },
    )
    .await
    .unwrap();
    assert_eq!(script.version, 1);

    let input = UpdateScript {
        content: Some("second".to_string()),
        updated_by_id: Some(editor),
        change_description: Some("tighten dialogue".to_string()),
        ..Default::default()
    };
    let after_first = ScriptRepo::update(&pool, script.id, &input)
        .await
        .unwrap()
        .unwrap();
    let after_second = ScriptRepo::update(&pool, script.id, &content_update("third"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(after_first.version, 2);
    assert_eq!(after_second.version, 3);
    assert_eq!(after_second.content, "third");
    assert_eq!(ScriptVersionRepo::count_for_script(&pool, script.id).await.unwrap(), 2);

    let v1 = ScriptVersionRepo::find_by_script_and_version(&pool, script.id, 1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(v1.content, "first");
    assert_eq!(v1.title, "Cold Open");
    assert_eq!(v1.change_description.as_deref(), Some("tighten dialogue"));
    assert_eq!(v1.created_by_id, Some(editor));

    let v2 = ScriptVersionRepo::find_by_script_and_version(&pool, script.id, 2)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(v2.content, "second");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn live_version_is_latest_snapshot_plus_one(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let script = ScriptRepo::create(
        &pool,
        &CreateScript {
            project_id,
            title: "Loop".to_string(),
            content: None,
            created_by_id: None,
        },
    )
    .await
    .unwrap();

    for n in 0..5 {
        ScriptRepo::update(&pool, script.id, &content_update(&n.to_string()))
            .await
            .unwrap();
    }

    let live = ScriptRepo::find_by_id(&pool, script.id).await.unwrap().unwrap();
    let newest = ScriptVersionRepo::list_for_script(&pool, script.id, 1)
        .await
        .unwrap();
    assert_eq!(live.version, newest[0].version + 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_content_updates_do_not_collide(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let script = ScriptRepo::create(
        &pool,
        &CreateScript {
            project_id,
            title: "Race".to_string(),
            content: None,
            created_by_id: None,
        },
    )
    .await
    .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let pool = pool.clone();
            let id = script.id;
            tokio::spawn(async move {
                ScriptRepo::update(&pool, id, &content_update(&format!("edit {n}"))).await
            })
        })
        .collect();
    for handle in handles {
        assert_matches!(handle.await.unwrap(), Ok(Some(_)));
    }

    let live = ScriptRepo::find_by_id(&pool, script.id).await.unwrap().unwrap();
    assert_eq!(live.version, 9);
    assert_eq!(ScriptVersionRepo::count_for_script(&pool, script.id).await.unwrap(), 8);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_content_is_written_without_snapshot(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let script = ScriptRepo::create(
        &pool,
        &CreateScript {
            project_id,
            title: "Tag".to_string(),
            content: Some("keep".to_string()),
            created_by_id: None,
        },
    )
    .await
    .unwrap();

    let cleared = ScriptRepo::update(&pool, script.id, &content_update(""))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cleared.content, "");
    assert_eq!(cleared.version, 1);
    assert_eq!(ScriptVersionRepo::count_for_script(&pool, script.id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_of_missing_script_writes_nothing(pool: PgPool) {
    let result = ScriptRepo::update(&pool, 9_999, &content_update("x")).await.unwrap();
    assert!(result.is_none());

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM script_versions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lock_is_last_caller_wins_and_unlock_clears(pool: PgPool) {
    let project_id = seed_project(&pool).await;
    let alice = seed_user(&pool, "alice@example.com").await;
    let bob = seed_user(&pool, "bob@example.com").await;
    let script = ScriptRepo::create(
        &pool,
        &CreateScript {
            project_id,
            title: "Shared".to_string(),
            content: None,
            created_by_id: None,
        },
    )
    .await
    .unwrap();

    ScriptRepo::lock(&pool, script.id, alice).await.unwrap();
    let locked = ScriptRepo::lock(&pool, script.id, bob).await.unwrap().unwrap();
    assert!(locked.is_locked);
    assert_eq!(locked.locked_by_id, Some(bob));
    assert!(locked.locked_at.is_some());

    let unlocked = ScriptRepo::unlock(&pool, script.id).await.unwrap().unwrap();
    assert!(!unlocked.is_locked);
    assert_eq!(unlocked.locked_by_id, None);
    assert_eq!(unlocked.locked_at, None);
}
