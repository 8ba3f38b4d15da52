//! Integration-style tests against an in-memory store.

use devquest_core::{
  activity::XpGrant,
  blog::NewBlogPost,
  chat::OracleReply,
  cv::{CvReport, SectionScore},
  store::GameStore,
};
use rusqlite::params;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory().await.expect("in-memory store")
}

/// Insert a level-1 profile with all stats at the floor, bypassing the seed.
async fn fresh_profile(store: &SqliteStore) {
  store
    .conn
    .call(|conn| {
      conn.execute(
        "INSERT INTO player_profile
           (id, name, title, dev_class, avatar_initials, level, xp,
            xp_next_level, strength, intelligence, dexterity, wisdom)
         VALUES (1, 'Test Hero', 'Novice', 'Novice', 'TH',
                 1, 0, 1000, 50, 50, 50, 50)",
        [],
      )?;
      Ok(())
    })
    .await
    .expect("insert profile");
}

/// Insert a locked achievement row the rule table knows about.
async fn lockable_achievement(store: &SqliteStore, name: &str) {
  let name = name.to_string();
  store
    .conn
    .call(move |conn| {
      conn.execute(
        "INSERT INTO achievements (name, description, icon, category, color)
         VALUES (?1, 'test badge', 'sparkles', 'test', '#8b5cf6')",
        params![name],
      )?;
      Ok(())
    })
    .await
    .expect("insert achievement");
}

fn reply(topic: &str) -> OracleReply {
  OracleReply {
    text:  "The Oracle speaks.".into(),
    topic: topic.into(),
  }
}

fn report() -> CvReport {
  CvReport {
    score:      80,
    sections:   vec![SectionScore {
      name:     "Experience".into(),
      score:    82,
      feedback: "Solid".into(),
    }],
    strengths:  vec!["clear".into()],
    weaknesses: vec!["short".into()],
    tips:       vec!["quantify".into()],
  }
}

// ─── Seeding ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn seed_populates_once() {
  let store = store().await;
  store.seed_if_empty().await.unwrap();
  store.seed_if_empty().await.unwrap(); // second call is a no-op

  let profile = store.profile().await.unwrap().expect("seeded profile");
  assert_eq!(profile.name, "Renan Carvalho");
  assert_eq!((profile.level, profile.xp, profile.xp_next_level), (
    15, 6450, 10_000
  ));

  assert_eq!(store.skills().await.unwrap().len(), 15);
  assert_eq!(store.achievements().await.unwrap().len(), 12);
  assert_eq!(store.list_posts().await.unwrap().len(), 4);
}

#[tokio::test]
async fn seeded_lockable_badges_start_locked() {
  let store = store().await;
  store.seed_if_empty().await.unwrap();

  let achievements = store.achievements().await.unwrap();
  for name in ["Oracle Initiate", "Oracle Sage", "Scroll Keeper", "CV Master"]
  {
    let a = achievements
      .iter()
      .find(|a| a.name == name)
      .unwrap_or_else(|| panic!("{name} missing"));
    assert!(!a.unlocked, "{name} should start locked");
    assert!(a.unlock_date.is_none());
  }
}

#[tokio::test]
async fn seeded_posts_are_pinned_first() {
  let store = store().await;
  store.seed_if_empty().await.unwrap();

  let posts = store.list_posts().await.unwrap();
  assert!(posts[0].pinned);
  assert!(posts[0].title.starts_with("Won ActInSpace"));
  // The rest are newest first.
  for pair in posts[1..].windows(2) {
    assert!(pair[0].created_at >= pair[1].created_at);
  }
}

// ─── XP engine ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn award_without_profile_is_a_noop() {
  let store = store().await;
  let event = store
    .award_xp(XpGrant::new("test", "no profile yet", 500))
    .await
    .unwrap();

  assert_eq!(event.xp_gained, 500);
  assert_eq!(event.new_xp, 0);
  assert_eq!(event.new_level, 1);
  assert!(!event.leveled_up);
  assert!(event.new_achievements.is_empty());

  // Nothing was logged either.
  assert!(store.activity_log(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn grant_of_1500_levels_once_with_residual() {
  let store = store().await;
  fresh_profile(&store).await;

  let event =
    store.award_xp(XpGrant::new("test", "big grant", 1500)).await.unwrap();

  assert_eq!(event.old_level, 1);
  assert!(event.leveled_up);
  assert_eq!((event.new_level, event.new_xp, event.xp_next_level), (
    2, 500, 2000
  ));
}

#[tokio::test]
async fn exact_threshold_rolls_to_zero() {
  let store = store().await;
  fresh_profile(&store).await;

  let event =
    store.award_xp(XpGrant::new("test", "exact", 1000)).await.unwrap();
  assert_eq!((event.new_level, event.new_xp, event.xp_next_level), (
    2, 0, 2000
  ));
}

#[tokio::test]
async fn one_grant_can_cross_several_levels() {
  let store = store().await;
  fresh_profile(&store).await;

  let event =
    store.award_xp(XpGrant::new("test", "huge", 3500)).await.unwrap();
  assert_eq!((event.new_level, event.new_xp, event.xp_next_level), (
    3, 500, 3000
  ));
  assert!(event.new_xp < event.xp_next_level);
}

#[tokio::test]
async fn log_records_the_raw_amount() {
  let store = store().await;
  fresh_profile(&store).await;

  store.award_xp(XpGrant::new("test", "rollover grant", 1500)).await.unwrap();

  let log = store.activity_log(10).await.unwrap();
  assert_eq!(log.len(), 1);
  assert_eq!(log[0].action, "test");
  assert_eq!(log[0].xp_gained, 1500); // not the post-rollover residual
}

#[tokio::test]
async fn activity_log_is_newest_first_and_limited() {
  let store = store().await;
  fresh_profile(&store).await;

  for i in 0..5 {
    store
      .award_xp(XpGrant::new("test", format!("grant {i}"), 10))
      .await
      .unwrap();
  }

  let log = store.activity_log(3).await.unwrap();
  assert_eq!(log.len(), 3);
  assert_eq!(log[0].description, "grant 4");
  assert_eq!(log[2].description, "grant 2");
}

// ─── Achievements ────────────────────────────────────────────────────────────

#[tokio::test]
async fn first_chat_unlocks_oracle_initiate_once() {
  let store = store().await;
  fresh_profile(&store).await;
  lockable_achievement(&store, "Oracle Initiate").await;

  let event = store
    .record_chat_turn("hello".into(), reply("greeting"), XpGrant::chat_turn())
    .await
    .unwrap();
  let names: Vec<_> =
    event.new_achievements.iter().map(|a| a.name.as_str()).collect();
  assert_eq!(names, ["Oracle Initiate"]);

  // A second turn must not re-unlock it.
  let event = store
    .record_chat_turn("again".into(), reply("greeting"), XpGrant::chat_turn())
    .await
    .unwrap();
  assert!(event.new_achievements.is_empty());

  let badge = store
    .achievements()
    .await
    .unwrap()
    .into_iter()
    .find(|a| a.name == "Oracle Initiate")
    .unwrap();
  assert!(badge.unlocked);
  assert!(badge.unlock_date.is_some());
}

#[tokio::test]
async fn simultaneous_unlocks_come_in_declaration_order() {
  let store = store().await;
  fresh_profile(&store).await;
  lockable_achievement(&store, "Scroll Keeper").await;
  lockable_achievement(&store, "CV Master").await;

  // Two posts and a CV row first, so the third post trips both rules at once.
  for i in 0..2 {
    store
      .create_post(post_input(&format!("post {i}")), XpGrant::blog_post("p"))
      .await
      .unwrap();
  }
  store
    .conn
    .call(|conn| {
      conn.execute(
        "INSERT INTO cv_analyses
           (filename, file_size, score, sections, strengths, weaknesses,
            tips, created_at)
         VALUES ('cv.pdf', 10, 80, '[]', '[]', '[]', '[]',
                 '2026-01-01T00:00:00+00:00')",
        [],
      )?;
      Ok(())
    })
    .await
    .unwrap();

  let (_, event) = store
    .create_post(post_input("third post"), XpGrant::blog_post("third post"))
    .await
    .unwrap();
  let names: Vec<_> =
    event.new_achievements.iter().map(|a| a.name.as_str()).collect();
  assert_eq!(names, ["Scroll Keeper", "CV Master"]);
}

// ─── Stats ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn stats_grow_with_activity_and_never_shrink() {
  let store = store().await;
  fresh_profile(&store).await;

  store.award_xp(XpGrant::new("quest", "one", 10)).await.unwrap();
  store.award_xp(XpGrant::new("exploration", "two", 10)).await.unwrap();

  let p = store.profile().await.unwrap().unwrap();
  // Two distinct actions: DEX = 50 + 2*5.
  assert_eq!(p.dexterity, 60);

  // Repeating an existing action adds no new distinct label.
  store.award_xp(XpGrant::new("quest", "three", 10)).await.unwrap();
  let p = store.profile().await.unwrap().unwrap();
  assert_eq!(p.dexterity, 60);
}

// ─── Chat ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn chat_turn_writes_user_then_oracle() {
  let store = store().await;
  fresh_profile(&store).await;

  store
    .record_chat_turn(
      "what skills do I have?".into(),
      reply("skill"),
      XpGrant::chat_turn(),
    )
    .await
    .unwrap();

  let page = store.chat_history(10, 0).await.unwrap();
  assert_eq!(page.total, 2);
  assert_eq!(page.messages[0].role.as_str(), "user");
  assert_eq!(page.messages[0].topic, None);
  assert_eq!(page.messages[1].role.as_str(), "oracle");
  assert_eq!(page.messages[1].topic.as_deref(), Some("skill"));
}

#[tokio::test]
async fn chat_history_paginates_chronologically() {
  let store = store().await;
  fresh_profile(&store).await;

  for i in 0..3 {
    store
      .record_chat_turn(
        format!("message {i}"),
        reply("greeting"),
        XpGrant::chat_turn(),
      )
      .await
      .unwrap();
  }

  // Six rows total. First page of four has more; the next page doesn't.
  let page = store.chat_history(4, 0).await.unwrap();
  assert_eq!(page.total, 6);
  assert_eq!(page.messages.len(), 4);
  assert!(page.has_more);
  assert_eq!(page.messages[0].text, "message 0");

  let page = store.chat_history(4, 4).await.unwrap();
  assert_eq!(page.messages.len(), 2);
  assert!(!page.has_more);
}

#[tokio::test]
async fn oversized_page_params_are_clamped() {
  let store = store().await;
  fresh_profile(&store).await;

  store
    .record_chat_turn("hi".into(), reply("greeting"), XpGrant::chat_turn())
    .await
    .unwrap();

  // Degenerate query parameters must neither overflow nor misreport paging.
  let page = store.chat_history(usize::MAX, 1).await.unwrap();
  assert_eq!(page.total, 2);
  assert_eq!(page.messages.len(), 1);
  assert!(!page.has_more);

  let page = store.chat_history(usize::MAX, usize::MAX).await.unwrap();
  assert!(page.messages.is_empty());
  assert!(!page.has_more);

  assert_eq!(store.activity_log(usize::MAX).await.unwrap().len(), 1);
}

#[tokio::test]
async fn oracle_stats_track_user_messages_and_topics() {
  let store = store().await;
  fresh_profile(&store).await;

  for topic in ["skill", "skill", "progress", "career", "quest", "stats"] {
    store
      .record_chat_turn("q".into(), reply(topic), XpGrant::chat_turn())
      .await
      .unwrap();
  }

  let stats = store.oracle_stats().await.unwrap();
  assert_eq!(stats.messages_sent, 6);
  assert_eq!(stats.topics_explored, 5); // "skill" counted once
  assert_eq!(stats.oracle_level, 2); // 1 + 6/5
}

#[tokio::test]
async fn oracle_stats_default_wisdom_without_profile() {
  let store = store().await;
  let stats = store.oracle_stats().await.unwrap();
  assert_eq!(stats.wisdom_score, 70);
  assert_eq!(stats.messages_sent, 0);
  assert_eq!(stats.oracle_level, 1);
}

// ─── Blog ────────────────────────────────────────────────────────────────────

fn post_input(title: &str) -> NewBlogPost {
  NewBlogPost {
    title:    title.into(),
    content:  "body".into(),
    category: "update".into(),
    tags:     vec!["rust".into()],
    color:    "#8b5cf6".into(),
    pinned:   false,
  }
}

#[tokio::test]
async fn blog_crud_round_trip() {
  let store = store().await;
  fresh_profile(&store).await;

  let (post, event) = store
    .create_post(post_input("Hello"), XpGrant::blog_post("Hello"))
    .await
    .unwrap();
  assert_eq!(event.xp_gained, 75);
  assert_eq!(post.title, "Hello");
  assert_eq!(post.tags, ["rust"]);

  let fetched = store.get_post(post.id).await.unwrap().expect("created post");
  assert_eq!(fetched.title, "Hello");

  let mut edit = post_input("Hello, world");
  edit.pinned = true;
  let updated =
    store.update_post(post.id, edit).await.unwrap().expect("updated post");
  assert_eq!(updated.title, "Hello, world");
  assert!(updated.pinned);
  assert!(updated.updated_at >= updated.created_at);

  assert!(store.delete_post(post.id).await.unwrap());
  assert!(store.get_post(post.id).await.unwrap().is_none());
}

#[tokio::test]
async fn missing_post_ids_are_not_errors() {
  let store = store().await;
  assert!(store.get_post(999).await.unwrap().is_none());
  assert!(store.update_post(999, post_input("x")).await.unwrap().is_none());
  assert!(!store.delete_post(999).await.unwrap());
}

#[tokio::test]
async fn pinned_posts_list_first() {
  let store = store().await;
  fresh_profile(&store).await;

  store
    .create_post(post_input("older"), XpGrant::blog_post("older"))
    .await
    .unwrap();
  let mut pinned = post_input("sticky");
  pinned.pinned = true;
  store
    .create_post(pinned, XpGrant::blog_post("sticky"))
    .await
    .unwrap();
  store
    .create_post(post_input("newest"), XpGrant::blog_post("newest"))
    .await
    .unwrap();

  let posts = store.list_posts().await.unwrap();
  assert_eq!(posts[0].title, "sticky");
}

// ─── CV ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn cv_analyses_persist_and_list_newest_first() {
  let store = store().await;
  fresh_profile(&store).await;

  let (first, event) = store
    .record_cv_analysis(
      "resume-v1.pdf".into(),
      1024,
      report(),
      XpGrant::cv_upload("resume-v1.pdf"),
    )
    .await
    .unwrap();
  assert_eq!(event.xp_gained, 50);
  assert_eq!(first.filename, "resume-v1.pdf");
  assert_eq!(first.report.score, 80);

  let (second, _) = store
    .record_cv_analysis(
      "resume-v2.pdf".into(),
      2048,
      report(),
      XpGrant::cv_upload("resume-v2.pdf"),
    )
    .await
    .unwrap();

  let latest = store.latest_cv_analysis().await.unwrap().expect("latest");
  assert_eq!(latest.id, second.id);
  assert_eq!(latest.report.sections.len(), 1);

  let all = store.list_cv_analyses().await.unwrap();
  assert_eq!(all.len(), 2);
  assert_eq!(all[0].filename, "resume-v2.pdf");
  assert_eq!(all[1].filename, "resume-v1.pdf");
}

#[tokio::test]
async fn no_cv_analysis_is_none() {
  let store = store().await;
  assert!(store.latest_cv_analysis().await.unwrap().is_none());
  assert!(store.list_cv_analyses().await.unwrap().is_empty());
}
