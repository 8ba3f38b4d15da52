//! Initial data set for a fresh database.
//!
//! Mirrors the numbers the frontend ships hardcoded, so a freshly seeded
//! backend and the static site agree. Seeding is keyed off the profile row:
//! once it exists the whole pass is skipped.

use rusqlite::{Transaction, params};

fn json_list(items: &[&str]) -> rusqlite::Result<String> {
  serde_json::to_string(items)
    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Populate an empty database. Idempotent.
pub fn seed_tx(tx: &Transaction<'_>) -> rusqlite::Result<()> {
  let already: i64 =
    tx.query_row("SELECT COUNT(*) FROM player_profile", [], |r| r.get(0))?;
  if already > 0 {
    return Ok(());
  }

  tx.execute(
    "INSERT INTO player_profile
       (id, name, title, dev_class, avatar_initials, level, xp,
        xp_next_level, strength, intelligence, dexterity, wisdom)
     VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
    params![
      "Renan Carvalho",
      "Full-Stack Mage",
      "Full-Stack Mage",
      "RC",
      15,
      6450,
      10_000,
      72,
      88,
      65,
      70
    ],
  )?;

  // (skill_id, name, category, category name, level, unlocked, description,
  //  color, projects). Three branches of five, max level 5 throughout.
  #[rustfmt::skip]
  let skills: &[(&str, &str, &str, &str, i64, bool, &str, &str, &[&str])] = &[
    ("react",      "React",            "frontend", "Frontend Arcana", 4, true,  "Component-based UI library with hooks, context, and state management patterns.", "#8b5cf6", &["DevQuest", "Dashboard UI"]),
    ("typescript", "TypeScript",       "frontend", "Frontend Arcana", 4, true,  "Strongly typed JavaScript for safer, more maintainable code.",                   "#8b5cf6", &["DevQuest", "ML Pipeline"]),
    ("tailwind",   "Tailwind CSS",     "frontend", "Frontend Arcana", 3, true,  "Utility-first CSS framework for rapid UI development.",                          "#8b5cf6", &["DevQuest"]),
    ("threejs",    "Three.js",         "frontend", "Frontend Arcana", 2, true,  "3D graphics library for immersive web experiences.",                             "#8b5cf6", &["DevQuest"]),
    ("nextjs",     "Next.js",          "frontend", "Frontend Arcana", 0, false, "React framework for production — SSR, routing, and optimization.",               "#8b5cf6", &[]),
    ("python",     "Python",           "backend",  "Backend Warfare", 4, true,  "Versatile language for backend, data science, and scripting.",                   "#3b82f6", &["ML Pipeline", "DevQuest API"]),
    ("fastapi",    "FastAPI",          "backend",  "Backend Warfare", 3, true,  "Modern, high-performance Python web framework with auto docs.",                  "#3b82f6", &["DevQuest API"]),
    ("nodejs",     "Node.js",          "backend",  "Backend Warfare", 3, true,  "JavaScript runtime for server-side applications.",                               "#3b82f6", &["Chat API"]),
    ("sql",        "SQL",              "backend",  "Backend Warfare", 3, true,  "Database querying and management across multiple engines.",                      "#3b82f6", &["ML Pipeline", "DevQuest"]),
    ("docker",     "Docker",           "backend",  "Backend Warfare", 0, false, "Container orchestration for reproducible deployments.",                          "#3b82f6", &[]),
    ("pandas",     "Pandas",           "data",     "Data Sorcery",    3, true,  "Data manipulation and analysis library for Python.",                             "#22c55e", &["ML Pipeline"]),
    ("postgresql", "PostgreSQL",       "data",     "Data Sorcery",    3, true,  "Advanced open-source relational database system.",                               "#22c55e", &["ML Pipeline"]),
    ("etl",        "ETL Pipelines",    "data",     "Data Sorcery",    2, true,  "Extract, Transform, Load workflows for data processing.",                        "#22c55e", &["ML Pipeline"]),
    ("analytics",  "Analytics",        "data",     "Data Sorcery",    2, true,  "Data visualization and business intelligence insights.",                         "#22c55e", &["ML Pipeline"]),
    ("ml",         "Machine Learning", "data",     "Data Sorcery",    0, false, "Predictive models and intelligent systems. Requires Level 18.",                  "#22c55e", &[]),
  ];

  for (skill_id, name, cat, cat_name, level, unlocked, desc, color, projects)
    in skills
  {
    tx.execute(
      "INSERT INTO skills
         (skill_id, name, category, category_name, level, max_level,
          unlocked, description, color, projects)
       VALUES (?1, ?2, ?3, ?4, ?5, 5, ?6, ?7, ?8, ?9)",
      params![
        skill_id,
        name,
        cat,
        cat_name,
        level,
        unlocked,
        desc,
        color,
        json_list(projects)?,
      ],
    )?;
  }

  // Career badges, already earned.
  let earned: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("First Commit",   "Made your first repository contribution", "git-branch", "coding",  "#22c55e", "2024-01-15"),
    ("Polyglot",       "Proficient in 3+ programming languages",  "code",       "skills",  "#3b82f6", "2024-03-20"),
    ("Star Collector", "Earned 10+ stars across repositories",    "star",       "social",  "#f0c040", "2024-06-10"),
    ("Quest Master",   "Completed 5+ major projects",             "trophy",     "quests",  "#8b5cf6", "2024-09-01"),
    ("Bug Hunter",     "Fixed 50+ bugs across projects",          "flame",      "coding",  "#ef4444", "2024-05-12"),
    ("Code Wizard",    "Wrote 10,000+ lines of clean code",       "code",       "coding",  "#8b5cf6", "2024-07-22"),
    ("Shield Bearer",  "Maintained 90%+ test coverage",           "shield",     "quality", "#3b82f6", "2024-08-15"),
    ("Quest Champion", "Delivered a project ahead of deadline",   "trophy",     "quests",  "#f0c040", "2024-11-30"),
  ];
  for (name, desc, icon, cat, color, date) in earned {
    tx.execute(
      "INSERT INTO achievements
         (name, description, icon, category, color, unlocked, unlock_date)
       VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
      params![name, desc, icon, cat, color, date],
    )?;
  }

  // Badges the rule table can still unlock; they start locked.
  let locked: &[(&str, &str, &str, &str, &str)] = &[
    ("Oracle Initiate", "Consulted the Oracle for the first time", "sparkles", "oracle",  "#8b5cf6"),
    ("Oracle Sage",     "Sent 20 messages to the Oracle",          "sparkles", "oracle",  "#f0c040"),
    ("Scroll Keeper",   "Published 3 blog posts",                  "scroll",   "writing", "#3b82f6"),
    ("CV Master",       "Had a CV analyzed by the Oracle",         "file",     "career",  "#22c55e"),
  ];
  for (name, desc, icon, cat, color) in locked {
    tx.execute(
      "INSERT INTO achievements
         (name, description, icon, category, color, unlocked, unlock_date)
       VALUES (?1, ?2, ?3, ?4, ?5, 0, NULL)",
      params![name, desc, icon, cat, color],
    )?;
  }

  let posts: &[(&str, &str, &str, &[&str], &str, bool, &str)] = &[
    (
      "Won ActInSpace Hackathon — 1st Place!",
      "## Representing Brazil on the World Stage\n\nOur team competed in the \
       **ActInSpace international hackathon** in France, tackling real \
       challenges from the European Space Agency. The judges awarded us \
       **1st place** out of teams from over 20 countries.\n\n\
       ### Key Takeaways\n- Cross-cultural collaboration is a superpower\n\
       - 48-hour sprints teach you more than months of comfortable coding",
      "achievement",
      &["hackathon", "space-tech", "innovation", "france", "1st-place"],
      "#f0c040",
      true,
      "2026-01-20T10:00:00+00:00",
    ),
    (
      "Started AI Residency at SENAI/SC",
      "## A New Chapter Begins\n\nExcited to announce that I've started my \
       **AI Residency** at SENAI/SC, one of Brazil's premier technology \
       institutions. The program covers machine learning, computer vision, \
       generative AI, embedded AI, and MLOps.",
      "update",
      &["ai", "machine-learning", "senai", "career", "education"],
      "#8b5cf6",
      false,
      "2025-03-15T09:00:00+00:00",
    ),
    (
      "DevQuest: Building My Career as an RPG",
      "## Why Gamify a Portfolio?\n\nTraditional portfolios are static and \
       boring. **DevQuest** transforms my career into an RPG adventure: a \
       skill tree of real technologies, a quest log tracking GitHub projects, \
       a chronicle timeline, and the Oracle advisor.",
      "project",
      &["devquest", "react", "fastapi", "portfolio", "typescript"],
      "#3b82f6",
      false,
      "2025-06-10T14:00:00+00:00",
    ),
    (
      "2nd Place at AKCIT Hackathon",
      "## 48 Hours of Pure Innovation\n\nOur team secured **2nd place** at \
       the AKCIT Hackathon with a Generative AI solution for automated \
       document analysis: NLP entity extraction, LLM summaries, and an \
       interactive dashboard.",
      "achievement",
      &["hackathon", "generative-ai", "nlp", "2nd-place"],
      "#22c55e",
      false,
      "2025-10-05T18:00:00+00:00",
    ),
  ];
  for (title, content, category, tags, color, pinned, created_at) in posts {
    tx.execute(
      "INSERT INTO blog_posts
         (title, content, category, tags, color, pinned,
          created_at, updated_at)
       VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
      params![
        title,
        content,
        category,
        json_list(tags)?,
        color,
        pinned,
        created_at
      ],
    )?;
  }

  Ok(())
}
