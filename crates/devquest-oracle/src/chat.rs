//! The Oracle chatbot — an ordered keyword table with templated responses.
//!
//! The incoming message is lower-cased and scanned against the table in
//! declaration order; the first entry whose keyword occurs anywhere in the
//! message wins (first match by table order, not longest match). Profile and
//! skill values are substituted into the response text. No match falls back
//! to a fixed response tagged `unknown`.

use devquest_core::{chat::OracleReply, profile::PlayerProfile, skill::Skill};

/// Everything a response template may draw on.
struct ChatContext<'a> {
  profile: Option<&'a PlayerProfile>,
  skills:  &'a [Skill],
}

/// One entry of the Oracle's response table.
struct KeywordResponse {
  keyword: &'static str,
  topic:   &'static str,
  respond: fn(&ChatContext<'_>) -> String,
}

/// The response table. `skill` is deliberately first: a message mentioning
/// several topics gets the skill reading.
const RESPONSES: &[KeywordResponse] = &[
  KeywordResponse {
    keyword: "skill",
    topic:   "skill",
    respond: skill_reading,
  },
  KeywordResponse {
    keyword: "level",
    topic:   "progress",
    respond: progress_reading,
  },
  KeywordResponse {
    keyword: "xp",
    topic:   "progress",
    respond: progress_reading,
  },
  KeywordResponse {
    keyword: "career",
    topic:   "career",
    respond: |ctx| {
      format!(
        "The stars align for growth, {}. Focus on building projects that \
         only a {} could make.",
        name_of(ctx),
        title_of(ctx)
      )
    },
  },
  KeywordResponse {
    keyword: "stat",
    topic:   "stats",
    respond: stats_reading,
  },
  KeywordResponse {
    keyword: "wisdom",
    topic:   "stats",
    respond: |ctx| match ctx.profile {
      Some(p) => format!(
        "Wisdom sits at {}. Every question you bring the Oracle sharpens it.",
        p.wisdom
      ),
      None => {
        "Wisdom grows with every question. Keep asking.".to_string()
      }
    },
  },
  KeywordResponse {
    keyword: "quest",
    topic:   "quest",
    respond: quest_reading,
  },
  KeywordResponse {
    keyword: "project",
    topic:   "quest",
    respond: quest_reading,
  },
  KeywordResponse {
    keyword: "hello",
    topic:   "greeting",
    respond: |ctx| {
      format!(
        "Well met, {}. Ask of skills, quests, or the road ahead.",
        name_of(ctx)
      )
    },
  },
];

const FALLBACK: &str = "The Oracle senses great potential in your journey. \
                        Keep pushing forward, adventurer.";

/// Produce the Oracle's reply to `message`.
///
/// Deterministic: the same message with the same profile/skill snapshot
/// always yields the same reply.
pub fn oracle_chat(
  message: &str,
  profile: Option<&PlayerProfile>,
  skills: &[Skill],
) -> OracleReply {
  let lowered = message.to_lowercase();
  let ctx = ChatContext { profile, skills };

  for entry in RESPONSES {
    if lowered.contains(entry.keyword) {
      return OracleReply {
        text:  (entry.respond)(&ctx),
        topic: entry.topic.to_string(),
      };
    }
  }

  OracleReply {
    text:  FALLBACK.to_string(),
    topic: "unknown".to_string(),
  }
}

// ─── Templates ───────────────────────────────────────────────────────────────

fn name_of<'a>(ctx: &ChatContext<'a>) -> &'a str {
  ctx.profile.map_or("adventurer", |p| p.name.as_str())
}

fn title_of<'a>(ctx: &ChatContext<'a>) -> &'a str {
  ctx.profile.map_or("wandering developer", |p| p.title.as_str())
}

fn skill_reading(ctx: &ChatContext<'_>) -> String {
  let unlocked: Vec<&Skill> =
    ctx.skills.iter().filter(|s| s.unlocked).collect();

  let best = unlocked.iter().max_by_key(|s| s.level);
  match best {
    Some(best) => format!(
      "Your skill tree holds {} awakened arts. {} burns brightest at level \
       {} — deepen your expertise there before chasing new magic.",
      unlocked.len(),
      best.name,
      best.level
    ),
    None => {
      "Your skill tree sleeps. Unlock a first art and the path will show \
       itself."
        .to_string()
    }
  }
}

fn progress_reading(ctx: &ChatContext<'_>) -> String {
  match ctx.profile {
    Some(p) => format!(
      "You stand at level {}, {} XP along the road. {} more and level {} \
       opens before you.",
      p.level,
      p.xp,
      p.xp_next_level - p.xp,
      p.level + 1
    ),
    None => "Your legend is not yet written in the ledger.".to_string(),
  }
}

fn stats_reading(ctx: &ChatContext<'_>) -> String {
  match ctx.profile {
    Some(p) => format!(
      "The ledger reads STR {}, INT {}, DEX {}, WIS {}. These numbers only \
       rise — act, and they follow.",
      p.strength, p.intelligence, p.dexterity, p.wisdom
    ),
    None => "No ledger, no numbers. Begin, and they will appear.".to_string(),
  }
}

fn quest_reading(ctx: &ChatContext<'_>) -> String {
  format!(
    "Every repository is a quest scroll, {}. Finish the one nearest done; \
     momentum is its own reward.",
    name_of(ctx)
  )
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use devquest_core::skill::SkillCategory;

  use super::*;

  fn profile() -> PlayerProfile {
    PlayerProfile {
      name:            "Renan Carvalho".into(),
      title:           "Full-Stack Mage".into(),
      dev_class:       "Full-Stack Mage".into(),
      avatar_initials: "RC".into(),
      level:           15,
      xp:              6450,
      xp_next_level:   10000,
      strength:        72,
      intelligence:    88,
      dexterity:       65,
      wisdom:          70,
    }
  }

  fn skills() -> Vec<Skill> {
    vec![
      Skill {
        skill_id:      "react".into(),
        name:          "React".into(),
        category:      SkillCategory::Frontend,
        category_name: "Frontend Arcana".into(),
        level:         4,
        max_level:     5,
        unlocked:      true,
        description:   String::new(),
        color:         "#8b5cf6".into(),
        projects:      vec![],
      },
      Skill {
        skill_id:      "docker".into(),
        name:          "Docker".into(),
        category:      SkillCategory::Backend,
        category_name: "Backend Warfare".into(),
        level:         0,
        max_level:     5,
        unlocked:      false,
        description:   String::new(),
        color:         "#3b82f6".into(),
        projects:      vec![],
      },
    ]
  }

  #[test]
  fn skill_branch_wins_over_later_keywords() {
    // The message also contains "level" and "xp"-adjacent words; "skill" is
    // declared first and must win.
    let p = profile();
    let reply =
      oracle_chat("Tell me about my skills and my level and xp", Some(&p), &skills());
    assert_eq!(reply.topic, "skill");
    assert!(reply.text.contains("React"));
  }

  #[test]
  fn replies_are_deterministic() {
    let p = profile();
    let s = skills();
    let a = oracle_chat("Tell me about my skills", Some(&p), &s);
    let b = oracle_chat("Tell me about my skills", Some(&p), &s);
    assert_eq!(a, b);
  }

  #[test]
  fn matching_is_case_insensitive() {
    let reply = oracle_chat("WHAT IS MY LEVEL?", Some(&profile()), &[]);
    assert_eq!(reply.topic, "progress");
    assert!(reply.text.contains("level 15"));
  }

  #[test]
  fn no_match_falls_back_to_unknown() {
    let reply = oracle_chat("the weather is nice today", Some(&profile()), &[]);
    assert_eq!(reply.topic, "unknown");
    assert_eq!(reply.text, FALLBACK);
  }

  #[test]
  fn works_without_a_profile_snapshot() {
    let reply = oracle_chat("hello there", None, &[]);
    assert_eq!(reply.topic, "greeting");
    assert!(reply.text.contains("adventurer"));
  }

  #[test]
  fn career_reading_substitutes_name_and_title() {
    let p = profile();
    let reply = oracle_chat("where is my career headed?", Some(&p), &[]);
    assert_eq!(reply.topic, "career");
    assert!(reply.text.contains("Renan Carvalho"));
    assert!(reply.text.contains("Full-Stack Mage"));
  }

  #[test]
  fn skill_reading_counts_only_unlocked_skills() {
    let reply = oracle_chat("skills?", Some(&profile()), &skills());
    assert!(reply.text.contains("1 awakened arts"));
  }
}
