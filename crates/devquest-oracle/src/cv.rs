//! The mock CV analyzer.
//!
//! Scores are derived from a hash of the filename, so the same file name
//! always yields the same analysis payload while different names land on
//! different variants.

use devquest_core::cv::{CvReport, SectionScore};
use sha2::{Digest as _, Sha256};

const MAX_SCORE: i64 = 95;

/// Hash the filename down to the integer the variant selection runs on.
fn filename_hash(filename: &str) -> u64 {
  let digest = Sha256::digest(filename.as_bytes());
  u64::from_be_bytes(digest[..8].try_into().expect("digest is 32 bytes"))
}

/// Produce a deterministic mock analysis for an uploaded CV.
///
/// `file_size` is recorded by the caller but does not influence the scores;
/// only the filename does.
pub fn analyze_cv(filename: &str, _file_size: i64) -> CvReport {
  let h = filename_hash(filename);
  let base_score = 72 + (h % 21) as i64;
  let idx = (h % 3) as usize;

  CvReport {
    score:      base_score.min(MAX_SCORE),
    sections:   sections_variant(idx, h),
    strengths:  STRENGTHS_POOL[idx].iter().map(|s| s.to_string()).collect(),
    weaknesses: WEAKNESSES_POOL[idx].iter().map(|s| s.to_string()).collect(),
    tips:       TIPS_POOL[idx].iter().map(|s| s.to_string()).collect(),
  }
}

// ─── Section pools ───────────────────────────────────────────────────────────

struct SectionTemplate {
  name:     &'static str,
  base:     i64,
  spread:   u64,
  cap:      i64,
  feedback: &'static str,
}

impl SectionTemplate {
  fn score(&self, h: u64) -> SectionScore {
    SectionScore {
      name:     self.name.to_string(),
      score:    (self.base + (h % self.spread) as i64).min(self.cap),
      feedback: self.feedback.to_string(),
    }
  }
}

fn sections_variant(idx: usize, h: u64) -> Vec<SectionScore> {
  SECTION_POOLS[idx].iter().map(|t| t.score(h)).collect()
}

const SECTION_POOLS: [[SectionTemplate; 5]; 3] = [
  [
    SectionTemplate {
      name:     "Formatting",
      base:     85,
      spread:   10,
      cap:      98,
      feedback: "Clean layout with consistent spacing. ATS-friendly format \
                 detected.",
    },
    SectionTemplate {
      name:     "Keywords",
      base:     70,
      spread:   15,
      cap:      95,
      feedback: "Good technical keywords present. Consider adding more \
                 industry-specific terms.",
    },
    SectionTemplate {
      name:     "Experience",
      base:     80,
      spread:   12,
      cap:      97,
      feedback: "Strong action verbs and quantified achievements throughout.",
    },
    SectionTemplate {
      name:     "Skills",
      base:     75,
      spread:   18,
      cap:      96,
      feedback: "Comprehensive skill list. Consider grouping by proficiency \
                 level.",
    },
    SectionTemplate {
      name:     "Education",
      base:     82,
      spread:   10,
      cap:      95,
      feedback: "Education section well-structured with relevant coursework.",
    },
  ],
  [
    SectionTemplate {
      name:     "Formatting",
      base:     78,
      spread:   12,
      cap:      96,
      feedback: "Professional layout. Consider adding more whitespace \
                 between sections.",
    },
    SectionTemplate {
      name:     "Keywords",
      base:     82,
      spread:   10,
      cap:      97,
      feedback: "Strong keyword density for target roles. Well-optimized \
                 for ATS.",
    },
    SectionTemplate {
      name:     "Experience",
      base:     74,
      spread:   14,
      cap:      95,
      feedback: "Good role descriptions. Add more quantified metrics to \
                 strengthen impact.",
    },
    SectionTemplate {
      name:     "Skills",
      base:     80,
      spread:   13,
      cap:      98,
      feedback: "Well-organized skills with clear categorization and \
                 relevance.",
    },
    SectionTemplate {
      name:     "Education",
      base:     76,
      spread:   11,
      cap:      94,
      feedback: "Solid academic background. Highlight relevant projects and \
                 coursework.",
    },
  ],
  [
    SectionTemplate {
      name:     "Formatting",
      base:     80,
      spread:   14,
      cap:      97,
      feedback: "Modern format with good visual hierarchy and readability.",
    },
    SectionTemplate {
      name:     "Keywords",
      base:     76,
      spread:   12,
      cap:      96,
      feedback: "Decent keyword coverage. Tailor keywords to specific job \
                 descriptions.",
    },
    SectionTemplate {
      name:     "Experience",
      base:     84,
      spread:   10,
      cap:      98,
      feedback: "Excellent experience section with clear progression and \
                 impact statements.",
    },
    SectionTemplate {
      name:     "Skills",
      base:     78,
      spread:   15,
      cap:      97,
      feedback: "Good technical skills listed. Consider adding soft skills \
                 and certifications.",
    },
    SectionTemplate {
      name:     "Education",
      base:     80,
      spread:   13,
      cap:      96,
      feedback: "Education aligns well with career goals. GPA and honors \
                 noted.",
    },
  ],
];

const STRENGTHS_POOL: [[&str; 3]; 3] = [
  [
    "Clear technical focus and specialization",
    "Quantified achievements with metrics",
    "ATS-optimized format and structure",
  ],
  [
    "Strong project descriptions with impact",
    "Good keyword density for target roles",
    "Professional summary captures attention",
  ],
  [
    "Well-organized sections with hierarchy",
    "Relevant skill grouping by domain",
    "Action-oriented language throughout",
  ],
];

const WEAKNESSES_POOL: [[&str; 3]; 3] = [
  [
    "Could add more quantified metrics",
    "Professional summary section missing",
    "Skills need proficiency levels",
  ],
  [
    "Experience dates could be clearer",
    "Missing portfolio/GitHub links",
    "Some sections lack detail",
  ],
  [
    "No certifications section found",
    "Contact information could be expanded",
    "Inconsistent formatting in places",
  ],
];

const TIPS_POOL: [[&str; 3]; 3] = [
  [
    "Add a professional summary at the top highlighting your unique value",
    "Quantify achievements with numbers and percentages",
    "Include GitHub and portfolio links in the header",
  ],
  [
    "Tailor keywords to each specific job description you apply for",
    "Use consistent date formatting throughout (MM/YYYY)",
    "Add relevant certifications and training programs",
  ],
  [
    "Group technical skills by category for easier scanning",
    "Lead each role with your strongest accomplishment",
    "Keep the CV to 1-2 pages for maximum impact",
  ],
];

// ─── Tests ───────────────────────────────────────────────────────────────────
