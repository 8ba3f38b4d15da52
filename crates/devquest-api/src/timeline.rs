//! Static career timeline data for the Chronicle view.
//!
//! Pure presentation data with no store counterpart; it changes when the
//! career does, by editing this table.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TimelineEntry {
  pub id:          &'static str,
  pub category:    &'static str,
  pub year:        &'static str,
  #[serde(rename = "yearEnd")]
  pub year_end:    Option<&'static str>,
  pub title:       &'static str,
  pub place:       &'static str,
  pub description: &'static str,
  pub skills:      &'static [&'static str],
  pub color:       &'static str,
  pub icon:        &'static str,
}

pub const ENTRIES: &[TimelineEntry] = &[
  // Experience
  TimelineEntry {
    id:          "exp-senai",
    category:    "experience",
    year:        "2025",
    year_end:    None,
    title:       "Residente em Inteligência Artificial",
    place:       "SENAI/SC",
    description: "Residência em IA aplicada: Machine Learning, Deep Learning, \
                  Computer Vision, IA Generativa, Otimização e IA Embarcada. \
                  Desenvolvimento de soluções end-to-end com deploy em \
                  produção.",
    skills:      &[
      "Python",
      "Machine Learning",
      "Deep Learning",
      "Computer Vision",
      "Generative AI",
      "FastAPI",
    ],
    color:       "#f0c040",
    icon:        "brain",
  },
  TimelineEntry {
    id:          "exp-paradigma-n2",
    category:    "experience",
    year:        "2024",
    year_end:    Some("2025"),
    title:       "Analista de Suporte N2",
    place:       "ParadigmaBS",
    description: "Suporte nível 2 com foco em resolução avançada: T-SQL, \
                  triggers, procedures, integração XML/SOAP, correção de \
                  bugs, melhoria de processos e documentação técnica.",
    skills:      &["T-SQL", "XML", "SOAP", "Bug Fixing", "Documentation"],
    color:       "#8b5cf6",
    icon:        "terminal",
  },
  TimelineEntry {
    id:          "exp-paradigma-n1",
    category:    "experience",
    year:        "2022",
    year_end:    Some("2024"),
    title:       "Analista de Suporte",
    place:       "ParadigmaBS",
    description: "Análise e resolução de chamados técnicos, consultas em \
                  banco de dados, pull requests, suporte ao cliente com \
                  integração T-SQL, XML e SOAP.",
    skills:      &["T-SQL", "XML", "SOAP", "API Analysis", "SQL"],
    color:       "#8b5cf6",
    icon:        "headset",
  },
  TimelineEntry {
    id:          "exp-paradigma-intern",
    category:    "experience",
    year:        "2022",
    year_end:    None,
    title:       "Estagiário",
    place:       "ParadigmaBS",
    description: "Estágio em suporte técnico: diagnósticos, consultas SQL, \
                  correção de bugs e atendimento ao cliente.",
    skills:      &["T-SQL", "SQL", "Diagnostics"],
    color:       "#3b82f6",
    icon:        "code",
  },
  TimelineEntry {
    id:          "exp-softplan-fin",
    category:    "experience",
    year:        "2020",
    year_end:    Some("2021"),
    title:       "Assistente Financeiro",
    place:       "Softplan",
    description: "Operações financeiras e controle administrativo em empresa \
                  de tecnologia jurídica.",
    skills:      &["Finance", "Administration"],
    color:       "#3b82f6",
    icon:        "briefcase",
  },
  TimelineEntry {
    id:          "exp-softplan-apprentice",
    category:    "experience",
    year:        "2018",
    year_end:    Some("2020"),
    title:       "Jovem Aprendiz",
    place:       "Softplan",
    description: "Programa de aprendizagem em empresa de tecnologia, com \
                  exposição a processos corporativos e desenvolvimento \
                  profissional.",
    skills:      &["Teamwork", "Professional Development"],
    color:       "#22c55e",
    icon:        "seedling",
  },
  // Education
  TimelineEntry {
    id:          "edu-senai",
    category:    "education",
    year:        "2025",
    year_end:    Some("2026"),
    title:       "Pós-graduação em IA Aplicada",
    place:       "SENAI/SC",
    description: "Especialização em Inteligência Artificial aplicada à \
                  indústria, com foco em visão computacional, deep learning \
                  e deploy de modelos.",
    skills:      &["AI", "Deep Learning", "Computer Vision", "MLOps"],
    color:       "#f0c040",
    icon:        "graduation",
  },
  TimelineEntry {
    id:          "edu-estacio",
    category:    "education",
    year:        "2020",
    year_end:    Some("2024"),
    title:       "Bacharel em Sistemas de Informação",
    place:       "Estácio de Sá — Florianópolis",
    description: "Bacharelado em Sistemas de Informação com ênfase em \
                  desenvolvimento de software, banco de dados e engenharia \
                  de sistemas.",
    skills:      &["Software Engineering", "Databases", "Systems Analysis"],
    color:       "#22c55e",
    icon:        "book",
  },
  // Awards
  TimelineEntry {
    id:          "award-actinspace",
    category:    "awards",
    year:        "2026",
    year_end:    None,
    title:       "Hackathon ActInSpace — 1º Lugar",
    place:       "Representando o Brasil na França",
    description: "Primeiro lugar no hackathon internacional ActInSpace, \
                  representando o Brasil na competição final na França com \
                  solução inovadora baseada em tecnologia espacial.",
    skills:      &["Innovation", "Space Tech", "Teamwork", "Pitch"],
    color:       "#f0c040",
    icon:        "trophy",
  },
  TimelineEntry {
    id:          "award-akcit",
    category:    "awards",
    year:        "2025",
    year_end:    None,
    title:       "Hackathon AKCIT — 2º Lugar",
    place:       "Projeto com IA Generativa",
    description: "Segundo lugar no hackathon AKCIT com projeto utilizando \
                  Inteligência Artificial Generativa para solução de \
                  problemas reais.",
    skills:      &["Generative AI", "Hackathon", "Rapid Prototyping"],
    color:       "#8b5cf6",
    icon:        "medal",
  },
  // Certifications
  TimelineEntry {
    id:          "cert-mobile",
    category:    "certifications",
    year:        "2023",
    year_end:    None,
    title:       "Programação para Dispositivos Móveis",
    place:       "Certificação Profissional",
    description: "Desenvolvimento de aplicações móveis multiplataforma.",
    skills:      &["Mobile Development"],
    color:       "#3b82f6",
    icon:        "smartphone",
  },
  TimelineEntry {
    id:          "cert-web",
    category:    "certifications",
    year:        "2023",
    year_end:    None,
    title:       "Programação para Internet",
    place:       "Certificação Profissional",
    description: "Desenvolvimento web front-end e back-end.",
    skills:      &["Web Development"],
    color:       "#3b82f6",
    icon:        "globe",
  },
  TimelineEntry {
    id:          "cert-governance",
    category:    "certifications",
    year:        "2022",
    year_end:    None,
    title:       "Implantação de Governança de T.I.",
    place:       "Certificação Profissional",
    description: "Frameworks e práticas de governança em tecnologia da \
                  informação.",
    skills:      &["IT Governance", "ITIL"],
    color:       "#8b5cf6",
    icon:        "shield",
  },
  TimelineEntry {
    id:          "cert-git",
    category:    "certifications",
    year:        "2022",
    year_end:    None,
    title:       "O Básico de Git e GitHub",
    place:       "Certificação Profissional",
    description: "Controle de versão com Git e colaboração via GitHub.",
    skills:      &["Git", "GitHub"],
    color:       "#22c55e",
    icon:        "git",
  },
  TimelineEntry {
    id:          "cert-bigdata",
    category:    "certifications",
    year:        "2023",
    year_end:    None,
    title:       "Soluções de Big Data Analytics",
    place:       "Certificação Profissional",
    description: "Desenvolvimento de soluções analíticas com Big Data.",
    skills:      &["Big Data", "Analytics", "Power BI"],
    color:       "#22c55e",
    icon:        "database",
  },
];
